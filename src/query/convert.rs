//! Instructions → Policy conversion.

use super::instructions::Instructions;
use crate::error::FitError;
use crate::fit::{FitMode, Policy};
use crate::frame::{DimensionKind, FrameSpec, ResolveMode, Size};

impl Instructions {
    /// Build a concrete [`Policy`] for a `source_w`×`source_h` source.
    ///
    /// With an explicit `mode`, the frame is resolved the way that mode
    /// resolves it. Without one:
    ///
    /// - `scale` alone → [`Policy::ScaleFactor`]
    /// - `w` and `h` → [`Policy::ScaleDown`]
    /// - only `w` → [`Policy::ScaleByWidth`], only `h` → [`Policy::ScaleByHeight`]
    ///
    /// Missing dimensions for the chosen mode are [`FitError::InvalidSpec`].
    pub fn to_policy(&self, source_w: u32, source_h: u32) -> Result<Policy, FitError> {
        let source = Size::new(source_w, source_h);
        let kind = self.kind.unwrap_or(DimensionKind::Pixel);

        let Some(mode) = self.mode else {
            return self.implicit_policy(source, kind);
        };

        match mode {
            FitMode::ScaleByWidth => {
                let w = self
                    .w
                    .ok_or(FitError::InvalidSpec("mode=width requires w"))?;
                single_axis(kind)?;
                Ok(Policy::ScaleByWidth(w))
            }
            FitMode::ScaleByHeight => {
                let h = self
                    .h
                    .ok_or(FitError::InvalidSpec("mode=height requires h"))?;
                single_axis(kind)?;
                Ok(Policy::ScaleByHeight(h))
            }
            _ => {
                let (Some(w), Some(h)) = (self.w, self.h) else {
                    return Err(FitError::InvalidSpec("mode requires both w and h"));
                };
                let frame = FrameSpec {
                    width: w,
                    height: h,
                    kind,
                };
                mode.policy(&frame, source, self.bgcolor.unwrap_or_default())
            }
        }
    }

    fn implicit_policy(&self, source: Size, kind: DimensionKind) -> Result<Policy, FitError> {
        if let Some(factor) = self.factor {
            return Ok(Policy::ScaleFactor(factor));
        }
        match (self.w, self.h) {
            (Some(w), Some(h)) => {
                let frame = FrameSpec {
                    width: w,
                    height: h,
                    kind,
                };
                Ok(Policy::ScaleDown(frame.resolve(source, ResolveMode::Shrink)?))
            }
            (Some(w), None) => {
                single_axis(kind)?;
                Ok(Policy::ScaleByWidth(w))
            }
            (None, Some(h)) => {
                single_axis(kind)?;
                Ok(Policy::ScaleByHeight(h))
            }
            (None, None) => Err(FitError::InvalidSpec("no dimensions or scale factor given")),
        }
    }
}

/// A single dimension only means something in pixels.
fn single_axis(kind: DimensionKind) -> Result<(), FitError> {
    match kind {
        DimensionKind::Pixel => Ok(()),
        DimensionKind::Ratio => Err(FitError::InvalidSpec(
            "a single ratio dimension has no meaning",
        )),
    }
}
