//! Frame specifications and their resolution against a source image.
//!
//! A [`FrameSpec`] is either absolute pixels or an aspect ratio. Ratio frames
//! only become concrete once a source size is known; [`ResolveMode`] decides
//! which source axis is kept when projecting the ratio onto it.
//!
//! ```
//! use framefit::{FrameSpec, ResolveMode, Size};
//!
//! let wide = FrameSpec::ratio(2, 1);
//! let source = Size::new(800, 600);
//!
//! // Shrink keeps the ratio's long axis at the source's length on that axis.
//! assert_eq!(wide.resolve(source, ResolveMode::Shrink).unwrap(), Size::new(800, 400));
//! // Grow keeps the ratio's short axis instead.
//! assert_eq!(wide.resolve(source, ResolveMode::Grow).unwrap(), Size::new(1200, 600));
//! ```

use crate::error::FitError;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both axes are at least one pixel.
    pub const fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether this size fits inside `other` on both axes.
    pub const fn fits_within(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Whether this size covers `other` on both axes.
    pub const fn covers(&self, other: Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect lies entirely within `(0, 0, bounds.width, bounds.height)`.
    pub fn is_within(&self, bounds: Size) -> bool {
        self.x as u64 + self.width as u64 <= bounds.width as u64
            && self.y as u64 + self.height as u64 <= bounds.height as u64
    }
}

/// How the width and height of a [`FrameSpec`] are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// Literal output pixels.
    Pixel,
    /// Only the proportion `width:height` matters; magnitude comes from the source.
    Ratio,
}

/// Which concrete frame to derive from a spec.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    /// Pixel frames only. Ratio frames are rejected.
    Exact,
    /// Frame the source shrinks into: the ratio's longer axis takes the
    /// source's length on that axis. Square ratios use the shorter source side.
    Shrink,
    /// Frame the source grows to cover: the ratio's shorter axis takes the
    /// source's length on that axis. Square ratios use the longer source side.
    Grow,
}

/// Requested target shape.
///
/// Immutable value; resolve it against a source with [`resolve`](Self::resolve).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameSpec {
    pub width: u32,
    pub height: u32,
    pub kind: DimensionKind,
}

impl FrameSpec {
    /// Absolute pixel frame.
    pub const fn pixels(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            kind: DimensionKind::Pixel,
        }
    }

    /// Aspect ratio frame, e.g. `ratio(16, 9)`.
    pub const fn ratio(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            kind: DimensionKind::Ratio,
        }
    }

    /// Resolve this frame against a source using `mode`.
    pub fn resolve(&self, source: Size, mode: ResolveMode) -> Result<Size, FitError> {
        match mode {
            ResolveMode::Exact => self.resolve_exact(source),
            ResolveMode::Shrink => self.resolve_for_shrink(source),
            ResolveMode::Grow => self.resolve_for_grow(source),
        }
    }

    /// Pixel frames pass through; ratio frames are an [`FitError::InvalidSpec`].
    pub fn resolve_exact(&self, source: Size) -> Result<Size, FitError> {
        self.validate(source)?;
        match self.kind {
            DimensionKind::Pixel => Ok(Size::new(self.width, self.height)),
            DimensionKind::Ratio => Err(FitError::InvalidSpec(
                "ratio frame cannot be used as an exact pixel target",
            )),
        }
    }

    /// Largest frame at this ratio that keeps the ratio's long axis at the
    /// source's length. Pixel frames pass through.
    pub fn resolve_for_shrink(&self, source: Size) -> Result<Size, FitError> {
        self.validate(source)?;
        match self.kind {
            DimensionKind::Pixel => Ok(Size::new(self.width, self.height)),
            DimensionKind::Ratio => project_ratio(self.width, self.height, source, true),
        }
    }

    /// Frame at this ratio that keeps the ratio's short axis at the source's
    /// length. Pixel frames pass through.
    pub fn resolve_for_grow(&self, source: Size) -> Result<Size, FitError> {
        self.validate(source)?;
        match self.kind {
            DimensionKind::Pixel => Ok(Size::new(self.width, self.height)),
            DimensionKind::Ratio => project_ratio(self.width, self.height, source, false),
        }
    }

    fn validate(&self, source: Size) -> Result<(), FitError> {
        if self.width == 0 || self.height == 0 {
            return Err(FitError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !source.is_positive() {
            return Err(FitError::InvalidDimension {
                width: source.width,
                height: source.height,
            });
        }
        Ok(())
    }
}

/// Resolve `spec` against a `source_w`×`source_h` image.
pub fn resolve(
    spec: &FrameSpec,
    source_w: u32,
    source_h: u32,
    mode: ResolveMode,
) -> Result<Size, FitError> {
    let resolved = spec.resolve(Size::new(source_w, source_h), mode);
    tracing::trace!(?spec, source_w, source_h, ?mode, ?resolved, "resolve frame");
    resolved
}

/// Project a `ratio_w:ratio_h` ratio onto the source.
///
/// One axis is held at the source length and the other is floored from the
/// ratio. `hold_longer_axis` picks whether the ratio's longer or shorter axis
/// is the held one; for square ratios it picks the shorter or longer source side.
fn project_ratio(
    ratio_w: u32,
    ratio_h: u32,
    source: Size,
    hold_longer_axis: bool,
) -> Result<Size, FitError> {
    if ratio_w == ratio_h {
        let side = if hold_longer_axis {
            source.width.min(source.height)
        } else {
            source.width.max(source.height)
        };
        return Ok(Size::new(side, side));
    }

    let hold_width = (ratio_w > ratio_h) == hold_longer_axis;
    let (width, height) = if hold_width {
        let h = source.width as u64 * ratio_h as u64 / ratio_w as u64;
        (source.width as u64, h)
    } else {
        let w = source.height as u64 * ratio_w as u64 / ratio_h as u64;
        (w, source.height as u64)
    };

    let clamp = |v: u64| u32::try_from(v.max(1)).ok();
    match (clamp(width), clamp(height)) {
        (Some(w), Some(h)) => Ok(Size::new(w, h)),
        _ => Err(FitError::InvalidDimension {
            width: width.min(u32::MAX as u64) as u32,
            height: height.min(u32::MAX as u64) as u32,
        }),
    }
}
