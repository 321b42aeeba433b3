//! Fit planning: how a source image maps onto a resolved target frame.
//!
//! Every planner is a pure function of its inputs and returns a [`FitPlan`]
//! describing the scaled size, the final canvas, and the pad placement or
//! crop origin. Executing the plan on pixels is left to the caller.
//!
//! # Example
//!
//! ```
//! use framefit::{FitAction, Size, plan_scale_up_and_crop};
//!
//! // 300×100 grows 5× to cover 500×500, then the center 500×500 is kept.
//! let plan = plan_scale_up_and_crop(300, 100, 500, 500).unwrap();
//! assert_eq!(plan.action, FitAction::ScaleAndCrop);
//! assert_eq!(plan.scaled, Size::new(1500, 500));
//! assert_eq!(plan.offset, (500, 0));
//! assert_eq!(plan.canvas, Size::new(500, 500));
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::color::CanvasColor;
use crate::error::FitError;
use crate::frame::{FrameSpec, Rect, ResolveMode, Size};

/// What the executor has to do with the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FitAction {
    /// Source already satisfies the policy; emit it unchanged.
    None,
    /// Resample to `scaled`.
    Scale,
    /// Resample to `scaled`, then place at `offset` on a `canvas` filled with `canvas_color`.
    ScaleAndPad,
    /// Resample to `scaled`, then keep the `canvas`-sized rectangle at `offset`.
    ScaleAndCrop,
}

/// Complete geometric instruction for one fitting operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FitPlan {
    pub action: FitAction,
    /// Dimensions to resample the source to.
    pub scaled: Size,
    /// Pad: top-left of the scaled image on the canvas.
    /// Crop: top-left of the kept rectangle inside the scaled image.
    pub offset: (u32, u32),
    /// Final output dimensions.
    pub canvas: Size,
    /// Fill for padding areas. Only meaningful for [`FitAction::ScaleAndPad`].
    pub canvas_color: CanvasColor,
}

impl FitPlan {
    fn unchanged(source: Size) -> Self {
        Self {
            action: FitAction::None,
            scaled: source,
            offset: (0, 0),
            canvas: source,
            canvas_color: CanvasColor::default(),
        }
    }

    fn scale_to(scaled: Size) -> Self {
        Self {
            action: FitAction::Scale,
            scaled,
            offset: (0, 0),
            canvas: scaled,
            canvas_color: CanvasColor::default(),
        }
    }

    /// Whether resampling changes the source dimensions.
    pub fn needs_resize(&self, source: Size) -> bool {
        self.action != FitAction::None && self.scaled != source
    }

    /// Whether the scaled image is placed on a larger background canvas.
    pub fn needs_padding(&self) -> bool {
        self.action == FitAction::ScaleAndPad
    }

    /// Whether part of the scaled image is cut away.
    pub fn needs_crop(&self) -> bool {
        self.action == FitAction::ScaleAndCrop
    }

    /// Rectangle kept from the scaled image, for crop plans.
    pub fn crop_rect(&self) -> Option<Rect> {
        self.needs_crop().then(|| {
            Rect::new(
                self.offset.0,
                self.offset.1,
                self.canvas.width,
                self.canvas.height,
            )
        })
    }
}

/// Fit policy together with its target parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    /// Forced resize to exact dimensions, aspect ratio not preserved.
    Resize(Size),
    /// Multiply both axes by a factor.
    ScaleFactor(f64),
    /// Set width, derive height proportionally.
    ScaleByWidth(u32),
    /// Set height, derive width proportionally.
    ScaleByHeight(u32),
    /// Shrink to fit inside the target. Never enlarges.
    ScaleDown(Size),
    /// [`ScaleDown`](Self::ScaleDown), then letterbox onto the full target.
    ScaleDownWithBackground(Size, CanvasColor),
    /// Grow to cover the target. Never shrinks.
    ScaleUp(Size),
    /// [`ScaleUp`](Self::ScaleUp), then center-crop to the target.
    ScaleUpAndCrop(Size),
}

impl Policy {
    /// Plan this policy for a `source_w`×`source_h` source.
    pub fn plan(&self, source_w: u32, source_h: u32) -> Result<FitPlan, FitError> {
        let (sw, sh) = (source_w, source_h);
        match *self {
            Policy::Resize(t) => plan_exact(sw, sh, t.width, t.height),
            Policy::ScaleFactor(factor) => plan_scale_by_factor(sw, sh, factor),
            Policy::ScaleByWidth(tw) => plan_scale_by_width(sw, sh, tw),
            Policy::ScaleByHeight(th) => plan_scale_by_height(sw, sh, th),
            Policy::ScaleDown(t) => plan_scale_down(sw, sh, t.width, t.height),
            Policy::ScaleDownWithBackground(t, bg) => {
                plan_scale_down_with_background(sw, sh, t.width, t.height, bg)
            }
            Policy::ScaleUp(t) => plan_scale_up(sw, sh, t.width, t.height),
            Policy::ScaleUpAndCrop(t) => plan_scale_up_and_crop(sw, sh, t.width, t.height),
        }
    }
}

/// Frame-driven policy kind, without target parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FitMode {
    Resize,
    ScaleByWidth,
    ScaleByHeight,
    ScaleDown,
    ScaleDownWithBackground,
    ScaleUp,
    ScaleUpAndCrop,
}

impl FitMode {
    /// How a ratio frame is turned into pixels for this mode.
    ///
    /// Shrinking modes use [`ResolveMode::Shrink`], growing modes use
    /// [`ResolveMode::Grow`]; the rest need pixel frames.
    pub const fn resolve_mode(self) -> ResolveMode {
        match self {
            FitMode::ScaleDown | FitMode::ScaleDownWithBackground => ResolveMode::Shrink,
            FitMode::ScaleUp | FitMode::ScaleUpAndCrop => ResolveMode::Grow,
            FitMode::Resize | FitMode::ScaleByWidth | FitMode::ScaleByHeight => {
                ResolveMode::Exact
            }
        }
    }

    /// Resolve `frame` against `source` and build the concrete policy.
    ///
    /// `background` only matters for [`FitMode::ScaleDownWithBackground`].
    pub fn policy(
        self,
        frame: &FrameSpec,
        source: Size,
        background: CanvasColor,
    ) -> Result<Policy, FitError> {
        let target = frame.resolve(source, self.resolve_mode())?;
        Ok(match self {
            FitMode::Resize => Policy::Resize(target),
            FitMode::ScaleByWidth => Policy::ScaleByWidth(target.width),
            FitMode::ScaleByHeight => Policy::ScaleByHeight(target.height),
            FitMode::ScaleDown => Policy::ScaleDown(target),
            FitMode::ScaleDownWithBackground => Policy::ScaleDownWithBackground(target, background),
            FitMode::ScaleUp => Policy::ScaleUp(target),
            FitMode::ScaleUpAndCrop => Policy::ScaleUpAndCrop(target),
        })
    }
}

/// Plan `policy` for a `source_w`×`source_h` source.
pub fn plan(policy: &Policy, source_w: u32, source_h: u32) -> Result<FitPlan, FitError> {
    let planned = policy.plan(source_w, source_h);
    tracing::trace!(?policy, source_w, source_h, ?planned, "plan fit");
    planned
}

/// Resize to exactly `tw`×`th`, ignoring aspect ratio.
pub fn plan_exact(sw: u32, sh: u32, tw: u32, th: u32) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    check_target(tw, th)?;
    Ok(FitPlan::scale_to(Size::new(tw, th)))
}

/// Scale both axes by `factor`, rounding half away from zero.
pub fn plan_scale_by_factor(sw: u32, sh: u32, factor: f64) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    if !(factor.is_finite() && factor > 0.0) {
        return Err(FitError::InvalidScaleFactor(factor));
    }
    let w = factor * sw as f64;
    let h = factor * sh as f64;
    Ok(FitPlan::scale_to(to_size(w, h)?))
}

/// Scale to width `tw`; height follows the source aspect ratio.
pub fn plan_scale_by_width(sw: u32, sh: u32, tw: u32) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    check_target(tw, 1)?;
    let scale = tw as f64 / sw as f64;
    Ok(FitPlan::scale_to(to_size(tw as f64, scale * sh as f64)?))
}

/// Scale to height `th`; width follows the source aspect ratio.
pub fn plan_scale_by_height(sw: u32, sh: u32, th: u32) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    check_target(1, th)?;
    let scale = th as f64 / sh as f64;
    Ok(FitPlan::scale_to(to_size(scale * sw as f64, th as f64)?))
}

/// Shrink to fit inside `tw`×`th`, preserving aspect ratio.
///
/// Sources that already fit are left alone. Otherwise the axis that needs
/// the stronger reduction drives the scale, so both axes end up within the
/// target and the driving axis matches it exactly.
pub fn plan_scale_down(sw: u32, sh: u32, tw: u32, th: u32) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    check_target(tw, th)?;
    if Size::new(sw, sh).fits_within(Size::new(tw, th)) {
        return Ok(FitPlan::unchanged(Size::new(sw, sh)));
    }
    // th/sh <= tw/sw, compared exactly. Ties go to height.
    if th as u64 * sw as u64 <= tw as u64 * sh as u64 {
        plan_scale_by_height(sw, sh, th)
    } else {
        plan_scale_by_width(sw, sh, tw)
    }
}

/// Grow to cover `tw`×`th`, preserving aspect ratio.
///
/// Sources that already cover the target are left alone. Otherwise the axis
/// that needs the larger enlargement drives the scale, so both axes end up
/// at or beyond the target and the driving axis matches it exactly.
pub fn plan_scale_up(sw: u32, sh: u32, tw: u32, th: u32) -> Result<FitPlan, FitError> {
    check_source(sw, sh)?;
    check_target(tw, th)?;
    if Size::new(sw, sh).covers(Size::new(tw, th)) {
        return Ok(FitPlan::unchanged(Size::new(sw, sh)));
    }
    // th/sh >= tw/sw, compared exactly. Ties go to height.
    if th as u64 * sw as u64 >= tw as u64 * sh as u64 {
        plan_scale_by_height(sw, sh, th)
    } else {
        plan_scale_by_width(sw, sh, tw)
    }
}

/// [`plan_scale_down`], then center the result on a `tw`×`th` canvas filled with `bg`.
///
/// When the shrunk image already fills the target exactly, no padding is planned.
pub fn plan_scale_down_with_background(
    sw: u32,
    sh: u32,
    tw: u32,
    th: u32,
    bg: CanvasColor,
) -> Result<FitPlan, FitError> {
    let fitted = plan_scale_down(sw, sh, tw, th)?;
    let Size { width, height } = fitted.scaled;
    if width >= tw && height >= th {
        return Ok(fitted);
    }
    Ok(FitPlan {
        action: FitAction::ScaleAndPad,
        scaled: fitted.scaled,
        offset: (tw.saturating_sub(width) / 2, th.saturating_sub(height) / 2),
        canvas: Size::new(tw, th),
        canvas_color: bg,
    })
}

/// [`plan_scale_up`], then keep the centered `tw`×`th` rectangle.
///
/// When the grown image matches the target exactly, no crop is planned.
pub fn plan_scale_up_and_crop(sw: u32, sh: u32, tw: u32, th: u32) -> Result<FitPlan, FitError> {
    let grown = plan_scale_up(sw, sh, tw, th)?;
    let Size { width, height } = grown.scaled;
    if width <= tw && height <= th {
        return Ok(grown);
    }
    Ok(FitPlan {
        action: FitAction::ScaleAndCrop,
        scaled: grown.scaled,
        offset: (width.saturating_sub(tw) / 2, height.saturating_sub(th) / 2),
        canvas: Size::new(tw, th),
        canvas_color: grown.canvas_color,
    })
}

// ============================================================================
// Internal helpers
// ============================================================================

fn check_source(sw: u32, sh: u32) -> Result<(), FitError> {
    if sw == 0 || sh == 0 {
        return Err(FitError::DegenerateSource {
            width: sw,
            height: sh,
        });
    }
    Ok(())
}

fn check_target(tw: u32, th: u32) -> Result<(), FitError> {
    if tw == 0 || th == 0 {
        return Err(FitError::InvalidDimension {
            width: tw,
            height: th,
        });
    }
    Ok(())
}

/// Round both axes half away from zero. Zero clamps to one; values past
/// `u32::MAX` are rejected.
fn to_size(w: f64, h: f64) -> Result<Size, FitError> {
    let (w, h) = (w.round(), h.round());
    let limit = u32::MAX as f64;
    if !(w <= limit && h <= limit) {
        return Err(FitError::InvalidDimension {
            width: w.min(limit) as u32,
            height: h.min(limit) as u32,
        });
    }
    Ok(Size::new((w as u32).max(1), (h as u32).max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Exact / factor ──────────────────────────────────────────────────

    #[test]
    fn exact_ignores_aspect() {
        let p = plan_exact(1000, 500, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::Scale);
        assert_eq!(p.scaled, Size::new(400, 300));
        assert_eq!(p.canvas, Size::new(400, 300));
        assert_eq!(p.offset, (0, 0));
    }

    #[test]
    fn exact_same_size_still_scale_action() {
        let p = plan_exact(400, 300, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::Scale);
        assert!(!p.needs_resize(Size::new(400, 300)));
    }

    #[test]
    fn factor_rounds_half_away_from_zero() {
        // 5 * 0.5 = 2.5 → 3, 3 * 0.5 = 1.5 → 2
        let p = plan_scale_by_factor(5, 3, 0.5).unwrap();
        assert_eq!(p.scaled, Size::new(3, 2));
    }

    #[test]
    fn factor_upscale() {
        let p = plan_scale_by_factor(640, 480, 1.5).unwrap();
        assert_eq!(p.scaled, Size::new(960, 720));
    }

    #[test]
    fn factor_rejects_nonsense() {
        for f in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                plan_scale_by_factor(100, 100, f),
                Err(FitError::InvalidScaleFactor(_))
            ));
        }
    }

    #[test]
    fn factor_tiny_clamps_to_one_pixel() {
        let p = plan_scale_by_factor(100, 100, 0.001).unwrap();
        assert_eq!(p.scaled, Size::new(1, 1));
    }

    #[test]
    fn factor_overflow_rejected() {
        assert!(matches!(
            plan_scale_by_factor(u32::MAX, 10, 2.0),
            Err(FitError::InvalidDimension { .. })
        ));
    }

    // ── By width / height ───────────────────────────────────────────────

    #[test]
    fn by_width_derives_height() {
        let p = plan_scale_by_width(1000, 600, 500).unwrap();
        assert_eq!(p.scaled, Size::new(500, 300));
        assert_eq!(p.action, FitAction::Scale);
    }

    #[test]
    fn by_height_derives_width() {
        let p = plan_scale_by_height(1000, 600, 300).unwrap();
        assert_eq!(p.scaled, Size::new(500, 300));
    }

    #[test]
    fn by_width_rounds() {
        // 333/1000 * 500 = 166.5 → 167
        let p = plan_scale_by_width(1000, 500, 333).unwrap();
        assert_eq!(p.scaled, Size::new(333, 167));
    }

    #[test]
    fn by_width_zero_source_is_degenerate() {
        assert_eq!(
            plan_scale_by_width(0, 500, 100),
            Err(FitError::DegenerateSource {
                width: 0,
                height: 500
            })
        );
        assert!(matches!(
            plan_scale_by_height(500, 0, 100),
            Err(FitError::DegenerateSource { .. })
        ));
    }

    #[test]
    fn by_width_zero_target_rejected() {
        assert!(matches!(
            plan_scale_by_width(100, 100, 0),
            Err(FitError::InvalidDimension { .. })
        ));
    }

    // ── Scale down ──────────────────────────────────────────────────────

    #[test]
    fn scale_down_already_fits() {
        let p = plan_scale_down(200, 100, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::None);
        assert_eq!(p.scaled, Size::new(200, 100));
        assert!(!p.needs_resize(Size::new(200, 100)));
    }

    #[test]
    fn scale_down_driven_by_width() {
        // 1000×500 into 400×300: width needs 0.4, height 0.6 → width drives
        let p = plan_scale_down(1000, 500, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::Scale);
        assert_eq!(p.scaled, Size::new(400, 200));
    }

    #[test]
    fn scale_down_driven_by_height() {
        let p = plan_scale_down(500, 1000, 400, 300).unwrap();
        assert_eq!(p.scaled, Size::new(150, 300));
    }

    #[test]
    fn scale_down_one_axis_overflow() {
        // Only height overflows.
        let p = plan_scale_down(300, 900, 400, 300).unwrap();
        assert_eq!(p.scaled, Size::new(100, 300));
    }

    #[test]
    fn scale_down_same_aspect_ties_to_height() {
        let p = plan_scale_down(1000, 500, 400, 200).unwrap();
        assert_eq!(p.scaled, Size::new(400, 200));
    }

    #[test]
    fn scale_down_relative_overflow_beats_absolute() {
        // Raw differences favor width (100 > 90) but height needs 10×
        // reduction; driving by width would leave height at 90.
        let p = plan_scale_down(1000, 100, 900, 10).unwrap();
        assert_eq!(p.scaled, Size::new(100, 10));
    }

    // ── Scale up ────────────────────────────────────────────────────────

    #[test]
    fn scale_up_already_covers() {
        let p = plan_scale_up(1000, 800, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::None);
        assert_eq!(p.scaled, Size::new(1000, 800));
    }

    #[test]
    fn scale_up_driven_by_height() {
        let p = plan_scale_up(300, 100, 500, 500).unwrap();
        assert_eq!(p.scaled, Size::new(1500, 500));
    }

    #[test]
    fn scale_up_driven_by_width() {
        let p = plan_scale_up(100, 300, 500, 500).unwrap();
        assert_eq!(p.scaled, Size::new(500, 1500));
    }

    #[test]
    fn scale_up_grows_short_axis_past_long_one() {
        // Height already large, width short → grow by width even though
        // height ends well past target.
        let p = plan_scale_up(200, 1000, 400, 300).unwrap();
        assert_eq!(p.scaled, Size::new(400, 2000));
    }

    // ── Scale down with background ──────────────────────────────────────

    #[test]
    fn letterbox_wide_into_tall() {
        let p = plan_scale_down_with_background(1000, 500, 500, 600, CanvasColor::WHITE).unwrap();
        assert_eq!(p.action, FitAction::ScaleAndPad);
        assert_eq!(p.scaled, Size::new(500, 250));
        assert_eq!(p.offset, (0, 175));
        assert_eq!(p.canvas, Size::new(500, 600));
        assert_eq!(p.canvas_color, CanvasColor::WHITE);
        assert!(p.needs_padding());
    }

    #[test]
    fn letterbox_small_source_pads_without_scaling() {
        let p = plan_scale_down_with_background(100, 50, 400, 300, CanvasColor::GRAY).unwrap();
        assert_eq!(p.action, FitAction::ScaleAndPad);
        assert_eq!(p.scaled, Size::new(100, 50));
        assert_eq!(p.offset, (150, 125));
        assert_eq!(p.canvas_color, CanvasColor::GRAY);
        assert!(!p.needs_resize(Size::new(100, 50)));
    }

    #[test]
    fn letterbox_exact_aspect_no_padding() {
        let p = plan_scale_down_with_background(1000, 500, 400, 200, CanvasColor::BLACK).unwrap();
        assert_eq!(p.action, FitAction::Scale);
        assert_eq!(p.canvas, Size::new(400, 200));
    }

    #[test]
    fn letterbox_exact_size_is_untouched() {
        let p = plan_scale_down_with_background(400, 200, 400, 200, CanvasColor::BLACK).unwrap();
        assert_eq!(p.action, FitAction::None);
    }

    #[test]
    fn letterbox_odd_space_floors_offset() {
        // 1000×500 into 400×301 → 400×200, 101 spare rows → offset 50
        let p = plan_scale_down_with_background(1000, 500, 400, 301, CanvasColor::WHITE).unwrap();
        assert_eq!(p.offset, (0, 50));
    }

    // ── Scale up and crop ───────────────────────────────────────────────

    #[test]
    fn cover_crop_centered() {
        let p = plan_scale_up_and_crop(300, 100, 500, 500).unwrap();
        assert_eq!(p.action, FitAction::ScaleAndCrop);
        assert_eq!(p.scaled, Size::new(1500, 500));
        assert_eq!(p.offset, ((1500 - 500) / 2, 0));
        assert_eq!(p.crop_rect(), Some(Rect::new(500, 0, 500, 500)));
        assert!(p.crop_rect().unwrap().is_within(p.scaled));
    }

    #[test]
    fn cover_crop_large_source_crops_without_scaling() {
        let p = plan_scale_up_and_crop(1000, 800, 400, 300).unwrap();
        assert_eq!(p.action, FitAction::ScaleAndCrop);
        assert_eq!(p.scaled, Size::new(1000, 800));
        assert_eq!(p.offset, (300, 250));
    }

    #[test]
    fn cover_crop_exact_aspect_no_crop() {
        let p = plan_scale_up_and_crop(200, 100, 400, 200).unwrap();
        assert_eq!(p.action, FitAction::Scale);
        assert_eq!(p.scaled, Size::new(400, 200));
        assert_eq!(p.crop_rect(), None);
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    #[test]
    fn policy_dispatch_matches_direct_calls() {
        let t = Size::new(500, 600);
        assert_eq!(
            plan(&Policy::ScaleDown(t), 1000, 500),
            plan_scale_down(1000, 500, 500, 600)
        );
        assert_eq!(
            plan(&Policy::ScaleUpAndCrop(t), 300, 100),
            plan_scale_up_and_crop(300, 100, 500, 600)
        );
        assert_eq!(
            plan(&Policy::ScaleFactor(0.5), 300, 100),
            plan_scale_by_factor(300, 100, 0.5)
        );
    }

    #[test]
    fn fit_mode_resolves_ratio_frames() {
        let source = Size::new(800, 600);
        let frame = FrameSpec::ratio(2, 1);
        assert_eq!(
            FitMode::ScaleDownWithBackground.policy(&frame, source, CanvasColor::GRAY),
            Ok(Policy::ScaleDownWithBackground(Size::new(800, 400), CanvasColor::GRAY))
        );
        assert_eq!(
            FitMode::ScaleUpAndCrop.policy(&frame, source, CanvasColor::WHITE),
            Ok(Policy::ScaleUpAndCrop(Size::new(1200, 600)))
        );
        assert!(matches!(
            FitMode::Resize.policy(&frame, source, CanvasColor::WHITE),
            Err(FitError::InvalidSpec(_))
        ));
    }

    #[test]
    fn zero_target_rejected_everywhere() {
        let modes: [fn(u32, u32, u32, u32) -> Result<FitPlan, FitError>; 4] = [
            plan_exact,
            plan_scale_down,
            plan_scale_up,
            plan_scale_up_and_crop,
        ];
        for f in modes {
            assert!(matches!(f(100, 100, 0, 10), Err(FitError::InvalidDimension { .. })));
            assert!(matches!(f(100, 100, 10, 0), Err(FitError::InvalidDimension { .. })));
            assert!(matches!(f(0, 100, 10, 10), Err(FitError::DegenerateSource { .. })));
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Parametric invariants over a source × target grid
    // ════════════════════════════════════════════════════════════════════

    const TARGETS: [(u32, u32); 9] = [
        (1, 1),
        (100, 100),
        (400, 300),
        (300, 400),
        (500, 600),
        (1920, 1080),
        (100, 33),
        (33, 100),
        (7, 1000),
    ];

    fn gen_source_sizes(tw: u32, th: u32) -> Vec<(u32, u32)> {
        let mut sizes = vec![
            (1, 1),
            (1, 1000),
            (1000, 1),
            (tw, th),
            (tw * 2, th * 2),
            (tw * 3, th),
            (tw, th * 3),
            (tw / 2 + 1, th / 2 + 1),
            (tw + 1, th - th / 3),
            (1200, 400),
            (1000, 100),
            (999, 1001),
            (4000, 3000),
            (17, 13),
        ];
        sizes.retain(|&(w, h)| w > 0 && h > 0);
        sizes.sort();
        sizes.dedup();
        sizes
    }

    #[test]
    fn parametric_invariants() {
        let mut failures = Vec::new();
        let mut checked = 0u64;

        for &(tw, th) in &TARGETS {
            let target = Size::new(tw, th);
            for &(sw, sh) in &gen_source_sizes(tw, th) {
                let source = Size::new(sw, sh);
                let tag = format!("({sw}x{sh} -> {tw}x{th})");

                let down = plan_scale_down(sw, sh, tw, th).unwrap();
                if down.action == FitAction::None {
                    if !source.fits_within(target) || down.scaled != source {
                        failures.push(format!("down {tag}: bad identity {down:?}"));
                    }
                } else {
                    if !down.scaled.fits_within(target) {
                        failures.push(format!("down {tag}: {:?} exceeds target", down.scaled));
                    }
                    if down.scaled.width != tw && down.scaled.height != th {
                        failures.push(format!("down {tag}: no axis on target {:?}", down.scaled));
                    }
                }

                let up = plan_scale_up(sw, sh, tw, th).unwrap();
                if up.action == FitAction::None {
                    if !source.covers(target) || up.scaled != source {
                        failures.push(format!("up {tag}: bad identity {up:?}"));
                    }
                } else {
                    if !up.scaled.covers(target) {
                        failures.push(format!("up {tag}: {:?} short of target", up.scaled));
                    }
                    if up.scaled.width != tw && up.scaled.height != th {
                        failures.push(format!("up {tag}: no axis on target {:?}", up.scaled));
                    }
                }

                let pad = plan_scale_down_with_background(sw, sh, tw, th, CanvasColor::WHITE)
                    .unwrap();
                if pad.action == FitAction::ScaleAndPad {
                    let placed = Rect::new(pad.offset.0, pad.offset.1, pad.scaled.width, pad.scaled.height);
                    if pad.canvas != target || !placed.is_within(target) {
                        failures.push(format!("pad {tag}: placement {placed:?} outside canvas"));
                    }
                    let (ox, oy) = pad.offset;
                    if ox != (tw - pad.scaled.width) / 2 || oy != (th - pad.scaled.height) / 2 {
                        failures.push(format!("pad {tag}: off-center {:?}", pad.offset));
                    }
                } else if pad.scaled != target {
                    failures.push(format!("pad {tag}: unpadded {:?} != target", pad.scaled));
                }

                let crop = plan_scale_up_and_crop(sw, sh, tw, th).unwrap();
                match crop.crop_rect() {
                    Some(r) => {
                        if !r.is_within(crop.scaled) || crop.canvas != target {
                            failures.push(format!("crop {tag}: rect {r:?} outside {:?}", crop.scaled));
                        }
                        if r.x != (crop.scaled.width - tw) / 2 || r.y != (crop.scaled.height - th) / 2 {
                            failures.push(format!("crop {tag}: off-center {r:?}"));
                        }
                    }
                    None => {
                        if crop.scaled != target {
                            failures.push(format!("crop {tag}: uncropped {:?} != target", crop.scaled));
                        }
                    }
                }

                checked += 1;
            }
        }

        assert!(
            failures.is_empty(),
            "{} failures out of {checked} cases:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }

    #[test]
    fn scale_down_on_fitting_source_is_identity() {
        for &(tw, th) in &TARGETS {
            for sw in [1, tw / 2 + 1, tw] {
                for sh in [1, th / 2 + 1, th] {
                    let p = plan_scale_down(sw, sh, tw, th).unwrap();
                    assert_eq!(p.action, FitAction::None, "{sw}x{sh} into {tw}x{th}");
                    assert_eq!(p.scaled, Size::new(sw, sh));
                }
            }
        }
    }
}
