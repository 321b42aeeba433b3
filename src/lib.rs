//! Frame resolution and fit planning for image resizing.
//!
//! The geometry core is `no_std` and does no pixel work. It turns a requested
//! frame (absolute pixels or an aspect ratio) into concrete target dimensions
//! and decides how a source image maps onto them: plain scale, scale and pad
//! onto a background, or scale and center-crop.
//!
//! # Modules
//!
//! - [`frame`]: frame specs, ratio resolution against source dimensions
//! - [`fit`]: fit policies and the [`FitPlan`] they produce
//! - [`color`]: background color for letterboxed output
//! - `query`: query string instructions (`w=500&h=600&mode=pad`), feature `query`
//! - `transform`: decode, plan, execute and encode, feature `std`
//! - `codec`: a `Codec` backed by the `image` crate, feature `codec`
//!
//! # Example
//!
//! ```
//! use framefit::{FrameSpec, ResolveMode, Size, plan_scale_down_with_background, CanvasColor};
//!
//! let frame = FrameSpec::ratio(2, 1)
//!     .resolve(Size::new(800, 600), ResolveMode::Shrink)
//!     .unwrap();
//! assert_eq!(frame, Size::new(800, 400));
//!
//! let plan = plan_scale_down_with_background(800, 600, frame.width, frame.height, CanvasColor::WHITE)
//!     .unwrap();
//! assert_eq!(plan.scaled, Size::new(533, 400));
//! assert_eq!(plan.offset, (133, 0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod error;
pub mod fit;
pub mod frame;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "std")]
pub mod transform;

#[cfg(feature = "codec")]
pub mod codec;

pub use color::CanvasColor;
pub use error::FitError;
pub use fit::{
    FitAction, FitMode, FitPlan, Policy, plan, plan_exact, plan_scale_by_factor,
    plan_scale_by_height, plan_scale_by_width, plan_scale_down, plan_scale_down_with_background,
    plan_scale_up, plan_scale_up_and_crop,
};
pub use frame::{DimensionKind, FrameSpec, Rect, ResolveMode, Size, resolve};

#[cfg(feature = "std")]
pub use transform::{Codec, Decoded, ImageFormat, TransformError, Transformer};

#[cfg(feature = "codec")]
pub use codec::ImageCodec;
