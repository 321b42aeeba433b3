//! Decode → plan → execute → encode orchestration.
//!
//! [`Transformer`] owns a decoded source and runs fit policies against it.
//! Pixel work is delegated to a [`Codec`]; this module only sequences the
//! steps and carries the geometry between them.
//!
//! ```
//! use framefit::{Codec, Decoded, FitPlan, FrameSpec, ImageFormat, Size, TransformError, Transformer};
//!
//! /// Codec whose "image" is just its size.
//! struct SizeOnly;
//!
//! impl Codec for SizeOnly {
//!     type Image = Size;
//!
//!     fn decode(&self, _: &[u8], format: Option<ImageFormat>) -> Result<Decoded<Size>, TransformError> {
//!         let size = Size::new(800, 600);
//!         Ok(Decoded { size, format: format.unwrap_or(ImageFormat::Png), image: size })
//!     }
//!
//!     fn execute(&self, _: &Size, plan: &FitPlan) -> Result<Size, TransformError> {
//!         Ok(plan.canvas)
//!     }
//!
//!     fn encode(&self, image: &Size, _: ImageFormat) -> Result<Vec<u8>, TransformError> {
//!         Ok(format!("{}x{}", image.width, image.height).into_bytes())
//!     }
//! }
//!
//! let t = Transformer::new(SizeOnly, b"", Some("image/png")).unwrap();
//! let out = t.scale_up_and_crop(&FrameSpec::ratio(1, 1)).unwrap();
//! assert_eq!(out, b"800x800");
//! ```

use std::fmt;

use tracing::debug;

use crate::color::CanvasColor;
use crate::error::FitError;
use crate::fit::{self, FitMode, FitPlan, Policy};
use crate::frame::{FrameSpec, Size};

/// Error from a full transform: unsupported input, bad geometry, or codec failure.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("this MIME type is not supported: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error("codec error: {0}")]
    Codec(Box<dyn std::error::Error + Send + Sync>),
}

/// Image formats the transformer accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Jpeg,
    Png,
    Ppm,
}

impl ImageFormat {
    /// Every supported format.
    pub const SUPPORTED: [ImageFormat; 5] = [
        ImageFormat::Bmp,
        ImageFormat::Gif,
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Ppm,
    ];

    /// Parse a format hint: a bare name (`"jpg"`), an extension (`".png"`)
    /// or a MIME type (`"image/jpeg"`). Case-insensitive.
    pub fn from_mime(hint: &str) -> Result<Self, TransformError> {
        let trimmed = hint.trim();
        let subtype = trimmed.rsplit('/').next().unwrap_or(trimmed);
        let subtype = subtype.strip_prefix('.').unwrap_or(subtype);
        match subtype.to_ascii_uppercase().as_str() {
            "BMP" | "X-MS-BMP" => Ok(ImageFormat::Bmp),
            "GIF" => Ok(ImageFormat::Gif),
            "JPEG" | "JPG" => Ok(ImageFormat::Jpeg),
            "PNG" => Ok(ImageFormat::Png),
            "PPM" | "X-PORTABLE-PIXMAP" => Ok(ImageFormat::Ppm),
            _ => Err(TransformError::UnsupportedFormat(String::from(hint))),
        }
    }

    /// Upper-case short name.
    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Ppm => "PPM",
        }
    }

    /// Canonical MIME type.
    pub const fn mime(self) -> &'static str {
        match self {
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Ppm => "image/x-portable-pixmap",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded source image.
#[derive(Clone, Debug)]
pub struct Decoded<I> {
    pub size: Size,
    /// Format the bytes were decoded as.
    pub format: ImageFormat,
    pub image: I,
}

/// Pixel backend: decode, execute a [`FitPlan`], encode.
pub trait Codec {
    type Image;

    /// Decode `bytes`. `format` is `None` when the caller gave no hint and
    /// the codec has to detect it.
    fn decode(
        &self,
        bytes: &[u8],
        format: Option<ImageFormat>,
    ) -> Result<Decoded<Self::Image>, TransformError>;

    /// Resample, then pad or crop, as the plan's action says.
    fn execute(&self, image: &Self::Image, plan: &FitPlan) -> Result<Self::Image, TransformError>;

    fn encode(&self, image: &Self::Image, format: ImageFormat) -> Result<Vec<u8>, TransformError>;
}

/// Runs fit operations against one decoded source.
pub struct Transformer<C: Codec> {
    codec: C,
    image: C::Image,
    source: Size,
    format: ImageFormat,
    output_format: Option<ImageFormat>,
}

impl<C: Codec> Transformer<C> {
    /// Decode `bytes`, using `mime_hint` when given.
    ///
    /// An unsupported hint fails before the codec sees the bytes.
    pub fn new(codec: C, bytes: &[u8], mime_hint: Option<&str>) -> Result<Self, TransformError> {
        let hint = mime_hint.map(ImageFormat::from_mime).transpose()?;
        let Decoded {
            size,
            format,
            image,
        } = codec.decode(bytes, hint)?;
        debug!(
            width = size.width,
            height = size.height,
            %format,
            input_len = bytes.len(),
            "decoded source image"
        );
        Ok(Self {
            codec,
            image,
            source: size,
            format,
            output_format: None,
        })
    }

    /// Encode results as `format` instead of the source format.
    pub fn with_output_format(mut self, format: ImageFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Source dimensions.
    pub fn source(&self) -> Size {
        self.source
    }

    /// Format the source was decoded as.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Plan `policy` against the source without touching pixels.
    pub fn plan_for(&self, policy: &Policy) -> Result<FitPlan, FitError> {
        fit::plan(policy, self.source.width, self.source.height)
    }

    /// Plan, execute and encode `policy`.
    pub fn apply(&self, policy: &Policy) -> Result<Vec<u8>, TransformError> {
        self.run(policy, self.output_format.unwrap_or(self.format))
    }

    /// Forced resize to a pixel frame.
    pub fn resize(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::Resize, frame, CanvasColor::default())
    }

    /// Multiply both axes by `factor`.
    pub fn scale(&self, factor: f64) -> Result<Vec<u8>, TransformError> {
        self.apply(&Policy::ScaleFactor(factor))
    }

    /// Scale to the frame's width. The frame must be in pixels; its height is ignored.
    pub fn scale_by_width(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::ScaleByWidth, frame, CanvasColor::default())
    }

    /// Scale to the frame's height. The frame must be in pixels; its width is ignored.
    pub fn scale_by_height(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::ScaleByHeight, frame, CanvasColor::default())
    }

    pub fn scale_down(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::ScaleDown, frame, CanvasColor::default())
    }

    /// Shrink into the frame and letterbox onto it. `None` pads with white.
    pub fn scale_down_with_background(
        &self,
        frame: &FrameSpec,
        background: Option<CanvasColor>,
    ) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(
            FitMode::ScaleDownWithBackground,
            frame,
            background.unwrap_or_default(),
        )
    }

    pub fn scale_up(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::ScaleUp, frame, CanvasColor::default())
    }

    pub fn scale_up_and_crop(&self, frame: &FrameSpec) -> Result<Vec<u8>, TransformError> {
        self.apply_mode(FitMode::ScaleUpAndCrop, frame, CanvasColor::default())
    }

    /// Run a query string such as `w=400&h=300&mode=pad&bg=black&format=png`.
    ///
    /// Parse warnings are logged and otherwise ignored.
    #[cfg(feature = "query")]
    pub fn apply_query(&self, query: &str) -> Result<Vec<u8>, TransformError> {
        let parsed = crate::query::parse(query);
        for warning in &parsed.warnings {
            tracing::warn!(?warning, query, "ignoring query parameter");
        }
        let policy = parsed
            .instructions
            .to_policy(self.source.width, self.source.height)?;
        let format = match parsed.instructions.format() {
            Some(name) => ImageFormat::from_mime(name)?,
            None => self.output_format.unwrap_or(self.format),
        };
        self.run(&policy, format)
    }

    fn apply_mode(
        &self,
        mode: FitMode,
        frame: &FrameSpec,
        background: CanvasColor,
    ) -> Result<Vec<u8>, TransformError> {
        let policy = mode.policy(frame, self.source, background)?;
        self.apply(&policy)
    }

    fn run(&self, policy: &Policy, format: ImageFormat) -> Result<Vec<u8>, TransformError> {
        let plan = self.plan_for(policy)?;
        debug!(
            ?policy,
            action = ?plan.action,
            scaled_w = plan.scaled.width,
            scaled_h = plan.scaled.height,
            offset_x = plan.offset.0,
            offset_y = plan.offset.1,
            "executing fit plan"
        );
        let output = self.codec.execute(&self.image, &plan)?;
        let bytes = self.codec.encode(&output, format)?;
        debug!(%format, output_len = bytes.len(), "encoded output");
        Ok(bytes)
    }
}
