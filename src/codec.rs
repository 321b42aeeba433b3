//! [`Codec`] backed by the `image` crate.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::fit::{FitAction, FitPlan};
use crate::frame::Size;
use crate::transform::{Codec, Decoded, ImageFormat, TransformError};

/// Decodes, resamples and encodes with `image`.
///
/// Output is always flattened to 8-bit RGB before encoding.
#[derive(Copy, Clone, Debug)]
pub struct ImageCodec {
    filter: FilterType,
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl ImageCodec {
    /// Resampling filter for every resize. Lanczos3 unless set.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    fn resample(&self, image: &DynamicImage, target: Size) -> DynamicImage {
        if image.width() == target.width && image.height() == target.height {
            debug!(
                width = target.width,
                height = target.height,
                "image already at target size, skipping resize"
            );
            return image.clone();
        }
        image.resize_exact(target.width, target.height, self.filter)
    }
}

impl Codec for ImageCodec {
    type Image = DynamicImage;

    fn decode(
        &self,
        bytes: &[u8],
        format: Option<ImageFormat>,
    ) -> Result<Decoded<DynamicImage>, TransformError> {
        let format = match format {
            Some(f) => f,
            None => {
                let guessed = image::guess_format(bytes).map_err(codec_error)?;
                from_image_format(guessed).ok_or_else(|| {
                    TransformError::UnsupportedFormat(String::from(guessed.to_mime_type()))
                })?
            }
        };
        let image = image::load_from_memory_with_format(bytes, to_image_format(format))
            .map_err(codec_error)?;
        Ok(Decoded {
            size: Size::new(image.width(), image.height()),
            format,
            image,
        })
    }

    fn execute(&self, image: &DynamicImage, plan: &FitPlan) -> Result<DynamicImage, TransformError> {
        match plan.action {
            FitAction::None => Ok(image.clone()),
            FitAction::Scale => Ok(self.resample(image, plan.scaled)),
            FitAction::ScaleAndPad => {
                let scaled = self.resample(image, plan.scaled);
                let mut canvas = RgbaImage::from_pixel(
                    plan.canvas.width,
                    plan.canvas.height,
                    Rgba(plan.canvas_color.to_rgba()),
                );
                let (x, y) = plan.offset;
                imageops::overlay(&mut canvas, &scaled.to_rgba8(), x as i64, y as i64);
                Ok(DynamicImage::ImageRgba8(canvas))
            }
            FitAction::ScaleAndCrop => {
                let scaled = self.resample(image, plan.scaled);
                let (x, y) = plan.offset;
                Ok(scaled.crop_imm(x, y, plan.canvas.width, plan.canvas.height))
            }
        }
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, TransformError> {
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let mut out = Cursor::new(Vec::new());
        rgb.write_to(&mut out, to_image_format(format))
            .map_err(codec_error)?;
        Ok(out.into_inner())
    }
}

fn codec_error(err: image::ImageError) -> TransformError {
    TransformError::Codec(Box::new(err))
}

fn to_image_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Bmp => image::ImageFormat::Bmp,
        ImageFormat::Gif => image::ImageFormat::Gif,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Ppm => image::ImageFormat::Pnm,
    }
}

fn from_image_format(format: image::ImageFormat) -> Option<ImageFormat> {
    match format {
        image::ImageFormat::Bmp => Some(ImageFormat::Bmp),
        image::ImageFormat::Gif => Some(ImageFormat::Gif),
        image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
        image::ImageFormat::Png => Some(ImageFormat::Png),
        image::ImageFormat::Pnm => Some(ImageFormat::Ppm),
        _ => None,
    }
}
