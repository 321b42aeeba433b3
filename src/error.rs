//! Errors reported by frame resolution and fit planning.

/// Frame resolution or fit planning error.
///
/// Every variant is a request-level input problem. The computations are
/// deterministic, so retrying with the same input fails the same way.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// A requested width or height is zero, or a derived one overflows `u32`.
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    /// The frame kind or parameters do not fit the requested operation.
    #[error("invalid frame spec: {0}")]
    InvalidSpec(&'static str),

    /// The source has a zero dimension, so no scale factor exists.
    #[error("degenerate source {width}x{height}: cannot derive a scale factor")]
    DegenerateSource { width: u32, height: u32 },

    /// Scale factor is zero, negative, NaN or infinite.
    #[error("invalid scale factor {0}")]
    InvalidScaleFactor(f64),
}
