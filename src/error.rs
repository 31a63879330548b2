use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode or encode the image
    Image(#[from] image::ImageError),

    /// A background image with a zero-area intrinsic size was supplied.
    /// Cover-fit placement divides by the image dimensions, so this fails
    /// the render pass instead of producing garbage geometry.
    #[error("background image has invalid dimensions {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    /// A colour string could not be parsed as `#rrggbb`
    #[error("invalid colour: {0}")]
    InvalidColour(String),

    /// [rusttype] failed to parse the font bytes
    #[error("could not parse font data")]
    FontParsing,

    /// The drawing capability failed mid-pass. The surface keeps whatever
    /// was painted before the failing step; the caller should retry the
    /// whole pass.
    #[error("canvas backend fault: {0}")]
    Canvas(String),
}
