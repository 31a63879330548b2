use crate::error::WallpaperError;
use image::DynamicImage;
use std::path::Path;

/// A decoded background photograph with its intrinsic dimensions. Decoding
/// is format-agnostic: anything the [image] crate recognizes can be used.
pub struct BackgroundImage {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

/// The rectangle a background image is drawn into: scaled to fully cover
/// the surface while preserving its aspect ratio, cropping the longer axis
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CoverFit {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BackgroundImage {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<BackgroundImage, WallpaperError> {
        let data = std::fs::read(path)?;
        Self::new_from_memory(&data)
    }

    /// Decode arbitrary user-supplied image bytes, guessing the format
    pub fn new_from_memory(data: &[u8]) -> Result<BackgroundImage, WallpaperError> {
        let image = image::load_from_memory(data)?;
        Ok(Self::new_raster(image))
    }

    pub fn new_raster(image: DynamicImage) -> BackgroundImage {
        let width = image.width();
        let height = image.height();
        BackgroundImage {
            image,
            width,
            height,
        }
    }

    /// Compute the cover-fit placement of this image over a
    /// `surface_width` x `surface_height` target.
    ///
    /// A relatively wider image is scaled to the surface height and centred
    /// horizontally; a relatively taller (or equal) image is scaled to the
    /// surface width and centred vertically. Either way the resulting rect
    /// covers the whole surface without distorting the image.
    pub fn cover_fit(
        &self,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<CoverFit, WallpaperError> {
        if self.width == 0 || self.height == 0 {
            return Err(WallpaperError::InvalidImageDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let surface_width = surface_width as f32;
        let surface_height = surface_height as f32;
        let img_ratio = self.width as f32 / self.height as f32;
        let canvas_ratio = surface_width / surface_height;

        let fit = if img_ratio > canvas_ratio {
            // image is wider: fit height, crop width
            let height = surface_height;
            let width = surface_height * img_ratio;
            CoverFit {
                x: (surface_width - width) / 2.0,
                y: 0.0,
                width,
                height,
            }
        } else {
            // image is taller or equal: fit width, crop height
            let width = surface_width;
            let height = surface_width / img_ratio;
            CoverFit {
                x: 0.0,
                y: (surface_height - height) / 2.0,
                width,
                height,
            }
        };

        Ok(fit)
    }
}
