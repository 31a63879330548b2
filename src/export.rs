use crate::error::WallpaperError;
use crate::surface::RasterSurface;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::io::Write;
use std::path::Path;

/// Filename offered to the user when the caller does not supply one
pub const DEFAULT_FILENAME: &str = "myrules-wallpaper.png";

/// A finished wallpaper, encoded and ready to hand to the user: PNG bytes
/// plus the name the file should be offered under
pub struct ExportedWallpaper {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportedWallpaper {
    /// Write the encoded bytes to any sink
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), WallpaperError> {
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Save the wallpaper under its filename inside `directory`
    pub fn save_in<P: AsRef<Path>>(&self, directory: P) -> Result<(), WallpaperError> {
        let path = directory.as_ref().join(&self.filename);
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Encode a fully painted surface as lossless PNG bytes. `filename` defaults
/// to [DEFAULT_FILENAME].
pub fn export_png(
    surface: &RasterSurface,
    filename: Option<&str>,
) -> Result<ExportedWallpaper, WallpaperError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        surface.image().as_raw(),
        surface.width(),
        surface.height(),
        ColorType::Rgba8,
    )?;

    Ok(ExportedWallpaper {
        filename: filename.unwrap_or(DEFAULT_FILENAME).to_string(),
        bytes,
    })
}
