use crate::canvas::{Canvas, FontSpec, FontWeight, TextAlign};
use crate::colour::Colour;
use crate::error::WallpaperError;
use crate::image::BackgroundImage;
use image::RgbaImage;
use log::trace;
use rusttype::{point, Font, Scale};

/// The font faces a [RasterSurface] renders text with. The crate does no
/// font-file management; callers supply TTF/OTF bytes from wherever they
/// keep them.
pub struct FontSet {
    regular: Font<'static>,
    bold: Font<'static>,
}

impl FontSet {
    /// Parse a regular and a bold face from raw font bytes
    pub fn from_bytes(regular: Vec<u8>, bold: Vec<u8>) -> Result<FontSet, WallpaperError> {
        let regular = Font::try_from_vec(regular).ok_or(WallpaperError::FontParsing)?;
        let bold = Font::try_from_vec(bold).ok_or(WallpaperError::FontParsing)?;
        Ok(FontSet { regular, bold })
    }

    /// Parse a single face used for both weights
    pub fn from_single(bytes: Vec<u8>) -> Result<FontSet, WallpaperError> {
        let face = Font::try_from_vec(bytes).ok_or(WallpaperError::FontParsing)?;
        Ok(FontSet {
            bold: face.clone(),
            regular: face,
        })
    }

    fn face(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// A software-rasterized [Canvas]: RGBA pixels in memory, glyphs drawn with
/// [rusttype] and blended by coverage. This is the backend the wallpaper is
/// exported from.
pub struct RasterSurface {
    pixels: RgbaImage,
    fonts: Option<FontSet>,
}

impl RasterSurface {
    /// Create a surface with no fonts loaded. Rect fills and image draws
    /// work; any text operation is a capability fault.
    pub fn new(width: u32, height: u32) -> RasterSurface {
        RasterSurface {
            pixels: RgbaImage::new(width, height),
            fonts: None,
        }
    }

    pub fn with_fonts(width: u32, height: u32, fonts: FontSet) -> RasterSurface {
        RasterSurface {
            pixels: RgbaImage::new(width, height),
            fonts: Some(fonts),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The painted pixels
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    fn fonts(&self) -> Result<&FontSet, WallpaperError> {
        self.fonts
            .as_ref()
            .ok_or_else(|| WallpaperError::Canvas("no fonts loaded".to_string()))
    }

    fn blend_pixel(&mut self, x: i32, y: i32, colour: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x, y);
        let inv = 1.0 - alpha;
        dst.0[0] = (colour[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
        dst.0[1] = (colour[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
        dst.0[2] = (colour[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
        dst.0[3] = 255;
    }
}

impl Canvas for RasterSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Colour) {
        let rgb = colour.to_bytes();
        let x0 = (x.max(0.0)) as u32;
        let y0 = (y.max(0.0)) as u32;
        let x1 = ((x + width).max(0.0) as u32).min(self.pixels.width());
        let y1 = ((y + height).max(0.0) as u32).min(self.pixels.height());
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels
                    .put_pixel(px, py, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
            }
        }
    }

    fn measure_text(&self, text: &str, font: FontSpec) -> Result<f32, WallpaperError> {
        let face = self.fonts()?.face(font.weight);
        let scale = Scale::uniform(font.size);
        let width = text
            .chars()
            .map(|ch| face.glyph(ch).scaled(scale).h_metrics().advance_width)
            .sum();
        Ok(width)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: FontSpec,
        colour: Colour,
        align: TextAlign,
    ) -> Result<(), WallpaperError> {
        let start_x = match align {
            TextAlign::Left => x,
            TextAlign::Centre => x - self.measure_text(text, font)? / 2.0,
        };

        let face = self.fonts()?.face(font.weight);
        let scale = Scale::uniform(font.size);
        let rgb = colour.to_bytes();

        // y is the baseline, canvas-style
        let mut caret_x = start_x;
        let mut covered: Vec<(i32, i32, f32)> = Vec::new();
        for ch in text.chars() {
            let glyph = face.glyph(ch).scaled(scale);
            let advance = glyph.h_metrics().advance_width;
            let glyph = glyph.positioned(point(caret_x, y));
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    covered.push((gx as i32 + bb.min.x, gy as i32 + bb.min.y, v));
                });
            }
            caret_x += advance;
        }
        for (px, py, v) in covered {
            self.blend_pixel(px, py, rgb, v);
        }

        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &BackgroundImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), WallpaperError> {
        if width <= 0.0 || height <= 0.0 || image.width == 0 || image.height == 0 {
            return Err(WallpaperError::InvalidImageDimensions {
                width: image.width,
                height: image.height,
            });
        }

        let src = image.image.to_rgba8();
        let dest_x0 = x.max(0.0) as u32;
        let dest_y0 = y.max(0.0) as u32;
        let dest_x1 = ((x + width).max(0.0) as u32).min(self.pixels.width());
        let dest_y1 = ((y + height).max(0.0) as u32).min(self.pixels.height());
        trace!(
            "blitting {}x{} image into ({dest_x0}, {dest_y0})..({dest_x1}, {dest_y1})",
            image.width,
            image.height
        );

        // nearest-neighbour sampling of the scaled source
        for dy in dest_y0..dest_y1 {
            let sy = (((dy as f32 - y) / height) * src.height() as f32)
                .clamp(0.0, src.height() as f32 - 1.0) as u32;
            for dx in dest_x0..dest_x1 {
                let sx = (((dx as f32 - x) / width) * src.width() as f32)
                    .clamp(0.0, src.width() as f32 - 1.0) as u32;
                let pixel = src.get_pixel(sx, sy);
                let alpha = pixel.0[3] as f32 / 255.0;
                self.blend_pixel(
                    dx as i32,
                    dy as i32,
                    [pixel.0[0], pixel.0[1], pixel.0[2]],
                    alpha,
                );
            }
        }

        Ok(())
    }
}
