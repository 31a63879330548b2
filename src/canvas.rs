use crate::colour::Colour;
use crate::error::WallpaperError;
use crate::image::BackgroundImage;

/// Weight of a font face requested for a text draw
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A font selection for measuring or drawing text: a size in surface pixels
/// and a weight. The backend maps this onto whatever faces it was given.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn normal(size: f32) -> FontSpec {
        FontSpec {
            size,
            weight: FontWeight::Normal,
        }
    }

    pub fn bold(size: f32) -> FontSpec {
        FontSpec {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Horizontal anchoring of a text draw relative to its x coordinate
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextAlign {
    /// x is the left edge of the rendered text
    Left,
    /// x is the horizontal centre of the rendered text
    Centre,
}

/// The 2D drawing capability the engine renders against. The engine is
/// agnostic to how this is implemented (software rasterizer, system text
/// shaping, a recording mock in tests); it only requires rect fills, text
/// measurement and drawing, and image blits.
///
/// Text coordinates follow canvas conventions: y is the text baseline.
/// Failures from a backend are capability-layer faults; they abort the
/// current render pass and leave the surface in whatever state the previous
/// steps produced.
pub trait Canvas {
    /// Fill an axis-aligned rectangle with a solid colour
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Colour);

    /// Measure the advance width of `text` rendered with `font`
    fn measure_text(&self, text: &str, font: FontSpec) -> Result<f32, WallpaperError>;

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: FontSpec,
        colour: Colour,
        align: TextAlign,
    ) -> Result<(), WallpaperError>;

    /// Draw a decoded image scaled into the given rectangle. The rectangle
    /// may extend past the surface; backends clip.
    fn draw_image(
        &mut self,
        image: &BackgroundImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), WallpaperError>;
}
