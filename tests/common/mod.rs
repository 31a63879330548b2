#![allow(dead_code)]

use wallpaper_gen::{
    BackgroundImage, Canvas, Colour, FontSpec, Rule, TextAlign, WallpaperConfig, WallpaperError,
};

/// A recorded text draw
#[derive(Clone, Debug)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontSpec,
    pub colour: Colour,
    pub align: TextAlign,
}

/// A recording canvas with deterministic metrics: every character advances
/// half the font size. Lets tests assert exact layout geometry without any
/// real font.
#[derive(Default)]
pub struct MockCanvas {
    pub rects: Vec<(f32, f32, f32, f32, Colour)>,
    pub images: Vec<(f32, f32, f32, f32)>,
    pub texts: Vec<TextDraw>,
    pub fail_measurement: bool,
}

impl MockCanvas {
    pub fn new() -> MockCanvas {
        MockCanvas::default()
    }

    pub fn failing() -> MockCanvas {
        MockCanvas {
            fail_measurement: true,
            ..MockCanvas::default()
        }
    }
}

impl Canvas for MockCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, colour: Colour) {
        self.rects.push((x, y, width, height, colour));
    }

    fn measure_text(&self, text: &str, font: FontSpec) -> Result<f32, WallpaperError> {
        if self.fail_measurement {
            return Err(WallpaperError::Canvas("measurement disabled".to_string()));
        }
        Ok(text.chars().count() as f32 * font.size * 0.5)
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
        self.texts.push(TextDraw {
            text: text.to_string(),
            x,
            y,
            font,
            colour,
            align,
        });
        Ok(())
    }

    fn draw_image(
        &mut self,
        _image: &BackgroundImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), WallpaperError> {
        self.images.push((x, y, width, height));
        Ok(())
    }
}

pub fn rules(texts: &[&str]) -> Vec<Rule> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| Rule::new(i.to_string(), *t))
        .collect()
}

/// "My Rules" over two short rules on black, title high: the reference
/// scenario shared by the horizontal and vertical geometry tests
pub fn scenario_config() -> WallpaperConfig {
    WallpaperConfig {
        title: "My Rules".to_string(),
        rules: rules(&["Wake up early", "Exercise"]),
        ..WallpaperConfig::default()
    }
}

pub fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 0.05,
        "{what}: expected {expected}, got {actual}"
    );
}
