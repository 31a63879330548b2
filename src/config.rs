use crate::colour::{colours, Colour};
use crate::image::BackgroundImage;

/// Logical width of every generated wallpaper, in pixels
pub const WALLPAPER_WIDTH: u32 = 1290;
/// Logical height of every generated wallpaper, in pixels
pub const WALLPAPER_HEIGHT: u32 = 2796;
/// Width over height of the fixed wallpaper resolution
pub const ASPECT_RATIO: f32 = WALLPAPER_WIDTH as f32 / WALLPAPER_HEIGHT as f32;

/// Nominal cap on the number of rules. This is a guideline for callers (the
/// editing UI stops adding rules here); the engine itself renders however
/// many rules it is given.
pub const MAX_RULES: usize = 10;

/// Ordinal markers used as rule-column headers in vertical writing mode.
/// Rule indices past the end of the table fall back to the decimal string.
pub const RULE_NUMERALS: [&str; 5] = ["一", "二", "三", "四", "五"];

/// A single rule on the wallpaper. The `id` is an opaque identifier that
/// stays stable while the caller reorders or edits rules; the engine only
/// reads the `text`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rule {
    pub id: String,
    pub text: String,
}

impl Rule {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Rule {
        Rule {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Coarse vertical anchor for the title. In horizontal mode this controls
/// where the title baseline sits and everything below follows; in vertical
/// mode it controls where the rule columns begin (the title column position
/// is fixed).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TitlePosition {
    #[default]
    High,
    Middle,
    Low,
}

impl TitlePosition {
    /// Fraction of the surface height at which the title baseline sits in
    /// horizontal writing mode
    pub fn title_fraction(self) -> f32 {
        match self {
            TitlePosition::High => 0.35,
            TitlePosition::Middle => 0.45,
            TitlePosition::Low => 0.55,
        }
    }

    /// Fraction of the surface height at which rule columns start in
    /// vertical writing mode. Deliberately a separate mapping from
    /// [TitlePosition::title_fraction]: columns need more headroom than a
    /// single baseline does.
    pub fn column_fraction(self) -> f32 {
        match self {
            TitlePosition::High => 0.20,
            TitlePosition::Middle => 0.40,
            TitlePosition::Low => 0.60,
        }
    }
}

/// Row-based left-to-right layout, or column-based top-to-bottom glyph
/// stacking with right-to-left column order
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum WritingMode {
    #[default]
    Horizontal,
    Vertical,
}

/// Everything the engine needs to paint one wallpaper. Immutable for the
/// duration of one render pass; re-render with a new value to repaint.
pub struct WallpaperConfig {
    pub title: String,
    pub rules: Vec<Rule>,
    pub background_colour: Colour,
    pub text_colour: Colour,
    pub background_image: Option<BackgroundImage>,
    pub title_position: TitlePosition,
    pub writing_mode: WritingMode,
}

impl Default for WallpaperConfig {
    /// The starting configuration of the wallpaper editor: black background,
    /// white text, five example rules
    fn default() -> WallpaperConfig {
        WallpaperConfig {
            title: "My Rules".to_string(),
            rules: vec![
                Rule::new("1", "Wake up early and start with intention"),
                Rule::new("2", "Exercise for at least 30 minutes"),
                Rule::new("3", "Read something meaningful every day"),
                Rule::new("4", "No phone for the first hour"),
                Rule::new("5", "Focus on what matters most"),
            ],
            background_colour: colours::BLACK,
            text_colour: colours::WHITE,
            background_image: None,
            title_position: TitlePosition::default(),
            writing_mode: WritingMode::default(),
        }
    }
}
