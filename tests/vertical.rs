mod common;

use common::{assert_close, rules, scenario_config, MockCanvas};
use wallpaper_gen::{
    render, FontWeight, TextAlign, TitlePosition, WallpaperConfig, WritingMode,
};

const TITLE_ADVANCE: f32 = 90.0 * 1.2;
const CHAR_HEIGHT: f32 = 48.0 * 1.3;
const COLUMN_SPACING: f32 = 120.0;

fn vertical(mut config: WallpaperConfig) -> WallpaperConfig {
    config.writing_mode = WritingMode::Vertical;
    config
}

#[test]
fn reference_scenario_geometry() {
    let config = vertical(scenario_config());
    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();

    // title: one slot per grapheme of "MY RULES", space included
    let title: Vec<_> = canvas.texts[..8].iter().collect();
    let glyphs: Vec<&str> = title.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(glyphs, vec!["M", "Y", " ", "R", "U", "L", "E", "S"]);
    for (i, draw) in title.iter().enumerate() {
        assert_close(draw.x, 1096.5, "title column x");
        assert_close(draw.y, 419.4 + i as f32 * TITLE_ADVANCE, "title glyph y");
        assert_eq!(draw.align, TextAlign::Centre);
        assert_eq!(draw.font.weight, FontWeight::Bold);
        assert_eq!(draw.font.size, 90.0);
    }

    // two rule columns, right to left, headed by numerals
    let first_header = &canvas.texts[8];
    assert_eq!(first_header.text, "一");
    assert_eq!(first_header.font.size, 48.0);
    assert_close(first_header.x, 705.0, "first column x");
    assert_close(first_header.y, 559.2, "column start y");

    // "Wake up early" stacks 13 graphemes under the header
    for (i, draw) in canvas.texts[9..22].iter().enumerate() {
        assert_close(draw.x, 705.0, "first column glyph x");
        assert_close(draw.y, 559.2 + (i + 1) as f32 * CHAR_HEIGHT, "glyph y");
    }
    let column_text: String = canvas.texts[9..22].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(column_text, "Wake up early");

    let second_header = &canvas.texts[22];
    assert_eq!(second_header.text, "二");
    assert_close(second_header.x, 705.0 - COLUMN_SPACING, "second column x");
    assert_close(second_header.y, 559.2, "second column start y");

    let second_text: String = canvas.texts[23..].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(second_text, "Exercise");
}

#[test]
fn long_rule_text_truncates_at_the_column_budget() {
    // low position: columns start at 0.60 * 2796 = 1677.6, leaving
    // floor((2796 - 1677.6 - 100) / 62.4) = 16 glyph slots
    let config = vertical(WallpaperConfig {
        title: "T".to_string(),
        title_position: TitlePosition::Low,
        rules: rules(&["aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"]),
        ..WallpaperConfig::default()
    });

    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();

    // 1 title glyph + 1 numeral + exactly 16 truncated glyphs
    assert_eq!(canvas.texts.len(), 1 + 1 + 16);
    let last = canvas.texts.last().unwrap();
    assert_eq!(last.text, "a");
    assert_close(last.y, 1677.6 + 16.0 * CHAR_HEIGHT, "last glyph y");
}

#[test]
fn numeral_headers_fall_back_to_decimal_past_the_table() {
    let texts: Vec<String> = (0..7).map(|_| "x".to_string()).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let config = vertical(WallpaperConfig {
        title: String::new(),
        rules: rules(&refs),
        ..WallpaperConfig::default()
    });

    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();

    // empty title emits no glyphs; each column is a header plus one glyph
    let headers: Vec<&str> = canvas.texts.iter().step_by(2).map(|t| t.text.as_str()).collect();
    assert_eq!(headers, vec!["一", "二", "三", "四", "五", "6", "7"]);

    // seven columns centred as a block: first at (1290 + 7*120)/2 - 60
    let first_x = (1290.0 + 7.0 * COLUMN_SPACING) / 2.0 - COLUMN_SPACING / 2.0;
    for (k, header) in canvas.texts.iter().step_by(2).enumerate() {
        assert_close(header.x, first_x - k as f32 * COLUMN_SPACING, "column x");
    }
}

#[test]
fn spaces_occupy_their_own_vertical_slot() {
    let config = vertical(WallpaperConfig {
        title: "a b".to_string(),
        rules: rules(&["x y"]),
        ..WallpaperConfig::default()
    });

    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();

    let title_glyphs: Vec<&str> = canvas.texts[..3].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(title_glyphs, vec!["A", " ", "B"]);

    let rule_glyphs: Vec<&str> = canvas.texts[4..].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rule_glyphs, vec!["x", " ", "y"]);
}

#[test]
fn multi_unit_characters_are_never_split() {
    // a combining accent and an emoji must each occupy one slot
    let config = vertical(WallpaperConfig {
        title: String::new(),
        rules: rules(&["e\u{301}\u{1f600}b"]),
        ..WallpaperConfig::default()
    });

    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();

    let glyphs: Vec<&str> = canvas.texts[1..].iter().map(|t| t.text.as_str()).collect();
    assert_eq!(glyphs, vec!["e\u{301}", "\u{1f600}", "b"]);
}

#[test]
fn no_rules_renders_only_the_title_column() {
    let config = vertical(WallpaperConfig {
        title: "Zen".to_string(),
        rules: Vec::new(),
        ..WallpaperConfig::default()
    });

    let mut canvas = MockCanvas::new();
    render(&config, &mut canvas).unwrap();
    assert_eq!(canvas.texts.len(), 3);
    assert_eq!(canvas.rects.len(), 1);
}
