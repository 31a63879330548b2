use crate::canvas::{FontSpec, TextAlign};
use crate::config::{WallpaperConfig, RULE_NUMERALS};
use crate::layout::{DrawCommand, TITLE_FONT_SIZE, VERTICAL_RULE_FONT_SIZE};
use unicode_segmentation::UnicodeSegmentation;

/// Fraction of the surface width at which the title column is anchored
const TITLE_X_FRACTION: f32 = 0.85;
/// Fraction of the surface height at which the title column starts
const TITLE_Y_FRACTION: f32 = 0.15;
/// Vertical advance per title glyph, as a multiple of the title font size
const TITLE_ADVANCE_FACTOR: f32 = 1.2;
/// Vertical advance per rule glyph, as a multiple of the rule font size
const CHAR_HEIGHT_FACTOR: f32 = 1.3;
/// Horizontal distance between adjacent rule columns
const COLUMN_SPACING: f32 = 120.0;
/// Space reserved below the last glyph slot of a column
const COLUMN_BOTTOM_MARGIN: f32 = 100.0;

/// Lay out the wallpaper in vertical writing mode: the title as a single
/// top-to-bottom glyph column near the right edge, and one column per rule
/// flowing right to left, each headed by a localized numeral.
///
/// Text is stacked one user-perceived character (grapheme cluster) per
/// slot, whatever the script, so multi-unit characters are never split.
/// Spaces occupy their own slot like any other grapheme. Rule text past the
/// column's glyph budget is silently truncated; the numeral header is
/// always drawn. Rule indices past the numeral table fall back to the
/// decimal `index+1` string.
pub fn layout_vertical(config: &WallpaperConfig, width: f32, height: f32) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    let title_font = FontSpec::bold(TITLE_FONT_SIZE);
    let title_x = width * TITLE_X_FRACTION;
    let mut title_y = height * TITLE_Y_FRACTION;
    for grapheme in config.title.to_uppercase().graphemes(true) {
        commands.push(DrawCommand {
            text: grapheme.to_string(),
            x: title_x,
            y: title_y,
            font: title_font,
            colour: config.text_colour,
            align: TextAlign::Centre,
        });
        title_y += TITLE_FONT_SIZE * TITLE_ADVANCE_FACTOR;
    }

    let rule_font = FontSpec::normal(VERTICAL_RULE_FONT_SIZE);
    let char_height = VERTICAL_RULE_FONT_SIZE * CHAR_HEIGHT_FACTOR;
    let column_count = config.rules.len() as f32;
    let first_column_x = (width + column_count * COLUMN_SPACING) / 2.0 - COLUMN_SPACING / 2.0;
    let start_y = height * config.title_position.column_fraction();
    let max_chars_per_column =
        ((height - start_y - COLUMN_BOTTOM_MARGIN) / char_height).max(0.0) as usize;

    for (index, rule) in config.rules.iter().enumerate() {
        let column_x = first_column_x - index as f32 * COLUMN_SPACING;
        let mut column_y = start_y;

        let numeral = RULE_NUMERALS
            .get(index)
            .map(|n| n.to_string())
            .unwrap_or_else(|| (index + 1).to_string());
        commands.push(DrawCommand {
            text: numeral,
            x: column_x,
            y: column_y,
            font: rule_font,
            colour: config.text_colour,
            align: TextAlign::Centre,
        });
        column_y += char_height;

        for grapheme in rule.text.graphemes(true).take(max_chars_per_column) {
            commands.push(DrawCommand {
                text: grapheme.to_string(),
                x: column_x,
                y: column_y,
                font: rule_font,
                colour: config.text_colour,
                align: TextAlign::Centre,
            });
            column_y += char_height;
        }
    }

    commands
}
