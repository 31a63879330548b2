use crate::canvas::{Canvas, FontSpec, TextAlign};
use crate::config::WallpaperConfig;
use crate::error::WallpaperError;
use crate::layout::{wrap_text, DrawCommand, RULE_FONT_SIZE, TITLE_FONT_SIZE};

/// Vertical distance from the title baseline to the first rule baseline
const RULES_TOP_OFFSET: f32 = 180.0;
/// Fraction of the surface width the wrapped rule text may occupy
const TEXT_WIDTH_FRACTION: f32 = 0.8;
/// Fraction of the surface width at which rule lines start
const LEFT_MARGIN_FRACTION: f32 = 0.1;
/// Line height as a multiple of the rule font size
const LINE_HEIGHT_FACTOR: f32 = 1.6;
/// Extra gap after each rule, as a multiple of the line height
const RULE_GAP_FACTOR: f32 = 0.3;

/// Lay out the wallpaper in horizontal (Latin-style) writing mode: the
/// upper-cased title centred at the configured height, followed by numbered
/// rules as left-aligned, word-wrapped paragraphs.
///
/// Each rule is prefixed with `"{index+1}. "` on its first line; wrapped
/// continuation lines are indented by the measured prefix width so the text
/// aligns under itself rather than under the numeral. A rule with empty
/// text produces no lines and consumes only the inter-rule gap, keeping the
/// numbering rhythm of the remaining rules regular.
pub fn layout_horizontal<C: Canvas>(
    config: &WallpaperConfig,
    canvas: &C,
    width: f32,
    height: f32,
) -> Result<Vec<DrawCommand>, WallpaperError> {
    let mut commands = Vec::new();

    let title_font = FontSpec::bold(TITLE_FONT_SIZE);
    let title_y = height * config.title_position.title_fraction();
    commands.push(DrawCommand {
        text: config.title.to_uppercase(),
        x: width / 2.0,
        y: title_y,
        font: title_font,
        colour: config.text_colour,
        align: TextAlign::Centre,
    });

    let rule_font = FontSpec::normal(RULE_FONT_SIZE);
    let line_height = RULE_FONT_SIZE * LINE_HEIGHT_FACTOR;
    let max_text_width = width * TEXT_WIDTH_FRACTION;
    let left_margin = width * LEFT_MARGIN_FRACTION;
    let mut current_y = title_y + RULES_TOP_OFFSET;

    for (index, rule) in config.rules.iter().enumerate() {
        let prefix = format!("{}. ", index + 1);
        let prefix_width = canvas.measure_text(&prefix, rule_font)?;
        let available_width = max_text_width - prefix_width;

        let lines = wrap_text(&rule.text, available_width, |s| {
            canvas.measure_text(s, rule_font)
        })?;

        for (line_index, line) in lines.into_iter().enumerate() {
            let (text, x) = if line_index == 0 {
                (format!("{prefix}{line}"), left_margin)
            } else {
                (line, left_margin + prefix_width)
            };
            commands.push(DrawCommand {
                text,
                x,
                y: current_y,
                font: rule_font,
                colour: config.text_colour,
                align: TextAlign::Left,
            });
            current_y += line_height;
        }

        current_y += line_height * RULE_GAP_FACTOR;
    }

    Ok(commands)
}
