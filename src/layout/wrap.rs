use crate::error::WallpaperError;

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// The text is split on spaces and words are accumulated into a line while
/// the tentative line still measures within `max_width`; when the next word
/// would overflow a non-empty line, the line is flushed and the word starts
/// the next one. A single word wider than `max_width` is placed alone on
/// its own line, never split. Empty input produces zero lines.
///
/// `measure` is the width of a string as the eventual backend will render
/// it; measurement faults propagate and abort the pass.
pub fn wrap_text<F>(
    text: &str,
    max_width: f32,
    mut measure: F,
) -> Result<Vec<String>, WallpaperError>
where
    F: FnMut(&str) -> Result<f32, WallpaperError>,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let test_line = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&test_line)? > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = test_line;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}
