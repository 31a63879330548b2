use crate::canvas::Canvas;
use crate::config::{WallpaperConfig, WritingMode, WALLPAPER_HEIGHT, WALLPAPER_WIDTH};
use crate::error::WallpaperError;
use crate::layout::{layout_horizontal, layout_vertical};
use log::{debug, trace};

/// Paint one wallpaper onto `canvas` from `config`.
///
/// A render pass is a single synchronous sweep: fill the background colour,
/// draw the cover-fitted background image if one is configured, then lay
/// out the text for the configured writing mode and issue the draws in
/// order. Nothing is retained between passes; re-rendering with a changed
/// configuration repaints the surface from scratch, starting with the
/// full-surface background fill.
///
/// On error the pass aborts and the surface keeps whatever the steps so far
/// painted; the caller retries a whole pass after fixing the input.
pub fn render<C: Canvas>(config: &WallpaperConfig, canvas: &mut C) -> Result<(), WallpaperError> {
    let width = WALLPAPER_WIDTH as f32;
    let height = WALLPAPER_HEIGHT as f32;

    debug!(
        "rendering wallpaper: {} rules, {:?} mode",
        config.rules.len(),
        config.writing_mode
    );

    canvas.fill_rect(0.0, 0.0, width, height, config.background_colour);

    if let Some(image) = &config.background_image {
        let fit = image.cover_fit(WALLPAPER_WIDTH, WALLPAPER_HEIGHT)?;
        trace!(
            "cover-fit {}x{} image at ({}, {}) size {}x{}",
            image.width,
            image.height,
            fit.x,
            fit.y,
            fit.width,
            fit.height
        );
        canvas.draw_image(image, fit.x, fit.y, fit.width, fit.height)?;
    }

    let commands = match config.writing_mode {
        WritingMode::Horizontal => layout_horizontal(config, canvas, width, height)?,
        WritingMode::Vertical => layout_vertical(config, width, height),
    };
    trace!("issuing {} text draws", commands.len());

    for command in &commands {
        canvas.fill_text(
            &command.text,
            command.x,
            command.y,
            command.font,
            command.colour,
            command.align,
        )?;
    }

    Ok(())
}
