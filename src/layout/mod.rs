//! Pure layout functions for positioning wallpaper text.
//!
//! This module computes where every piece of text lands on the surface and
//! returns the result as an ordered list of [DrawCommand]s; it performs no
//! drawing itself. Two strategies are available:
//!
//! - [`layout_horizontal`](crate::layout::layout_horizontal) - Latin-style
//!   rows: centred title, left-aligned numbered rules with greedy word wrap
//! - [`layout_vertical`](crate::layout::layout_vertical) - traditional
//!   vertical script emulation: one glyph per line, columns flowing right
//!   to left, localized numeral headers
//!
//! Layout only needs the measurement half of the drawing capability; the
//! compositor replays the commands against the full [Canvas](crate::Canvas).

mod horizontal;
mod vertical;
mod wrap;

pub use horizontal::*;
pub use vertical::*;
pub use wrap::*;

use crate::canvas::{FontSpec, TextAlign};
use crate::colour::Colour;

/// Font size of the title, in surface pixels
pub const TITLE_FONT_SIZE: f32 = 90.0;
/// Font size of rule text in horizontal writing mode
pub const RULE_FONT_SIZE: f32 = 52.0;
/// Font size of rule text and numeral headers in vertical writing mode
pub const VERTICAL_RULE_FONT_SIZE: f32 = 48.0;

/// One positioned text draw, produced by the layout functions and consumed
/// in order by the compositor. Transient; never persisted.
#[derive(Clone, PartialEq, Debug)]
pub struct DrawCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontSpec,
    pub colour: Colour,
    pub align: TextAlign,
}
