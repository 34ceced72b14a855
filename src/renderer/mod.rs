//! SVG renderers for the key selector, the fretboard and the combined page.
//!
//! Every renderer produces a self-contained SVG string that can be
//! displayed in any SVG-capable view. Output is recomputed from scratch
//! for each state; nothing is cached between calls.

mod constants;
mod svg_builder;
mod circle;
mod fretboard;
mod page;

pub use circle::{render_circle_of_fifths_svg, CircleGeometry, Segment};
pub use constants::{CIRCLE_INNER_RADIUS, CIRCLE_OUTER_RADIUS, CIRCLE_SIZE};
pub use fretboard::{render_fretboard_svg, render_instrument_fretboard_svg, FretboardLayout};
pub use page::{render_page_svg, PAGE_TITLE};

use crate::state::AppState;
use crate::theory::Note;

/// Key selected by a click at canvas point (x, y) on the standalone
/// circle-of-fifths SVG.
pub fn key_at_point(x: f64, y: f64) -> Option<Note> {
    CircleGeometry::default().key_at_point(x, y)
}

/// Render the fretboard for a saved state.
pub fn render_state_to_svg(state: &AppState) -> String {
    render_fretboard_svg(state.key, state.scale, state.orientation, state.show_note_names)
}
