//! Full page: title, key selector with an options summary on the left,
//! fretboard on the right.

use super::circle::draw_circle_of_fifths;
use super::constants::*;
use super::fretboard::{draw_fretboard, FretboardLayout};
use super::svg_builder::SvgBuilder;
use crate::fretboard::Instrument;
use crate::state::AppState;

pub const PAGE_TITLE: &str = "Mandolin Scale Visualizer";

fn option_lines(state: &AppState) -> [(&'static str, String); 4] {
    [
        ("Key", state.key.display_name().to_string()),
        ("Scale", state.scale.label().to_string()),
        ("Orientation", state.orientation.label().to_string()),
        (
            "Note names",
            if state.show_note_names { "shown" } else { "hidden" }.to_string(),
        ),
    ]
}

/// Render the whole visualizer for `state` as one SVG document.
pub fn render_page_svg(state: &AppState) -> String {
    let instrument = Instrument::mandolin();
    let layout = FretboardLayout::new(&instrument, state.orientation);
    let (board_width, board_height) = layout.canvas_size();

    let lines = option_lines(state);
    let left_height =
        CIRCLE_SIZE + OPTIONS_TOP_GAP + OPTIONS_LINE_HEIGHT * (lines.len() + 1) as f64;
    let top = PAGE_MARGIN + PAGE_TITLE_HEIGHT;
    let right_x = PAGE_MARGIN + CIRCLE_SIZE + PANEL_GAP;
    let width = right_x + board_width + PAGE_MARGIN;
    let height = top + left_height.max(board_height) + PAGE_MARGIN;

    let mut svg = SvgBuilder::new(width, height);
    svg.rect(0.0, 0.0, width, height, "white", "none", 0.0);
    svg.text(
        width / 2.0,
        PAGE_MARGIN + PAGE_TITLE_HEIGHT / 2.0,
        PAGE_TITLE,
        28.0,
        "600",
        INK_COLOR,
        "middle",
    );

    svg.begin_group(PAGE_MARGIN, top, Some("key-selector"));
    draw_circle_of_fifths(&mut svg, state.key);
    svg.end_group();

    svg.begin_group(PAGE_MARGIN, top + CIRCLE_SIZE + OPTIONS_TOP_GAP, Some("options"));
    svg.text(0.0, 0.0, "Options", 16.0, "600", INK_COLOR, "start");
    for (i, (label, value)) in lines.iter().enumerate() {
        let y = (i + 1) as f64 * OPTIONS_LINE_HEIGHT;
        svg.text(0.0, y, label, 13.0, "500", MUTED_TEXT_COLOR, "start");
        svg.text(110.0, y, value, 13.0, "normal", INK_COLOR, "start");
    }
    svg.end_group();

    svg.begin_group(right_x, top, None);
    draw_fretboard(
        &mut svg,
        &instrument,
        state.key,
        state.scale,
        state.orientation,
        state.show_note_names,
    );
    svg.end_group();

    svg.build()
}
