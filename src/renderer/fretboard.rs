//! Fretboard diagram: grid layout for either orientation and the SVG
//! drawing of frets, strings, inlays, labels and scale notes.

use super::constants::*;
use super::svg_builder::{empty_svg, SvgBuilder};
use crate::fretboard::Instrument;
use crate::state::Orientation;
use crate::theory::{Note, ScaleType};

/// Grid geometry for one instrument in one orientation.
///
/// Coordinates returned by [`FretboardLayout::position`] are relative to
/// the board origin (the nut on the first string). The whole board is
/// offset by `padding` inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardLayout {
    pub orientation: Orientation,
    pub string_count: usize,
    pub fret_count: u32,
    /// Distance between adjacent fret positions
    pub fret_spacing: f64,
    /// Distance between adjacent strings
    pub string_spacing: f64,
    pub padding: f64,
}

impl FretboardLayout {
    pub fn new(instrument: &Instrument, orientation: Orientation) -> Self {
        let (fret_spacing, string_spacing) = if orientation.is_horizontal() {
            (FRET_SPACING_HORIZONTAL, STRING_SPACING_HORIZONTAL)
        } else {
            (FRET_SPACING_VERTICAL, STRING_SPACING_VERTICAL)
        };
        Self {
            orientation,
            string_count: instrument.string_count(),
            fret_count: instrument.fret_count,
            fret_spacing,
            string_spacing,
            padding: FRETBOARD_PADDING,
        }
    }

    /// Extent along the strings, including the open position.
    pub fn board_length(&self) -> f64 {
        (self.fret_count as f64 + 1.0) * self.fret_spacing
    }

    /// Extent across the strings.
    pub fn board_width(&self) -> f64 {
        self.string_count.saturating_sub(1) as f64 * self.string_spacing
    }

    /// Canvas size `(width, height)` including padding.
    pub fn canvas_size(&self) -> (f64, f64) {
        let along = self.board_length() + self.padding * 2.0;
        let across = self.board_width() + self.padding * 2.0;
        if self.orientation.is_horizontal() {
            (along, across)
        } else {
            (across, along)
        }
    }

    /// Map a distance along the strings and across them to board (x, y).
    fn place(&self, along: f64, across: f64) -> (f64, f64) {
        if self.orientation.is_horizontal() {
            (along, across)
        } else {
            (across, along)
        }
    }

    /// Board coordinates of a note at `fret` on `string_index`.
    pub fn position(&self, fret: u32, string_index: usize) -> (f64, f64) {
        self.place(
            fret as f64 * self.fret_spacing,
            string_index as f64 * self.string_spacing,
        )
    }
}

/// Draw the fretboard onto `svg` with its top-left corner at the current
/// origin.
pub(super) fn draw_fretboard(
    svg: &mut SvgBuilder,
    instrument: &Instrument,
    root: Note,
    scale: ScaleType,
    orientation: Orientation,
    show_note_names: bool,
) {
    let layout = FretboardLayout::new(instrument, orientation);
    let horizontal = orientation.is_horizontal();
    let length = layout.board_length();
    let width = layout.board_width();

    svg.begin_group(layout.padding, layout.padding, Some("fretboard"));

    // Frets
    for fret in 0..=layout.fret_count {
        let along = fret as f64 * layout.fret_spacing;
        let (x1, y1) = layout.place(along, 0.0);
        let (x2, y2) = layout.place(along, width);
        if fret == 0 {
            svg.line(x1, y1, x2, y2, NUT_COLOR, NUT_WIDTH);
        } else {
            svg.line(x1, y1, x2, y2, FRET_COLOR, FRET_WIDTH);
        }
    }

    // Strings
    for string_index in 0..layout.string_count {
        let across = string_index as f64 * layout.string_spacing;
        let (x1, y1) = layout.place(0.0, across);
        let (x2, y2) = layout.place(length, across);
        let stroke = STRING_BASE_WIDTH + string_index as f64 * STRING_WIDTH_STEP;
        svg.line(x1, y1, x2, y2, STRING_COLOR, stroke);
    }

    // Inlays, centred between the previous fret and this one
    for fret in MARKER_FRETS.into_iter().filter(|&f| f <= layout.fret_count) {
        let along = (fret as f64 - 0.5) * layout.fret_spacing;
        let middle = width / 2.0;
        if DOUBLE_MARKER_FRETS.contains(&fret) {
            for across in [middle - layout.string_spacing, middle + layout.string_spacing] {
                let (cx, cy) = layout.place(along, across);
                svg.circle(cx, cy, MARKER_RADIUS, MARKER_COLOR, "none", 0.0);
            }
        } else {
            let (cx, cy) = layout.place(along, middle);
            svg.circle(cx, cy, MARKER_RADIUS, MARKER_COLOR, "none", 0.0);
        }
    }

    // Fret numbers
    for fret in 0..=layout.fret_count {
        let along = fret as f64 * layout.fret_spacing;
        let (x, y) = if horizontal {
            (along, -FRET_NUMBER_OFFSET)
        } else {
            (-FRET_NUMBER_OFFSET_VERTICAL, along)
        };
        let label = if fret == 0 { "Open".to_string() } else { fret.to_string() };
        svg.text(x, y, &label, 11.0, "normal", MUTED_TEXT_COLOR, "middle");
    }

    // Tuning labels
    for (string_index, open_note) in instrument.tuning.iter().enumerate() {
        let across = string_index as f64 * layout.string_spacing;
        let (x, y) = if horizontal {
            (-TUNING_LABEL_OFFSET, across)
        } else {
            (across, -TUNING_LABEL_OFFSET_VERTICAL)
        };
        svg.text(x, y, open_note.display_name(), 12.0, "500", INK_COLOR, "middle");
    }

    // Scale notes: roots solid black, other scale notes inverted
    for note in instrument.fret_notes(root, scale).iter().filter(|n| n.is_in_scale) {
        let (x, y) = layout.position(note.fret, note.string_index);
        let (fill, text_fill) = if note.is_root {
            (ROOT_FILL, "#fff")
        } else {
            (SCALE_NOTE_FILL, "#000")
        };
        svg.circle(x, y, NOTE_RADIUS, fill, NOTE_STROKE, NOTE_STROKE_WIDTH);
        if show_note_names {
            svg.text(x, y, note.note.display_name(), 10.0, "bold", text_fill, "middle");
        }
    }

    svg.end_group();
}

/// Render a fretboard for the standard mandolin.
pub fn render_fretboard_svg(
    root: Note,
    scale: ScaleType,
    orientation: Orientation,
    show_note_names: bool,
) -> String {
    render_instrument_fretboard_svg(&Instrument::mandolin(), root, scale, orientation, show_note_names)
}

/// Render a fretboard for any instrument.
pub fn render_instrument_fretboard_svg(
    instrument: &Instrument,
    root: Note,
    scale: ScaleType,
    orientation: Orientation,
    show_note_names: bool,
) -> String {
    if instrument.tuning.is_empty() {
        return empty_svg("No strings configured");
    }
    tracing::debug!(
        root = root.name(),
        scale = scale.id(),
        orientation = orientation.id(),
        "rendering fretboard"
    );

    let layout = FretboardLayout::new(instrument, orientation);
    let (width, height) = layout.canvas_size();
    let mut svg = SvgBuilder::new(width, height);
    draw_fretboard(&mut svg, instrument, root, scale, orientation, show_note_names);
    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_canvas() {
        let layout = FretboardLayout::new(&Instrument::mandolin(), Orientation::Horizontal);
        assert_eq!(layout.board_length(), 900.0);
        assert_eq!(layout.board_width(), 120.0);
        assert_eq!(layout.canvas_size(), (1020.0, 240.0));
        assert_eq!(layout.position(3, 2), (150.0, 80.0));
    }

    #[test]
    fn vertical_canvas_swaps_axes() {
        let layout = FretboardLayout::new(&Instrument::mandolin(), Orientation::Vertical);
        assert_eq!(layout.board_length(), 720.0);
        assert_eq!(layout.board_width(), 150.0);
        assert_eq!(layout.canvas_size(), (270.0, 840.0));
        assert_eq!(layout.position(3, 2), (100.0, 120.0));
    }

    #[test]
    fn huge_fret_count_does_not_overflow() {
        let absurd = Instrument {
            tuning: vec![Note::G],
            fret_count: u32::MAX,
        };
        let layout = FretboardLayout::new(&absurd, Orientation::Horizontal);
        assert_eq!(layout.board_length(), (u32::MAX as f64 + 1.0) * 50.0);
        assert_eq!(layout.board_width(), 0.0);
    }

    #[test]
    fn markers_beyond_last_fret_are_skipped() {
        let short = Instrument {
            tuning: vec![Note::G, Note::D, Note::A, Note::E],
            fret_count: 6,
        };
        let svg = render_instrument_fretboard_svg(
            &short,
            Note::C,
            ScaleType::Major,
            Orientation::Horizontal,
            false,
        );
        // Frets 3 and 5 only.
        assert_eq!(svg.matches(&format!(r#"fill="{}""#, MARKER_COLOR)).count(), 2);
    }

    #[test]
    fn empty_instrument_renders_placeholder() {
        let none = Instrument { tuning: vec![], fret_count: 12 };
        let svg = render_instrument_fretboard_svg(
            &none,
            Note::C,
            ScaleType::Major,
            Orientation::Horizontal,
            true,
        );
        assert!(svg.contains("No strings configured"));
    }
}
