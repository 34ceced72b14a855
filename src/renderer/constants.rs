//! Shared constants for the renderers (all in SVG user units).

pub(super) const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

// ── Circle of fifths ────────────────────────────────────────────────
pub const CIRCLE_SIZE: f64 = 280.0; // square canvas
pub const CIRCLE_OUTER_RADIUS: f64 = 120.0;
pub const CIRCLE_INNER_RADIUS: f64 = 70.0;
pub(super) const CIRCLE_CENTER_INSET: f64 = 5.0; // centre disc sits inside the ring
pub(super) const CIRCLE_TITLE_Y: f64 = 20.0;
pub(super) const CIRCLE_CAPTION_OFFSET_Y: f64 = 28.0;

// ── Fretboard ───────────────────────────────────────────────────────
pub(super) const FRET_SPACING_HORIZONTAL: f64 = 50.0;
pub(super) const FRET_SPACING_VERTICAL: f64 = 40.0;
pub(super) const STRING_SPACING_HORIZONTAL: f64 = 40.0;
pub(super) const STRING_SPACING_VERTICAL: f64 = 50.0;
pub(super) const FRETBOARD_PADDING: f64 = 60.0;
pub(super) const NOTE_RADIUS: f64 = 14.0;
pub(super) const MARKER_RADIUS: f64 = 6.0;
pub(super) const NUT_WIDTH: f64 = 4.0;
pub(super) const FRET_WIDTH: f64 = 1.0;
pub(super) const STRING_BASE_WIDTH: f64 = 2.0;
pub(super) const STRING_WIDTH_STEP: f64 = 0.5; // thicker toward the last string
pub(super) const NOTE_STROKE_WIDTH: f64 = 2.0;
pub(super) const FRET_NUMBER_OFFSET: f64 = 25.0; // horizontal: above the board
pub(super) const FRET_NUMBER_OFFSET_VERTICAL: f64 = 30.0; // vertical: left of the board
pub(super) const TUNING_LABEL_OFFSET: f64 = 35.0; // horizontal: left of the nut
pub(super) const TUNING_LABEL_OFFSET_VERTICAL: f64 = 30.0; // vertical: above the nut

/// Inlay positions; fret 12 (the octave) gets a double dot.
pub(super) const MARKER_FRETS: [u32; 7] = [3, 5, 7, 10, 12, 15, 17];
pub(super) const DOUBLE_MARKER_FRETS: [u32; 1] = [12];

// ── Page ────────────────────────────────────────────────────────────
pub(super) const PAGE_MARGIN: f64 = 24.0;
pub(super) const PAGE_TITLE_HEIGHT: f64 = 60.0;
pub(super) const PANEL_GAP: f64 = 32.0;
pub(super) const OPTIONS_LINE_HEIGHT: f64 = 22.0;
pub(super) const OPTIONS_TOP_GAP: f64 = 24.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const INK_COLOR: &str = "#333";
pub(super) const MUTED_TEXT_COLOR: &str = "#666";
pub(super) const SEGMENT_FILL: &str = "#f8f8f8";
pub(super) const SEGMENT_SELECTED_FILL: &str = "#333";
pub(super) const SEGMENT_STROKE: &str = "#ccc";
pub(super) const CENTER_STROKE: &str = "#ddd";
pub(super) const NUT_COLOR: &str = "#333";
pub(super) const FRET_COLOR: &str = "#999";
pub(super) const STRING_COLOR: &str = "#8B7355";
pub(super) const MARKER_COLOR: &str = "#ddd";
pub(super) const ROOT_FILL: &str = "#000";
pub(super) const SCALE_NOTE_FILL: &str = "#fff";
pub(super) const NOTE_STROKE: &str = "#000";
