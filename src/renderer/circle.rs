//! Circle-of-fifths key selector: radial geometry, hit testing and SVG.
//!
//! Twelve equal annular segments run clockwise from 12 o'clock in
//! circle-of-fifths order. Angles are measured clockwise from the top,
//! so a point at angle `a` and radius `r` sits at
//! `(cx + r·sin a, cy − r·cos a)` in SVG coordinates.

use std::f64::consts::TAU;

use super::constants::*;
use super::svg_builder::SvgBuilder;
use crate::theory::{Note, CIRCLE_OF_FIFTHS};

const SEGMENT_COUNT: usize = CIRCLE_OF_FIFTHS.len();
const SEGMENT_ANGLE: f64 = TAU / SEGMENT_COUNT as f64;

/// Radial layout of the key selector on its square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// One key segment of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub note: Note,
    /// Clockwise from 12 o'clock, in radians
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path data relative to the circle centre
    pub path: String,
    /// Label anchor on the mid radius, relative to the circle centre
    pub label_x: f64,
    pub label_y: f64,
}

impl Default for CircleGeometry {
    fn default() -> Self {
        Self {
            center_x: CIRCLE_SIZE / 2.0,
            center_y: CIRCLE_SIZE / 2.0,
            inner_radius: CIRCLE_INNER_RADIUS,
            outer_radius: CIRCLE_OUTER_RADIUS,
        }
    }
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

impl CircleGeometry {
    pub fn segments(&self) -> Vec<Segment> {
        (0..SEGMENT_COUNT).map(|i| self.segment(i)).collect()
    }

    /// Segment at position `index` on the circle (wraps past 11).
    pub fn segment(&self, index: usize) -> Segment {
        let index = index % SEGMENT_COUNT;
        let start_angle = index as f64 * SEGMENT_ANGLE;
        let end_angle = start_angle + SEGMENT_ANGLE;
        let (r0, r1) = (self.inner_radius, self.outer_radius);

        let (ox0, oy0) = polar(r1, start_angle);
        let (ox1, oy1) = polar(r1, end_angle);
        let (ix1, iy1) = polar(r0, end_angle);
        let (ix0, iy0) = polar(r0, start_angle);
        let path = format!(
            "M{:.2},{:.2}A{r1},{r1},0,0,1,{:.2},{:.2}L{:.2},{:.2}A{r0},{r0},0,0,0,{:.2},{:.2}Z",
            ox0, oy0, ox1, oy1, ix1, iy1, ix0, iy0
        );

        let (label_x, label_y) = polar((r0 + r1) / 2.0, (start_angle + end_angle) / 2.0);

        Segment {
            note: CIRCLE_OF_FIFTHS[index],
            start_angle,
            end_angle,
            path,
            label_x,
            label_y,
        }
    }

    /// Key whose segment contains the canvas point, if any. Points in the
    /// centre disc or outside the ring select nothing.
    pub fn key_at_point(&self, x: f64, y: f64) -> Option<Note> {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = dx.hypot(dy);
        if !(self.inner_radius..=self.outer_radius).contains(&distance) {
            return None;
        }
        let angle = dx.atan2(-dy).rem_euclid(TAU);
        let index = ((angle / SEGMENT_ANGLE) as usize).min(SEGMENT_COUNT - 1);
        Some(CIRCLE_OF_FIFTHS[index])
    }
}

/// Draw the key selector onto `svg` with its top-left corner at the
/// current origin.
pub(super) fn draw_circle_of_fifths(svg: &mut SvgBuilder, selected: Note) {
    let geometry = CircleGeometry::default();

    svg.text(
        geometry.center_x,
        CIRCLE_TITLE_Y,
        "Circle of Fifths",
        14.0,
        "600",
        INK_COLOR,
        "middle",
    );

    svg.begin_group(geometry.center_x, geometry.center_y, None);

    for segment in geometry.segments() {
        let is_selected = segment.note == selected;
        let fill = if is_selected { SEGMENT_SELECTED_FILL } else { SEGMENT_FILL };
        svg.path(&segment.path, fill, SEGMENT_STROKE, 1.0, Some(("key", segment.note.name())));
    }

    for segment in geometry.segments() {
        let label_fill = if segment.note == selected { "#fff" } else { INK_COLOR };
        svg.text(
            segment.label_x,
            segment.label_y,
            segment.note.display_name(),
            13.0,
            "500",
            label_fill,
            "middle",
        );
    }

    svg.circle(
        0.0,
        0.0,
        geometry.inner_radius - CIRCLE_CENTER_INSET,
        SEGMENT_FILL,
        CENTER_STROKE,
        1.0,
    );
    svg.text(0.0, 0.0, selected.display_name(), 28.0, "bold", INK_COLOR, "middle");
    svg.text(
        0.0,
        CIRCLE_CAPTION_OFFSET_Y,
        "selected key",
        12.0,
        "normal",
        MUTED_TEXT_COLOR,
        "middle",
    );

    svg.end_group();
}

/// Render the circle-of-fifths key selector as a standalone SVG.
pub fn render_circle_of_fifths_svg(selected: Note) -> String {
    tracing::debug!(key = selected.name(), "rendering circle of fifths");
    let mut svg = SvgBuilder::new(CIRCLE_SIZE, CIRCLE_SIZE);
    draw_circle_of_fifths(&mut svg, selected);
    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_follow_circle_order() {
        let geometry = CircleGeometry::default();
        let notes: Vec<Note> = geometry.segments().iter().map(|s| s.note).collect();
        assert_eq!(notes, CIRCLE_OF_FIFTHS.to_vec());
        assert_eq!(geometry.segment(12).note, Note::C);
    }

    #[test]
    fn first_label_is_right_of_top() {
        let s = CircleGeometry::default().segment(0);
        // Mid-angle 15°, mid-radius 95.
        assert!((s.label_x - 95.0 * 15f64.to_radians().sin()).abs() < 1e-9);
        assert!((s.label_y + 95.0 * 15f64.to_radians().cos()).abs() < 1e-9);
        assert!(s.path.starts_with("M0.00,-120.00A120,120,0,0,1,60.00,-103.92"));
    }

    #[test]
    fn hit_test_compass_points() {
        let g = CircleGeometry::default();
        assert_eq!(g.key_at_point(141.0, 45.0), Some(Note::C));
        assert_eq!(g.key_at_point(235.0, 141.0), Some(Note::A));
        assert_eq!(g.key_at_point(139.0, 235.0), Some(Note::FSharp));
        assert_eq!(g.key_at_point(45.0, 139.0), Some(Note::DSharp));
        // Just left of top belongs to the last segment.
        assert_eq!(g.key_at_point(139.0, 45.0), Some(Note::F));
    }

    #[test]
    fn hit_test_misses_centre_and_outside() {
        let g = CircleGeometry::default();
        assert_eq!(g.key_at_point(140.0, 140.0), None);
        assert_eq!(g.key_at_point(140.0, 140.0 - 69.0), None);
        assert_eq!(g.key_at_point(140.0, 10.0), None);
        assert_eq!(g.key_at_point(0.0, 0.0), None);
    }

    #[test]
    fn hit_test_rejects_non_finite_points() {
        let g = CircleGeometry::default();
        assert_eq!(g.key_at_point(f64::NAN, f64::NAN), None);
        assert_eq!(g.key_at_point(f64::NAN, 45.0), None);
        assert_eq!(g.key_at_point(f64::INFINITY, 140.0), None);
        assert_eq!(g.key_at_point(140.0, f64::NEG_INFINITY), None);
    }

    #[test]
    fn hit_test_agrees_with_label_positions() {
        let g = CircleGeometry::default();
        for s in g.segments() {
            let hit = g.key_at_point(g.center_x + s.label_x, g.center_y + s.label_y);
            assert_eq!(hit, Some(s.note));
        }
    }
}
