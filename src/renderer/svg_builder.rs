//! SVG builder — accumulates SVG elements and produces the final string.

use super::constants::FONT_FAMILY;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
    depth: usize,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            depth: 0,
        }
    }

    pub(super) fn build(mut self) -> String {
        while self.depth > 0 {
            self.end_group();
        }
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: {};">"#,
            self.width, self.height, self.width, self.height, FONT_FAMILY
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn push(&mut self, element: String) {
        let indent = "  ".repeat(self.depth);
        self.elements.push(format!("{indent}{element}"));
    }

    /// Open a `<g>` translated to (x, y). Must be paired with `end_group`.
    pub(super) fn begin_group(&mut self, x: f64, y: f64, class: Option<&str>) {
        let class_attr = class.map(|c| format!(r#" class="{c}""#)).unwrap_or_default();
        self.push(format!(
            r#"<g transform="translate({:.1},{:.1})"{}>"#,
            x, y, class_attr
        ));
        self.depth += 1;
    }

    pub(super) fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("</g>".to_string());
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, fill, stroke, stroke_width
            ));
        } else {
            self.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                cx, cy, r, fill, stroke, stroke_width
            ));
        } else {
            self.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                cx, cy, r, fill
            ));
        }
    }

    /// Text centred vertically on `y` (dominant-baseline middle).
    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
            x, y, size, weight, fill, anchor, escape(content)
        ));
    }

    /// Path tagged with a data attribute so hosts can map clicks back.
    pub(super) fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64, data: Option<(&str, &str)>) {
        let data_attr = data
            .map(|(name, value)| format!(r#" data-{}="{}""#, name, escape(value)))
            .unwrap_or_default();
        self.push(format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{:.1}"{}/>"#,
            d, fill, stroke, stroke_width, data_attr
        ));
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        escape(message)
    )
}
