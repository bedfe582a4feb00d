//! Hull documents (JSON) and SVG figures.
//!
//! The figure draws every input point as a dot and the hull as a closed ring
//! (last vertex joined back to the first) when it has at least two vertices.

use giftwrap::api::{Hull, PointSet, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output of `cli hull`, input of `cli figure`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullDoc {
    pub points: Vec<[f64; 2]>,
    pub hull: Vec<[f64; 2]>,
    pub hull_indices: Vec<usize>,
}

impl HullDoc {
    pub fn new(points: &PointSet, hull: &Hull) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            hull_indices: hull.indices().to_vec(),
        }
    }
}

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 40.0;

/// Maps data coordinates into the SVG canvas, y pointing up.
struct Frame {
    min: Vec2<f64>,
    scale: f64,
}

impl Frame {
    fn fit(points: &[[f64; 2]]) -> Self {
        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &[x, y] in points {
            min = Vec2::new(min.x.min(x), min.y.min(y));
            max = Vec2::new(max.x.max(x), max.y.max(y));
        }
        if points.is_empty() {
            min = Vec2::zeros();
            max = Vec2::new(1.0, 1.0);
        }
        let span_x = (max.x - min.x).max(1e-12);
        let span_y = (max.y - min.y).max(1e-12);
        let scale = ((WIDTH - 2.0 * MARGIN) / span_x).min((HEIGHT - 2.0 * MARGIN) / span_y);
        Self { min, scale }
    }

    fn map(&self, [x, y]: [f64; 2]) -> (f64, f64) {
        let sx = MARGIN + (x - self.min.x) * self.scale;
        let sy = HEIGHT - MARGIN - (y - self.min.y) * self.scale;
        (sx, sy)
    }
}

/// Render `doc` as a standalone SVG document.
pub fn render_svg(doc: &HullDoc, title: &str) -> String {
    let frame = Frame::fit(&doc.points);
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="24" text-anchor="middle" font-size="18">{}</text>"#,
        WIDTH / 2.0,
        escape(title)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="middle" font-size="12">x</text>"#,
        WIDTH / 2.0,
        HEIGHT - 8.0
    );
    let _ = writeln!(
        svg,
        r#"  <text x="12" y="{}" text-anchor="middle" font-size="12">y</text>"#,
        HEIGHT / 2.0
    );
    for &p in &doc.points {
        let (x, y) = frame.map(p);
        let _ = writeln!(
            svg,
            r##"  <circle cx="{x:.3}" cy="{y:.3}" r="3" fill="#1f77b4"/>"##
        );
    }
    if doc.hull.len() >= 2 {
        let ring: Vec<String> = doc
            .hull
            .iter()
            .chain(doc.hull.first())
            .map(|&p| {
                let (x, y) = frame.map(p);
                format!("{x:.3},{y:.3}")
            })
            .collect();
        let _ = writeln!(
            svg,
            r##"  <polyline points="{}" fill="none" stroke="#ff7f0e" stroke-width="2"/>"##,
            ring.join(" ")
        );
    }
    svg.push_str("</svg>\n");
    svg
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
