//! Why the interior angles of a triangle sum to 180°.
//!
//! The triangle is drawn with its interior angles `a`, `b`, `c` and its
//! exterior angles `A`, `B`, `C`. Next to it the three exterior angles are
//! laid out as sectors of one circle, showing that they add up to a full
//! turn.

use tutor_model::{
    Annotation, Axis, Dash, Figure, Fill, Font, Line, Margin, Marker, Mode, Payload, Trace,
};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

use crate::geometry::{Vec2, angle_arc, linspace, mean, outer_arc};

pub const PATH: &str = "/triangle-sum";
pub const NAME: &str = "Triangle angles sum to 180";

const LABELS: [&str; 3] = ["A", "B", "C"];
const SECTOR_COLORS: [&str; 3] = [
    "rgba(255,0,0,0.6)",
    "rgba(0,200,0,0.6)",
    "rgba(255,150,0,0.6)",
];
const LABEL_COLORS: [&str; 3] = ["rgba(255,0,0,1)", "rgba(0,200,0,1)", "rgba(255,150,0,1)"];
const INNER_FILL: &str = "rgba(100,150,255,0.3)";
const TRANSPARENT: &str = "rgba(0,0,0,0)";

const TRIANGLE_SHIFT: f64 = -2.0;
const CIRCLE_RADIUS: f64 = 0.33;

/// Vertices `A = (0, 0)`, `B = (1, 0)` and `C` for interior angles `a` at
/// `A` and `b` at `B`, in degrees. `None` when no triangle exists
/// (`a + b >= 180`).
pub fn triangle_vertices(a_deg: f64, b_deg: f64) -> Option<[Vec2; 3]> {
    let c_deg = 180.0 - a_deg - b_deg;
    if c_deg <= 0.0 {
        return None;
    }
    let (a, c) = (a_deg.to_radians(), c_deg.to_radians());
    let side = a.sin() / c.sin();
    Some([
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(side * a.cos(), side * a.sin()),
    ])
}

/// Short dashed continuation of each side past its vertex, pointing away
/// from the centroid.
fn extensions(points: &[Vec2; 3]) -> Vec<(Vec2, Vec2)> {
    let centroid = (points[0] + points[1] + points[2]) * (1.0 / 3.0);
    (0..3)
        .map(|i| {
            let vertex = points[i];
            let previous = points[(i + 2) % 3];
            let mut unit = (previous - vertex).unit();
            if (vertex + unit * 0.1).distance(centroid) < vertex.distance(centroid) {
                unit = -unit;
            }
            (vertex, vertex + unit * 0.3)
        })
        .collect()
}

/// Rotation (radians) that lines the sector midpoints up with the outer
/// bisector directions, as the circular mean of each sector's own
/// required rotation.
pub fn sector_rotation(spans_deg: [f64; 3], outer_directions: [f64; 3]) -> f64 {
    let mut running: f64 = 0.0;
    let mut required = Vec::with_capacity(3);
    for (span, direction) in spans_deg.into_iter().zip(outer_directions) {
        let midpoint = (running + span / 2.0).to_radians();
        required.push(direction - midpoint);
        running += span;
    }
    let sin: Vec<f64> = required.iter().map(|r| r.sin()).collect();
    let cos: Vec<f64> = required.iter().map(|r| r.cos()).collect();
    mean(&sin).atan2(mean(&cos))
}

fn closed_fan(vertex: Vec2, (xs, ys): (Vec<f64>, Vec<f64>), fill: &str) -> Trace {
    let x = std::iter::once(vertex.x)
        .chain(xs)
        .chain(std::iter::once(vertex.x))
        .collect();
    let y = std::iter::once(vertex.y)
        .chain(ys)
        .chain(std::iter::once(vertex.y))
        .collect();
    Trace::new(x, y)
        .with_fill(Fill::ToSelf)
        .with_fillcolor(fill)
        .with_line(Line::color(TRANSPARENT))
        .hide_legend()
}

fn segment(from: Vec2, to: Vec2, line: Line) -> Trace {
    Trace::new(vec![from.x, to.x], vec![from.y, to.y])
        .with_mode(Mode::Lines)
        .with_line(line)
        .hide_legend()
}

fn label(position: Vec2, text: impl Into<String>, font: Font) -> Annotation {
    Annotation::label(position.x, position.y, text).with_font(font)
}

/// The full illustration for interior angles `a` and `b` in degrees; an
/// empty figure when they leave no room for a third angle.
pub fn angle_sum_figure(a_deg: f64, b_deg: f64) -> Figure {
    let Some(points) = triangle_vertices(a_deg, b_deg) else {
        return Figure::new();
    };
    let c_deg = 180.0 - a_deg - b_deg;
    let shift = Vec2::new(TRIANGLE_SHIFT, 0.0);
    let shifted = points.map(|point| point + shift);
    let xs: Vec<f64> = shifted.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = shifted.iter().map(|point| point.y).collect();

    let mut figure = Figure::new();
    figure.push_trace(
        Trace::new(
            xs.iter().chain(xs.first()).copied().collect(),
            ys.iter().chain(ys.first()).copied().collect(),
        )
        .with_mode(Mode::LinesMarkers)
        .with_marker(Marker {
            size: Some(10.0),
            color: Some("blue".to_string()),
        })
        .with_line(Line::color("blue").with_width(3.0))
        .hide_legend(),
    );

    for (from, to) in extensions(&points) {
        figure.push_trace(segment(
            from + shift,
            to + shift,
            Line::color("gray").with_dash(Dash::Dash).with_width(2.0),
        ));
    }

    let mut outer_directions = [0.0; 3];
    for i in 0..3 {
        let vertex = shifted[i];
        let v1 = shifted[(i + 2) % 3] - vertex;
        let v2 = shifted[(i + 1) % 3] - vertex;

        figure.push_trace(closed_fan(
            vertex,
            angle_arc(vertex, v1, v2, 0.08, 40, true),
            INNER_FILL,
        ));
        let bisector = (v1.unit() + v2.unit()).unit();
        let interior = ["a", "b", "c"][i];
        figure.add_annotation(label(
            vertex + bisector * 0.06,
            interior,
            Font::sized(18.0).with_color("blue"),
        ));

        let outer_bisector = (-v1.unit() + v2.unit()).unit();
        outer_directions[i] = outer_bisector.angle();
        let label_position = vertex + outer_bisector * 0.18;
        let (ov1, ov2) = if i == 0 { (v2, -v1) } else { (-v1, v2) };
        figure.push_trace(closed_fan(
            vertex,
            outer_arc(vertex, ov1, ov2, label_position - vertex, 0.12, 40),
            SECTOR_COLORS[i],
        ));
        figure.add_annotation(label(
            label_position,
            LABELS[i],
            Font::sized(18.0).with_color(LABEL_COLORS[i]),
        ));
    }

    let (x_min, x_max) = min_max(&xs);
    let (y_min, y_max) = min_max(&ys);
    let y_mean = mean(&ys);
    let pad = (x_max - x_min).max(y_max - y_min) * 0.8;
    figure.layout.margin = Some(Margin {
        l: 20,
        r: 20,
        t: 20,
        b: 20,
    });
    figure.layout.xaxis = Axis {
        range: Some([-2.5, 2.5]),
        scaleanchor: Some("y".to_string()),
        showgrid: Some(false),
        visible: Some(false),
        ..Axis::default()
    };
    figure.layout.yaxis = Axis {
        range: Some([y_mean - pad, y_mean + pad]),
        showgrid: Some(false),
        visible: Some(false),
        ..Axis::default()
    };
    figure.layout.height = Some(600);

    let spans = [180.0 - a_deg, 180.0 - b_deg, 180.0 - c_deg];
    let rotation = sector_rotation(spans, outer_directions);
    let center = Vec2::new(0.0, y_mean);
    let mut running: f64 = 0.0;
    for (i, span) in spans.into_iter().enumerate() {
        let start = running.to_radians() + rotation;
        let end = (running + span).to_radians() + rotation;
        let theta = linspace(start, end, 120);
        let rim = |t: f64| center + Vec2::new(t.cos(), t.sin()) * CIRCLE_RADIUS;
        let (wedge_x, wedge_y): (Vec<f64>, Vec<f64>) =
            theta.iter().map(|&t| rim(t)).map(|p| (p.x, p.y)).unzip();
        figure.push_trace(
            closed_fan(center, (wedge_x, wedge_y), SECTOR_COLORS[i])
                .with_line(Line::color("black").with_width(1.0)),
        );
        figure.push_trace(segment(center, rim(start), Line::color("black").with_width(2.0)));
        figure.push_trace(segment(center, rim(end), Line::color("black").with_width(2.0)));

        let middle = (start + end) / 2.0;
        figure.add_annotation(label(
            center + Vec2::new(middle.cos(), middle.sin()) * 0.48,
            format!("{} ({span:.1}°)", LABELS[i]),
            Font::sized(16.0).with_color(LABEL_COLORS[i]),
        ));
        running += span;
    }

    figure.add_annotation(
        label(
            Vec2::new(1.5, y_mean),
            "Adding eq. (1), (2) and (3) ⇒ A + B + C + a + b + c = 180 + 180 + 180<br>\
             simplifying with eq (4) ⇒ a + b + c = 180",
            Font::sized(14.0),
        )
        .with_align("left"),
    );
    figure.add_annotation(
        label(
            Vec2::new(mean(&xs), y_min - 0.3),
            "(1) A + a = 180<br>(2) B + b = 180<br>(3) C + c = 180",
            Font::sized(16.0).with_color("black"),
        )
        .with_xanchor("center")
        .with_align("center"),
    );
    figure.add_annotation(
        label(
            Vec2::new(center.x, center.y - CIRCLE_RADIUS - 0.3),
            "(4) A + B + C = 360°<br>Imagine walking around the triangle.<br>\
             When reaching where you started,<br>you have turned 360°",
            Font::sized(18.0).with_color("black"),
        )
        .with_xanchor("center"),
    );
    figure
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .slider("angle-a", 20.0, 130.0, 1.0, 60.0)
        .slider("angle-b", 20.0, 130.0, 1.0, 70.0)
        .binding(Binding::new(
            "update_triangle",
            ["angle-a", "angle-b"],
            ["triangle-graph"],
            |inputs| {
                let figure = angle_sum_figure(inputs.number("angle-a")?, inputs.number("angle-b")?);
                Ok(vec![Payload::figure(figure)])
            },
        ))
        .layout(LayoutNode::heading("Triangle angles sum to 180"))
        .layout(LayoutNode::control("angle-a", "Angle a (°):"))
        .layout(LayoutNode::control("angle-b", "Angle b (°):"))
        .layout(LayoutNode::target("triangle-graph"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_vertex_closes_the_angles() {
        let [a, b, c] = triangle_vertices(60.0, 60.0).unwrap();
        assert!((a.distance(c) - 1.0).abs() < 1e-12);
        assert!((b.distance(c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn no_triangle_without_a_third_angle() {
        assert!(triangle_vertices(100.0, 80.0).is_none());
        assert!(angle_sum_figure(120.0, 90.0).is_blank());
    }

    #[test]
    fn exterior_sectors_fill_a_full_turn() {
        let figure = angle_sum_figure(60.0, 70.0);
        let sector_labels: Vec<&str> = figure
            .layout
            .annotations
            .iter()
            .map(|annotation| annotation.text.as_str())
            .filter(|text| text.ends_with("°)"))
            .collect();
        assert_eq!(sector_labels, ["A (120.0°)", "B (110.0°)", "C (130.0°)"]);
    }

    #[test]
    fn aligned_sectors_need_no_rotation() {
        let spans = [120.0, 120.0, 120.0];
        let directions = [60.0_f64, 180.0, 300.0].map(f64::to_radians);
        assert!(sector_rotation(spans, directions).abs() < 1e-12);
    }
}
