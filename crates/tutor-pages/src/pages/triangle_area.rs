//! Triangle area as the sum or difference of two right triangles.
//!
//! The apex `A` sits above the base `BD` at `x = 1 + n`, where `n` moves by
//! half a unit per click. The height foot `C` splits the triangle into `ABC`
//! and `ACD`; once `C` leaves the base the area becomes their difference.

use tutor_model::{Annotation, Axis, Figure, Font, Mode, Payload, Trace};
use tutor_reactive::{Binding, BindingError, BindingInputs, GraphError, LayoutNode, Page};

pub const PATH: &str = "/triangle-area";
pub const NAME: &str = "Triangle area";

const BUTTONS: [&str; 2] = ["btn-left", "btn-right"];

pub fn apex_offset(left_clicks: f64, right_clicks: f64) -> f64 {
    0.5 * (right_clicks - left_clicks)
}

fn offset(inputs: &BindingInputs<'_>) -> Result<f64, BindingError> {
    Ok(apex_offset(
        inputs.number("btn-left")?,
        inputs.number("btn-right")?,
    ))
}

fn labeled_triangle(
    title: &str,
    x: Vec<f64>,
    y: Vec<f64>,
    labels: &[&str],
    x_range: (f64, f64),
    annotations: [(f64, f64, &str); 2],
) -> Figure {
    let trace = Trace::polygon(x, y)
        .with_mode(Mode::LinesText)
        .with_text(labels.iter().map(|label| (*label).to_string()).collect())
        .with_textfont(Font::sized(20.0));
    let mut figure = Figure::new()
        .with_trace(trace)
        .with_title(title)
        .with_x_range(x_range.0, x_range.1);
    figure.layout.xaxis.visible = Some(false);
    figure.layout.yaxis = Axis::hidden();
    for (x, y, text) in annotations {
        figure.add_annotation(Annotation::label(x, y, text));
    }
    figure
}

pub fn triangle_figure(n: f64) -> Figure {
    labeled_triangle(
        "Triangle",
        vec![1.0 + n, 0.0, 2.0, 1.0 + n, 1.0 + n, 1.0 + n],
        vec![2.0, 0.0, 0.0, 2.0, 0.0, 2.0],
        &["A", "B", "D", "A", "C"],
        ((n - 1.0).min(-1.0), (n + 2.0).max(3.0)),
        [(1.0, -0.2, "b"), (1.05 + n, 1.0, "h")],
    )
}

pub fn sub_triangle1_figure(n: f64) -> Figure {
    labeled_triangle(
        "Triangle 1",
        vec![1.0 + n, 0.0, 1.0 + n, 1.0 + n],
        vec![2.0, 0.0, 0.0, 2.0],
        &["A", "B", "C"],
        ((n - 1.0).min(-1.0), (n + 2.0).max(2.0)),
        [(0.5 + n / 2.0, -0.2, "b1"), (1.1 + n, 1.0, "h")],
    )
}

pub fn sub_triangle2_figure(n: f64) -> Figure {
    labeled_triangle(
        "Triangle 2",
        vec![1.0 + n, 1.0 + n, 2.0, 1.0 + n],
        vec![2.0, 0.0, 0.0, 2.0],
        &["A", "C", "D"],
        ((n - 1.0).min(-1.0), (n + 2.0).max(3.0)),
        [(1.5 + n / 2.0, -0.2, "b2"), (0.9 + n, 1.0, "h")],
    )
}

/// How the area of the whole triangle follows from the two parts.
pub fn area_text(n: f64) -> &'static str {
    if n > -1.0 && n < 1.0 {
        "Triangle area = Triangle 1 area + Triangle 2 area = (b1 * h) / 2 + (b2 * h) / 2 = (b1 + b2) * h / 2 = (b * h) / 2"
    } else if n == -1.0 {
        "Triangle area = Triangle 2 area = (b2 * h) / 2 = (b * h) / 2"
    } else if n == 1.0 {
        "Triangle area = Triangle 1 area = (b1 * h) / 2 = (b * h) / 2"
    } else if n < -1.0 {
        "Triangle area = Triangle 2 area - Triangle 1 area = (b2 * h) / 2 - (b1 * h) / 2 = (b2 - b1) * h / 2 = (b * h) / 2"
    } else {
        "Triangle area = Triangle 1 area - Triangle 2 area = (b1 * h) / 2 - (b2 * h) / 2 = (b1 - b2) * h / 2 = (b * h) / 2"
    }
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-left")
        .button("btn-right")
        .binding(Binding::new("draw_triangle", BUTTONS, ["triangle"], |inputs| {
            Ok(vec![Payload::figure(triangle_figure(offset(inputs)?))])
        }))
        .binding(Binding::new(
            "draw_sub_triangle1",
            BUTTONS,
            ["sub_triangle1"],
            |inputs| Ok(vec![Payload::figure(sub_triangle1_figure(offset(inputs)?))]),
        ))
        .binding(Binding::new(
            "draw_sub_triangle2",
            BUTTONS,
            ["sub_triangle2"],
            |inputs| Ok(vec![Payload::figure(sub_triangle2_figure(offset(inputs)?))]),
        ))
        .binding(Binding::new(
            "area_formula",
            BUTTONS,
            ["area_calculations"],
            |inputs| Ok(vec![Payload::text(area_text(offset(inputs)?))]),
        ))
        .layout(LayoutNode::heading("Triangle area formula"))
        .layout(LayoutNode::paragraph(
            "Explore the triangle area formula and see why the area formula stays the same \
             regardless of the shape of the triangle. The triangle area is calculated by \
             creating two sub triangles which areas are added or subtracted depending on the \
             shape of the original triangle, but the triangle area formula stays the same.",
        ))
        .layout(LayoutNode::target("triangle"))
        .layout(LayoutNode::row(vec![
            LayoutNode::target("sub_triangle1"),
            LayoutNode::target("sub_triangle2"),
        ]))
        .layout(LayoutNode::target("area_calculations"))
        .layout(LayoutNode::paragraph("Area = b * h / 2"))
        .layout(LayoutNode::row(vec![
            LayoutNode::control("btn-left", "Move A left"),
            LayoutNode::control("btn-right", "Move A right"),
        ]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_text_follows_apex_position() {
        assert!(area_text(0.0).contains("Triangle 1 area + Triangle 2 area"));
        assert!(area_text(-1.0).starts_with("Triangle area = Triangle 2 area ="));
        assert!(area_text(1.0).starts_with("Triangle area = Triangle 1 area ="));
        assert!(area_text(-1.5).contains("Triangle 2 area - Triangle 1 area"));
        assert!(area_text(2.0).contains("Triangle 1 area - Triangle 2 area"));
    }

    #[test]
    fn axis_grows_with_the_apex() {
        let figure = triangle_figure(apex_offset(0.0, 6.0));
        assert_eq!(figure.layout.xaxis.range, Some([-1.0, 5.0]));
        let figure = sub_triangle1_figure(apex_offset(4.0, 0.0));
        assert_eq!(figure.layout.xaxis.range, Some([-3.0, 2.0]));
    }
}
