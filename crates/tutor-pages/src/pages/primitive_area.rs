//! Area under a function and its primitive.
//!
//! Every press of increase, same or decrease appends one sample to the
//! primitive, kept in the `prev_y_prim` store for the life of the session.
//! The function itself is drawn as the finite differences of that history.

use tutor_model::{Fill, Figure, Payload, Trace, Value};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

pub const PATH: &str = "/primitive-area";
pub const NAME: &str = "Area and primitive function";

const STORE: &str = "prev_y_prim";
const AREA_TEXT: &str = "Area under derivative function equals primitive function";

/// Append the step `n` to the history. An empty history starts at `[0]`.
pub fn accumulate(history: &[f64], n: f64) -> Vec<f64> {
    if history.is_empty() {
        return vec![0.0];
    }
    let mut next = history.to_vec();
    next.push(n);
    next
}

/// Step function of consecutive differences as `(x, y)`: each difference is
/// held over one unit, so it appears twice with x pairs `(i, i + 1)`.
/// Histories shorter than two samples draw a single point at the origin.
pub fn step_function(history: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if history.len() <= 1 {
        return (vec![0.0], vec![0.0]);
    }
    let mut x = Vec::with_capacity(2 * (history.len() - 1));
    let mut y = Vec::with_capacity(2 * (history.len() - 1));
    for (i, pair) in history.windows(2).enumerate() {
        let diff = pair[1] - pair[0];
        let start = i as f64;
        x.extend([start, start + 1.0]);
        y.extend([diff, diff]);
    }
    (x, y)
}

pub fn primitive_figure(history: &[f64]) -> Figure {
    let x: Vec<f64> = (0..history.len()).map(|i| i as f64).collect();
    let mut figure = Figure::new()
        .with_trace(Trace::new(x, history.to_vec()))
        .with_title("Primitive of function A")
        .with_x_range(0.0, history.len().max(1) as f64);
    figure.layout.yaxis.title = Some("Area of function A".to_string());
    figure
}

pub fn derivative_figure(history: &[f64]) -> Figure {
    let (x, y) = step_function(history);
    Figure::new()
        .with_trace(Trace::new(x, y).with_fill(Fill::ToZeroY))
        .with_title("Function A")
        .with_x_range(0.0, history.len().max(1) as f64)
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-incArea")
        .button("btn-sameArea")
        .button("btn-decArea")
        .store(STORE)
        .binding(Binding::new(
            "draw_primitive_function",
            [STORE, "btn-decArea", "btn-sameArea", "btn-incArea"],
            ["primitive_function", STORE],
            |inputs| {
                let n = inputs.number("btn-incArea")? - inputs.number("btn-decArea")?;
                let history = accumulate(inputs.sequence(STORE)?, n);
                Ok(vec![
                    Payload::figure(primitive_figure(&history)),
                    Payload::Value(Value::Sequence(history)),
                ])
            },
        ))
        .binding(Binding::new(
            "draw_derivative_function",
            [STORE],
            ["derivative_function"],
            |inputs| {
                Ok(vec![Payload::figure(derivative_figure(
                    inputs.sequence(STORE)?,
                ))])
            },
        ))
        .binding(Binding::new(
            "area_formula",
            [STORE],
            ["area_calculation_primitive_function"],
            |_| Ok(vec![Payload::text(AREA_TEXT)]),
        ))
        .layout(LayoutNode::heading("Area and primitive function"))
        .layout(LayoutNode::paragraph(
            "Explore how the area under a function can be determined by the value of its \
             primitive function. Use the buttons to increase, decrease or keep the area under \
             function A. When the area stays the same the primitive is horizontal, so its \
             derivative (function A) is zero.",
        ))
        .layout(LayoutNode::row(vec![
            LayoutNode::column(vec![
                LayoutNode::control("btn-incArea", "Increase area"),
                LayoutNode::control("btn-sameArea", "Same area"),
                LayoutNode::control("btn-decArea", "Decrease area"),
            ]),
            LayoutNode::column(vec![
                LayoutNode::target("derivative_function"),
                LayoutNode::target("primitive_function"),
            ]),
        ]))
        .layout(LayoutNode::target("area_calculation_primitive_function"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_starts_at_zero() {
        assert_eq!(accumulate(&[], 5.0), [0.0]);
        assert_eq!(accumulate(&[0.0, 1.0], 2.0), [0.0, 1.0, 2.0]);
    }

    #[test]
    fn differences_are_held_over_one_unit() {
        let (x, y) = step_function(&[0.0, 3.0, 3.0, 5.0]);
        assert_eq!(x, [0.0, 1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(y, [3.0, 3.0, 0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn short_histories_draw_the_origin() {
        assert_eq!(step_function(&[]), (vec![0.0], vec![0.0]));
        assert_eq!(step_function(&[4.0]), (vec![0.0], vec![0.0]));
        assert_eq!(step_function(&[0.0, 2.0]), (vec![0.0, 1.0], vec![2.0, 2.0]));
    }

    #[test]
    fn axes_cover_the_history() {
        let history = [0.0, 1.0, 2.0];
        assert_eq!(primitive_figure(&history).layout.xaxis.range, Some([0.0, 3.0]));
        assert_eq!(derivative_figure(&[]).layout.xaxis.range, Some([0.0, 1.0]));
    }
}
