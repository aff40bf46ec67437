//! All solutions of `A * sin(B * x + C) + M = y`.

use std::f64::consts::PI;

use tutor_model::{Figure, Payload, Shape, Trace};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

use super::{net_clicks, stepper};
use crate::geometry::format_number;
use crate::trig::{PARAMETER_BUTTONS, SineParams};

pub const PATH: &str = "/trig-eq-all-solutions";
pub const NAME: &str = "Trig eq all solutions";

fn sources() -> impl Iterator<Item = &'static str> {
    ["btn-decY", "btn-incY"].into_iter().chain(PARAMETER_BUTTONS)
}

/// The curve over `[-4π, 4π]`, the target level `y` and, when the
/// equation is solvable, both solution families marked on that level.
pub fn solutions_figure(params: &SineParams, y: f64) -> Figure {
    let mut figure = Figure::new()
        .with_trace(params.sample(-4.0 * PI, 4.0 * PI, 100).with_name("sine function"))
        .with_legend(true)
        .with_x_range(-4.0 * PI, 4.0 * PI)
        .with_y_range(params.center - 5.0, params.center + 5.0);
    if let Some((x1, x2)) = params.solutions(y) {
        let frequency = format_number(params.frequency);
        let first = params.solution_family(x1);
        let second = params.solution_family(x2);
        let level = vec![y; first.len()];
        figure.push_trace(
            Trace::new(first, level.clone()).with_name(format!("x1 + n * 2 * pi / {frequency}")),
        );
        figure.push_trace(
            Trace::new(second, level).with_name(format!("pi - x1 + n * 2 * pi / {frequency}")),
        );
    }
    figure.add_shape(Shape::hline(y));
    figure
}

pub fn solution_text(params: &SineParams, y: f64) -> String {
    let equation = format!("{} = {}", params.equation(), format_number(y));
    match params.solutions(y) {
        Some((x1, x2)) => format!(
            "{equation} => x1 = {}, x2 = {}",
            format_number(x1),
            format_number(x2)
        ),
        None => format!("{equation} has no solution"),
    }
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-decY")
        .button("btn-incY")
        .button("btn-decAmp")
        .button("btn-incAmp")
        .button("btn-decFreq")
        .button("btn-incFreq")
        .button("btn-decPhase")
        .button("btn-incPhase")
        .button("btn-decCenter")
        .button("btn-incCenter")
        .binding(Binding::new(
            "draw_solutions",
            sources(),
            ["sin_curve_solution"],
            |inputs| {
                let params = SineParams::from_inputs(inputs)?;
                let y = net_clicks(inputs, "btn-decY", "btn-incY")?;
                Ok(vec![Payload::figure(solutions_figure(&params, y))])
            },
        ))
        .binding(Binding::new(
            "sin_equation_solution",
            sources(),
            ["sin_equation_solution"],
            |inputs| {
                let params = SineParams::from_inputs(inputs)?;
                let y = net_clicks(inputs, "btn-decY", "btn-incY")?;
                Ok(vec![Payload::text(solution_text(&params, y))])
            },
        ))
        .layout(LayoutNode::heading("Sine equation solutions"))
        .layout(LayoutNode::target("sin_curve_solution"))
        .layout(LayoutNode::target("sin_equation_solution"))
        .layout(stepper("y", "btn-decY", "btn-incY"))
        .layout(stepper("Amplitude", "btn-decAmp", "btn-incAmp"))
        .layout(stepper("Frequency", "btn-decFreq", "btn-incFreq"))
        .layout(stepper("Phase shift", "btn-decPhase", "btn-incPhase"))
        .layout(stepper("Function average", "btn-decCenter", "btn-incCenter"))
        .build()
}
