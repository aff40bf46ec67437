//! Sine curve parameters: amplitude, frequency, phase and center.

use std::f64::consts::PI;

use tutor_model::{Figure, Payload, Trace};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

use super::stepper;
use crate::trig::{PARAMETER_BUTTONS, SineParams};

pub const PATH: &str = "/trig-curve-param";
pub const NAME: &str = "Trig curve param";

pub fn curve_figure(params: &SineParams) -> Figure {
    Figure::new()
        .with_trace(params.sample(-2.0 * PI, 2.0 * PI, 100))
        .with_legend(false)
        .with_y_range(params.center - 5.0, params.center + 5.0)
}

/// One period either side of zero, with the phase shift `C` and the
/// period `T = 2π / B` marked.
///
/// A zero frequency has neither; the flat curve is drawn over `[-2π, 2π]`
/// without the markers.
pub fn period_figure(params: &SineParams) -> Figure {
    let center = params.center;
    let mut figure = Figure::new()
        .with_legend(true)
        .with_y_range(center - 5.0, center + 5.0);
    match (params.period(), params.phase_shift()) {
        (Some(period), Some(shift)) => {
            figure.push_trace(params.sample(-period, period, 100).with_name("sine function"));
            figure.push_trace(
                Trace::new(vec![0.0, -shift], vec![center, center]).with_name("C = phase shift"),
            );
            figure.push_trace(
                Trace::new(
                    vec![0.0, period],
                    vec![params.eval(0.0), params.eval(period)],
                )
                .with_name("B * T = 2*pi => B = 2*pi / T, where T is the period"),
            );
        }
        _ => {
            figure.push_trace(params.sample(-2.0 * PI, 2.0 * PI, 100).with_name("sine function"));
        }
    }
    figure
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-decAmp")
        .button("btn-incAmp")
        .button("btn-decFreq")
        .button("btn-incFreq")
        .button("btn-decPhase")
        .button("btn-incPhase")
        .button("btn-decCenter")
        .button("btn-incCenter")
        .binding(Binding::new(
            "draw_sin_curve",
            PARAMETER_BUTTONS,
            ["sin_curve"],
            |inputs| {
                let params = SineParams::from_inputs(inputs)?;
                Ok(vec![Payload::figure(curve_figure(&params))])
            },
        ))
        .binding(Binding::new(
            "draw_period_curve",
            PARAMETER_BUTTONS,
            ["sin_curve_2"],
            |inputs| {
                let params = SineParams::from_inputs(inputs)?;
                Ok(vec![Payload::figure(period_figure(&params))])
            },
        ))
        .binding(Binding::new(
            "sin_parameters",
            PARAMETER_BUTTONS,
            ["sin_parameters"],
            |inputs| Ok(vec![Payload::text(SineParams::from_inputs(inputs)?.describe())]),
        ))
        .binding(Binding::new(
            "sin_equation",
            PARAMETER_BUTTONS,
            ["sin_equation"],
            |inputs| Ok(vec![Payload::text(SineParams::from_inputs(inputs)?.equation())]),
        ))
        .binding(Binding::new(
            "sin_equation_shifted",
            PARAMETER_BUTTONS,
            ["sin_equation_2"],
            |inputs| {
                let params = SineParams::from_inputs(inputs)?;
                Ok(vec![Payload::text(params.shifted_equation())])
            },
        ))
        .layout(LayoutNode::heading("Sine function parameters visualization"))
        .layout(LayoutNode::paragraph(
            "Explore how the sine function graph changes when its parameters change. The \
             bottom plot and equation show the connection between the period and phase shift \
             seen in the plot and an alternative way of writing the sine equation.",
        ))
        .layout(LayoutNode::target("sin_curve"))
        .layout(LayoutNode::target("sin_parameters"))
        .layout(LayoutNode::target("sin_equation"))
        .layout(stepper("Amplitude", "btn-decAmp", "btn-incAmp"))
        .layout(stepper("Frequency", "btn-decFreq", "btn-incFreq"))
        .layout(stepper("Phase shift", "btn-decPhase", "btn-incPhase"))
        .layout(stepper("Function average", "btn-decCenter", "btn-incCenter"))
        .layout(LayoutNode::target("sin_curve_2"))
        .layout(LayoutNode::target("sin_equation_2"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_marker_spans_one_period() {
        let params = SineParams {
            frequency: 2.0,
            ..SineParams::default()
        };
        let figure = period_figure(&params);
        assert_eq!(figure.data.len(), 3);
        assert_eq!(figure.data[2].x, vec![0.0, PI]);
    }

    #[test]
    fn zero_frequency_drops_the_markers() {
        let params = SineParams {
            frequency: 0.0,
            ..SineParams::default()
        };
        let figure = period_figure(&params);
        assert_eq!(figure.data.len(), 1);
        assert!(figure.data[0].x.iter().all(|x| x.is_finite()));
    }
}
