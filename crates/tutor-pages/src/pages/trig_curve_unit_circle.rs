//! The sine curve next to the unit circle for the same angle `v`.

use std::f64::consts::PI;

use tutor_model::{Figure, Mode, Payload, Trace};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

use super::stepper;
use crate::geometry::{format_number, linspace, round_to};
use crate::trig::{
    angle_annotation, angle_label, labeled_level, radius, unit_circle_figure, with_marker_size,
};

pub const PATH: &str = "/trig-curve-unit-circle";
pub const NAME: &str = "Trig curve unit circle";

const BUTTONS: [&str; 2] = ["btn-dec", "btn-inc"];

/// The angle moves by 0.1 radians per click.
pub fn angle(dec_clicks: f64, inc_clicks: f64) -> f64 {
    0.1 * (inc_clicks - dec_clicks)
}

fn sin_label(v: f64) -> String {
    format!("sin(v) = {}", format_number(round_to(v.sin(), 2)))
}

pub fn sine_figure(v: f64) -> Figure {
    let x = linspace(-2.0 * PI, 2.0 * PI, 100);
    let y = x.iter().map(|x| x.sin()).collect();
    let traces = [
        Trace::new(x, y).with_mode(Mode::Lines),
        Trace::new(vec![v], vec![v.sin()]),
        labeled_level(vec![0.0, v], vec![v.sin(); 2], sin_label(v), "top right"),
        labeled_level(vec![v, v], vec![0.0, v.sin()], angle_label(v), "bottom right"),
    ];

    let mut figure = Figure::new().with_legend(false).with_title("Sine curve");
    for trace in traces {
        figure.push_trace(with_marker_size(trace, 12.0));
    }
    figure.layout.xaxis.title = Some("angle (v)".to_string());
    figure.layout.yaxis.title = Some("sin(v)".to_string());
    figure
}

pub fn circle_figure(v: f64) -> Figure {
    let (x, y) = (v.cos(), v.sin());
    let mut figure = unit_circle_figure(vec![
        radius(x, y),
        labeled_level(vec![0.0, x], vec![y, y], sin_label(v), "top right"),
    ]);
    figure.add_annotation(angle_annotation(x / 3.0, y / 3.0, v));
    figure
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-dec")
        .button("btn-inc")
        .binding(Binding::new(
            "draw_sin_curve",
            BUTTONS,
            ["sin_curve_unity"],
            |inputs| {
                let v = angle(inputs.number("btn-dec")?, inputs.number("btn-inc")?);
                Ok(vec![Payload::figure(sine_figure(v))])
            },
        ))
        .binding(Binding::new(
            "draw_unity_circle",
            BUTTONS,
            ["unity_circle"],
            |inputs| {
                let v = angle(inputs.number("btn-dec")?, inputs.number("btn-inc")?);
                Ok(vec![Payload::figure(circle_figure(v))])
            },
        ))
        .layout(LayoutNode::heading("Sine curve vs. unit circle visualization"))
        .layout(LayoutNode::target("sin_curve_unity"))
        .layout(LayoutNode::target("unity_circle"))
        .layout(stepper("Angle (v)", "btn-dec", "btn-inc"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_sits_on_the_curve() {
        let v = angle(0.0, 5.0);
        let figure = sine_figure(v);
        assert_eq!(figure.data[1].x, vec![v]);
        assert_eq!(figure.data[1].y, vec![v.sin()]);
        assert_eq!(figure.data[2].text, vec!["sin(v) = 0.48".to_string()]);
        assert_eq!(figure.data[3].text, vec!["v = 0.5".to_string()]);
    }

    #[test]
    fn radius_ends_on_the_circle() {
        let figure = circle_figure(angle(0.0, 10.0));
        let radius = &figure.data[0];
        let (x, y) = (radius.x[1], radius.y[1]);
        assert!((x.hypot(y) - 1.0).abs() < 1e-12);
        assert_eq!(figure.layout.annotations[0].text, "v = 1");
    }
}
