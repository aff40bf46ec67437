//! Both angles sharing a sine value (`v` and `π - v`) and both sharing a
//! cosine value (`v` and `-v`) on the unit circle.

use std::f64::consts::PI;

use tutor_model::{Figure, Payload};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

use super::stepper;
use crate::geometry::{format_number, round_to};
use crate::trig::{angle_annotation, labeled_level, radius, unit_circle_figure};

pub const PATH: &str = "/trig-all-solutions";
pub const NAME: &str = "Find both angles for sin and cos in unity circle";

pub fn both_angles_figure(v: f64) -> Figure {
    let (x, y) = (v.cos(), v.sin());
    let mut figure = unit_circle_figure(vec![
        radius(x, y),
        radius(-x, y),
        radius(x, -y),
        labeled_level(
            vec![-x, x],
            vec![y, y],
            format!("sin(v) = {}", format_number(round_to(y, 2))),
            "top right",
        ),
        labeled_level(
            vec![x, x],
            vec![-y, y],
            format!("cos(v) = {}", format_number(round_to(x, 2))),
            "top right",
        ),
    ]);
    figure.add_annotation(angle_annotation(x / 3.0, y / 3.0, v));
    figure.add_annotation(angle_annotation(-x / 3.0, y / 3.0, PI - v));
    figure.add_annotation(angle_annotation(x / 3.0, -y / 3.0, -v));
    figure
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-dec")
        .button("btn-inc")
        .binding(Binding::new(
            "draw_unity_circle",
            ["btn-dec", "btn-inc"],
            ["unity_circle2"],
            |inputs| {
                let v = 0.1 * (inputs.number("btn-inc")? - inputs.number("btn-dec")?);
                Ok(vec![Payload::figure(both_angles_figure(v))])
            },
        ))
        .layout(LayoutNode::heading(
            "Visualize both angles giving the same sin or cos value",
        ))
        .layout(LayoutNode::paragraph(
            "Explore how two angles give the same sin or cos value respectively. These two \
             angles are a subset of all possible values which can be explored more on the \
             sine equation page.",
        ))
        .layout(LayoutNode::target("unity_circle2"))
        .layout(stepper("Angle (v)", "btn-dec", "btn-inc"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_radii_share_sine_and_cosine() {
        let figure = both_angles_figure(0.7);
        let tip = |index: usize| (figure.data[index].x[1], figure.data[index].y[1]);
        let (x, y) = tip(0);
        assert_eq!(tip(1), (-x, y));
        assert_eq!(tip(2), (x, -y));

        let labels: Vec<&str> = figure
            .layout
            .annotations
            .iter()
            .map(|annotation| annotation.text.as_str())
            .collect();
        assert_eq!(labels, ["v = 0.7", "v = 2.44", "v = -0.7"]);
    }
}
