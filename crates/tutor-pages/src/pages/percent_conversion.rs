//! Percent, promille and parts-per-million conversion.
//!
//! Editing any of the three inputs rewrites the other two, so the inputs
//! are both sources and destinations of the single binding.

use tutor_model::{Axis, Figure, Layer, Line, Margin, MinorTicks, Payload, Shape, Title, Value};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page};

pub const PATH: &str = "/percent-promille-ppm";
pub const NAME: &str = "Percent, promille, PPM Conversion";

const INPUTS: [&str; 3] = ["percent-input", "promille-input", "ppm-input"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Promille,
    Ppm,
}

impl Unit {
    pub fn from_input(id: &str) -> Option<Self> {
        match id {
            "percent-input" => Some(Self::Percent),
            "promille-input" => Some(Self::Promille),
            "ppm-input" => Some(Self::Ppm),
            _ => None,
        }
    }

    /// Value of the whole.
    pub fn max(self) -> u64 {
        match self {
            Self::Percent => 100,
            Self::Promille => 1_000,
            Self::Ppm => 1_000_000,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Percent => "#1f77b4",
            Self::Promille => "#2ca02c",
            Self::Ppm => "#ff7f0e",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Percent => "Percent",
            Self::Promille => "Promille",
            Self::Ppm => "PPM",
        }
    }
}

/// One quantity expressed in all three units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub percent: f64,
    pub promille: f64,
    pub ppm: f64,
}

/// Recompute the other two units from the one that changed. Without a
/// changed input (initial load) the values are kept as given.
pub fn convert(changed: Option<Unit>, percent: f64, promille: f64, ppm: f64) -> Conversion {
    match changed {
        Some(Unit::Percent) => Conversion {
            percent,
            promille: percent * 10.0,
            ppm: percent * 10_000.0,
        },
        Some(Unit::Promille) => Conversion {
            percent: promille / 10.0,
            promille,
            ppm: promille * 1_000.0,
        },
        Some(Unit::Ppm) => Conversion {
            percent: ppm / 10_000.0,
            promille: ppm / 1_000.0,
            ppm,
        },
        None => Conversion {
            percent,
            promille,
            ppm,
        },
    }
}

/// A bar filled to `value / max` of its frame. The fill may run past the
/// frame; the axis then widens to show all of it.
pub fn fill_figure(unit: Unit, value: f64) -> Figure {
    let max = unit.max();
    let major_step = max / 10;
    let major: Vec<u64> = (0..=max).step_by(major_step as usize).collect();
    let minor: Vec<f64> = major
        .windows(2)
        .flat_map(|pair| {
            let step = (pair[1] - pair[0]) as f64 / 10.0;
            (1..10).map(move |j| pair[0] as f64 + f64::from(j) * step)
        })
        .collect();
    let fraction = value / max as f64;
    let color = unit.color();

    let mut figure = Figure::new();
    figure.add_shape(
        Shape::rect(0.0, 0.0, fraction, 1.0)
            .with_fillcolor(color)
            .with_line(Line::color(color).with_width(2.0))
            .with_layer(Layer::Below),
    );
    figure.add_shape(
        Shape::rect(0.0, 0.0, 1.0, 1.0)
            .with_line(Line::color(color).with_width(3.0))
            .with_fillcolor("rgba(0,0,0,0)")
            .with_layer(Layer::Below),
    );
    figure.layout.xaxis = Axis {
        range: Some([0.0, fraction.max(1.0)]),
        tickvals: major.iter().map(|&tick| tick as f64 / max as f64).collect(),
        ticktext: major.iter().map(u64::to_string).collect(),
        ticks: Some("outside".to_string()),
        ticklen: Some(10.0),
        tickwidth: Some(3.0),
        tickcolor: Some("black".to_string()),
        minor: Some(MinorTicks {
            tickvals: minor.iter().map(|tick| tick / max as f64).collect(),
            ticks: Some("outside".to_string()),
            ticklen: Some(6.0),
            tickwidth: Some(1.0),
            tickcolor: Some("black".to_string()),
            ..MinorTicks::default()
        }),
        fixedrange: Some(true),
        ..Axis::default()
    };
    figure.layout.yaxis = Axis {
        range: Some([-0.3, 1.0]),
        visible: Some(false),
        fixedrange: Some(true),
        ..Axis::default()
    };
    figure.layout.title = Some(Title {
        text: unit.title().to_string(),
        x: None,
    });
    figure.layout.margin = Some(Margin {
        l: 10,
        r: 10,
        t: 40,
        b: 40,
    });
    figure.layout.height = Some(140);
    figure
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .number_input("percent-input", Some(1.0))
        .number_input("promille-input", Some(10.0))
        .number_input("ppm-input", Some(10_000.0))
        .binding(Binding::new(
            "update_all",
            INPUTS,
            [
                "percent-input",
                "promille-input",
                "ppm-input",
                "percent-graph",
                "promille-graph",
                "ppm-graph",
            ],
            |inputs| {
                let changed = inputs
                    .trigger()
                    .and_then(|id| Unit::from_input(id.as_str()));
                let values = convert(
                    changed,
                    inputs.number("percent-input")?,
                    inputs.number("promille-input")?,
                    inputs.number("ppm-input")?,
                );
                Ok(vec![
                    Payload::Value(Value::Number(values.percent)),
                    Payload::Value(Value::Number(values.promille)),
                    Payload::Value(Value::Number(values.ppm)),
                    Payload::figure(fill_figure(Unit::Percent, values.percent)),
                    Payload::figure(fill_figure(Unit::Promille, values.promille)),
                    Payload::figure(fill_figure(Unit::Ppm, values.ppm)),
                ])
            },
        ))
        .layout(LayoutNode::heading("Percent, promille and PPM Conversion"))
        .layout(LayoutNode::row(vec![
            LayoutNode::control("percent-input", "Percent"),
            LayoutNode::target("percent-graph"),
        ]))
        .layout(LayoutNode::row(vec![
            LayoutNode::control("promille-input", "Promille"),
            LayoutNode::target("promille-graph"),
        ]))
        .layout(LayoutNode::row(vec![
            LayoutNode::control("ppm-input", "Parts per million"),
            LayoutNode::target("ppm-graph"),
        ]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_unit_drives_the_others() {
        assert_eq!(
            convert(Some(Unit::Percent), 2.0, 0.0, 0.0),
            Conversion {
                percent: 2.0,
                promille: 20.0,
                ppm: 20_000.0
            }
        );
        assert_eq!(
            convert(Some(Unit::Promille), 0.0, 5.0, 0.0),
            Conversion {
                percent: 0.5,
                promille: 5.0,
                ppm: 5_000.0
            }
        );
        assert_eq!(
            convert(Some(Unit::Ppm), 0.0, 0.0, 250_000.0),
            Conversion {
                percent: 25.0,
                promille: 250.0,
                ppm: 250_000.0
            }
        );
        assert_eq!(
            convert(None, 1.0, 10.0, 10_000.0),
            Conversion {
                percent: 1.0,
                promille: 10.0,
                ppm: 10_000.0
            }
        );
    }

    #[test]
    fn ticks_have_nine_minors_between_majors() {
        let figure = fill_figure(Unit::Ppm, 10_000.0);
        let axis = &figure.layout.xaxis;
        assert_eq!(axis.tickvals.len(), 11);
        assert_eq!(axis.ticktext.first().map(String::as_str), Some("0"));
        assert_eq!(axis.ticktext.last().map(String::as_str), Some("1000000"));
        assert_eq!(axis.minor.as_ref().map(|minor| minor.tickvals.len()), Some(90));
    }

    #[test]
    fn overfull_bar_widens_the_axis() {
        let figure = fill_figure(Unit::Percent, 150.0);
        assert_eq!(figure.layout.xaxis.range, Some([0.0, 1.5]));
        assert_eq!(figure.layout.shapes[0].x1, 1.5);
    }
}
