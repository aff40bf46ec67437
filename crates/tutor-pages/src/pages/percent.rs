//! Percent change of a start amount, drawn as two bars.

use tutor_model::{Axis, Dash, Figure, Line, MinorTicks, Mode, Payload, Trace};
use tutor_reactive::{Binding, BindingError, BindingInputs, GraphError, LayoutNode, Page};

use super::{net_clicks, stepper};
use crate::geometry::format_number;

pub const PATH: &str = "/percent";
pub const NAME: &str = "Percent";

const ALL_BUTTONS: [&str; 4] = [
    "btn-decStart",
    "btn-incStart",
    "btn-decPercent",
    "btn-incPercent",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChange {
    pub start: f64,
    pub percent: f64,
}

impl PercentChange {
    /// The start amount begins at 100 and the percent at 0; every click
    /// moves one of them by one.
    pub fn from_clicks(start_clicks: f64, percent_clicks: f64) -> Self {
        Self {
            start: 100.0 + start_clicks,
            percent: percent_clicks,
        }
    }

    fn from_inputs(inputs: &BindingInputs<'_>) -> Result<Self, BindingError> {
        Ok(Self::from_clicks(
            start_clicks(inputs)?,
            percent_clicks(inputs)?,
        ))
    }

    pub fn change(&self) -> f64 {
        self.start * (self.percent / 100.0)
    }

    pub fn end(&self) -> f64 {
        self.start * (1.0 + self.percent / 100.0)
    }

    pub fn change_text(&self) -> String {
        let start = format_number(self.start);
        let percent = format_number(self.percent);
        format!(
            "Change amount: start amount / 100 * percent changes = {start} / 100 * {percent} = {}",
            format_number(self.start / 100.0 * self.percent)
        )
    }

    pub fn end_text(&self) -> String {
        let start = format_number(self.start);
        let percent = format_number(self.percent);
        format!(
            "End amount: start amount + change amount = {start} + {start} / 100 * {percent} \
             = {start} * (1 + {percent}/100) = {}",
            format_number(self.end())
        )
    }

    /// Start bar above the axis, end bar below it, the change as a dashed
    /// line on top of the start bar and a connector between the bar ends.
    pub fn figure(&self) -> Figure {
        let start = self.start;
        let end = start + self.change();
        let start_bar = Trace::polygon(
            vec![0.0, 0.0, start, start, 0.0],
            vec![5.0, 10.0, 10.0, 5.0, 5.0],
        )
        .with_mode(Mode::Lines)
        .with_name("start amount")
        .with_line(Line::color("blue"));
        let end_bar = Trace::polygon(
            vec![0.0, 0.0, end, end, 0.0],
            vec![-5.0, -10.0, -10.0, -5.0, -5.0],
        )
        .with_mode(Mode::Lines)
        .with_name("end amount")
        .with_line(Line::color("orange"));
        let change = Trace::new(vec![0.0, self.change()], vec![10.2, 10.2])
            .with_mode(Mode::Lines)
            .with_line(Line::color("black").with_width(3.0).with_dash(Dash::Dash))
            .with_name("changed amount");
        let connector = Trace::new(vec![start, end], vec![0.0, 0.0])
            .with_mode(Mode::Lines)
            .hide_legend()
            .with_line(Line::color("black").with_dash(Dash::Dash));

        let mut figure = Figure::new()
            .with_trace(start_bar)
            .with_trace(end_bar)
            .with_trace(change)
            .with_trace(connector)
            .with_legend(true);
        figure.layout.xaxis = Axis {
            range: Some([-2.0, start.max(end) + 5.0]),
            tick0: Some(0.0),
            dtick: Some(10.0),
            ticklen: Some(10.0),
            showgrid: Some(true),
            minor: Some(MinorTicks {
                dtick: Some(1.0),
                showgrid: Some(true),
                gridwidth: Some(0.5),
                ..MinorTicks::default()
            }),
            ..Axis::default()
        };
        figure.layout.yaxis = Axis {
            range: Some([-12.0, 12.0]),
            visible: Some(false),
            ..Axis::default()
        };
        figure
    }
}

fn start_clicks(inputs: &BindingInputs<'_>) -> Result<f64, BindingError> {
    net_clicks(inputs, "btn-decStart", "btn-incStart")
}

fn percent_clicks(inputs: &BindingInputs<'_>) -> Result<f64, BindingError> {
    net_clicks(inputs, "btn-decPercent", "btn-incPercent")
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .button("btn-decStart")
        .button("btn-incStart")
        .button("btn-decPercent")
        .button("btn-incPercent")
        .binding(Binding::new(
            "draw_start_amount",
            ALL_BUTTONS,
            ["start-and-end-amount"],
            |inputs| {
                let change = PercentChange::from_inputs(inputs)?;
                Ok(vec![Payload::figure(change.figure())])
            },
        ))
        .binding(Binding::new(
            "start_amount",
            ["btn-decStart", "btn-incStart"],
            ["start-amount"],
            |inputs| {
                let start = 100.0 + start_clicks(inputs)?;
                Ok(vec![Payload::text(format!(
                    "Start amount: {}",
                    format_number(start)
                ))])
            },
        ))
        .binding(Binding::new(
            "percent_change",
            ["btn-decPercent", "btn-incPercent"],
            ["percent-change"],
            |inputs| {
                Ok(vec![Payload::text(format!(
                    "Percent change: {}",
                    format_number(percent_clicks(inputs)?)
                ))])
            },
        ))
        .binding(Binding::new(
            "change_amount",
            ALL_BUTTONS,
            ["change-amount"],
            |inputs| {
                let change = PercentChange::from_inputs(inputs)?;
                Ok(vec![Payload::text(change.change_text())])
            },
        ))
        .binding(Binding::new(
            "end_amount",
            ALL_BUTTONS,
            ["end-amount"],
            |inputs| {
                let change = PercentChange::from_inputs(inputs)?;
                Ok(vec![Payload::text(change.end_text())])
            },
        ))
        .layout(LayoutNode::heading("Percent"))
        .layout(LayoutNode::paragraph(
            "Percent means per hundred, or one part per hundred total parts. Try for example \
             to increase a start value with 10% and then decrease the new value (by using the \
             new value as the start value) with 10%. Will the final end value be the same as \
             the start value you started with?",
        ))
        .layout(LayoutNode::target("start-amount"))
        .layout(LayoutNode::target("percent-change"))
        .layout(LayoutNode::target("change-amount"))
        .layout(LayoutNode::target("end-amount"))
        .layout(LayoutNode::target("start-and-end-amount"))
        .layout(stepper("Start amount", "btn-decStart", "btn-incStart"))
        .layout(stepper("Percent change", "btn-decPercent", "btn-incPercent"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_up_then_down_loses_one() {
        let up = PercentChange::from_clicks(0.0, 10.0);
        let raised = up.end();
        assert!((raised - 110.0).abs() < 1e-9);

        let down = PercentChange {
            start: raised,
            percent: -10.0,
        };
        let end = down.end();
        assert!((end - 99.0).abs() < 1e-9);
        assert_ne!(end, 100.0);
    }

    #[test]
    fn texts_show_the_arithmetic() {
        let change = PercentChange::from_clicks(0.0, 10.0);
        assert_eq!(
            change.change_text(),
            "Change amount: start amount / 100 * percent changes = 100 / 100 * 10 = 10"
        );
        assert_eq!(
            change.end_text(),
            "End amount: start amount + change amount = 100 + 100 / 100 * 10 \
             = 100 * (1 + 10/100) = 110"
        );
    }

    #[test]
    fn axis_fits_the_longer_bar() {
        let figure = PercentChange::from_clicks(0.0, 50.0).figure();
        assert_eq!(figure.layout.xaxis.range, Some([-2.0, 155.0]));
        assert_eq!(figure.data.len(), 4);
    }
}
