//! Sine curve parameters and unit-circle drawing shared by the trigonometry
//! pages.

use std::f64::consts::PI;

use tutor_model::{Annotation, Figure, Line, Marker, Mode, Shape, Trace};
use tutor_reactive::{BindingError, BindingInputs};

use crate::geometry::{format_number, linspace, round_to};
use crate::pages::net_clicks;

/// Click-counter buttons that adjust the four curve parameters.
pub const PARAMETER_BUTTONS: [&str; 8] = [
    "btn-decPhase",
    "btn-incPhase",
    "btn-decAmp",
    "btn-incAmp",
    "btn-decFreq",
    "btn-incFreq",
    "btn-decCenter",
    "btn-incCenter",
];

/// `y = amplitude * sin(frequency * x + phase) + center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub center: f64,
}

impl Default for SineParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            center: 0.0,
        }
    }
}

impl SineParams {
    /// Each parameter moves one step per click: amplitude, frequency and
    /// center by 1, the phase by 0.1.
    pub fn from_inputs(inputs: &BindingInputs<'_>) -> Result<Self, BindingError> {
        Ok(Self {
            amplitude: 1.0 + net_clicks(inputs, "btn-decAmp", "btn-incAmp")?,
            frequency: 1.0 + net_clicks(inputs, "btn-decFreq", "btn-incFreq")?,
            phase: 0.1 * net_clicks(inputs, "btn-decPhase", "btn-incPhase")?,
            center: net_clicks(inputs, "btn-decCenter", "btn-incCenter")?,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x + self.phase).sin() + self.center
    }

    /// `None` when the frequency is zero.
    pub fn period(&self) -> Option<f64> {
        (self.frequency != 0.0).then(|| 2.0 * PI / self.frequency)
    }

    /// Horizontal shift `C` of the form `A * sin(B(x + C)) + M`.
    pub fn phase_shift(&self) -> Option<f64> {
        (self.frequency != 0.0).then(|| self.phase / self.frequency)
    }

    /// Base solutions `(x1, x2)` of `eval(x) == y`.
    ///
    /// `None` when the equation has no solution: the amplitude or frequency
    /// is zero, or `y` lies outside the range of the curve.
    pub fn solutions(&self, y: f64) -> Option<(f64, f64)> {
        if self.amplitude == 0.0 || self.frequency == 0.0 {
            return None;
        }
        let ratio = (y - self.center) / self.amplitude;
        if !(-1.0..=1.0).contains(&ratio) {
            return None;
        }
        let base = ratio.asin();
        Some((
            (base - self.phase) / self.frequency,
            (PI - base - self.phase) / self.frequency,
        ))
    }

    /// The solution family `x + 2πk/B` for `k` in `-5..=4`.
    pub fn solution_family(&self, x: f64) -> Vec<f64> {
        (-5..=4)
            .map(|k| x + 2.0 * PI / self.frequency * f64::from(k))
            .collect()
    }

    /// `count` samples of the curve over `[start, end]`.
    pub fn sample(&self, start: f64, end: f64, count: usize) -> Trace {
        let x = linspace(start, end, count);
        let y = x.iter().map(|&x| self.eval(x)).collect();
        Trace::new(x, y).with_mode(Mode::Lines)
    }

    pub fn describe(&self) -> String {
        format!(
            "Phase: {} and Amplitude: {} and Frequency: {} and Center: {}",
            format_number(self.phase),
            format_number(self.amplitude),
            format_number(self.frequency),
            format_number(self.center),
        )
    }

    pub fn equation(&self) -> String {
        format!(
            "y = {} * sin({} * x + {}) + {}",
            format_number(self.amplitude),
            format_number(self.frequency),
            format_number(self.phase),
            format_number(self.center),
        )
    }

    pub fn shifted_equation(&self) -> String {
        let shift = self
            .phase_shift()
            .map_or_else(|| "undefined".to_string(), format_number);
        format!(
            "y = A * sin(B(x + C)) + M = {} * sin({} * (x + {shift})) + {}",
            format_number(self.amplitude),
            format_number(self.frequency),
            format_number(self.center),
        )
    }
}

pub fn angle_label(angle: f64) -> String {
    format!("v = {}", format_number(round_to(angle, 2)))
}

/// Dashed level line carrying a text label at its first point.
pub fn labeled_level(x: Vec<f64>, y: Vec<f64>, label: String, position: &str) -> Trace {
    Trace::new(x, y)
        .with_line(Line::dashed())
        .with_mode(Mode::LinesText)
        .with_text(vec![label])
        .with_textposition(position)
}

/// Square 500x500 chart of the unit circle with the given traces on top.
pub fn unit_circle_figure(traces: Vec<Trace>) -> Figure {
    let mut figure = Figure::new()
        .with_title("Unit circle")
        .with_x_range(-1.5, 1.5)
        .with_y_range(-1.5, 1.5)
        .with_legend(false);
    for trace in traces {
        figure.push_trace(trace);
    }
    figure.add_shape(Shape::circle(-1.0, -1.0, 1.0, 1.0).with_line(Line::color("LightSeaGreen")));
    figure.layout.autosize = Some(false);
    figure.layout.width = Some(500);
    figure.layout.height = Some(500);
    figure
}

/// Radius from the origin to `(x, y)`.
pub fn radius(x: f64, y: f64) -> Trace {
    Trace::new(vec![0.0, x], vec![0.0, y])
}

pub fn angle_annotation(x: f64, y: f64, angle: f64) -> Annotation {
    Annotation::label(x, y, angle_label(angle))
}

pub fn with_marker_size(trace: Trace, size: f64) -> Trace {
    trace.with_marker(Marker {
        size: Some(size),
        color: None,
    })
}
