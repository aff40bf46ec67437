//! Declarative chart description.
//!
//! The shape follows the plotly figure schema (`data` traces plus a `layout`)
//! so that the serialized JSON can be handed to any plotly-compatible
//! renderer unchanged. Unset options are omitted from the output, and
//! non-finite coordinates serialize as `null`, which renderers draw as gaps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Centered chart title.
    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.layout.title = Some(Title::centered(text));
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, lo: f64, hi: f64) -> Self {
        self.layout.xaxis.range = Some([lo, hi]);
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, lo: f64, hi: f64) -> Self {
        self.layout.yaxis.range = Some([lo, hi]);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.layout.showlegend = Some(show);
        self
    }

    pub fn push_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.layout.shapes.push(shape);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.layout.annotations.push(annotation);
    }

    /// True when nothing would be drawn.
    pub fn is_blank(&self) -> bool {
        self.data.is_empty() && self.layout.shapes.is_empty() && self.layout.annotations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "lines+text")]
    LinesText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    #[serde(rename = "toself")]
    ToSelf,
    #[serde(rename = "tozeroy")]
    ToZeroY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

impl Line {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn dashed() -> Self {
        Self {
            dash: Some(Dash::Dash),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A scatter trace: a polyline, a set of markers, or a filled polygon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Closed polygon filled to itself.
    pub fn polygon(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::new(x, y).with_fill(Fill::ToSelf)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_fillcolor(mut self, color: impl Into<String>) -> Self {
        self.fillcolor = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn with_textposition(mut self, position: impl Into<String>) -> Self {
        self.textposition = Some(position.into());
        self
    }

    #[must_use]
    pub fn with_textfont(mut self, font: Font) -> Self {
        self.textfont = Some(font);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn hide_legend(mut self) -> Self {
        self.showlegend = Some(false);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

impl Title {
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: Some(0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Axis::is_unset")]
    pub xaxis: Axis,
    #[serde(default, skip_serializing_if = "Axis::is_unset")]
    pub yaxis: Axis,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tickvals: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ticktext: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticklen: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickwidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<MinorTicks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixedrange: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<String>,
}

impl Axis {
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MinorTicks {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tickvals: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticklen: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickwidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridwidth: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Circle,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Below,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,
}

impl Shape {
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            kind: ShapeKind::Rect,
            xref: None,
            yref: None,
            x0,
            y0,
            x1,
            y1,
            line: None,
            fillcolor: None,
            layer: None,
        }
    }

    /// Circle inscribed in the given bounding box, in data coordinates.
    pub fn circle(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            xref: Some("x".to_string()),
            yref: Some("y".to_string()),
            ..Self::rect(x0, y0, x1, y1)
        }
    }

    /// Horizontal line spanning the whole plot width.
    pub fn hline(y: f64) -> Self {
        Self {
            kind: ShapeKind::Line,
            xref: Some("paper".to_string()),
            yref: Some("y".to_string()),
            ..Self::rect(0.0, y, 1.0, y)
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_fillcolor(mut self, color: impl Into<String>) -> Self {
        self.fillcolor = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl Annotation {
    /// Plain text label without an arrow.
    pub fn label(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            showarrow: false,
            font: None,
            xanchor: None,
            align: None,
        }
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_xanchor(mut self, anchor: impl Into<String>) -> Self {
        self.xanchor = Some(anchor.into());
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }
}
