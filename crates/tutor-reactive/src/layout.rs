//! Static layout tree of a page.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum LayoutNode {
    Heading { text: String },
    Paragraph { text: String },
    /// A control, with the caption shown next to it.
    Control { id: String, label: String },
    /// A chart or text surface filled by a binding.
    Target { id: String },
    Row { children: Vec<LayoutNode> },
    Column { children: Vec<LayoutNode> },
    Svg {
        width: u32,
        height: u32,
        children: Vec<SvgElement>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum SvgElement {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: String,
    },
    /// A path whose fill is a render target.
    Path {
        id: String,
        d: String,
        even_odd: bool,
    },
    /// A text node whose content is a render target.
    Text { id: String, x: f64, y: f64 },
}

impl LayoutNode {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn control(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Control {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn target(id: impl Into<String>) -> Self {
        Self::Target { id: id.into() }
    }

    pub fn row(children: Vec<LayoutNode>) -> Self {
        Self::Row { children }
    }

    pub fn column(children: Vec<LayoutNode>) -> Self {
        Self::Column { children }
    }

    /// Every control or target identifier referenced in this subtree.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Control { id, .. } | Self::Target { id } => out.push(id),
            Self::Row { children } | Self::Column { children } => {
                for child in children {
                    child.collect_references(out);
                }
            }
            Self::Svg { children, .. } => {
                for element in children {
                    match element {
                        SvgElement::Path { id, .. } | SvgElement::Text { id, .. } => out.push(id),
                        SvgElement::Circle { .. } => {}
                    }
                }
            }
            Self::Heading { .. } | Self::Paragraph { .. } => {}
        }
    }
}
