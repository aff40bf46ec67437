//! Set operations on a two-circle Venn diagram.
//!
//! The diagram is static SVG. Bindings fill the three disjoint regions
//! (A only, B only, both) with the elements typed into the two inputs, and
//! highlight the regions that make up the operation last pressed.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tutor_model::{Payload, RegionFill};
use tutor_reactive::{Binding, GraphError, LayoutNode, Page, SvgElement};

use crate::geometry::{Circle, intersection_path};

pub const PATH: &str = "/set-theory";
pub const NAME: &str = "Set operations";

pub const COLOR_A: &str = "#add8e6";
pub const COLOR_B: &str = "#90ee90";
pub const HIGHLIGHT: &str = "#add8e6";

pub const CIRCLE_A: Circle = Circle::new(200.0, 160.0, 120.0);
pub const CIRCLE_B: Circle = Circle::new(360.0, 160.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Union,
    Intersection,
    A,
    B,
    AMinusB,
    BMinusA,
    SymmetricDifference,
}

impl Operation {
    pub const ALL: [Self; 7] = [
        Self::Union,
        Self::Intersection,
        Self::A,
        Self::B,
        Self::AMinusB,
        Self::BMinusA,
        Self::SymmetricDifference,
    ];

    pub fn button(self) -> &'static str {
        match self {
            Self::Union => "btn-union",
            Self::Intersection => "btn-intersect",
            Self::A => "btn-A-only",
            Self::B => "btn-B-only",
            Self::AMinusB => "btn-A-minus-B",
            Self::BMinusA => "btn-B-minus-A",
            Self::SymmetricDifference => "btn-A-delta-B",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Union => "A ∪ B",
            Self::Intersection => "A ∩ B",
            Self::A => "A",
            Self::B => "B",
            Self::AMinusB => "A - B",
            Self::BMinusA => "B - A",
            Self::SymmetricDifference => "A Δ B",
        }
    }

    pub fn from_button(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| operation.button() == id)
    }

    /// Which of (A only, B only, both) the operation covers.
    pub fn regions(self) -> [bool; 3] {
        match self {
            Self::Union => [true, true, true],
            Self::Intersection => [false, false, true],
            Self::A => [true, false, true],
            Self::B => [false, true, true],
            Self::AMinusB => [true, false, false],
            Self::BMinusA => [false, true, false],
            Self::SymmetricDifference => [true, true, false],
        }
    }
}

/// Fills for (A only, B only, both). Nothing is highlighted until an
/// operation button is pressed.
pub fn highlight(operation: Option<Operation>) -> [RegionFill; 3] {
    let regions = operation.map_or([false; 3], Operation::regions);
    regions.map(|on| {
        if on {
            RegionFill::highlighted(HIGHLIGHT)
        } else {
            RegionFill::hidden()
        }
    })
}

/// Comma-separated tokens made of digits only; everything else is ignored.
pub fn parse_set(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn numeric_order(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.cmp(b))
}

fn join_numeric<'a>(elements: impl Iterator<Item = &'a String>) -> String {
    let mut sorted: Vec<&str> = elements.map(String::as_str).collect();
    sorted.sort_by(|a, b| numeric_order(a, b));
    sorted.join(", ")
}

/// Region texts (A only, B only, both), each in numeric order.
pub fn region_texts(a: &str, b: &str) -> [String; 3] {
    let set_a = parse_set(a);
    let set_b = parse_set(b);
    [
        join_numeric(set_a.difference(&set_b)),
        join_numeric(set_b.difference(&set_a)),
        join_numeric(set_a.intersection(&set_b)),
    ]
}

/// SVG paths for (A only, B only, both). The single-set regions are the
/// circle plus the lens as a second subpath, filled even-odd so the lens
/// is cut out.
pub fn region_paths(a: Circle, b: Circle) -> [String; 3] {
    match intersection_path(a, b) {
        Some(lens) => [
            format!("{} {lens}", a.path()),
            format!("{} {lens}", b.path()),
            lens,
        ],
        None => [a.path(), b.path(), String::new()],
    }
}

fn diagram() -> LayoutNode {
    let [a_only, b_only, both] = region_paths(CIRCLE_A, CIRCLE_B);
    let outline = |circle: Circle, stroke: &str| SvgElement::Circle {
        cx: circle.center.x,
        cy: circle.center.y,
        r: circle.radius,
        stroke: stroke.to_string(),
    };
    LayoutNode::Svg {
        width: 700,
        height: 380,
        children: vec![
            outline(CIRCLE_A, COLOR_A),
            outline(CIRCLE_B, COLOR_B),
            SvgElement::Path {
                id: "path-A-only".to_string(),
                d: a_only,
                even_odd: true,
            },
            SvgElement::Path {
                id: "path-B-only".to_string(),
                d: b_only,
                even_odd: true,
            },
            SvgElement::Path {
                id: "path-intersection".to_string(),
                d: both,
                even_odd: false,
            },
            SvgElement::Text {
                id: "A_only".to_string(),
                x: CIRCLE_A.center.x - 40.0,
                y: CIRCLE_A.center.y,
            },
            SvgElement::Text {
                id: "B_only".to_string(),
                x: CIRCLE_B.center.x + 40.0,
                y: CIRCLE_B.center.y,
            },
            SvgElement::Text {
                id: "A_and_B".to_string(),
                x: (CIRCLE_A.center.x + CIRCLE_B.center.x) / 2.0,
                y: CIRCLE_A.center.y,
            },
        ],
    }
}

pub fn page() -> Result<Page, GraphError> {
    let mut builder = Page::builder(PATH, NAME)
        .text_input("input-set-a")
        .text_input("input-set-b");
    for operation in Operation::ALL {
        builder = builder.button(operation.button());
    }
    let buttons = LayoutNode::column(
        Operation::ALL
            .into_iter()
            .map(|operation| LayoutNode::control(operation.button(), operation.label()))
            .collect(),
    );

    builder
        .binding(Binding::new(
            "update_text",
            ["input-set-a", "input-set-b"],
            ["A_only", "B_only", "A_and_B"],
            |inputs| {
                let texts =
                    region_texts(&inputs.text("input-set-a")?, &inputs.text("input-set-b")?);
                Ok(texts.into_iter().map(Payload::Text).collect())
            },
        ))
        .binding(Binding::new(
            "update_highlight",
            Operation::ALL.map(Operation::button),
            ["path-A-only", "path-B-only", "path-intersection"],
            |inputs| {
                let operation = inputs
                    .trigger()
                    .and_then(|id| Operation::from_button(id.as_str()));
                Ok(highlight(operation).into_iter().map(Payload::Region).collect())
            },
        ))
        .layout(LayoutNode::heading("Set Operations - Venn Diagram"))
        .layout(LayoutNode::row(vec![
            LayoutNode::column(vec![
                LayoutNode::control("input-set-a", "Set A"),
                LayoutNode::control("input-set-b", "Set B"),
                buttons,
            ]),
            diagram(),
        ]))
        .build()
}
