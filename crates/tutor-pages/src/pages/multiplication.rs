//! Multiplication is commutative: a `rows × cols` grid of squares turned a
//! quarter turn is a `cols × rows` grid with the same number of squares.

use tutor_model::{GridSpec, Payload};
use tutor_reactive::{Binding, BindingError, GraphError, LayoutNode, Page};

pub const PATH: &str = "/multiplication-commutative";
pub const NAME: &str = "Multiplication - commutative operation";

const SQUARE_COLOR: &str = "blue";
const AVAILABLE_WIDTH: f64 = 800.0;
const AVAILABLE_HEIGHT: f64 = 640.0;

/// Side of one square so the top grid fits the available area, between 5
/// and 50 pixels.
pub fn square_size(rows: u32, cols: u32) -> f64 {
    let by_width = AVAILABLE_WIDTH / f64::from(cols);
    let by_height = AVAILABLE_HEIGHT / f64::from(rows);
    by_width.min(by_height).min(50.0).max(5.0)
}

/// A positive whole count, `None` when the input is missing or not positive.
fn count(id: &str, value: Option<f64>) -> Result<Option<u32>, BindingError> {
    match value {
        Some(value) if value > 0.0 => {
            if value.fract() != 0.0 || value > f64::from(u32::MAX) {
                return Err(BindingError::invalid(format!(
                    "{id} must be a whole number, got {value}"
                )));
            }
            Ok(Some(value as u32))
        }
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grids {
    pub top: GridSpec,
    pub bottom: GridSpec,
}

impl Grids {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = square_size(rows, cols);
        let grid = |rows, cols| GridSpec {
            rows,
            cols,
            square_size: size,
            color: SQUARE_COLOR.to_string(),
        };
        Self {
            top: grid(rows, cols),
            bottom: grid(cols, rows),
        }
    }

    pub fn top_label(&self) -> String {
        format!("{} × {}", self.top.rows, self.top.cols)
    }

    pub fn bottom_label(&self) -> String {
        format!("{} × {}", self.bottom.rows, self.bottom.cols)
    }

    pub fn equality(&self) -> String {
        format!("{} = {}", self.bottom_label(), self.top_label())
    }
}

pub fn page() -> Result<Page, GraphError> {
    Page::builder(PATH, NAME)
        .number_input("input-rows", None)
        .number_input("input-cols", None)
        .binding(Binding::new(
            "update_grids",
            ["input-rows", "input-cols"],
            [
                "top-grid-row",
                "top-grid-label",
                "bottom-grid-row",
                "bottom-grid-label",
                "equality-label",
            ],
            |inputs| {
                let rows = count("input-rows", inputs.opt_number("input-rows")?)?;
                let cols = count("input-cols", inputs.opt_number("input-cols")?)?;
                let (Some(rows), Some(cols)) = (rows, cols) else {
                    return Ok(vec![
                        Payload::Empty,
                        Payload::text(""),
                        Payload::Empty,
                        Payload::text(""),
                        Payload::text(""),
                    ]);
                };
                let grids = Grids::new(rows, cols);
                Ok(vec![
                    Payload::Grid(grids.top.clone()),
                    Payload::text(grids.top_label()),
                    Payload::Grid(grids.bottom.clone()),
                    Payload::text(grids.bottom_label()),
                    Payload::text(grids.equality()),
                ])
            },
        ))
        .layout(LayoutNode::row(vec![
            LayoutNode::control("input-rows", "Rows"),
            LayoutNode::paragraph("x"),
            LayoutNode::control("input-cols", "Columns"),
        ]))
        .layout(LayoutNode::row(vec![
            LayoutNode::target("top-grid-row"),
            LayoutNode::target("top-grid-label"),
        ]))
        .layout(LayoutNode::paragraph("↻"))
        .layout(LayoutNode::row(vec![
            LayoutNode::target("bottom-grid-row"),
            LayoutNode::target("bottom-grid-label"),
        ]))
        .layout(LayoutNode::row(vec![
            LayoutNode::paragraph("⇒"),
            LayoutNode::target("equality-label"),
        ]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_size_is_bounded() {
        assert_eq!(square_size(3, 4), 50.0);
        assert_eq!(square_size(20, 40), 20.0);
        assert_eq!(square_size(1, 1000), 5.0);
    }

    #[test]
    fn bottom_grid_is_transposed() {
        let grids = Grids::new(3, 7);
        assert_eq!((grids.bottom.rows, grids.bottom.cols), (7, 3));
        assert_eq!(grids.top.cell_count(), grids.bottom.cell_count());
        assert_eq!(grids.top_label(), "3 × 7");
        assert_eq!(grids.equality(), "7 × 3 = 3 × 7");
    }

    #[test]
    fn counts_must_be_positive_whole_numbers() {
        assert_eq!(count("rows", None).unwrap(), None);
        assert_eq!(count("rows", Some(-2.0)).unwrap(), None);
        assert_eq!(count("rows", Some(4.0)).unwrap(), Some(4));
        assert!(matches!(
            count("rows", Some(2.5)),
            Err(BindingError::Invalid(_))
        ));
    }
}
