//! Page definitions.
//!
//! Each module exposes the page's `PATH`, its display `NAME`, a `page()`
//! constructor and the pure formulas its bindings call, so the formulas can
//! be tested without a session.
//!
//! | Path | Page | Controls |
//! |------|------|----------|
//! | `/` | Home | none |
//! | `/triangle-area` | Triangle area | move-apex buttons |
//! | `/percent` | Percent | start and percent buttons |
//! | `/percent-promille-ppm` | Percent, promille, PPM conversion | three number inputs |
//! | `/trig-curve-param` | Sine parameters | amplitude, frequency, phase, center buttons |
//! | `/trig-eq-all-solutions` | Sine equation solutions | parameter buttons plus target `y` |
//! | `/trig-curve-unit-circle` | Sine curve and unit circle | angle buttons |
//! | `/trig-all-solutions` | Both angles for sin and cos | angle buttons |
//! | `/set-theory` | Set operations | two text inputs, seven operation buttons |
//! | `/triangle-sum` | Triangle angle sum | two sliders |
//! | `/multiplication-commutative` | Commutative multiplication | two number inputs |
//! | `/primitive-area` | Area and primitive function | three buttons, one store |

pub mod home;
pub mod multiplication;
pub mod percent;
pub mod percent_conversion;
pub mod primitive_area;
pub mod set_operations;
pub mod triangle_area;
pub mod triangle_sum;
pub mod trig_all_solutions;
pub mod trig_curve_param;
pub mod trig_curve_unit_circle;
pub mod trig_eq_all_solutions;

use tutor_reactive::{BindingError, BindingInputs, LayoutNode};

/// Click difference `inc - dec` of a pair of buttons.
pub(crate) fn net_clicks(
    inputs: &BindingInputs<'_>,
    dec: &str,
    inc: &str,
) -> Result<f64, BindingError> {
    Ok(inputs.number(inc)? - inputs.number(dec)?)
}

/// Caption followed by a "-" and a "+" button.
pub(crate) fn stepper(caption: &str, dec: &str, inc: &str) -> LayoutNode {
    LayoutNode::column(vec![
        LayoutNode::paragraph(caption),
        LayoutNode::row(vec![
            LayoutNode::control(dec, "-"),
            LayoutNode::control(inc, "+"),
        ]),
    ])
}
