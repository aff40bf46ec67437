//! Tests for identifier construction.

use tutor_model::{ControlId, ModelError, TargetId};

#[test]
fn identifiers_are_trimmed() {
    let id = ControlId::new("  btn-inc ").unwrap();
    assert_eq!(id.as_str(), "btn-inc");
    assert_eq!(id.to_string(), "btn-inc");
}

#[test]
fn blank_identifiers_are_rejected() {
    assert!(matches!(
        ControlId::new("   "),
        Err(ModelError::InvalidControlId(_))
    ));
    assert!(matches!(
        TargetId::try_from(""),
        Err(ModelError::InvalidTargetId(_))
    ));
}
