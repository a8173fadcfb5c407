//! Shared contract for validated value objects.

use super::errors::ValidationError;
use std::fmt::Display;

/// A primitive value paired with a construction-time invariant check.
///
/// Implementors are immutable once built: the only way to obtain one is
/// [`ValidatedField::parse`], and edits produce a fresh instance. `Display`
/// yields the canonical text form, which `parse` accepts back.
pub trait ValidatedField: Sized + Clone + PartialEq + Display {
    /// The wrapped primitive.
    type Value;

    /// Validate `raw` and build the field.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] variant describing the violated rule.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Canonical text form.
    fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName, PhoneNumber};

    fn canonical<F: ValidatedField>(raw: &str) -> String {
        F::parse(raw).unwrap().render()
    }

    #[test]
    fn test_render_is_canonical_for_every_field() {
        assert_eq!(canonical::<ContactName>("Alice"), "Alice");
        assert_eq!(canonical::<PhoneNumber>("0501234567"), "0501234567");
        assert_eq!(canonical::<Birthday>("05.11.1990"), "05.11.1990");
    }

    #[test]
    fn test_render_parses_back() {
        let birthday = Birthday::parse("29.02.2024").unwrap();
        assert_eq!(Birthday::parse(&birthday.render()).unwrap(), birthday);
    }
}
