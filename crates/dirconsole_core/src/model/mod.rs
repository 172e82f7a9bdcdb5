//! Declarative value types shared by facets and dialogs.
//!
//! # Responsibility
//! - Define the field/column shapes entity panels are composed from.
//! - Provide structural identifier validation only.
//!
//! # Invariants
//! - Field and column names are attribute-shaped identifiers.
//! - Whether a name exists in the remote directory schema is NOT checked
//!   here; that mapping is validated by the directory service at call time.

pub mod column;
pub mod field;

/// Returns whether `value` is an attribute-shaped identifier: starts with a
/// lowercase letter or digit, continues with lowercase letters, digits, `-`
/// or `_`, and never ends on a separator.
pub(crate) fn is_valid_attribute_name(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut last_was_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            last_was_separator = false;
            continue;
        }
        if c == '-' || c == '_' {
            last_was_separator = true;
            continue;
        }
        return false;
    }
    !last_was_separator
}

#[cfg(test)]
mod tests {
    use super::is_valid_attribute_name;

    #[test]
    fn accepts_attribute_shaped_names() {
        assert!(is_valid_attribute_name("sudocmd"));
        assert!(is_valid_attribute_name("description"));
        assert!(is_valid_attribute_name("krb5-realm"));
        assert!(is_valid_attribute_name("member_of"));
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("SudoCmd"));
        assert!(!is_valid_attribute_name("-leading"));
        assert!(!is_valid_attribute_name("trailing-"));
        assert!(!is_valid_attribute_name("has space"));
    }
}
