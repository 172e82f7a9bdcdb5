//! Editable text field declaration.

use crate::model::is_valid_attribute_name;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One editable text attribute of the underlying directory record.
///
/// `name` must match an attribute the remote directory schema understands;
/// that mapping is enforced by the directory service, not locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Directory attribute name, e.g. `sudocmd`.
    pub name: String,
    /// User-facing label, e.g. `Command`.
    pub label: String,
    /// Whether edits to this field get an inline undo control.
    pub undo: bool,
}

impl Field {
    /// Creates a field with undo enabled.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            undo: true,
        }
    }

    /// Creates a field with undo disabled, as add dialogs use.
    pub fn no_undo(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            undo: false,
            ..Self::new(name, label)
        }
    }

    /// Validates the declaration shape.
    ///
    /// # Errors
    /// - `EmptyName` / `InvalidName` when the attribute name is malformed.
    /// - `EmptyLabel` when no user-facing label is declared.
    pub fn validate(&self) -> Result<(), FieldValidationError> {
        if self.name.trim().is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        if !is_valid_attribute_name(&self.name) {
            return Err(FieldValidationError::InvalidName(self.name.clone()));
        }
        if self.label.trim().is_empty() {
            return Err(FieldValidationError::EmptyLabel(self.name.clone()));
        }
        Ok(())
    }
}

/// Field declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidName(String),
    EmptyLabel(String),
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "field name must not be empty"),
            Self::InvalidName(value) => write!(f, "field name is invalid: {value}"),
            Self::EmptyLabel(name) => write!(f, "field `{name}` is missing a label"),
        }
    }
}

impl Error for FieldValidationError {}
