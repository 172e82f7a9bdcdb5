//! Dialog contracts and the reusable add-dialog base.
//!
//! # Responsibility
//! - Define the modal dialog contract the console invokes for entity
//!   creation flows.
//! - Provide the add-dialog base concrete dialogs delegate to.

pub mod add;

use crate::model::field::{Field, FieldValidationError};
use crate::ui::Container;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A modal form for creating one new entity record.
pub trait Dialog {
    /// Stable dialog name, e.g. `add`.
    fn name(&self) -> &str;

    /// Dialog title bar text.
    fn title(&self) -> &str;

    /// Builds the dialog's declarative configuration.
    ///
    /// # Errors
    /// Returns a declaration error when the configuration is malformed.
    fn init(&mut self) -> Result<(), DialogError>;

    /// Renders the dialog form into `container`.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    fn create(&self, container: &mut Container) -> Result<(), DialogError>;

    /// Returns the declared field set.
    fn fields(&self) -> &[Field];
}

/// Dialog declaration and lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    NotInitialized(String),
    NoFields(String),
    InvalidField(FieldValidationError),
    DuplicateFieldName(String),
}

impl Display for DialogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized(name) => write!(f, "dialog `{name}` used before init"),
            Self::NoFields(name) => write!(f, "dialog `{name}` declares no fields"),
            Self::InvalidField(err) => write!(f, "invalid field: {err}"),
            Self::DuplicateFieldName(value) => {
                write!(f, "field name declared twice: {value}")
            }
        }
    }
}

impl Error for DialogError {}

impl From<FieldValidationError> for DialogError {
    fn from(err: FieldValidationError) -> Self {
        Self::InvalidField(err)
    }
}
