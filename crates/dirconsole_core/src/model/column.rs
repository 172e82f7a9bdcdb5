//! Search result column declaration.

use crate::model::is_valid_attribute_name;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One displayed attribute in a search results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Directory attribute name this column displays.
    pub name: String,
    /// Optional header label; rendering falls back to `name` when absent.
    pub label: Option<String>,
    /// Whether this column links each row to its details view.
    pub primary_key: bool,
}

impl Column {
    /// Creates a plain display column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            primary_key: false,
        }
    }

    /// Creates the primary-key column rows link through.
    pub fn primary(name: impl Into<String>) -> Self {
        Self {
            primary_key: true,
            ..Self::new(name)
        }
    }

    /// Sets a header label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the header text used when rendering.
    pub fn header_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Validates the declaration shape.
    ///
    /// # Errors
    /// - `EmptyName` / `InvalidName` when the attribute name is malformed.
    pub fn validate(&self) -> Result<(), ColumnValidationError> {
        if self.name.trim().is_empty() {
            return Err(ColumnValidationError::EmptyName);
        }
        if !is_valid_attribute_name(&self.name) {
            return Err(ColumnValidationError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

/// Column declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValidationError {
    EmptyName,
    InvalidName(String),
}

impl Display for ColumnValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "column name must not be empty"),
            Self::InvalidName(value) => write!(f, "column name is invalid: {value}"),
        }
    }
}

impl Error for ColumnValidationError {}

#[cfg(test)]
mod tests {
    use super::{Column, ColumnValidationError};

    #[test]
    fn primary_marks_primary_key() {
        let column = Column::primary("sudocmd");
        assert!(column.primary_key);
        assert_eq!(column.header_text(), "sudocmd");
        assert!(column.validate().is_ok());
    }

    #[test]
    fn with_label_overrides_header_text() {
        let column = Column::new("description").with_label("Description");
        assert!(!column.primary_key);
        assert_eq!(column.header_text(), "Description");
    }

    #[test]
    fn validate_rejects_malformed_name() {
        let err = Column::new("Primary Key")
            .validate()
            .expect_err("malformed name must fail");
        assert_eq!(
            err,
            ColumnValidationError::InvalidName("Primary Key".to_string())
        );
    }
}
