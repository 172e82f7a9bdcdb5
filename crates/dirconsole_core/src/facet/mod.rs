//! Facet contracts and reusable facet bases.
//!
//! # Responsibility
//! - Define the lifecycle contract (`init` / `create` / `setup`) the console
//!   invokes on every view mode of an entity.
//! - Provide the search and details bases concrete facets delegate to.
//!
//! # Invariants
//! - `init` runs before `create`; `create` runs before `setup`.
//! - Concrete facets hold their base as a plain struct field and call its
//!   methods explicitly before or after their own logic.

pub mod details;
pub mod search;

use crate::metadata::MetadataProvider;
use crate::model::column::ColumnValidationError;
use crate::model::field::FieldValidationError;
use crate::ui::Container;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One named view mode of an entity.
pub trait Facet {
    /// Stable facet name, e.g. `search`.
    fn name(&self) -> &str;

    /// User-facing facet label, e.g. `Search`.
    fn label(&self) -> &str;

    /// Builds the facet's declarative configuration.
    ///
    /// # Errors
    /// Returns a declaration error when the configuration is malformed.
    fn init(&mut self) -> Result<(), FacetError>;

    /// Renders the facet into `container`.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    fn create(
        &self,
        metadata: &dyn MetadataProvider,
        container: &mut Container,
    ) -> Result<(), FacetError>;

    /// Attaches event handlers to a rendered `container`.
    ///
    /// # Errors
    /// - `MissingActionLink` when a declared link was not rendered.
    fn setup(&self, container: &mut Container) -> Result<(), FacetError>;
}

/// Facet declaration and lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetError {
    NotInitialized(String),
    NoColumns(String),
    InvalidColumn(ColumnValidationError),
    DuplicateColumnName(String),
    NoPrimaryKeyColumn(String),
    ExtraPrimaryKeyColumn(String),
    DuplicateActionLinkName(String),
    MissingActionLink(String),
    NoSections(String),
    DuplicateSectionName(String),
    EmptySection(String),
    InvalidField(FieldValidationError),
    DuplicateFieldName(String),
}

impl Display for FacetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized(name) => {
                write!(f, "facet `{name}` used before init")
            }
            Self::NoColumns(name) => {
                write!(f, "search facet `{name}` declares no columns")
            }
            Self::InvalidColumn(err) => write!(f, "invalid column: {err}"),
            Self::DuplicateColumnName(value) => {
                write!(f, "column name declared twice: {value}")
            }
            Self::NoPrimaryKeyColumn(name) => {
                write!(f, "search facet `{name}` has no primary key column")
            }
            Self::ExtraPrimaryKeyColumn(value) => {
                write!(f, "second primary key column declared: {value}")
            }
            Self::DuplicateActionLinkName(value) => {
                write!(f, "action link declared twice: {value}")
            }
            Self::MissingActionLink(value) => {
                write!(f, "declared action link was not rendered: {value}")
            }
            Self::NoSections(name) => {
                write!(f, "details facet `{name}` declares no sections")
            }
            Self::DuplicateSectionName(value) => {
                write!(f, "section name declared twice: {value}")
            }
            Self::EmptySection(value) => {
                write!(f, "section declares no fields: {value}")
            }
            Self::InvalidField(err) => write!(f, "invalid field: {err}"),
            Self::DuplicateFieldName(value) => {
                write!(f, "field name declared twice: {value}")
            }
        }
    }
}

impl Error for FacetError {}

impl From<ColumnValidationError> for FacetError {
    fn from(err: ColumnValidationError) -> Self {
        Self::InvalidColumn(err)
    }
}

impl From<FieldValidationError> for FacetError {
    fn from(err: FieldValidationError) -> Self {
        Self::InvalidField(err)
    }
}
