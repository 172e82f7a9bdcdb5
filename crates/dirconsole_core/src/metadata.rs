//! Directory service metadata lookup.
//!
//! # Responsibility
//! - Define the read-only metadata seam facets render labels through.
//! - Parse the metadata document fetched from the directory server.
//!
//! # Invariants
//! - Lookups never fail; unknown entities surface as `None` and the caller
//!   decides the fallback.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Read-only entity metadata lookup consumed by facets.
pub trait MetadataProvider {
    /// Returns the user-facing label for one entity, when known.
    fn entity_label(&self, entity_name: &str) -> Option<String>;
}

/// Metadata for one directory object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// User-facing plural label, e.g. `SUDO Commands`.
    pub label: String,
}

/// Metadata document as served by the directory server: a flat map of
/// entity name to object metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryMetadata {
    objects: BTreeMap<String, ObjectMetadata>,
}

impl DirectoryMetadata {
    /// Creates an empty metadata document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a metadata document from its JSON wire form.
    ///
    /// # Errors
    /// - `InvalidDocument` when the payload is not the expected shape.
    pub fn from_json(payload: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(payload)
            .map_err(|err| MetadataError::InvalidDocument(err.to_string()))
    }

    /// Adds one object entry; used by embedding shells and tests.
    pub fn with_object(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.objects.insert(
            name.into(),
            ObjectMetadata {
                label: label.into(),
            },
        );
        self
    }

    /// Returns metadata for one entity.
    pub fn object(&self, entity_name: &str) -> Option<&ObjectMetadata> {
        self.objects.get(entity_name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl MetadataProvider for DirectoryMetadata {
    fn entity_label(&self, entity_name: &str) -> Option<String> {
        self.object(entity_name).map(|object| object.label.clone())
    }
}

/// Metadata document errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    InvalidDocument(String),
}

impl Display for MetadataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocument(detail) => {
                write!(f, "metadata document is invalid: {detail}")
            }
        }
    }
}

impl Error for MetadataError {}

#[cfg(test)]
mod tests {
    use super::{DirectoryMetadata, MetadataError, MetadataProvider};

    #[test]
    fn parses_wire_document() {
        let metadata = DirectoryMetadata::from_json(
            r#"{"sudocmd": {"label": "SUDO Commands"}, "sudorule": {"label": "SUDO Rules"}}"#,
        )
        .expect("document should parse");

        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata.entity_label("sudocmd").as_deref(),
            Some("SUDO Commands")
        );
        assert_eq!(metadata.entity_label("hbacrule"), None);
    }

    #[test]
    fn rejects_malformed_document() {
        let err = DirectoryMetadata::from_json(r#"["not", "a", "map"]"#)
            .expect_err("array payload must fail");
        assert!(matches!(err, MetadataError::InvalidDocument(_)));
    }

    #[test]
    fn with_object_builds_lookup() {
        let metadata = DirectoryMetadata::new().with_object("sudocmd", "SUDO Commands");
        assert_eq!(
            metadata.object("sudocmd").map(|object| object.label.as_str()),
            Some("SUDO Commands")
        );
    }
}
