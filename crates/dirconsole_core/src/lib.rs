//! Core entity/facet/dialog framework for the directory management console.
//! This crate is the single source of truth for panel composition invariants.

pub mod console;
pub mod dialog;
pub mod entity;
pub mod facet;
pub mod logging;
pub mod metadata;
pub mod model;
pub mod nav;
pub mod plugins;
pub mod ui;

pub use console::{Console, ConsoleError};
pub use dialog::{Dialog, DialogError};
pub use entity::registry::{EntityRegistry, EntityRegistryError};
pub use entity::{Entity, EntityError};
pub use facet::{Facet, FacetError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metadata::{DirectoryMetadata, MetadataError, MetadataProvider};
pub use model::column::{Column, ColumnValidationError};
pub use model::field::{Field, FieldValidationError};
pub use nav::{NavState, NavStore};
pub use ui::{Container, Node, NodeKind, UiError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
