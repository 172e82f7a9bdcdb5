//! Entity descriptors.
//!
//! # Responsibility
//! - Hold one registrable entity: its name plus its facets and add-dialogs.
//! - Drive lazy, one-shot initialization of the attached sub-objects.
//!
//! # Invariants
//! - An entity is constructed once and never mutated after registration,
//!   except for the idempotent first-use initialization.
//! - Facet and dialog names are unique within one entity.

pub mod registry;

use crate::dialog::{Dialog, DialogError};
use crate::facet::{Facet, FacetError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One registrable domain entity shown in the console.
pub struct Entity {
    name: String,
    facets: Vec<Box<dyn Facet>>,
    dialogs: Vec<Box<dyn Dialog>>,
    initialized: bool,
}

impl Entity {
    /// Creates an empty descriptor. Facets and dialogs are attached before
    /// registration; their configuration is built on first use via `init`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Vec::new(),
            dialogs: Vec::new(),
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches one facet.
    ///
    /// # Errors
    /// - `DuplicateFacetName` when a facet with that name is already
    ///   attached.
    pub fn add_facet(&mut self, facet: Box<dyn Facet>) -> Result<(), EntityError> {
        if self.facets.iter().any(|existing| existing.name() == facet.name()) {
            return Err(EntityError::DuplicateFacetName(facet.name().to_string()));
        }
        self.facets.push(facet);
        Ok(())
    }

    /// Attaches one add-dialog.
    ///
    /// # Errors
    /// - `DuplicateDialogName` when a dialog with that name is already
    ///   attached.
    pub fn add_dialog(&mut self, dialog: Box<dyn Dialog>) -> Result<(), EntityError> {
        if self
            .dialogs
            .iter()
            .any(|existing| existing.name() == dialog.name())
        {
            return Err(EntityError::DuplicateDialogName(dialog.name().to_string()));
        }
        self.dialogs.push(dialog);
        Ok(())
    }

    /// Initializes every attached facet and dialog. Idempotent: the first
    /// call does the work, later calls return immediately.
    ///
    /// # Errors
    /// Propagates the first facet or dialog declaration error.
    pub fn init(&mut self) -> Result<(), EntityError> {
        if self.initialized {
            return Ok(());
        }
        for facet in &mut self.facets {
            facet.init().map_err(EntityError::Facet)?;
        }
        for dialog in &mut self.dialogs {
            dialog.init().map_err(EntityError::Dialog)?;
        }
        self.initialized = true;
        info!(
            "event=entity_init module=entity status=ok entity={} facets={} dialogs={}",
            self.name,
            self.facets.len(),
            self.dialogs.len()
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns one facet by name.
    pub fn facet(&self, name: &str) -> Option<&dyn Facet> {
        self.facets
            .iter()
            .find(|facet| facet.name() == name)
            .map(Box::as_ref)
    }

    /// Returns one dialog by name.
    pub fn dialog(&self, name: &str) -> Option<&dyn Dialog> {
        self.dialogs
            .iter()
            .find(|dialog| dialog.name() == name)
            .map(Box::as_ref)
    }

    /// Returns facet names in attachment order.
    pub fn facet_names(&self) -> Vec<&str> {
        self.facets.iter().map(|facet| facet.name()).collect()
    }

    /// Returns dialog names in attachment order.
    pub fn dialog_names(&self) -> Vec<&str> {
        self.dialogs.iter().map(|dialog| dialog.name()).collect()
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("facets", &self.facet_names())
            .field("dialogs", &self.dialog_names())
            .field("initialized", &self.initialized)
            .finish()
    }
}

/// Entity composition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    DuplicateFacetName(String),
    DuplicateDialogName(String),
    Facet(FacetError),
    Dialog(DialogError),
}

impl Display for EntityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateFacetName(value) => {
                write!(f, "facet name already attached: {value}")
            }
            Self::DuplicateDialogName(value) => {
                write!(f, "dialog name already attached: {value}")
            }
            Self::Facet(err) => write!(f, "facet init failed: {err}"),
            Self::Dialog(err) => write!(f, "dialog init failed: {err}"),
        }
    }
}

impl Error for EntityError {}
