//! Console orchestration.
//!
//! # Responsibility
//! - Own the entity registry, the navigation store and the metadata seam.
//! - Drive the facet/dialog lifecycle: lazy init, render, handler setup.
//!
//! # Invariants
//! - One console per process shell; constructed at startup, torn down at
//!   shutdown.
//! - Entities are initialized at most once, on first use.

use crate::dialog::DialogError;
use crate::entity::registry::{EntityRegistry, EntityRegistryError};
use crate::entity::{Entity, EntityError};
use crate::facet::FacetError;
use crate::metadata::MetadataProvider;
use crate::nav::{NavState, NavStore};
use crate::ui::Container;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Process-wide console object the embedding shell constructs at startup.
pub struct Console {
    registry: EntityRegistry,
    nav: NavStore,
    metadata: Arc<dyn MetadataProvider>,
}

impl Console {
    /// Creates a console around the injected metadata seam.
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        info!("event=console_start module=console status=ok");
        Self {
            registry: EntityRegistry::new(),
            nav: NavStore::new(),
            metadata,
        }
    }

    /// Registers one entity descriptor.
    ///
    /// # Errors
    /// Propagates registry validation errors.
    pub fn register_entity(&mut self, entity: Entity) -> Result<(), ConsoleError> {
        self.registry.register(entity).map_err(ConsoleError::Registry)
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn nav(&self) -> &NavStore {
        &self.nav
    }

    /// Mutable navigation store handle used by the UI shell to dispatch
    /// clicks into rendered containers.
    pub fn nav_mut(&mut self) -> &mut NavStore {
        &mut self.nav
    }

    pub fn metadata(&self) -> &dyn MetadataProvider {
        self.metadata.as_ref()
    }

    /// Pushes one navigation state; the UI shell routes clicks here.
    pub fn push_state(&mut self, state: NavState) {
        self.nav.push_state(state);
    }

    /// Initializes one entity's facets and dialogs. Idempotent.
    ///
    /// # Errors
    /// - `Registry(EntityNotFound)` for unknown names.
    /// - `Entity` when a facet or dialog declaration is malformed.
    pub fn init_entity(&mut self, entity_name: &str) -> Result<(), ConsoleError> {
        let entity = self.require_entity_mut(entity_name)?;
        entity.init().map_err(ConsoleError::Entity)
    }

    /// Renders one facet: lazy entity init, then `create` and `setup` into
    /// a fresh container.
    ///
    /// # Errors
    /// - `Registry(EntityNotFound)` / `FacetNotFound` for unknown names.
    /// - `Entity` / `Facet` for declaration or lifecycle failures.
    pub fn render_facet(
        &mut self,
        entity_name: &str,
        facet_name: &str,
    ) -> Result<Container, ConsoleError> {
        let metadata = Arc::clone(&self.metadata);
        let entity = self.require_entity_mut(entity_name)?;
        entity.init().map_err(ConsoleError::Entity)?;

        let facet = entity
            .facet(facet_name)
            .ok_or_else(|| ConsoleError::FacetNotFound {
                entity: entity_name.to_string(),
                facet: facet_name.to_string(),
            })?;

        let mut container = Container::new();
        facet
            .create(metadata.as_ref(), &mut container)
            .map_err(ConsoleError::Facet)?;
        facet.setup(&mut container).map_err(ConsoleError::Facet)?;
        Ok(container)
    }

    /// Renders one add-dialog form after lazy entity init.
    ///
    /// # Errors
    /// - `Registry(EntityNotFound)` / `DialogNotFound` for unknown names.
    /// - `Entity` / `Dialog` for declaration or lifecycle failures.
    pub fn open_dialog(
        &mut self,
        entity_name: &str,
        dialog_name: &str,
    ) -> Result<Container, ConsoleError> {
        let entity = self.require_entity_mut(entity_name)?;
        entity.init().map_err(ConsoleError::Entity)?;

        let dialog = entity
            .dialog(dialog_name)
            .ok_or_else(|| ConsoleError::DialogNotFound {
                entity: entity_name.to_string(),
                dialog: dialog_name.to_string(),
            })?;

        let mut container = Container::new();
        dialog.create(&mut container).map_err(ConsoleError::Dialog)?;
        Ok(container)
    }

    /// Tears the console down: clears the registry. Navigation history is
    /// owned by the shell's session and dropped with the console.
    pub fn teardown(&mut self) {
        self.registry.clear();
        info!("event=console_teardown module=console status=ok");
    }

    fn require_entity_mut(&mut self, entity_name: &str) -> Result<&mut Entity, ConsoleError> {
        self.registry.get_mut(entity_name).ok_or_else(|| {
            ConsoleError::Registry(EntityRegistryError::EntityNotFound(entity_name.to_string()))
        })
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("registry", &self.registry)
            .field("nav_depth", &self.nav.depth())
            .finish()
    }
}

/// Console orchestration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    Registry(EntityRegistryError),
    Entity(EntityError),
    Facet(FacetError),
    Dialog(DialogError),
    FacetNotFound { entity: String, facet: String },
    DialogNotFound { entity: String, dialog: String },
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::Entity(err) => write!(f, "{err}"),
            Self::Facet(err) => write!(f, "{err}"),
            Self::Dialog(err) => write!(f, "{err}"),
            Self::FacetNotFound { entity, facet } => {
                write!(f, "entity `{entity}` has no facet `{facet}`")
            }
            Self::DialogNotFound { entity, dialog } => {
                write!(f, "entity `{entity}` has no dialog `{dialog}`")
            }
        }
    }
}

impl Error for ConsoleError {}

impl From<EntityError> for ConsoleError {
    fn from(err: EntityError) -> Self {
        Self::Entity(err)
    }
}
