//! SUDO Command entity panel.
//!
//! # Responsibility
//! - Declare the `sudocmd` entity: add dialog, search facet, details facet.
//! - Wire the search facet's action panel to the SUDO rule navigation
//!   targets.
//!
//! # Invariants
//! - The record has two editable attributes: `sudocmd` and `description`.
//! - The search results link rows through the `sudocmd` attribute.

use crate::console::{Console, ConsoleError};
use crate::dialog::add::AddDialogBase;
use crate::dialog::{Dialog, DialogError};
use crate::entity::{Entity, EntityError};
use crate::facet::details::{DetailsFacetBase, DetailsSection};
use crate::facet::search::{ActionLink, SearchFacetBase};
use crate::facet::{Facet, FacetError};
use crate::metadata::MetadataProvider;
use crate::model::column::Column;
use crate::model::field::Field;
use crate::nav::NavState;
use crate::ui::{Container, Node, NodeKind};

/// Registered entity name.
pub const ENTITY_NAME: &str = "sudocmd";
/// Directory attribute holding the command path.
pub const ATTR_SUDOCMD: &str = "sudocmd";
/// Directory attribute holding the free-form description.
pub const ATTR_DESCRIPTION: &str = "description";
/// Navigation state key consumed by the SUDO rule pages.
pub const NAV_KEY_SUDORULE_ENTITY: &str = "sudorule-entity";
/// Navigation target for the SUDO rules page.
pub const NAV_TARGET_SUDORULE: &str = "sudorule";
/// Navigation target for the SUDO command groups page.
pub const NAV_TARGET_SUDOCMDGROUP: &str = "sudocmdgroup";
/// Name of the heading node the search facet prepends.
pub const SEARCH_HEADING_NODE: &str = "sudocmd-heading";

const ADD_DIALOG_TITLE: &str = "Add New SUDO Command";

/// Add dialog with the two undo-disabled text fields.
pub struct SudoCmdAddDialog {
    base: AddDialogBase,
}

impl SudoCmdAddDialog {
    pub fn new() -> Self {
        Self {
            base: AddDialogBase::new("add", ADD_DIALOG_TITLE),
        }
    }
}

impl Default for SudoCmdAddDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for SudoCmdAddDialog {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn init(&mut self) -> Result<(), DialogError> {
        self.base.add_field(Field::no_undo(ATTR_SUDOCMD, "Command"));
        self.base
            .add_field(Field::no_undo(ATTR_DESCRIPTION, "Description"));
        self.base.init()
    }

    fn create(&self, container: &mut Container) -> Result<(), DialogError> {
        self.base.create(container)
    }

    fn fields(&self) -> &[Field] {
        self.base.fields()
    }
}

/// Search facet: command/description columns plus the SUDO rule shortcuts.
pub struct SudoCmdSearchFacet {
    base: SearchFacetBase,
}

impl SudoCmdSearchFacet {
    pub fn new() -> Self {
        Self {
            base: SearchFacetBase::new("search", "Search"),
        }
    }

    pub fn columns(&self) -> &[Column] {
        self.base.columns()
    }

    pub fn action_links(&self) -> &[ActionLink] {
        self.base.action_links()
    }
}

impl Default for SudoCmdSearchFacet {
    fn default() -> Self {
        Self::new()
    }
}

impl Facet for SudoCmdSearchFacet {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn init(&mut self) -> Result<(), FacetError> {
        self.base.add_column(Column::primary(ATTR_SUDOCMD));
        self.base.add_column(Column::new(ATTR_DESCRIPTION));

        self.base.add_action_link(ActionLink::new(
            NAV_TARGET_SUDORULE,
            "SUDO Rules",
            NavState::with_entry(NAV_KEY_SUDORULE_ENTITY, NAV_TARGET_SUDORULE),
        ));
        self.base.add_action_link(ActionLink::new(
            NAV_TARGET_SUDOCMDGROUP,
            "SUDO Command Groups",
            NavState::with_entry(NAV_KEY_SUDORULE_ENTITY, NAV_TARGET_SUDOCMDGROUP),
        ));

        self.base.init()
    }

    fn create(
        &self,
        metadata: &dyn MetadataProvider,
        container: &mut Container,
    ) -> Result<(), FacetError> {
        self.base.create(container)?;

        // Heading text comes from the directory metadata document; the raw
        // entity name stands in when the server has no label for it.
        let heading = metadata
            .entity_label(ENTITY_NAME)
            .unwrap_or_else(|| ENTITY_NAME.to_string());
        container.prepend(Node::new(NodeKind::Heading, SEARCH_HEADING_NODE).with_text(heading));
        Ok(())
    }

    fn setup(&self, container: &mut Container) -> Result<(), FacetError> {
        self.base.setup(container)
    }
}

/// Details facet: one `general` section with the two editable fields.
pub struct SudoCmdDetailsFacet {
    base: DetailsFacetBase,
}

impl SudoCmdDetailsFacet {
    pub fn new() -> Self {
        Self {
            base: DetailsFacetBase::new("details", "Details"),
        }
    }

    pub fn sections(&self) -> &[DetailsSection] {
        self.base.sections()
    }
}

impl Default for SudoCmdDetailsFacet {
    fn default() -> Self {
        Self::new()
    }
}

impl Facet for SudoCmdDetailsFacet {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn init(&mut self) -> Result<(), FacetError> {
        let mut section = DetailsSection::new("general", "General");
        section.add_field(Field::new(ATTR_SUDOCMD, "Command"));
        section.add_field(Field::new(ATTR_DESCRIPTION, "Description"));
        self.base.add_section(section);
        self.base.init()
    }

    fn create(
        &self,
        _metadata: &dyn MetadataProvider,
        container: &mut Container,
    ) -> Result<(), FacetError> {
        self.base.create(container)
    }

    fn setup(&self, container: &mut Container) -> Result<(), FacetError> {
        self.base.setup(container)
    }
}

/// Builds the `sudocmd` entity descriptor.
///
/// # Errors
/// Propagates duplicate-name composition errors.
pub fn entity() -> Result<Entity, EntityError> {
    let mut entity = Entity::new(ENTITY_NAME);
    entity.add_dialog(Box::new(SudoCmdAddDialog::new()))?;
    entity.add_facet(Box::new(SudoCmdSearchFacet::new()))?;
    entity.add_facet(Box::new(SudoCmdDetailsFacet::new()))?;
    Ok(entity)
}

/// Registers the SUDO Command panel into a console.
///
/// # Errors
/// Propagates composition and registration errors.
pub fn register(console: &mut Console) -> Result<(), ConsoleError> {
    console.register_entity(entity()?)
}

#[cfg(test)]
mod tests {
    use super::{
        SudoCmdAddDialog, SudoCmdDetailsFacet, SudoCmdSearchFacet, ATTR_DESCRIPTION, ATTR_SUDOCMD,
    };
    use crate::dialog::Dialog;
    use crate::facet::Facet;

    #[test]
    fn add_dialog_declares_two_undo_disabled_fields() {
        let mut dialog = SudoCmdAddDialog::new();
        dialog.init().expect("dialog should init");

        assert_eq!(dialog.name(), "add");
        assert_eq!(dialog.title(), "Add New SUDO Command");
        let fields = dialog.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, ATTR_SUDOCMD);
        assert_eq!(fields[0].label, "Command");
        assert!(!fields[0].undo);
        assert_eq!(fields[1].name, ATTR_DESCRIPTION);
        assert_eq!(fields[1].label, "Description");
        assert!(!fields[1].undo);
    }

    #[test]
    fn search_facet_declares_expected_columns() {
        let mut facet = SudoCmdSearchFacet::new();
        facet.init().expect("facet should init");

        let columns = facet.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, ATTR_SUDOCMD);
        assert!(columns[0].primary_key);
        assert_eq!(columns[1].name, ATTR_DESCRIPTION);
        assert!(!columns[1].primary_key);
    }

    #[test]
    fn details_facet_declares_general_section() {
        let mut facet = SudoCmdDetailsFacet::new();
        facet.init().expect("facet should init");

        let sections = facet.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "general");
        assert_eq!(sections[0].label, "General");
        let names: Vec<&str> = sections[0]
            .fields()
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names, vec![ATTR_SUDOCMD, ATTR_DESCRIPTION]);
        assert!(sections[0].fields().iter().all(|field| field.undo));
    }
}
