//! Reusable search facet base.
//!
//! # Responsibility
//! - Hold the column set and action-panel link declarations.
//! - Render the results table and action panel; wire declared links to the
//!   navigation store.
//!
//! # Invariants
//! - Exactly one column is the primary key; rows link through it.
//! - Declared action links push their target state verbatim.

use crate::facet::FacetError;
use crate::model::column::Column;
use crate::nav::NavState;
use crate::ui::{Container, Node, NodeKind};
use log::debug;

/// Name of the rendered results table node.
pub const RESULTS_TABLE_NODE: &str = "search-results";
/// Name of the rendered action panel node.
pub const ACTION_PANEL_NODE: &str = "action-panel";

/// One clickable navigation shortcut beside the search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    /// Addressable link name, e.g. `sudorule`.
    pub name: String,
    /// User-facing link label.
    pub label: String,
    /// Navigation state pushed when the link is clicked.
    pub target: NavState,
}

impl ActionLink {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        target: NavState,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            target,
        }
    }
}

/// Base behavior for search facets. Concrete facets store one of these and
/// delegate to it explicitly.
#[derive(Debug)]
pub struct SearchFacetBase {
    name: String,
    label: String,
    columns: Vec<Column>,
    action_links: Vec<ActionLink>,
    initialized: bool,
}

impl SearchFacetBase {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            columns: Vec::new(),
            action_links: Vec::new(),
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declares one results column. Validation happens at `init`.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Declares one action-panel link. Validation happens at `init`.
    pub fn add_action_link(&mut self, link: ActionLink) {
        self.action_links.push(link);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn action_links(&self) -> &[ActionLink] {
        &self.action_links
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Validates the declared configuration.
    ///
    /// # Errors
    /// - `NoColumns` / `DuplicateColumnName` / `InvalidColumn` for the
    ///   column set.
    /// - `NoPrimaryKeyColumn` / `ExtraPrimaryKeyColumn` unless exactly one
    ///   column carries the primary-key flag.
    /// - `DuplicateActionLinkName` for the link set.
    pub fn init(&mut self) -> Result<(), FacetError> {
        if self.columns.is_empty() {
            return Err(FacetError::NoColumns(self.name.clone()));
        }

        let mut primary_key: Option<&str> = None;
        let mut seen = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            column.validate()?;
            if seen.contains(&column.name.as_str()) {
                return Err(FacetError::DuplicateColumnName(column.name.clone()));
            }
            seen.push(column.name.as_str());
            if column.primary_key {
                if primary_key.is_some() {
                    return Err(FacetError::ExtraPrimaryKeyColumn(column.name.clone()));
                }
                primary_key = Some(column.name.as_str());
            }
        }
        if primary_key.is_none() {
            return Err(FacetError::NoPrimaryKeyColumn(self.name.clone()));
        }

        let mut link_names = Vec::with_capacity(self.action_links.len());
        for link in &self.action_links {
            if link_names.contains(&link.name.as_str()) {
                return Err(FacetError::DuplicateActionLinkName(link.name.clone()));
            }
            link_names.push(link.name.as_str());
        }

        debug!(
            "event=facet_init module=facet status=ok facet={} columns={} links={}",
            self.name,
            self.columns.len(),
            self.action_links.len()
        );
        self.initialized = true;
        Ok(())
    }

    /// Renders the action panel and results table.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    pub fn create(&self, container: &mut Container) -> Result<(), FacetError> {
        if !self.initialized {
            return Err(FacetError::NotInitialized(self.name.clone()));
        }

        let mut panel = Node::new(NodeKind::ActionPanel, ACTION_PANEL_NODE);
        for link in &self.action_links {
            panel.push_child(
                Node::new(NodeKind::ActionLink, link.name.clone()).with_text(link.label.clone()),
            );
        }
        container.push(panel);

        let mut table = Node::new(NodeKind::ResultsTable, RESULTS_TABLE_NODE);
        for column in &self.columns {
            table.push_child(
                Node::new(NodeKind::ColumnHeader, column.name.clone())
                    .with_text(column.header_text()),
            );
        }
        container.push(table);
        Ok(())
    }

    /// Attaches click handlers for every declared action link.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    /// - `MissingActionLink` when a declared link is absent from `container`.
    pub fn setup(&self, container: &mut Container) -> Result<(), FacetError> {
        if !self.initialized {
            return Err(FacetError::NotInitialized(self.name.clone()));
        }

        for link in &self.action_links {
            let target = link.target.clone();
            container
                .attach_click(
                    &link.name,
                    Box::new(move |nav| nav.push_state(target.clone())),
                )
                .map_err(|_| FacetError::MissingActionLink(link.name.clone()))?;
        }
        Ok(())
    }
}
