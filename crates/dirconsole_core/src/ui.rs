//! Render tree standing in for the DOM.
//!
//! # Responsibility
//! - Hold the typed node tree facets and dialogs render into.
//! - Dispatch click events to handlers attached at `setup()` time.
//!
//! # Invariants
//! - Nodes are addressed by name; lookup is depth-first.
//! - Click handlers receive the navigation store at dispatch time; they do
//!   not capture shared handles.

use crate::nav::NavStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Visual role of one rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Page heading above a facet.
    Heading,
    /// Search results table.
    ResultsTable,
    /// One column header inside a results table.
    ColumnHeader,
    /// Navigation shortcut region beside a facet.
    ActionPanel,
    /// One clickable link inside an action panel.
    ActionLink,
    /// Named group of fields in a details view.
    Section,
    /// One editable text input.
    FieldInput,
    /// Modal dialog title bar.
    DialogTitle,
}

/// Click handler invoked with the shared navigation store.
pub type ClickHandler = Box<dyn Fn(&mut NavStore)>;

/// One node in the render tree.
pub struct Node {
    /// Visual role.
    pub kind: NodeKind,
    /// Addressable name, unique among siblings by convention.
    pub name: String,
    /// Rendered text (label, heading, title).
    pub text: String,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
}

impl Node {
    /// Creates a node with empty text and no children.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Sets the rendered text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends one child node.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns whether a click handler is attached.
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("text", &self.text)
            .field("children", &self.children)
            .field("clickable", &self.is_clickable())
            .finish()
    }
}

/// Root container one facet or dialog renders into.
#[derive(Debug, Default)]
pub struct Container {
    nodes: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one top-level node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Inserts one top-level node before everything rendered so far.
    pub fn prepend(&mut self, node: Node) {
        self.nodes.insert(0, node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Finds one node by name, depth-first.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(name))
    }

    /// Attaches a click handler to one named node.
    ///
    /// # Errors
    /// - `NodeNotFound` when no node has that name.
    pub fn attach_click(&mut self, name: &str, handler: ClickHandler) -> Result<(), UiError> {
        let node = self
            .nodes
            .iter_mut()
            .find_map(|node| node.find_mut(name))
            .ok_or_else(|| UiError::NodeNotFound(name.to_string()))?;
        node.on_click = Some(handler);
        Ok(())
    }

    /// Dispatches a click on one named node.
    ///
    /// # Errors
    /// - `NodeNotFound` when no node has that name.
    /// - `NotClickable` when the node has no handler attached.
    pub fn click(&self, name: &str, nav: &mut NavStore) -> Result<(), UiError> {
        let node = self
            .find(name)
            .ok_or_else(|| UiError::NodeNotFound(name.to_string()))?;
        let handler = node
            .on_click
            .as_ref()
            .ok_or_else(|| UiError::NotClickable(name.to_string()))?;
        handler(nav);
        Ok(())
    }
}

/// Render tree errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    NodeNotFound(String),
    NotClickable(String),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeNotFound(name) => write!(f, "node not found: {name}"),
            Self::NotClickable(name) => write!(f, "node has no click handler: {name}"),
        }
    }
}

impl Error for UiError {}

#[cfg(test)]
mod tests {
    use super::{Container, Node, NodeKind, UiError};
    use crate::nav::{NavState, NavStore};

    fn panel_with_link() -> Container {
        let mut panel = Node::new(NodeKind::ActionPanel, "action-panel");
        panel.push_child(Node::new(NodeKind::ActionLink, "sudorule").with_text("SUDO Rules"));
        let mut container = Container::new();
        container.push(panel);
        container
    }

    #[test]
    fn find_descends_into_children() {
        let container = panel_with_link();
        let link = container.find("sudorule").expect("nested node should be found");
        assert_eq!(link.kind, NodeKind::ActionLink);
        assert_eq!(link.text, "SUDO Rules");
        assert!(container.find("missing").is_none());
    }

    #[test]
    fn click_runs_attached_handler() {
        let mut container = panel_with_link();
        container
            .attach_click(
                "sudorule",
                Box::new(|nav| nav.push_state(NavState::with_entry("entity", "sudorule"))),
            )
            .expect("handler should attach");

        let mut nav = NavStore::new();
        container
            .click("sudorule", &mut nav)
            .expect("click should dispatch");
        assert_eq!(nav.depth(), 1);
        assert_eq!(
            nav.current().and_then(|state| state.get("entity")),
            Some("sudorule")
        );
    }

    #[test]
    fn click_without_handler_fails() {
        let container = panel_with_link();
        let mut nav = NavStore::new();
        let err = container
            .click("sudorule", &mut nav)
            .expect_err("unattached node must not dispatch");
        assert_eq!(err, UiError::NotClickable("sudorule".to_string()));
        assert!(nav.is_empty());
    }

    #[test]
    fn attach_click_rejects_unknown_node() {
        let mut container = panel_with_link();
        let err = container
            .attach_click("missing", Box::new(|_| {}))
            .expect_err("unknown node must fail");
        assert_eq!(err, UiError::NodeNotFound("missing".to_string()));
    }

    #[test]
    fn prepend_places_node_first() {
        let mut container = panel_with_link();
        container.prepend(Node::new(NodeKind::Heading, "heading").with_text("SUDO Commands"));
        assert_eq!(container.nodes()[0].kind, NodeKind::Heading);
    }
}
