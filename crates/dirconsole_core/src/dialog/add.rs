//! Reusable add-dialog base.

use crate::dialog::DialogError;
use crate::model::field::Field;
use crate::ui::{Container, Node, NodeKind};
use log::debug;

/// Name of the rendered dialog title node.
pub const DIALOG_TITLE_NODE: &str = "dialog-title";

/// Base behavior for add dialogs. Concrete dialogs store one of these and
/// delegate to it explicitly.
#[derive(Debug)]
pub struct AddDialogBase {
    name: String,
    title: String,
    fields: Vec<Field>,
    initialized: bool,
}

impl AddDialogBase {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            fields: Vec::new(),
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Declares one form field, in display order. Validation happens at
    /// `init`.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Validates the declared configuration.
    ///
    /// # Errors
    /// - `NoFields` when no form field is declared.
    /// - `InvalidField` / `DuplicateFieldName` for the field set.
    pub fn init(&mut self) -> Result<(), DialogError> {
        if self.fields.is_empty() {
            return Err(DialogError::NoFields(self.name.clone()));
        }

        let mut seen = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            field.validate()?;
            if seen.contains(&field.name.as_str()) {
                return Err(DialogError::DuplicateFieldName(field.name.clone()));
            }
            seen.push(field.name.as_str());
        }

        debug!(
            "event=dialog_init module=dialog status=ok dialog={} fields={}",
            self.name,
            self.fields.len()
        );
        self.initialized = true;
        Ok(())
    }

    /// Renders the title bar and form fields.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    pub fn create(&self, container: &mut Container) -> Result<(), DialogError> {
        if !self.initialized {
            return Err(DialogError::NotInitialized(self.name.clone()));
        }

        container.push(
            Node::new(NodeKind::DialogTitle, DIALOG_TITLE_NODE).with_text(self.title.clone()),
        );
        for field in &self.fields {
            container.push(
                Node::new(NodeKind::FieldInput, field.name.clone()).with_text(field.label.clone()),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddDialogBase, DIALOG_TITLE_NODE};
    use crate::dialog::DialogError;
    use crate::model::field::Field;
    use crate::ui::{Container, NodeKind};

    fn dialog_with_fields() -> AddDialogBase {
        let mut base = AddDialogBase::new("add", "Add New Record");
        base.add_field(Field::no_undo("cn", "Name"));
        base.add_field(Field::no_undo("description", "Description"));
        base
    }

    #[test]
    fn init_rejects_empty_field_set() {
        let mut base = AddDialogBase::new("add", "Add New Record");
        let err = base.init().expect_err("no fields must fail");
        assert_eq!(err, DialogError::NoFields("add".to_string()));
    }

    #[test]
    fn init_rejects_duplicate_field_names() {
        let mut base = dialog_with_fields();
        base.add_field(Field::no_undo("cn", "Name Again"));
        let err = base.init().expect_err("duplicate field must fail");
        assert_eq!(err, DialogError::DuplicateFieldName("cn".to_string()));
    }

    #[test]
    fn create_renders_title_and_fields_in_order() {
        let mut base = dialog_with_fields();
        base.init().expect("valid config should init");

        let mut container = Container::new();
        base.create(&mut container).expect("create should render");

        let title = container
            .find(DIALOG_TITLE_NODE)
            .expect("title should render");
        assert_eq!(title.kind, NodeKind::DialogTitle);
        assert_eq!(title.text, "Add New Record");

        let field_names: Vec<&str> = container
            .nodes()
            .iter()
            .filter(|node| node.kind == NodeKind::FieldInput)
            .map(|node| node.name.as_str())
            .collect();
        assert_eq!(field_names, vec!["cn", "description"]);
    }

    #[test]
    fn create_before_init_fails() {
        let base = dialog_with_fields();
        let mut container = Container::new();
        let err = base
            .create(&mut container)
            .expect_err("create before init must fail");
        assert_eq!(err, DialogError::NotInitialized("add".to_string()));
    }
}
