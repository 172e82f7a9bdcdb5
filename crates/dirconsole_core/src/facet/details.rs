//! Reusable details facet base.
//!
//! # Responsibility
//! - Hold the named sections of editable fields a details view displays.
//! - Render sections as field-input groups.

use crate::facet::FacetError;
use crate::model::field::Field;
use crate::ui::{Container, Node, NodeKind};
use log::debug;

/// One named group of fields in a details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsSection {
    /// Stable section name, e.g. `general`.
    pub name: String,
    /// User-facing section label, e.g. `General`.
    pub label: String,
    fields: Vec<Field>,
}

impl DetailsSection {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            fields: Vec::new(),
        }
    }

    /// Declares one editable field. Validation happens at facet `init`.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Base behavior for details facets. Concrete facets store one of these and
/// delegate to it explicitly.
#[derive(Debug)]
pub struct DetailsFacetBase {
    name: String,
    label: String,
    sections: Vec<DetailsSection>,
    initialized: bool,
}

impl DetailsFacetBase {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            sections: Vec::new(),
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declares one section. Validation happens at `init`.
    pub fn add_section(&mut self, section: DetailsSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[DetailsSection] {
        &self.sections
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Validates the declared configuration.
    ///
    /// # Errors
    /// - `NoSections` / `DuplicateSectionName` / `EmptySection` for the
    ///   section set.
    /// - `InvalidField` / `DuplicateFieldName` within a section.
    pub fn init(&mut self) -> Result<(), FacetError> {
        if self.sections.is_empty() {
            return Err(FacetError::NoSections(self.name.clone()));
        }

        let mut section_names = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if section_names.contains(&section.name.as_str()) {
                return Err(FacetError::DuplicateSectionName(section.name.clone()));
            }
            section_names.push(section.name.as_str());

            if section.fields.is_empty() {
                return Err(FacetError::EmptySection(section.name.clone()));
            }
            let mut field_names = Vec::with_capacity(section.fields.len());
            for field in &section.fields {
                field.validate()?;
                if field_names.contains(&field.name.as_str()) {
                    return Err(FacetError::DuplicateFieldName(field.name.clone()));
                }
                field_names.push(field.name.as_str());
            }
        }

        debug!(
            "event=facet_init module=facet status=ok facet={} sections={}",
            self.name,
            self.sections.len()
        );
        self.initialized = true;
        Ok(())
    }

    /// Renders every section with its field inputs.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    pub fn create(&self, container: &mut Container) -> Result<(), FacetError> {
        if !self.initialized {
            return Err(FacetError::NotInitialized(self.name.clone()));
        }

        for section in &self.sections {
            let mut node =
                Node::new(NodeKind::Section, section.name.clone()).with_text(section.label.clone());
            for field in &section.fields {
                node.push_child(
                    Node::new(NodeKind::FieldInput, field.name.clone())
                        .with_text(field.label.clone()),
                );
            }
            container.push(node);
        }
        Ok(())
    }

    /// Details views attach no handlers; present for lifecycle symmetry.
    ///
    /// # Errors
    /// - `NotInitialized` when called before `init`.
    pub fn setup(&self, _container: &mut Container) -> Result<(), FacetError> {
        if !self.initialized {
            return Err(FacetError::NotInitialized(self.name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailsFacetBase, DetailsSection};
    use crate::facet::FacetError;
    use crate::model::field::Field;
    use crate::ui::{Container, NodeKind};

    fn general_section() -> DetailsSection {
        let mut section = DetailsSection::new("general", "General");
        section.add_field(Field::new("cn", "Name"));
        section.add_field(Field::new("description", "Description"));
        section
    }

    #[test]
    fn init_rejects_empty_facet_and_empty_section() {
        let mut base = DetailsFacetBase::new("details", "Details");
        let err = base.init().expect_err("no sections must fail");
        assert_eq!(err, FacetError::NoSections("details".to_string()));

        base.add_section(DetailsSection::new("general", "General"));
        let err = base.init().expect_err("empty section must fail");
        assert_eq!(err, FacetError::EmptySection("general".to_string()));
    }

    #[test]
    fn init_rejects_duplicate_field_in_section() {
        let mut base = DetailsFacetBase::new("details", "Details");
        let mut section = general_section();
        section.add_field(Field::new("cn", "Name Again"));
        base.add_section(section);
        let err = base.init().expect_err("duplicate field must fail");
        assert_eq!(err, FacetError::DuplicateFieldName("cn".to_string()));
    }

    #[test]
    fn create_renders_sections_with_field_inputs() {
        let mut base = DetailsFacetBase::new("details", "Details");
        base.add_section(general_section());
        base.init().expect("valid config should init");

        let mut container = Container::new();
        base.create(&mut container).expect("create should render");

        let section = container.find("general").expect("section should render");
        assert_eq!(section.kind, NodeKind::Section);
        assert_eq!(section.text, "General");
        let field_names: Vec<&str> = section
            .children()
            .iter()
            .map(|node| node.name.as_str())
            .collect();
        assert_eq!(field_names, vec!["cn", "description"]);
        assert!(section
            .children()
            .iter()
            .all(|node| node.kind == NodeKind::FieldInput));
    }

    #[test]
    fn create_before_init_fails() {
        let mut base = DetailsFacetBase::new("details", "Details");
        base.add_section(general_section());
        let mut container = Container::new();
        let err = base
            .create(&mut container)
            .expect_err("create before init must fail");
        assert_eq!(err, FacetError::NotInitialized("details".to_string()));
    }
}
