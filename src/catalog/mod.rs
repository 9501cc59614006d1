//! Read-only lookup tables for the session: valid field type names and the
//! model names usable as relation targets.

pub mod provider;

pub use provider::{CatalogProvider, CatalogSnapshot, CommandProvider, FileProvider};

use crate::schema::Model;

pub const BUILTIN_FIELD_TYPES: [&str; 5] = ["string", "int", "float", "related", "dropdown"];
pub const BUILTIN_MODEL_NAMES: [&str; 3] = ["User", "Post", "Comment"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldCatalog {
    field_types: Vec<String>,
    model_names: Vec<String>,
}

impl FieldCatalog {
    pub fn new(field_types: Vec<String>, model_names: Vec<String>) -> Self {
        Self {
            field_types,
            model_names,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_FIELD_TYPES.iter().map(|s| s.to_string()).collect(),
            BUILTIN_MODEL_NAMES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Relation targets are the names of the models the provider knows about.
    pub fn from_models(field_types: Vec<String>, models: &[Model]) -> Self {
        let model_names = models.iter().map(|model| model.name.clone()).collect();
        Self::new(field_types, model_names)
    }

    pub fn field_types(&self) -> &[String] {
        &self.field_types
    }

    pub fn model_names(&self) -> &[String] {
        &self.model_names
    }

    pub fn type_index(&self, field_type: &str) -> Option<usize> {
        index_of(&self.field_types, field_type)
    }

    pub fn model_index(&self, model_name: &str) -> Option<usize> {
        index_of(&self.model_names, model_name)
    }

    /// Empty is the "unset" type and always accepted.
    pub fn is_known_type(&self, field_type: &str) -> bool {
        field_type.is_empty() || self.type_index(field_type).is_some()
    }
}

/// Position of `name` in `items`; `None` means "no preselection".
pub fn index_of(items: &[String], name: &str) -> Option<usize> {
    items.iter().position(|item| item == name)
}

#[cfg(test)]
mod tests {
    use super::{FieldCatalog, index_of};
    use crate::schema::Model;

    #[test]
    fn index_of_missing_name_is_none() {
        let catalog = FieldCatalog::builtin();
        assert_eq!(catalog.type_index("related"), Some(3));
        assert_eq!(catalog.type_index("uuid"), None);
        assert_eq!(catalog.model_index("Comment"), Some(2));
        assert_eq!(index_of(&[], "x"), None);
    }

    #[test]
    fn empty_type_is_always_known() {
        let catalog = FieldCatalog::new(vec!["int".into()], Vec::new());
        assert!(catalog.is_known_type(""));
        assert!(catalog.is_known_type("int"));
        assert!(!catalog.is_known_type("string"));
    }

    #[test]
    fn model_names_follow_provider_order() {
        let models = vec![Model::named("Post"), Model::named("User")];
        let catalog = FieldCatalog::from_models(vec!["string".into()], &models);
        assert_eq!(catalog.model_names(), ["Post", "User"]);
    }
}
