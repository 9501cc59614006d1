use super::field::FieldDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Index key list: each entry maps a field name to its sort direction.
pub type IndexKeys = Vec<IndexMap<String, i32>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Index {
    #[serde(default, deserialize_with = "nullable")]
    pub keys: IndexKeys,
    #[serde(default)]
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForeignRelation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub related_model: String,
    #[serde(default)]
    pub related_field: String,
}

/// The schema document edited by one page.
///
/// `fields` order is the row order on screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_template: String,
    #[serde(default, deserialize_with = "nullable")]
    pub display_fields: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub indexes: Vec<Index>,
    #[serde(default, deserialize_with = "nullable")]
    pub search_fields: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub fields: Vec<FieldDefinition>,
    #[serde(default, deserialize_with = "nullable")]
    pub foreign_relations: Vec<ForeignRelation>,
    #[serde(default)]
    pub hidden: bool,
}

impl Model {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_search_field(&self, name: &str) -> bool {
        self.search_fields.iter().any(|field| field == name)
    }

    /// Adds `name` to the search fields, or removes it when already present.
    /// Returns the membership after the toggle.
    pub fn toggle_search_field(&mut self, name: &str) -> bool {
        if let Some(position) = self.search_fields.iter().position(|field| field == name) {
            self.search_fields.remove(position);
            false
        } else {
            self.search_fields.push(name.to_owned());
            true
        }
    }
}

/// Providers serialize empty sequences as `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
