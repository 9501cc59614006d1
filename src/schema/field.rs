use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

pub const RELATED_TYPE: &str = "related";
pub const DROPDOWN_TYPE: &str = "dropdown";

/// Row shape selected by a field's `type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    Related,
    Dropdown,
}

impl FieldKind {
    pub fn of(field_type: &str) -> Self {
        match field_type {
            RELATED_TYPE => Self::Related,
            DROPDOWN_TYPE => Self::Dropdown,
            _ => Self::Plain,
        }
    }
}

/// One field of a model.
///
/// The reserved keys are typed; anything else the provider sends is kept in
/// `extra` so it survives an edit session untouched. `related_model` and
/// `options` stay stored across type changes even while the row hides them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_model: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "options_list"
    )]
    pub options: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, JsonValue>,
}

impl FieldDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::of(&self.field_type)
    }

    pub fn related_model_or_empty(&self) -> &str {
        self.related_model.as_deref().unwrap_or("")
    }

    pub fn options_or_empty(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn options_text(&self) -> String {
        self.options_or_empty().join(", ")
    }

    pub fn set_options_text(&mut self, text: &str) {
        self.options = Some(split_options(text));
    }
}

pub fn split_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsRepr {
    List(Vec<String>),
    Text(String),
}

fn options_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<OptionsRepr>::deserialize(deserializer)?;
    Ok(repr.map(|repr| match repr {
        OptionsRepr::List(items) => items,
        OptionsRepr::Text(text) => split_options(&text),
    }))
}
