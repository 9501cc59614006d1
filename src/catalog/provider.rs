use super::FieldCatalog;
use crate::error::CatalogError;
use crate::schema::Model;
use crate::schema::model::nullable;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::Command;

/// External source of field types and existing models.
pub trait CatalogProvider {
    fn field_types(&self) -> Result<Vec<String>, CatalogError>;
    fn models(&self) -> Result<Vec<Model>, CatalogError>;
}

/// Everything the session needs from the provider, fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub catalog: FieldCatalog,
    pub models: Vec<Model>,
}

impl CatalogSnapshot {
    /// Built-in types and relation targets with no models to open.
    pub fn builtin() -> Self {
        Self {
            catalog: FieldCatalog::builtin(),
            models: Vec::new(),
        }
    }

    pub fn load(provider: &dyn CatalogProvider) -> Result<Self, CatalogError> {
        let field_types = provider.field_types()?;
        let models = provider.models()?;
        tracing::info!(
            field_types = field_types.len(),
            models = models.len(),
            "catalog loaded"
        );
        Ok(Self {
            catalog: FieldCatalog::from_models(field_types, &models),
            models,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FieldTypesResponse {
    #[serde(default, deserialize_with = "nullable")]
    field_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct ModelsResponse {
    #[serde(deserialize_with = "nullable")]
    models: Vec<Model>,
}

/// Runs `<program> fields` and `<program> models`, each printing JSON.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    program: String,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, subcommand: &str) -> Result<Vec<u8>, CatalogError> {
        let command = format!("{} {}", self.program, subcommand);
        tracing::debug!(%command, "invoking catalog provider");
        let output = Command::new(&self.program)
            .arg(subcommand)
            .output()
            .map_err(|source| CatalogError::Spawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(CatalogError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

impl CatalogProvider for CommandProvider {
    fn field_types(&self) -> Result<Vec<String>, CatalogError> {
        let bytes = self.run("fields")?;
        let response: FieldTypesResponse = parse(&bytes, format!("`{} fields`", self.program))?;
        Ok(response.field_types)
    }

    fn models(&self) -> Result<Vec<Model>, CatalogError> {
        let bytes = self.run("models")?;
        let response: ModelsResponse = parse(&bytes, format!("`{} models`", self.program))?;
        Ok(response.models)
    }
}

/// Reads provider-shaped JSON from files.
#[derive(Debug, Clone)]
pub struct FileProvider {
    types_path: PathBuf,
    models_path: PathBuf,
}

impl FileProvider {
    pub fn new(types_path: impl Into<PathBuf>, models_path: impl Into<PathBuf>) -> Self {
        Self {
            types_path: types_path.into(),
            models_path: models_path.into(),
        }
    }
}

impl CatalogProvider for FileProvider {
    fn field_types(&self) -> Result<Vec<String>, CatalogError> {
        let response: FieldTypesResponse = read_json(&self.types_path)?;
        Ok(response.field_types)
    }

    fn models(&self) -> Result<Vec<Model>, CatalogError> {
        let response: ModelsResponse = read_json(&self.models_path)?;
        Ok(response.models)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&bytes, path.display().to_string())
}

fn parse<T: DeserializeOwned>(bytes: &[u8], origin: String) -> Result<T, CatalogError> {
    serde_json::from_slice(bytes).map_err(|source| CatalogError::Parse { origin, source })
}

#[cfg(test)]
mod tests {
    use super::{CatalogProvider, CatalogSnapshot, CommandProvider, FileProvider};
    use crate::error::CatalogError;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn file_provider_reads_both_catalogs() {
        let types = write_temp(r#"{"field_types": ["string", "int", "related"]}"#);
        let models = write_temp(
            r#"[{"name": "User", "fields": [{"name": "email", "type": "string", "required": true}]},
                {"name": "Post", "fields": null}]"#,
        );
        let provider = FileProvider::new(types.path(), models.path());

        let snapshot = CatalogSnapshot::load(&provider).expect("snapshot");
        assert_eq!(snapshot.catalog.field_types(), ["string", "int", "related"]);
        assert_eq!(snapshot.catalog.model_names(), ["User", "Post"]);
        assert_eq!(snapshot.models[0].fields[0].name, "email");
        assert!(snapshot.models[1].fields.is_empty());
    }

    #[test]
    fn null_model_list_is_empty() {
        let types = write_temp(r#"{"field_types": null}"#);
        let models = write_temp("null");
        let provider = FileProvider::new(types.path(), models.path());
        assert!(provider.field_types().expect("types").is_empty());
        assert!(provider.models().expect("models").is_empty());
    }

    #[test]
    fn malformed_data_is_a_parse_error() {
        let types = write_temp("field_types: [string]");
        let models = write_temp("[]");
        let provider = FileProvider::new(types.path(), models.path());
        assert!(matches!(
            CatalogSnapshot::load(&provider),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let provider = FileProvider::new("/nonexistent/types.json", "/nonexistent/models.json");
        assert!(matches!(
            provider.field_types(),
            Err(CatalogError::Read { .. })
        ));
    }

    #[test]
    fn unreachable_command_is_a_spawn_error() {
        let provider = CommandProvider::new("modelt-provider-that-does-not-exist");
        assert!(matches!(
            provider.field_types(),
            Err(CatalogError::Spawn { .. })
        ));
    }

    #[test]
    fn builtin_snapshot_has_relation_targets_but_no_pages() {
        let snapshot = CatalogSnapshot::builtin();
        assert_eq!(snapshot.catalog.model_names(), ["User", "Post", "Comment"]);
        assert!(snapshot.models.is_empty());
    }
}
