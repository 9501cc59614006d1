//! Serializes the finished document for the caller.

use crate::error::ExportError;
use crate::schema::Model;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

pub fn render(model: &Model, format: ExportFormat) -> Result<String, ExportError> {
    let mut text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(model)?,
        ExportFormat::Yaml => serde_yaml::to_string(model)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

pub fn write_to(
    out: &mut dyn Write,
    model: &Model,
    format: ExportFormat,
) -> Result<(), ExportError> {
    out.write_all(render(model, format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
