use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
use anyhow::{anyhow, bail};
#[cfg(test)]
use jsonschema::{Draft, JSONSchema};

/// The activity summary contract consumed by chart/report collaborators.
///
/// `labels` and both series in `series` are parallel sequences, one entry per
/// window day, oldest to newest. `active_users` is the flat list of users who
/// messaged on at least `active_day_threshold` distinct window days.
#[derive(Debug, Deserialize, Serialize)]
pub struct Summary {
    pub schema_version: i32,
    pub generated_at: String,
    pub coverage: Coverage,
    pub window_days: u32,
    pub active_day_threshold: u32,
    pub labels: Vec<String>,
    pub series: Series,
    pub active_users: Vec<String>,
}

/// First and last window day, ISO formatted.
#[derive(Debug, Deserialize, Serialize)]
pub struct Coverage {
    pub from: String,
    pub to: String,
}

/// Per-day counts aligned with `Summary::labels`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Series {
    /// Users who sent at least one message that day.
    pub messaging_users: Vec<u32>,
    /// Users who joined the group that day.
    pub new_users: Vec<u32>,
}

impl Summary {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read summary file: {}", path.display()))?;

        let summary: Summary = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))?;

        Ok(summary)
    }

    #[cfg(test)]
    /// Validate summary JSON against the JSON schema
    pub fn validate_with_schema(
        summary_json: &serde_json::Value,
        schema: &JSONSchema,
    ) -> Result<()> {
        match schema.validate(summary_json) {
            Ok(_) => Ok(()),
            Err(errors) => {
                let error_messages: Vec<String> = errors
                    .map(|e| format!("  - {}: {}", e.instance_path, e))
                    .collect();
                bail!("Summary validation failed:\n{}", error_messages.join("\n"))
            }
        }
    }

    #[cfg(test)]
    /// Load and compile the JSON schema
    pub fn load_schema(schema_path: &Path) -> Result<JSONSchema> {
        let schema_content = std::fs::read_to_string(schema_path)
            .with_context(|| format!("Failed to read schema file: {}", schema_path.display()))?;

        let schema_json: serde_json::Value =
            serde_json::from_str(&schema_content).with_context(|| {
                format!(
                    "Failed to parse schema JSON from: {}",
                    schema_path.display()
                )
            })?;

        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_json)
            .map_err(|e| anyhow!("Failed to compile JSON schema: {}", e))
    }
}
