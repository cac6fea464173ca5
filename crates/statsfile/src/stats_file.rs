use std::collections::HashSet;
use std::path::Path;

use cestats_core::Document;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{error::StatsFileError, types::PathDefinition, Result};

/// Statistics for a set of paths; defines the TOML schema for stats files.
#[derive(Clone, Deserialize, Debug, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatsFile {
    /// One `[[path]]` table per path, encoded in file order.
    #[serde(default, rename = "path")]
    pub paths: Vec<PathDefinition>,
}

impl StatsFile {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<StatsFile> {
        let file_path = file_path.as_ref();
        debug!("reading stats file {}", file_path.display());
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a stats file from raw TOML.
    pub fn from_toml_str(toml: &str) -> Result<StatsFile> {
        let stats_file: StatsFile = toml::from_str(toml)?;
        stats_file.validate()?;
        Ok(stats_file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(StatsFileError::NoPaths.into());
        }
        let mut seen = HashSet::new();
        for (index, def) in self.paths.iter().enumerate() {
            if def.path.trim().is_empty() {
                return Err(StatsFileError::PathEmpty { index }.into());
            }
            if !seen.insert(def.path.as_str()) {
                return Err(StatsFileError::DuplicatePath {
                    path: def.path.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn encode_toml(&self) -> Result<String> {
        let encoded = toml::to_string(self)?;
        Ok(encoded)
    }

    pub fn save_toml(&self, file_path: impl AsRef<Path>) -> Result<()> {
        let encoded = self.encode_toml()?;
        std::fs::write(file_path, encoded)?;
        Ok(())
    }

    /// Encodes every path into a `StatsPath` document, in file order.
    pub fn encode(&self) -> Result<Vec<Document>> {
        let docs = self
            .paths
            .iter()
            .map(PathDefinition::encode)
            .collect::<Result<Vec<_>>>()?;
        info!("encoded {} stats path document(s)", docs.len());
        Ok(docs)
    }
}
