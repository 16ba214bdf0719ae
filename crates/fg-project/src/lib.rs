//! fg-project: flame configuration files.

pub mod schema;

pub use schema::*;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid flame configuration: {0}")]
    Schema(#[source] serde_json::Error),
}

/// Read and parse a JSON document. Object key order is preserved.
pub fn read_json(path: &Path) -> ProjectResult<serde_json::Value> {
    let value: serde_json::Value = {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ProjectError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ProjectError::Io(e),
        })?;
        serde_json::from_reader(BufReader::new(file))?
    };
    tracing::debug!(path = %path.display(), "read JSON document");
    Ok(value)
}

/// Read a flame configuration file into its typed form.
pub fn load_flame_config(path: &Path) -> ProjectResult<FlameConfig> {
    let value = read_json(path)?;
    FlameConfig::from_value(&value)
}

pub fn save_flame_config(path: &Path, config: &FlameConfig) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
