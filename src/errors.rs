use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("Invalid spawn policy: {0}")]
    InvalidSpawn(String),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
