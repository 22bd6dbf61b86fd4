use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::control::{environment::Environment, spawn::SpawnPolicy};
use crate::errors::SimulationError;

/// Named parameter sets matching the shipped game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Fixed top-centre spawn, no pad marking, direct rotation, 100 units of fuel.
    Classic,
    /// Random edge spawns, centred pad, inertial rotation, no fuel limit.
    PadApproach,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Preset::Classic),
            "pad-approach" | "pad_approach" => Ok(Preset::PadApproach),
            other => Err(format!(
                "unknown preset '{other}', expected 'classic' or 'pad-approach'"
            )),
        }
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub environment: Environment,
    pub spawn: SpawnPolicy,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Classic => {
                let environment = Environment::classic();
                SimulationConfig {
                    spawn: SpawnPolicy::top_center(&environment),
                    environment,
                    seed: None,
                }
            }
            Preset::PadApproach => SimulationConfig {
                environment: Environment::pad_approach(),
                spawn: SpawnPolicy::random_edge(),
                seed: None,
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SimulationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.environment.validate()?;
        self.spawn.validate(&self.environment)
    }
}
