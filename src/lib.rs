pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{Preset, SimulationConfig};
pub use constants::*;
pub use control::environment::{ControlModel, Environment, PadSpan, SafetyThresholds};
pub use control::guidance::{GuidanceSystem, IdlePilot, Pilot};
pub use control::input::ControlInput;
pub use control::propulsion::FuelPolicy;
pub use control::rocket::{advance, CrashReason, FlightStatus, Rocket, RocketState};
pub use control::spawn::{SpawnPolicy, Spawner};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::{kinematics::step, landing::evaluate};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::overlay::{readouts, Indicator, Readout};
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
