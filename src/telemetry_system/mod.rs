pub mod overlay;
pub mod telemetry;
