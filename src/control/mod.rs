pub mod environment;
pub mod guidance;
pub mod input;
pub mod propulsion;
pub mod rocket;
pub mod spawn;
