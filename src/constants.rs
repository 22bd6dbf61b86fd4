// Arena
pub const ARENA_WIDTH: f64 = 800.0; // px
pub const ARENA_HEIGHT: f64 = 600.0; // px
pub const TICKS_PER_SECOND: f64 = 60.0;

// Classic variant: whole ground is a pad, direct rotation, hard fuel cutoff
pub const CLASSIC_GRAVITY: f64 = 0.03; // px/tick²
pub const CLASSIC_THRUST: f64 = 0.1; // px/tick²
pub const CLASSIC_GROUND_HEIGHT: f64 = 50.0; // px from the bottom edge
pub const CLASSIC_CONTACT_OFFSET: f64 = 20.0; // px, position to bottom edge
pub const CLASSIC_TURN_RATE: f64 = 1.0; // degrees/tick
pub const CLASSIC_MAX_SPEED: f64 = 2.0; // px/tick
pub const CLASSIC_MAX_ANGLE: f64 = 10.0; // degrees
pub const CLASSIC_FUEL_CAPACITY: f64 = 100.0;
pub const CLASSIC_FUEL_BURN_RATE: f64 = 0.5; // per thrust tick
pub const CLASSIC_SPAWN_Y: f64 = 50.0; // px

// Pad-approach variant: centred pad, inertial rotation, random edge spawns
pub const APPROACH_GRAVITY: f64 = 0.05; // px/tick²
pub const APPROACH_THRUST: f64 = 0.15; // px/tick²
pub const APPROACH_GROUND_HEIGHT: f64 = 30.0; // px from the bottom edge
pub const APPROACH_CONTACT_OFFSET: f64 = 10.0; // px
pub const APPROACH_PAD_WIDTH: f64 = 100.0; // px
pub const APPROACH_ANGULAR_ACCELERATION: f64 = 0.2; // degrees/tick²
pub const APPROACH_ROTATIONAL_DAMPING: f64 = 0.99;
pub const APPROACH_MAX_VERTICAL_SPEED: f64 = 2.5; // px/tick
pub const APPROACH_MAX_HORIZONTAL_SPEED: f64 = 2.0; // px/tick
pub const APPROACH_MAX_ANGLE: f64 = 15.0; // degrees
pub const APPROACH_MAX_ANGULAR_VELOCITY: f64 = 2.0; // degrees/tick
pub const APPROACH_BOUNDS_MARGIN: f64 = 50.0; // px beyond each arena edge

// Spawning
pub const SPAWN_EDGE_INSET: f64 = 50.0; // px
pub const SPAWN_MIN_SPEED: f64 = 1.0; // px/tick
pub const SPAWN_MAX_SPEED: f64 = 3.0; // px/tick

// Overlay
pub const NEAR_GROUND_DISTANCE: f64 = 20.0; // px

// Headless runner
pub const MAX_TICKS_PER_ROUND: u64 = 60 * 60; // one minute of flight
