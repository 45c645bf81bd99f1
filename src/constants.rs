// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.001; // s
pub const MAX_STEPS: u64 = 10_000_000; // 10 000 s of flight at the default step
pub const MAX_SWEEP_ANGLES: usize = 1_000;
