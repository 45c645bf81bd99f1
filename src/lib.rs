pub mod constants;
pub mod errors;
pub mod projectile;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;
pub use projectile::properties::{
    derive_initial_conditions, InitialConditions, PhysicalProperties,
};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::integrator::{
    integrate, simulate, sweep_angle_range, sweep_angles, FlightResult, LaunchParameters,
    SimulationConfig,
};
pub use trajectory_system::kinematics::SimulationState;
pub use trajectory_system::trace::{TrajectoryPoint, TrajectoryTrace};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{
    format_sweep_table, format_trace_csv, FlightSummary, SweepEntry,
};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
