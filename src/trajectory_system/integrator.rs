use tracing::{debug, warn};

use crate::{
    constants::{
        AIR_DENSITY_SEA_LEVEL, MAX_STEPS, MAX_SWEEP_ANGLES, SPHERE_DRAG_COEFFICIENT, TIME_STEP,
    },
    errors::SimulationError,
    projectile::properties::{InitialConditions, PhysicalProperties},
    utils::vector2d::Vector2D,
};

use super::{aerodynamics::Aerodynamics, kinematics::SimulationState, trace::TrajectoryTrace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub time_step: f64,
    pub initial_position: Vector2D,
    pub air_density: f64,
    pub drag_coefficient: f64,
    pub max_steps: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step: TIME_STEP,
            initial_position: Vector2D::ZERO,
            air_density: AIR_DENSITY_SEA_LEVEL,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            max_steps: MAX_STEPS,
        }
    }
}

impl SimulationConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_initial_position(mut self, x: f64, y: f64) -> Self {
        self.initial_position = Vector2D::new(x, y);
        self
    }

    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        SimulationError::require_positive("time step", self.time_step)?;
        SimulationError::require_non_negative("air density", self.air_density)?;
        SimulationError::require_non_negative("drag coefficient", self.drag_coefficient)?;
        if !self.initial_position.is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "initial position must be finite, got {:?}",
                self.initial_position
            )));
        }
        if self.max_steps == 0 {
            return Err(SimulationError::InvalidInput(
                "max steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub mass: f64,          // kg
    pub speed: f64,         // m/s
    pub area: f64,          // m²
    pub angle_radians: f64,
}

impl LaunchParameters {
    pub fn new(mass: f64, speed: f64, area: f64, angle_radians: f64) -> Self {
        LaunchParameters {
            mass,
            speed,
            area,
            angle_radians,
        }
    }

    pub fn from_conditions(conditions: InitialConditions, speed: f64) -> Self {
        LaunchParameters::new(
            conditions.mass,
            speed,
            conditions.frontal_area,
            conditions.angle_radians,
        )
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        SimulationError::require_positive("mass", self.mass)?;
        SimulationError::require_non_negative("launch speed", self.speed)?;
        SimulationError::require_positive("frontal area", self.area)?;
        SimulationError::require_finite("launch angle", self.angle_radians)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightResult {
    pub trace: TrajectoryTrace,
    pub flight_time: f64,
    pub initial_position: Vector2D,
    pub final_position: Vector2D,
}

impl FlightResult {
    pub fn final_x(&self) -> f64 {
        self.final_position.x
    }

    pub fn horizontal_distance(&self) -> f64 {
        (self.final_position - self.initial_position).x
    }

    pub fn steps(&self) -> usize {
        self.trace.len()
    }
}

pub fn integrate(
    launch: &LaunchParameters,
    config: &SimulationConfig,
) -> Result<FlightResult, SimulationError> {
    launch.validate()?;
    config.validate()?;

    let aerodynamics = Aerodynamics::new(config.drag_coefficient, launch.area, config.air_density);
    let initial_velocity = Vector2D::from_polar(launch.speed, launch.angle_radians);
    let mut state =
        SimulationState::new(config.initial_position, initial_velocity, config.time_step);
    let mut trace = TrajectoryTrace::new();

    debug!(
        mass = launch.mass,
        speed = launch.speed,
        angle = launch.angle_radians,
        dt = config.time_step,
        "starting trajectory integration"
    );

    while state.is_above_ground() {
        if state.steps >= config.max_steps {
            warn!(
                max_steps = config.max_steps,
                elapsed = state.time(),
                altitude = state.position.y,
                "step limit reached before ground impact"
            );
            return Err(SimulationError::StepLimitExceeded {
                max_steps: config.max_steps,
                elapsed: state.time(),
            });
        }

        state.advance(&aerodynamics, launch.mass);
        trace.record(state.time(), state.position);
    }

    let result = FlightResult {
        trace,
        flight_time: state.time(),
        initial_position: config.initial_position,
        final_position: state.position,
    };

    debug!(
        steps = state.steps,
        flight_time = result.flight_time,
        distance = result.horizontal_distance(),
        "trajectory integration finished"
    );

    Ok(result)
}

pub fn simulate(
    properties: &PhysicalProperties,
    speed: f64,
    config: &SimulationConfig,
) -> Result<FlightResult, SimulationError> {
    properties.validate()?;
    let launch = LaunchParameters::from_conditions(properties.initial_conditions(), speed);

    integrate(&launch, config)
}

// Inclusive of `to`, within a small fraction of a step.
pub fn sweep_angle_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>, SimulationError> {
    SimulationError::require_finite("sweep start", from)?;
    SimulationError::require_finite("sweep end", to)?;
    SimulationError::require_positive("sweep step", step)?;
    if to < from {
        return Err(SimulationError::InvalidInput(format!(
            "sweep end {} is before sweep start {}",
            to, from
        )));
    }

    let intervals = ((to - from) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_ANGLES as f64 {
        return Err(SimulationError::InvalidInput(format!(
            "sweep {}..{} by {} exceeds {} angles",
            from, to, step, MAX_SWEEP_ANGLES
        )));
    }

    let count = intervals as usize + 1;
    Ok((0..count)
        .map(|i| (from + i as f64 * step).min(to))
        .collect())
}

// Independent runs of the same projectile, one per launch angle in degrees.
pub fn sweep_angles(
    properties: &PhysicalProperties,
    speed: f64,
    from: f64,
    to: f64,
    step: f64,
    config: &SimulationConfig,
) -> Result<Vec<(f64, FlightResult)>, SimulationError> {
    let angles = sweep_angle_range(from, to, step)?;
    let mut results = Vec::with_capacity(angles.len());

    for angle in angles {
        let launch = PhysicalProperties {
            launch_angle: angle,
            ..*properties
        };
        results.push((angle, simulate(&launch, speed, config)?));
    }

    debug!(runs = results.len(), "angle sweep finished");
    Ok(results)
}
