use crate::utils::vector2d::Vector2D;

use super::aerodynamics::Aerodynamics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub steps: u64,
    time_step: f64,
}

impl SimulationState {
    pub fn new(position: Vector2D, velocity: Vector2D, time_step: f64) -> Self {
        SimulationState {
            position,
            velocity,
            steps: 0,
            time_step,
        }
    }

    // Semi-implicit Euler: velocity first, then position from the new velocity.
    pub fn advance(&mut self, aerodynamics: &Aerodynamics, mass: f64) {
        let acceleration = aerodynamics.calculate_acceleration(self.velocity, mass);

        self.velocity += acceleration * self.time_step;
        self.position += self.velocity * self.time_step;
        self.steps += 1;
    }

    pub fn time(&self) -> f64 {
        self.steps as f64 * self.time_step
    }

    pub fn is_above_ground(&self) -> bool {
        self.position.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new(Vector2D::new(0.0, 100.0), Vector2D::ZERO, 0.01);
        assert_eq!(state.steps, 0);
        assert_eq!(state.time(), 0.0);
        assert!(state.is_above_ground());
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let vacuum = Aerodynamics::new(0.0, 0.01, 0.0);
        let mut state =
            SimulationState::new(Vector2D::new(0.0, 10.0), Vector2D::new(2.0, 0.0), 0.1);

        state.advance(&vacuum, 1.0);

        assert_relative_eq!(state.velocity.y, -GRAVITY * 0.1, epsilon = 1e-12);
        // Position already uses the updated velocity.
        assert_relative_eq!(state.position.y, 10.0 - GRAVITY * 0.01, epsilon = 1e-12);
        assert_relative_eq!(state.position.x, 0.2, epsilon = 1e-12);
        assert_relative_eq!(state.time(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_free_fall_reaches_ground() {
        let vacuum = Aerodynamics::new(0.0, 0.01, 0.0);
        let mut state = SimulationState::new(Vector2D::new(0.0, 1.0), Vector2D::ZERO, 0.01);

        while state.is_above_ground() {
            state.advance(&vacuum, 1.0);
        }

        // sqrt(2 h / g) ≈ 0.4515 s, within a couple of steps.
        assert!(state.time() > 0.43 && state.time() < 0.47, "t = {}", state.time());
        assert!(state.position.y < 0.0);
    }

    #[test]
    fn test_drag_slows_fall() {
        let vacuum = Aerodynamics::new(0.0, 0.01, 0.0);
        let air = Aerodynamics::new(0.47, 0.01, 1.225);
        let mut falling_in_vacuum =
            SimulationState::new(Vector2D::new(0.0, 500.0), Vector2D::ZERO, 0.01);
        let mut falling_in_air = falling_in_vacuum;

        for _ in 0..500 {
            falling_in_vacuum.advance(&vacuum, 0.1);
            falling_in_air.advance(&air, 0.1);
        }

        assert!(falling_in_air.velocity.y > falling_in_vacuum.velocity.y);
        assert!(falling_in_air.position.y > falling_in_vacuum.position.y);
    }
}
