use crate::{constants::GRAVITY, utils::vector2d::Vector2D};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub frontal_area: f64,
    pub air_density: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, frontal_area: f64, air_density: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            frontal_area,
            air_density,
        }
    }

    // Projected onto the velocity unit vector; zero speed means zero drag.
    pub fn calculate_drag(&self, velocity: Vector2D) -> Vector2D {
        let speed = velocity.magnitude();
        if speed == 0.0 {
            return Vector2D::ZERO;
        }

        let drag_magnitude =
            self.calculate_dynamic_pressure(speed) * self.drag_coefficient * self.frontal_area;

        -velocity.normalize() * drag_magnitude
    }

    pub fn calculate_acceleration(&self, velocity: Vector2D, mass: f64) -> Vector2D {
        let drag = self.calculate_drag(velocity);

        drag / mass + Vector2D::new(0.0, -GRAVITY)
    }

    fn calculate_dynamic_pressure(&self, speed: f64) -> f64 {
        0.5 * self.air_density * speed.powi(2)
    }
}
