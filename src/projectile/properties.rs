use std::f64::consts::PI;

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProperties {
    pub radius: f64,         // m
    pub density: f64,        // kg/m³
    pub launch_angle: f64,   // degrees above horizontal
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub frontal_area: f64,   // m²
    pub mass: f64,           // kg
    pub angle_radians: f64,
}

impl PhysicalProperties {
    pub fn new(radius: f64, density: f64, launch_angle: f64) -> Self {
        PhysicalProperties {
            radius,
            density,
            launch_angle,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        SimulationError::require_positive("radius", self.radius)?;
        SimulationError::require_positive("density", self.density)?;
        SimulationError::require_finite("launch angle", self.launch_angle)
    }

    pub fn initial_conditions(&self) -> InitialConditions {
        derive_initial_conditions(self.radius, self.density, self.launch_angle)
    }
}

// No validation here; see PhysicalProperties::validate.
pub fn derive_initial_conditions(
    radius: f64,
    density: f64,
    angle_degrees: f64,
) -> InitialConditions {
    let frontal_area = PI * radius.powi(2);
    let volume = 4.0 / 3.0 * PI * radius.powi(3);

    InitialConditions {
        frontal_area,
        mass: density * volume,
        angle_radians: angle_degrees.to_radians(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_steel_ball_conditions() {
        let conditions = derive_initial_conditions(0.05, 7850.0, 30.0);

        assert_relative_eq!(conditions.frontal_area, 0.007853981633974483, epsilon = EPSILON);
        assert_relative_eq!(conditions.mass, 4.110250388446647, epsilon = 1e-9);
        assert_relative_eq!(conditions.angle_radians, 0.5235987755982988, epsilon = EPSILON);
    }

    #[test]
    fn test_angle_conversion_edges() {
        assert_relative_eq!(derive_initial_conditions(1.0, 1.0, 0.0).angle_radians, 0.0);
        assert_relative_eq!(
            derive_initial_conditions(1.0, 1.0, 90.0).angle_radians,
            std::f64::consts::FRAC_PI_2,
            epsilon = EPSILON
        );
        assert_relative_eq!(
            derive_initial_conditions(1.0, 1.0, -45.0).angle_radians,
            -std::f64::consts::FRAC_PI_4,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_mass_scales_with_cube_of_radius() {
        let small = derive_initial_conditions(0.1, 1000.0, 45.0);
        let large = derive_initial_conditions(0.2, 1000.0, 45.0);

        assert_relative_eq!(large.mass / small.mass, 8.0, epsilon = 1e-9);
        assert_relative_eq!(large.frontal_area / small.frontal_area, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deriver_does_not_validate() {
        let conditions = derive_initial_conditions(-0.1, 1000.0, 10.0);
        assert!(conditions.mass < 0.0);
        assert!(conditions.frontal_area > 0.0);
    }

    #[test]
    fn test_validate_rejects_non_physical_input() {
        assert!(PhysicalProperties::new(0.05, 7850.0, 45.0).validate().is_ok());
        assert!(matches!(
            PhysicalProperties::new(0.0, 7850.0, 45.0).validate(),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(PhysicalProperties::new(0.05, -1.0, 45.0).validate().is_err());
        assert!(PhysicalProperties::new(0.05, 7850.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_properties_delegate_to_deriver() {
        let props = PhysicalProperties::new(0.05, 7850.0, 30.0);
        assert_eq!(props.initial_conditions(), derive_initial_conditions(0.05, 7850.0, 30.0));
    }
}
