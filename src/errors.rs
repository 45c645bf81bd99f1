use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Step limit exceeded: still airborne after {max_steps} steps ({elapsed:.3} s)")]
    StepLimitExceeded { max_steps: u64, elapsed: f64 },
}

impl SimulationError {
    pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), SimulationError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(SimulationError::InvalidInput(format!(
                "{} must be a positive finite number, got {}",
                name, value
            )))
        }
    }

    pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(SimulationError::InvalidInput(format!(
                "{} must be a non-negative finite number, got {}",
                name, value
            )))
        }
    }

    pub(crate) fn require_finite(name: &str, value: f64) -> Result<(), SimulationError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(SimulationError::InvalidInput(format!(
                "{} must be finite, got {}",
                name, value
            )))
        }
    }
}
