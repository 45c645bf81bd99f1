use std::fmt;

use crate::trajectory_system::{integrator::FlightResult, trace::TrajectoryTrace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    pub flight_time: f64,
    pub distance: f64,
    pub max_altitude: f64,
    pub apex_time: f64,
    pub steps: usize,
}

impl FlightSummary {
    pub fn from_result(result: &FlightResult) -> Self {
        let (max_altitude, apex_time) = result
            .trace
            .apex()
            .filter(|apex| apex.position.y > result.initial_position.y)
            .map_or((result.initial_position.y, 0.0), |apex| {
                (apex.position.y, apex.time)
            });

        FlightSummary {
            flight_time: result.flight_time,
            distance: result.horizontal_distance(),
            max_altitude,
            apex_time,
            steps: result.steps(),
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.3}s", minutes, seconds)
        } else {
            format!("{:.3}s", elapsed_time)
        }
    }

    fn format_length(length: f64) -> String {
        if length.abs() >= 1000.0 {
            format!("{:.3} km", length / 1000.0)
        } else {
            format!("{:.2} m", length)
        }
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Flight Summary ---")?;
        writeln!(f, "Total flight time: {}", Self::format_time(self.flight_time))?;
        writeln!(f, "Total distance: {}", Self::format_length(self.distance))?;
        writeln!(
            f,
            "Max altitude: {} (at {})",
            Self::format_length(self.max_altitude),
            Self::format_time(self.apex_time)
        )?;
        write!(f, "Integration steps: {}", self.steps)
    }
}

pub fn format_trace_csv(trace: &TrajectoryTrace) -> String {
    let mut csv = String::from("t,x,y\n");
    for point in trace {
        csv.push_str(&format!(
            "{:.6},{:.6},{:.6}\n",
            point.time, point.position.x, point.position.y
        ));
    }
    csv
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEntry {
    pub angle_degrees: f64,
    pub summary: FlightSummary,
}

pub fn format_sweep_table(entries: &[SweepEntry]) -> String {
    let mut table = format!(
        "{:>8} | {:>12} | {:>12} | {:>12}\n",
        "angle", "flight time", "distance", "max altitude"
    );
    for entry in entries {
        table.push_str(&format!(
            "{:>7.2}° | {:>12} | {:>12} | {:>12}\n",
            entry.angle_degrees,
            FlightSummary::format_time(entry.summary.flight_time),
            FlightSummary::format_length(entry.summary.distance),
            FlightSummary::format_length(entry.summary.max_altitude)
        ));
    }

    if let Some(best) = entries
        .iter()
        .max_by(|a, b| a.summary.distance.total_cmp(&b.summary.distance))
    {
        table.push_str(&format!(
            "Longest distance: {} at {:.2}°\n",
            FlightSummary::format_length(best.summary.distance),
            best.angle_degrees
        ));
    }
    table
}
