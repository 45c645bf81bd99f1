use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub position: Vector2D,
}

// One sample per step. Only the last sample may be below ground.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryTrace {
    points: Vec<TrajectoryPoint>,
}

impl TrajectoryTrace {
    pub fn new() -> Self {
        TrajectoryTrace { points: Vec::new() }
    }

    pub(crate) fn record(&mut self, time: f64, position: Vector2D) {
        self.points.push(TrajectoryPoint { time, position });
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position.y).collect()
    }

    pub fn apex(&self) -> Option<&TrajectoryPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
    }
}

impl<'a> IntoIterator for &'a TrajectoryTrace {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
