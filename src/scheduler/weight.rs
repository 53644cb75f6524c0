use thiserror::Error;

use crate::models::{CourseId, SessionDemand};

/// Error raised by a weight strategy.
#[derive(Debug, Clone, Error)]
#[error("weight strategy failed: {0}")]
pub struct WeightError(pub String);

/// Maps a course's session demands to a scalar scheduling priority.
///
/// Higher weight means the course is placed earlier. Strategies are
/// pluggable; the generator only depends on this one operation.
pub trait WeightStrategy: Send + Sync {
    fn calculate(&self, demands: &[&SessionDemand]) -> Result<i64, WeightError>;
}

/// A course paired with its computed weight.
#[derive(Debug, Clone)]
pub struct CourseWeight {
    pub course_id: CourseId,
    pub weight: i64,
}

/// Default strategy: total weekly minutes demanded by the course.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalTime;

impl WeightStrategy for TotalTime {
    fn calculate(&self, demands: &[&SessionDemand]) -> Result<i64, WeightError> {
        Ok(demands
            .iter()
            .map(|d| i64::from(d.duration) * i64::from(d.sessions_per_week))
            .sum())
    }
}
