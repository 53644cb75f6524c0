mod greedy;
mod interval;
mod weight;

pub use greedy::GreedyScheduler;
pub use interval::TimeRange;
pub use weight::{TotalTime, WeightError, WeightStrategy};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Course, Room, RoomId, ScheduledSession, SessionDemand};

/// A day of the week (0 = Monday, 6 = Sunday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, Error)]
#[error("day must be between 0 and 6, got {0}")]
pub struct InvalidDay(pub u8);

impl From<Day> for u8 {
    fn from(day: Day) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDay;

    fn try_from(value: u8) -> Result<Self, InvalidDay> {
        match value {
            0 => Ok(Day::Monday),
            1 => Ok(Day::Tuesday),
            2 => Ok(Day::Wednesday),
            3 => Ok(Day::Thursday),
            4 => Ok(Day::Friday),
            5 => Ok(Day::Saturday),
            6 => Ok(Day::Sunday),
            other => Err(InvalidDay(other)),
        }
    }
}

/// Parameters for generating a schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// When sessions can be scheduled, in minutes from midnight.
    pub operating_hours: TimeRange,
    /// Days on which sessions can be scheduled.
    pub operating_days: Vec<Day>,
    /// Minimum gap kept after each session in the same room (minutes).
    /// Useful for travel time between buildings, cleaning, etc.
    pub min_break_between_sessions: u32,
    /// Aligns session starts to multiples of this value when possible
    /// (e.g. 60 = hourly starts). Zero disables alignment.
    pub preferred_slot_duration: u32,
}

impl Default for Config {
    /// Mon-Fri, 8:00 AM to 9:00 PM, no break, no alignment.
    fn default() -> Self {
        Self {
            operating_hours: TimeRange::new(480, 1260),
            operating_days: vec![
                Day::Monday,
                Day::Tuesday,
                Day::Wednesday,
                Day::Thursday,
                Day::Friday,
            ],
            min_break_between_sessions: 0,
            preferred_slot_duration: 0,
        }
    }
}

/// Free intervals per room per day.
///
/// `availability[&room_id][&day]` is the sorted, disjoint list of
/// currently unoccupied intervals in that room on that day.
pub type Availability = HashMap<RoomId, HashMap<Day, Vec<TimeRange>>>;

/// Everything needed to generate a schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Input {
    pub config: Option<Config>,
    pub rooms: Vec<Room>,
    pub courses: Vec<Course>,
    pub demands: Vec<SessionDemand>,
}

/// The generated schedule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Output {
    pub scheduled_sessions: Vec<ScheduledSession>,
    pub failures: Vec<FailedSession>,
}

/// A demand that could not be placed, with the reason.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FailedSession {
    pub demand: SessionDemand,
    pub reason: String,
}

/// Cooperative cancellation flag for a generate call.
///
/// Cloned tokens share the flag; the generator checks it between
/// placements and returns [`GenerateError::Cancelled`] once tripped.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("schedule generation cancelled")]
    Cancelled,
    #[error(transparent)]
    Weight(#[from] WeightError),
}

/// Generates schedules from inputs.
pub trait Scheduler: Send + Sync {
    fn generate(&self, input: &Input, cancel: &CancelToken) -> Result<Output, GenerateError>;
}
