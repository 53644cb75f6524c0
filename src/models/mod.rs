mod building;
mod course;
mod room;
mod schedule;
mod session;

pub use building::{Building, BuildingUpdate};
pub use course::{Course, CourseUpdate};
pub use room::{Room, RoomType, RoomTypeUpdate, RoomUpdate};
pub use schedule::{Schedule, ScheduleUpdate, ScheduledSession};
pub use session::{SessionDemand, SessionDemandUpdate};

use thiserror::Error;
use uuid::Uuid;

// Type aliases for clarity
pub type BuildingId = Uuid;
pub type CourseId = Uuid;
pub type DemandId = Uuid;
pub type RoomId = Uuid;
pub type ScheduleId = Uuid;

/// A record failed an integrity check.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
