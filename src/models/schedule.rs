use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseId, RoomId, ScheduleId, ValidationError};

/// One placed session within a saved schedule. `day` is 0 (Monday)
/// through 6 (Sunday); times are minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduledSession {
    pub course_id: CourseId,
    pub room_id: RoomId,
    pub day: u8,
    pub start_time: u32,
    pub end_time: u32,
}

impl ScheduledSession {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.day > 6 {
            return Err(ValidationError::new("day must be between 0 and 6"));
        }

        if self.start_time >= 1440 {
            return Err(ValidationError::new(
                "start_time must be less than 1440 minutes",
            ));
        }

        if self.end_time > 1440 {
            return Err(ValidationError::new(
                "end_time must be at most 1440 minutes",
            ));
        }

        if self.end_time <= self.start_time {
            return Err(ValidationError::new("end_time must be after start_time"));
        }

        Ok(())
    }
}

/// A named, saved schedule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub id: ScheduleId,
    pub name: String,
    pub sessions: Vec<ScheduledSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Schedule {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("schedule name is required"));
        }

        if self.sessions.is_empty() {
            return Err(ValidationError::new(
                "schedule must have at least one session",
            ));
        }

        for session in &self.sessions {
            session.validate()?;
        }

        Ok(())
    }
}

/// Partial update fields for a schedule.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleUpdate {
    pub name: Option<String>,
    pub sessions: Option<Vec<ScheduledSession>>,
}

impl ScheduleUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::new("name cannot be empty"));
            }
        }

        if let Some(sessions) = &self.sessions {
            if sessions.is_empty() {
                return Err(ValidationError::new("sessions cannot be empty"));
            }
            for session in sessions {
                session.validate()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session() -> ScheduledSession {
        ScheduledSession {
            course_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            day: 0,
            start_time: 480,
            end_time: 540,
        }
    }

    #[test]
    fn session_bounds_are_checked() {
        let mut s = session();
        s.day = 7;
        assert!(s.validate().is_err());

        let mut s = session();
        s.start_time = 1440;
        assert!(s.validate().is_err());

        let mut s = session();
        s.end_time = s.start_time;
        assert!(s.validate().is_err());
    }

    #[test]
    fn session_ending_at_midnight_is_allowed() {
        let mut s = session();
        s.start_time = 1380;
        s.end_time = 1440;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn schedule_requires_name_and_sessions() {
        let schedule = Schedule {
            id: Uuid::new_v4(),
            name: "Fall".to_string(),
            sessions: vec![session()],
            created_at: None,
        };
        assert!(schedule.validate().is_ok());

        let unnamed = Schedule {
            name: String::new(),
            ..schedule.clone()
        };
        assert!(unnamed.validate().is_err());

        let empty = Schedule {
            sessions: vec![],
            ..schedule
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn sessions_round_trip_through_storage_json() {
        let sessions = vec![session(), session()];
        let json = serde_json::to_string(&sessions).unwrap();
        let back: Vec<ScheduledSession> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sessions);
    }

    #[test]
    fn session_storage_keys_are_stable() {
        let value = serde_json::to_value(session()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["course_id", "day", "end_time", "room_id", "start_time"]
        );
    }
}
