use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseId, DemandId, ValidationError};

const VALID_SESSION_TYPES: [&str; 3] = ["lecture", "lab", "tutorial"];

/// A weekly session requirement for a course: what kind of room it
/// needs, how long each occurrence runs, and how many occurrences to
/// place per week.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionDemand {
    #[serde(default)]
    pub id: DemandId,
    pub course_id: CourseId,
    #[serde(rename = "type")]
    pub session_type: String,
    pub required_room: String,
    pub duration: u32,
    pub sessions_per_week: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SessionDemand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.required_room.trim().is_empty() {
            return Err(ValidationError::new("required_room is required"));
        }

        if !VALID_SESSION_TYPES.contains(&self.session_type.as_str()) {
            return Err(ValidationError::new(format!(
                "invalid session type: {}",
                self.session_type
            )));
        }

        if self.duration == 0 {
            return Err(ValidationError::new("duration must be greater than 0"));
        }

        if self.sessions_per_week == 0 {
            return Err(ValidationError::new(
                "sessions per week must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Partial update fields for a session demand.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionDemandUpdate {
    #[serde(rename = "type")]
    pub session_type: Option<String>,
    pub required_room: Option<String>,
    pub duration: Option<u32>,
    pub sessions_per_week: Option<u32>,
}

impl SessionDemandUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(required_room) = &self.required_room {
            if required_room.trim().is_empty() {
                return Err(ValidationError::new("required_room cannot be empty"));
            }
        }

        if let Some(session_type) = &self.session_type {
            if !VALID_SESSION_TYPES.contains(&session_type.as_str()) {
                return Err(ValidationError::new(format!(
                    "invalid session type: {session_type}"
                )));
            }
        }

        if self.duration == Some(0) {
            return Err(ValidationError::new("duration must be greater than 0"));
        }

        if self.sessions_per_week == Some(0) {
            return Err(ValidationError::new(
                "sessions per week must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn demand() -> SessionDemand {
        SessionDemand {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            session_type: "lecture".to_string(),
            required_room: "lecture_room".to_string(),
            duration: 60,
            sessions_per_week: 2,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn complete_demand_passes() {
        assert!(demand().validate().is_ok());
    }

    #[test]
    fn unknown_session_type_is_rejected() {
        let mut d = demand();
        d.session_type = "seminar".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut d = demand();
        d.duration = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn zero_sessions_per_week_is_rejected() {
        let mut d = demand();
        d.sessions_per_week = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn session_type_serializes_under_type_key() {
        let value = serde_json::to_value(demand()).unwrap();
        assert_eq!(value["type"], "lecture");
    }
}
