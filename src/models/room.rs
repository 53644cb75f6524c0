use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BuildingId, RoomId, ValidationError};

/// A physical room, typed by capability (e.g. `lecture_room`,
/// `computer_lab`). Demands are matched to rooms by exact type equality.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Room {
    #[serde(default)]
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub building_id: BuildingId,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("room name is required"));
        }

        if self.room_type.trim().is_empty() {
            return Err(ValidationError::new("room type is required"));
        }

        if self.capacity == 0 {
            return Err(ValidationError::new("capacity must be greater than 0"));
        }

        Ok(())
    }
}

/// Partial update fields for a room.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoomUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub building_id: Option<BuildingId>,
    pub capacity: Option<u32>,
}

impl RoomUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::new("name cannot be empty"));
            }
        }

        if let Some(room_type) = &self.room_type {
            if room_type.trim().is_empty() {
                return Err(ValidationError::new("type cannot be empty"));
            }
        }

        if self.capacity == Some(0) {
            return Err(ValidationError::new("capacity must be greater than 0"));
        }

        Ok(())
    }
}

/// A room capability label. The vocabulary is free-form; rooms and
/// demands simply match on the name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoomType {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl RoomType {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("room type name is required"));
        }

        Ok(())
    }
}

/// Partial update fields for a room type.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoomTypeUpdate {
    pub description: Option<String>,
}
