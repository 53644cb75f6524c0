use serde::{Deserialize, Serialize};

use super::{BuildingId, ValidationError};

/// A campus building that rooms belong to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Building {
    #[serde(default)]
    pub id: BuildingId,
    pub name: String,
}

impl Building {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("building name is required"));
        }

        Ok(())
    }
}

/// Partial update fields for a building.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuildingUpdate {
    pub name: Option<String>,
}

impl BuildingUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::new("name cannot be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn blank_name_is_rejected() {
        let building = Building {
            id: Uuid::new_v4(),
            name: "  ".to_string(),
        };
        assert!(building.validate().is_err());
    }

    #[test]
    fn named_building_passes() {
        let building = Building {
            id: Uuid::new_v4(),
            name: "Science Block".to_string(),
        };
        assert!(building.validate().is_ok());
    }
}
