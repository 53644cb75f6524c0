use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseId, ValidationError};

/// A course whose sessions need scheduling. Used as a grouping key by
/// the generator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(default)]
    pub id: CourseId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name is required"));
        }

        Ok(())
    }
}

/// Partial update fields for a course.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourseUpdate {
    pub name: Option<String>,
}

impl CourseUpdate {
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

    fn course(name: &str) -> Course {
        Course {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(course("").validate().is_err());
        assert!(course("  ").validate().is_err());
    }

    #[test]
    fn named_course_passes() {
        assert!(course("Math 101").validate().is_ok());
    }

    #[test]
    fn update_with_empty_name_is_rejected() {
        let update = CourseUpdate {
            name: Some(String::new()),
        };
        assert!(update.validate().is_err());
        assert!(CourseUpdate::default().validate().is_ok());
    }
}
