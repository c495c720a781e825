use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// A food item within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
}

impl MenuItem {
    pub fn new(course_id: Uuid, name: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            course_id,
            name,
        }
    }

    pub fn update(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
    }
}
