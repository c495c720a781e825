use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// A section of a menu (e.g. "APPETIZERS"). `order` is the explicit
/// display sequence, not insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub order: i32,
}

impl Course {
    pub fn new(menu_id: Uuid, name: String, order: i32) -> Self {
        Self {
            id: generate_uuid_v7(),
            menu_id,
            name,
            order,
        }
    }

    pub fn update(&mut self, name: Option<String>, order: Option<i32>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(order) = order {
            self.order = order;
        }
    }
}
