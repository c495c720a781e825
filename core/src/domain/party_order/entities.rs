use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// An order for a party of a given size, placed against one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyOrder {
    pub id: Uuid,
    pub user_id: Uuid,
    pub menu_id: Uuid,
    pub party_size: i32,
    pub created_at: DateTime<Utc>,
}

impl PartyOrder {
    pub fn new(user_id: Uuid, menu_id: Uuid, party_size: i32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            menu_id,
            party_size,
            created_at: now,
        }
    }

    pub fn update(&mut self, menu_id: Option<Uuid>, party_size: Option<i32>) {
        if let Some(menu_id) = menu_id {
            self.menu_id = menu_id;
        }
        if let Some(party_size) = party_size {
            self.party_size = party_size;
        }
    }
}

/// A stored model response for one prediction run. `result_data` is the
/// model's JSON payload, persisted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub id: Uuid,
    pub party_order_id: Uuid,
    pub name: String,
    #[schema(value_type = Object)]
    pub result_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl PredictionResult {
    /// Builds a result, falling back to a generated name when the
    /// caller gave none, a blank one, or the literal placeholder
    /// `"string"`.
    pub fn new(
        party_order_id: Uuid,
        result_data: serde_json::Value,
        name: Option<String>,
        fallback_name: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        let name = match name {
            Some(name) if !name.trim().is_empty() && name.trim() != "string" => name,
            _ => fallback_name,
        };

        Self {
            id: Uuid::new_v7(timestamp),
            party_order_id,
            name,
            result_data,
            created_at: now,
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn keeps_explicit_prediction_name() {
        let result = PredictionResult::new(
            Uuid::new_v4(),
            json!({"predictions": []}),
            Some("Wedding reception".to_string()),
            "Basic Menu 1 for 75 people".to_string(),
        );
        assert_eq!(result.name, "Wedding reception");
    }

    #[test]
    fn falls_back_when_name_is_missing_blank_or_placeholder() {
        let fallback = "Basic Menu 1 for 75 people".to_string();
        for name in [None, Some("".to_string()), Some("  ".to_string()), Some("string".to_string())] {
            let result = PredictionResult::new(
                Uuid::new_v4(),
                json!({"predictions": []}),
                name,
                fallback.clone(),
            );
            assert_eq!(result.name, fallback);
        }
    }
}
