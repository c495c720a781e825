use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// A known (party size -> amount, unit) data point for one menu item.
/// Unique per (menu item, party size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuantityReference {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub party_size: i32,
    #[schema(value_type = String)]
    pub quantity_value: Decimal,
    pub unit: String,
}

impl QuantityReference {
    pub fn new(menu_item_id: Uuid, party_size: i32, quantity_value: Decimal, unit: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            menu_item_id,
            party_size,
            quantity_value,
            unit,
        }
    }

    pub fn update(
        &mut self,
        party_size: Option<i32>,
        quantity_value: Option<Decimal>,
        unit: Option<String>,
    ) {
        if let Some(party_size) = party_size {
            self.party_size = party_size;
        }
        if let Some(quantity_value) = quantity_value {
            self.quantity_value = quantity_value;
        }
        if let Some(unit) = unit {
            self.unit = unit;
        }
    }
}
