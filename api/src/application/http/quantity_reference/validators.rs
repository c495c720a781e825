use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuantityReferenceValidator {
    pub menu_item_id: Uuid,

    #[validate(range(min = 1, message = "party size must be a positive integer"))]
    pub party_size: i32,

    #[schema(value_type = f64)]
    pub quantity_value: Decimal,

    #[validate(length(min = 1, max = 20, message = "unit must be 1 to 20 characters"))]
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantityReferenceValidator {
    #[serde(default)]
    #[validate(range(min = 1, message = "party size must be a positive integer"))]
    pub party_size: Option<i32>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub quantity_value: Option<Decimal>,

    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "unit must be 1 to 20 characters"))]
    pub unit: Option<String>,
}
