use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePartyOrderValidator {
    pub menu_id: Uuid,

    #[validate(range(min = 1, message = "party size must be a positive integer"))]
    pub party_size: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePartyOrderValidator {
    #[serde(default)]
    pub menu_id: Option<Uuid>,

    #[serde(default)]
    #[validate(range(min = 1, message = "party size must be a positive integer"))]
    pub party_size: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenamePredictionValidator {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_party_size() {
        let payload = CreatePartyOrderValidator {
            menu_id: Uuid::new_v4(),
            party_size: 0,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn accepts_partial_update() {
        let payload = UpdatePartyOrderValidator {
            menu_id: None,
            party_size: Some(120),
        };
        assert!(payload.validate().is_ok());
    }
}
