use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMenuValidator {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMenuValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_menu_name() {
        let validator = CreateMenuValidator {
            name: String::new(),
            description: "dinner".to_string(),
        };
        assert!(validator.validate().is_err());
    }

    #[test]
    fn accepts_partial_update() {
        let validator = UpdateMenuValidator {
            name: None,
            description: Some("updated".to_string()),
        };
        assert!(validator.validate().is_ok());
    }
}
