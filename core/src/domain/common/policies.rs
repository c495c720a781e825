use crate::domain::common::entities::app_errors::CoreError;

/// Policy decisions for the whole application. Individual domain policy
/// traits are implemented on this struct in their own modules.
#[derive(Debug, Clone, Default)]
pub struct ChefcoPolicy;

impl ChefcoPolicy {
    pub fn new() -> Self {
        Self
    }
}

pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_allows_on_true() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn ensure_policy_maps_false_to_forbidden() {
        let err = ensure_policy(Ok(false), "insufficient permissions").unwrap_err();
        assert_eq!(
            err,
            CoreError::Forbidden("insufficient permissions".to_string())
        );
    }

    #[test]
    fn ensure_policy_propagates_errors() {
        let err = ensure_policy(Err(CoreError::InternalServerError), "nope").unwrap_err();
        assert_eq!(err, CoreError::InternalServerError);
    }
}
