use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ChefcoPolicy},
    menu::ports::MenuPolicy,
};

impl MenuPolicy for ChefcoPolicy {
    /// Reads are open to any authenticated identity.
    async fn can_view_catalog(&self, _identity: &Identity) -> Result<bool, CoreError> {
        Ok(true)
    }

    /// Writes are restricted to staff accounts.
    async fn can_manage_catalog(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.is_staff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::{User, UserConfig};

    fn identity(is_staff: bool) -> Identity {
        Identity::User(User::new(UserConfig {
            username: "chef".to_string(),
            email: "chef@example.com".to_string(),
            password_hash: String::new(),
            is_staff,
        }))
    }

    #[tokio::test]
    async fn staff_can_manage_catalog() {
        let policy = ChefcoPolicy::new();
        assert!(policy.can_manage_catalog(&identity(true)).await.unwrap());
    }

    #[tokio::test]
    async fn non_staff_cannot_manage_catalog() {
        let policy = ChefcoPolicy::new();
        assert!(!policy.can_manage_catalog(&identity(false)).await.unwrap());
    }

    #[tokio::test]
    async fn any_identity_can_view_catalog() {
        let policy = ChefcoPolicy::new();
        assert!(policy.can_view_catalog(&identity(false)).await.unwrap());
    }
}
