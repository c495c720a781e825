use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ChefcoPolicy},
    party_order::ports::PartyOrderPolicy,
};

impl PartyOrderPolicy for ChefcoPolicy {
    async fn can_access_order(
        &self,
        identity: &Identity,
        owner_id: Uuid,
    ) -> Result<bool, CoreError> {
        Ok(identity.is_staff() || identity.id() == owner_id)
    }

    async fn can_create_order(&self, _identity: &Identity) -> Result<bool, CoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::{User, UserConfig};

    fn identity(is_staff: bool) -> Identity {
        Identity::User(User::new(UserConfig {
            username: "someone".to_string(),
            email: "someone@example.com".to_string(),
            password_hash: String::new(),
            is_staff,
        }))
    }

    #[tokio::test]
    async fn owner_can_access_own_order() {
        let identity = identity(false);
        let owner_id = identity.id();
        let policy = ChefcoPolicy::new();

        assert!(policy.can_access_order(&identity, owner_id).await.unwrap());
    }

    #[tokio::test]
    async fn non_owner_requires_staff() {
        let policy = ChefcoPolicy::new();
        let other = Uuid::new_v4();

        assert!(!policy.can_access_order(&identity(false), other).await.unwrap());
        assert!(policy.can_access_order(&identity(true), other).await.unwrap());
    }
}
