use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};

use crate::domain::{
    authentication::{
        entities::{AuthToken, JwtClaim},
        ports::AuthService,
        value_objects::{AuthenticateInput, Identity},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::ports::{
        CourseRepository, MenuItemRepository, MenuRepository, QuantityReferenceRepository,
    },
    party_order::ports::{LlmClient, PartyOrderRepository, PredictionResultRepository},
    user::ports::UserRepository,
};

impl<U, H, M, C, I, Q, PO, PR, L, HC> AuthService for Service<U, H, M, C, I, Q, PO, PR, L, HC>
where
    U: UserRepository,
    H: HasherRepository,
    M: MenuRepository,
    C: CourseRepository,
    I: MenuItemRepository,
    Q: QuantityReferenceRepository,
    PO: PartyOrderRepository,
    PR: PredictionResultRepository,
    L: LlmClient,
    HC: HealthCheckRepository,
{
    async fn authenticate(&self, input: AuthenticateInput) -> Result<AuthToken, CoreError> {
        let user = self
            .user_repository
            .get_by_username(input.username)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !user.enabled {
            return Err(CoreError::InvalidCredentials);
        }

        let valid = self
            .hasher
            .verify_password(&input.password, &user.password_hash)
            .await?;

        if !valid {
            return Err(CoreError::InvalidCredentials);
        }

        let now = Utc::now();
        let claims = JwtClaim {
            sub: user.id,
            preferred_username: user.username.clone(),
            is_staff: user.is_staff,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.auth.token_ttl_secs)).timestamp(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(AuthToken { token })
    }

    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let data = jsonwebtoken::decode::<JwtClaim>(
            &token,
            &DecodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => CoreError::InvalidToken,
        })?;

        let user = self
            .user_repository
            .get_by_id(data.claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if !user.enabled {
            return Err(CoreError::InvalidToken);
        }

        Ok(Identity::User(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{AuthConfig, services::ServiceConfig},
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        menu::ports::{
            MockCourseRepository, MockMenuItemRepository, MockMenuRepository,
            MockQuantityReferenceRepository,
        },
        party_order::ports::{
            MockLlmClient, MockPartyOrderRepository, MockPredictionResultRepository,
        },
        user::{
            entities::{User, UserConfig},
            ports::MockUserRepository,
        },
    };

    type TestConfig = ServiceConfig<
        MockUserRepository,
        MockHasherRepository,
        MockMenuRepository,
        MockCourseRepository,
        MockMenuItemRepository,
        MockQuantityReferenceRepository,
        MockPartyOrderRepository,
        MockPredictionResultRepository,
        MockLlmClient,
        MockHealthCheckRepository,
    >;

    fn test_config(token_ttl_secs: i64) -> TestConfig {
        ServiceConfig {
            user_repository: MockUserRepository::new(),
            hasher: MockHasherRepository::new(),
            menu_repository: MockMenuRepository::new(),
            course_repository: MockCourseRepository::new(),
            menu_item_repository: MockMenuItemRepository::new(),
            quantity_reference_repository: MockQuantityReferenceRepository::new(),
            party_order_repository: MockPartyOrderRepository::new(),
            prediction_repository: MockPredictionResultRepository::new(),
            llm_client: MockLlmClient::new(),
            health_check_repository: MockHealthCheckRepository::new(),
            auth: AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_secs,
            },
        }
    }

    fn caterer() -> User {
        User::new(UserConfig {
            username: "caterer".to_string(),
            email: "caterer@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            is_staff: false,
        })
    }

    fn wire_login(config: &mut TestConfig, user: &User, password_ok: bool) {
        let by_username = user.clone();
        config
            .user_repository
            .expect_get_by_username()
            .returning(move |_| {
                let by_username = by_username.clone();
                Box::pin(async move { Ok(Some(by_username)) })
            });
        config
            .hasher
            .expect_verify_password()
            .returning(move |_, _| Box::pin(async move { Ok(password_ok) }));
    }

    #[tokio::test]
    async fn issued_token_authorizes_round_trip() {
        let user = caterer();
        let mut config = test_config(3600);
        wire_login(&mut config, &user, true);

        let by_id = user.clone();
        config
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let by_id = by_id.clone();
                Box::pin(async move { Ok(Some(by_id)) })
            });

        let service = Service::new(config);
        let auth_token = service
            .authenticate(AuthenticateInput {
                username: user.username.clone(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let identity = service.authorize_request(auth_token.token).await.unwrap();
        assert_eq!(identity.id(), user.id);
        assert_eq!(identity.username(), "caterer");
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let user = caterer();
        // Past-dated expiry, beyond the default validation leeway.
        let mut config = test_config(-300);
        wire_login(&mut config, &user, true);

        let service = Service::new(config);
        let auth_token = service
            .authenticate(AuthenticateInput {
                username: user.username.clone(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let result = service.authorize_request(auth_token.token).await;
        assert_eq!(result, Err(CoreError::TokenExpired));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let service = Service::new(test_config(3600));

        let result = service
            .authorize_request("not-a-token".to_string())
            .await;
        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let user = caterer();
        let mut config = test_config(3600);
        wire_login(&mut config, &user, false);

        let service = Service::new(config);
        let result = service
            .authenticate(AuthenticateInput {
                username: user.username.clone(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result.map(|_| ()), Err(CoreError::InvalidCredentials));
    }
}
