use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::ports::{
        CourseRepository, MenuItemRepository, MenuRepository, QuantityReferenceRepository,
    },
    party_order::{
        entities::{PartyOrder, PredictionResult},
        helpers::{SYSTEM_PROMPT, build_prediction_prompt, build_reference_data},
        ports::{
            LlmClient, PartyOrderPolicy, PartyOrderRepository, PartyOrderService,
            PredictionResultRepository,
        },
        value_objects::{
            CreatePartyOrderInput, PartyOrderDetails, PredictQuantitiesInput,
            RenamePredictionInput, UpdatePartyOrderInput,
        },
    },
    user::{ports::UserRepository, value_objects::UserSummary},
};

impl<U, H, M, C, I, Q, PO, PR, L, HC> Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    async fn build_order_details(
        &self,
        order: PartyOrder,
    ) -> Result<PartyOrderDetails, CoreError> {
        let owner = self
            .user_repository
            .get_by_id(order.user_id)
            .await?
            .ok_or(CoreError::InternalServerError)?;

        let menu = self
            .menu_repository
            .get_by_id(order.menu_id)
            .await?
            .ok_or(CoreError::InternalServerError)?;
        let menu = self.build_menu_details(menu).await?;

        Ok(PartyOrderDetails::new(order, UserSummary::from(owner), menu))
    }

    async fn load_accessible_order(
        &self,
        identity: &Identity,
        order_id: Uuid,
    ) -> Result<PartyOrder, CoreError> {
        let order = self
            .party_order_repository
            .get_by_id(order_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_access_order(identity, order.user_id).await,
            "insufficient permissions to access this order",
        )?;

        Ok(order)
    }
}

impl<U, H, M, C, I, Q, PO, PR, L, HC> PartyOrderService for Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    async fn create_party_order(
        &self,
        identity: Identity,
        input: CreatePartyOrderInput,
    ) -> Result<PartyOrder, CoreError> {
        ensure_policy(
            self.policy.can_create_order(&identity).await,
            "insufficient permissions to create orders",
        )?;

        if input.party_size <= 0 {
            return Err(CoreError::Invalid(
                "party size must be a positive integer".to_string(),
            ));
        }

        self.menu_repository
            .get_by_id(input.menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let order = PartyOrder::new(identity.id(), input.menu_id, input.party_size);
        self.party_order_repository.create_order(order).await
    }

    async fn get_party_orders(
        &self,
        identity: Identity,
    ) -> Result<Vec<PartyOrderDetails>, CoreError> {
        let orders = if identity.is_staff() {
            self.party_order_repository.get_all().await?
        } else {
            self.party_order_repository.get_by_user(identity.id()).await?
        };

        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            details.push(self.build_order_details(order).await?);
        }

        Ok(details)
    }

    async fn get_party_order(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> Result<PartyOrderDetails, CoreError> {
        let order = self.load_accessible_order(&identity, order_id).await?;
        self.build_order_details(order).await
    }

    async fn update_party_order(
        &self,
        identity: Identity,
        input: UpdatePartyOrderInput,
    ) -> Result<PartyOrder, CoreError> {
        let mut order = self.load_accessible_order(&identity, input.order_id).await?;

        if let Some(party_size) = input.party_size
            && party_size <= 0
        {
            return Err(CoreError::Invalid(
                "party size must be a positive integer".to_string(),
            ));
        }
        if let Some(menu_id) = input.menu_id {
            self.menu_repository
                .get_by_id(menu_id)
                .await?
                .ok_or(CoreError::NotFound)?;
        }

        order.update(input.menu_id, input.party_size);
        self.party_order_repository.update_order(order).await
    }

    async fn delete_party_order(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> Result<(), CoreError> {
        self.load_accessible_order(&identity, order_id).await?;
        self.party_order_repository.delete_order(order_id).await
    }

    async fn predict_quantities(
        &self,
        identity: Identity,
        input: PredictQuantitiesInput,
    ) -> Result<PredictionResult, CoreError> {
        let order = self.load_accessible_order(&identity, input.order_id).await?;

        let menu = self
            .menu_repository
            .get_by_id(order.menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let menu = self.build_menu_details(menu).await?;

        let reference_data = build_reference_data(order.party_size, &menu);
        let prompt = build_prediction_prompt(order.party_size, &reference_data);

        let raw = self
            .llm_client
            .complete(SYSTEM_PROMPT.to_string(), prompt)
            .await?;

        // The model's payload is stored verbatim. The only gate is that
        // it parses as JSON.
        let result_data: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("model returned malformed JSON: {}", e);
            CoreError::ExternalServiceError("model returned malformed JSON".to_string())
        })?;

        let fallback_name = format!("{} for {} people", menu.name, order.party_size);
        let result = PredictionResult::new(order.id, result_data, input.name, fallback_name);
        self.prediction_repository.create_result(result).await
    }

    async fn get_predictions(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> Result<Vec<PredictionResult>, CoreError> {
        let order = self.load_accessible_order(&identity, order_id).await?;
        self.prediction_repository.get_by_order(order.id).await
    }

    async fn rename_prediction(
        &self,
        identity: Identity,
        input: RenamePredictionInput,
    ) -> Result<PredictionResult, CoreError> {
        let mut result = self
            .prediction_repository
            .get_by_id(input.prediction_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.load_accessible_order(&identity, result.party_order_id)
            .await?;

        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name must not be blank".to_string()));
        }

        result.rename(input.name);
        self.prediction_repository.update_result(result).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::{AuthConfig, services::ServiceConfig},
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        menu::{
            entities::{Course, Menu, MenuItem, QuantityReference},
            ports::{
                MockCourseRepository, MockMenuItemRepository, MockMenuRepository,
                MockQuantityReferenceRepository,
            },
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

    fn test_config() -> TestConfig {
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
                token_ttl_secs: 3600,
            },
        }
    }

    fn user(is_staff: bool) -> User {
        User::new(UserConfig {
            username: "caterer".to_string(),
            email: "caterer@example.com".to_string(),
            password_hash: String::new(),
            is_staff,
        })
    }

    struct Fixture {
        owner: User,
        menu: Menu,
        course: Course,
        item: MenuItem,
        references: Vec<QuantityReference>,
        order: PartyOrder,
    }

    fn fixture() -> Fixture {
        let owner = user(false);
        let menu = Menu::new(
            "Basic Menu 1".to_string(),
            "Standard banquet menu".to_string(),
            owner.id,
        );
        let course = Course::new(menu.id, "APPETIZERS".to_string(), 1);
        let item = MenuItem::new(course.id, "PANEER TIKKA".to_string());
        let references = vec![
            QuantityReference::new(item.id, 50, Decimal::from(2), "KG".to_string()),
            QuantityReference::new(item.id, 100, Decimal::from(4), "KG".to_string()),
        ];
        let order = PartyOrder::new(owner.id, menu.id, 75);

        Fixture {
            owner,
            menu,
            course,
            item,
            references,
            order,
        }
    }

    fn wire_menu_lookups(config: &mut TestConfig, fx: &Fixture) {
        let menu = fx.menu.clone();
        config
            .menu_repository
            .expect_get_by_id()
            .returning(move |_| {
                let menu = menu.clone();
                Box::pin(async move { Ok(Some(menu)) })
            });

        let owner = fx.owner.clone();
        config
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let owner = owner.clone();
                Box::pin(async move { Ok(Some(owner)) })
            });

        let course = fx.course.clone();
        config
            .course_repository
            .expect_get_by_menu()
            .returning(move |_| {
                let course = course.clone();
                Box::pin(async move { Ok(vec![course]) })
            });

        let item = fx.item.clone();
        config
            .menu_item_repository
            .expect_get_by_course()
            .returning(move |_| {
                let item = item.clone();
                Box::pin(async move { Ok(vec![item]) })
            });

        let references = fx.references.clone();
        config
            .quantity_reference_repository
            .expect_get_by_item()
            .returning(move |_| {
                let references = references.clone();
                Box::pin(async move { Ok(references) })
            });
    }

    #[tokio::test]
    async fn predict_quantities_persists_model_response() {
        let fx = fixture();
        let mut config = test_config();
        wire_menu_lookups(&mut config, &fx);

        let order = fx.order.clone();
        config
            .party_order_repository
            .expect_get_by_id()
            .returning(move |_| {
                let order = order.clone();
                Box::pin(async move { Ok(Some(order)) })
            });

        let payload = json!({
            "predictions": [{
                "course_name": "APPETIZERS",
                "items": [{"item_name": "PANEER TIKKA", "quantity_value": 3.0, "unit": "KG"}]
            }]
        });
        let raw = payload.to_string();
        config
            .llm_client
            .expect_complete()
            .withf(|system, prompt| {
                system.contains("calculator for food quantities")
                    && prompt.contains("party of 75 people")
            })
            .returning(move |_, _| {
                let raw = raw.clone();
                Box::pin(async move { Ok(raw) })
            });

        config
            .prediction_repository
            .expect_create_result()
            .times(1)
            .returning(|result| Box::pin(async move { Ok(result) }));

        let service = Service::new(config);
        let result = service
            .predict_quantities(
                Identity::User(fx.owner.clone()),
                PredictQuantitiesInput {
                    order_id: fx.order.id,
                    name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.party_order_id, fx.order.id);
        assert_eq!(result.result_data, payload);
        assert_eq!(result.name, "Basic Menu 1 for 75 people");
    }

    #[tokio::test]
    async fn predict_rejects_malformed_model_output() {
        let fx = fixture();
        let mut config = test_config();
        wire_menu_lookups(&mut config, &fx);

        let order = fx.order.clone();
        config
            .party_order_repository
            .expect_get_by_id()
            .returning(move |_| {
                let order = order.clone();
                Box::pin(async move { Ok(Some(order)) })
            });

        config
            .llm_client
            .expect_complete()
            .returning(|_, _| Box::pin(async move { Ok("not json at all".to_string()) }));
        config.prediction_repository.expect_create_result().times(0);

        let service = Service::new(config);
        let err = service
            .predict_quantities(
                Identity::User(fx.owner.clone()),
                PredictQuantitiesInput {
                    order_id: fx.order.id,
                    name: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn non_owner_cannot_predict() {
        let fx = fixture();
        let mut config = test_config();

        let order = fx.order.clone();
        config
            .party_order_repository
            .expect_get_by_id()
            .returning(move |_| {
                let order = order.clone();
                Box::pin(async move { Ok(Some(order)) })
            });
        config.llm_client.expect_complete().times(0);

        let service = Service::new(config);
        let err = service
            .predict_quantities(
                Identity::User(user(false)),
                PredictQuantitiesInput {
                    order_id: fx.order.id,
                    name: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner_for_regular_users() {
        let mut config = test_config();
        let caller = user(false);
        let caller_id = caller.id;

        config.party_order_repository.expect_get_all().times(0);
        config
            .party_order_repository
            .expect_get_by_user()
            .withf(move |user_id| *user_id == caller_id)
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Vec::new()) }));

        let service = Service::new(config);
        let orders = service
            .get_party_orders(Identity::User(caller))
            .await
            .unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn staff_listing_sees_all_orders() {
        let mut config = test_config();

        config.party_order_repository.expect_get_by_user().times(0);
        config
            .party_order_repository
            .expect_get_all()
            .times(1)
            .returning(|| Box::pin(async move { Ok(Vec::new()) }));

        let service = Service::new(config);
        let orders = service
            .get_party_orders(Identity::User(user(true)))
            .await
            .unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn rename_prediction_updates_the_stored_name() {
        let fx = fixture();
        let mut config = test_config();

        let result = PredictionResult::new(
            fx.order.id,
            json!({"predictions": []}),
            None,
            "Basic Menu 1 for 75 people".to_string(),
        );
        let stored = result.clone();
        config
            .prediction_repository
            .expect_get_by_id()
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let order = fx.order.clone();
        config
            .party_order_repository
            .expect_get_by_id()
            .returning(move |_| {
                let order = order.clone();
                Box::pin(async move { Ok(Some(order)) })
            });

        config
            .prediction_repository
            .expect_update_result()
            .times(1)
            .withf(|result| result.name == "Golden jubilee dinner")
            .returning(|result| Box::pin(async move { Ok(result) }));

        let service = Service::new(config);
        let renamed = service
            .rename_prediction(
                Identity::User(fx.owner.clone()),
                RenamePredictionInput {
                    prediction_id: result.id,
                    name: "Golden jubilee dinner".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(renamed.name, "Golden jubilee dinner");
    }

    #[tokio::test]
    async fn create_rejects_non_positive_party_size() {
        let mut config = test_config();
        config.party_order_repository.expect_create_order().times(0);

        let service = Service::new(config);
        let err = service
            .create_party_order(
                Identity::User(user(false)),
                CreatePartyOrderInput {
                    menu_id: Uuid::new_v4(),
                    party_size: 0,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
