use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::{
        entities::{Course, Menu, MenuItem, QuantityReference},
        ports::{
            CourseRepository, MenuItemRepository, MenuPolicy, MenuRepository, MenuService,
            QuantityReferenceRepository,
        },
        value_objects::{
            CourseWithItems, CreateCourseInput, CreateMenuInput, CreateMenuItemInput,
            CreateQuantityReferenceInput, MenuDetails, MenuItemWithReferences, UpdateCourseInput,
            UpdateMenuInput, UpdateMenuItemInput, UpdateQuantityReferenceInput,
        },
    },
    party_order::ports::{LlmClient, PartyOrderRepository, PredictionResultRepository},
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
    pub(crate) async fn build_item_details(
        &self,
        item: MenuItem,
    ) -> Result<MenuItemWithReferences, CoreError> {
        let references = self.quantity_reference_repository.get_by_item(item.id).await?;
        Ok(MenuItemWithReferences::new(item, references))
    }

    pub(crate) async fn build_course_details(
        &self,
        course: Course,
    ) -> Result<CourseWithItems, CoreError> {
        let items = self.menu_item_repository.get_by_course(course.id).await?;

        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(self.build_item_details(item).await?);
        }

        Ok(CourseWithItems::new(course, details))
    }

    pub(crate) async fn build_menu_details(&self, menu: Menu) -> Result<MenuDetails, CoreError> {
        let creator = self
            .user_repository
            .get_by_id(menu.created_by)
            .await?
            .ok_or(CoreError::InternalServerError)?;

        let courses = self.course_repository.get_by_menu(menu.id).await?;

        let mut details = Vec::with_capacity(courses.len());
        for course in courses {
            details.push(self.build_course_details(course).await?);
        }

        Ok(MenuDetails::new(menu, UserSummary::from(creator), details))
    }
}

impl<U, H, M, C, I, Q, PO, PR, L, HC> MenuService for Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    async fn create_menu(
        &self,
        identity: Identity,
        input: CreateMenuInput,
    ) -> Result<Menu, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menus",
        )?;

        let menu = Menu::new(input.name, input.description, identity.id());
        self.menu_repository.create_menu(menu).await
    }

    async fn get_menus(&self, identity: Identity) -> Result<Vec<MenuDetails>, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view menus",
        )?;

        let menus = self.menu_repository.get_all().await?;

        let mut details = Vec::with_capacity(menus.len());
        for menu in menus {
            details.push(self.build_menu_details(menu).await?);
        }

        Ok(details)
    }

    async fn get_menu(&self, identity: Identity, menu_id: Uuid) -> Result<MenuDetails, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view menus",
        )?;

        let menu = self
            .menu_repository
            .get_by_id(menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.build_menu_details(menu).await
    }

    async fn update_menu(
        &self,
        identity: Identity,
        input: UpdateMenuInput,
    ) -> Result<Menu, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menus",
        )?;

        let mut menu = self
            .menu_repository
            .get_by_id(input.menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        menu.update(input.name, input.description);
        self.menu_repository.update_menu(menu).await
    }

    async fn delete_menu(&self, identity: Identity, menu_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menus",
        )?;

        self.menu_repository
            .get_by_id(menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.menu_repository.delete_menu(menu_id).await
    }

    async fn create_course(
        &self,
        identity: Identity,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage courses",
        )?;

        self.menu_repository
            .get_by_id(input.menu_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let course = Course::new(input.menu_id, input.name, input.order);
        self.course_repository.create_course(course).await
    }

    async fn get_courses(&self, identity: Identity) -> Result<Vec<CourseWithItems>, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view courses",
        )?;

        let courses = self.course_repository.get_all().await?;

        let mut details = Vec::with_capacity(courses.len());
        for course in courses {
            details.push(self.build_course_details(course).await?);
        }

        Ok(details)
    }

    async fn get_course(
        &self,
        identity: Identity,
        course_id: Uuid,
    ) -> Result<CourseWithItems, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view courses",
        )?;

        let course = self
            .course_repository
            .get_by_id(course_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.build_course_details(course).await
    }

    async fn update_course(
        &self,
        identity: Identity,
        input: UpdateCourseInput,
    ) -> Result<Course, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage courses",
        )?;

        let mut course = self
            .course_repository
            .get_by_id(input.course_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        course.update(input.name, input.order);
        self.course_repository.update_course(course).await
    }

    async fn delete_course(&self, identity: Identity, course_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage courses",
        )?;

        self.course_repository
            .get_by_id(course_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.course_repository.delete_course(course_id).await
    }

    async fn create_menu_item(
        &self,
        identity: Identity,
        input: CreateMenuItemInput,
    ) -> Result<MenuItem, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menu items",
        )?;

        self.course_repository
            .get_by_id(input.course_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let item = MenuItem::new(input.course_id, input.name);
        self.menu_item_repository.create_item(item).await
    }

    async fn get_menu_items(
        &self,
        identity: Identity,
    ) -> Result<Vec<MenuItemWithReferences>, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view menu items",
        )?;

        let items = self.menu_item_repository.get_all().await?;

        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(self.build_item_details(item).await?);
        }

        Ok(details)
    }

    async fn get_menu_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> Result<MenuItemWithReferences, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view menu items",
        )?;

        let item = self
            .menu_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.build_item_details(item).await
    }

    async fn update_menu_item(
        &self,
        identity: Identity,
        input: UpdateMenuItemInput,
    ) -> Result<MenuItem, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menu items",
        )?;

        let mut item = self
            .menu_item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        item.update(input.name);
        self.menu_item_repository.update_item(item).await
    }

    async fn delete_menu_item(&self, identity: Identity, item_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage menu items",
        )?;

        self.menu_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.menu_item_repository.delete_item(item_id).await
    }

    async fn create_quantity_reference(
        &self,
        identity: Identity,
        input: CreateQuantityReferenceInput,
    ) -> Result<QuantityReference, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage quantity references",
        )?;

        self.menu_item_repository
            .get_by_id(input.menu_item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // (menu item, party size) is unique: replace an existing row
        // instead of inserting a duplicate.
        if let Some(mut existing) = self
            .quantity_reference_repository
            .get_by_item_and_party_size(input.menu_item_id, input.party_size)
            .await?
        {
            existing.update(None, Some(input.quantity_value), Some(input.unit));
            return self.quantity_reference_repository.update_reference(existing).await;
        }

        let reference = QuantityReference::new(
            input.menu_item_id,
            input.party_size,
            input.quantity_value,
            input.unit,
        );
        self.quantity_reference_repository.create_reference(reference).await
    }

    async fn get_quantity_references(
        &self,
        identity: Identity,
    ) -> Result<Vec<QuantityReference>, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view quantity references",
        )?;

        self.quantity_reference_repository.get_all().await
    }

    async fn get_quantity_reference(
        &self,
        identity: Identity,
        reference_id: Uuid,
    ) -> Result<QuantityReference, CoreError> {
        ensure_policy(
            self.policy.can_view_catalog(&identity).await,
            "insufficient permissions to view quantity references",
        )?;

        self.quantity_reference_repository
            .get_by_id(reference_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_quantity_reference(
        &self,
        identity: Identity,
        input: UpdateQuantityReferenceInput,
    ) -> Result<QuantityReference, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage quantity references",
        )?;

        let mut reference = self
            .quantity_reference_repository
            .get_by_id(input.reference_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        reference.update(input.party_size, input.quantity_value, input.unit);
        self.quantity_reference_repository.update_reference(reference).await
    }

    async fn delete_quantity_reference(
        &self,
        identity: Identity,
        reference_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to manage quantity references",
        )?;

        self.quantity_reference_repository
            .get_by_id(reference_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.quantity_reference_repository.delete_reference(reference_id).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

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

    #[tokio::test]
    async fn non_staff_cannot_create_menu() {
        let service = Service::new(test_config());

        let result = service
            .create_menu(
                Identity::User(user(false)),
                CreateMenuInput {
                    name: "Basic Menu 1".to_string(),
                    description: String::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn create_menu_sets_creator_from_identity() {
        let staff = user(true);
        let staff_id = staff.id;

        let mut config = test_config();
        config
            .menu_repository
            .expect_create_menu()
            .withf(move |menu| menu.created_by == staff_id)
            .returning(|menu| Box::pin(async move { Ok(menu) }));

        let service = Service::new(config);
        let menu = service
            .create_menu(
                Identity::User(staff),
                CreateMenuInput {
                    name: "Basic Menu 1".to_string(),
                    description: "Standard banquet menu".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(menu.created_by, staff_id);
        assert_eq!(menu.name, "Basic Menu 1");
    }

    #[tokio::test]
    async fn get_menu_returns_nested_details() {
        let creator = user(true);
        let menu = Menu::new(
            "Basic Menu 1".to_string(),
            "Standard banquet menu".to_string(),
            creator.id,
        );
        let course = Course::new(menu.id, "APPETIZERS".to_string(), 1);
        let item = MenuItem::new(course.id, "PANEER TIKKA".to_string());
        let reference = QuantityReference::new(item.id, 50, Decimal::from(2), "KG".to_string());

        let mut config = test_config();
        let menu_clone = menu.clone();
        config
            .menu_repository
            .expect_get_by_id()
            .returning(move |_| {
                let menu_clone = menu_clone.clone();
                Box::pin(async move { Ok(Some(menu_clone)) })
            });
        let creator_clone = creator.clone();
        config
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let creator_clone = creator_clone.clone();
                Box::pin(async move { Ok(Some(creator_clone)) })
            });
        let course_clone = course.clone();
        config
            .course_repository
            .expect_get_by_menu()
            .returning(move |_| {
                let course_clone = course_clone.clone();
                Box::pin(async move { Ok(vec![course_clone]) })
            });
        let item_clone = item.clone();
        config
            .menu_item_repository
            .expect_get_by_course()
            .returning(move |_| {
                let item_clone = item_clone.clone();
                Box::pin(async move { Ok(vec![item_clone]) })
            });
        let reference_clone = reference.clone();
        config
            .quantity_reference_repository
            .expect_get_by_item()
            .returning(move |_| {
                let reference_clone = reference_clone.clone();
                Box::pin(async move { Ok(vec![reference_clone]) })
            });

        let service = Service::new(config);
        let details = service
            .get_menu(Identity::User(user(false)), menu.id)
            .await
            .unwrap();

        assert_eq!(details.created_by.username, creator.username);
        assert_eq!(details.courses.len(), 1);
        assert_eq!(details.courses[0].menu_items.len(), 1);
        assert_eq!(
            details.courses[0].menu_items[0].quantity_references,
            vec![reference]
        );
    }

    #[tokio::test]
    async fn create_quantity_reference_replaces_existing_row() {
        let item = MenuItem::new(Uuid::new_v4(), "PANEER TIKKA".to_string());
        let existing = QuantityReference::new(item.id, 50, Decimal::from(2), "KG".to_string());

        let mut config = test_config();
        let item_clone = item.clone();
        config
            .menu_item_repository
            .expect_get_by_id()
            .returning(move |_| {
                let item_clone = item_clone.clone();
                Box::pin(async move { Ok(Some(item_clone)) })
            });
        let existing_clone = existing.clone();
        config
            .quantity_reference_repository
            .expect_get_by_item_and_party_size()
            .returning(move |_, _| {
                let existing_clone = existing_clone.clone();
                Box::pin(async move { Ok(Some(existing_clone)) })
            });
        config
            .quantity_reference_repository
            .expect_create_reference()
            .times(0);
        config
            .quantity_reference_repository
            .expect_update_reference()
            .withf(move |reference| {
                reference.id == existing.id && reference.quantity_value == Decimal::from(3)
            })
            .returning(|reference| Box::pin(async move { Ok(reference) }));

        let service = Service::new(config);
        let updated = service
            .create_quantity_reference(
                Identity::User(user(true)),
                CreateQuantityReferenceInput {
                    menu_item_id: item.id,
                    party_size: 50,
                    quantity_value: Decimal::from(3),
                    unit: "KG".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.quantity_value, Decimal::from(3));
    }
}
