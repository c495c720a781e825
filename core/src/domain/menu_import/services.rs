use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::{
        entities::{Course, Menu, MenuItem, QuantityReference},
        ports::{
            CourseRepository, MenuItemRepository, MenuPolicy, MenuRepository,
            QuantityReferenceRepository,
        },
    },
    menu_import::{
        entities::{CourseHandling, ImportReport, ImportSheetInput, ImportTarget},
        parser::{ColumnMap, course_header, is_empty_row, parse_quantity_cell, read_rows},
        ports::MenuImportService,
    },
    party_order::ports::{LlmClient, PartyOrderRepository, PredictionResultRepository},
    user::ports::UserRepository,
};

impl<U, H, M, C, I, Q, PO, PR, L, HC> MenuImportService for Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    async fn import_quantity_sheet(
        &self,
        identity: Identity,
        input: ImportSheetInput,
    ) -> Result<ImportReport, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity).await,
            "insufficient permissions to import quantity sheets",
        )?;

        let menu = match input.target {
            ImportTarget::MenuId(menu_id) => self
                .menu_repository
                .get_by_id(menu_id)
                .await?
                .ok_or(CoreError::NotFound)?,
            ImportTarget::MenuName(name) => {
                match self.menu_repository.get_by_name(name.clone()).await? {
                    Some(menu) => menu,
                    None => {
                        let menu =
                            Menu::new(name, "Standard banquet menu".to_string(), identity.id());
                        self.menu_repository.create_menu(menu).await?
                    }
                }
            }
        };

        let rows = read_rows(&input.data)?;
        if rows.is_empty() {
            return Err(CoreError::Invalid("empty sheet".to_string()));
        }

        // Column mapping comes from a PAX header row when present,
        // otherwise from the fixed banquet-sheet convention.
        let header_map = ColumnMap::from_header(&rows[0]);
        let (columns, data_rows) = if header_map.is_empty() {
            (ColumnMap::fixed(), &rows[..])
        } else {
            (header_map, &rows[1..])
        };

        let mut course_order = match input.course_handling {
            CourseHandling::CreateMissing => {
                self.course_repository.get_by_menu(menu.id).await?.len() as i32
            }
            CourseHandling::RequireExisting => 0,
        };

        let mut report = ImportReport::default();
        let mut current_course: Option<Course> = None;

        for row in data_rows {
            if is_empty_row(row) {
                continue;
            }

            if let Some(course_name) = course_header(row) {
                current_course = match self
                    .course_repository
                    .get_by_menu_and_name(menu.id, course_name.clone())
                    .await?
                {
                    Some(course) => Some(course),
                    None => match input.course_handling {
                        CourseHandling::CreateMissing => {
                            course_order += 1;
                            let course = Course::new(menu.id, course_name, course_order);
                            Some(self.course_repository.create_course(course).await?)
                        }
                        CourseHandling::RequireExisting => {
                            report.errors += 1;
                            report.messages.push(format!(
                                "Course '{}' not found for menu '{}'",
                                course_name, menu.name
                            ));
                            None
                        }
                    },
                };
                continue;
            }

            let Some(item_name) = row.first().map(|cell| cell.trim().to_string()) else {
                continue;
            };
            if item_name.is_empty() || item_name.eq_ignore_ascii_case("MENU") {
                continue;
            }

            // Item rows before the first recognized course header (or
            // after a missing one) cannot be placed.
            let Some(course) = current_course.as_ref() else {
                continue;
            };

            let item = match self
                .menu_item_repository
                .get_by_course_and_name(course.id, item_name.clone())
                .await?
            {
                Some(item) => item,
                None => {
                    let item = MenuItem::new(course.id, item_name);
                    self.menu_item_repository.create_item(item).await?
                }
            };

            for &(party_size, index) in &columns.columns {
                let Some(cell) = row.get(index) else {
                    continue;
                };
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }

                match parse_quantity_cell(cell) {
                    Some(parsed) => {
                        match self
                            .quantity_reference_repository
                            .get_by_item_and_party_size(item.id, party_size)
                            .await?
                        {
                            Some(mut existing) => {
                                existing.update(None, Some(parsed.value), Some(parsed.unit));
                                self.quantity_reference_repository
                                    .update_reference(existing)
                                    .await?;
                            }
                            None => {
                                let reference = QuantityReference::new(
                                    item.id,
                                    party_size,
                                    parsed.value,
                                    parsed.unit,
                                );
                                self.quantity_reference_repository
                                    .create_reference(reference)
                                    .await?;
                            }
                        }
                        report.imported += 1;
                    }
                    None => report.errors += 1,
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

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

    type TestService = Service<
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

    fn service_with(
        menu_repository: MockMenuRepository,
        course_repository: MockCourseRepository,
        menu_item_repository: MockMenuItemRepository,
        quantity_reference_repository: MockQuantityReferenceRepository,
    ) -> TestService {
        Service::new(ServiceConfig {
            user_repository: MockUserRepository::new(),
            hasher: MockHasherRepository::new(),
            menu_repository,
            course_repository,
            menu_item_repository,
            quantity_reference_repository,
            party_order_repository: MockPartyOrderRepository::new(),
            prediction_repository: MockPredictionResultRepository::new(),
            llm_client: MockLlmClient::new(),
            health_check_repository: MockHealthCheckRepository::new(),
            auth: AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_secs: 3600,
            },
        })
    }

    fn identity(is_staff: bool) -> Identity {
        Identity::User(User::new(UserConfig {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            is_staff,
        }))
    }

    fn menu() -> Menu {
        Menu::new(
            "Basic Menu 1".to_string(),
            "Standard banquet menu".to_string(),
            Uuid::new_v4(),
        )
    }

    #[tokio::test]
    async fn import_creates_items_and_references() {
        let sheet = b"MENU,50 PAX,,100 PAX\nAPPETIZERS,,,\nPANEER TIKKA,4KG,,8KG\n".to_vec();

        let target = menu();
        let menu_id = target.id;
        let course = Course::new(menu_id, "APPETIZERS".to_string(), 1);
        let course_id = course.id;
        let item = MenuItem::new(course_id, "PANEER TIKKA".to_string());
        let item_id = item.id;

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_get_by_id()
            .returning(move |_| {
                let target = target.clone();
                Box::pin(async move { Ok(Some(target)) })
            });

        let mut course_repo = MockCourseRepository::new();
        course_repo.expect_get_by_menu().returning(|_| Box::pin(async move { Ok(Vec::new()) }));
        course_repo
            .expect_get_by_menu_and_name()
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        course_repo
            .expect_create_course()
            .times(1)
            .returning(|course| Box::pin(async move { Ok(course) }));

        let mut item_repo = MockMenuItemRepository::new();
        item_repo
            .expect_get_by_course_and_name()
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        item_repo
            .expect_create_item()
            .times(1)
            .returning(|item| Box::pin(async move { Ok(item) }));

        let mut reference_repo = MockQuantityReferenceRepository::new();
        reference_repo
            .expect_get_by_item_and_party_size()
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        reference_repo
            .expect_create_reference()
            .times(2)
            .returning(|reference| Box::pin(async move { Ok(reference) }));

        let service = service_with(menu_repo, course_repo, item_repo, reference_repo);
        let report = service
            .import_quantity_sheet(
                identity(true),
                ImportSheetInput {
                    target: ImportTarget::MenuId(menu_id),
                    data: sheet,
                    course_handling: CourseHandling::CreateMissing,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.errors, 0);
        let _ = item_id;
    }

    #[tokio::test]
    async fn reimport_updates_instead_of_inserting() {
        let sheet = b"MENU,50 PAX\nAPPETIZERS,\nPANEER TIKKA,6KG\n".to_vec();

        let target = menu();
        let menu_id = target.id;
        let course = Course::new(menu_id, "APPETIZERS".to_string(), 1);
        let item = MenuItem::new(course.id, "PANEER TIKKA".to_string());
        let existing = QuantityReference::new(item.id, 50, Decimal::from(4), "KG".to_string());

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_get_by_id()
            .returning(move |_| {
                let target = target.clone();
                Box::pin(async move { Ok(Some(target)) })
            });

        let mut course_repo = MockCourseRepository::new();
        let found_course = course.clone();
        course_repo
            .expect_get_by_menu_and_name()
            .returning(move |_, _| {
                let found_course = found_course.clone();
                Box::pin(async move { Ok(Some(found_course)) })
            });

        let mut item_repo = MockMenuItemRepository::new();
        let found_item = item.clone();
        item_repo
            .expect_get_by_course_and_name()
            .returning(move |_, _| {
                let found_item = found_item.clone();
                Box::pin(async move { Ok(Some(found_item)) })
            });

        let mut reference_repo = MockQuantityReferenceRepository::new();
        let found_reference = existing.clone();
        reference_repo
            .expect_get_by_item_and_party_size()
            .returning(move |_, _| {
                let found_reference = found_reference.clone();
                Box::pin(async move { Ok(Some(found_reference)) })
            });
        reference_repo.expect_create_reference().times(0);
        reference_repo
            .expect_update_reference()
            .times(1)
            .withf(|reference| {
                reference.quantity_value == Decimal::from(6) && reference.unit == "KG"
            })
            .returning(|reference| Box::pin(async move { Ok(reference) }));

        let service = service_with(menu_repo, course_repo, item_repo, reference_repo);
        let report = service
            .import_quantity_sheet(
                identity(true),
                ImportSheetInput {
                    target: ImportTarget::MenuId(menu_id),
                    data: sheet,
                    course_handling: CourseHandling::RequireExisting,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.errors, 0);
    }

    #[tokio::test]
    async fn unparseable_cells_are_counted_and_skipped() {
        let sheet = b"MENU,50 PAX\nAPPETIZERS,\nPANEER TIKKA,abc\n".to_vec();

        let target = menu();
        let menu_id = target.id;
        let course = Course::new(menu_id, "APPETIZERS".to_string(), 1);
        let item = MenuItem::new(course.id, "PANEER TIKKA".to_string());

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_get_by_id()
            .returning(move |_| {
                let target = target.clone();
                Box::pin(async move { Ok(Some(target)) })
            });

        let mut course_repo = MockCourseRepository::new();
        let found_course = course.clone();
        course_repo
            .expect_get_by_menu_and_name()
            .returning(move |_, _| {
                let found_course = found_course.clone();
                Box::pin(async move { Ok(Some(found_course)) })
            });

        let mut item_repo = MockMenuItemRepository::new();
        let found_item = item.clone();
        item_repo
            .expect_get_by_course_and_name()
            .returning(move |_, _| {
                let found_item = found_item.clone();
                Box::pin(async move { Ok(Some(found_item)) })
            });

        let mut reference_repo = MockQuantityReferenceRepository::new();
        reference_repo.expect_create_reference().times(0);
        reference_repo.expect_update_reference().times(0);

        let service = service_with(menu_repo, course_repo, item_repo, reference_repo);
        let report = service
            .import_quantity_sheet(
                identity(true),
                ImportSheetInput {
                    target: ImportTarget::MenuId(menu_id),
                    data: sheet,
                    course_handling: CourseHandling::RequireExisting,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 0);
        assert_eq!(report.errors, 1);
    }

    #[tokio::test]
    async fn missing_course_is_reported_and_rows_skipped() {
        let sheet = b"MENU,50 PAX\nBREADS,\nBUTTER NAAN,200PC\n".to_vec();

        let target = menu();
        let menu_id = target.id;

        let mut menu_repo = MockMenuRepository::new();
        menu_repo
            .expect_get_by_id()
            .returning(move |_| {
                let target = target.clone();
                Box::pin(async move { Ok(Some(target)) })
            });

        let mut course_repo = MockCourseRepository::new();
        course_repo
            .expect_get_by_menu_and_name()
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        course_repo.expect_create_course().times(0);

        let mut item_repo = MockMenuItemRepository::new();
        item_repo.expect_get_by_course_and_name().times(0);
        item_repo.expect_create_item().times(0);

        let reference_repo = MockQuantityReferenceRepository::new();

        let service = service_with(menu_repo, course_repo, item_repo, reference_repo);
        let report = service
            .import_quantity_sheet(
                identity(true),
                ImportSheetInput {
                    target: ImportTarget::MenuId(menu_id),
                    data: sheet,
                    course_handling: CourseHandling::RequireExisting,
                },
            )
            .await
            .unwrap();

        assert_eq!(report.imported, 0);
        assert_eq!(report.errors, 1);
        assert!(report.messages[0].contains("BREADS"));
    }

    #[tokio::test]
    async fn non_staff_cannot_import() {
        let service = service_with(
            MockMenuRepository::new(),
            MockCourseRepository::new(),
            MockMenuItemRepository::new(),
            MockQuantityReferenceRepository::new(),
        );

        let err = service
            .import_quantity_sheet(
                identity(false),
                ImportSheetInput {
                    target: ImportTarget::MenuId(Uuid::new_v4()),
                    data: b"MENU,50 PAX\n".to_vec(),
                    course_handling: CourseHandling::RequireExisting,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
