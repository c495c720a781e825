use crate::domain::common::{ChefcoConfig, services::Service};
use crate::infrastructure::{
    crypto::argon2_hasher::Argon2Hasher,
    db::postgres::Postgres,
    health::repositories::PostgresHealthCheckRepository,
    llm::openai_client::OpenAiChatClient,
    menu::repositories::{
        course_repository::PostgresCourseRepository,
        menu_item_repository::PostgresMenuItemRepository,
        menu_repository::PostgresMenuRepository,
        quantity_reference_repository::PostgresQuantityReferenceRepository,
    },
    party_order::repositories::{
        party_order_repository::PostgresPartyOrderRepository,
        prediction_result_repository::PostgresPredictionResultRepository,
    },
    user::repositories::user_repository::PostgresUserRepository,
};

pub type ChefcoService = Service<
    PostgresUserRepository,
    Argon2Hasher,
    PostgresMenuRepository,
    PostgresCourseRepository,
    PostgresMenuItemRepository,
    PostgresQuantityReferenceRepository,
    PostgresPartyOrderRepository,
    PostgresPredictionResultRepository,
    OpenAiChatClient,
    PostgresHealthCheckRepository,
>;

/// Connects the database and assembles the service with its postgres
/// adapters and the chat-completion client.
pub async fn create_service(config: ChefcoConfig) -> Result<ChefcoService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        crate::domain::common::services::ServiceConfig {
            user_repository: PostgresUserRepository::new(db.clone()),
            hasher: Argon2Hasher::new(),
            menu_repository: PostgresMenuRepository::new(db.clone()),
            course_repository: PostgresCourseRepository::new(db.clone()),
            menu_item_repository: PostgresMenuItemRepository::new(db.clone()),
            quantity_reference_repository: PostgresQuantityReferenceRepository::new(db.clone()),
            party_order_repository: PostgresPartyOrderRepository::new(db.clone()),
            prediction_repository: PostgresPredictionResultRepository::new(db.clone()),
            llm_client: OpenAiChatClient::new(
                config.llm.openai_api_key.clone(),
                config.llm.openai_model.clone(),
            ),
            health_check_repository: PostgresHealthCheckRepository::new(db),
            auth: config.auth.clone(),
        },
    ))
}
