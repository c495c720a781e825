use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::ports::{
        CourseRepository, MenuItemRepository, MenuRepository, QuantityReferenceRepository,
    },
    party_order::ports::{LlmClient, PartyOrderRepository, PredictionResultRepository},
    user::ports::UserRepository,
};

impl<U, H, M, C, I, Q, PO, PR, L, HC> HealthCheckService for Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
