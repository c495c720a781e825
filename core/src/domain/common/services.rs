use crate::domain::{
    common::{AuthConfig, policies::ChefcoPolicy},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    menu::ports::{
        CourseRepository, MenuItemRepository, MenuRepository, QuantityReferenceRepository,
    },
    party_order::ports::{LlmClient, PartyOrderRepository, PredictionResultRepository},
    user::ports::UserRepository,
};

/// The application service. Domain service traits (`AuthService`,
/// `MenuService`, `MenuImportService`, `PartyOrderService`, ...) are
/// implemented on this struct, each in its own domain module.
#[derive(Debug, Clone)]
pub struct Service<U, H, M, C, I, Q, PO, PR, L, HC>
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
    pub user_repository: U,
    pub hasher: H,
    pub menu_repository: M,
    pub course_repository: C,
    pub menu_item_repository: I,
    pub quantity_reference_repository: Q,
    pub party_order_repository: PO,
    pub prediction_repository: PR,
    pub llm_client: L,
    pub health_check_repository: HC,
    pub policy: ChefcoPolicy,
    pub auth: AuthConfig,
}

pub struct ServiceConfig<U, H, M, C, I, Q, PO, PR, L, HC> {
    pub user_repository: U,
    pub hasher: H,
    pub menu_repository: M,
    pub course_repository: C,
    pub menu_item_repository: I,
    pub quantity_reference_repository: Q,
    pub party_order_repository: PO,
    pub prediction_repository: PR,
    pub llm_client: L,
    pub health_check_repository: HC,
    pub auth: AuthConfig,
}

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
    pub fn new(config: ServiceConfig<U, H, M, C, I, Q, PO, PR, L, HC>) -> Self {
        Self {
            user_repository: config.user_repository,
            hasher: config.hasher,
            menu_repository: config.menu_repository,
            course_repository: config.course_repository,
            menu_item_repository: config.menu_item_repository,
            quantity_reference_repository: config.quantity_reference_repository,
            party_order_repository: config.party_order_repository,
            prediction_repository: config.prediction_repository,
            llm_client: config.llm_client,
            health_check_repository: config.health_check_repository,
            policy: ChefcoPolicy::new(),
            auth: config.auth,
        }
    }
}
