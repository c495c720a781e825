use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database reachability probe result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub reachable: bool,
    pub response_time_ms: u64,
}
