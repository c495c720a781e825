use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub preferred_username: String,
    pub is_staff: bool,
    pub iat: i64,
    pub exp: i64,
}

/// A signed bearer token handed back from `/api-token-auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthToken {
    pub token: String,
}
