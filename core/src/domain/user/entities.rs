use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    #[schema(ignore)]
    pub password_hash: String,
    pub is_staff: bool,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username: config.username,
            email: config.email,
            password_hash: config.password_hash,
            is_staff: config.is_staff,
            enabled: true,
            created_at: now,
        }
    }
}
