use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated principal attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Identity::User(user) => &user.username,
        }
    }

    pub fn is_staff(&self) -> bool {
        match self {
            Identity::User(user) => user.is_staff,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}
