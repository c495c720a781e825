use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            is_staff: model.is_staff,
            enabled: model.enabled,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        User {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            is_staff: model.is_staff,
            enabled: model.enabled,
            created_at: model.created_at.to_utc(),
        }
    }
}
