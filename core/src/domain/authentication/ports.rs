use std::future::Future;

use crate::domain::{
    authentication::{
        entities::AuthToken,
        value_objects::{AuthenticateInput, Identity},
    },
    common::entities::app_errors::CoreError,
};

/// Token issuing and verification
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authenticate(
        &self,
        input: AuthenticateInput,
    ) -> impl Future<Output = Result<AuthToken, CoreError>> + Send;

    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
