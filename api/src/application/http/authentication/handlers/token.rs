use axum::{Json, extract::State};
use chefco_core::domain::authentication::{ports::AuthService, value_objects::AuthenticateInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    authentication::validators::TokenValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "authentication",
    summary = "Obtain auth token",
    description = "Exchanges username and password for a bearer token.",
    request_body = TokenValidator,
    responses(
        (status = 200, body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenValidator>,
) -> Result<Response<TokenResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let auth_token = state
        .service
        .authenticate(AuthenticateInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TokenResponse {
        token: auth_token.token,
    }))
}
