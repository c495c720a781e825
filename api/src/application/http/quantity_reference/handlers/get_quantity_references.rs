use axum::extract::State;
use chefco_core::domain::menu::{entities::QuantityReference, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetQuantityReferencesResponse {
    pub data: Vec<QuantityReference>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "quantity-reference",
    summary = "Get quantity references",
    responses(
        (status = 200, body = GetQuantityReferencesResponse)
    ),
)]
pub async fn get_quantity_references(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetQuantityReferencesResponse>, ApiError> {
    let references = state
        .service
        .get_quantity_references(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetQuantityReferencesResponse {
        data: references,
    }))
}
