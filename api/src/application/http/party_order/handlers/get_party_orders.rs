use axum::extract::State;
use chefco_core::domain::party_order::{
    ports::PartyOrderService, value_objects::PartyOrderDetails,
};
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
pub struct GetPartyOrdersResponse {
    pub data: Vec<PartyOrderDetails>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "party-order",
    summary = "Get party orders",
    description = "Staff see every order, other users only their own.",
    responses(
        (status = 200, body = GetPartyOrdersResponse)
    ),
)]
pub async fn get_party_orders(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPartyOrdersResponse>, ApiError> {
    let orders = state
        .service
        .get_party_orders(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPartyOrdersResponse { data: orders }))
}
