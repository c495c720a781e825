use axum::extract::{Path, State};
use chefco_core::domain::party_order::{entities::PredictionResult, ports::PartyOrderService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPredictionsResponse {
    pub data: Vec<PredictionResult>,
}

#[utoipa::path(
    get,
    path = "/{order_id}/predictions",
    tag = "party-order",
    summary = "Get predictions for a party order",
    description = "Newest first.",
    params(
        ("order_id" = Uuid, Path, description = "Party order id"),
    ),
    responses(
        (status = 200, body = GetPredictionsResponse),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Party order not found")
    ),
)]
pub async fn get_predictions(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPredictionsResponse>, ApiError> {
    let predictions = state
        .service
        .get_predictions(identity, order_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPredictionsResponse { data: predictions }))
}
