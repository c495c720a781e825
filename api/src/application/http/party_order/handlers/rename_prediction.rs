use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::party_order::{
    entities::PredictionResult,
    ports::PartyOrderService,
    value_objects::RenamePredictionInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        party_order::validators::RenamePredictionValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{order_id}/predictions/{prediction_id}",
    tag = "party-order",
    summary = "Rename prediction",
    params(
        ("order_id" = Uuid, Path, description = "Party order id"),
        ("prediction_id" = Uuid, Path, description = "Prediction id"),
    ),
    request_body = RenamePredictionValidator,
    responses(
        (status = 200, body = PredictionResult),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Prediction not found")
    ),
)]
pub async fn rename_prediction(
    Path((_order_id, prediction_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<RenamePredictionValidator>,
) -> Result<Response<PredictionResult>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let prediction = state
        .service
        .rename_prediction(
            identity,
            RenamePredictionInput {
                prediction_id,
                name: payload.name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(prediction))
}
