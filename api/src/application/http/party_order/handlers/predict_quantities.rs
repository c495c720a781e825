use axum::extract::{Path, Query, State};
use chefco_core::domain::party_order::{
    entities::PredictionResult,
    ports::PartyOrderService,
    value_objects::PredictQuantitiesInput,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PredictQuantitiesQuery {
    /// Optional label stored with the prediction.
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/{order_id}/predict-quantities",
    tag = "party-order",
    summary = "Predict quantities for a party order",
    description = "Interpolates reference quantities for the order's party size and stores the result.",
    params(
        ("order_id" = Uuid, Path, description = "Party order id"),
        PredictQuantitiesQuery,
    ),
    responses(
        (status = 200, body = PredictionResult),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Party order not found"),
        (status = 500, description = "Prediction backend failure")
    ),
)]
pub async fn predict_quantities(
    Path(order_id): Path<Uuid>,
    Query(query): Query<PredictQuantitiesQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<PredictionResult>, ApiError> {
    let prediction = state
        .service
        .predict_quantities(
            identity,
            PredictQuantitiesInput {
                order_id,
                name: query.name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(prediction))
}
