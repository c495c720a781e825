use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::menu::{
    entities::QuantityReference,
    ports::MenuService,
    value_objects::UpdateQuantityReferenceInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        quantity_reference::validators::UpdateQuantityReferenceValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{reference_id}",
    tag = "quantity-reference",
    summary = "Update quantity reference",
    params(
        ("reference_id" = Uuid, Path, description = "Quantity reference id"),
    ),
    request_body = UpdateQuantityReferenceValidator,
    responses(
        (status = 200, body = QuantityReference),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Quantity reference not found")
    ),
)]
pub async fn update_quantity_reference(
    Path(reference_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateQuantityReferenceValidator>,
) -> Result<Response<QuantityReference>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let reference = state
        .service
        .update_quantity_reference(
            identity,
            UpdateQuantityReferenceInput {
                reference_id,
                party_size: payload.party_size,
                quantity_value: payload.quantity_value,
                unit: payload.unit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reference))
}
