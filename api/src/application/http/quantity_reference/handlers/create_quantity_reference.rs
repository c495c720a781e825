use axum::{Json, extract::State};
use chefco_core::domain::menu::{
    entities::QuantityReference,
    ports::MenuService,
    value_objects::CreateQuantityReferenceInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        quantity_reference::validators::CreateQuantityReferenceValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "quantity-reference",
    summary = "Create quantity reference",
    request_body = CreateQuantityReferenceValidator,
    responses(
        (status = 201, body = QuantityReference),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu item not found")
    ),
)]
pub async fn create_quantity_reference(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreateQuantityReferenceValidator>,
) -> Result<Response<QuantityReference>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let reference = state
        .service
        .create_quantity_reference(
            identity,
            CreateQuantityReferenceInput {
                menu_item_id: payload.menu_item_id,
                party_size: payload.party_size,
                quantity_value: payload.quantity_value,
                unit: payload.unit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(reference))
}
