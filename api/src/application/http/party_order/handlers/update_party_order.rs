use axum::{
    Json,
    extract::{Path, State},
};
use chefco_core::domain::party_order::{
    entities::PartyOrder,
    ports::PartyOrderService,
    value_objects::UpdatePartyOrderInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        party_order::validators::UpdatePartyOrderValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{order_id}",
    tag = "party-order",
    summary = "Update party order",
    params(
        ("order_id" = Uuid, Path, description = "Party order id"),
    ),
    request_body = UpdatePartyOrderValidator,
    responses(
        (status = 200, body = PartyOrder),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Party order not found")
    ),
)]
pub async fn update_party_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdatePartyOrderValidator>,
) -> Result<Response<PartyOrder>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let order = state
        .service
        .update_party_order(
            identity,
            UpdatePartyOrderInput {
                order_id,
                menu_id: payload.menu_id,
                party_size: payload.party_size,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(order))
}
