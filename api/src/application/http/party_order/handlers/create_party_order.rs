use axum::{Json, extract::State};
use chefco_core::domain::party_order::{
    entities::PartyOrder,
    ports::PartyOrderService,
    value_objects::CreatePartyOrderInput,
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        party_order::validators::CreatePartyOrderValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "party-order",
    summary = "Create party order",
    request_body = CreatePartyOrderValidator,
    responses(
        (status = 201, body = PartyOrder),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn create_party_order(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<CreatePartyOrderValidator>,
) -> Result<Response<PartyOrder>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let order = state
        .service
        .create_party_order(
            identity,
            CreatePartyOrderInput {
                menu_id: payload.menu_id,
                party_size: payload.party_size,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(order))
}
