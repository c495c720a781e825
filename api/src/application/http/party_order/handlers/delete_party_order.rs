use axum::extract::{Path, State};
use chefco_core::domain::party_order::ports::PartyOrderService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{order_id}",
    tag = "party-order",
    summary = "Delete party order",
    params(
        ("order_id" = Uuid, Path, description = "Party order id"),
    ),
    responses(
        (status = 204, description = "Party order deleted"),
        (status = 403, description = "Not the order owner"),
        (status = 404, description = "Party order not found")
    ),
)]
pub async fn delete_party_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_party_order(identity, order_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
