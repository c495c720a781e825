use axum::extract::{Path, State};
use chefco_core::domain::menu::{entities::QuantityReference, ports::MenuService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{reference_id}",
    tag = "quantity-reference",
    summary = "Get quantity reference",
    params(
        ("reference_id" = Uuid, Path, description = "Quantity reference id"),
    ),
    responses(
        (status = 200, body = QuantityReference),
        (status = 404, description = "Quantity reference not found")
    ),
)]
pub async fn get_quantity_reference(
    Path(reference_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<QuantityReference>, ApiError> {
    let reference = state
        .service
        .get_quantity_reference(identity, reference_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reference))
}
