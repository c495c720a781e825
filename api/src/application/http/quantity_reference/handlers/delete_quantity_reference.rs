use axum::extract::{Path, State};
use chefco_core::domain::menu::ports::MenuService;
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
    path = "/{reference_id}",
    tag = "quantity-reference",
    summary = "Delete quantity reference",
    params(
        ("reference_id" = Uuid, Path, description = "Quantity reference id"),
    ),
    responses(
        (status = 204, description = "Quantity reference deleted"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Quantity reference not found")
    ),
)]
pub async fn delete_quantity_reference(
    Path(reference_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_quantity_reference(identity, reference_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
