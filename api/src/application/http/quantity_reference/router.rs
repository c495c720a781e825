use super::handlers::create_quantity_reference::{
    __path_create_quantity_reference, create_quantity_reference,
};
use super::handlers::delete_quantity_reference::{
    __path_delete_quantity_reference, delete_quantity_reference,
};
use super::handlers::get_quantity_reference::{
    __path_get_quantity_reference, get_quantity_reference,
};
use super::handlers::get_quantity_references::{
    __path_get_quantity_references, get_quantity_references,
};
use super::handlers::update_quantity_reference::{
    __path_update_quantity_reference, update_quantity_reference,
};
use super::handlers::upload_csv::{__path_upload_csv, upload_csv};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_quantity_references,
    get_quantity_reference,
    create_quantity_reference,
    update_quantity_reference,
    delete_quantity_reference,
    upload_csv
))]
pub struct QuantityReferenceApiDoc;

pub fn quantity_reference_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/quantity-references", root_path),
            get(get_quantity_references),
        )
        .route(
            &format!("{}/quantity-references", root_path),
            post(create_quantity_reference),
        )
        .route(
            &format!("{}/quantity-references/upload-csv", root_path),
            post(upload_csv),
        )
        .route(
            &format!("{}/quantity-references/{{reference_id}}", root_path),
            get(get_quantity_reference),
        )
        .route(
            &format!("{}/quantity-references/{{reference_id}}", root_path),
            patch(update_quantity_reference),
        )
        .route(
            &format!("{}/quantity-references/{{reference_id}}", root_path),
            delete(delete_quantity_reference),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
