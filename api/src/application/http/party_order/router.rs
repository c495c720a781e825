use super::handlers::create_party_order::{__path_create_party_order, create_party_order};
use super::handlers::delete_party_order::{__path_delete_party_order, delete_party_order};
use super::handlers::get_party_order::{__path_get_party_order, get_party_order};
use super::handlers::get_party_orders::{__path_get_party_orders, get_party_orders};
use super::handlers::get_predictions::{__path_get_predictions, get_predictions};
use super::handlers::predict_quantities::{__path_predict_quantities, predict_quantities};
use super::handlers::rename_prediction::{__path_rename_prediction, rename_prediction};
use super::handlers::update_party_order::{__path_update_party_order, update_party_order};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_party_orders,
    get_party_order,
    create_party_order,
    update_party_order,
    delete_party_order,
    predict_quantities,
    get_predictions,
    rename_prediction
))]
pub struct PartyOrderApiDoc;

pub fn party_order_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/party-orders", root_path), get(get_party_orders))
        .route(
            &format!("{}/party-orders", root_path),
            post(create_party_order),
        )
        .route(
            &format!("{}/party-orders/{{order_id}}", root_path),
            get(get_party_order),
        )
        .route(
            &format!("{}/party-orders/{{order_id}}", root_path),
            patch(update_party_order),
        )
        .route(
            &format!("{}/party-orders/{{order_id}}", root_path),
            delete(delete_party_order),
        )
        .route(
            &format!("{}/party-orders/{{order_id}}/predict-quantities", root_path),
            get(predict_quantities),
        )
        .route(
            &format!("{}/party-orders/{{order_id}}/predictions", root_path),
            get(get_predictions),
        )
        .route(
            &format!(
                "{}/party-orders/{{order_id}}/predictions/{{prediction_id}}",
                root_path
            ),
            patch(rename_prediction),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
