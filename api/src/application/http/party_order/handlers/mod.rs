pub mod create_party_order;
pub mod delete_party_order;
pub mod get_party_order;
pub mod get_party_orders;
pub mod get_predictions;
pub mod predict_quantities;
pub mod rename_prediction;
pub mod update_party_order;
