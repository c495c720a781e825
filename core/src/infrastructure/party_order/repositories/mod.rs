pub mod party_order_repository;
pub mod prediction_result_repository;
