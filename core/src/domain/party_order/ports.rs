use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    party_order::{
        entities::{PartyOrder, PredictionResult},
        value_objects::{
            CreatePartyOrderInput, PartyOrderDetails, PredictQuantitiesInput,
            RenamePredictionInput, UpdatePartyOrderInput,
        },
    },
};

/// Repository trait for party orders
#[cfg_attr(test, mockall::automock)]
pub trait PartyOrderRepository: Send + Sync {
    fn create_order(
        &self,
        order: PartyOrder,
    ) -> impl Future<Output = Result<PartyOrder, CoreError>> + Send;

    fn get_by_id(
        &self,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Option<PartyOrder>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<PartyOrder>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PartyOrder>, CoreError>> + Send;

    fn update_order(
        &self,
        order: PartyOrder,
    ) -> impl Future<Output = Result<PartyOrder, CoreError>> + Send;

    fn delete_order(&self, order_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for stored prediction results
#[cfg_attr(test, mockall::automock)]
pub trait PredictionResultRepository: Send + Sync {
    fn create_result(
        &self,
        result: PredictionResult,
    ) -> impl Future<Output = Result<PredictionResult, CoreError>> + Send;

    fn get_by_id(
        &self,
        result_id: Uuid,
    ) -> impl Future<Output = Result<Option<PredictionResult>, CoreError>> + Send;

    /// Results of one order, newest first.
    fn get_by_order(
        &self,
        party_order_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PredictionResult>, CoreError>> + Send;

    fn update_result(
        &self,
        result: PredictionResult,
    ) -> impl Future<Output = Result<PredictionResult, CoreError>> + Send;
}

/// Chat-completion client used for quantity prediction.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn complete(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for party orders and quantity prediction
pub trait PartyOrderService: Send + Sync {
    fn create_party_order(
        &self,
        identity: Identity,
        input: CreatePartyOrderInput,
    ) -> impl Future<Output = Result<PartyOrder, CoreError>> + Send;

    /// All orders for staff, the caller's own orders otherwise.
    fn get_party_orders(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<PartyOrderDetails>, CoreError>> + Send;

    fn get_party_order(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> impl Future<Output = Result<PartyOrderDetails, CoreError>> + Send;

    fn update_party_order(
        &self,
        identity: Identity,
        input: UpdatePartyOrderInput,
    ) -> impl Future<Output = Result<PartyOrder, CoreError>> + Send;

    fn delete_party_order(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Runs one prediction for the order and persists the response.
    fn predict_quantities(
        &self,
        identity: Identity,
        input: PredictQuantitiesInput,
    ) -> impl Future<Output = Result<PredictionResult, CoreError>> + Send;

    fn get_predictions(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PredictionResult>, CoreError>> + Send;

    fn rename_prediction(
        &self,
        identity: Identity,
        input: RenamePredictionInput,
    ) -> impl Future<Output = Result<PredictionResult, CoreError>> + Send;
}

/// Policy trait for order authorization
pub trait PartyOrderPolicy: Send + Sync {
    /// Staff can access any order, regular users only their own.
    fn can_access_order(
        &self,
        identity: &Identity,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_create_order(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
