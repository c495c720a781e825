use crate::domain::party_order::entities::{PartyOrder, PredictionResult};
use crate::entity::{
    party_orders::Model as PartyOrderModel, prediction_results::Model as PredictionResultModel,
};

impl From<PartyOrderModel> for PartyOrder {
    fn from(model: PartyOrderModel) -> Self {
        PartyOrder {
            id: model.id,
            user_id: model.user_id,
            menu_id: model.menu_id,
            party_size: model.party_size,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<PredictionResultModel> for PredictionResult {
    fn from(model: PredictionResultModel) -> Self {
        PredictionResult {
            id: model.id,
            party_order_id: model.party_order_id,
            name: model.name,
            result_data: model.result_data,
            created_at: model.created_at.to_utc(),
        }
    }
}
