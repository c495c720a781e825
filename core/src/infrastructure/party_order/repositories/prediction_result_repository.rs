use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    party_order::{entities::PredictionResult, ports::PredictionResultRepository},
};
use crate::entity::prediction_results::{
    ActiveModel as ResultActiveModel, Column as ResultColumn, Entity as ResultEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPredictionResultRepository {
    pub db: DatabaseConnection,
}

impl PostgresPredictionResultRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PredictionResultRepository for PostgresPredictionResultRepository {
    async fn create_result(&self, result: PredictionResult) -> Result<PredictionResult, CoreError> {
        let created = ResultEntity::insert(ResultActiveModel {
            id: Set(result.id),
            party_order_id: Set(result.party_order_id),
            name: Set(result.name),
            result_data: Set(result.result_data),
            created_at: Set(result.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(PredictionResult::from)
        .map_err(|e| {
            error!("Failed to create prediction result: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, result_id: Uuid) -> Result<Option<PredictionResult>, CoreError> {
        let result = ResultEntity::find_by_id(result_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get prediction result by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(PredictionResult::from);

        Ok(result)
    }

    async fn get_by_order(&self, party_order_id: Uuid) -> Result<Vec<PredictionResult>, CoreError> {
        let results = ResultEntity::find()
            .filter(ResultColumn::PartyOrderId.eq(party_order_id))
            .order_by_desc(ResultColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list prediction results for order: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(PredictionResult::from)
            .collect();

        Ok(results)
    }

    async fn update_result(&self, result: PredictionResult) -> Result<PredictionResult, CoreError> {
        let updated = ResultEntity::update(ResultActiveModel {
            id: Set(result.id),
            party_order_id: Set(result.party_order_id),
            name: Set(result.name),
            result_data: Set(result.result_data),
            created_at: Set(result.created_at.fixed_offset()),
        })
        .filter(ResultColumn::Id.eq(result.id))
        .exec(&self.db)
        .await
        .map(PredictionResult::from)
        .map_err(|e| {
            error!("Failed to update prediction result: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }
}
