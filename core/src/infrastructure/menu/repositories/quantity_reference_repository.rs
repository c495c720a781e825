use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::QuantityReference, ports::QuantityReferenceRepository},
};
use crate::entity::quantity_references::{
    ActiveModel as ReferenceActiveModel, Column as ReferenceColumn, Entity as ReferenceEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresQuantityReferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresQuantityReferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl QuantityReferenceRepository for PostgresQuantityReferenceRepository {
    async fn create_reference(
        &self,
        reference: QuantityReference,
    ) -> Result<QuantityReference, CoreError> {
        let created = ReferenceEntity::insert(ReferenceActiveModel {
            id: Set(reference.id),
            menu_item_id: Set(reference.menu_item_id),
            party_size: Set(reference.party_size),
            quantity_value: Set(reference.quantity_value),
            unit: Set(reference.unit),
        })
        .exec_with_returning(&self.db)
        .await
        .map(QuantityReference::from)
        .map_err(|e| {
            error!("Failed to create quantity reference: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, reference_id: Uuid) -> Result<Option<QuantityReference>, CoreError> {
        let reference = ReferenceEntity::find_by_id(reference_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get quantity reference by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(QuantityReference::from);

        Ok(reference)
    }

    async fn get_by_item(&self, menu_item_id: Uuid) -> Result<Vec<QuantityReference>, CoreError> {
        let references = ReferenceEntity::find()
            .filter(ReferenceColumn::MenuItemId.eq(menu_item_id))
            .order_by_asc(ReferenceColumn::PartySize)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list quantity references for item: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(QuantityReference::from)
            .collect();

        Ok(references)
    }

    async fn get_by_item_and_party_size(
        &self,
        menu_item_id: Uuid,
        party_size: i32,
    ) -> Result<Option<QuantityReference>, CoreError> {
        let reference = ReferenceEntity::find()
            .filter(ReferenceColumn::MenuItemId.eq(menu_item_id))
            .filter(ReferenceColumn::PartySize.eq(party_size))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get quantity reference by party size: {}", e);
                CoreError::InternalServerError
            })?
            .map(QuantityReference::from);

        Ok(reference)
    }

    async fn get_all(&self) -> Result<Vec<QuantityReference>, CoreError> {
        let references = ReferenceEntity::find()
            .order_by_asc(ReferenceColumn::PartySize)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list quantity references: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(QuantityReference::from)
            .collect();

        Ok(references)
    }

    async fn update_reference(
        &self,
        reference: QuantityReference,
    ) -> Result<QuantityReference, CoreError> {
        let updated = ReferenceEntity::update(ReferenceActiveModel {
            id: Set(reference.id),
            menu_item_id: Set(reference.menu_item_id),
            party_size: Set(reference.party_size),
            quantity_value: Set(reference.quantity_value),
            unit: Set(reference.unit),
        })
        .filter(ReferenceColumn::Id.eq(reference.id))
        .exec(&self.db)
        .await
        .map(QuantityReference::from)
        .map_err(|e| {
            error!("Failed to update quantity reference: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_reference(&self, reference_id: Uuid) -> Result<(), CoreError> {
        ReferenceEntity::delete_by_id(reference_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete quantity reference: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
