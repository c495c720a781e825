use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    party_order::{entities::PartyOrder, ports::PartyOrderRepository},
};
use crate::entity::party_orders::{
    ActiveModel as PartyOrderActiveModel, Column as PartyOrderColumn, Entity as PartyOrderEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPartyOrderRepository {
    pub db: DatabaseConnection,
}

impl PostgresPartyOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PartyOrderRepository for PostgresPartyOrderRepository {
    async fn create_order(&self, order: PartyOrder) -> Result<PartyOrder, CoreError> {
        let created = PartyOrderEntity::insert(PartyOrderActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            menu_id: Set(order.menu_id),
            party_size: Set(order.party_size),
            created_at: Set(order.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(PartyOrder::from)
        .map_err(|e| {
            error!("Failed to create party order: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, order_id: Uuid) -> Result<Option<PartyOrder>, CoreError> {
        let order = PartyOrderEntity::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get party order by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(PartyOrder::from);

        Ok(order)
    }

    async fn get_all(&self) -> Result<Vec<PartyOrder>, CoreError> {
        let orders = PartyOrderEntity::find()
            .order_by_desc(PartyOrderColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list party orders: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(PartyOrder::from)
            .collect();

        Ok(orders)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<PartyOrder>, CoreError> {
        let orders = PartyOrderEntity::find()
            .filter(PartyOrderColumn::UserId.eq(user_id))
            .order_by_desc(PartyOrderColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list party orders for user: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(PartyOrder::from)
            .collect();

        Ok(orders)
    }

    async fn update_order(&self, order: PartyOrder) -> Result<PartyOrder, CoreError> {
        let updated = PartyOrderEntity::update(PartyOrderActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            menu_id: Set(order.menu_id),
            party_size: Set(order.party_size),
            created_at: Set(order.created_at.fixed_offset()),
        })
        .filter(PartyOrderColumn::Id.eq(order.id))
        .exec(&self.db)
        .await
        .map(PartyOrder::from)
        .map_err(|e| {
            error!("Failed to update party order: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_order(&self, order_id: Uuid) -> Result<(), CoreError> {
        PartyOrderEntity::delete_by_id(order_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete party order: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
