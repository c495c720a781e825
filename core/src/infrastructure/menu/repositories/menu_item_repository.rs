use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::MenuItem, ports::MenuItemRepository},
};
use crate::entity::menu_items::{
    ActiveModel as MenuItemActiveModel, Column as MenuItemColumn, Entity as MenuItemEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MenuItemRepository for PostgresMenuItemRepository {
    async fn create_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let created = MenuItemEntity::insert(MenuItemActiveModel {
            id: Set(item.id),
            course_id: Set(item.course_id),
            name: Set(item.name),
        })
        .exec_with_returning(&self.db)
        .await
        .map(MenuItem::from)
        .map_err(|e| {
            error!("Failed to create menu item: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<MenuItem>, CoreError> {
        let item = MenuItemEntity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu item by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(MenuItem::from);

        Ok(item)
    }

    async fn get_by_course(&self, course_id: Uuid) -> Result<Vec<MenuItem>, CoreError> {
        let items = MenuItemEntity::find()
            .filter(MenuItemColumn::CourseId.eq(course_id))
            .order_by_asc(MenuItemColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list items for course: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MenuItem::from)
            .collect();

        Ok(items)
    }

    async fn get_by_course_and_name(
        &self,
        course_id: Uuid,
        name: String,
    ) -> Result<Option<MenuItem>, CoreError> {
        let item = MenuItemEntity::find()
            .filter(MenuItemColumn::CourseId.eq(course_id))
            .filter(MenuItemColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu item by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(MenuItem::from);

        Ok(item)
    }

    async fn get_all(&self) -> Result<Vec<MenuItem>, CoreError> {
        let items = MenuItemEntity::find()
            .order_by_asc(MenuItemColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list menu items: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MenuItem::from)
            .collect();

        Ok(items)
    }

    async fn update_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let updated = MenuItemEntity::update(MenuItemActiveModel {
            id: Set(item.id),
            course_id: Set(item.course_id),
            name: Set(item.name),
        })
        .filter(MenuItemColumn::Id.eq(item.id))
        .exec(&self.db)
        .await
        .map(MenuItem::from)
        .map_err(|e| {
            error!("Failed to update menu item: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        MenuItemEntity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete menu item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
