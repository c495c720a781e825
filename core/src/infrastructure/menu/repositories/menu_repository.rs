use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::Menu, ports::MenuRepository},
};
use crate::entity::menus::{ActiveModel as MenuActiveModel, Column as MenuColumn, Entity as MenuEntity};

#[derive(Debug, Clone)]
pub struct PostgresMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MenuRepository for PostgresMenuRepository {
    async fn create_menu(&self, menu: Menu) -> Result<Menu, CoreError> {
        let created = MenuEntity::insert(MenuActiveModel {
            id: Set(menu.id),
            name: Set(menu.name),
            description: Set(menu.description),
            created_by: Set(menu.created_by),
            created_at: Set(menu.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Menu::from)
        .map_err(|e| {
            error!("Failed to create menu: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, menu_id: Uuid) -> Result<Option<Menu>, CoreError> {
        let menu = MenuEntity::find_by_id(menu_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Menu::from);

        Ok(menu)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Menu>, CoreError> {
        let menu = MenuEntity::find()
            .filter(MenuColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Menu::from);

        Ok(menu)
    }

    async fn get_all(&self) -> Result<Vec<Menu>, CoreError> {
        let menus = MenuEntity::find()
            .order_by_asc(MenuColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list menus: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Menu::from)
            .collect();

        Ok(menus)
    }

    async fn update_menu(&self, menu: Menu) -> Result<Menu, CoreError> {
        let updated = MenuEntity::update(MenuActiveModel {
            id: Set(menu.id),
            name: Set(menu.name),
            description: Set(menu.description),
            created_by: Set(menu.created_by),
            created_at: Set(menu.created_at.fixed_offset()),
        })
        .filter(MenuColumn::Id.eq(menu.id))
        .exec(&self.db)
        .await
        .map(Menu::from)
        .map_err(|e| {
            error!("Failed to update menu: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_menu(&self, menu_id: Uuid) -> Result<(), CoreError> {
        MenuEntity::delete_by_id(menu_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete menu: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
