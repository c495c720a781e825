use crate::domain::menu::entities::{Course, Menu, MenuItem, QuantityReference};
use crate::entity::{
    courses::Model as CourseModel, menu_items::Model as MenuItemModel, menus::Model as MenuModel,
    quantity_references::Model as QuantityReferenceModel,
};

impl From<MenuModel> for Menu {
    fn from(model: MenuModel) -> Self {
        Menu {
            id: model.id,
            name: model.name,
            description: model.description,
            created_by: model.created_by,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            menu_id: model.menu_id,
            name: model.name,
            order: model.order,
        }
    }
}

impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            course_id: model.course_id,
            name: model.name,
        }
    }
}

impl From<QuantityReferenceModel> for QuantityReference {
    fn from(model: QuantityReferenceModel) -> Self {
        QuantityReference {
            id: model.id,
            menu_item_id: model.menu_item_id,
            party_size: model.party_size,
            quantity_value: model.quantity_value,
            unit: model.unit,
        }
    }
}
