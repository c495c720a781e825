use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    menu::entities::{Course, Menu, MenuItem, QuantityReference},
    user::value_objects::UserSummary,
};

/// A menu item with its reference quantities, sorted by party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemWithReferences {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub quantity_references: Vec<QuantityReference>,
}

impl MenuItemWithReferences {
    pub fn new(item: MenuItem, quantity_references: Vec<QuantityReference>) -> Self {
        Self {
            id: item.id,
            course_id: item.course_id,
            name: item.name,
            quantity_references,
        }
    }
}

/// A course with its items, sorted by display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseWithItems {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub order: i32,
    pub menu_items: Vec<MenuItemWithReferences>,
}

impl CourseWithItems {
    pub fn new(course: Course, menu_items: Vec<MenuItemWithReferences>) -> Self {
        Self {
            id: course.id,
            menu_id: course.menu_id,
            name: course.name,
            order: course.order,
            menu_items,
        }
    }
}

/// The full nested representation of a menu: courses -> items ->
/// quantity references, plus the creator summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuDetails {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_by: UserSummary,
    pub created_at: DateTime<Utc>,
    pub courses: Vec<CourseWithItems>,
}

impl MenuDetails {
    pub fn new(menu: Menu, created_by: UserSummary, courses: Vec<CourseWithItems>) -> Self {
        Self {
            id: menu.id,
            name: menu.name,
            description: menu.description,
            created_by,
            created_at: menu.created_at,
            courses,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UpdateMenuInput {
    pub menu_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub menu_id: Uuid,
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCourseInput {
    pub course_id: Uuid,
    pub name: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemInput {
    pub course_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateMenuItemInput {
    pub item_id: Uuid,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateQuantityReferenceInput {
    pub menu_item_id: Uuid,
    pub party_size: i32,
    pub quantity_value: Decimal,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct UpdateQuantityReferenceInput {
    pub reference_id: Uuid,
    pub party_size: Option<i32>,
    pub quantity_value: Option<Decimal>,
    pub unit: Option<String>,
}
