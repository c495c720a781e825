use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Course, Menu, MenuItem, QuantityReference},
        value_objects::{
            CourseWithItems, CreateCourseInput, CreateMenuInput, CreateMenuItemInput,
            CreateQuantityReferenceInput, MenuDetails, MenuItemWithReferences, UpdateCourseInput,
            UpdateMenuInput, UpdateMenuItemInput, UpdateQuantityReferenceInput,
        },
    },
};

/// Repository trait for menus
#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn create_menu(&self, menu: Menu) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn get_by_id(&self, menu_id: Uuid)
    -> impl Future<Output = Result<Option<Menu>, CoreError>> + Send;

    fn get_by_name(&self, name: String)
    -> impl Future<Output = Result<Option<Menu>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, CoreError>> + Send;

    fn update_menu(&self, menu: Menu) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn delete_menu(&self, menu_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for courses
#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn create_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn get_by_id(
        &self,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    /// Courses of one menu, sorted by display order.
    fn get_by_menu(&self, menu_id: Uuid)
    -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    fn get_by_menu_and_name(
        &self,
        menu_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    fn update_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(&self, course_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for menu items
#[cfg_attr(test, mockall::automock)]
pub trait MenuItemRepository: Send + Sync {
    fn create_item(
        &self,
        item: MenuItem,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<MenuItem>, CoreError>> + Send;

    fn get_by_course(
        &self,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn get_by_course_and_name(
        &self,
        course_id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<Option<MenuItem>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn update_item(
        &self,
        item: MenuItem,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for quantity references
#[cfg_attr(test, mockall::automock)]
pub trait QuantityReferenceRepository: Send + Sync {
    fn create_reference(
        &self,
        reference: QuantityReference,
    ) -> impl Future<Output = Result<QuantityReference, CoreError>> + Send;

    fn get_by_id(
        &self,
        reference_id: Uuid,
    ) -> impl Future<Output = Result<Option<QuantityReference>, CoreError>> + Send;

    /// References of one item, sorted by party size ascending.
    fn get_by_item(
        &self,
        menu_item_id: Uuid,
    ) -> impl Future<Output = Result<Vec<QuantityReference>, CoreError>> + Send;

    fn get_by_item_and_party_size(
        &self,
        menu_item_id: Uuid,
        party_size: i32,
    ) -> impl Future<Output = Result<Option<QuantityReference>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<QuantityReference>, CoreError>> + Send;

    fn update_reference(
        &self,
        reference: QuantityReference,
    ) -> impl Future<Output = Result<QuantityReference, CoreError>> + Send;

    fn delete_reference(
        &self,
        reference_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for catalog management
pub trait MenuService: Send + Sync {
    fn create_menu(
        &self,
        identity: Identity,
        input: CreateMenuInput,
    ) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn get_menus(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<MenuDetails>, CoreError>> + Send;

    fn get_menu(
        &self,
        identity: Identity,
        menu_id: Uuid,
    ) -> impl Future<Output = Result<MenuDetails, CoreError>> + Send;

    fn update_menu(
        &self,
        identity: Identity,
        input: UpdateMenuInput,
    ) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn delete_menu(
        &self,
        identity: Identity,
        menu_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_course(
        &self,
        identity: Identity,
        input: CreateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn get_courses(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<CourseWithItems>, CoreError>> + Send;

    fn get_course(
        &self,
        identity: Identity,
        course_id: Uuid,
    ) -> impl Future<Output = Result<CourseWithItems, CoreError>> + Send;

    fn update_course(
        &self,
        identity: Identity,
        input: UpdateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(
        &self,
        identity: Identity,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_menu_item(
        &self,
        identity: Identity,
        input: CreateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn get_menu_items(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<MenuItemWithReferences>, CoreError>> + Send;

    fn get_menu_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<MenuItemWithReferences, CoreError>> + Send;

    fn update_menu_item(
        &self,
        identity: Identity,
        input: UpdateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete_menu_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_quantity_reference(
        &self,
        identity: Identity,
        input: CreateQuantityReferenceInput,
    ) -> impl Future<Output = Result<QuantityReference, CoreError>> + Send;

    fn get_quantity_references(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<QuantityReference>, CoreError>> + Send;

    fn get_quantity_reference(
        &self,
        identity: Identity,
        reference_id: Uuid,
    ) -> impl Future<Output = Result<QuantityReference, CoreError>> + Send;

    fn update_quantity_reference(
        &self,
        identity: Identity,
        input: UpdateQuantityReferenceInput,
    ) -> impl Future<Output = Result<QuantityReference, CoreError>> + Send;

    fn delete_quantity_reference(
        &self,
        identity: Identity,
        reference_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Policy trait for catalog authorization
pub trait MenuPolicy: Send + Sync {
    fn can_view_catalog(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_manage_catalog(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
