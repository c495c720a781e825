pub mod course_repository;
pub mod menu_item_repository;
pub mod menu_repository;
pub mod quantity_reference_repository;
