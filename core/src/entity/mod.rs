pub mod courses;
pub mod menu_items;
pub mod menus;
pub mod party_orders;
pub mod prediction_results;
pub mod quantity_references;
pub mod users;
