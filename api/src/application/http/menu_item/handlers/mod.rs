pub mod create_menu_item;
pub mod delete_menu_item;
pub mod get_menu_item;
pub mod get_menu_items;
pub mod update_menu_item;
