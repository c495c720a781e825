pub mod create_menu;
pub mod delete_menu;
pub mod get_menu;
pub mod get_menus;
pub mod update_menu;
