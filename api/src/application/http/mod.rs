pub mod authentication;
pub mod course;
pub mod health;
pub mod menu;
pub mod menu_item;
pub mod party_order;
pub mod quantity_reference;
pub mod server;
