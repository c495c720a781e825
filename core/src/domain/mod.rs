pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod menu;
pub mod menu_import;
pub mod party_order;
pub mod user;
