pub mod crypto;
pub mod db;
pub mod health;
pub mod llm;
pub mod menu;
pub mod party_order;
pub mod user;
