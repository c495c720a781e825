pub mod create_quantity_reference;
pub mod delete_quantity_reference;
pub mod get_quantity_reference;
pub mod get_quantity_references;
pub mod update_quantity_reference;
pub mod upload_csv;
