pub mod course;
pub mod menu;
pub mod menu_item;
pub mod quantity_reference;

pub use course::Course;
pub use menu::Menu;
pub use menu_item::MenuItem;
pub use quantity_reference::QuantityReference;
