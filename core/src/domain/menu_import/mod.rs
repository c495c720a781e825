pub mod entities;
pub mod parser;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;
