mod health;
mod readness;

pub use health::health;
pub use readness::readness;
