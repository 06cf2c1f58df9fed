mod capabilities;
mod data;

// Re-export test fixtures
pub use capabilities::*;
pub use data::*;
