pub mod error;
pub mod fixtures;
pub mod panic;
pub mod result;
