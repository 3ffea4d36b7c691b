//! Data loading and validation for game configuration.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
