// Domain value objects
pub mod field_resolution;
pub mod schema_tables;

pub use field_resolution::*;
pub use schema_tables::*;
