pub mod compat;
pub mod schema;

pub use compat::*;
pub use schema::*;
