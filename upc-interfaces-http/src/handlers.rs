pub mod graphql_handlers;
pub mod ops_handlers;

pub use graphql_handlers::*;
pub use ops_handlers::*;
