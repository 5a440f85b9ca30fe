pub mod error;
pub mod graphql;
pub mod handlers;
pub mod routes;

pub use error::*;
pub use graphql::*;
pub use handlers::*;
pub use routes::*;
