pub mod upc_database_client;

pub use upc_database_client::*;
