// Domain entities

pub mod config;
pub mod item;

pub use config::*;
pub use item::*;
