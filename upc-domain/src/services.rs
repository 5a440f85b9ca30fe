// Domain services

pub mod field_naming;
pub mod validity;

pub use field_naming::*;
pub use validity::*;
