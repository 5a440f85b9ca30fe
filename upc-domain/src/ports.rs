// Port traits: what the domain needs from infrastructure

pub mod lookup;

pub use lookup::*;
