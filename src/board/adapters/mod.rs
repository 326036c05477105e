//! Adapter implementations of the board ports.

pub mod links;
pub mod memory;
pub mod postgres;

pub use links::PrefixUrlResolver;
