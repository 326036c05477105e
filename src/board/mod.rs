//! Sprint board: users, sprints and tasks.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Task selection in [`filter`]
//! - Write rules in [`validation`]
//! - Client-facing views in [`representation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod filter;
pub mod ports;
pub mod representation;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
