//! Sprintboard: task, sprint and user resources for a planning board API.
//!
//! This crate holds the core a web layer calls into: record filtering,
//! validation of sprint and task writes, and hyperlinked representations of
//! users, sprints and tasks. Routing, authentication and the HTTP surface
//! belong to the host.
//!
//! # Architecture
//!
//! Sprintboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, links)
//!
//! # Modules
//!
//! - [`board`]: Domain, filtering, validation, representations and services
//! - [`config`]: Environment-driven settings for hosting the board

pub mod board;
pub mod config;
