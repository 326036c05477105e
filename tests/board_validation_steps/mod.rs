//! Step definitions for board validation scenarios.

mod then;
mod when;
