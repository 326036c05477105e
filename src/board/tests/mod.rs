//! Unit tests for the sprint board.

mod support;
