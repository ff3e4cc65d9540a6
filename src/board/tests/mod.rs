//! Unit tests for the board context.

mod invariant_tests;
mod support;
