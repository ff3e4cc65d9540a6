//! Step definitions for lead board behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
