//! JSON export of a profile and its analysis

pub mod json;

pub use json::*;
