//! Character archetypes, state, and progression.

#![allow(unused_imports)]

pub mod progression;
pub mod types;

pub use progression::*;
pub use types::*;
