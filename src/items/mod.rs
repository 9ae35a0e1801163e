//! Item system: types, generation, and sorting.

#![allow(unused_imports)]

pub mod generation;
pub mod sorting;
pub mod types;

pub use generation::*;
pub use sorting::*;
pub use types::*;
