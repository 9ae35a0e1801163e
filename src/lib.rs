//! Arena - Turn-Based Battle Simulator Library
//!
//! This module exposes the battle logic for testing and external use.

pub mod character;
pub mod combat;
pub mod constants;
pub mod items;
