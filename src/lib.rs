//! Weather dashboard - a static current-conditions and forecast screen
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod components;
pub mod data;
pub mod effect;
pub mod format;
pub mod icons;
pub mod layout;
pub mod reducer;
pub mod screen;
pub mod sprites;
pub mod state;
