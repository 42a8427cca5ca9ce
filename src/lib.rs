//! Pokedex tracker TUI.
//!
//! This library exposes the app's modules so integration tests can drive
//! the reducer through `tui_dispatch::EffectStore`.

pub mod action;
pub mod api;
pub mod cache;
pub mod dex;
pub mod effect;
pub mod marks;
pub mod persist;
pub mod reducer;
pub mod state;
pub mod ui;
