//! Terminal viewer for a city weather API.
//!
//! The crate splits into a fetch component ([`api`]), an observable state
//! cell holding the current forecast ([`state`]), the data model
//! ([`model`]), presentation lookup tables ([`assets`]), and a TUI view
//! layer ([`app`]).

pub mod api;
pub mod app;
pub mod assets;
pub mod cli;
pub mod model;
pub mod state;
