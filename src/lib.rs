//! lumina - Personal health logging
//!
//! A command-line daily log for mood, energy, sleep and the interventions
//! that support them, with history, trends and a home summary.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LuminaError;
