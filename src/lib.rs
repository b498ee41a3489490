//! Car Service Library
//!
//! A repair shop simulation that can run interactively on a console or headless.

pub mod console;
pub mod simulation;
