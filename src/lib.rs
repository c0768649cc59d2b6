//! Student roster cards: load a manifest of per-student JSON files, validate and normalize
//! each record, and render the roster as HTML.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod fetch;
pub mod logging;
pub mod rng;
pub mod server;
pub mod view;
