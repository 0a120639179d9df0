//! grkit library — demo driver logic for the memory primitives.

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
