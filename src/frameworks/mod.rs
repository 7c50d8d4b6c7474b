// Frameworks: runtime wiring, environment configuration and the binary entry point.

pub mod cli;
pub mod config;
pub mod factories;
