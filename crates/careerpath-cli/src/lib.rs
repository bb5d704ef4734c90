//! # careerpath-cli
//!
//! Command-line interface for the careerpath service.
//!
//! ## Commands
//!
//! - `careerpath serve` — Start the HTTP API
//! - `careerpath analyze` — Analyze a piece of text once
//! - `careerpath skills` — List or import skill records
//! - `careerpath config` — Show the effective configuration

pub mod commands;

pub use commands::Cli;
