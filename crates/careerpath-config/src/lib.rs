//! # careerpath-config
//!
//! Configuration for the careerpath service. Reads from `careerpath.toml`
//! and environment variables, with environment taking precedence.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::CareerConfig;
pub use schema::{ConfigWarning, LoggingConfig, ServerConfig, StoreConfig, WarningSeverity};
