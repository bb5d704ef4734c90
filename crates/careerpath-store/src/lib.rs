//! # careerpath-store
//!
//! Persistence backends for skill records:
//!
//! - **SQLite**: the production store, opened from a connection URI.
//! - **Memory**: a vector-backed store for tests and seed-file runs.
//!
//! Both implement [`careerpath_core::SkillStore`].

pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::MemorySkillStore;
pub use seed::{load_seed_file, parse_seed};
pub use sqlite::{SqliteSkillStore, StoreLocation};
