//! # careerpath-core
//!
//! Core types and logic for the careerpath skill insight service.
//! This crate defines the data model, the persistence seam, the skill
//! matcher, and the analyzer that ties them together.

pub mod analyzer;
pub mod error;
pub mod matcher;
pub mod store;
pub mod types;

pub use analyzer::Analyzer;
pub use error::{CareerError, Result};
pub use matcher::{Vocabulary, extract_skills, normalize};
pub use store::SkillStore;
pub use types::*;
