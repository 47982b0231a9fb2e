//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

pub mod distance;
mod word;

pub use word::{Word, WordError};
