//! # Gamedata Common Library
//!
//! Shared code for the game data generators including:
//! - Error taxonomy (fatal source errors vs. counted exclusions)
//! - Remote and local JSON source loading
//! - Pretty JSON output writing (atomic replace)
//! - Stable display-field sorting

pub mod error;
pub mod fetch;
pub mod output;
pub mod sort;

pub use error::{Error, Result};
