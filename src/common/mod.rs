//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and the [`SimulationConfig`] run description
//! - Error types
//! - The [`PageId`] identifier

pub mod config;
pub mod error;
mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use page_id::{parse_references, PageId};
