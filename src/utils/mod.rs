//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Span, length and width measurement

pub mod error;
pub mod measure;

// Re-export commonly used items
pub use error::{GridError, GridResult};
pub use measure::{parse_length, parse_span, string_width};
