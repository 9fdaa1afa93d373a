//! Common utilities module
//!
//! Shared error type used by every stage of the height-map pipeline.

pub mod error;

pub use error::{ConversionError, Result};
