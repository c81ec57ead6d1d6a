//! # Chroma Core
//!
//! Error types and result utilities shared by every Chroma crate.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::{Result, ResultExt};
