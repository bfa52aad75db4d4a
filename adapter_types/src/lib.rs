//! Adapter Descriptor Type Definitions
//!
//! This crate contains the core descriptor types for the adapter
//! generation system. It provides pure data structures describing
//! target value types and their members without any file I/O or code
//! generation logic.

pub mod types;

// Re-export commonly used types at the crate root
pub use types::*;
