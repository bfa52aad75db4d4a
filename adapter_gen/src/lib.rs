//! Adapter Generation Pipeline
//!
//! Discovers the builder shape of target value types from their
//! descriptors and generates bidirectional JSON adapters for them.
//! The pipeline runs shape resolution, field binding, classification,
//! and emission, in that order, once per target.

pub mod binder;
pub mod classify;
pub mod cmds;
pub mod codegen;
pub mod runtime;
pub mod shape;

// Re-export adapter_types for convenience
pub use adapter_types;
