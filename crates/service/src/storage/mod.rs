//! Storage abstractions for service layer
//!
//! Holds saved records in memory, one ordered space per model type.

pub mod memory_store;

pub use memory_store::Store;
