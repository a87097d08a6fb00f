//! # burrow-std
//!
//! Standard implementations for the Burrow nested router.
//!
//! This crate provides:
//! - **Route tree**: [`Route`], [`RouteCollection`], [`RoutesBuilder`], [`RouteMatch`]
//! - **In-memory host**: [`MemoryBrowser`], [`MemoryLocation`], [`MemoryHistory`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use burrow_core;

// Modules
pub mod memory;
pub mod routing;
pub mod testing;

pub use memory::{MemoryBrowser, MemoryHistory, MemoryLocation};
pub use routing::{Route, RouteCollection, RouteMatch, RoutesBuilder};
