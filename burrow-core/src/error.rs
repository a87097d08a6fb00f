//! Error types for Burrow.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`BurrowError`] - Top-level error type for all Burrow operations
//! - [`RouteError`] - Errors while defining the route tree
//! - [`RouterBuildError`] - Errors while assembling a router
//! - [`NavigationError`] - Errors while draining queued navigations
//!
//! Unmatched paths are not errors: they resolve to empty or partial
//! results.

use thiserror::Error;

/// Top-level error type for all Burrow operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BurrowError {
    /// The route tree could not be defined.
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// The router could not be built.
    #[error("build error: {0}")]
    Build(#[from] RouterBuildError),

    /// A navigation could not be completed.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Errors raised while defining routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route key was empty.
    #[error("route key must not be empty")]
    EmptyKey,

    /// A route key spans more than one path segment.
    #[error("route key `{0}` must be a single path segment")]
    InvalidKey(String),

    /// A dynamic key carries no parameter name.
    #[error("dynamic segment `{0}` has no parameter name")]
    UnnamedParam(String),

    /// Route already exists at this level.
    #[error("route already exists for key: {0}")]
    DuplicateKey(String),

    /// A second dynamic route was added to a level that already has one.
    #[error("dynamic segment `{new}` conflicts with `{existing}` at the same level")]
    AmbiguousDynamic {
        /// The dynamic key already registered.
        existing: String,
        /// The rejected dynamic key.
        new: String,
    },

    /// A namespace had no usable segments.
    #[error("invalid namespace: `{0}`")]
    InvalidNamespace(String),
}

/// Errors raised while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// No location provider was supplied.
    #[error("router requires a location provider")]
    MissingLocation,

    /// No history provider was supplied.
    #[error("router requires a history provider")]
    MissingHistory,

    /// The route definition block failed.
    #[error(transparent)]
    Routes(#[from] RouteError),
}

/// Errors raised by navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Queued navigations kept arriving past the configured bound.
    #[error("redirect limit of {limit} exceeded while navigating to `{path}`")]
    RedirectLimit {
        /// The configured bound.
        limit: usize,
        /// The navigation that was refused.
        path: String,
    },
}
