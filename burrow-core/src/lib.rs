//! # burrow-core
//!
//! Core traits and leaf types for the Burrow nested router.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! components and host bindings that don't need the route matcher or the
//! router itself.
//!
//! # Collaborators
//!
//! The router never owns the things it drives. Everything it talks to is
//! described here as a trait:
//!
//! - [`Target`]: the component bound to a route. It is notified through
//!   `on_route_from`/`on_route_to` when a navigation deactivates or
//!   activates it, gated by its [`Lifecycle`] capabilities.
//! - [`Location`] and [`History`]: the host's address bar and session
//!   history (a browser window, or an in-memory stand-in).
//! - [`Application`]: the owner of the root component, rendered with the
//!   current [`Outlets`] after every navigation.
//!
//! # Data
//!
//! - [`Params`]: dynamic segment values for one path, recomputed per query.
//! - [`path`]: segment splitting and positional parameter extraction.
//!
//! # Error Types
//!
//! - [`BurrowError`] - Top-level error type
//! - [`RouteError`] - Route definition errors
//! - [`RouterBuildError`] - Router construction errors
//! - [`NavigationError`] - Navigation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod application;
mod error;
mod location;
mod params;
pub mod path;
mod target;

// Re-exports
pub use application::{Application, Outlets};
pub use error::{BurrowError, NavigationError, RouteError, RouterBuildError};
pub use location::{History, Location};
pub use params::Params;
pub use target::{Lifecycle, Target, TargetRef, difference, position_of, same_target};
