//! # Route Tree
//!
//! Routes are nested: every [`Route`] binds one path segment to a target
//! and owns a child [`RouteCollection`]. Resolving a path descends one
//! level per segment and yields the chain of matched routes, root-first.
//!
//! # Matching
//!
//! | Key | Matches | Priority |
//! |-----|---------|----------|
//! | `users` | the literal segment `users` | first |
//! | `:id` | any segment | when no literal matches |
//!
//! A level holds at most one dynamic route; a second one is rejected when
//! the tree is defined. Matching stops at the first segment nothing
//! matches, so an unknown path yields a truncated or empty chain rather
//! than an error.

mod builder;
mod collection;
mod route;

pub use builder::RoutesBuilder;
pub use collection::{RouteCollection, RouteMatch};
pub use route::Route;
