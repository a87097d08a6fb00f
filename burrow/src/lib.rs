//! # burrow - Nested Client-Side Router
//!
//! `burrow` maps a URL path to a chain of nested route targets, extracts
//! dynamic path parameters, and notifies targets when a navigation changes
//! which of them are active.
//!
//! ## Quick Start
//!
//! ```rust
//! use burrow::{MemoryBrowser, Router, testing::{CallLog, RecordingTarget}};
//!
//! let log = CallLog::new();
//! let users = RecordingTarget::with_log("users", &log);
//! let user = RecordingTarget::with_log("user", &log);
//!
//! let browser = MemoryBrowser::new("/");
//! let mut router = Router::builder()
//!     .memory(&browser)
//!     .routes(|r| {
//!         r.nest("users", users.handle(), |r| {
//!             r.route(":id", user.handle());
//!         });
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(router.canonical_path_for_path("/users/42"), "/users/:id");
//! assert_eq!(router.params("/users/42").get("id"), Some("42"));
//!
//! router.navigate_to("/users/1").unwrap();
//! router.navigate_to("/users/2").unwrap();
//! assert_eq!(
//!     log.entries(),
//!     vec![
//!         "users.on_route_to",
//!         "user.on_route_to",
//!         "user.on_route_from",
//!         "user.on_route_to",
//!     ]
//! );
//! ```
//!
//! ## Layout
//!
//! - [`burrow_core`]: collaborator traits ([`Target`], [`Location`],
//!   [`History`], [`Application`]) and leaf types.
//! - [`burrow_std`]: the route tree ([`RouteCollection`]) and an in-memory
//!   host ([`MemoryBrowser`]).
//! - this crate: the [`Router`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

#[macro_use]
mod log;

mod router;

pub use router::{Navigator, Router, RouterBuilder, RouterConfig, Transition};

pub use burrow_core::{
    // Rendering
    Application,
    // Error types
    BurrowError,
    // Host
    History,
    // Target
    Lifecycle,
    Location,
    NavigationError,
    Outlets,
    // Params
    Params,
    RouteError,
    RouterBuildError,
    Target,
    TargetRef,
    path,
    same_target,
};

pub use burrow_std::{
    MemoryBrowser, MemoryHistory, MemoryLocation, Route, RouteCollection, RouteMatch,
    RoutesBuilder,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use burrow_std::testing::*;
}

/// Prelude module - common imports for Burrow.
///
/// # Usage
///
/// ```rust
/// use burrow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Application, History, Lifecycle, Location, Navigator, Params, Router, Target, TargetRef,
    };
}
