//! # Router
//!
//! The router resolves paths through the route tree and drives navigation.
//!
//! # Queries
//!
//! [`routes_for_path`], [`canonical_path_for_path`], [`targets_for_path`]
//! and [`params`] are pure functions of the route tree: nothing is cached
//! and calling them never changes the router.
//!
//! # Navigation
//!
//! [`navigate_to`] is the only entry point that mutates: it pushes the path
//! onto history, relinks [`Outlets`], runs lifecycle diffing between the old
//! and new path (see [`Transition`]), and renders the application.
//!
//! [`routes_for_path`]: Router::routes_for_path
//! [`canonical_path_for_path`]: Router::canonical_path_for_path
//! [`targets_for_path`]: Router::targets_for_path
//! [`params`]: Router::params
//! [`navigate_to`]: Router::navigate_to

mod builder;
mod navigation;
mod transition;

pub use builder::{RouterBuilder, RouterConfig};
pub use navigation::Navigator;
pub use transition::Transition;

use burrow_core::{Application, History, Location, Outlets, Params, TargetRef, path};
use burrow_std::{RouteCollection, RouteMatch};

/// A nested client-side router bound to a host location and history.
///
/// Built with [`Router::builder`].
pub struct Router {
    location: Box<dyn Location>,
    history: Box<dyn History>,
    application: Option<Box<dyn Application>>,
    routes: RouteCollection,
    outlets: Outlets,
    config: RouterConfig,
    pending: Navigator,
}

impl Router {
    /// Start building a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The chain of routes `path` resolves to, root-first.
    pub fn routes_for_path(&self, path: &str) -> RouteMatch<'_> {
        self.routes.resolve(path::segments(path))
    }

    /// The pattern form of `path`, e.g. `/users/:id` for `/users/42`.
    ///
    /// Empty when nothing matches.
    pub fn canonical_path_for_path(&self, path: &str) -> String {
        self.routes_for_path(path).canonical_path()
    }

    /// The targets `path` activates, root-first.
    pub fn targets_for_path(&self, path: &str) -> Vec<TargetRef> {
        self.routes_for_path(path).targets()
    }

    /// Dynamic segment values of `path`, aligned by index with its
    /// canonical path.
    pub fn params(&self, path: &str) -> Params {
        let canonical = self.canonical_path_for_path(path);
        let canonical_len = path::segments(&canonical).len();
        let literal_len = path::segments(path).len();
        if canonical_len > literal_len {
            log_warn!(
                path,
                canonical = %canonical,
                "canonical path is longer than the path; trailing params left unbound"
            );
        }
        path::extract_params(path, &canonical)
    }

    /// The location's current path.
    pub fn current_path(&self) -> String {
        self.location.path()
    }

    /// The location's full current address.
    pub fn current_url(&self) -> String {
        self.location.href()
    }

    /// Params of the current path.
    pub fn current_params(&self) -> Params {
        self.params(&self.current_path())
    }

    /// Canonical form of the current path.
    pub fn current_canonical_path(&self) -> String {
        self.canonical_path_for_path(&self.current_path())
    }

    /// The route tree.
    pub fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    /// The current outlet links.
    pub fn outlets(&self) -> &Outlets {
        &self.outlets
    }

    /// The active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// The bound application.
    pub fn application(&self) -> Option<&dyn Application> {
        self.application.as_deref()
    }

    /// Bind `application`, returning the one it replaces.
    pub fn set_application<A>(&mut self, application: A) -> Option<Box<dyn Application>>
    where
        A: Application + 'static,
    {
        self.application.replace(Box::new(application))
    }

    /// Unbind the application.
    pub fn take_application(&mut self) -> Option<Box<dyn Application>> {
        self.application.take()
    }

    // ========================================================================
    // Outlets
    // ========================================================================

    /// Relink outlets for the current path.
    pub fn set_outlets(&mut self) {
        let targets = self.targets_for_path(&self.current_path());
        self.set_outlets_for(targets);
    }

    /// Relink outlets over `targets`, root-first.
    ///
    /// Each target's outlet becomes the target after it and the last one's
    /// is cleared. The root outlet becomes the first target, or is cleared
    /// when `targets` is empty.
    pub fn set_outlets_for(&mut self, targets: Vec<TargetRef>) {
        log_debug!(depth = targets.len(), "relinking outlets");
        self.outlets = Outlets::from_chain(targets);
    }

    fn render_application(&mut self) {
        match self.application.as_mut() {
            Some(app) if app.has_component() => app.render(&self.outlets),
            Some(_) => log_trace!("no root component; render skipped"),
            None => log_trace!("no application bound; render skipped"),
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("outlets", &self.outlets)
            .field("config", &self.config)
            .field("application", &self.application.is_some())
            .finish_non_exhaustive()
    }
}
