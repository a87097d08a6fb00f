//! Router construction.

use crate::router::{Navigator, Router};
use burrow_core::{Application, History, Location, Outlets, RouteError, RouterBuildError};
use burrow_std::{MemoryBrowser, RouteCollection, RoutesBuilder};

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// How many queued navigations one call may drain before giving up.
    pub max_redirects: usize,
    /// Whether navigation re-renders the application.
    pub render_on_navigate: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_redirects: 16,
            render_on_navigate: true,
        }
    }
}

/// Builder for [`Router`].
///
/// A location and a history are required; everything else is optional.
#[derive(Default)]
pub struct RouterBuilder {
    location: Option<Box<dyn Location>>,
    history: Option<Box<dyn History>>,
    application: Option<Box<dyn Application>>,
    routes: Option<Result<RouteCollection, RouteError>>,
    navigator: Navigator,
    config: RouterConfig,
}

impl RouterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `location` as the location provider.
    pub fn location<L: Location + 'static>(mut self, location: L) -> Self {
        self.location = Some(Box::new(location));
        self
    }

    /// Use `history` as the history provider.
    pub fn history<H: History + 'static>(mut self, history: H) -> Self {
        self.history = Some(Box::new(history));
        self
    }

    /// Use both halves of an in-memory session.
    pub fn memory(self, browser: &MemoryBrowser) -> Self {
        self.location(browser.location()).history(browser.history())
    }

    /// Bind the application rendered after each navigation.
    pub fn application<A: Application + 'static>(mut self, application: A) -> Self {
        self.application = Some(Box::new(application));
        self
    }

    /// Define the route tree.
    pub fn routes<F>(mut self, define: F) -> Self
    where
        F: FnOnce(&mut RoutesBuilder),
    {
        let mut builder = RoutesBuilder::new();
        define(&mut builder);
        self.routes = Some(builder.build());
        self
    }

    /// Use an already built route tree.
    pub fn collection(mut self, routes: RouteCollection) -> Self {
        self.routes = Some(Ok(routes));
        self
    }

    /// Share `navigator`'s queue with the router.
    ///
    /// Targets are defined before the router exists, so a target that
    /// redirects is handed a clone of this navigator up front.
    pub fn navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = navigator;
        self
    }

    /// Set the bound on queued navigations.
    pub fn max_redirects(mut self, limit: usize) -> Self {
        self.config.max_redirects = limit;
        self
    }

    /// Choose whether navigation re-renders the application.
    pub fn render_on_navigate(mut self, render: bool) -> Self {
        self.config.render_on_navigate = render;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the router.
    ///
    /// Outlets are linked for the location's current path; no lifecycle
    /// hooks run.
    pub fn build(self) -> Result<Router, RouterBuildError> {
        let location = self.location.ok_or(RouterBuildError::MissingLocation)?;
        let history = self.history.ok_or(RouterBuildError::MissingHistory)?;
        let routes = self.routes.transpose()?.unwrap_or_default();

        let mut router = Router {
            location,
            history,
            application: self.application,
            routes,
            outlets: Outlets::default(),
            config: self.config,
            pending: self.navigator,
        };
        router.set_outlets();

        log_debug!(
            routes = router.routes.len(),
            path = %router.current_path(),
            "router built"
        );
        Ok(router)
    }
}
