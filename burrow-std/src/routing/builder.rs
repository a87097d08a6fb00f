//! Route definition block.

use crate::routing::{collection::RouteCollection, route::Route};
use burrow_core::{RouteError, TargetRef, path};

/// Builds a [`RouteCollection`] from a nested definition block.
///
/// The first invalid definition is kept and reported by [`build`]; later
/// definitions are ignored once one has failed.
///
/// # Example
///
/// ```rust
/// use burrow_std::{RouteCollection, testing::RecordingTarget};
///
/// let users = RecordingTarget::new("users");
/// let user = RecordingTarget::new("user");
/// let settings = RecordingTarget::new("settings");
///
/// let mut routes = RouteCollection::builder();
/// routes.nest("users", users.handle(), |r| {
///     r.route(":id", user.handle());
/// });
/// routes.namespace("admin", |r| {
///     r.route("settings", settings.handle());
/// });
/// let routes = routes.build().unwrap();
///
/// assert_eq!(routes.resolve(["users", "42"]).canonical_path(), "/users/:id");
/// assert_eq!(routes.resolve(["settings"]).canonical_path(), "/admin/settings");
/// ```
///
/// [`build`]: RoutesBuilder::build
#[derive(Debug, Default)]
pub struct RoutesBuilder {
    namespace: Option<String>,
    collection: RouteCollection,
    error: Option<RouteError>,
}

impl RoutesBuilder {
    /// Create an empty definition block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `target` with no nested routes.
    pub fn route(&mut self, key: impl Into<String>, target: TargetRef) -> &mut Self {
        self.nest(key, target, |_| {})
    }

    /// Bind `key` to `target` and define its nested routes.
    pub fn nest<F>(&mut self, key: impl Into<String>, target: TargetRef, children: F) -> &mut Self
    where
        F: FnOnce(&mut RoutesBuilder),
    {
        if self.error.is_some() {
            return self;
        }

        let key = key.into();
        let result = validate_key(&key).and_then(|()| {
            let mut nested = RoutesBuilder::new();
            children(&mut nested);
            let children = nested.build()?;

            #[cfg(feature = "tracing")]
            {
                tracing::trace!(key = %key, namespace = ?self.namespace, "route defined");
            }

            self.collection
                .insert(Route::new(key, self.namespace.clone(), target, children))
        });

        if let Err(err) = result {
            self.error = Some(err);
        }
        self
    }

    /// Define routes whose canonical paths are prefixed with `namespace`.
    ///
    /// The routes join this level of the tree; the namespace changes only
    /// their canonical path, not what they match. Namespaces nest.
    pub fn namespace<F>(&mut self, namespace: &str, routes: F) -> &mut Self
    where
        F: FnOnce(&mut RoutesBuilder),
    {
        if self.error.is_some() {
            return self;
        }

        let parts = path::segments(namespace);
        if parts.is_empty() {
            self.error = Some(RouteError::InvalidNamespace(namespace.to_string()));
            return self;
        }

        let joined = parts.join("/");
        let scoped = match &self.namespace {
            Some(outer) => format!("{outer}/{joined}"),
            None => joined,
        };
        let previous = self.namespace.replace(scoped);
        routes(self);
        self.namespace = previous;
        self
    }

    /// Finish the block.
    pub fn build(self) -> Result<RouteCollection, RouteError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.collection),
        }
    }
}

fn validate_key(key: &str) -> Result<(), RouteError> {
    if key.is_empty() {
        return Err(RouteError::EmptyKey);
    }
    if key.contains(path::SEPARATOR) {
        return Err(RouteError::InvalidKey(key.to_string()));
    }
    if path::param_name(key) == Some("") {
        return Err(RouteError::UnnamedParam(key.to_string()));
    }
    Ok(())
}
