//! A single node of the route tree.

use crate::routing::collection::RouteCollection;
use burrow_core::{TargetRef, path};

/// One node of the route tree.
///
/// Binds a segment key (a literal or `:name`) to a target, with an
/// optional namespace that only shows up in the canonical path.
pub struct Route {
    key: String,
    namespace: Option<String>,
    target: TargetRef,
    children: RouteCollection,
}

impl Route {
    pub(crate) fn new(
        key: String,
        namespace: Option<String>,
        target: TargetRef,
        children: RouteCollection,
    ) -> Self {
        Self {
            key,
            namespace,
            target,
            children,
        }
    }

    /// The segment key, e.g. `users` or `:id`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The namespace this route was declared under.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The bound target.
    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    /// Nested routes.
    pub fn children(&self) -> &RouteCollection {
        &self.children
    }

    /// Whether the key is a dynamic segment.
    pub fn is_dynamic(&self) -> bool {
        path::is_dynamic(&self.key)
    }

    /// The parameter name of a dynamic key.
    pub fn param_name(&self) -> Option<&str> {
        path::param_name(&self.key)
    }

    /// This route's contribution to a canonical path: `/namespace/key`,
    /// or `/key` without a namespace.
    pub fn canonical_segment(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("/{ns}/{}", self.key),
            None => format!("/{}", self.key),
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("key", &self.key)
            .field("namespace", &self.namespace)
            .field("target", &self.target.name())
            .field("children", &self.children.len())
            .finish()
    }
}
