//! Segment-by-segment matcher over the route tree.

use crate::routing::{builder::RoutesBuilder, route::Route};
use burrow_core::{RouteError, TargetRef};
use std::collections::HashMap;

/// An ordered set of routes at one level of the tree.
///
/// Literal keys are indexed for exact lookup; the single dynamic route, if
/// any, is the fallback when no literal matches.
#[derive(Debug, Default)]
pub struct RouteCollection {
    routes: Vec<Route>,
    literals: HashMap<String, usize>,
    dynamic: Option<usize>,
}

impl RouteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a route definition block.
    pub fn builder() -> RoutesBuilder {
        RoutesBuilder::new()
    }

    pub(crate) fn insert(&mut self, route: Route) -> Result<(), RouteError> {
        let index = self.routes.len();

        if route.is_dynamic() {
            if let Some(existing) = self.dynamic {
                let existing = &self.routes[existing];
                if existing.key() == route.key() {
                    return Err(RouteError::DuplicateKey(route.key().to_string()));
                }
                return Err(RouteError::AmbiguousDynamic {
                    existing: existing.key().to_string(),
                    new: route.key().to_string(),
                });
            }
            self.dynamic = Some(index);
        } else {
            if self.literals.contains_key(route.key()) {
                return Err(RouteError::DuplicateKey(route.key().to_string()));
            }
            self.literals.insert(route.key().to_string(), index);
        }

        self.routes.push(route);
        Ok(())
    }

    /// The route a single segment selects at this level.
    ///
    /// An exact literal match wins over the dynamic route.
    pub fn get(&self, segment: &str) -> Option<&Route> {
        self.literals
            .get(segment)
            .or(self.dynamic.as_ref())
            .map(|&index| &self.routes[index])
    }

    /// The dynamic route at this level.
    pub fn dynamic(&self) -> Option<&Route> {
        self.dynamic.map(|index| &self.routes[index])
    }

    /// Resolve `segments`, descending one level per segment.
    ///
    /// Matching stops at the first segment with no route; the result is
    /// the chain matched so far.
    pub fn resolve<I>(&self, segments: I) -> RouteMatch<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut segments = segments.into_iter();
        let mut routes = Vec::new();
        let mut level = self;
        let mut requested = 0;

        while let Some(segment) = segments.next() {
            requested += 1;
            match level.get(segment.as_ref()) {
                Some(route) => {
                    routes.push(route);
                    level = route.children();
                }
                None => {
                    requested += segments.by_ref().count();
                    break;
                }
            }
        }

        RouteMatch { routes, requested }
    }

    /// Routes at this level in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Number of routes at this level.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether this level has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The chain of routes a path resolved to, root-first.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    routes: Vec<&'a Route>,
    requested: usize,
}

impl<'a> RouteMatch<'a> {
    /// The matched routes, root-first.
    pub fn routes(&self) -> &[&'a Route] {
        &self.routes
    }

    /// The matched routes' targets, root-first.
    pub fn targets(&self) -> Vec<TargetRef> {
        self.routes.iter().map(|r| r.target().clone()).collect()
    }

    /// The pattern form of the matched chain, e.g. `/users/:id`.
    ///
    /// Empty when nothing matched.
    pub fn canonical_path(&self) -> String {
        self.routes.iter().map(|r| r.canonical_segment()).collect()
    }

    /// The first matched route whose key is `key`.
    pub fn find(&self, key: &str) -> Option<&'a Route> {
        self.routes.iter().copied().find(|r| r.key() == key)
    }

    /// The innermost matched route.
    pub fn leaf(&self) -> Option<&'a Route> {
        self.routes.last().copied()
    }

    /// Whether every requested segment was matched.
    pub fn is_complete(&self) -> bool {
        self.routes.len() == self.requested
    }

    /// Number of matched routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for RouteMatch<'a> {
    type Item = &'a Route;
    type IntoIter = std::vec::IntoIter<&'a Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
