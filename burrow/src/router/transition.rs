//! Lifecycle diffing between two paths.

use crate::router::Router;
use burrow_core::{Lifecycle, TargetRef, difference, path, position_of};

/// Which targets a navigation deactivates, activates, or refreshes.
///
/// - `navigating_from`: active before, not after (old chain order).
/// - `navigating_to`: active after, not before (new chain order).
/// - `refreshed`: active on both sides, but bound to a dynamic segment
///   whose value changed, e.g. `:id` going from `/users/1` to `/users/2`.
///   These are treated as replaced: exit, then enter.
///
/// A target appears in at most one of the three lists.
#[derive(Clone, Default)]
pub struct Transition {
    navigating_from: Vec<TargetRef>,
    navigating_to: Vec<TargetRef>,
    refreshed: Vec<TargetRef>,
    changed_params: Vec<String>,
}

impl Transition {
    /// Targets being deactivated.
    pub fn navigating_from(&self) -> &[TargetRef] {
        &self.navigating_from
    }

    /// Targets being activated.
    pub fn navigating_to(&self) -> &[TargetRef] {
        &self.navigating_to
    }

    /// Targets kept active whose dynamic segment changed.
    pub fn refreshed(&self) -> &[TargetRef] {
        &self.refreshed
    }

    /// Param names whose value changed, in path order.
    pub fn changed_params(&self) -> &[String] {
        &self.changed_params
    }

    /// Whether the navigation notifies nobody.
    pub fn is_empty(&self) -> bool {
        self.navigating_from.is_empty() && self.navigating_to.is_empty() && self.refreshed.is_empty()
    }

    /// Fire the hooks: every exit, then every enter, then each refreshed
    /// target's exit and enter in turn.
    pub(crate) fn dispatch(&self) {
        for target in &self.navigating_from {
            route_from(target);
        }
        for target in &self.navigating_to {
            route_to(target);
        }
        for target in &self.refreshed {
            route_from(target);
            route_to(target);
        }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |targets: &[TargetRef]| -> Vec<String> {
            targets.iter().map(|t| t.name().to_string()).collect()
        };
        f.debug_struct("Transition")
            .field("navigating_from", &names(&self.navigating_from))
            .field("navigating_to", &names(&self.navigating_to))
            .field("refreshed", &names(&self.refreshed))
            .field("changed_params", &self.changed_params)
            .finish()
    }
}

fn route_from(target: &TargetRef) {
    if target.lifecycle().contains(Lifecycle::ROUTE_FROM) {
        log_debug!(target = target.name(), hook = "on_route_from", "dispatching");
        target.on_route_from();
    } else {
        log_trace!(target = target.name(), hook = "on_route_from", "skipped");
    }
}

fn route_to(target: &TargetRef) {
    if target.lifecycle().contains(Lifecycle::ROUTE_TO) {
        log_debug!(target = target.name(), hook = "on_route_to", "dispatching");
        target.on_route_to();
    } else {
        log_trace!(target = target.name(), hook = "on_route_to", "skipped");
    }
}

impl Router {
    /// Compute the lifecycle diff of navigating from `previous_path` to
    /// `path`, without firing anything.
    pub fn transition(&self, path: &str, previous_path: &str) -> Transition {
        let routes = self.routes_for_path(path);
        let targets = routes.targets();
        let old_targets = self.targets_for_path(previous_path);
        let new_params = self.params(path);
        let old_params = self.params(previous_path);

        let navigating_from = difference(&old_targets, &targets);
        let navigating_to = difference(&targets, &old_targets);

        let changed_params: Vec<String> = new_params
            .changed_since(&old_params)
            .map(str::to_string)
            .collect();

        let mut refreshed: Vec<TargetRef> = Vec::new();
        for name in &changed_params {
            let key = format!("{}{name}", path::DYNAMIC_PREFIX);
            let Some(route) = routes.find(&key) else {
                continue;
            };
            let target = route.target();
            let notified = [&navigating_from, &navigating_to, &refreshed]
                .iter()
                .any(|list| position_of(list, target).is_some());
            if !notified {
                refreshed.push(target.clone());
            }
        }

        Transition {
            navigating_from,
            navigating_to,
            refreshed,
            changed_params,
        }
    }

    /// Notify targets of the navigation from `previous_path` to `path` and
    /// return what was notified.
    pub fn trigger_routing_callbacks(&self, path: &str, previous_path: &str) -> Transition {
        let transition = self.transition(path, previous_path);
        log_debug!(
            path,
            previous = previous_path,
            from = transition.navigating_from.len(),
            to = transition.navigating_to.len(),
            refreshed = transition.refreshed.len(),
            "routing callbacks"
        );
        transition.dispatch();
        transition
    }
}
