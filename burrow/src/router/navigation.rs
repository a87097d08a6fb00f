//! Navigation entry points and the redirect queue.
//!
//! Lifecycle hooks run while the router is mutably borrowed, so they can't
//! call back into it. A target that wants to redirect holds a [`Navigator`]
//! instead: its requests are queued and drained in FIFO order once the
//! current navigation has finished all of its steps.

use crate::router::Router;
use burrow_core::NavigationError;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// A cloneable handle for requesting navigation from inside lifecycle hooks.
///
/// # Example
///
/// ```rust
/// use burrow::{MemoryBrowser, Navigator, Router, Target};
///
/// struct LegacyPage {
///     navigator: Navigator,
/// }
///
/// impl Target for LegacyPage {
///     fn on_route_to(&self) {
///         self.navigator.navigate_to("/home");
///     }
/// }
///
/// let browser = MemoryBrowser::new("/");
/// let router = Router::builder().memory(&browser).build().unwrap();
/// let legacy = std::sync::Arc::new(LegacyPage { navigator: router.navigator() });
/// # let _ = legacy;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    queue: Arc<Mutex<VecDeque<String>>>,
}

impl Navigator {
    fn queue(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a navigation to `path`.
    pub fn navigate_to(&self, path: impl Into<String>) {
        self.queue().push_back(path.into());
    }

    /// Number of queued navigations.
    pub fn pending(&self) -> usize {
        self.queue().len()
    }

    fn pop(&self) -> Option<String> {
        self.queue().pop_front()
    }

    fn clear(&self) {
        self.queue().clear();
    }
}

impl Router {
    /// Navigate to `path` inside the application.
    ///
    /// Pushes `path` onto history, relinks outlets, runs lifecycle diffing
    /// from the previous path, and re-renders the application. Navigations
    /// queued through a [`Navigator`] meanwhile run afterwards.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), NavigationError> {
        self.perform(path);
        self.drain_pending().map(|_| ())
    }

    /// Leave the application with a full page load of `url`.
    ///
    /// No diffing and no render.
    pub fn navigate_to_remote(&mut self, url: &str) {
        log_debug!(url, "remote navigation");
        self.location.assign(url);
    }

    /// Step back in history.
    ///
    /// Diffing is left to whoever observes the location change; see
    /// [`location_changed`](Router::location_changed).
    pub fn back(&mut self) {
        log_debug!("history back");
        self.history.back();
    }

    /// React to a location change the router did not make itself, such as
    /// the user pressing the back button.
    ///
    /// Relinks outlets for the current path, runs diffing from
    /// `previous_path`, and re-renders.
    pub fn location_changed(&mut self, previous_path: &str) -> Result<(), NavigationError> {
        let path = self.current_path();
        log_debug!(path = %path, previous = previous_path, "location changed");

        self.set_outlets();
        self.trigger_routing_callbacks(&path, previous_path);
        self.render_if_configured();
        self.drain_pending().map(|_| ())
    }

    /// A handle for queueing navigations, typically from lifecycle hooks.
    pub fn navigator(&self) -> Navigator {
        self.pending.clone()
    }

    /// Run queued navigations, returning how many ran.
    ///
    /// Stops with [`NavigationError::RedirectLimit`] once more than
    /// `max_redirects` have been drained, discarding the rest of the queue.
    pub fn drain_pending(&mut self) -> Result<usize, NavigationError> {
        let limit = self.config.max_redirects;
        let mut drained = 0;

        while let Some(path) = self.pending.pop() {
            if drained == limit {
                log_warn!(limit, path = %path, "redirect limit exceeded");
                self.pending.clear();
                return Err(NavigationError::RedirectLimit { limit, path });
            }
            drained += 1;
            self.perform(&path);
        }

        Ok(drained)
    }

    fn perform(&mut self, path: &str) {
        let old_path = self.current_path();
        log_debug!(path, previous = %old_path, "navigating");

        self.history.push(path);
        let targets = self.targets_for_path(path);
        self.set_outlets_for(targets);
        self.trigger_routing_callbacks(path, &old_path);
        self.render_if_configured();
    }

    fn render_if_configured(&mut self) {
        if self.config.render_on_navigate {
            self.render_application();
        }
    }
}
