//! Testing utilities for Burrow.
//!
//! This module provides recording collaborators to make testing routes and
//! navigation easier.
//!
//! # Features
//!
//! - [`CallLog`]: An ordered log of lifecycle calls, shareable across targets
//! - [`RecordingTarget`]: A target that records its hook calls
//! - [`RecordingApplication`]: An application that records every render

use burrow_core::{Application, Lifecycle, Outlets, Target, TargetRef};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// An ordered log of lifecycle calls.
///
/// Entries read `name.on_route_from` or `name.on_route_to`. Clones share
/// the same log, so several targets can record into one sequence.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, entry: String) {
        self.entries.lock().unwrap().push(entry);
    }

    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Target
// ============================================================================

struct Recorder {
    name: String,
    lifecycle: Lifecycle,
    log: CallLog,
}

impl Target for Recorder {
    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn on_route_from(&self) {
        self.log.record(format!("{}.on_route_from", self.name));
    }

    fn on_route_to(&self) {
        self.log.record(format!("{}.on_route_to", self.name));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A target that records every lifecycle call it receives.
///
/// # Example
///
/// ```rust
/// use burrow_std::testing::{CallLog, RecordingTarget};
///
/// let log = CallLog::new();
/// let users = RecordingTarget::with_log("users", &log);
/// let user = RecordingTarget::with_log("user", &log);
///
/// // Bind `users.handle()` and `user.handle()` to routes, navigate...
///
/// assert!(log.is_empty());
/// assert_eq!(users.calls(), 0);
/// ```
#[derive(Clone)]
pub struct RecordingTarget {
    inner: Arc<Recorder>,
}

impl RecordingTarget {
    /// Create a target with its own log, responding to every hook.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_log(name, &CallLog::new())
    }

    /// Create a target recording into a shared `log`.
    pub fn with_log(name: impl Into<String>, log: &CallLog) -> Self {
        Self::build(name.into(), Lifecycle::all(), log.clone())
    }

    /// Create a target that only exposes the hooks in `lifecycle`.
    pub fn with_lifecycle(name: impl Into<String>, lifecycle: Lifecycle, log: &CallLog) -> Self {
        Self::build(name.into(), lifecycle, log.clone())
    }

    fn build(name: String, lifecycle: Lifecycle, log: CallLog) -> Self {
        Self {
            inner: Arc::new(Recorder {
                name,
                lifecycle,
                log,
            }),
        }
    }

    /// The handle to bind to a route. Every call returns the same target.
    pub fn handle(&self) -> TargetRef {
        self.inner.clone()
    }

    /// The log this target records into.
    pub fn log(&self) -> &CallLog {
        &self.inner.log
    }

    /// Number of calls this target recorded.
    pub fn calls(&self) -> usize {
        self.calls_to("on_route_from") + self.calls_to("on_route_to")
    }

    /// Number of `hook` calls this target recorded.
    pub fn calls_to(&self, hook: &str) -> usize {
        let entry = format!("{}.{hook}", self.inner.name);
        self.inner
            .log
            .entries()
            .iter()
            .filter(|e| **e == entry)
            .count()
    }
}

// ============================================================================
// Recording Application
// ============================================================================

/// An application that records the outlet chain of every render.
///
/// Clones share state, so a test can keep one clone while the router owns
/// another.
#[derive(Clone)]
pub struct RecordingApplication {
    renders: Arc<Mutex<Vec<Vec<String>>>>,
    component: Arc<AtomicBool>,
}

impl Default for RecordingApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingApplication {
    /// Create an application with a mounted root component.
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
            component: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create an application with no root component.
    pub fn without_component() -> Self {
        let app = Self::new();
        app.set_component(false);
        app
    }

    /// Mount or unmount the root component.
    pub fn set_component(&self, mounted: bool) {
        self.component.store(mounted, Ordering::SeqCst);
    }

    /// Target names of every rendered outlet chain, oldest first.
    pub fn renders(&self) -> Vec<Vec<String>> {
        self.renders.lock().unwrap().clone()
    }

    /// Get the number of renders.
    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }
}

impl Application for RecordingApplication {
    fn has_component(&self) -> bool {
        self.component.load(Ordering::SeqCst)
    }

    fn render(&mut self, outlets: &Outlets) {
        let chain = outlets.chain().iter().map(|t| t.name().to_string()).collect();
        self.renders.lock().unwrap().push(chain);
    }
}
