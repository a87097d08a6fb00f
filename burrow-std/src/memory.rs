//! In-memory location and history.
//!
//! A [`MemoryBrowser`] stands in for a browser window outside the browser:
//! on a server, in a native shell, or in tests. Its [`MemoryLocation`] and
//! [`MemoryHistory`] halves share one session, so pushing onto the history
//! moves the location the same way `history.pushState` does.

use burrow_core::{History, Location};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct Session {
    origin: String,
    entries: Vec<String>,
    cursor: usize,
    page_loads: Vec<String>,
}

impl Session {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
    }
}

/// A shared in-memory browsing session.
#[derive(Debug, Clone)]
pub struct MemoryBrowser {
    session: Arc<Mutex<Session>>,
}

impl MemoryBrowser {
    /// Start a session at `initial_path` under `http://localhost`.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::with_origin("http://localhost", initial_path)
    }

    /// Start a session at `initial_path` under `origin`.
    pub fn with_origin(origin: impl Into<String>, initial_path: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self {
            session: Arc::new(Mutex::new(Session {
                origin,
                entries: vec![initial_path.into()],
                cursor: 0,
                page_loads: Vec::new(),
            })),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The location half of this session.
    pub fn location(&self) -> MemoryLocation {
        MemoryLocation {
            browser: self.clone(),
        }
    }

    /// The history half of this session.
    pub fn history(&self) -> MemoryHistory {
        MemoryHistory {
            browser: self.clone(),
        }
    }

    /// The current path.
    pub fn path(&self) -> String {
        self.session().current().to_string()
    }

    /// Every history entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.session().entries.clone()
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.session().cursor
    }

    /// URLs handed to [`Location::assign`], oldest first.
    pub fn page_loads(&self) -> Vec<String> {
        self.session().page_loads.clone()
    }

    /// Step forward one entry, undoing a `back`. Stays put at the newest entry.
    pub fn forward(&self) {
        let mut session = self.session();
        if session.cursor + 1 < session.entries.len() {
            session.cursor += 1;
        }
    }
}

/// The location half of a [`MemoryBrowser`].
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    browser: MemoryBrowser,
}

impl Location for MemoryLocation {
    fn path(&self) -> String {
        self.browser.path()
    }

    fn href(&self) -> String {
        let session = self.browser.session();
        format!("{}{}", session.origin, session.current())
    }

    fn assign(&mut self, url: &str) {
        let mut session = self.browser.session();
        session.page_loads.push(url.to_string());
        let path = path_of(url);
        session.push(path);
    }
}

/// The history half of a [`MemoryBrowser`].
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    browser: MemoryBrowser,
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        self.browser.session().push(path.to_string());
    }

    fn back(&mut self) {
        let mut session = self.browser.session();
        session.cursor = session.cursor.saturating_sub(1);
    }
}

/// The path part of `url`: everything from the first `/` after the host,
/// or `/` for a bare host. Inputs without a scheme are already paths.
fn path_of(url: &str) -> String {
    let Some((_, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.find('/') {
        Some(index) => rest[index..].to_string(),
        None => "/".to_string(),
    }
}
