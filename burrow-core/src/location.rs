//! Host location and history collaborators.
//!
//! In a browser these wrap `window.location` and `window.history`. The
//! router reads the current path before a navigation, pushes the new path,
//! and hands full page loads straight to the location.

/// The host's current address.
pub trait Location {
    /// The path component of the current address, e.g. `/users/42`.
    fn path(&self) -> String;

    /// The full current address, e.g. `https://example.com/users/42`.
    fn href(&self) -> String;

    /// Load `url` as a full page navigation, leaving the application.
    fn assign(&mut self, url: &str);
}

/// The host's session history.
pub trait History {
    /// Push `path` as a new entry and make it current.
    fn push(&mut self, path: &str);

    /// Step back one entry. Stays put at the first entry.
    fn back(&mut self);
}

impl<L: Location + ?Sized> Location for Box<L> {
    fn path(&self) -> String {
        (**self).path()
    }

    fn href(&self) -> String {
        (**self).href()
    }

    fn assign(&mut self, url: &str) {
        (**self).assign(url)
    }
}

impl<H: History + ?Sized> History for Box<H> {
    fn push(&mut self, path: &str) {
        (**self).push(path)
    }

    fn back(&mut self) {
        (**self).back()
    }
}
