//! The application side of rendering.
//!
//! After every navigation the router relinks [`Outlets`], the parent to
//! child relation over the active target chain, and asks the
//! [`Application`] to render with it. The relation is an index over the
//! chain the router holds, never pointers stored on the targets.

use crate::target::{TargetRef, position_of};

/// Parent to child links over the active target chain.
///
/// The application's root outlet is the first target; each target's outlet
/// is the target after it; the last target's outlet is empty. An empty
/// chain clears the root outlet.
#[derive(Clone, Default)]
pub struct Outlets {
    chain: Vec<TargetRef>,
}

impl Outlets {
    /// Link `chain` root-first.
    pub fn from_chain(chain: Vec<TargetRef>) -> Self {
        Self { chain }
    }

    /// The target attached to the application's root component.
    pub fn root(&self) -> Option<&TargetRef> {
        self.chain.first()
    }

    /// The target nested inside `target`, if `target` is active and not
    /// the leaf.
    pub fn outlet_of(&self, target: &TargetRef) -> Option<&TargetRef> {
        let index = position_of(&self.chain, target)?;
        self.chain.get(index + 1)
    }

    /// The linked chain, root-first.
    pub fn chain(&self) -> &[TargetRef] {
        &self.chain
    }

    /// The innermost active target.
    pub fn leaf(&self) -> Option<&TargetRef> {
        self.chain.last()
    }

    /// Number of linked targets.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether no target is linked.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl std::fmt::Debug for Outlets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.chain.iter().map(|t| t.name()))
            .finish()
    }
}

/// The application that owns the root component.
pub trait Application {
    /// Whether a root component is mounted. Rendering is skipped without one.
    fn has_component(&self) -> bool {
        true
    }

    /// Re-render the root component with `outlets` attached.
    fn render(&mut self, outlets: &Outlets);
}

impl<A: Application + ?Sized> Application for Box<A> {
    fn has_component(&self) -> bool {
        (**self).has_component()
    }

    fn render(&mut self, outlets: &Outlets) {
        (**self).render(outlets)
    }
}
