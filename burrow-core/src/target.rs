//! # Route Targets
//!
//! A target is the component bound to a route. Targets are created and
//! owned by the application; the router only compares them by identity,
//! asks which lifecycle hooks they expose, and invokes those hooks.
//!
//! Hooks take `&self`. A target that keeps state across navigations uses
//! interior mutability.

use bitflags::bitflags;
use std::sync::Arc;

bitflags! {
    /// The lifecycle hooks a target responds to.
    ///
    /// The router checks these flags before invoking a hook, so a target
    /// can opt out of notifications it has no use for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Lifecycle: u8 {
        /// The target wants `on_route_from` when it is deactivated.
        const ROUTE_FROM = 1;
        /// The target wants `on_route_to` when it is activated.
        const ROUTE_TO = 1 << 1;
    }
}

/// A component bound to a route.
///
/// # Example
///
/// ```rust
/// use burrow_core::{Lifecycle, Target};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct UserPage {
///     loads: AtomicUsize,
/// }
///
/// impl Target for UserPage {
///     fn lifecycle(&self) -> Lifecycle {
///         Lifecycle::ROUTE_TO
///     }
///
///     fn on_route_to(&self) {
///         self.loads.fetch_add(1, Ordering::SeqCst);
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound to a route",
    label = "missing `Target` implementation",
    note = "Implement `Target` (all methods have defaults) to bind `{Self}` to a route."
)]
pub trait Target: Send + Sync + 'static {
    /// Hooks this target responds to. Defaults to all of them.
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::all()
    }

    /// Called when a navigation deactivates this target.
    fn on_route_from(&self) {}

    /// Called when a navigation activates this target.
    fn on_route_to(&self) {}

    /// A human-readable name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A shared handle to a target. Identity is the allocation, not the value.
pub type TargetRef = Arc<dyn Target>;

/// Whether two handles point at the same target.
pub fn same_target(a: &TargetRef, b: &TargetRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Index of the first occurrence of `target` in `chain`.
pub fn position_of(chain: &[TargetRef], target: &TargetRef) -> Option<usize> {
    chain.iter().position(|t| same_target(t, target))
}

/// Targets of `chain` that are absent from `other`, in `chain` order.
///
/// Each target appears at most once in the result.
pub fn difference(chain: &[TargetRef], other: &[TargetRef]) -> Vec<TargetRef> {
    let mut out: Vec<TargetRef> = Vec::new();
    for target in chain {
        if position_of(other, target).is_none() && position_of(&out, target).is_none() {
            out.push(Arc::clone(target));
        }
    }
    out
}
