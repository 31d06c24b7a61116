//! View components referenced by the route table.
//!
//! # Responsibilities
//! - Define the `View` seam the routing runtime renders through
//! - Expose eagerly resolved handles for the `Home` and `Counter` views
//!
//! # Design Decisions
//! - Views are `'static` singletons; a handle is a plain reference
//! - Handle equality is identity, not structural
//! - Rendering produces an HTML fragment mounted inside the shell

mod counter;
mod home;

pub use counter::{Counter, COUNTER};
pub use home::{Home, HOME};

use std::fmt;

/// A renderable unit supplied by the application.
pub trait View: Send + Sync {
    /// Component name, as registered with the application.
    fn name(&self) -> &'static str;

    /// Render the view into an HTML fragment.
    fn render(&self) -> String;
}

/// Opaque handle to a view component.
///
/// Two handles are equal only when they point at the same view object.
#[derive(Clone, Copy)]
pub struct ViewHandle(&'static dyn View);

impl ViewHandle {
    pub const fn new(view: &'static dyn View) -> Self {
        Self(view)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn render(&self) -> String {
        self.0.render()
    }
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.0 as *const dyn View, other.0 as *const dyn View)
    }
}

impl Eq for ViewHandle {}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewHandle").field(&self.name()).finish()
    }
}

/// Handle to the `Home` view.
pub fn home() -> ViewHandle {
    ViewHandle::new(&HOME)
}

/// Handle to the `Counter` view.
pub fn counter() -> ViewHandle {
    ViewHandle::new(&COUNTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_identity() {
        assert_eq!(home(), home());
        assert_eq!(counter(), counter());
        assert_ne!(home(), counter());
    }

    #[test]
    fn test_handle_names() {
        assert_eq!(home().name(), "Home");
        assert_eq!(counter().name(), "Counter");
        assert_eq!(format!("{:?}", home()), "ViewHandle(\"Home\")");
    }
}
