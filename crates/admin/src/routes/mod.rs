//! Screen routing for admin.
//!
//! # Views
//!
//! ```text
//! browse  - Author list with search     (everyone)
//! login   - Login prompt                (everyone)
//! admin   - Admin panel                 (Admin only; others get Access Denied)
//! ```
//!
//! Navigation is never refused. Asking for the admin panel without the
//! admin role selects the view but renders the access-denied screen, so the
//! navigation bar and the screen body can disagree.

pub mod views;

use tracing::debug;

use author_desk_core::Role;

use crate::models::Session;

/// A selectable top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Browse,
    Login,
    AdminPanel,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browse => write!(f, "browse"),
            Self::Login => write!(f, "login"),
            Self::AdminPanel => write!(f, "admin"),
        }
    }
}

/// What is actually shown for a view under a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browse,
    Login,
    AdminPanel,
    AccessDenied,
}

/// Resolve the screen shown for `view` when the session has `role`.
#[must_use]
pub const fn resolve(role: Role, view: View) -> Screen {
    match view {
        View::Browse => Screen::Browse,
        View::Login => Screen::Login,
        View::AdminPanel if role.is_admin() => Screen::AdminPanel,
        View::AdminPanel => Screen::AccessDenied,
    }
}

/// Holds the selected view.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected view.
    #[must_use]
    pub const fn current(&self) -> View {
        self.current
    }

    /// Select `target` and return the screen it resolves to under `role`.
    pub fn navigate(&mut self, target: View, role: Role) -> Screen {
        self.current = target;
        let screen = resolve(role, target);
        debug!(view = %target, %role, ?screen, "Navigated");
        screen
    }

    /// Screen for the selected view under `role`.
    #[must_use]
    pub const fn screen(&self, role: Role) -> Screen {
        resolve(role, self.current)
    }

    /// Force the browse view (used on logout).
    pub fn reset(&mut self) {
        self.current = View::Browse;
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Shell command that triggers this entry.
    pub command: &'static str,
    pub active: bool,
}

/// Navigation entries for the session.
///
/// "Browse" is always present, "Admin Panel" only for admins, followed by
/// "Login" or "Logout" depending on whether someone is logged in.
#[must_use]
pub fn nav_items(session: Session, current: View) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        label: "Browse",
        command: "browse",
        active: current == View::Browse,
    }];

    if session.is_admin() {
        items.push(NavItem {
            label: "Admin Panel",
            command: "admin",
            active: current == View::AdminPanel,
        });
    }

    items.push(if session.is_authenticated() {
        NavItem {
            label: "Logout",
            command: "logout",
            active: false,
        }
    } else {
        NavItem {
            label: "Login",
            command: "login",
            active: current == View::Login,
        }
    });

    items
}
