//! Session-related types for authentication.

use author_desk_core::Role;

/// Authentication state.
///
/// Fields are private so the pairing holds: a session is authenticated
/// exactly when its role is not [`Role::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    authenticated: bool,
    role: Role,
}

/// The three states a session moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedInUser,
    LoggedInAdmin,
}

impl Session {
    /// A session nobody is logged into.
    #[must_use]
    pub const fn logged_out() -> Self {
        Self {
            authenticated: false,
            role: Role::None,
        }
    }

    /// A session logged in with `role`. `Role::None` yields a logged-out session.
    #[must_use]
    pub const fn logged_in(role: Role) -> Self {
        Self {
            authenticated: !matches!(role, Role::None),
            role,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        match self.role {
            Role::None => SessionState::LoggedOut,
            Role::User => SessionState::LoggedInUser,
            Role::Admin => SessionState::LoggedInAdmin,
        }
    }
}
