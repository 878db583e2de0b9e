//! Session authentication service.
//!
//! Login is a placeholder policy: credentials are compared against two fixed
//! profiles. It is NOT a security boundary. A real deployment must swap
//! [`FixedProfiles`] for a [`CredentialVerifier`] backed by proper
//! credential storage.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use author_desk_core::Role;

use crate::models::Session;

/// Maps a username/password pair to a role.
pub trait CredentialVerifier: Send {
    /// Return the role for matching credentials, or `None`.
    fn verify(&self, username: &str, password: &SecretString) -> Option<Role>;
}

/// A single hardcoded login profile.
#[derive(Debug, Clone, Copy)]
struct Profile {
    username: &'static str,
    password: &'static str,
    role: Role,
}

/// The two built-in profiles: `admin`/`admin` and `user`/`user`.
#[derive(Debug, Clone)]
pub struct FixedProfiles {
    profiles: [Profile; 2],
}

impl Default for FixedProfiles {
    fn default() -> Self {
        Self {
            profiles: [
                Profile {
                    username: "admin",
                    password: "admin",
                    role: Role::Admin,
                },
                Profile {
                    username: "user",
                    password: "user",
                    role: Role::User,
                },
            ],
        }
    }
}

impl CredentialVerifier for FixedProfiles {
    fn verify(&self, username: &str, password: &SecretString) -> Option<Role> {
        self.profiles
            .iter()
            .find(|p| p.username == username && p.password == password.expose_secret())
            .map(|p| p.role)
    }
}

/// Tracks the current session and evaluates logins.
pub struct SessionManager {
    session: Session,
    verifier: Box<dyn CredentialVerifier>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(FixedProfiles::default())
    }
}

impl SessionManager {
    /// Create a logged-out manager using the given verifier.
    #[must_use]
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            session: Session::logged_out(),
            verifier: Box::new(verifier),
        }
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    /// Attempt a login.
    ///
    /// On success the session takes the matched role, replacing any
    /// previous login. On failure the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no profile matches.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, username: &str, password: &SecretString) -> Result<Role, AuthError> {
        match self.verifier.verify(username, password) {
            Some(role) => {
                self.session = Session::logged_in(role);
                info!(%role, "Login succeeded");
                Ok(role)
            }
            None => {
                warn!("Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// End the session. Returns `true` if a session was active.
    pub fn logout(&mut self) -> bool {
        let was_authenticated = self.session.is_authenticated();
        self.session = Session::logged_out();
        if was_authenticated {
            info!("Logged out");
        }
        was_authenticated
    }
}
