//! Application state.
//!
//! [`App`] owns every piece of mutable state: the session, the selected
//! view, the author store, the notification channel, the open author form
//! and the browse search term. Front-ends hold one `App` and drive it
//! through `&mut` calls; nothing is global.
//!
//! No operation awaits. Inside a Tokio runtime notifications clear on a
//! timer; without one they expire when next read (see
//! [`NotificationChannel`]).

use secrecy::SecretString;
use tracing::{info, instrument};

use author_desk_core::{Author, AuthorDraft, AuthorId, Role};

use crate::config::AdminConfig;
use crate::db::{AuthorRepository, FileSlot};
use crate::error::AppError;
use crate::models::{AuthorForm, FormField, FormSubmission, Session};
use crate::routes::{Screen, View, ViewRouter, nav_items, views};
use crate::services::search;
use crate::services::{AuthError, AuthorStore, CredentialVerifier, NotificationChannel, SessionManager};

/// Fixed notification texts.
pub mod messages {
    pub const LOGIN_ADMIN: &str = "Logged in successfully as administrator!";
    pub const LOGIN_USER: &str = "Logged in successfully as user!";
    pub const LOGIN_FAILED: &str = "Invalid username or password.";
    pub const LOGGED_OUT: &str = "You have been logged out.";
    pub const AUTHOR_ADDED: &str = "Author added successfully!";
    pub const AUTHOR_UPDATED: &str = "Author updated successfully!";
    pub const AUTHOR_DELETED: &str = "Author deleted successfully!";
}

/// The application context.
#[derive(Debug)]
pub struct App {
    sessions: SessionManager,
    router: ViewRouter,
    store: AuthorStore,
    notifications: NotificationChannel,
    form: Option<AuthorForm>,
    search: String,
}

impl App {
    /// Create a logged-out app on the browse view.
    #[must_use]
    pub fn new(store: AuthorStore, notifications: NotificationChannel) -> Self {
        Self {
            sessions: SessionManager::default(),
            router: ViewRouter::new(),
            store,
            notifications,
            form: None,
            search: String::new(),
        }
    }

    /// Open the app over the file slot in the configured data directory.
    #[must_use]
    pub fn open(config: &AdminConfig) -> Self {
        let repo = AuthorRepository::new(FileSlot::new(&config.data_dir));
        Self::new(
            AuthorStore::open(repo),
            NotificationChannel::new(config.notification_ttl),
        )
    }

    /// Replace the credential check.
    #[must_use]
    pub fn with_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.sessions = SessionManager::new(verifier);
        self
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[must_use]
    pub const fn session(&self) -> Session {
        self.sessions.session()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.router.current()
    }

    /// The screen currently shown.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.router.screen(self.sessions.session().role())
    }

    /// All authors in insertion order.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        self.store.list()
    }

    /// Authors matching the current search term.
    #[must_use]
    pub fn visible_authors(&self) -> Vec<&Author> {
        search::filter(self.store.list(), &self.search)
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Text of the active notification.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        self.notifications.text()
    }

    #[must_use]
    pub const fn form(&self) -> Option<&AuthorForm> {
        self.form.as_ref()
    }

    // =========================================================================
    // Session and navigation
    // =========================================================================

    /// Log in and announce the outcome.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no profile matches; the
    /// session is unchanged.
    pub fn login(&mut self, username: &str, password: &SecretString) -> Result<Role, AuthError> {
        match self.sessions.login(username, password) {
            Ok(role) => {
                self.notifications.notify(if role.is_admin() {
                    messages::LOGIN_ADMIN
                } else {
                    messages::LOGIN_USER
                });
                Ok(role)
            }
            Err(e) => {
                self.notifications.notify(messages::LOGIN_FAILED);
                Err(e)
            }
        }
    }

    /// Log out, close any open form and return to the browse view.
    pub fn logout(&mut self) {
        self.sessions.logout();
        self.form = None;
        self.router.reset();
        self.notifications.notify(messages::LOGGED_OUT);
    }

    /// Select a view and return the screen it resolves to.
    ///
    /// Leaving the browse view drops the search term and leaving the admin
    /// panel drops the open form, as their screens are torn down.
    pub fn navigate(&mut self, target: View) -> Screen {
        if target != View::Browse {
            self.search.clear();
        }
        if target != View::AdminPanel {
            self.form = None;
        }
        self.router.navigate(target, self.sessions.session().role())
    }

    /// Set the browse search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    // =========================================================================
    // Author mutations (admin only)
    // =========================================================================

    /// Add an author.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin, or
    /// `AppError::Store` if no author id is left.
    #[instrument(skip(self, draft))]
    pub fn add_author(&mut self, draft: AuthorDraft) -> Result<Author, AppError> {
        self.require_admin("adding authors")?;
        let author = self.store.add(draft)?;
        self.notifications.notify(messages::AUTHOR_ADDED);
        Ok(author)
    }

    /// Replace an author. Returns whether a record with that ID existed.
    ///
    /// The update notification is shown either way.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin.
    #[instrument(skip(self, author), fields(id = %author.id))]
    pub fn update_author(&mut self, author: Author) -> Result<bool, AppError> {
        self.require_admin("editing authors")?;
        let matched = self.store.update(author);
        self.notifications.notify(messages::AUTHOR_UPDATED);
        Ok(matched)
    }

    /// Delete an author. Returns whether a record with that ID existed.
    ///
    /// The delete notification is shown either way.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin, or
    /// `AppError::FormOpen` while the author form is shown.
    #[instrument(skip(self))]
    pub fn delete_author(&mut self, id: AuthorId) -> Result<bool, AppError> {
        self.require_admin("deleting authors")?;
        if self.form.is_some() {
            return Err(AppError::FormOpen);
        }
        let matched = self.store.remove(id);
        self.notifications.notify(messages::AUTHOR_DELETED);
        Ok(matched)
    }

    // =========================================================================
    // Author form (admin only)
    // =========================================================================

    /// Open an empty form for a new author.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin.
    pub fn open_new_form(&mut self) -> Result<(), AppError> {
        self.require_admin("adding authors")?;
        self.form = Some(AuthorForm::new_author());
        Ok(())
    }

    /// Open a form pre-filled with an existing author.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin, or
    /// `AppError::NotFound` if no author has that ID.
    pub fn open_edit_form(&mut self, id: AuthorId) -> Result<(), AppError> {
        self.require_admin("editing authors")?;
        let author = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("author {id}")))?;
        self.form = Some(AuthorForm::edit(author));
        Ok(())
    }

    /// Set a field of the open form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin, or
    /// `AppError::FormClosed` if no form is open.
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) -> Result<(), AppError> {
        self.require_admin("editing authors")?;
        let form = self.form.as_mut().ok_or(AppError::FormClosed)?;
        form.set(field, value);
        Ok(())
    }

    /// Submit the open form: validate, create or update, then close it.
    ///
    /// A form that fails validation stays open.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` unless the session is an admin,
    /// `AppError::FormClosed` if no form is open, or `AppError::Form` if a
    /// required field is blank.
    pub fn submit_form(&mut self) -> Result<Author, AppError> {
        self.require_admin("saving authors")?;
        let submission = self.form.as_ref().ok_or(AppError::FormClosed)?.submit()?;

        let author = match submission {
            FormSubmission::Create(draft) => self.add_author(draft)?,
            FormSubmission::Update(author) => {
                self.update_author(author.clone())?;
                author
            }
        };
        self.form = None;
        Ok(author)
    }

    /// Discard the open form, if any.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current screen as text.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Template` if rendering fails.
    pub fn render(&self) -> Result<String, AppError> {
        let chrome = views::Chrome {
            nav: nav_items(self.session(), self.view()),
            notification: self.notification(),
        };

        let out = match self.screen() {
            Screen::Browse => views::browse(&chrome, &self.search, &self.visible_authors())?,
            Screen::Login => views::login(&chrome)?,
            Screen::AdminPanel => views::admin_panel(&chrome, self.authors(), self.form())?,
            Screen::AccessDenied => views::access_denied(&chrome)?,
        };
        Ok(out)
    }

    fn require_admin(&self, action: &str) -> Result<(), AppError> {
        if self.session().is_admin() {
            return Ok(());
        }
        info!(role = %self.session().role(), action, "Admin action refused");
        Err(AppError::Forbidden(format!("{action} requires the admin role")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::{AUTHORS_KEY, KeyValueSlot, MemorySlot};

    fn app() -> (App, MemorySlot) {
        let slot = MemorySlot::new();
        let store = AuthorStore::open(AuthorRepository::new(slot.clone()));
        (App::new(store, NotificationChannel::default()), slot)
    }

    fn secret(s: &str) -> SecretString {
        SecretString::from(s)
    }

    fn admin_app() -> (App, MemorySlot) {
        let (mut app, slot) = app();
        app.login("admin", &secret("admin")).unwrap();
        (app, slot)
    }

    #[tokio::test]
    async fn test_login_notifications() {
        let (mut app, _) = app();

        assert!(app.login("x", &secret("y")).is_err());
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_FAILED));
        assert_eq!(app.session(), Session::logged_out());

        assert_eq!(app.login("user", &secret("user")), Ok(Role::User));
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_USER));

        assert_eq!(app.login("admin", &secret("admin")), Ok(Role::Admin));
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_ADMIN));
    }

    #[tokio::test]
    async fn test_login_does_not_navigate() {
        let (mut app, _) = app();
        app.navigate(View::Login);
        app.login("admin", &secret("admin")).unwrap();
        assert_eq!(app.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn test_logout_forces_browse_and_closes_form() {
        let (mut app, _) = admin_app();
        app.navigate(View::AdminPanel);
        app.open_new_form().unwrap();

        app.logout();

        assert_eq!(app.view(), View::Browse);
        assert_eq!(app.screen(), Screen::Browse);
        assert!(app.form().is_none());
        assert!(!app.session().is_authenticated());
        assert_eq!(app.notification().as_deref(), Some(messages::LOGGED_OUT));
    }

    #[tokio::test]
    async fn test_admin_panel_denied_for_user() {
        let (mut app, _) = app();
        app.login("user", &secret("user")).unwrap();

        assert_eq!(app.navigate(View::AdminPanel), Screen::AccessDenied);
        assert_eq!(app.view(), View::AdminPanel);
        assert!(app.render().unwrap().contains("You do not have permission"));
    }

    #[tokio::test]
    async fn test_mutations_forbidden_without_admin() {
        let (mut app, slot) = app();

        assert!(matches!(
            app.add_author(AuthorDraft::new("X", "Y", "Z")),
            Err(AppError::Forbidden(_))
        ));
        app.login("user", &secret("user")).unwrap();
        assert!(matches!(app.delete_author(AuthorId::new(1)), Err(AppError::Forbidden(_))));
        assert!(matches!(app.open_new_form(), Err(AppError::Forbidden(_))));

        assert_eq!(app.authors().len(), 4);
        assert!(slot.get(AUTHORS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_update_delete_notify() {
        let (mut app, _) = admin_app();

        let author = app.add_author(AuthorDraft::new("X", "Y", "Z")).unwrap();
        assert_eq!(author.id, AuthorId::new(5));
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_ADDED));

        let mut changed = author.clone();
        changed.bio = "New".to_string();
        assert!(app.update_author(changed).unwrap());
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_UPDATED));

        assert!(app.delete_author(author.id).unwrap());
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_DELETED));
        assert_eq!(app.authors().len(), 4);
    }

    #[tokio::test]
    async fn test_unmatched_update_and_delete_still_notify() {
        let (mut app, _) = admin_app();
        let ghost = Author::from_draft(AuthorId::new(77), AuthorDraft::new("G", "H", "I"));

        assert!(!app.update_author(ghost).unwrap());
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_UPDATED));

        assert!(!app.delete_author(AuthorId::new(77)).unwrap());
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_DELETED));
        assert_eq!(app.authors().len(), 4);
    }

    #[tokio::test]
    async fn test_form_create_flow() {
        let (mut app, _) = admin_app();
        app.navigate(View::AdminPanel);
        app.open_new_form().unwrap();
        app.set_form_field(FormField::FirstName, "Rainis").unwrap();
        app.set_form_field(FormField::LastName, "Pliekšāns").unwrap();

        // Bio missing: form stays open
        assert!(matches!(app.submit_form(), Err(AppError::Form(_))));
        assert!(app.form().is_some());

        app.set_form_field(FormField::Bio, "Poet.").unwrap();
        let author = app.submit_form().unwrap();

        assert_eq!(author.id, AuthorId::new(5));
        assert!(app.form().is_none());
        assert_eq!(app.authors().last(), Some(&author));
    }

    #[tokio::test]
    async fn test_form_edit_flow() {
        let (mut app, _) = admin_app();
        app.open_edit_form(AuthorId::new(2)).unwrap();
        app.set_form_field(FormField::Bio, "Novelist.").unwrap();

        let author = app.submit_form().unwrap();

        assert_eq!(author.id, AuthorId::new(2));
        assert_eq!(app.authors().get(1).map(|a| a.bio.as_str()), Some("Novelist."));
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_UPDATED));
    }

    #[tokio::test]
    async fn test_form_errors() {
        let (mut app, _) = admin_app();
        assert!(matches!(app.open_edit_form(AuthorId::new(40)), Err(AppError::NotFound(_))));
        assert!(matches!(app.submit_form(), Err(AppError::FormClosed)));
        assert!(matches!(
            app.set_form_field(FormField::Bio, "x"),
            Err(AppError::FormClosed)
        ));

        app.open_new_form().unwrap();
        app.cancel_form();
        assert!(app.form().is_none());
    }

    #[tokio::test]
    async fn test_navigation_drops_search_and_form() {
        let (mut app, _) = admin_app();
        app.set_search("anna");
        assert_eq!(app.visible_authors().len(), 1);

        app.navigate(View::AdminPanel);
        assert_eq!(app.search(), "");
        app.open_new_form().unwrap();

        app.navigate(View::Browse);
        assert!(app.form().is_none());
        assert_eq!(app.visible_authors().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_refused_while_form_open() {
        let (mut app, slot) = admin_app();
        app.navigate(View::AdminPanel);
        app.open_edit_form(AuthorId::new(1)).unwrap();

        assert!(matches!(app.delete_author(AuthorId::new(1)), Err(AppError::FormOpen)));
        assert_eq!(app.authors().len(), 4);
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_ADMIN));

        app.cancel_form();
        assert!(app.delete_author(AuthorId::new(1)).unwrap());
        assert_eq!(slot.get(AUTHORS_KEY).unwrap().map(|raw| raw.contains("Jānis")), Some(false));
    }

    #[tokio::test]
    async fn test_add_reports_exhausted_ids() {
        let stored = format!(
            r#"[{{"id":{},"firstName":"A","lastName":"B","bio":"C"}}]"#,
            i32::MAX
        );
        let slot = MemorySlot::with_value(AUTHORS_KEY, &stored);
        let store = AuthorStore::open(AuthorRepository::new(slot));
        let mut app = App::new(store, NotificationChannel::default());
        app.login("admin", &secret("admin")).unwrap();

        assert!(matches!(
            app.add_author(AuthorDraft::new("X", "Y", "Z")),
            Err(AppError::Store(_))
        ));
        assert_eq!(app.authors().len(), 1);
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_ADMIN));
    }

    #[test]
    fn test_operations_work_without_runtime() {
        let (mut app, slot) = app();

        assert_eq!(app.login("admin", &secret("admin")), Ok(Role::Admin));
        assert_eq!(app.notification().as_deref(), Some(messages::LOGIN_ADMIN));

        app.add_author(AuthorDraft::new("X", "Y", "Z")).unwrap();
        assert!(app.update_author(Author::from_draft(AuthorId::new(5), AuthorDraft::new("X", "Y", "W"))).unwrap());
        assert!(app.delete_author(AuthorId::new(1)).unwrap());
        assert_eq!(app.notification().as_deref(), Some(messages::AUTHOR_DELETED));

        app.logout();
        assert_eq!(app.notification().as_deref(), Some(messages::LOGGED_OUT));
        assert!(slot.get(AUTHORS_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_render_browse_with_search() {
        let (mut app, _) = app();
        app.set_search("KALN");
        let out = app.render().unwrap();
        assert!(out.contains("Pēteris Kalniņš"));
        assert!(!out.contains("Anna"));
    }
}
