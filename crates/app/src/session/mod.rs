//! Session store: the current (or absent) identity.
//!
//! Holds zero-or-one authenticated identity and the session lifecycle.
//! There is no identity backend: every login variant fabricates its user
//! record locally and the vault only makes it survive a restart.
//!
//! State machine: `Loading` at construction; [`SessionStore::restore`] is
//! the one-time startup check that leaves it (saved record found ⇒
//! `Authenticated`, none ⇒ `Unauthenticated`). Any login variant moves to
//! `Authenticated`, guest login to `Guest` (never authenticated), and
//! logout back to `Unauthenticated`.

pub mod vault;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use wishflick_core::{Email, EmailError, ProfileUpdate, User};

use self::vault::SessionVault;

/// Demo avatar handed to fabricated password-login identities.
const DEMO_AVATAR: &str = "https://static.wishflick.example/avatars/demo.jpg";

/// Errors that can occur during session operations.
///
/// Credentials are never verified against anything; these cover the only
/// checks that exist (syntactic email validity, non-empty password).
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password was empty.
    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Where the session currently stands.
#[derive(Debug, Clone)]
enum SessionState {
    /// Startup: the vault has not been checked yet.
    Loading,
    /// No identity.
    Unauthenticated,
    /// A signed-in identity.
    Authenticated(User),
    /// The read-only guest placeholder. Never counts as authenticated.
    Guest(User),
}

/// Immutable view of the session, published to subscribers on every
/// transition.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// The current identity, if any (includes the guest placeholder).
    pub user: Option<User>,
    /// Whether a signed-in identity is present. False for guests.
    pub is_authenticated: bool,
    /// Whether the startup vault check is still pending.
    pub is_loading: bool,
}

/// The session state container.
pub struct SessionStore {
    vault: Box<dyn SessionVault>,
    state: SessionState,
    publisher: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create a store in the `Loading` state over the given vault.
    ///
    /// Call [`SessionStore::restore`] once at startup to leave `Loading`.
    #[must_use]
    pub fn new(vault: Box<dyn SessionVault>) -> Self {
        let initial = SessionSnapshot {
            user: None,
            is_authenticated: false,
            is_loading: true,
        };
        let (publisher, _) = watch::channel(initial);
        Self {
            vault,
            state: SessionState::Loading,
            publisher,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// One-time startup check of the vault.
    ///
    /// A saved record moves the store to `Authenticated`; none (or an
    /// unreadable vault, which is logged and treated as absent) moves it to
    /// `Unauthenticated`. Repeat calls are ignored: no transition leaves
    /// `Loading` except this one, and nothing re-enters it.
    #[instrument(skip(self))]
    pub fn restore(&mut self) {
        if !matches!(self.state, SessionState::Loading) {
            debug!("session already restored; ignoring repeat restore");
            return;
        }
        self.state = match self.vault.load() {
            Ok(Some(user)) => {
                info!(user = %user.id, "restored saved session");
                SessionState::Authenticated(user)
            }
            Ok(None) => {
                debug!("no saved session");
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!(error = %e, "session vault unreadable; starting signed out");
                SessionState::Unauthenticated
            }
        };
        self.publish();
    }

    /// Sign in with email and password.
    ///
    /// Any syntactically valid email plus a non-empty password succeeds and
    /// fabricates a demo identity; nothing is verified. The record is
    /// persisted to the vault (softly - a failed write is logged and the
    /// in-memory login still succeeds).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidEmail`] or
    /// [`SessionError::EmptyPassword`].
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<User, SessionError> {
        let email = Email::parse(email)?;
        if password.expose_secret().is_empty() {
            return Err(SessionError::EmptyPassword);
        }

        let mut user = User::registered(email.local_part().to_owned(), email);
        user.avatar_url = Some(DEMO_AVATAR.to_owned());
        user.bio = Some("Dream big, achieve bigger!".to_owned());

        self.persist_soft(&user);
        info!(user = %user.id, "logged in");
        self.state = SessionState::Authenticated(user.clone());
        self.publish();
        Ok(user)
    }

    /// Register a new account.
    ///
    /// Builds a fresh identity (time-ordered id) under the given display
    /// name; same persistence contract as [`SessionStore::login`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidEmail`] or
    /// [`SessionError::EmptyPassword`].
    #[instrument(skip(self, password))]
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, SessionError> {
        let email = Email::parse(email)?;
        if password.expose_secret().is_empty() {
            return Err(SessionError::EmptyPassword);
        }

        let user = User::registered(name, email);
        self.persist_soft(&user);
        info!(user = %user.id, "registered");
        self.state = SessionState::Authenticated(user.clone());
        self.publish();
        Ok(user)
    }

    /// Simulated Google sign-in: fixed mock identity, no OAuth handshake.
    #[instrument(skip(self))]
    pub fn login_with_google(&mut self) -> User {
        self.login_federated(User::google_mock(), "google")
    }

    /// Simulated Facebook sign-in: fixed mock identity, no OAuth handshake.
    #[instrument(skip(self))]
    pub fn login_with_facebook(&mut self) -> User {
        self.login_federated(User::facebook_mock(), "facebook")
    }

    fn login_federated(&mut self, user: User, provider: &str) -> User {
        self.persist_soft(&user);
        info!(user = %user.id, provider, "federated login (simulated)");
        self.state = SessionState::Authenticated(user.clone());
        self.publish();
        user
    }

    /// Browse as a guest: a non-persisted placeholder that never counts as
    /// authenticated.
    #[instrument(skip(self))]
    pub fn login_as_guest(&mut self) -> User {
        let user = User::guest();
        info!("browsing as guest");
        self.state = SessionState::Guest(user.clone());
        self.publish();
        user
    }

    /// Sign out: clears the vault and drops the identity.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Err(e) = self.vault.clear() {
            warn!(error = %e, "failed to clear session vault");
        }
        info!("logged out");
        self.state = SessionState::Unauthenticated;
        self.publish();
    }

    /// Merge profile fields into the current user and re-persist.
    ///
    /// Silently returns when no user is present. Guests are merged in
    /// memory only - they have no durable record.
    #[instrument(skip(self, update))]
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        match &mut self.state {
            SessionState::Authenticated(user) => {
                user.apply(update);
                let user = user.clone();
                self.persist_soft(&user);
                self.publish();
            }
            SessionState::Guest(user) => {
                user.apply(update);
                self.publish();
            }
            SessionState::Loading | SessionState::Unauthenticated => {
                debug!("profile update with no active user; ignoring");
            }
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current identity, if any (includes the guest placeholder).
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) | SessionState::Guest(user) => Some(user),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }

    /// Whether a signed-in identity is present. False for guests.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Whether the startup vault check is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Current immutable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user().cloned(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
        }
    }

    /// Subscribe to session transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.publisher.subscribe()
    }

    fn persist_soft(&mut self, user: &User) {
        // Vault failures are soft: the session is simply not persisted.
        if let Err(e) = self.vault.save(user) {
            warn!(error = %e, user = %user.id, "failed to persist session; continuing unpersisted");
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}
