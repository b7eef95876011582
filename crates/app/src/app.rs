//! Application facade: wires the stores together and gates write intents.
//!
//! The presentation layer dispatches intents here. Reads are open to
//! everyone, guests included; writes require an authenticated session, and
//! a gated intent never reaches the wish store - it comes back as
//! [`Dispatch::AuthRequired`] so the caller can route to the auth prompt.

use tracing::debug;

use wishflick_core::{
    Activity, Amount, Contribution, FilterUpdate, User, Wish, WishDraft, WishId, WishUpdate,
};

use crate::config::AppConfig;
use crate::feed::ActivityFeed;
use crate::session::SessionStore;
use crate::wishes::{WishStore, WishStoreError};

/// Outcome of a gated intent.
#[derive(Debug)]
pub enum Dispatch<T> {
    /// The intent reached the store and produced a value.
    Completed(T),
    /// No authenticated session: the store was not invoked. The caller
    /// should route to the authentication prompt.
    AuthRequired,
}

impl<T> Dispatch<T> {
    /// The produced value, if the intent completed.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::AuthRequired => None,
        }
    }

    /// Whether the intent was turned away for authentication.
    pub const fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }
}

/// The assembled application state: one session store, one wish store.
///
/// Constructed explicitly and passed by reference to whatever needs it -
/// there are no ambient globals.
pub struct WishFlick {
    session: SessionStore,
    wishes: WishStore,
    config: AppConfig,
}

impl WishFlick {
    /// Assemble the stores from configuration and run the one-time session
    /// restore.
    #[must_use]
    pub fn open(config: AppConfig) -> Self {
        let mut session = SessionStore::new(config.vault());
        session.restore();
        let wishes = WishStore::with_providers(
            Box::new(crate::recommend::LeadingWishes),
            config.activity_capacity,
        );
        Self {
            session,
            wishes,
            config,
        }
    }

    /// Assemble from pre-built stores (dependency injection for tests and
    /// custom providers). Does not restore the session.
    #[must_use]
    pub const fn from_parts(config: AppConfig, session: SessionStore, wishes: WishStore) -> Self {
        Self {
            session,
            wishes,
            config,
        }
    }

    // =========================================================================
    // Store access
    // =========================================================================

    /// The session store (reads).
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The session store (lifecycle operations: login, logout, profile).
    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// The wish store (reads and queries).
    #[must_use]
    pub const fn wishes(&self) -> &WishStore {
        &self.wishes
    }

    // =========================================================================
    // Gated write intents
    // =========================================================================

    /// Create a wish owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::InvalidDraft`] if the draft fails
    /// validation.
    pub fn create_wish(&mut self, draft: WishDraft) -> Result<Dispatch<Wish>, WishStoreError> {
        let Some(user) = self.gate("create_wish") else {
            return Ok(Dispatch::AuthRequired);
        };
        Ok(Dispatch::Completed(self.wishes.create_wish(draft, &user)?))
    }

    /// Update a wish.
    ///
    /// Ownership is a presentation-layer concern (only the owner's own
    /// wishes offer an edit affordance); the facade gates on authentication
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown id.
    pub fn update_wish(
        &mut self,
        id: WishId,
        update: WishUpdate,
    ) -> Result<Dispatch<()>, WishStoreError> {
        if self.gate("update_wish").is_none() {
            return Ok(Dispatch::AuthRequired);
        }
        self.wishes.update_wish(id, update)?;
        Ok(Dispatch::Completed(()))
    }

    /// Delete a wish.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown id.
    pub fn delete_wish(&mut self, id: WishId) -> Result<Dispatch<Wish>, WishStoreError> {
        if self.gate("delete_wish").is_none() {
            return Ok(Dispatch::AuthRequired);
        }
        Ok(Dispatch::Completed(self.wishes.delete_wish(id)?))
    }

    /// Contribute to a wish as the signed-in user.
    ///
    /// The contribution is attributed to the current session identity
    /// unless `is_anonymous`, in which case the identity is stripped before
    /// the record is built.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    pub fn contribute(
        &mut self,
        wish_id: WishId,
        amount: Amount,
        message: Option<String>,
        is_anonymous: bool,
    ) -> Result<Dispatch<Contribution>, WishStoreError> {
        let Some(user) = self.gate("contribute") else {
            return Ok(Dispatch::AuthRequired);
        };
        let contribution =
            self.wishes
                .contribute(wish_id, amount, message, is_anonymous, Some(&user))?;
        Ok(Dispatch::Completed(contribution))
    }

    /// Like a wish as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    pub fn like(&mut self, wish_id: WishId) -> Result<Dispatch<bool>, WishStoreError> {
        let Some(user) = self.gate("like") else {
            return Ok(Dispatch::AuthRequired);
        };
        Ok(Dispatch::Completed(self.wishes.like_wish(wish_id, &user)?))
    }

    /// Count a share of a wish by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    pub fn share(&mut self, wish_id: WishId) -> Result<Dispatch<u64>, WishStoreError> {
        let Some(user) = self.gate("share") else {
            return Ok(Dispatch::AuthRequired);
        };
        Ok(Dispatch::Completed(self.wishes.share_wish(wish_id, &user)?))
    }

    // =========================================================================
    // Open reads
    // =========================================================================

    /// Merge a partial update into the feed filters. Open to guests.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.wishes.set_filters(update);
    }

    /// The feed with active filters and ordering applied. Open to guests.
    #[must_use]
    pub fn feed(&self) -> Vec<Wish> {
        self.wishes.filtered_wishes()
    }

    /// The recommendation strip for the current viewer. Open to guests.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Wish> {
        self.wishes
            .recommended_for(self.session.user(), self.config.recommendation_limit)
    }

    /// Recent activity for the current viewer. Open to guests.
    #[must_use]
    pub fn activity(&self, limit: usize) -> Vec<Activity> {
        let viewer = self.session.user().map(|u| u.id);
        self.wishes.activity().recent(viewer, limit)
    }

    /// Resolve the signed-in user, or `None` to route to the auth prompt.
    fn gate(&self, intent: &str) -> Option<User> {
        if self.session.is_authenticated() {
            self.session.user().cloned()
        } else {
            debug!(intent, "intent while signed out; routing to auth prompt");
            None
        }
    }
}
