//! Wish store: the wish and contribution collections.
//!
//! Single-writer, in-memory. Wishes are kept newest-created-first; every
//! mutation is synchronous and publishes a fresh immutable snapshot. The
//! contribution append and the raised-total increment happen in the same
//! call, so no reader can ever observe one without the other.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{info, instrument};

use wishflick_core::{
    Activity, ActivityKind, ActivityMetadata, Amount, Contribution, DraftError, FilterUpdate,
    PaymentStatus, User, UserId, Wish, WishDraft, WishFilters, WishId, WishUpdate,
};

use crate::feed::ActivityLog;
use crate::recommend::{LeadingWishes, Recommender};

/// Default bound on the derived activity log.
const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

/// Errors raised by wish store mutations.
#[derive(thiserror::Error, Debug)]
pub enum WishStoreError {
    /// No wish with the given id exists.
    #[error("wish not found: {0}")]
    NotFound(WishId),

    /// The submitted draft failed validation.
    #[error(transparent)]
    InvalidDraft(#[from] DraftError),
}

/// Immutable view of the collections, published after every mutation.
#[derive(Debug, Clone)]
pub struct WishSnapshot {
    /// All wishes, newest-created-first.
    pub wishes: Vec<Wish>,
    /// All contributions, newest-first.
    pub contributions: Vec<Contribution>,
    /// Active feed filters.
    pub filters: WishFilters,
}

/// A wish whose raised total disagrees with its contribution records.
///
/// Can only appear if state was mutated outside the store; see
/// [`WishStore::reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    /// The wish in question.
    pub wish_id: WishId,
    /// The raised total on the wish record.
    pub recorded: Decimal,
    /// The sum of its completed contributions.
    pub contributed: Decimal,
}

/// The wish/contribution state container.
pub struct WishStore {
    wishes: Vec<Wish>,
    contributions: Vec<Contribution>,
    likes: HashMap<WishId, HashSet<UserId>>,
    shares: HashMap<WishId, u64>,
    filters: WishFilters,
    activity: ActivityLog,
    recommender: Box<dyn Recommender>,
    publisher: watch::Sender<WishSnapshot>,
}

impl Default for WishStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WishStore {
    /// Create an empty store with the default (non-personalized)
    /// recommender.
    #[must_use]
    pub fn new() -> Self {
        Self::with_providers(Box::new(LeadingWishes), DEFAULT_ACTIVITY_CAPACITY)
    }

    /// Create an empty store with an injected recommender and activity log
    /// capacity.
    #[must_use]
    pub fn with_providers(recommender: Box<dyn Recommender>, activity_capacity: usize) -> Self {
        let initial = WishSnapshot {
            wishes: Vec::new(),
            contributions: Vec::new(),
            filters: WishFilters::default(),
        };
        let (publisher, _) = watch::channel(initial);
        Self {
            wishes: Vec::new(),
            contributions: Vec::new(),
            likes: HashMap::new(),
            shares: HashMap::new(),
            filters: WishFilters::default(),
            activity: ActivityLog::new(activity_capacity),
            recommender,
            publisher,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a wish owned by `owner` from a draft.
    ///
    /// The new wish starts at zero raised, gets a fresh time-ordered id,
    /// and lands at the head of the feed.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::InvalidDraft`] if the draft fails
    /// validation.
    #[instrument(skip(self, draft, owner), fields(owner = %owner.id))]
    pub fn create_wish(&mut self, draft: WishDraft, owner: &User) -> Result<Wish, WishStoreError> {
        draft.validate()?;
        let wish = draft.into_wish(owner.id);
        info!(wish = %wish.id, title = %wish.title, "created wish");

        self.activity.record(
            Activity::now(
                ActivityKind::WishCreated,
                owner.id,
                ActivityMetadata {
                    actor_name: Some(owner.name.clone()),
                    wish_title: Some(wish.title.clone()),
                    amount: None,
                },
            )
            .with_wish(wish.id),
        );
        self.wishes.insert(0, wish.clone());
        self.publish();
        Ok(wish)
    }

    /// Merge a partial update into the wish with the given id and refresh
    /// its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown id. Callers that
    /// prefer the old silent-no-op behavior are free to discard the error.
    #[instrument(skip(self, update))]
    pub fn update_wish(&mut self, id: WishId, update: WishUpdate) -> Result<(), WishStoreError> {
        let wish = self
            .wishes
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(WishStoreError::NotFound(id))?;
        update.apply(wish);
        info!(wish = %id, "updated wish");
        self.publish();
        Ok(())
    }

    /// Remove the wish with the given id.
    ///
    /// Its contribution records are kept (no cascade); likes and share
    /// counts are dropped with the wish.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown id.
    #[instrument(skip(self))]
    pub fn delete_wish(&mut self, id: WishId) -> Result<Wish, WishStoreError> {
        let position = self
            .wishes
            .iter()
            .position(|w| w.id == id)
            .ok_or(WishStoreError::NotFound(id))?;
        let wish = self.wishes.remove(position);
        self.likes.remove(&id);
        self.shares.remove(&id);
        info!(wish = %id, "deleted wish");
        self.publish();
        Ok(wish)
    }

    /// Accept a contribution against a wish.
    ///
    /// The contribution is recorded `completed` immediately (there is no
    /// settlement window) and the wish's raised total is incremented in the
    /// same synchronous step. Anonymity always strips the contributor
    /// identity. There is no cap at the target: overfunding is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    #[instrument(skip(self, message, contributor), fields(amount = %amount))]
    pub fn contribute(
        &mut self,
        wish_id: WishId,
        amount: Amount,
        message: Option<String>,
        is_anonymous: bool,
        contributor: Option<&User>,
    ) -> Result<Contribution, WishStoreError> {
        let wish = self
            .wishes
            .iter_mut()
            .find(|w| w.id == wish_id)
            .ok_or(WishStoreError::NotFound(wish_id))?;

        let contribution = Contribution::accepted(
            wish_id,
            amount,
            message,
            is_anonymous,
            contributor.map(|u| u.id),
        );

        let was_funded = wish.is_funded();
        wish.current_amount += amount.get();
        let newly_funded = !was_funded && wish.is_funded();
        let owner = wish.user_id;
        let title = wish.title.clone();

        self.contributions.insert(0, contribution.clone());
        info!(
            wish = %wish_id,
            contribution = %contribution.id,
            anonymous = is_anonymous,
            "accepted contribution"
        );

        // anonymous entries carry the guest placeholder id so the feed
        // never leaks a stripped identity
        let (actor_id, actor_name) = match (contribution.contributor, contributor) {
            (Some(id), Some(u)) => (id, u.name.clone()),
            _ => (UserId::GUEST, "Anonymous".to_owned()),
        };
        self.activity.record(
            Activity::now(
                ActivityKind::ContributionMade,
                actor_id,
                ActivityMetadata {
                    actor_name: Some(actor_name),
                    wish_title: Some(title.clone()),
                    amount: Some(amount.get()),
                },
            )
            .with_wish(wish_id)
            .with_contribution(contribution.id),
        );

        if newly_funded {
            info!(wish = %wish_id, "wish reached its target");
            self.activity.record(
                Activity::now(
                    ActivityKind::WishCompleted,
                    owner,
                    ActivityMetadata {
                        actor_name: None,
                        wish_title: Some(title),
                        amount: None,
                    },
                )
                .with_wish(wish_id),
            );
        }

        self.publish();
        Ok(contribution)
    }

    /// Like a wish on behalf of `user`.
    ///
    /// Idempotent per user: returns `true` only on the first like, which is
    /// also the only one recorded to the activity feed.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    #[instrument(skip(self, user), fields(user = %user.id))]
    pub fn like_wish(&mut self, wish_id: WishId, user: &User) -> Result<bool, WishStoreError> {
        let wish = self
            .wishes
            .iter()
            .find(|w| w.id == wish_id)
            .ok_or(WishStoreError::NotFound(wish_id))?;
        let title = wish.title.clone();

        let newly_liked = self.likes.entry(wish_id).or_default().insert(user.id);
        if newly_liked {
            info!(wish = %wish_id, "liked wish");
            self.activity.record(
                Activity::now(
                    ActivityKind::WishLiked,
                    user.id,
                    ActivityMetadata {
                        actor_name: Some(user.name.clone()),
                        wish_title: Some(title),
                        amount: None,
                    },
                )
                .with_wish(wish_id),
            );
            self.publish();
        }
        Ok(newly_liked)
    }

    /// Count a share of a wish by `user` and return the new share count.
    ///
    /// The actual clipboard/native-share surface is a presentation concern;
    /// the store only keeps score and feeds the activity log.
    ///
    /// # Errors
    ///
    /// Returns [`WishStoreError::NotFound`] for an unknown wish id.
    #[instrument(skip(self, user), fields(user = %user.id))]
    pub fn share_wish(&mut self, wish_id: WishId, user: &User) -> Result<u64, WishStoreError> {
        let wish = self
            .wishes
            .iter()
            .find(|w| w.id == wish_id)
            .ok_or(WishStoreError::NotFound(wish_id))?;
        let title = wish.title.clone();

        let count = self.shares.entry(wish_id).or_insert(0);
        *count += 1;
        let count = *count;
        info!(wish = %wish_id, count, "shared wish");

        self.activity.record(
            Activity::now(
                ActivityKind::WishShared,
                user.id,
                ActivityMetadata {
                    actor_name: Some(user.name.clone()),
                    wish_title: Some(title),
                    amount: None,
                },
            )
            .with_wish(wish_id),
        );
        self.publish();
        Ok(count)
    }

    /// Merge a partial update into the active feed filters.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.publish();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All wishes, newest-created-first.
    #[must_use]
    pub fn wishes(&self) -> &[Wish] {
        &self.wishes
    }

    /// All contributions, newest-first.
    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// The active feed filters.
    #[must_use]
    pub fn filters(&self) -> &WishFilters {
        &self.filters
    }

    /// Look up a wish by id.
    #[must_use]
    pub fn wish(&self, id: WishId) -> Option<&Wish> {
        self.wishes.iter().find(|w| w.id == id)
    }

    /// The wishes owned by `user_id`, preserving feed order.
    #[must_use]
    pub fn user_wishes(&self, user_id: UserId) -> Vec<Wish> {
        self.wishes
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect()
    }

    /// The contributions against one wish, newest-first.
    #[must_use]
    pub fn contributions_for(&self, wish_id: WishId) -> Vec<Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.wish_id == wish_id)
            .cloned()
            .collect()
    }

    /// How many distinct users have liked a wish.
    #[must_use]
    pub fn like_count(&self, wish_id: WishId) -> usize {
        self.likes.get(&wish_id).map_or(0, HashSet::len)
    }

    /// How many times a wish has been shared.
    #[must_use]
    pub fn share_count(&self, wish_id: WishId) -> u64 {
        self.shares.get(&wish_id).copied().unwrap_or(0)
    }

    /// The feed with the active filters and sort order applied.
    #[must_use]
    pub fn filtered_wishes(&self) -> Vec<Wish> {
        let mut picked: Vec<Wish> = self
            .wishes
            .iter()
            .filter(|w| {
                self.filters
                    .category
                    .as_ref()
                    .is_none_or(|c| w.category.eq_ignore_ascii_case(c))
            })
            .filter(|w| {
                self.filters
                    .price_range
                    .is_none_or(|range| range.contains(w.target.get()))
            })
            .cloned()
            .collect();

        match self.filters.sort {
            // insertion order is already newest-first
            wishflick_core::SortKey::Newest => {}
            wishflick_core::SortKey::Popular => {
                let mut counts: HashMap<WishId, usize> = HashMap::new();
                for c in &self.contributions {
                    *counts.entry(c.wish_id).or_insert(0) += 1;
                }
                picked.sort_by(|a, b| {
                    counts
                        .get(&b.id)
                        .unwrap_or(&0)
                        .cmp(counts.get(&a.id).unwrap_or(&0))
                });
            }
            wishflick_core::SortKey::Progress => {
                picked.sort_by(|a, b| b.progress_percent().cmp(&a.progress_percent()));
            }
            wishflick_core::SortKey::Deadline => {
                picked.sort_by_key(|w| (w.deadline.is_none(), w.deadline));
            }
        }
        picked
    }

    /// Recommendations for a viewer, from the injected provider.
    #[must_use]
    pub fn recommended_for(&self, viewer: Option<&User>, limit: usize) -> Vec<Wish> {
        self.recommender.recommend(viewer, &self.wishes, limit)
    }

    /// The derived activity log.
    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Invariant pass: per wish, the sum of its completed contributions
    /// must equal its raised total.
    ///
    /// Store-mediated mutations maintain this by construction; a non-empty
    /// result means state was altered behind the store's back.
    #[must_use]
    pub fn reconcile(&self) -> Vec<Discrepancy> {
        let mut sums: HashMap<WishId, Decimal> = HashMap::new();
        for c in &self.contributions {
            if c.status == PaymentStatus::Completed {
                *sums.entry(c.wish_id).or_insert(Decimal::ZERO) += c.amount.get();
            }
        }
        self.wishes
            .iter()
            .filter_map(|w| {
                let contributed = sums.get(&w.id).copied().unwrap_or(Decimal::ZERO);
                (contributed != w.current_amount).then(|| Discrepancy {
                    wish_id: w.id,
                    recorded: w.current_amount,
                    contributed,
                })
            })
            .collect()
    }

    /// Subscribe to collection changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WishSnapshot> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(WishSnapshot {
            wishes: self.wishes.clone(),
            contributions: self.contributions.clone(),
            filters: self.filters.clone(),
        });
    }
}
