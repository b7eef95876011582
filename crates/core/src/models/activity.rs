//! Activity feed entry model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ActivityId, ActivityKind, ContributionId, UserId, WishId};

/// A derived, display-only record of a state change.
///
/// Never authoritative: the wish and contribution collections are the
/// source of truth. Carries denormalized display metadata so the feed can
/// render without joining back into the stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity ID.
    pub id: ActivityId,
    /// What happened.
    pub kind: ActivityKind,
    /// The acting user.
    pub user_id: UserId,
    /// The wish involved, if any.
    pub wish_id: Option<WishId>,
    /// The contribution involved, if any.
    pub contribution_id: Option<ContributionId>,
    /// When it happened.
    pub created_at: DateTime<Utc>,
    /// Denormalized render metadata.
    pub metadata: ActivityMetadata,
}

/// Display-convenience fields copied from the entities at record time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMetadata {
    /// Actor display name ("Anonymous" for anonymous pledges).
    pub actor_name: Option<String>,
    /// Title of the wish involved.
    pub wish_title: Option<String>,
    /// Amount involved, for contribution entries.
    pub amount: Option<Decimal>,
}

impl Activity {
    /// Record a state change happening now.
    #[must_use]
    pub fn now(kind: ActivityKind, user_id: UserId, metadata: ActivityMetadata) -> Self {
        Self {
            id: ActivityId::generate(),
            kind,
            user_id,
            wish_id: None,
            contribution_id: None,
            created_at: Utc::now(),
            metadata,
        }
    }

    /// Attach the wish this activity refers to.
    #[must_use]
    pub fn with_wish(mut self, wish_id: WishId) -> Self {
        self.wish_id = Some(wish_id);
        self
    }

    /// Attach the contribution this activity refers to.
    #[must_use]
    pub fn with_contribution(mut self, contribution_id: ContributionId) -> Self {
        self.contribution_id = Some(contribution_id);
        self
    }
}
