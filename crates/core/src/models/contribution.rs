//! Contribution (pledge) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Amount, ContributionId, PaymentStatus, UserId, WishId};

/// A monetary pledge against one wish.
///
/// Immutable after creation. With no real payment gateway the status is
/// `Completed` from the start; a future refund path would be the only
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    /// Unique contribution ID.
    pub id: ContributionId,
    /// The wish this pledge targets.
    pub wish_id: WishId,
    /// Contributor identity; `None` when anonymous.
    pub contributor: Option<UserId>,
    /// Pledged amount (strictly positive).
    pub amount: Amount,
    /// Optional message of support.
    pub message: Option<String>,
    /// Whether the contributor chose to stay anonymous.
    pub is_anonymous: bool,
    /// When the pledge was made.
    pub created_at: DateTime<Utc>,
    /// Settlement status.
    pub status: PaymentStatus,
}

impl Contribution {
    /// Build an accepted contribution.
    ///
    /// Anonymity always strips the contributor id, regardless of what the
    /// caller passes: an anonymous pledge never carries identity.
    #[must_use]
    pub fn accepted(
        wish_id: WishId,
        amount: Amount,
        message: Option<String>,
        is_anonymous: bool,
        contributor: Option<UserId>,
    ) -> Self {
        Self {
            id: ContributionId::generate(),
            wish_id,
            contributor: if is_anonymous { None } else { contributor },
            amount,
            message,
            is_anonymous,
            created_at: Utc::now(),
            status: PaymentStatus::Completed,
        }
    }
}
