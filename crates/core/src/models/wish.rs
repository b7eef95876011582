//! Wish (funding goal) model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Amount, Privacy, UserId, WishId};

/// Errors produced when validating a [`WishDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The title is empty or whitespace-only.
    #[error("wish title cannot be blank")]
    BlankTitle,
}

/// A user-authored funding goal.
///
/// `current_amount` starts at zero and only ever increases, and only via
/// accepted contributions. There is no ceiling at `target`: overfunding is
/// allowed, and [`Wish::progress_percent`] clamps at 100 for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wish {
    /// Unique wish ID.
    pub id: WishId,
    /// Owning user.
    pub user_id: UserId,
    /// Short title.
    pub title: String,
    /// Longer description of the goal.
    pub description: String,
    /// Funding target (strictly positive).
    pub target: Amount,
    /// Total raised so far. Non-negative; may exceed `target`.
    pub current_amount: Decimal,
    /// Optional product/goal image URL.
    pub image_url: Option<String>,
    /// Free-form category label.
    pub category: String,
    /// Whether the wish is open for contributions.
    pub is_active: bool,
    /// Optional funding deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// When the wish was created.
    pub created_at: DateTime<Utc>,
    /// When the wish was last updated.
    pub updated_at: DateTime<Utc>,
    /// Free-form tags, unordered.
    pub tags: Vec<String>,
    /// Visibility setting.
    pub privacy: Privacy,
}

impl Wish {
    /// Funding progress as a percentage, clamped to `0..=100`.
    ///
    /// `min(current / target, 1) * 100`, so an overfunded wish still
    /// displays 100.
    #[must_use]
    pub fn progress_percent(&self) -> Decimal {
        let ratio = (self.current_amount / self.target.get()).min(Decimal::ONE);
        ratio * Decimal::ONE_HUNDRED
    }

    /// Whether the wish has reached (or exceeded) its target.
    #[must_use]
    pub fn is_funded(&self) -> bool {
        self.current_amount >= self.target.get()
    }
}

/// Input for creating a wish: everything the owner supplies.
///
/// The store assigns the id, zeroes `current_amount`, and stamps the
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishDraft {
    /// Short title. Must not be blank.
    pub title: String,
    /// Longer description of the goal.
    pub description: String,
    /// Funding target (strictly positive by construction).
    pub target: Amount,
    /// Optional product/goal image URL.
    pub image_url: Option<String>,
    /// Free-form category label.
    pub category: String,
    /// Optional funding deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Visibility setting.
    pub privacy: Privacy,
}

impl WishDraft {
    /// Validate the draft.
    ///
    /// Target positivity is already guaranteed by [`Amount`]; the only
    /// remaining rule is a non-blank title.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::BlankTitle`] if the title is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::BlankTitle);
        }
        Ok(())
    }

    /// Materialize the draft into a [`Wish`] owned by `user_id`.
    #[must_use]
    pub fn into_wish(self, user_id: UserId) -> Wish {
        let now = Utc::now();
        Wish {
            id: WishId::generate(),
            user_id,
            title: self.title,
            description: self.description,
            target: self.target,
            current_amount: Decimal::ZERO,
            image_url: self.image_url,
            category: self.category,
            is_active: true,
            deadline: self.deadline,
            created_at: now,
            updated_at: now,
            tags: self.tags,
            privacy: self.privacy,
        }
    }
}

/// Partial wish update; absent fields are left unchanged.
///
/// `current_amount` is deliberately not updatable here - raised totals move
/// only through accepted contributions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New funding target.
    pub target: Option<Amount>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New category label.
    pub category: Option<String>,
    /// Open/close for contributions.
    pub is_active: Option<bool>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
    /// New visibility setting.
    pub privacy: Option<Privacy>,
}

impl WishUpdate {
    /// Merge this update into `wish`, refreshing `updated_at`.
    pub fn apply(self, wish: &mut Wish) {
        if let Some(title) = self.title {
            wish.title = title;
        }
        if let Some(description) = self.description {
            wish.description = description;
        }
        if let Some(target) = self.target {
            wish.target = target;
        }
        if let Some(image_url) = self.image_url {
            wish.image_url = Some(image_url);
        }
        if let Some(is_active) = self.is_active {
            wish.is_active = is_active;
        }
        if let Some(category) = self.category {
            wish.category = category;
        }
        if let Some(deadline) = self.deadline {
            wish.deadline = Some(deadline);
        }
        if let Some(tags) = self.tags {
            wish.tags = tags;
        }
        if let Some(privacy) = self.privacy {
            wish.privacy = privacy;
        }
        wish.updated_at = Utc::now();
    }
}
