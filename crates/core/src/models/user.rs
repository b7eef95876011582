//! User identity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, Privacy, UserId};

/// A WishFlick user.
///
/// Identity records are fabricated locally - there is no identity backend.
/// Follower/following lists hold weak references by id; no referential
/// integrity is enforced between them and any user collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address. `None` only for the guest placeholder.
    pub email: Option<Email>,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
    /// Optional profile bio.
    pub bio: Option<String>,
    /// Profile visibility setting.
    pub privacy: Privacy,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
    /// IDs of users this user follows.
    pub following: Vec<UserId>,
    /// IDs of users following this user.
    pub followers: Vec<UserId>,
}

impl User {
    /// Build a freshly registered user.
    #[must_use]
    pub fn registered(name: impl Into<String>, email: Email) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: Some(email),
            avatar_url: None,
            bio: None,
            privacy: Privacy::default(),
            created_at: Utc::now(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Build the fixed mock identity for the simulated Google sign-in.
    #[must_use]
    pub fn google_mock() -> Self {
        Self {
            id: UserId::GOOGLE,
            name: "Google User".to_owned(),
            email: Email::parse("user@gmail.com").ok(),
            avatar_url: Some("https://static.wishflick.example/avatars/google.jpg".to_owned()),
            bio: None,
            privacy: Privacy::default(),
            created_at: Utc::now(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Build the fixed mock identity for the simulated Facebook sign-in.
    #[must_use]
    pub fn facebook_mock() -> Self {
        Self {
            id: UserId::FACEBOOK,
            name: "Facebook User".to_owned(),
            email: Email::parse("user@facebook.com").ok(),
            avatar_url: Some("https://static.wishflick.example/avatars/facebook.jpg".to_owned()),
            bio: None,
            privacy: Privacy::default(),
            created_at: Utc::now(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Build the non-persisted guest placeholder.
    ///
    /// Guests browse read-only; they have no email and never count as
    /// authenticated.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            id: UserId::GUEST,
            name: "Guest User".to_owned(),
            email: None,
            avatar_url: None,
            bio: None,
            privacy: Privacy::default(),
            created_at: Utc::now(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Merge a partial profile update into this user.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(privacy) = update.privacy {
            self.privacy = privacy;
        }
    }
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<Email>,
    /// New avatar image URL.
    pub avatar_url: Option<String>,
    /// New profile bio.
    pub bio: Option<String>,
    /// New visibility setting.
    pub privacy: Option<Privacy>,
}
