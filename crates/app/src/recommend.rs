//! Pluggable wish recommendation providers.
//!
//! The store's contract is only "given a viewer, produce an ordered,
//! possibly-empty sequence of wishes". [`LeadingWishes`] reproduces the
//! historical non-personalized behavior (a fixed-size prefix of the feed);
//! [`CategoryAffinity`] prefers categories the viewer already has wishes
//! in.

use std::collections::HashSet;

use wishflick_core::{User, Wish};

/// An ordered source of recommended wishes.
pub trait Recommender {
    /// Recommend up to `limit` wishes from `wishes` (newest first) for the
    /// given viewer.
    fn recommend(&self, viewer: Option<&User>, wishes: &[Wish], limit: usize) -> Vec<Wish>;
}

/// Non-personalized provider: the leading slice of the feed, regardless of
/// viewer. This mirrors the historical behavior and is not required
/// semantics - swap in a real provider freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingWishes;

impl Recommender for LeadingWishes {
    fn recommend(&self, _viewer: Option<&User>, wishes: &[Wish], limit: usize) -> Vec<Wish> {
        wishes.iter().take(limit).cloned().collect()
    }
}

/// Category-affinity provider: prefers other users' wishes in categories
/// the viewer already has wishes in, then fills with the leading feed.
///
/// The viewer's own wishes are never recommended. Without a viewer (or
/// without any owned wishes to learn from) this degrades to
/// [`LeadingWishes`] minus self-authored entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryAffinity;

impl Recommender for CategoryAffinity {
    fn recommend(&self, viewer: Option<&User>, wishes: &[Wish], limit: usize) -> Vec<Wish> {
        let Some(viewer) = viewer else {
            return LeadingWishes.recommend(None, wishes, limit);
        };

        let own_categories: HashSet<&str> = wishes
            .iter()
            .filter(|w| w.user_id == viewer.id)
            .map(|w| w.category.as_str())
            .collect();

        let candidates = || wishes.iter().filter(|w| w.user_id != viewer.id);

        let mut picked: Vec<Wish> = candidates()
            .filter(|w| own_categories.contains(w.category.as_str()))
            .take(limit)
            .cloned()
            .collect();

        if picked.len() < limit {
            let already: HashSet<_> = picked.iter().map(|w| w.id).collect();
            picked.extend(
                candidates()
                    .filter(|w| !already.contains(&w.id))
                    .take(limit - picked.len())
                    .cloned(),
            );
        }

        picked
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wishflick_core::{Amount, Email, Privacy, UserId, WishDraft};

    fn user(name: &str) -> User {
        User::registered(name, Email::parse(&format!("{name}@example.com")).unwrap())
    }

    fn wish(owner: UserId, title: &str, category: &str) -> Wish {
        WishDraft {
            title: title.to_owned(),
            description: String::new(),
            target: Amount::from_units(100).unwrap(),
            image_url: None,
            category: category.to_owned(),
            deadline: None,
            tags: Vec::new(),
            privacy: Privacy::Public,
        }
        .into_wish(owner)
    }

    #[test]
    fn leading_wishes_ignores_viewer() {
        let viewer = user("viewer");
        let wishes = vec![
            wish(UserId::generate(), "a", "Tech"),
            wish(UserId::generate(), "b", "Tech"),
            wish(UserId::generate(), "c", "Tech"),
            wish(UserId::generate(), "d", "Tech"),
        ];
        let picked = LeadingWishes.recommend(Some(&viewer), &wishes, 3);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.first().map(|w| w.title.clone()).unwrap(), "a");
    }

    #[test]
    fn affinity_prefers_viewer_categories() {
        let viewer = user("viewer");
        let other = UserId::generate();
        let wishes = vec![
            wish(other, "drone", "Tech"),
            wish(viewer.id, "own camera", "Creative"),
            wish(other, "lens", "Creative"),
            wish(other, "console", "Gaming"),
        ];

        let picked = CategoryAffinity.recommend(Some(&viewer), &wishes, 2);
        assert_eq!(picked.first().map(|w| w.title.clone()).unwrap(), "lens");
        // filled up from the leading feed, never the viewer's own wish
        assert!(picked.iter().all(|w| w.user_id != viewer.id));
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn affinity_without_viewer_degrades_to_prefix() {
        let wishes = vec![
            wish(UserId::generate(), "a", "Tech"),
            wish(UserId::generate(), "b", "Gaming"),
        ];
        let picked = CategoryAffinity.recommend(None, &wishes, 5);
        assert_eq!(picked.len(), 2);
    }
}
