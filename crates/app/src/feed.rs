//! Activity feed providers.
//!
//! The contract is small: given an optional viewer, produce an ordered,
//! possibly-empty sequence of [`Activity`] entries. [`ActivityLog`] is the
//! real provider, derived from store mutations; [`SeededFeed`] serves
//! canned entries for demo screens with no history yet.

use std::collections::VecDeque;

use chrono::Utc;
use rust_decimal::Decimal;
use wishflick_core::{Activity, ActivityKind, ActivityMetadata, UserId, WishId};

/// An ordered source of activity entries for the social feed.
pub trait ActivityFeed {
    /// Most recent entries, newest first, at most `limit`.
    ///
    /// `viewer` is a hook for per-viewer personalization; current providers
    /// serve the same feed to everyone.
    fn recent(&self, viewer: Option<UserId>, limit: usize) -> Vec<Activity>;
}

/// Bounded in-memory log of real state changes, newest first.
///
/// Entries are display-only and never authoritative; when the log is full
/// the oldest entries fall off.
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl ActivityLog {
    /// Create a log retaining at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record a state change at the head of the log.
    pub fn record(&mut self, activity: Activity) {
        self.entries.push_front(activity);
        self.entries.truncate(self.capacity);
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ActivityFeed for ActivityLog {
    fn recent(&self, _viewer: Option<UserId>, limit: usize) -> Vec<Activity> {
        self.entries.iter().take(limit).cloned().collect()
    }
}

/// Static demo feed: a fixed set of entries served to everyone.
///
/// Stands in for the real log on first-run screens; none of its entries
/// correspond to actual store state.
#[derive(Debug, Default)]
pub struct SeededFeed {
    entries: Vec<Activity>,
}

impl SeededFeed {
    /// Serve exactly the given entries (assumed newest first).
    #[must_use]
    pub const fn new(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    /// A small built-in demo feed.
    #[must_use]
    pub fn demo() -> Self {
        let supporter = UserId::generate();
        let dreamer = UserId::generate();
        let wish = WishId::generate();
        let entries = vec![
            Activity {
                id: wishflick_core::ActivityId::generate(),
                kind: ActivityKind::ContributionMade,
                user_id: supporter,
                wish_id: Some(wish),
                contribution_id: None,
                created_at: Utc::now(),
                metadata: ActivityMetadata {
                    actor_name: Some("Sarah M.".to_owned()),
                    wish_title: Some("MacBook Pro for Creative Work".to_owned()),
                    amount: Some(Decimal::new(50, 0)),
                },
            },
            Activity {
                id: wishflick_core::ActivityId::generate(),
                kind: ActivityKind::WishCreated,
                user_id: dreamer,
                wish_id: Some(wish),
                contribution_id: None,
                created_at: Utc::now(),
                metadata: ActivityMetadata {
                    actor_name: Some("Alex R.".to_owned()),
                    wish_title: Some("Photography Equipment".to_owned()),
                    amount: None,
                },
            },
        ];
        Self { entries }
    }
}

impl ActivityFeed for SeededFeed {
    fn recent(&self, _viewer: Option<UserId>, limit: usize) -> Vec<Activity> {
        self.entries.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: ActivityKind) -> Activity {
        Activity::now(kind, UserId::generate(), ActivityMetadata::default())
    }

    #[test]
    fn log_serves_newest_first() {
        let mut log = ActivityLog::new(10);
        log.record(entry(ActivityKind::WishCreated));
        log.record(entry(ActivityKind::ContributionMade));

        let recent = log.recent(None, 10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent.first().map(|a| a.kind), Some(ActivityKind::ContributionMade));
    }

    #[test]
    fn log_is_bounded() {
        let mut log = ActivityLog::new(3);
        for _ in 0..5 {
            log.record(entry(ActivityKind::WishLiked));
        }
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn limit_is_respected() {
        let mut log = ActivityLog::new(10);
        for _ in 0..5 {
            log.record(entry(ActivityKind::WishShared));
        }
        assert_eq!(log.recent(None, 2).len(), 2);
    }

    #[test]
    fn seeded_feed_is_static() {
        let feed = SeededFeed::demo();
        assert_eq!(feed.recent(None, 10).len(), feed.recent(None, 10).len());
        assert!(!feed.recent(None, 10).is_empty());
    }
}
