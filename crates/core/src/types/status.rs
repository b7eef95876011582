//! Status and classification enums for domain entities.

use serde::{Deserialize, Serialize};

/// Visibility setting for users and wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Privacy {
    /// Visible to everyone.
    #[default]
    Public,
    /// Visible only to the owner.
    Private,
    /// Visible to followers/friends.
    Friends,
}

/// Settlement status of a contribution.
///
/// There is no real payment gateway: contributions are created `Completed`.
/// `Pending` and `Refunded` are reserved for a future settlement/refund
/// path and never produced by the current flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

/// What kind of state change an activity feed entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    WishCreated,
    ContributionMade,
    WishCompleted,
    WishLiked,
    WishShared,
}

/// Feed ordering selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    /// Most contributions first.
    Popular,
    /// Highest funding progress first.
    Progress,
    /// Soonest deadline first; wishes without a deadline sort last.
    Deadline,
}

impl std::fmt::Display for Privacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Friends => write!(f, "friends"),
        }
    }
}

impl std::str::FromStr for Privacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "friends" => Ok(Self::Friends),
            _ => Err(format!("invalid privacy setting: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn privacy_round_trips_through_str() {
        for privacy in [Privacy::Public, Privacy::Private, Privacy::Friends] {
            let parsed: Privacy = privacy.to_string().parse().unwrap();
            assert_eq!(parsed, privacy);
        }
    }

    #[test]
    fn payment_status_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn activity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityKind::ContributionMade).unwrap();
        assert_eq!(json, "\"contribution_made\"");
    }
}
