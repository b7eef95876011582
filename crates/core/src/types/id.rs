//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are UUIDv7
//! under the hood, so freshly generated IDs sort by creation time.

use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`uuid::Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `generate()` producing a time-ordered UUIDv7
/// - `From<Uuid>` and `Into<Uuid>` implementations
///
/// # Example
///
/// ```rust
/// # use wishflick_core::define_id;
/// define_id!(UserId);
/// define_id!(WishId);
///
/// let user_id = UserId::generate();
/// let wish_id = WishId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: UserId = wish_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a fresh time-ordered ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::now_v7())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(WishId);
define_id!(ContributionId);
define_id!(ActivityId);

impl UserId {
    /// Fixed identity produced by the simulated Google sign-in.
    ///
    /// Deliberately non-unique across sessions: every "Google login"
    /// yields the same record, matching the mock federation contract.
    pub const GOOGLE: Self = Self(Uuid::from_u128(0x6f00_61e0_0000_7000_8000_000000000001));

    /// Fixed identity produced by the simulated Facebook sign-in.
    pub const FACEBOOK: Self = Self(Uuid::from_u128(0x6f00_61e0_0000_7000_8000_000000000002));

    /// Fixed identity for the guest placeholder.
    pub const GUEST: Self = Self(Uuid::from_u128(0x6f00_61e0_0000_7000_8000_000000000003));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = WishId::generate();
        let b = WishId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_time_ordered() {
        let a = ContributionId::generate();
        let b = ContributionId::generate();
        assert!(a <= b);
    }

    #[test]
    fn provider_ids_are_stable() {
        assert_eq!(UserId::GOOGLE, UserId::GOOGLE);
        assert_ne!(UserId::GOOGLE, UserId::FACEBOOK);
        assert_ne!(UserId::GOOGLE, UserId::GUEST);
    }

    #[test]
    fn serde_is_transparent() {
        let id = UserId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
