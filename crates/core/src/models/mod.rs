//! Entity models for WishFlick.
//!
//! These are validated domain objects; the state containers in the `app`
//! crate own the collections, these types only describe the records.

pub mod activity;
pub mod contribution;
pub mod filters;
pub mod user;
pub mod wish;

pub use activity::{Activity, ActivityMetadata};
pub use contribution::Contribution;
pub use filters::{FilterUpdate, PriceRange, WishFilters};
pub use user::{ProfileUpdate, User};
pub use wish::{DraftError, Wish, WishDraft, WishUpdate};
