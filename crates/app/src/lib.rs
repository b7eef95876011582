//! WishFlick App - client-side state containers.
//!
//! Two cooperating stores, consumed by a presentation layer that stays out
//! of this crate:
//!
//! - [`session::SessionStore`] - zero-or-one authenticated identity and the
//!   session lifecycle, backed by a pluggable key-value vault
//! - [`wishes::WishStore`] - the wish and contribution collections, with
//!   the feed queries, likes, and the derived activity log
//!
//! [`WishFlick`] wires the two together and gates write intents on the
//! session, so a guest can never reach a store mutation.
//!
//! Everything runs on a single logical thread: mutations take `&mut self`,
//! there is no locking, and each mutation publishes an immutable snapshot
//! through a `tokio::sync::watch` channel for subscribed views.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod app;
pub mod config;
pub mod feed;
pub mod recommend;
pub mod session;
pub mod wishes;

pub use app::{Dispatch, WishFlick};
pub use config::{AppConfig, ConfigError};
pub use feed::{ActivityFeed, ActivityLog, SeededFeed};
pub use recommend::{CategoryAffinity, LeadingWishes, Recommender};
pub use session::vault::{FileVault, MemoryVault, SessionVault, VaultError};
pub use session::{SessionError, SessionSnapshot, SessionStore};
pub use wishes::{Discrepancy, WishSnapshot, WishStore, WishStoreError};
