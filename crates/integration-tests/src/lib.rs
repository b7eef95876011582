//! Cross-store scenario tests for WishFlick.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wishflick-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `contribution_flow` - Funding math, anonymity, reconciliation
//! - `session_lifecycle` - Login variants, restart, logout
//! - `guest_gate` - The facade's authentication gate
//! - `feed_queries` - Filters, ordering, recommendations, activity
//!
//! The helpers here assemble a fully in-memory application; nothing in
//! these tests touches the filesystem unless a test asks for a file vault
//! explicitly.

use secrecy::SecretString;

use wishflick_app::{AppConfig, WishFlick};
use wishflick_core::{Amount, Privacy, WishDraft};

/// Install a test-friendly tracing subscriber (once per process).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// A fully in-memory application with the session already restored.
#[must_use]
pub fn in_memory_app() -> WishFlick {
    init_tracing();
    WishFlick::open(AppConfig::default())
}

/// An application signed in as a fresh demo user.
#[must_use]
pub fn signed_in_app(email: &str) -> WishFlick {
    let mut app = in_memory_app();
    app.session_mut()
        .login(email, &SecretString::from("correct horse battery staple"))
        .unwrap_or_else(|e| panic!("demo login failed: {e}"));
    app
}

/// A public draft with the given title and whole-unit target.
#[must_use]
pub fn draft(title: &str, target_units: i64) -> WishDraft {
    draft_in(title, target_units, "Technology")
}

/// A public draft in a specific category.
#[must_use]
pub fn draft_in(title: &str, target_units: i64, category: &str) -> WishDraft {
    WishDraft {
        title: title.to_owned(),
        description: format!("{title} - integration test goal"),
        target: Amount::from_units(target_units)
            .unwrap_or_else(|e| panic!("bad test target: {e}")),
        image_url: None,
        category: category.to_owned(),
        deadline: None,
        tags: vec!["test".to_owned()],
        privacy: Privacy::Public,
    }
}

/// A strictly positive amount from whole units.
#[must_use]
pub fn units(value: i64) -> Amount {
    Amount::from_units(value).unwrap_or_else(|e| panic!("bad test amount: {e}"))
}
