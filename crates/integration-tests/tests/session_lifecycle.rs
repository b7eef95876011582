//! Session lifecycle: login variants, persistence across restart, logout.

use secrecy::SecretString;
use wishflick_app::{AppConfig, FileVault, SessionStore, WishFlick, WishStore};
use wishflick_core::ProfileUpdate;
use wishflick_integration_tests::{in_memory_app, init_tracing};

fn password() -> SecretString {
    SecretString::from("correct horse battery staple")
}

#[test]
fn password_login_authenticates() {
    let mut app = in_memory_app();
    assert!(!app.session().is_authenticated());

    let user = app.session_mut().login("jo@example.com", &password()).unwrap();
    assert!(app.session().is_authenticated());
    assert_eq!(user.email.unwrap().as_str(), "jo@example.com");
}

#[test]
fn federated_logins_are_fixed_identities() {
    let mut app = in_memory_app();
    let google = app.session_mut().login_with_google();
    app.session_mut().logout();
    let again = app.session_mut().login_with_google();
    assert_eq!(google.id, again.id);

    let facebook = app.session_mut().login_with_facebook();
    assert_ne!(facebook.id, again.id);
    assert!(app.session().is_authenticated());
}

#[test]
fn session_survives_restart_with_file_vault() {
    init_tracing();
    let path = std::env::temp_dir().join(format!("wishflick-it-{}.json", uuid::Uuid::new_v4()));
    let config = AppConfig {
        session_file: Some(path.clone()),
        ..AppConfig::default()
    };

    let registered = {
        let mut app = WishFlick::open(config.clone());
        app.session_mut()
            .register("Jo", "jo@example.com", &password())
            .unwrap()
    };

    // "restart": a brand new app over the same vault file
    let app = WishFlick::open(config.clone());
    assert!(app.session().is_authenticated());
    assert_eq!(app.session().user().unwrap().id, registered.id);

    // logout, then restart again: signed out stays signed out
    let mut app = app;
    app.session_mut().logout();
    let app = WishFlick::open(config);
    assert!(!app.session().is_authenticated());
    assert!(app.session().user().is_none());

    std::fs::remove_file(&path).ok();
}

#[test]
fn profile_update_persists_through_the_vault() {
    init_tracing();
    let path = std::env::temp_dir().join(format!("wishflick-it-{}.json", uuid::Uuid::new_v4()));
    let config = AppConfig {
        session_file: Some(path.clone()),
        ..AppConfig::default()
    };

    {
        let mut app = WishFlick::open(config.clone());
        app.session_mut().login("jo@example.com", &password()).unwrap();
        app.session_mut().update_profile(ProfileUpdate {
            bio: Some("Saving for a camera".to_owned()),
            ..ProfileUpdate::default()
        });
    }

    let app = WishFlick::open(config);
    assert_eq!(
        app.session().user().unwrap().bio.as_deref(),
        Some("Saving for a camera")
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn from_parts_supports_injected_stores() {
    init_tracing();
    let path = std::env::temp_dir().join(format!("wishflick-it-{}.json", uuid::Uuid::new_v4()));
    let mut session = SessionStore::new(Box::new(FileVault::new(&path)));
    session.restore();

    let mut app = WishFlick::from_parts(AppConfig::default(), session, WishStore::new());
    app.session_mut().login("jo@example.com", &password()).unwrap();
    assert!(app.session().is_authenticated());

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn session_subscribers_are_notified() {
    let mut app = in_memory_app();
    let mut rx = app.session().subscribe();
    app.session_mut().login("jo@example.com", &password()).unwrap();

    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert!(snapshot.is_authenticated);
    assert!(snapshot.user.is_some());
}
