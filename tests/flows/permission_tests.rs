//! Permission flow tests: capabilities as observed through the store.

use doctheque::application::dto::Credentials;
use doctheque::domain::entities::User;

use crate::common::{admin_user, librarian_user, student_user, TestApp};

#[tokio::test]
async fn test_guest_has_no_capabilities() {
    let app = TestApp::new();

    let caps = app.app.store.capabilities(&app.app.settings.permissions);

    assert!(!caps.can_view);
    assert!(!caps.can_download);
    assert!(!caps.can_add);
    assert_eq!(caps.user_type(), "Invité");
}

#[tokio::test]
async fn test_student_can_read_but_not_write() {
    let app = TestApp::with_account("etudiant1@univ.fr", "motdepasse", student_user(1));
    app.app
        .session
        .login(&Credentials {
            email: "etudiant1@univ.fr".into(),
            password: "motdepasse".into(),
        })
        .await
        .expect("login");

    let caps = app.app.store.capabilities(&app.app.settings.permissions);

    assert!(caps.can_view);
    assert!(caps.can_download);
    assert!(!caps.can_add);
    assert!(!caps.can_edit);
    assert!(!caps.can_delete);
    assert!(caps.is_student);
}

#[tokio::test]
async fn test_staff_account_gets_full_capabilities() {
    let app = TestApp::new();
    app.app.store.set_user(Some(admin_user(1)));

    let caps = app.app.store.capabilities(&app.app.settings.permissions);

    assert!(caps.is_admin);
    assert!(caps.can_add && caps.can_edit && caps.can_delete);
    assert_eq!(caps.user_type(), "Administrateur");
}

#[tokio::test]
async fn test_librarian_profile_is_read_only() {
    let app = TestApp::new();
    app.app.store.set_user(Some(librarian_user(2)));

    let caps = app.app.store.capabilities(&app.app.settings.permissions);

    assert!(caps.is_librarian);
    assert!(caps.can_view && caps.can_download);
    assert!(!caps.can_add && !caps.can_edit && !caps.can_delete);
    assert_eq!(caps.user_type(), "Bibliothécaire");
}

#[tokio::test]
async fn test_allow_listed_email_overrides_student_signals() {
    let app = TestApp::new();
    // Default settings allow-list this address.
    app.app.store.set_user(Some(User {
        email: "admin@gmail.com".into(),
        user_type: Some("etudiant".into()),
        ..student_user(3)
    }));

    let caps = app.app.store.capabilities(&app.app.settings.permissions);

    assert!(caps.is_admin);
}

#[tokio::test]
async fn test_capabilities_follow_user_changes() {
    let app = TestApp::new();

    app.app.store.set_user(Some(admin_user(1)));
    assert!(app
        .app
        .store
        .capabilities(&app.app.settings.permissions)
        .is_admin);

    app.app.store.set_user(None);
    assert!(!app
        .app
        .store
        .capabilities(&app.app.settings.permissions)
        .can_view);
}
