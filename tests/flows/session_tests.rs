//! Session flow tests: login, logout, restart, and degraded restores.

use std::sync::Arc;

use doctheque::application::dto::Credentials;
use doctheque::config::Settings;
use doctheque::domain::entities::NotificationKind;
use doctheque::startup::Application;

use crate::common::{student_user, FakeAdminGateway, FakeAuthGateway, FakeDocumentGateway, TestApp};

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_login_populates_store() {
    let app = TestApp::with_account("etudiant1@univ.fr", "motdepasse", student_user(1));

    let user = app
        .app
        .session
        .login(&credentials("etudiant1@univ.fr", "motdepasse"))
        .await
        .expect("login with known account");

    assert_eq!(user.id, 1);
    assert_eq!(app.app.store.user().map(|u| u.id), Some(1));
    assert!(!app.app.store.loading());
}

#[tokio::test]
async fn test_login_with_wrong_password_raises_error_toast() {
    let app = TestApp::with_account("etudiant1@univ.fr", "motdepasse", student_user(1));

    let result = app
        .app
        .session
        .login(&credentials("etudiant1@univ.fr", "faux"))
        .await;

    assert!(result.is_err());
    assert!(app.app.store.user().is_none());
    let toasts = app.app.store.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].message, "Erreur de connexion");
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut settings = Settings::default();
    settings.storage.path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .into_owned();

    let auth = Arc::new(FakeAuthGateway::default());
    auth.add_account("etudiant1@univ.fr", "motdepasse", student_user(1));
    let documents = Arc::new(FakeDocumentGateway::default());
    let admin = Arc::new(FakeAdminGateway::default());

    {
        let app = Application::build(
            settings.clone(),
            auth.clone(),
            documents.clone(),
            admin.clone(),
        )
        .expect("first build");
        app.session
            .login(&credentials("etudiant1@univ.fr", "motdepasse"))
            .await
            .expect("login");
    }

    // Same preference file, fresh store: the snapshot is rehydrated
    // before any backend call is made.
    let app = Application::build(settings, auth, documents, admin).expect("second build");
    assert_eq!(app.store.user().map(|u| u.id), Some(1));

    app.restore_session().await;
    assert_eq!(app.store.user().map(|u| u.id), Some(1));
}

#[tokio::test]
async fn test_logout_clears_snapshot_across_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut settings = Settings::default();
    settings.storage.path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .into_owned();

    let auth = Arc::new(FakeAuthGateway::default());
    auth.add_account("etudiant1@univ.fr", "motdepasse", student_user(1));
    let documents = Arc::new(FakeDocumentGateway::default());
    let admin = Arc::new(FakeAdminGateway::default());

    {
        let app = Application::build(
            settings.clone(),
            auth.clone(),
            documents.clone(),
            admin.clone(),
        )
        .expect("first build");
        app.session
            .login(&credentials("etudiant1@univ.fr", "motdepasse"))
            .await
            .expect("login");
        app.session.logout().await;
    }

    let app = Application::build(settings, auth, documents, admin).expect("second build");
    assert!(app.store.user().is_none());
}

#[tokio::test]
async fn test_restore_keeps_snapshot_when_backend_is_down() {
    let app = TestApp::with_account("etudiant1@univ.fr", "motdepasse", student_user(1));

    app.app
        .session
        .login(&credentials("etudiant1@univ.fr", "motdepasse"))
        .await
        .expect("login");

    app.auth.fail_from_now_on();
    app.app.restore_session().await;

    // The profile refresh failed but the session itself still exists,
    // so the user stays signed in on the stale snapshot.
    assert_eq!(app.app.store.user().map(|u| u.id), Some(1));
}

#[tokio::test]
async fn test_restore_without_session_yields_guest() {
    let app = TestApp::new();

    app.app.restore_session().await;

    assert!(app.app.store.user().is_none());
}
