//! Store flow tests: theme persistence and notification expiry through
//! the wired application.

use std::sync::Arc;
use std::time::Duration;

use doctheque::config::Settings;
use doctheque::domain::entities::{Notification, NotificationKind};
use doctheque::domain::value_objects::Theme;
use doctheque::startup::Application;

use crate::common::{FakeAdminGateway, FakeAuthGateway, FakeDocumentGateway, TestApp};

#[tokio::test]
async fn test_theme_toggle_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut settings = Settings::default();
    settings.storage.path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .into_owned();

    let auth = Arc::new(FakeAuthGateway::default());
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
        assert_eq!(app.store.theme(), Theme::Light);
        app.store.toggle_theme();
        assert_eq!(app.store.theme(), Theme::Dark);
    }

    let app = Application::build(settings, auth, documents, admin).expect("second build");
    assert_eq!(app.store.theme(), Theme::Dark);
}

#[tokio::test(start_paused = true)]
async fn test_notifications_expire_on_schedule() {
    let app = TestApp::new();

    app.app
        .store
        .show_notification(NotificationKind::Info, "bientôt partie");

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert_eq!(app.app.store.notifications().len(), 1);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(app.app.store.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sticky_notification_outlives_the_dismiss_window() {
    let app = TestApp::new();

    let id = app
        .app
        .store
        .push_notification(Notification::new(NotificationKind::Error, "toujours là").sticky());

    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(app.app.store.notifications().len(), 1);

    app.app.store.remove_notification(id);
    assert!(app.app.store.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismissal_beats_the_timer() {
    let app = TestApp::new();

    let id = app
        .app
        .store
        .show_notification(NotificationKind::Success, "vite dissipée");

    tokio::time::sleep(Duration::from_millis(1000)).await;
    app.app.store.remove_notification(id);

    // The timer fires later against an already-removed id; nothing else
    // must disappear.
    let survivor = app
        .app
        .store
        .show_notification(NotificationKind::Info, "indépendante");
    tokio::time::sleep(Duration::from_millis(4500)).await;

    let toasts = app.app.store.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].id, survivor);
}

#[tokio::test]
async fn test_subscribers_observe_transitions() {
    let app = TestApp::new();
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    let token = app.app.store.subscribe(move |state| {
        seen_clone.lock().push(state.loading);
    });

    app.app.store.set_loading(true);
    app.app.store.set_loading(false);
    app.app.store.unsubscribe(token);
    app.app.store.set_loading(true);

    assert_eq!(*seen.lock(), vec![true, false]);
}
