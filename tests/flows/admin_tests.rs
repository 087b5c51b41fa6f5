//! Admin flow tests: user management against the wired application.

use doctheque::application::dto::{NewUserRequest, UserPatch};
use doctheque::domain::entities::NotificationKind;

use crate::common::{admin_user, student_user, TestApp};

#[tokio::test]
async fn test_user_management_lifecycle() {
    let app = TestApp::new();
    app.admin.seed(vec![admin_user(1), student_user(2)]);

    let users = app.app.admin.load_users().await.expect("list");
    assert_eq!(users.len(), 2);

    let created = app
        .app
        .admin
        .create_user(&NewUserRequest {
            username: "nouvelle".into(),
            email: "nouvelle@univ.fr".into(),
            password: "motdepasse".into(),
            role: Some("bibliothecaire".into()),
        })
        .await
        .expect("create");
    assert_eq!(created.role.as_deref(), Some("bibliothecaire"));

    let patched = app
        .app
        .admin
        .update_user(
            created.id,
            &UserPatch {
                first_name: Some("Nouvelle".into()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(patched.first_name, "Nouvelle");

    app.app.admin.delete_user(2).await.expect("delete");
    let users = app.app.admin.load_users().await.expect("list again");
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.id != 2));
}

#[tokio::test]
async fn test_admin_listing_never_touches_session_user() {
    let app = TestApp::new();
    app.admin.seed(vec![admin_user(1)]);
    app.app.store.set_user(Some(student_user(9)));

    app.app.admin.load_users().await.expect("list");

    assert_eq!(app.app.store.user().map(|u| u.id), Some(9));
}

#[tokio::test]
async fn test_admin_failure_raises_error_toast() {
    let app = TestApp::new();
    app.admin.fail_from_now_on();

    let result = app.app.admin.load_users().await;

    assert!(result.is_err());
    assert!(!app.app.store.loading());
    let toasts = app.app.store.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn test_usage_stats_reflect_seeded_accounts() {
    let app = TestApp::new();
    app.admin.seed(vec![admin_user(1), student_user(2), student_user(3)]);

    let stats = app.app.admin.usage_stats().await.expect("stats");

    assert_eq!(stats.total_users, 3);
}
