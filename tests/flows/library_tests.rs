//! Library flow tests: loading, searching, and the document lifecycle.

use doctheque::application::dto::{DocumentPatch, DocumentUpload};
use doctheque::application::store::FILTER_ALL;
use doctheque::domain::entities::NotificationKind;

use crate::common::{sample_document, TestApp};

#[tokio::test]
async fn test_load_populates_cache_and_stats() {
    let app = TestApp::new();
    app.documents.seed(vec![
        sample_document(1, "Cours d'algèbre", "pdf"),
        sample_document(2, "Schéma réseau", "image"),
    ]);

    app.app.library.load_documents().await.expect("load");

    let state = app.app.store.state();
    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.stats.total_documents, 2);
    assert_eq!(state.stats.total_size, 2048);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_load_accepts_pagination_envelope() {
    let app = TestApp::new();
    app.documents
        .seed(vec![sample_document(5, "Polycopié", "pdf")]);
    app.documents.answer_with_envelope();

    app.app.library.load_documents().await.expect("load");

    assert_eq!(app.app.store.state().documents.len(), 1);
    assert_eq!(app.app.store.state().documents[0].id, 5);
}

#[tokio::test]
async fn test_load_failure_raises_toast_and_clears_loading() {
    let app = TestApp::new();
    app.documents.fail_from_now_on();

    let result = app.app.library.load_documents().await;

    assert!(result.is_err());
    assert!(!app.app.store.loading());
    let toasts = app.app.store.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Erreur lors du chargement des documents");
}

#[tokio::test]
async fn test_search_and_filter_narrow_the_view() {
    let app = TestApp::new();
    app.documents.seed(vec![
        sample_document(1, "Cours d'algèbre", "pdf"),
        sample_document(2, "Cours de chimie", "pdf"),
        sample_document(3, "Schéma réseau", "image"),
    ]);
    app.app.library.load_documents().await.expect("load");

    app.app.store.set_search_query("cours");
    assert_eq!(app.app.store.filtered_documents().len(), 2);

    app.app.store.set_filter("image");
    app.app.store.set_search_query("");
    assert_eq!(app.app.store.filtered_documents().len(), 1);
    assert_eq!(app.app.store.filtered_documents()[0].id, 3);

    app.app.store.set_filter(FILTER_ALL);
    assert_eq!(app.app.store.filtered_documents().len(), 3);
}

#[tokio::test]
async fn test_upload_prepends_and_notifies() {
    let app = TestApp::new();
    app.documents
        .seed(vec![sample_document(1, "Ancien", "pdf")]);
    app.app.library.load_documents().await.expect("load");

    let upload = DocumentUpload {
        title: "Nouveau cours".into(),
        description: "Support de TD".into(),
        document_type: "pdf".into(),
        file_name: "nouveau.pdf".into(),
        data: vec![0u8; 512],
    };
    let document = app.app.library.upload(&upload).await.expect("upload");

    let state = app.app.store.state();
    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.documents[0].id, document.id);
    assert_eq!(state.documents[0].title, "Nouveau cours");

    let toasts = app.app.store.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Document ajouté avec succès");
}

#[tokio::test]
async fn test_update_refreshes_cache_entry() {
    let app = TestApp::new();
    app.documents
        .seed(vec![sample_document(1, "Brouillon", "pdf")]);
    app.app.library.load_documents().await.expect("load");

    let patch = DocumentPatch {
        title: Some("Version finale".into()),
        ..Default::default()
    };
    app.app.library.update(1, &patch).await.expect("update");

    assert_eq!(app.app.store.state().documents[0].title, "Version finale");
}

#[tokio::test]
async fn test_delete_removes_entry_and_notifies() {
    let app = TestApp::new();
    app.documents.seed(vec![
        sample_document(1, "Cours", "pdf"),
        sample_document(2, "Annexe", "pdf"),
    ]);
    app.app.library.load_documents().await.expect("load");

    app.app.library.delete(1).await.expect("delete");

    let state = app.app.store.state();
    assert_eq!(state.documents.len(), 1);
    assert_eq!(state.documents[0].id, 2);
    assert_eq!(
        app.app.store.notifications()[0].message,
        "Document supprimé avec succès"
    );
}

#[tokio::test]
async fn test_delete_of_unknown_document_keeps_cache() {
    let app = TestApp::new();
    app.documents.seed(vec![sample_document(1, "Cours", "pdf")]);
    app.app.library.load_documents().await.expect("load");

    let result = app.app.library.delete(99).await;

    assert!(result.is_err());
    assert_eq!(app.app.store.state().documents.len(), 1);
    assert_eq!(
        app.app.store.notifications()[0].kind,
        NotificationKind::Error
    );
}

#[tokio::test]
async fn test_download_returns_bytes_without_touching_cache() {
    let app = TestApp::new();
    app.documents.seed(vec![sample_document(1, "Cours", "pdf")]);

    let content = app.app.library.download(1).await.expect("download");

    assert_eq!(content.file_name, "Cours.pdf");
    assert_eq!(content.data.len(), 1024);
    assert!(app.app.store.state().documents.is_empty());
    assert!(app.app.store.notifications().is_empty());
}
