//! SQL backend tests over a throwaway sqlite database file.

use std::sync::Arc;

use isletme_api::db;
use isletme_api::services::numbering::DocumentScope;
use isletme_api::storage::{SqlStorage, Storage};

async fn sqlite_storage(tag: &str) -> Arc<SqlStorage> {
    let path = std::env::temp_dir().join(format!(
        "isletme-api-test-{}-{}.sqlite",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let conn = db::establish_connection(&url).await.unwrap();
    db::run_migrations(&conn).await.unwrap();
    Arc::new(SqlStorage::new(Arc::new(conn)))
}

#[tokio::test]
async fn concurrent_reservations_never_fail_or_duplicate() {
    let storage = sqlite_storage("counter").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .next_document_number(DocumentScope::Proje)
                .await
                .expect("reservation should not fail")
        }));
    }
    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap());
    }
    values.sort_unstable();
    assert_eq!(values, (1..=8).collect::<Vec<i32>>());
}

#[tokio::test]
async fn scopes_reserve_independently() {
    let storage = sqlite_storage("scopes").await;

    assert_eq!(
        storage
            .next_document_number(DocumentScope::TeklifVerilen)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        storage
            .next_document_number(DocumentScope::TeklifVerilen)
            .await
            .unwrap(),
        2
    );
    assert_eq!(
        storage
            .next_document_number(DocumentScope::TeklifAlinan)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        storage
            .next_document_number(DocumentScope::Proje)
            .await
            .unwrap(),
        1
    );
}
