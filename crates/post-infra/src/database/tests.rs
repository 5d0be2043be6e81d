use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use post_core::domain::PageRequest;
use post_core::error::StoreError;
use post_core::ports::{NewCategory, NewPost, PostPatch, PostStore};

use crate::database::entity::{category, post};
use crate::database::postgres_store::PostgresPostStore;

fn post_model(title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        category_id: None,
        title: title.to_owned(),
        url: "google.com".to_owned(),
        created_at: now.into(),
        modified_at: now.into(),
    }
}

fn rows_affected(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}

#[tokio::test]
async fn test_get_post_by_id() {
    let model = post_model("Test Post");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model]])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let post = store.get_post(post_id).await.unwrap();

    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.category_id, None);
}

#[tokio::test]
async fn test_get_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let result = store.get_post(Uuid::new_v4()).await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_list_posts_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model("newer"), post_model("older")]])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let posts = store
        .list_posts(Some(Uuid::new_v4()), PageRequest::resolve(3, 1))
        .await
        .unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_create_post_returns_entity_with_fresh_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(1)])
        .into_connection();
    let store = PostgresPostStore::new(db);
    let owner = Uuid::new_v4();

    let post = store
        .create_post(NewPost {
            user_id: owner,
            category_id: None,
            title: "First post".to_string(),
            url: "google.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(post.user_id, owner);
    assert_eq!(post.created_at, post.modified_at);
    assert!(!post.id.is_nil());
}

#[tokio::test]
async fn test_create_post_with_no_rows_written_is_not_created() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(0)])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let result = store
        .create_post(NewPost {
            user_id: Uuid::new_v4(),
            category_id: None,
            title: "First post".to_string(),
            url: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(StoreError::NotCreated { entity: "post" })
    ));
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(0)])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let result = store
        .update_post(
            Uuid::new_v4(),
            PostPatch {
                title: "new title".to_string(),
                url: String::new(),
            },
        )
        .await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_update_existing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(1)])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let result = store.update_post(Uuid::new_v4(), PostPatch::default()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_twice_reports_not_found_second_time() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(1), rows_affected(0)])
        .into_connection();
    let store = PostgresPostStore::new(db);
    let id = Uuid::new_v4();

    assert!(store.delete_post(id).await.is_ok());
    assert!(matches!(
        store.delete_post(id).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_post_exists_counts_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(0)))])]])
        .into_connection();
    let store = PostgresPostStore::new(db);

    assert!(!store.post_exists(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_create_category() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(1)])
        .into_connection();
    let store = PostgresPostStore::new(db);
    let owner = Uuid::new_v4();

    let created = store
        .create_category(NewCategory {
            user_id: owner,
            name: "News".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.name, "News");
    assert_eq!(created.user_id, owner);
}

#[tokio::test]
async fn test_list_categories_maps_rows() {
    let model = category::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "News".to_owned(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let categories = store
        .list_categories(PageRequest::resolve(0, 0))
        .await
        .unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, model.id);
}

#[tokio::test]
async fn test_query_failure_is_reported_as_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("boom".to_owned())])
        .into_connection();
    let store = PostgresPostStore::new(db);

    let result = store.get_post(Uuid::new_v4()).await;

    assert!(matches!(result, Err(StoreError::Query(msg)) if msg.contains("boom")));
}

#[tokio::test]
async fn test_offset_past_bigint_range_is_an_empty_page() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let store = PostgresPostStore::new(db);
    let page = PageRequest::resolve(u32::MAX, u32::MAX);

    assert!(store.list_posts(None, page).await.unwrap().is_empty());
    assert!(store.list_categories(page).await.unwrap().is_empty());

    // Neither call reached the database.
    assert!(store.db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_update_keeps_modified_at_at_or_after_created_at() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([rows_affected(1)])
        .into_connection();
    let store = PostgresPostStore::new(db);

    store
        .update_post(Uuid::new_v4(), PostPatch::default())
        .await
        .unwrap();

    let log = format!("{:?}", store.db.into_transaction_log());
    assert!(log.contains("GREATEST("), "{log}");
}
