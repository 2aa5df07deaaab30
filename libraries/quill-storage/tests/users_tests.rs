//! Integration tests for the users vertical slice
//!
//! - Account creation with credential row
//! - Case-insensitive email lookup and uniqueness
//! - Lookup by ID


use quill_core::{IdentityStore, NewUser, QuillError, UserId};
use quill_storage::{SqliteStorage, StorageError};
use test_helpers::*;

fn new_user(email: &str) -> NewUser {
    NewUser {
        full_name: "Grace Hopper".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$abcdefghijklmnopqrstuuvwxyzabcdefghijklmnopqrstuvwxy".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = quill_storage::users::create(pool, new_user("grace@example.com"))
        .await
        .expect("Failed to create user");

    assert_eq!(user.full_name, "Grace Hopper");
    assert_eq!(user.email, "grace@example.com");

    let by_id = quill_storage::users::find_by_id(pool, &user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id, user);

    let by_email = quill_storage::users::find_by_email(pool, "grace@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
}

#[tokio::test]
async fn test_find_by_email_ignores_case() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_user(pool, "Mixed.Case@Example.com").await;

    let found = quill_storage::users::find_by_email(pool, "mixed.case@EXAMPLE.COM")
        .await
        .unwrap()
        .expect("lookup should ignore case");
    assert_eq!(found.id, id);
}

#[tokio::test]
async fn test_duplicate_email_any_case_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_user(pool, "dup@example.com").await;

    let result = quill_storage::users::create(pool, new_user("DUP@example.com")).await;
    assert!(matches!(result, Err(StorageError::Conflict(_))));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "no duplicate user should be persisted");

    let credentials: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_credentials")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(credentials, 1);
}

#[tokio::test]
async fn test_non_ascii_email_case_is_one_account() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_user(pool, "Émile@example.com").await;

    let found = quill_storage::users::find_by_email(pool, "émile@EXAMPLE.com")
        .await
        .unwrap()
        .expect("lookup should fold non-ASCII case");
    assert_eq!(found.id, id);
    assert_eq!(found.email, "Émile@example.com");

    let result = quill_storage::users::create(pool, new_user("émile@example.com")).await;
    assert!(matches!(result, Err(StorageError::Conflict(_))));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_password_hash_lookup() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = quill_storage::users::create(pool, new_user("hash@example.com"))
        .await
        .unwrap();

    let hash = quill_storage::users::get_password_hash(pool, &user.id)
        .await
        .unwrap();
    assert_eq!(hash.as_deref(), Some(new_user("x").password_hash.as_str()));

    let missing = quill_storage::users::get_password_hash(pool, &UserId::new("nobody"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_identity_store_maps_conflict_to_already_exists() {
    let test_db = TestDb::new().await;
    let storage = SqliteStorage::new(test_db.pool().clone());

    storage
        .create_user(new_user("store@example.com"))
        .await
        .unwrap();

    let result = storage.create_user(new_user("Store@Example.com")).await;
    assert!(matches!(result, Err(QuillError::AlreadyExists(_))));
}

#[tokio::test]
async fn test_find_unknown_user() {
    let test_db = TestDb::new().await;
    let storage = SqliteStorage::new(test_db.pool().clone());

    assert!(storage
        .find_by_id(&UserId::new("missing"))
        .await
        .unwrap()
        .is_none());
    assert!(storage
        .find_by_email("missing@example.com")
        .await
        .unwrap()
        .is_none());
}
