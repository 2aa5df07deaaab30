/// Account service tests
/// Tests signup validation, email uniqueness, password hashing and login
mod common;

use common::{create_test_storage, TEST_BCRYPT_COST, TEST_SECRET};
use quill_core::{IdentityStore, UserId};
use quill_server::{AccountService, ServerError, TokenService};
use std::sync::Arc;

async fn create_account_service() -> (AccountService, Arc<quill_storage::SqliteStorage>, tempfile::TempDir) {
    let (storage, temp_dir) = create_test_storage().await;
    let tokens = Arc::new(TokenService::with_default_expiration(TEST_SECRET));
    let service = AccountService::new(storage.clone(), tokens, TEST_BCRYPT_COST);
    (service, storage, temp_dir)
}

/// Test signup persists a hashed credential, never the plain password
#[tokio::test]
async fn test_sign_up_hashes_password() {
    let (accounts, storage, _dir) = create_account_service().await;

    let session = accounts
        .sign_up("Ada Lovelace", "ada@example.com", "analytical-engine")
        .await
        .unwrap();

    assert_eq!(session.user.full_name, "Ada Lovelace");
    assert!(!session.access_token.is_empty());

    let hash = storage
        .password_hash(&session.user.id)
        .await
        .unwrap()
        .expect("credential stored");
    assert_ne!(hash, "analytical-engine");
    assert!(hash.starts_with("$2b$") || hash.starts_with("$2a$"));
    assert!(accounts.verify_password("analytical-engine", &hash).await.unwrap());
}

/// Test required fields are checked in order
#[tokio::test]
async fn test_sign_up_requires_fields() {
    let (accounts, _storage, _dir) = create_account_service().await;

    let cases = [
        ("", "a@example.com", "pw", "Please enter your full name"),
        ("Ada", "", "pw", "Email is required"),
        ("Ada", "a@example.com", "", "Password is required"),
    ];

    for (name, email, password, expected) in cases {
        match accounts.sign_up(name, email, password).await {
            Err(ServerError::InvalidInput(msg)) => assert_eq!(msg, expected),
            other => panic!("expected InvalidInput, got {:?}", other.map(|s| s.user)),
        }
    }
}

/// Test duplicate email in any case is rejected
#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let (accounts, storage, _dir) = create_account_service().await;

    let first = accounts
        .sign_up("First", "same@example.com", "pw-one")
        .await
        .unwrap();

    let second = accounts.sign_up("Second", "SAME@Example.com", "pw-two").await;
    assert!(matches!(second, Err(ServerError::AlreadyExists(_))));

    let stored = storage
        .find_by_email("same@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first.user.id);
    assert_eq!(stored.full_name, "First");

    accounts
        .sign_up("Émile", "Émile@example.com", "pw-three")
        .await
        .unwrap();
    let accented = accounts.sign_up("Other", "ÉMILE@example.com", "pw-four").await;
    assert!(matches!(accented, Err(ServerError::AlreadyExists(_))));

    let session = accounts.login("émile@example.com", "pw-three").await.unwrap();
    assert_eq!(session.user.full_name, "Émile");
}

/// Test login with correct and incorrect credentials
#[tokio::test]
async fn test_login() {
    let (accounts, _storage, _dir) = create_account_service().await;

    let created = accounts
        .sign_up("Login User", "login@example.com", "correct-horse")
        .await
        .unwrap();

    let session = accounts
        .login("LOGIN@example.com", "correct-horse")
        .await
        .unwrap();
    assert_eq!(session.user.id, created.user.id);

    let wrong = accounts.login("login@example.com", "battery-staple").await;
    assert!(matches!(wrong, Err(ServerError::InvalidCredentials)));

    let unknown = accounts.login("nobody@example.com", "correct-horse").await;
    assert!(matches!(unknown, Err(ServerError::InvalidCredentials)));

    let missing = accounts.login("", "correct-horse").await;
    assert!(matches!(missing, Err(ServerError::InvalidInput(_))));
}

/// Test profile lookup re-resolves the live user
#[tokio::test]
async fn test_profile_lookup() {
    let (accounts, _storage, _dir) = create_account_service().await;
    let tokens = TokenService::with_default_expiration(TEST_SECRET);

    let session = accounts
        .sign_up("Profile User", "profile@example.com", "pw")
        .await
        .unwrap();

    let claims = tokens.verify(&session.access_token).unwrap();
    let user = accounts.profile(&claims).await.unwrap();
    assert_eq!(user, session.user);

    // A validly signed token for a user that no longer resolves
    let mut ghost = session.user.clone();
    ghost.id = UserId::new("ghost");
    let ghost_claims = tokens.verify(&tokens.issue(&ghost).unwrap()).unwrap();
    assert!(matches!(
        accounts.profile(&ghost_claims).await,
        Err(ServerError::Unauthenticated(_))
    ));
}
