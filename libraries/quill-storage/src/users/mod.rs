//! User accounts and credential queries

use crate::error::{Result, StorageError};
use crate::timestamps::{from_millis, now_millis};
use quill_core::types::{NewUser, User, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Create a user together with its credential row
///
/// Both rows are written in one transaction. Uniqueness is enforced on the
/// lowercased email, so a second account for the same address in any letter
/// case (ASCII or not) fails with `StorageError::Conflict`.
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User> {
    let user = User {
        id: UserId::generate(),
        full_name: new_user.full_name,
        email: new_user.email,
        created_on: now_millis()?,
    };
    let created_on = user.created_on.timestamp_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO users (id, full_name, email, email_key, created_on) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.full_name)
    .bind(&user.email)
    .bind(email_key(&user.email))
    .bind(created_on)
    .execute(&mut *tx)
    .await
    .map_err(|e| StorageError::from_write(e, "User", user.id.as_str()))?;

    sqlx::query(
        "INSERT INTO user_credentials (user_id, password_hash, updated_on) VALUES (?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&new_user.password_hash)
    .bind(created_on)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(user)
}

/// Find a user by email, ignoring letter case
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row =
        sqlx::query("SELECT id, full_name, email, created_on FROM users WHERE email_key = ?")
            .bind(email_key(email))
            .fetch_optional(pool)
            .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Find a user by ID
pub async fn find_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, full_name, email, created_on FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Get user's password hash for authentication
///
/// Returns `None` if the user has no credentials
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let hash: Option<String> =
        sqlx::query_scalar("SELECT password_hash FROM user_credentials WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(hash)
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        email: row.try_get("email")?,
        created_on: from_millis(row.try_get("created_on")?)?,
    })
}
