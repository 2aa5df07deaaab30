/// Account service - signup, login and profile lookup
use crate::{
    error::{Result, ServerError},
    services::token::{Claims, TokenService},
};
use quill_core::{IdentityStore, NewUser, QuillError, User};
use std::sync::Arc;

/// A user together with a freshly issued access token
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}

pub struct AccountService {
    identity: Arc<dyn IdentityStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            identity,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new account and issue its first token
    pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> Result<Session> {
        if full_name.is_empty() {
            return Err(ServerError::InvalidInput(
                "Please enter your full name".to_string(),
            ));
        }
        if email.is_empty() {
            return Err(ServerError::InvalidInput("Email is required".to_string()));
        }
        if password.is_empty() {
            return Err(ServerError::InvalidInput("Password is required".to_string()));
        }

        if self.identity.find_by_email(email).await?.is_some() {
            return Err(ServerError::AlreadyExists("User already exists".to_string()));
        }

        let password_hash = self.hash_password(password).await?;

        let user = self
            .identity
            .create_user(NewUser {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup for the same email
                QuillError::AlreadyExists(_) => {
                    ServerError::AlreadyExists("User already exists".to_string())
                }
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, "Account created");

        let access_token = self.tokens.issue(&user)?;
        Ok(Session { user, access_token })
    }

    /// Check credentials and issue a token
    ///
    /// Unknown email and wrong password are reported identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(ServerError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }

        let user = self
            .identity
            .find_by_email(email)
            .await?
            .ok_or(ServerError::InvalidCredentials)?;

        let password_hash = self
            .identity
            .password_hash(&user.id)
            .await?
            .ok_or(ServerError::InvalidCredentials)?;

        if !self.verify_password(password, &password_hash).await? {
            tracing::info!(user_id = %user.id, "Login rejected");
            return Err(ServerError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(&user)?;
        Ok(Session { user, access_token })
    }

    /// Live profile of the token's subject
    pub async fn profile(&self, claims: &Claims) -> Result<User> {
        self.identity
            .find_by_id(&claims.user_id())
            .await?
            .ok_or_else(|| ServerError::Unauthenticated("User not found".to_string()))
    }

    /// Hash a password using bcrypt
    pub async fn hash_password(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ServerError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| ServerError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(ServerError::from)
    }
}
