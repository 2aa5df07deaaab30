/// User domain types
use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
///
/// The credential is not part of this type; storage keeps it separately as a
/// bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub created_on: DateTime<Utc>,
}

/// Data for creating a new account
#[derive(Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    /// bcrypt hash of the secret, never the secret itself
    pub password_hash: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
