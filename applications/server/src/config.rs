/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default, skip_serializing)]
    pub jwt_secret: String,

    #[serde(default = "default_token_expiration_minutes")]
    pub token_expiration_minutes: u64,

    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

// The signing secret must never end up in logs
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"<redacted>")
            .field("token_expiration_minutes", &self.token_expiration_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `config.toml` in the working directory; a missing
    /// file is not an error. Environment variables prefixed with `QUILL_`
    /// override file values, with `__` between section and key
    /// (e.g. `QUILL_AUTH__JWT_SECRET`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("QUILL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set QUILL_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.token_expiration_minutes == 0 {
            return Err(ServerError::Config(
                "auth.token_expiration_minutes must be greater than zero".to_string(),
            ));
        }

        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ServerError::Config(format!(
                "auth.bcrypt_cost must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/quill.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        token_expiration_minutes: default_token_expiration_minutes(),
        bcrypt_cost: default_bcrypt_cost(),
    }
}

fn default_token_expiration_minutes() -> u64 {
    36_000
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.token_expiration_minutes, 36_000);
        assert_eq!(config.auth.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn validate_requires_secret() {
        let config = ServerConfig::default();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));

        let mut config = ServerConfig::default();
        config.auth.jwt_secret = "s3cret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_expiration() {
        let mut config = ServerConfig::default();
        config.auth.jwt_secret = "s3cret".to_string();
        config.auth.token_expiration_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[auth]\njwt_secret = \"from-file\"\n",
        )
        .unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.auth.jwt_secret, "from-file");
        assert_eq!(config.auth.token_expiration_minutes, 36_000);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let result = ServerConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn debug_redacts_secret() {
        let mut config = ServerConfig::default();
        config.auth.jwt_secret = "top-secret-value".to_string();
        assert!(!format!("{:?}", config).contains("top-secret-value"));
    }

    #[test]
    fn serialize_omits_secret() {
        let mut config = ServerConfig::default();
        config.auth.jwt_secret = "top-secret-value".to_string();

        let value = serde_json::to_value(&config).unwrap();
        assert!(value["auth"].get("jwt_secret").is_none());
        assert_eq!(value["auth"]["token_expiration_minutes"], 36_000);
        assert!(!value.to_string().contains("top-secret-value"));
    }
}
