use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use innkeep_core::{AdminId, DomainError, DomainResult};

use crate::password::{hash_password, PasswordError};

/// A back-office admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub admin_id: AdminId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create an admin account with a freshly hashed password.
    pub fn create(
        username: impl Into<String>,
        password: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::validation("username must not be empty"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password must not be empty"));
        }

        let password_hash = hash_password(password)
            .map_err(|e: PasswordError| DomainError::validation(e.to_string()))?;

        Ok(Self {
            admin_id: AdminId::new(),
            username,
            password_hash,
            role: "admin".to_string(),
            created_at: now,
        })
    }
}
