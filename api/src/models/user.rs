//! User account model.
//!
//! [`User`] (server only) is the full `users` row, loaded with
//! [`sqlx::FromRow`]. FlashDeck accounts are email+password only, so the row
//! always carries an Argon2 `password_hash`. [`User::to_info`] projects it
//! into a [`UserInfo`], the subset that crosses the server/client boundary:
//! no hash, no timestamps, and the `Uuid` flattened to a `String` so it
//! works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserInfo {
    /// Display name, falling back to the email address if the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name() {
        let info = UserInfo {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
        };
        assert_eq!(info.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let info = UserInfo {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "   ".to_string(),
        };
        assert_eq!(info.display_name(), "ada@example.com");
    }
}
