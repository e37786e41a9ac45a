//! Cookie-session and local email+password authentication.

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};

/// Key for storing the authenticated user's id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
