//! # API crate — shared fullstack server functions for FlashDeck
//!
//! This crate is the backbone of the FlashDeck fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Local email+password authentication, session key, password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`generate`] | `server` | Prompt composition, Gemini call, strict decoding of generated cards |
//! | [`models`] | — | Database models (`User`) and client-safe projections (`UserInfo`, `FlashcardData`, `FlashcardSetInfo`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as a
//! thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `logout`, `register`, `login_password`
//! - **Generation**: `generate_flashcards`
//! - **Flashcard sets**: `list_flashcard_sets`, `create_flashcard_set`, `get_set_cards`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod generate;
pub mod models;

pub use models::{FlashcardData, FlashcardSetInfo, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1::BIGINT AS n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helper: resolve the authenticated user's id from the session.
#[cfg(feature = "server")]
async fn require_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Helper: log a store failure and hand the client a generic message.
#[cfg(feature = "server")]
fn store_error(e: sqlx::Error) -> ServerFnError {
    tracing::error!(error = %e, "flashcard store error");
    ServerFnError::new("An error occurred while accessing your flashcards")
}

/// Generate exactly ten flashcards from the given source text.
#[cfg(feature = "server")]
#[post("/api/generate")]
pub async fn generate_flashcards(text: String) -> Result<Vec<FlashcardData>, ServerFnError> {
    if text.trim().is_empty() {
        return Err(ServerFnError::new("Some source text is required"));
    }

    generate::generate(&text)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/generate")]
pub async fn generate_flashcards(text: String) -> Result<Vec<FlashcardData>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the caller's saved sets, oldest first (append order).
#[cfg(feature = "server")]
#[get("/api/sets", session: tower_sessions::Session)]
pub async fn list_flashcard_sets() -> Result<Vec<FlashcardSetInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool().await.map_err(store_error)?;

    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT s.name, COUNT(f.id)
         FROM flashcard_sets s
         LEFT JOIN flashcards f ON f.set_id = s.id
         WHERE s.user_id = $1
         GROUP BY s.id, s.name
         ORDER BY s.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(store_error)?;

    Ok(rows
        .into_iter()
        .map(|(name, card_count)| FlashcardSetInfo { name, card_count })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/sets")]
pub async fn list_flashcard_sets() -> Result<Vec<FlashcardSetInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Save a generated card list under a new set name.
///
/// The set row and its cards are written in one transaction, with the name
/// claimed via `ON CONFLICT DO NOTHING`: either the whole set becomes
/// visible or nothing does, and a duplicate name can never clobber an
/// existing set — not even under concurrent saves.
#[cfg(feature = "server")]
#[post("/api/sets", session: tower_sessions::Session)]
pub async fn create_flashcard_set(
    name: String,
    cards: Vec<FlashcardData>,
) -> Result<FlashcardSetInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Please enter a name for your flashcard set"));
    }
    if cards.is_empty() {
        return Err(ServerFnError::new("There are no flashcards to save"));
    }

    let pool = get_pool().await.map_err(store_error)?;
    let mut tx = pool.begin().await.map_err(store_error)?;

    let inserted: Option<(i64,)> = sqlx::query_as(
        "INSERT INTO flashcard_sets (user_id, name) VALUES ($1, $2)
         ON CONFLICT (user_id, name) DO NOTHING
         RETURNING id",
    )
    .bind(user_id)
    .bind(&name)
    .fetch_optional(&mut *tx)
    .await
    .map_err(store_error)?;

    let Some((set_id,)) = inserted else {
        return Err(ServerFnError::new(
            "A flashcard set with the same name already exists",
        ));
    };

    for (position, card) in cards.iter().enumerate() {
        sqlx::query(
            "INSERT INTO flashcards (set_id, position, front, back) VALUES ($1, $2, $3, $4)",
        )
        .bind(set_id)
        .bind(position as i32)
        .bind(&card.front)
        .bind(&card.back)
        .execute(&mut *tx)
        .await
        .map_err(store_error)?;
    }

    tx.commit().await.map_err(store_error)?;

    Ok(FlashcardSetInfo {
        name,
        card_count: cards.len() as i64,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/sets")]
pub async fn create_flashcard_set(
    name: String,
    cards: Vec<FlashcardData>,
) -> Result<FlashcardSetInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the cards of one of the caller's sets, in write order.
#[cfg(feature = "server")]
#[get("/api/sets/:name/cards", session: tower_sessions::Session)]
pub async fn get_set_cards(name: String) -> Result<Vec<FlashcardData>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user_id(&session).await?;

    let pool = get_pool().await.map_err(store_error)?;

    let set: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM flashcard_sets WHERE user_id = $1 AND name = $2",
    )
    .bind(user_id)
    .bind(&name)
    .fetch_optional(pool)
    .await
    .map_err(store_error)?;

    let Some((set_id,)) = set else {
        return Err(ServerFnError::new("No flashcard set with that name"));
    };

    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT front, back FROM flashcards WHERE set_id = $1 ORDER BY position",
    )
    .bind(set_id)
    .fetch_all(pool)
    .await
    .map_err(store_error)?;

    Ok(rows
        .into_iter()
        .map(|(front, back)| FlashcardData { front, back })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/sets/:name/cards")]
pub async fn get_set_cards(name: String) -> Result<Vec<FlashcardData>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
