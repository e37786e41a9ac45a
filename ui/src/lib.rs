//! This crate contains all shared UI for the FlashDeck workspace.

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod flip_card;
pub use flip_card::FlipCard;

mod save_dialog;
pub use save_dialog::SaveSetDialog;

mod study;
pub use study::StudyDeck;
