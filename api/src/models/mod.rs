//! Database models and their client-safe projections.

mod flashcard;
mod user;

pub use flashcard::{FlashcardData, FlashcardSetInfo};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
