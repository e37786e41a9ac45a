//! Flashcard and flashcard-set types shared between server and client.
//!
//! A card is a front/back sentence pair with positional identity only: it is
//! created by one generation call, persisted as part of a named set, and
//! never edited afterwards. [`FlashcardSetInfo`] is the listing projection of
//! a saved set; the cards themselves are fetched separately per set.

use serde::{Deserialize, Serialize};

/// One flashcard: a front/back pair of single sentences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashcardData {
    pub front: String,
    pub back: String,
}

/// A saved set as shown in the user's set listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashcardSetInfo {
    pub name: String,
    pub card_count: i64,
}
