//! Flashcard generation against the Gemini generative-language API.
//!
//! One synchronous round trip: compose a prompt that pins the output to
//! exactly [`CARDS_PER_SET`] front/back pairs inside a `{"flashcards": [...]}`
//! JSON envelope, send it to `generateContent`, then decode the model's text
//! strictly. The two failure modes stay distinct all the way up:
//! [`GenerateError::Upstream`] carries the API's own message, while
//! [`GenerateError::MalformedOutput`] is a fixed user-facing message — the
//! raw model text is logged at debug level and never shown to the user.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::FlashcardData;

/// How many cards one generation call must produce.
pub const CARDS_PER_SET: usize = 10;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const INSTRUCTIONS: &str = r#"You are a flashcard creator. Your task is to generate concise and effective flashcards based on the given topic or content.
You take in text and create multiple flashcards from it. Make sure to create exactly 10 flashcards.
Both front and back should be one sentence long.
You should return in the following JSON format:
{
  "flashcards":[
    {
      "front": "Front of the card",
      "back": "Back of the card"
    }
  ]
}"#;

/// A failed generation call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The generative API call itself failed (network, quota, service error).
    #[error("{0}")]
    Upstream(String),
    /// The model's reply was not the required JSON envelope.
    #[error("could not parse generated flashcards")]
    MalformedOutput,
}

/// Instruction block followed by the caller's text, verbatim.
fn compose_prompt(text: &str) -> String {
    format!("{INSTRUCTIONS}\n{text}")
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Error body the API returns on a non-2xx status.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// The envelope the model is instructed to produce.
#[derive(Deserialize)]
struct FlashcardEnvelope {
    flashcards: Vec<FlashcardData>,
}

/// Strictly decode the model's text into a card list.
///
/// Anything short of a top-level object holding a `flashcards` array of
/// exactly [`CARDS_PER_SET`] non-empty front/back pairs is rejected whole;
/// there is no repair, truncation, or partial acceptance.
fn parse_flashcards(raw: &str) -> Result<Vec<FlashcardData>, GenerateError> {
    let envelope: FlashcardEnvelope = serde_json::from_str(raw).map_err(|e| {
        tracing::debug!(raw, error = %e, "model output failed to decode");
        GenerateError::MalformedOutput
    })?;

    let cards = envelope.flashcards;
    if cards.len() != CARDS_PER_SET {
        tracing::debug!(raw, count = cards.len(), "model returned the wrong number of cards");
        return Err(GenerateError::MalformedOutput);
    }
    if cards
        .iter()
        .any(|c| c.front.trim().is_empty() || c.back.trim().is_empty())
    {
        tracing::debug!(raw, "model returned a card with an empty side");
        return Err(GenerateError::MalformedOutput);
    }

    Ok(cards)
}

/// Generate exactly [`CARDS_PER_SET`] flashcards from the given source text.
pub async fn generate(text: &str) -> Result<Vec<FlashcardData>, GenerateError> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| GenerateError::Upstream("GEMINI_API_KEY is not set".to_string()))?;
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GenerateError::Upstream(e.to_string()))?;

    let request = GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![Part {
                text: compose_prompt(text),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
        },
    };

    let url =
        format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent");
    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| GenerateError::Upstream(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("generation request failed with status {status}"));
        return Err(GenerateError::Upstream(message));
    }

    let response: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| GenerateError::Upstream(e.to_string()))?;

    let raw = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| GenerateError::Upstream("the model returned no candidates".to_string()))?;

    parse_flashcards(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_with(count: usize) -> String {
        let cards: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"front": "Question {i}?", "back": "Answer {i}."}}"#))
            .collect();
        format!(r#"{{"flashcards": [{}]}}"#, cards.join(","))
    }

    #[test]
    fn prompt_ends_with_caller_text() {
        let prompt = compose_prompt("The Krebs cycle");
        assert!(prompt.starts_with("You are a flashcard creator."));
        assert!(prompt.ends_with("\nThe Krebs cycle"));
        assert!(prompt.contains("exactly 10 flashcards"));
        assert!(prompt.contains(r#""flashcards""#));
    }

    #[test]
    fn parses_a_full_envelope_in_order() {
        let cards = parse_flashcards(&envelope_with(10)).unwrap();
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[0].front, "Question 0?");
        assert_eq!(cards[9].back, "Answer 9.");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_flashcards("{\"flashcards\": [").unwrap_err();
        assert!(matches!(err, GenerateError::MalformedOutput));
    }

    #[test]
    fn rejects_a_bare_array() {
        let err = parse_flashcards(r#"[{"front": "a", "back": "b"}]"#).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedOutput));
    }

    #[test]
    fn rejects_a_missing_flashcards_key() {
        let err = parse_flashcards(r#"{"cards": []}"#).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedOutput));
    }

    #[test]
    fn rejects_the_wrong_card_count() {
        assert!(matches!(
            parse_flashcards(&envelope_with(9)),
            Err(GenerateError::MalformedOutput)
        ));
        assert!(matches!(
            parse_flashcards(&envelope_with(11)),
            Err(GenerateError::MalformedOutput)
        ));
    }

    #[test]
    fn rejects_an_empty_card_side() {
        let raw = envelope_with(10).replace("Answer 3.", "   ");
        assert!(matches!(
            parse_flashcards(&raw),
            Err(GenerateError::MalformedOutput)
        ));
    }

    #[test]
    fn error_messages_stay_distinct() {
        let upstream = GenerateError::Upstream("quota exceeded".to_string());
        assert_eq!(upstream.to_string(), "quota exceeded");
        assert_eq!(
            GenerateError::MalformedOutput.to_string(),
            "could not parse generated flashcards"
        );
    }
}
