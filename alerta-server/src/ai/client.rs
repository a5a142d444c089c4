//! Trending-keyword extraction client
//!
//! Submits the current batch of alert descriptions to the hosted
//! generative-text service and parses a strict structured response
//! back out. Stateless: every invocation re-submits the batch and
//! re-derives the keywords, so recompute is safe at any frequency.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of trending keywords returned
pub const MAX_KEYWORDS: usize = 5;

/// Prompt template for keyword extraction
///
/// The model is instructed to answer with a JSON object holding
/// exactly one field, `topKeywords`.
const PROMPT_TEMPLATE: &str = "You are an AI assistant tasked with identifying the top 5 \
trending keywords from a collection of civic alert descriptions. Analyze the following \
descriptions and extract the most relevant keywords, ensuring they reflect the prevalent \
issues or concerns mentioned.\n\n\
Alert Descriptions: {descriptions}\n\n\
Identify and return the top 5 keywords that best represent the trending issues.\n\n\
Respond with a JSON object containing exactly one field, for example:\n\
{\"topKeywords\": [\"keyword1\", \"keyword2\", \"keyword3\", \"keyword4\", \"keyword5\"]}";

/// Keyword extraction error
///
/// Network failure, service rejection and schema-validation failure
/// all surface as a single error state — the caller never sees a
/// partial keyword list.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Request to generative-text service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generative-text service rejected the request (status {status})")]
    Service { status: u16, body: String },

    #[error("Generative-text response failed schema validation")]
    Schema { raw: String },

    #[error("Generative-text response contained no candidates")]
    Empty,
}

/// Strict output schema: an object with exactly one field
///
/// `deny_unknown_fields` rejects any extra or misnamed field instead
/// of silently coercing it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordPayload {
    #[serde(rename = "topKeywords")]
    top_keywords: Vec<String>,
}

// Envelope of the generateContent API. Only the fields we read are
// modeled; the envelope itself is allowed to grow.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Client for the hosted generative-text service
///
/// Constructed once at startup and injected through `ServerState`.
#[derive(Debug)]
pub struct KeywordExtractor {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl KeywordExtractor {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    /// Extract up to [`MAX_KEYWORDS`] trending keywords from a batch
    /// of alert descriptions
    ///
    /// Empty descriptions are filtered out before submission; an
    /// entirely empty batch short-circuits to an empty result without
    /// a network call. Fewer than 5 keywords is a valid low-data
    /// outcome, not an error.
    pub async fn extract(&self, descriptions: &[String]) -> Result<Vec<String>, AiError> {
        let batch: Vec<&str> = descriptions
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect();

        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let serialized =
            serde_json::to_string(&batch).unwrap_or_else(|_| "[]".to_string());
        let prompt = PROMPT_TEMPLATE.replace("{descriptions}", &serialized);

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Generative-text service rejected request");
            return Err(AiError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let envelope: GenerateResponse = serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, payload = %raw, "Generative-text envelope failed to parse");
            AiError::Schema { raw: raw.clone() }
        })?;

        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(AiError::Empty)?;

        parse_keyword_payload(&text)
    }
}

/// Validate the model output against the strict keyword schema
///
/// Rejects anything that is not exactly `{"topKeywords": [String]}`;
/// the raw offending payload is logged for diagnosis. Excess keywords
/// beyond [`MAX_KEYWORDS`] are truncated.
pub(crate) fn parse_keyword_payload(raw: &str) -> Result<Vec<String>, AiError> {
    let payload: KeywordPayload = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!(error = %e, payload = %raw, "Keyword payload failed schema validation");
        AiError::Schema {
            raw: raw.to_string(),
        }
    })?;

    let mut keywords = payload.top_keywords;
    keywords.truncate(MAX_KEYWORDS);
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_schema() {
        let keywords = parse_keyword_payload(r#"{"topKeywords": ["a", "b"]}"#).unwrap();
        assert_eq!(keywords, ["a", "b"]);
    }

    #[test]
    fn rejects_wrong_field_name() {
        let err = parse_keyword_payload(r#"{"keywords": ["a", "b"]}"#).unwrap_err();
        assert!(matches!(err, AiError::Schema { .. }));
    }

    #[test]
    fn rejects_extra_fields() {
        let err =
            parse_keyword_payload(r#"{"topKeywords": ["a"], "confidence": 0.9}"#).unwrap_err();
        assert!(matches!(err, AiError::Schema { .. }));
    }

    #[test]
    fn rejects_non_string_entries() {
        let err = parse_keyword_payload(r#"{"topKeywords": ["a", 3]}"#).unwrap_err();
        assert!(matches!(err, AiError::Schema { .. }));
    }

    #[test]
    fn truncates_to_five_keywords() {
        let keywords =
            parse_keyword_payload(r#"{"topKeywords": ["a","b","c","d","e","f","g"]}"#).unwrap();
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords, ["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn empty_batch_short_circuits_without_network() {
        // unroutable base_url: the call must succeed without touching it
        let extractor = KeywordExtractor::new(
            "http://127.0.0.1:1".to_string(),
            "test-model".to_string(),
            String::new(),
        );
        let keywords = extractor
            .extract(&["".to_string(), "   ".to_string()])
            .await
            .unwrap();
        assert!(keywords.is_empty());
    }
}
