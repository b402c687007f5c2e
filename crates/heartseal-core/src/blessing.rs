//! Optional celebratory message shown under the certificate.
//!
//! The text comes from an external text-generation service. It is pure
//! decoration: [`fetch_blessing`] never fails and never blocks acceptance,
//! it falls back to a fixed message on any error or timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::BlessingConfig;
use crate::error::{ProposalError, ProposalResult};

/// Shown whenever the service is unavailable, slow or unhelpful.
pub const FALLBACK_BLESSING: &str = "Wishing you a lifetime of simple joys and the kind of love that feels like coming home. May every tomorrow be even more beautiful than today.";

/// Something that can write a blessing for a couple.
#[async_trait]
pub trait BlessingSource: Send + Sync {
    async fn bless(&self, sender: &str, recipient: &str) -> ProposalResult<String>;
}

/// Always returns [`FALLBACK_BLESSING`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBlessing;

#[async_trait]
impl BlessingSource for StaticBlessing {
    async fn bless(&self, _sender: &str, _recipient: &str) -> ProposalResult<String> {
        Ok(FALLBACK_BLESSING.to_string())
    }
}

/// Prompt sent to the text-generation service.
pub fn prompt(sender: &str, recipient: &str) -> String {
    format!(
        "Write a short, deeply sincere, and romantic message for a couple named {sender} and {recipient} who just got engaged.\n\
         Format: Exactly two sentences.\n\
         Tone: Warm, human, and humble. Avoid words like \"astral\", \"cosmic\", \"destiny\", or \"universe\".\n\
         Focus on: Growing old together, simple joys, and a life of kindness.\n\
         Constraint: Under 40 words total."
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Pull the first non-empty text out of a `generateContent` response body.
fn extract_text(body: &str) -> ProposalResult<String> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.text)
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
        .ok_or_else(|| ProposalError::Blessing("empty response".into()))
}

/// Client for the Generative Language `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiBlessing {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiBlessing {
    /// Build a client; fails when no API key is configured.
    pub fn new(config: &BlessingConfig) -> ProposalResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ProposalError::Blessing("no API key configured".into()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key,
        })
    }
}

#[async_trait]
impl BlessingSource for GeminiBlessing {
    async fn bless(&self, sender: &str, recipient: &str) -> ProposalResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt(sender, recipient)),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        extract_text(&response.text().await?)
    }
}

/// Pick the configured source: the remote service when a key is set,
/// the static fallback otherwise.
pub fn source_from_config(config: &BlessingConfig) -> Box<dyn BlessingSource> {
    match GeminiBlessing::new(config) {
        Ok(source) => Box::new(source),
        Err(e) => {
            tracing::debug!("Using static blessing: {}", e);
            Box::new(StaticBlessing)
        }
    }
}

/// Ask `source` for a blessing, substituting [`FALLBACK_BLESSING`] on
/// error, empty output, or when `timeout` elapses.
pub async fn fetch_blessing(
    source: &dyn BlessingSource,
    sender: &str,
    recipient: &str,
    timeout: Duration,
) -> String {
    match tokio::time::timeout(timeout, source.bless(sender, recipient)).await {
        Ok(Ok(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(Ok(_)) => {
            tracing::warn!("Blessing service returned nothing, using fallback");
            FALLBACK_BLESSING.to_string()
        }
        Ok(Err(e)) => {
            tracing::warn!("Blessing service failed, using fallback: {}", e);
            FALLBACK_BLESSING.to_string()
        }
        Err(_) => {
            tracing::warn!(?timeout, "Blessing service timed out, using fallback");
            FALLBACK_BLESSING.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl BlessingSource for Fixed {
        async fn bless(&self, _: &str, _: &str) -> ProposalResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl BlessingSource for Failing {
        async fn bless(&self, _: &str, _: &str) -> ProposalResult<String> {
            Err(ProposalError::Blessing("boom".into()))
        }
    }

    struct Slow;

    #[async_trait]
    impl BlessingSource for Slow {
        async fn bless(&self, _: &str, _: &str) -> ProposalResult<String> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok("too late".into())
        }
    }

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let text = fetch_blessing(&Fixed("  Be happy.  "), "Jamie", "Alex", Duration::from_secs(1)).await;
        assert_eq!(text, "Be happy.");
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let text = fetch_blessing(&Failing, "Jamie", "Alex", Duration::from_secs(1)).await;
        assert_eq!(text, FALLBACK_BLESSING);
    }

    #[tokio::test]
    async fn test_empty_falls_back() {
        let text = fetch_blessing(&Fixed("   "), "Jamie", "Alex", Duration::from_secs(1)).await;
        assert_eq!(text, FALLBACK_BLESSING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let text = fetch_blessing(&Slow, "Jamie", "Alex", Duration::from_secs(5)).await;
        assert_eq!(text, FALLBACK_BLESSING);
    }

    #[test]
    fn test_prompt_names_the_couple() {
        let p = prompt("Jamie", "Alex");
        assert!(p.contains("Jamie and Alex"));
        assert!(p.contains("Under 40 words"));
    }

    #[test]
    fn test_extract_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  Two sentences. Of love.\n"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Two sentences. Of love.");

        assert!(extract_text(r#"{"candidates":[]}"#).is_err());
        assert!(extract_text(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#).is_err());
        assert!(extract_text("not json").is_err());
    }

    #[test]
    fn test_gemini_requires_key() {
        assert!(GeminiBlessing::new(&BlessingConfig::default()).is_err());

        let config = BlessingConfig {
            api_key: Some("k".into()),
            endpoint: "https://example.com/v1/".into(),
            ..Default::default()
        };
        let client = GeminiBlessing::new(&config).unwrap();
        assert_eq!(
            client.url,
            "https://example.com/v1/models/gemini-3-flash-preview:generateContent"
        );
    }
}
