/// Gemini storyline summarizer
///
/// Wraps the generateContent endpoint behind the total `Summarizer` contract:
/// any failure is logged and replaced with fixed fallback text, so the
/// enrichment pipeline is never blocked on the AI side.
use crate::{
    error::{AppError, AppResult},
    services::providers::Summarizer,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

/// Shown in the storyline field when summarization fails; the user fills it in.
pub const SUMMARY_FALLBACK: &str = "AI summary unavailable. Please fill manually.";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct GeminiSummarizer {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiSummarizer {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn prompt(title: &str, year: &str) -> String {
        format!(
            "Generate 1 paragraph summarize storyline for this movie: {} ({})",
            title, year
        )
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini returned status {}: {}",
                status, body
            )));
        }

        let reply: GenerateContentResponse = response.json().await?;
        Self::extract_text(reply)
    }

    fn extract_text(reply: GenerateContentResponse) -> AppResult<String> {
        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::ExternalApi("Gemini reply carried no text".to_string()))
    }
}

#[async_trait::async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, title: &str, year: &str) -> String {
        let prompt = Self::prompt(title, year);
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    title = %title,
                    provider = "gemini",
                    "Storyline summary failed, using fallback"
                );
                SUMMARY_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_format() {
        assert_eq!(
            GeminiSummarizer::prompt("Inception", "2010"),
            "Generate 1 paragraph summarize storyline for this movie: Inception (2010)"
        );
    }

    #[test]
    fn test_extract_text_from_reply() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "A dream within a dream."}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            GeminiSummarizer::extract_text(reply).unwrap(),
            "A dream within a dream."
        );
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let reply: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(GeminiSummarizer::extract_text(reply).is_err());
    }

    #[test]
    fn test_extract_text_rejects_blank_text() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#,
        )
        .unwrap();
        assert!(GeminiSummarizer::extract_text(reply).is_err());
    }
}
