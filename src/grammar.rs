use crate::error::{AnalyzeError, Result};
use log::debug;
use serde::Deserialize;
use std::time::Duration;

const SERVICE_NAME: &str = "grammar correction service";

/// Single-method seam over the grammar checker, mirroring the transcription
/// seam so the pipeline can run against a stub in tests.
pub trait GrammarCorrector {
    fn correct(&self, text: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Deserialize, Debug)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<GrammarMatch>,
}

#[derive(Deserialize, Debug, Clone)]
struct GrammarMatch {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Deserialize, Debug, Clone)]
struct Replacement {
    value: String,
}

/// Client for a LanguageTool-compatible `/v2/check` endpoint. Each reported
/// match is resolved with its first suggested replacement.
pub struct LanguageToolClient {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl LanguageToolClient {
    pub fn new(base_url: &str, language: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AnalyzeError::unreachable(SERVICE_NAME, e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }
}

impl GrammarCorrector for LanguageToolClient {
    async fn correct(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = format!("{}/v2/check", self.base_url);
        debug!("Sending grammar check request to: {}", url);

        let params = [("text", text), ("language", self.language.as_str())];
        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AnalyzeError::unreachable(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(AnalyzeError::ApiStatus {
                service: SERVICE_NAME.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CheckResponse = response
            .json()
            .await
            .map_err(|e| AnalyzeError::malformed(SERVICE_NAME, e.to_string()))?;

        debug!("Grammar check reported {} match(es)", parsed.matches.len());
        Ok(apply_matches(text, &parsed.matches))
    }
}

/// Splice suggested replacements into the text. Matches are applied
/// back-to-front so earlier offsets stay valid; overlapping matches after the
/// first are skipped. Offsets count characters, not bytes.
fn apply_matches(text: &str, matches: &[GrammarMatch]) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut ordered: Vec<&GrammarMatch> = matches
        .iter()
        .filter(|m| {
            !m.replacements.is_empty()
                && m.offset
                    .checked_add(m.length)
                    .is_some_and(|end| end <= chars.len())
        })
        .collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut last_start = chars.len() + 1;
    for m in ordered {
        if m.offset + m.length > last_start {
            continue;
        }
        let replacement: Vec<char> = m.replacements[0].value.chars().collect();
        chars.splice(m.offset..m.offset + m.length, replacement);
        last_start = m.offset;
    }

    chars.into_iter().collect()
}
