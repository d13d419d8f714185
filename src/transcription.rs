use crate::audio::{self, AudioSource};
use crate::error::{AnalyzeError, Result};
use crate::settings::RecognitionSettings;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE_NAME: &str = "speech recognition service";

/// One utterance segment as consumed by the analysis: the top alternative's
/// transcript and the service's confidence for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub confidence: f64,
}

/// Single-method seam over the recognition service so the scoring and text
/// transforms can be exercised without network access.
pub trait Transcriber {
    fn recognize(
        &self,
        source: &AudioSource,
        settings: &RecognitionSettings,
    ) -> impl std::future::Future<Output = Result<Vec<RecognitionResult>>> + Send;
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SpeakerDiarizationConfig {
    enable_speaker_diarization: bool,
    min_speaker_count: u32,
    max_speaker_count: u32,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireRecognitionConfig {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: String,
    enable_automatic_punctuation: bool,
    enable_word_time_offsets: bool,
    enable_word_confidence: bool,
    enable_spoken_punctuation: bool,
    enable_spoken_emojis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diarization_config: Option<SpeakerDiarizationConfig>,
}

#[derive(Serialize, Debug)]
struct WireRecognitionAudio {
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Serialize, Debug)]
struct RecognizeRequest {
    config: WireRecognitionConfig,
    audio: WireRecognitionAudio,
}

#[derive(Deserialize, Debug)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize, Debug)]
struct WireResult {
    #[serde(default)]
    alternatives: Vec<WireAlternative>,
}

#[derive(Deserialize, Debug)]
struct WireAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: f64,
}

/// Client for the synchronous `speech:recognize` REST endpoint.
///
/// The synchronous endpoint only accepts audio up to 60 seconds; local files
/// are probed and rejected before any bytes go over the wire. Remote URIs
/// cannot be probed here, so oversize remote audio surfaces as an API error.
pub struct CloudTranscriber {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CloudTranscriber {
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AnalyzeError::unreachable(SERVICE_NAME, e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn build_request(
        &self,
        source: &AudioSource,
        settings: &RecognitionSettings,
    ) -> Result<RecognizeRequest> {
        let audio = match source {
            AudioSource::Uri(uri) => WireRecognitionAudio {
                uri: Some(uri.clone()),
                content: None,
            },
            AudioSource::LocalWav(path) => {
                let probe = audio::probe_wav(path)?;
                audio::check_sync_limit(&probe)?;
                WireRecognitionAudio {
                    uri: None,
                    content: Some(audio::encode_wav_base64(path)?),
                }
            }
        };

        let diarization_config = settings.diarization_enabled.then(|| SpeakerDiarizationConfig {
            enable_speaker_diarization: true,
            min_speaker_count: settings.min_speaker_count,
            max_speaker_count: settings.max_speaker_count,
        });

        Ok(RecognizeRequest {
            config: WireRecognitionConfig {
                encoding: settings.encoding.as_wire_str(),
                sample_rate_hertz: settings.sample_rate_hertz,
                language_code: settings.language_code.clone(),
                enable_automatic_punctuation: settings.enable_automatic_punctuation,
                enable_word_time_offsets: settings.enable_word_time_offsets,
                enable_word_confidence: settings.enable_word_confidence,
                enable_spoken_punctuation: settings.enable_spoken_punctuation,
                enable_spoken_emojis: settings.enable_spoken_emojis,
                diarization_config,
            },
            audio,
        })
    }
}

impl Transcriber for CloudTranscriber {
    async fn recognize(
        &self,
        source: &AudioSource,
        settings: &RecognitionSettings,
    ) -> Result<Vec<RecognitionResult>> {
        let request = self.build_request(source, settings)?;
        let url = format!("{}/v1/speech:recognize", self.base_url);
        debug!("Sending recognition request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
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

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| AnalyzeError::malformed(SERVICE_NAME, e.to_string()))?;

        let results: Vec<RecognitionResult> = parsed
            .results
            .into_iter()
            .filter_map(|r| {
                r.alternatives.into_iter().next().map(|alt| RecognitionResult {
                    transcript: alt.transcript,
                    confidence: alt.confidence,
                })
            })
            .collect();

        debug!("Recognition returned {} result segment(s)", results.len());
        Ok(results)
    }
}
