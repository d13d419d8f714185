use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default English filler and hesitation words.
pub const DEFAULT_DISFLUENCY_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "hmm", "ah", "uhh", "huh", "er", "mmm", "okay",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudioEncoding {
    Linear16,
    Flac,
    Mulaw,
    OggOpus,
}

impl AudioEncoding {
    /// Wire name expected by the recognition API.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
            AudioEncoding::Flac => "FLAC",
            AudioEncoding::Mulaw => "MULAW",
            AudioEncoding::OggOpus => "OGG_OPUS",
        }
    }
}

/// Options forwarded to the recognition service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecognitionSettings {
    #[serde(default = "default_encoding")]
    pub encoding: AudioEncoding,
    #[serde(default = "default_sample_rate_hertz")]
    pub sample_rate_hertz: u32,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_true")]
    pub enable_automatic_punctuation: bool,
    #[serde(default = "default_true")]
    pub enable_word_time_offsets: bool,
    #[serde(default = "default_true")]
    pub enable_word_confidence: bool,
    #[serde(default = "default_true")]
    pub enable_spoken_punctuation: bool,
    #[serde(default = "default_true")]
    pub enable_spoken_emojis: bool,
    #[serde(default = "default_true")]
    pub diarization_enabled: bool,
    #[serde(default = "default_min_speakers")]
    pub min_speaker_count: u32,
    #[serde(default = "default_max_speakers")]
    pub max_speaker_count: u32,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            sample_rate_hertz: default_sample_rate_hertz(),
            language_code: default_language_code(),
            enable_automatic_punctuation: true,
            enable_word_time_offsets: true,
            enable_word_confidence: true,
            enable_spoken_punctuation: true,
            enable_spoken_emojis: true,
            diarization_enabled: true,
            min_speaker_count: default_min_speakers(),
            max_speaker_count: default_max_speakers(),
        }
    }
}

/// Knobs for the scoring and disfluency analysis. Kept as explicit values so
/// tests can substitute their own vocabulary and weights.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisSettings {
    #[serde(default = "default_disfluency_words")]
    pub disfluency_words: Vec<String>,
    /// Points removed from the clarity score per disfluency occurrence.
    #[serde(default = "default_clarity_penalty")]
    pub clarity_penalty: f64,
    #[serde(default = "default_confidence_weight")]
    pub confidence_weight: f64,
    #[serde(default = "default_clarity_weight")]
    pub clarity_weight: f64,
    #[serde(default = "default_quality_weight")]
    pub quality_weight: f64,
    #[serde(default = "default_top_word_count")]
    pub top_word_count: usize,
    #[serde(default)]
    pub recognition: RecognitionSettings,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            disfluency_words: default_disfluency_words(),
            clarity_penalty: default_clarity_penalty(),
            confidence_weight: default_confidence_weight(),
            clarity_weight: default_clarity_weight(),
            quality_weight: default_quality_weight(),
            top_word_count: default_top_word_count(),
            recognition: RecognitionSettings::default(),
        }
    }
}

fn default_disfluency_words() -> Vec<String> {
    DEFAULT_DISFLUENCY_WORDS
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn default_clarity_penalty() -> f64 {
    2.0
}

fn default_confidence_weight() -> f64 {
    0.4
}

fn default_clarity_weight() -> f64 {
    0.3
}

fn default_quality_weight() -> f64 {
    0.3
}

fn default_top_word_count() -> usize {
    5
}

fn default_encoding() -> AudioEncoding {
    AudioEncoding::Linear16
}

fn default_sample_rate_hertz() -> u32 {
    16000
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_true() -> bool {
    true
}

fn default_min_speakers() -> u32 {
    1
}

fn default_max_speakers() -> u32 {
    5
}

/// Load settings from a JSON file, falling back to defaults on a missing or
/// unparsable file.
pub fn load_or_default_settings(path: Option<&Path>) -> AnalysisSettings {
    let Some(path) = path else {
        return AnalysisSettings::default();
    };

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<AnalysisSettings>(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "Failed to parse settings file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                AnalysisSettings::default()
            }
        },
        Err(e) => {
            warn!(
                "Failed to read settings file {}: {}. Using defaults.",
                path.display(),
                e
            );
            AnalysisSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let settings = AnalysisSettings::default();
        let sum = settings.confidence_weight + settings.clarity_weight + settings.quality_weight;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let parsed: AnalysisSettings =
            serde_json::from_str(r#"{"disfluency_words": ["um", "basically"]}"#).unwrap();
        assert_eq!(parsed.disfluency_words, vec!["um", "basically"]);
        assert_eq!(parsed.top_word_count, 5);
        assert_eq!(parsed.recognition.sample_rate_hertz, 16000);
    }

    #[test]
    fn test_encoding_wire_names() {
        assert_eq!(AudioEncoding::Linear16.as_wire_str(), "LINEAR16");
        assert_eq!(AudioEncoding::OggOpus.as_wire_str(), "OGG_OPUS");
    }
}
