use crate::error::{AnalyzeError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use hound::WavReader;
use log::debug;
use std::path::{Path, PathBuf};

/// Synchronous recognition rejects anything longer than this.
pub const SYNC_RECOGNITION_LIMIT_SECS: u64 = 60;

/// Where the audio lives. Remote URIs are passed through to the service
/// untouched; local WAV files are probed and shipped inline as base64.
#[derive(Debug, Clone)]
pub enum AudioSource {
    Uri(String),
    LocalWav(PathBuf),
}

impl AudioSource {
    /// Classify a CLI audio argument. Anything with a scheme is treated as a
    /// remote URI; everything else as a local file path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("gs://") || input.starts_with("http://") || input.starts_with("https://")
        {
            AudioSource::Uri(input.to_string())
        } else {
            AudioSource::LocalWav(PathBuf::from(input))
        }
    }
}

/// Duration and format details pulled from a local WAV header.
#[derive(Debug, Clone, Copy)]
pub struct WavProbe {
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Read the WAV header of a local file and report its duration and format.
pub fn probe_wav(path: &Path) -> Result<WavProbe> {
    let reader = WavReader::open(path)
        .map_err(|e| AnalyzeError::invalid_audio(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();
    let duration_secs = reader.duration() as f64 / spec.sample_rate as f64;

    debug!(
        "Probed {}: {:.2}s, {} Hz, {} channel(s)",
        path.display(),
        duration_secs,
        spec.sample_rate,
        spec.channels
    );

    Ok(WavProbe {
        duration_secs,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

/// Reject local audio that the synchronous recognition path cannot accept.
pub fn check_sync_limit(probe: &WavProbe) -> Result<()> {
    if probe.duration_secs > SYNC_RECOGNITION_LIMIT_SECS as f64 {
        return Err(AnalyzeError::AudioTooLong {
            duration_secs: probe.duration_secs,
            limit_secs: SYNC_RECOGNITION_LIMIT_SECS,
        });
    }
    Ok(())
}

/// Read a local audio file and base64-encode it for an inline request payload.
pub fn encode_wav_base64(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    debug!("Encoding {} bytes of audio as base64", bytes.len());
    Ok(STANDARD.encode(&bytes))
}
