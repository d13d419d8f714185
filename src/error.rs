//! Error types for the analysis pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(
        "Audio is {duration_secs:.1}s long but synchronous recognition only accepts \
         up to {limit_secs}s. Use a shorter recording."
    )]
    AudioTooLong { duration_secs: f64, limit_secs: u64 },

    #[error("Invalid audio file: {0}")]
    InvalidAudio(String),

    #[error("Could not reach {service}: {message}")]
    ServiceUnreachable { service: String, message: String },

    #[error("{service} request failed with status {status}: {body}")]
    ApiStatus {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {service}: {message}")]
    MalformedResponse { service: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzeError {
    pub fn unreachable<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ServiceUnreachable {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn malformed<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::MalformedResponse {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn invalid_audio<S: Into<String>>(msg: S) -> Self {
        Self::InvalidAudio(msg.into())
    }
}
