//! Podium analyzes a speech recording end to end: it sends the audio to a
//! cloud recognition service, scores the transcript on confidence, clarity
//! (disfluency volume), and lexical richness, strips and highlights filler
//! words, grammar-checks the cleaned text, and renders a report.

pub mod analysis;
pub mod audio;
pub mod cli;
pub mod error;
pub mod grammar;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod settings;
pub mod text;
pub mod transcription;

pub use analysis::{fold_results, TranscriptAnalysis};
pub use audio::AudioSource;
pub use error::{AnalyzeError, Result};
pub use grammar::{GrammarCorrector, LanguageToolClient};
pub use pipeline::{analyze, AnalysisOutcome};
pub use scoring::{compute_scores, top_words, ScoreSet};
pub use settings::AnalysisSettings;
pub use text::{highlight_disfluencies, remove_disfluencies};
pub use transcription::{CloudTranscriber, RecognitionResult, Transcriber};
