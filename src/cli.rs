use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "podium", about = "Podium - Speech Delivery Analyzer")]
pub struct CliArgs {
    /// Audio to analyze: a local WAV file path or a remote URI (gs:// or https://)
    pub audio: String,

    /// BCP-47 language code for recognition
    #[arg(long, default_value = "en-US")]
    pub language: String,

    /// Base URL of the speech recognition service
    #[arg(long, default_value = "https://speech.googleapis.com")]
    pub speech_url: String,

    /// API key for the recognition service (falls back to SPEECH_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Base URL of the grammar correction service
    #[arg(long, default_value = "https://api.languagetool.org")]
    pub grammar_url: String,

    /// Skip the grammar correction pass
    #[arg(long)]
    pub no_grammar: bool,

    /// Path to a JSON settings file (vocabulary, weights, recognition options)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Enable debug mode with verbose logging
    #[arg(long)]
    pub debug: bool,
}
