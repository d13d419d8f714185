use anyhow::{bail, Context};
use clap::Parser;
use log::{info, LevelFilter};
use podium::audio::AudioSource;
use podium::cli::CliArgs;
use podium::grammar::LanguageToolClient;
use podium::report::{render_report, ReportInput};
use podium::settings::load_or_default_settings;
use podium::transcription::CloudTranscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut settings = load_or_default_settings(args.settings.as_deref());
    settings.recognition.language_code = args.language.clone();

    let api_key = match args.api_key.clone() {
        Some(key) => key,
        None => std::env::var("SPEECH_API_KEY").unwrap_or_default(),
    };
    if api_key.trim().is_empty() {
        bail!("An API key is required: pass --api-key or set SPEECH_API_KEY");
    }

    let source = AudioSource::parse(&args.audio);
    let transcriber = CloudTranscriber::new(&args.speech_url, api_key)
        .context("Failed to build transcription client")?;

    let grammar = if args.no_grammar {
        None
    } else {
        Some(
            LanguageToolClient::new(&args.grammar_url, &args.language)
                .context("Failed to build grammar client")?,
        )
    };

    println!("Processing audio file... Please wait.");
    info!("Analyzing {}", args.audio);

    let outcome = podium::pipeline::analyze(&transcriber, grammar.as_ref(), &source, &settings)
        .await
        .context("Speech analysis failed")?;

    let report = render_report(&ReportInput {
        analysis: &outcome.analysis,
        scores: &outcome.scores,
        top_words: &outcome.top_words,
        highlighted_transcript: &outcome.highlighted_transcript,
        corrected_transcript: &outcome.corrected_transcript,
    });
    println!("{}", report);

    Ok(())
}
