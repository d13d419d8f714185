use crate::analysis::{fold_results, TranscriptAnalysis};
use crate::audio::AudioSource;
use crate::error::Result;
use crate::grammar::GrammarCorrector;
use crate::scoring::{compute_scores, top_words, ScoreSet};
use crate::settings::AnalysisSettings;
use crate::text::{highlight_disfluencies, remove_disfluencies};
use crate::transcription::Transcriber;
use log::{debug, info, warn};

/// Everything the pipeline derives from one recording.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub analysis: TranscriptAnalysis,
    pub scores: ScoreSet,
    pub top_words: Vec<(String, usize)>,
    pub highlighted_transcript: String,
    pub cleaned_transcript: String,
    pub corrected_transcript: String,
}

/// Run the full analysis: recognize, fold, score, transform, grammar-correct.
///
/// A failed grammar pass degrades to the uncorrected cleaned transcript with
/// a warning; recognition failures are fatal.
pub async fn analyze<T, G>(
    transcriber: &T,
    grammar: Option<&G>,
    source: &AudioSource,
    settings: &AnalysisSettings,
) -> Result<AnalysisOutcome>
where
    T: Transcriber,
    G: GrammarCorrector,
{
    let results = transcriber.recognize(source, &settings.recognition).await?;
    info!("Recognition produced {} segment(s)", results.len());

    let analysis = fold_results(&results, &settings.disfluency_words);
    let scores = compute_scores(&analysis, settings);
    let top = top_words(&analysis, settings.top_word_count);

    let highlighted_transcript =
        highlight_disfluencies(&analysis.full_transcript, &settings.disfluency_words);
    let cleaned_transcript =
        remove_disfluencies(&analysis.full_transcript, &settings.disfluency_words);

    let corrected_transcript = match grammar {
        Some(corrector) if !cleaned_transcript.is_empty() => {
            match corrector.correct(&cleaned_transcript).await {
                Ok(corrected) => corrected,
                Err(e) => {
                    warn!("Grammar correction failed, using uncorrected text: {}", e);
                    cleaned_transcript.clone()
                }
            }
        }
        _ => {
            debug!("Skipping grammar correction");
            cleaned_transcript.clone()
        }
    };

    info!(
        "Analysis complete: {} words, {} disfluencies, overall score {}",
        analysis.total_words(),
        analysis.total_disfluencies(),
        scores.overall
    );

    Ok(AnalysisOutcome {
        analysis,
        scores,
        top_words: top,
        highlighted_transcript,
        cleaned_transcript,
        corrected_transcript,
    })
}
