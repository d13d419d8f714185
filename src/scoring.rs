use crate::analysis::TranscriptAnalysis;
use crate::settings::AnalysisSettings;

/// Derived scores, all on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSet {
    pub avg_confidence: f64,
    pub clarity: f64,
    pub quality: f64,
    pub overall: f64,
}

/// Compute the score set from a folded analysis.
///
/// - clarity drops linearly with disfluency volume and floors at 0
/// - quality is the unique/total word ratio, capped at 100 (100 for an
///   empty transcript)
/// - overall is the weighted blend, rounded to two decimals
pub fn compute_scores(analysis: &TranscriptAnalysis, settings: &AnalysisSettings) -> ScoreSet {
    let avg_confidence = analysis.avg_confidence_percent;

    let clarity =
        (100.0 - settings.clarity_penalty * analysis.total_disfluencies() as f64).max(0.0);

    let total_words = analysis.total_words();
    let quality = if total_words > 0 {
        ((analysis.unique_words() as f64 / total_words as f64) * 100.0).min(100.0)
    } else {
        100.0
    };

    let overall = avg_confidence * settings.confidence_weight
        + clarity * settings.clarity_weight
        + quality * settings.quality_weight;
    let overall = (overall * 100.0).round() / 100.0;

    ScoreSet {
        avg_confidence,
        clarity,
        quality,
        overall,
    }
}

/// The `count` highest-frequency words. Ties break by count descending, then
/// alphabetically, so the ordering is reproducible.
pub fn top_words(analysis: &TranscriptAnalysis, count: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = analysis
        .word_frequency
        .iter()
        .map(|(w, c)| (w.clone(), *c))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(count);
    entries
}
