use crate::transcription::RecognitionResult;
use log::debug;
use regex::Regex;
use std::collections::HashMap;

/// Accumulated view of a recognition result sequence: the concatenated
/// transcript, word frequencies, disfluency counts, and mean confidence.
#[derive(Debug, Clone)]
pub struct TranscriptAnalysis {
    pub full_transcript: String,
    pub word_frequency: HashMap<String, usize>,
    /// Per-term occurrence counts, in vocabulary order.
    pub disfluency_counts: Vec<(String, usize)>,
    /// Mean per-result confidence scaled to 0-100; 0 when there were no results.
    pub avg_confidence_percent: f64,
    pub result_count: usize,
}

impl TranscriptAnalysis {
    pub fn total_words(&self) -> usize {
        self.word_frequency.values().sum()
    }

    pub fn unique_words(&self) -> usize {
        self.word_frequency.len()
    }

    pub fn total_disfluencies(&self) -> usize {
        self.disfluency_counts.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.result_count == 0
    }
}

/// Fold a result sequence into a [`TranscriptAnalysis`].
///
/// Words are tokenized on `\w+` runs and lowercased. Disfluency terms are
/// counted as case-insensitive substring occurrences of each result's
/// transcript, so a term embedded in a longer word still counts; that is the
/// historical behavior of this analysis and is intentionally not word-bounded
/// like the frequency table.
pub fn fold_results(
    results: &[RecognitionResult],
    disfluency_words: &[String],
) -> TranscriptAnalysis {
    let word_pattern = Regex::new(r"\w+").expect("static pattern");

    let mut full_transcript = String::new();
    let mut word_frequency: HashMap<String, usize> = HashMap::new();
    let mut disfluency_counts: Vec<(String, usize)> = disfluency_words
        .iter()
        .map(|w| (w.clone(), 0usize))
        .collect();
    // Pre-compute lowercase terms to avoid re-allocating per result
    let terms_lower: Vec<String> = disfluency_words.iter().map(|w| w.to_lowercase()).collect();
    let mut total_confidence = 0.0;

    for result in results {
        total_confidence += result.confidence;
        full_transcript.push_str(&result.transcript);
        full_transcript.push(' ');

        let transcript_lower = result.transcript.to_lowercase();
        for token in word_pattern.find_iter(&transcript_lower) {
            *word_frequency.entry(token.as_str().to_string()).or_insert(0) += 1;
        }

        for ((_, count), term_lower) in disfluency_counts.iter_mut().zip(&terms_lower) {
            *count += transcript_lower.matches(term_lower.as_str()).count();
        }
    }

    let avg_confidence_percent = if results.is_empty() {
        0.0
    } else {
        (total_confidence / results.len() as f64) * 100.0
    };

    debug!(
        "Folded {} result(s): {} words ({} unique), {} disfluencies, {:.2}% confidence",
        results.len(),
        word_frequency.values().sum::<usize>(),
        word_frequency.len(),
        disfluency_counts.iter().map(|(_, c)| c).sum::<usize>(),
        avg_confidence_percent
    );

    TranscriptAnalysis {
        full_transcript,
        word_frequency,
        disfluency_counts,
        avg_confidence_percent,
        result_count: results.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(transcript: &str, confidence: f64) -> RecognitionResult {
        RecognitionResult {
            transcript: transcript.to_string(),
            confidence,
        }
    }

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_results_zero_confidence() {
        let analysis = fold_results(&[], &vocab(&["um"]));
        assert_eq!(analysis.avg_confidence_percent, 0.0);
        assert!(analysis.is_empty());
        assert_eq!(analysis.total_words(), 0);
        assert_eq!(analysis.total_disfluencies(), 0);
        assert_eq!(analysis.full_transcript, "");
    }

    #[test]
    fn test_average_confidence_is_mean_times_hundred() {
        let results = vec![result("one", 0.8), result("two", 0.6), result("three", 1.0)];
        let analysis = fold_results(&results, &[]);
        assert!((analysis.avg_confidence_percent - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_frequency_is_lowercased_and_global() {
        let results = vec![result("The quick fox", 1.0), result("the slow fox", 1.0)];
        let analysis = fold_results(&results, &[]);
        assert_eq!(analysis.word_frequency["the"], 2);
        assert_eq!(analysis.word_frequency["fox"], 2);
        assert_eq!(analysis.word_frequency["quick"], 1);
        assert_eq!(analysis.total_words(), 6);
        assert_eq!(analysis.unique_words(), 4);
    }

    #[test]
    fn test_transcripts_concatenated_with_spaces() {
        let results = vec![result("first part", 1.0), result("second part", 1.0)];
        let analysis = fold_results(&results, &[]);
        assert_eq!(analysis.full_transcript, "first part second part ");
    }

    #[test]
    fn test_disfluency_counts_are_substring_matches() {
        // "like" inside "likewise" counts; that mirrors the original analysis.
        let results = vec![result("I like it, likewise Umberto said UM", 1.0)];
        let analysis = fold_results(&results, &vocab(&["um", "like"]));
        let counts: HashMap<&str, usize> = analysis
            .disfluency_counts
            .iter()
            .map(|(w, c)| (w.as_str(), *c))
            .collect();
        assert_eq!(counts["like"], 2);
        // "um" matches "Umberto" and the trailing "UM" after lowercasing.
        assert_eq!(counts["um"], 2);
    }

    #[test]
    fn test_filler_heavy_sentence_counts() {
        let results = vec![result("um I think uh I like this really good", 1.0)];
        let analysis = fold_results(&results, &vocab(&["um", "uh", "like"]));
        assert_eq!(analysis.total_disfluencies(), 3);
        assert_eq!(analysis.total_words(), 9);
        assert_eq!(analysis.unique_words(), 8);
        assert!((analysis.avg_confidence_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_disfluency_counts_keep_vocabulary_order() {
        let analysis = fold_results(
            &[result("uh um uh", 1.0)],
            &vocab(&["um", "uh", "like"]),
        );
        let order: Vec<&str> = analysis
            .disfluency_counts
            .iter()
            .map(|(w, _)| w.as_str())
            .collect();
        assert_eq!(order, vec!["um", "uh", "like"]);
    }
}
