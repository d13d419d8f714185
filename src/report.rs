use crate::analysis::TranscriptAnalysis;
use crate::scoring::ScoreSet;
use std::fmt::Write;

const RULE: &str = "==================================================";

/// Everything the report needs, computed upstream by the pipeline.
pub struct ReportInput<'a> {
    pub analysis: &'a TranscriptAnalysis,
    pub scores: &'a ScoreSet,
    pub top_words: &'a [(String, usize)],
    pub highlighted_transcript: &'a str,
    pub corrected_transcript: &'a str,
}

/// Render the multi-section analysis report. Pure formatting; every value is
/// computed before this point.
pub fn render_report(input: &ReportInput) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n📊 **Speech Analysis Report** 📊");
    let _ = writeln!(out, "{}", RULE);

    if input.analysis.is_empty() {
        let _ = writeln!(out, "\n⚠️  No speech was recognized in the recording.");
        let _ = writeln!(
            out,
            "Check that the audio contains speech and matches the configured language."
        );
        let _ = writeln!(out, "{}", RULE);
        return out;
    }

    let _ = writeln!(
        out,
        "🔹 **Total Unique Words:** {}",
        input.analysis.unique_words()
    );
    let _ = writeln!(
        out,
        "🔹 **Overall Confidence Score:** {:.2}/100",
        input.scores.avg_confidence
    );
    let _ = writeln!(
        out,
        "🔹 **Speech Clarity Score:** {:.2}/100",
        input.scores.clarity
    );
    let _ = writeln!(
        out,
        "🔹 **Content Quality Score:** {:.2}/100",
        input.scores.quality
    );
    let _ = writeln!(
        out,
        "🌟 **Overall Speech Score:** {}/100",
        input.scores.overall
    );

    let _ = writeln!(out, "\n📝 **Transcript with Disfluencies Underlined:**");
    let _ = writeln!(out, "{}", input.highlighted_transcript);

    let _ = writeln!(
        out,
        "\n✅ **Grammatically Corrected Text (Without Disfluencies):**"
    );
    let _ = writeln!(out, "{}", input.corrected_transcript);

    let _ = writeln!(out, "\n📝 **Top {} Most Repeated Words:**", input.top_words.len());
    for (word, count) in input.top_words {
        let _ = writeln!(out, "   - {}: {} times", word, count);
    }

    let _ = writeln!(out, "\n⏳ **Disfluency Word Analysis:**");
    for (word, count) in &input.analysis.disfluency_counts {
        if *count > 0 {
            let _ = writeln!(out, "   - {}: {} times", word, count);
        }
    }

    let _ = writeln!(out, "{}", RULE);
    out
}
