use log::warn;
use regex::Regex;

const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// Underline every whole-word occurrence of each disfluency term.
///
/// Terms are applied one at a time in list order, each pass operating on the
/// already-modified text, and the matched text keeps its original casing.
/// With the default vocabulary no term is a substring of another, so the
/// passes cannot interact; a custom vocabulary with overlapping terms will
/// see earlier terms win.
pub fn highlight_disfluencies(text: &str, terms: &[String]) -> String {
    let mut result = text.to_string();

    for term in terms {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        match Regex::new(&pattern) {
            Ok(regex) => {
                result = regex
                    .replace_all(&result, |caps: &regex::Captures| {
                        format!("{}{}{}", UNDERLINE, &caps[0], RESET)
                    })
                    .to_string();
            }
            Err(e) => {
                warn!("Skipping unmatchable disfluency term '{}': {}", term, e);
            }
        }
    }

    result
}

/// Delete every whole-word occurrence of any disfluency term in one pass over
/// a single alternation, then trim. Adjacent deletions leave doubled interior
/// whitespace behind, matching the original analysis.
pub fn remove_disfluencies(text: &str, terms: &[String]) -> String {
    if terms.is_empty() {
        return text.trim().to_string();
    }

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)\b({})\b", alternation);

    match Regex::new(&pattern) {
        Ok(regex) => regex.replace_all(text, "").trim().to_string(),
        Err(e) => {
            warn!("Failed to build disfluency removal pattern: {}", e);
            text.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_highlight_wraps_matches() {
        let text = "um I think";
        let highlighted = highlight_disfluencies(text, &vocab(&["um"]));
        assert_eq!(highlighted, "\x1b[4mum\x1b[0m I think");
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        let text = "Um yes UM no";
        let highlighted = highlight_disfluencies(text, &vocab(&["um"]));
        assert_eq!(highlighted, "\x1b[4mUm\x1b[0m yes \x1b[4mUM\x1b[0m no");
    }

    #[test]
    fn test_highlight_is_word_bounded() {
        let text = "likewise we like it";
        let highlighted = highlight_disfluencies(text, &vocab(&["like"]));
        assert_eq!(highlighted, "likewise we \x1b[4mlike\x1b[0m it");
    }

    #[test]
    fn test_highlight_preserves_word_count() {
        let text = "um I think uh this is like really good";
        let highlighted = highlight_disfluencies(text, &vocab(&["um", "uh", "like"]));
        assert_eq!(
            highlighted.split_whitespace().count(),
            text.split_whitespace().count()
        );
        for word in ["think", "this", "really", "good"] {
            assert!(highlighted.contains(word));
        }
    }

    #[test]
    fn test_highlight_multi_word_term() {
        let text = "and you know the rest";
        let highlighted = highlight_disfluencies(text, &vocab(&["you know"]));
        assert_eq!(highlighted, "and \x1b[4myou know\x1b[0m the rest");
    }

    #[test]
    fn test_remove_strips_terms_and_trims() {
        let text = "um I think uh this is like really good";
        let cleaned = remove_disfluencies(text, &vocab(&["um", "uh", "like"]));
        assert_eq!(cleaned, "I think  this is  really good");
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let cleaned = remove_disfluencies("UM hello Um world", &vocab(&["um"]));
        assert_eq!(cleaned, "hello  world");
    }

    #[test]
    fn test_remove_keeps_embedded_substrings() {
        let cleaned = remove_disfluencies("likewise fine", &vocab(&["like"]));
        assert_eq!(cleaned, "likewise fine");
    }

    #[test]
    fn test_remove_idempotent_on_own_output() {
        let terms = vocab(&["um", "uh", "like"]);
        let once = remove_disfluencies("um I think uh this is like really good", &terms);
        let twice = remove_disfluencies(&once, &terms);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_with_empty_vocabulary() {
        assert_eq!(remove_disfluencies("  hello  ", &[]), "hello");
    }
}
