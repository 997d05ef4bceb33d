//! Keyword density extraction.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::MAX_KEYWORDS;
use crate::models::KeywordDensity;
use crate::utils::compile_regex_unsafe;

use super::readability::WHITESPACE_RE;

/// Anything that is neither a word character (accented Latin included) nor whitespace.
const NON_WORD_PATTERN: &str = r"[^a-zA-Z0-9_àâäéèêëîïôöùûüÿæœç\s]";

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NON_WORD_PATTERN, "NON_WORD_RE"));

/// Tokens shorter than this many characters are never keywords.
const MIN_KEYWORD_CHARS: usize = 4;

/// French function words excluded from keyword ranking.
pub const STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "et", "ou", "de", "du", "au", "aux", "ce", "cette",
    "ces", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos", "votre",
    "vos", "leur", "leurs", "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "on",
    "qui", "que", "quoi", "dont", "où", "pour", "par", "dans", "sur", "sous", "avec", "sans",
    "ni", "ne", "pas", "plus", "moins", "très", "trop", "peu", "beaucoup", "tout", "tous",
    "toute", "toutes", "aucun", "aucune", "même", "autres", "autre", "est", "sont", "sera",
    "seront", "été", "avoir", "a", "ont", "comme", "si", "mais", "car", "donc", "quand",
    "comment", "pourquoi",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns the most frequent keywords of `text`, at most `MAX_KEYWORDS`.
///
/// Density is relative to every token of the cleaned text, stop words and
/// short tokens included. Equal counts keep first-seen order.
pub fn extract_keywords(text: &str) -> Vec<KeywordDensity> {
    let lower = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lower, "");
    let clean = WHITESPACE_RE.replace_all(&stripped, " ");

    let tokens: Vec<&str> = clean.split_whitespace().collect();
    let total_words = tokens.len();
    if total_words == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in tokens
        .iter()
        .copied()
        .filter(|t| t.chars().count() >= MIN_KEYWORD_CHARS && !is_stop_word(t))
    {
        match positions.get(token) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(keyword, count)| KeywordDensity {
            keyword: keyword.to_string(),
            count,
            density: round_two_decimals(count as f64 / total_words as f64 * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(text: &str) -> Vec<(String, usize)> {
        extract_keywords(text)
            .into_iter()
            .map(|k| (k.keyword, k.count))
            .collect()
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  \n ").is_empty());
        assert!(extract_keywords("!!! ???").is_empty());
    }

    #[test]
    fn test_counts_and_density() {
        let result = extract_keywords("seo seo seo guide");
        // "seo" is too short; "guide" is 1 of 4 tokens
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].keyword, "guide");
        assert_eq!(result[0].count, 1);
        assert_eq!(result[0].density, 25.0);
    }

    #[test]
    fn test_density_rounded_to_two_decimals() {
        let result = extract_keywords("référencement naturel référencement");
        assert_eq!(result[0].keyword, "référencement");
        assert_eq!(result[0].count, 2);
        assert_eq!(result[0].density, 66.67);
        assert_eq!(result[1].density, 33.33);
    }

    #[test]
    fn test_stop_words_and_short_tokens_excluded_but_counted_in_total() {
        let result = extract_keywords("pour les moteurs dans les moteurs");
        assert_eq!(keywords("pour les moteurs dans les moteurs"), vec![("moteurs".to_string(), 2)]);
        // 2 of 6 tokens
        assert_eq!(result[0].density, 33.33);
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            keywords("Google, GOOGLE! google?"),
            vec![("google".to_string(), 3)]
        );
        assert_eq!(keywords("l'optimisation"), vec![("loptimisation".to_string(), 1)]);
    }

    #[test]
    fn test_sorted_by_count_then_first_seen() {
        assert_eq!(
            keywords("alpha beta gamma beta gamma gamma"),
            vec![
                ("gamma".to_string(), 3),
                ("beta".to_string(), 2),
                ("alpha".to_string(), 1),
            ]
        );
        assert_eq!(
            keywords("zeta alpha"),
            vec![("zeta".to_string(), 1), ("alpha".to_string(), 1)]
        );
    }

    #[test]
    fn test_at_most_ten_keywords() {
        let text = "one1 two2 three four five sixx seven eight nine tenn eleven twelve";
        let result = extract_keywords(text);
        assert_eq!(result.len(), MAX_KEYWORDS);
        assert_eq!(result[0].keyword, "one1");
        assert_eq!(result[9].keyword, "tenn");
    }

    #[test]
    fn test_char_length_not_byte_length() {
        // "été" is 3 chars (5 bytes) and a stop word; "âmes" is 4 chars
        assert_eq!(keywords("été âmes"), vec![("âmes".to_string(), 1)]);
        assert!(extract_keywords("çà").is_empty());
    }
}
