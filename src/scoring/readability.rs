//! Readability scoring.
//!
//! Flesch reading ease with a syllable approximation tuned for French text:
//! vowels are counted, then one syllable is removed per run of consecutive
//! vowels and one per word-final `e`.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

const WHITESPACE_PATTERN: &str = r"\s+";
const VOWEL_PATTERN: &str = "[aeiouyàâäéèêëîïôöùûüÿæœ]";
const VOWEL_RUN_PATTERN: &str = "[aeiouyàâäéèêëîïôöùûüÿ]{2,}";

pub(crate) static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(WHITESPACE_PATTERN, "WHITESPACE_RE"));
static VOWEL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(VOWEL_PATTERN, "VOWEL_RE"));
static VOWEL_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(VOWEL_RUN_PATTERN, "VOWEL_RUN_RE"));

/// ASCII word characters; accented letters count as boundaries here.
fn is_ascii_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Counts `e` characters not followed by an ASCII word character.
fn count_final_e(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|(i, c)| {
            **c == 'e'
                && chars
                    .get(i + 1)
                    .map_or(true, |next| !is_ascii_word_char(*next))
        })
        .count()
}

/// Approximate syllable count of a whole text.
pub fn count_syllables(text: &str) -> usize {
    let lower = text.to_lowercase();
    let vowels = VOWEL_RE.find_iter(&lower).count();
    let runs = VOWEL_RUN_RE.find_iter(&lower).count();
    let silent_e = count_final_e(&lower);
    vowels.saturating_sub(runs).saturating_sub(silent_e)
}

/// Computes a 0-100 readability score (higher is easier to read).
///
/// Returns 0 when the text has no words or no sentences.
pub fn calculate_readability(text: &str) -> u8 {
    let clean = WHITESPACE_RE.replace_all(text, " ");
    let clean = clean.trim();

    let sentence_count = clean
        .split(['.', '!', '?'])
        .filter(|fragment| !fragment.is_empty())
        .count();
    let word_count = clean.split_whitespace().count();

    if sentence_count == 0 || word_count == 0 {
        return 0;
    }

    let syllable_count = count_syllables(clean);

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / word_count as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    score.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(calculate_readability(""), 0);
        assert_eq!(calculate_readability("   \n\t "), 0);
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        assert_eq!(calculate_readability("...!!!???"), 0);
    }

    #[test]
    fn test_count_syllables_vowels_runs_and_final_e() {
        // c-a-t: 1 vowel
        assert_eq!(count_syllables("cat"), 1);
        // "maison": a,i,o = 3 vowels, one run "ai" => 2
        assert_eq!(count_syllables("maison"), 2);
        // "table": a,e = 2 vowels, final e => 1
        assert_eq!(count_syllables("table"), 1);
        // accented vowels count
        assert_eq!(count_syllables("été"), 1);
    }

    #[test]
    fn test_count_syllables_is_case_insensitive() {
        assert_eq!(count_syllables("MAISON"), count_syllables("maison"));
    }

    #[test]
    fn test_simple_text_scores_high() {
        // 4 words, 1 sentence, 3 syllables ("the" loses its final e):
        // 206.835 - 1.015 * 4 - 84.6 * 0.75 = 139.325 -> clamped to 100
        assert_eq!(calculate_readability("The cat sat down."), 100);
    }

    #[test]
    fn test_formula_mid_range() {
        // "Banana papaya." -> 2 words, 1 sentence.
        // vowels: a,a,a + a,a,y,a = 7, runs: "aya" = 1, final e: 0 => 6 syllables
        // 206.835 - 1.015 * 2 - 84.6 * 3 = -49 -> clamped to 0
        assert_eq!(calculate_readability("Banana papaya."), 0);
        // "Le chat dort." -> 3 words, 1 sentence.
        // vowels: e,a,o = 3, runs: 0, final e: "le" = 1 => 2 syllables
        // 206.835 - 3.045 - 56.4 = 147.39 -> 100
        assert_eq!(calculate_readability("Le chat dort."), 100);
    }

    #[test]
    fn test_score_is_rounded_not_truncated() {
        // Ten words of two syllables each in one sentence:
        // "hello" -> e,o = 2 vowels, no run, no final e => 2
        // 206.835 - 10.15 - 169.2 = 27.485 -> 27
        let text = "hello hello hello hello hello hello hello hello hello hello.";
        assert_eq!(calculate_readability(text), 27);
        // Eight words: 206.835 - 8.12 - 169.2 = 29.515 -> 30
        let text = "hello hello hello hello hello hello hello hello.";
        assert_eq!(calculate_readability(text), 30);
    }

    #[test]
    fn test_score_always_in_range() {
        let samples = [
            "a",
            "Supercalifragilisticexpialidocious antidisestablishmentarianism.",
            "Oui. Non. Peut-être! Pourquoi? Parce que.",
            "😀 🎉 ✨",
            "Ééé ôôô ààà ùùù.",
        ];
        for sample in samples {
            let score = calculate_readability(sample);
            assert!(score <= 100, "{sample:?} scored {score}");
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Le référencement naturel demande du temps. Il faut publier souvent!";
        assert_eq!(calculate_readability(text), calculate_readability(text));
    }
}
