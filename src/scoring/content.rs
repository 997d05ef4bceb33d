//! Content length score.

use crate::config::MIN_WORD_COUNT;

/// Scores body length against the recommended minimum word count, capped at 100.
pub fn content_score(word_count: usize) -> u8 {
    let ratio = word_count as f64 / MIN_WORD_COUNT as f64 * 100.0;
    ratio.round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_score() {
        assert_eq!(content_score(0), 0);
        assert_eq!(content_score(150), 50);
        assert_eq!(content_score(1), 0);
        assert_eq!(content_score(2), 1);
        assert_eq!(content_score(300), 100);
        assert_eq!(content_score(10_000), 100);
    }
}
