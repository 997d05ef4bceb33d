//! Text scoring.
//!
//! Pure functions over the visible text of a page:
//! - Readability (Flesch reading ease, French syllable heuristic)
//! - Keyword density
//! - Content length score

mod content;
mod keywords;
mod readability;

pub use content::content_score;
pub use keywords::{extract_keywords, STOP_WORDS};
pub use readability::{calculate_readability, count_syllables};

use strum_macros::EnumIter;

use crate::config::{PERFORMANCE_GOOD_THRESHOLD, PERFORMANCE_POOR_THRESHOLD};

/// Display band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ScoreRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        if score >= PERFORMANCE_GOOD_THRESHOLD {
            ScoreRating::Good
        } else if score >= PERFORMANCE_POOR_THRESHOLD {
            ScoreRating::NeedsImprovement
        } else {
            ScoreRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRating::Good => "good",
            ScoreRating::NeedsImprovement => "needs improvement",
            ScoreRating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_score_rating_bands() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(90), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(89), ScoreRating::NeedsImprovement);
        assert_eq!(ScoreRating::from_score(50), ScoreRating::NeedsImprovement);
        assert_eq!(ScoreRating::from_score(49), ScoreRating::Poor);
        assert_eq!(ScoreRating::from_score(0), ScoreRating::Poor);
    }

    #[test]
    fn test_score_rating_display_is_distinct() {
        let labels: std::collections::HashSet<String> =
            ScoreRating::iter().map(|r| r.to_string()).collect();
        assert_eq!(labels.len(), 3);
    }
}
