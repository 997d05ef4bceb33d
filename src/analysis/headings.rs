//! Heading outline.

use crate::models::HeadingStructure;

/// Splits `(level, text)` pairs into six per-level lists of trimmed text.
pub fn analyze_headings(headings: &[(u8, String)]) -> HeadingStructure {
    let mut structure = HeadingStructure::default();
    for (level, text) in headings {
        let bucket = match level {
            1 => &mut structure.h1,
            2 => &mut structure.h2,
            3 => &mut structure.h3,
            4 => &mut structure.h4,
            5 => &mut structure.h5,
            6 => &mut structure.h6,
            _ => continue,
        };
        bucket.push(text.trim().to_string());
    }
    structure
}
