//! Missing-value sentinel detection.
//!
//! A source cell is treated as missing when it is empty, whitespace-only,
//! or spells the not-a-number sentinel in any letter case. Other null-like
//! vocabulary (`None`, `NULL`, `N/A`) is survey text and passes through
//! verbatim: the `Sleep Disorder` column legitimately records `None`.

/// True when a raw source cell must be coerced to the null marker.
///
/// Only the check trims; surviving values keep their original spacing.
#[must_use]
pub fn is_missing_value(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}
