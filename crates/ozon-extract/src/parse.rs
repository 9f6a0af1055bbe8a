//! Price text parsing.

/// Parses a listing price such as `"1 234"` or `"12 499.50"`.
///
/// Every whitespace character is removed first: the storefront groups
/// thousands with ASCII, non-breaking (`U+00A0`) or thin (`U+2009`) spaces.
/// The remainder must parse as a finite `f64`. A comma decimal separator or
/// a currency sign is not accepted.
///
/// Returns `None` for empty or unparseable text.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
