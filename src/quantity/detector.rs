use crate::quantity::parser::parse_value;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, "1,234" grouping, decimals, exponent), optional
    /// whitespace, then unit text.
    /// Examples: "100 Meter", "10.5ft", "1e3 kg", "-20 °C", "1,234 ft", "3 cubic foot"
    pub(crate) static ref QUANTITY_PATTERN: Regex = Regex::new(concat!(
        r"^(?P<value>[+-]?(?:\d{1,3}(?:,\d{3})+(?:\.\d*)?|\d+(?:\.\d*)?|\.\d+)",
        r"(?:[eE][+-]?\d+)?)",
        r"\s*(?P<unit>[A-Za-z°³][A-Za-z°³0-9 _-]*)$",
    ))
    .unwrap();
}

/// Check if a string looks like a quantity expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    // "2e5" is a bare number, not 2 of unit "e5"
    if parse_value(trimmed).is_some() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100 Meter"));
        assert!(looks_like_quantity("10.5 ft"));
        assert!(looks_like_quantity("10.5ft"));
        assert!(looks_like_quantity("1e3 kg"));
        assert!(looks_like_quantity("-20 °C"));
        assert!(looks_like_quantity("3 Cubic Foot"));
        assert!(looks_like_quantity(".5 gal"));
        assert!(looks_like_quantity("1,234 ft"));
        assert!(looks_like_quantity("1,234.5 L"));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("Meter"));
        assert!(!looks_like_quantity("hello world"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_exponent_is_not_a_unit() {
        assert!(!looks_like_quantity("2e5"));
        assert!(!looks_like_quantity("-1.5E-3"));
        assert!(looks_like_quantity("2e5 ft"));
        assert!(looks_like_quantity("2e5ft"));
    }
}
