//! Priority rules between two conditions

use crate::condition::query::{Bound, Condition};

impl Condition {
    /// Returns true when this condition should take precedence over `other`
    ///
    /// Rules, first match wins:
    /// - min vs min: the smaller first value wins
    /// - min vs anything else: never
    /// - max vs max: the larger first value wins
    /// - max vs anything else: always
    /// - range vs max: never
    /// - range vs anything else: always
    /// - unbounded: never
    ///
    /// Values are compared on their leading integer only, units ignored. An
    /// unparseable value makes the comparison false.
    pub fn has_priority(&self, other: &Condition) -> bool {
        match self.bound() {
            Bound::Min => {
                other.is_min()
                    && matches!(
                        (self.first_magnitude(), other.first_magnitude()),
                        (Some(a), Some(b)) if a < b
                    )
            }
            Bound::Max => {
                if !other.is_max() {
                    return true;
                }
                matches!(
                    (self.first_magnitude(), other.first_magnitude()),
                    (Some(a), Some(b)) if a > b
                )
            }
            Bound::Range => !other.is_max(),
            Bound::Unbounded => false,
        }
    }

    /// Leading integer of the first value, `None` when it has none
    ///
    /// This reads the first pair, whichever key it carries: in
    /// `(orientation: landscape) and (min-width: 10px)` it is `landscape`.
    pub fn first_magnitude(&self) -> Option<f64> {
        self.first_value().and_then(leading_integer)
    }
}

/// Parse the integer prefix of a value such as `920px` (giving 920)
///
/// Leading whitespace and a single sign are accepted, and a `0x` prefix
/// switches to base 16. Parsing stops at the first character that is not a
/// digit. `None` means no digit was found. Units are never interpreted.
pub(crate) fn leading_integer(value: &str) -> Option<f64> {
    let s = value.trim_start();

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut magnitude = 0f64;
    let mut seen = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        magnitude = magnitude * f64::from(radix) + f64::from(d);
        seen = true;
    }

    if !seen {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_priority(a: &str, b: &str) -> bool {
        Condition::new(a).has_priority(&Condition::new(b))
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("920px"), Some(920.0));
        assert_eq!(leading_integer("100"), Some(100.0));
        assert_eq!(leading_integer("007em"), Some(7.0));
        assert_eq!(leading_integer("  -12rem"), Some(-12.0));
        assert_eq!(leading_integer("+5"), Some(5.0));
        assert_eq!(leading_integer("0x1A"), Some(26.0));
        assert_eq!(leading_integer("0x10px"), Some(16.0));
        assert_eq!(leading_integer("12_000"), Some(12.0));
    }

    #[test]
    fn test_leading_integer_nan() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("px"), None);
        assert_eq!(leading_integer("landscape"), None);
        assert_eq!(leading_integer("0x"), None);
        assert_eq!(leading_integer("-"), None);
    }

    #[test]
    fn test_max_over_min() {
        assert!(has_priority("(max-width: 100px)", "(min-width: 100px)"));
    }

    #[test]
    fn test_max_over_range() {
        assert!(has_priority(
            "(max-width: 100px)",
            "(min-width: 100px) and (max-width: 500px)"
        ));
    }

    #[test]
    fn test_min_never_over_other_kinds() {
        assert!(!has_priority(
            "(min-width: 100px)",
            "(min-width: 100px) and (max-width: 500px)"
        ));
        assert!(!has_priority("(min-width: 100px)", "(max-width: 500px)"));
        assert!(!has_priority("(min-width: 100px)", "(orientation: landscape)"));
    }

    #[test]
    fn test_range_over_min_not_max() {
        let range = Condition::new("(min-width: 100px) and (max-width: 500px)");
        assert!(range.has_priority(&Condition::new("(min-width: 500px)")));
        assert!(!range.has_priority(&Condition::new("(max-width: 500px)")));
        assert!(range.has_priority(&range));
        assert!(range.has_priority(&Condition::new("print")));
    }

    #[test]
    fn test_min_vs_min() {
        assert!(has_priority("(min-width: 100px)", "(min-width: 200px)"));
        assert!(!has_priority("(min-width: 300px)", "(min-width: 100px)"));
        assert!(!has_priority("(min-width: 100px)", "(min-width: 100px)"));
    }

    #[test]
    fn test_max_vs_max() {
        assert!(has_priority("(max-width: 500px)", "(max-width: 100px)"));
        assert!(!has_priority("(max-width: 100px)", "(max-width: 500px)"));
        assert!(!has_priority("(max-width: 100px)", "(max-width: 100px)"));
    }

    #[test]
    fn test_units_are_ignored() {
        assert!(has_priority("(min-width: 10em)", "(min-width: 200px)"));
        assert!(has_priority("(max-width: 60rem)", "(max-width: 59px)"));
    }

    #[test]
    fn test_nan_values_never_win() {
        // First value is `landscape`, which has no leading integer
        let a = "(orientation: landscape) and (min-width: 10px)";
        let b = "(min-width: 200px)";
        assert!(Condition::new(a).is_min());
        assert!(!has_priority(a, b));
        assert!(!has_priority(b, a));

        let a = "(orientation: portrait) and (max-width: 10px)";
        let b = "(max-width: 200px)";
        assert!(!has_priority(a, b));
        assert!(!has_priority(b, a));
    }

    #[test]
    fn test_unbounded_never_wins() {
        assert!(!has_priority("(orientation: landscape)", "(min-width: 100px)"));
        assert!(!has_priority("", ""));
        assert!(!has_priority("(min-width: 920.5px)", "(max-width: 100px)"));
    }

    #[test]
    fn test_max_over_unbounded() {
        assert!(has_priority("(max-width: 100px)", "screen"));
    }
}
