//! Game-clock string parsing.
//!
//! Drive records carry clock values as `M:SS` / `MM:SS` strings. Real
//! scraped data is messy, so parsing is deliberately permissive: anything
//! that does not look like a clock value normalizes to 0 seconds instead of
//! failing. Callers that need a definite error path validate the record
//! fields, never the clock strings.

/// Regulation quarter length in seconds.
pub const QUARTER_SECONDS: u32 = 900;

/// Parse an `M:SS` clock string into seconds.
///
/// Missing, empty, or malformed input yields 0. A component that is not a
/// number also counts as 0, matching the tolerated behavior of the data
/// this was built against. Absurdly large minute counts saturate instead
/// of overflowing, so the function stays total on any wire input.
pub fn parse_clock(value: Option<&str>) -> u32 {
    let Some(raw) = value else { return 0 };
    let mut parts = raw.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(minutes), Some(seconds), None) => {
            let minutes: u32 = minutes.trim().parse().unwrap_or(0);
            let seconds: u32 = seconds.trim().parse().unwrap_or(0);
            minutes.saturating_mul(60).saturating_add(seconds)
        }
        _ => 0,
    }
}

/// Format seconds back into the `M:SS` wire form.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_basic() {
        assert_eq!(parse_clock(Some("15:00")), 900);
        assert_eq!(parse_clock(Some("7:18")), 438);
        assert_eq!(parse_clock(Some("0:05")), 5);
    }

    #[test]
    fn test_parse_clock_missing_or_empty() {
        assert_eq!(parse_clock(None), 0);
        assert_eq!(parse_clock(Some("")), 0);
    }

    #[test]
    fn test_parse_clock_malformed() {
        assert_eq!(parse_clock(Some("junk")), 0);
        assert_eq!(parse_clock(Some("1:2:3")), 0);
        assert_eq!(parse_clock(Some("-1:30")), 30);
        assert_eq!(parse_clock(Some("12:xx")), 720);
    }

    #[test]
    fn test_parse_clock_tolerates_whitespace() {
        assert_eq!(parse_clock(Some(" 9 : 30 ")), 570);
    }

    #[test]
    fn test_parse_clock_saturates_on_huge_minutes() {
        // A garbage minute count off the wire must not overflow.
        assert_eq!(parse_clock(Some("100000000:00")), u32::MAX);
        assert_eq!(parse_clock(Some("4294967295:59")), u32::MAX);
        // Large but representable values still parse exactly.
        assert_eq!(parse_clock(Some("71582788:15")), 71_582_788 * 60 + 15);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(900), "15:00");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(438), "7:18");
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: formatting then parsing is the identity.
            #[test]
            fn prop_format_parse_round_trip(seconds in 0u32..36_000) {
                prop_assert_eq!(parse_clock(Some(&format_clock(seconds))), seconds);
            }

            /// Property: parsing never panics on arbitrary input.
            #[test]
            fn prop_parse_total(raw in ".*") {
                let _ = parse_clock(Some(&raw));
            }

            /// Property: any numeric minute component is total.
            #[test]
            fn prop_parse_any_minutes(minutes in any::<u32>(), seconds in 0u32..60) {
                let _ = parse_clock(Some(&format!("{minutes}:{seconds:02}")));
            }
        }
    }
}
