//! Chronological ordering of drive records.
//!
//! The game-drives endpoint returns drives in storage order, not play
//! order. Ordering key, ascending:
//!
//! 1. Quarter rank (1 < 2 < 3 < 4 < OT, malformed values last).
//! 2. Within a quarter, `timeStart` seconds remaining, descending: the
//!    clock counts down, so MORE time remaining means EARLIER in the
//!    quarter.
//! 3. Ascending drive number when either `timeStart` is absent, or when
//!    both parse to the same instant.
//!
//! A drive with a missing `timeStart` parses to 0 and therefore lands at
//! the tail of its quarter. An unknown start time says nothing about when
//! the drive actually happened, but consumers depend on this placement, so
//! it stays.

use std::cmp::Ordering;

use crate::error::Result;
use crate::models::Drive;

/// Total chronological comparison between two drives of the same game.
pub fn chronological_cmp(a: &Drive, b: &Drive) -> Ordering {
    let by_quarter = a.quarter_rank().cmp(&b.quarter_rank());
    if by_quarter != Ordering::Equal {
        return by_quarter;
    }

    let has_clock = |d: &Drive| d.time_start.as_deref().is_some_and(|s| !s.is_empty());
    if has_clock(a) && has_clock(b) {
        // Countdown clock: larger remaining time sorts earlier.
        match b.clock_start_seconds().cmp(&a.clock_start_seconds()) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
    }

    a.drive_number().cmp(&b.drive_number())
}

/// Order a game's drives into the sequence they occurred.
///
/// Validates every record first: a drive missing `quarter` or `teamId` is
/// an [`InvalidDriveRecord`](crate::DriveError::InvalidDriveRecord). The
/// input slice is untouched; the result is a fresh `Vec`.
pub fn order_drives(drives: &[Drive]) -> Result<Vec<Drive>> {
    for drive in drives {
        drive.validate()?;
    }

    let mut ordered = drives.to_vec();
    ordered.sort_by(chronological_cmp);
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quarter;

    fn make_drive(quarter: &str, drive_num: u32, team: &str, time_start: Option<&str>) -> Drive {
        Drive {
            game_id: None,
            team_id: Some(team.to_string()),
            drive_num: Some(drive_num.to_string()),
            quarter: Some(Quarter::from_label(quarter)),
            time_start: time_start.map(str::to_string),
            start_at: None,
            plays: None,
            time_total: None,
            net_yds: None,
            end_event: None,
            opposing_touchdown: None,
            points_scored: None,
        }
    }

    #[test]
    fn test_quarter_precedence_beats_clock() {
        // Q2 drive starts with a fresher clock than the Q1 drive, but the
        // quarter always wins.
        let q2 = make_drive("2", 1, "A", Some("15:00"));
        let q1 = make_drive("1", 2, "B", Some("0:30"));

        let ordered = order_drives(&[q2, q1]).unwrap();
        assert_eq!(ordered[0].quarter, Some(Quarter::First));
        assert_eq!(ordered[1].quarter, Some(Quarter::Second));
    }

    #[test]
    fn test_countdown_within_quarter() {
        // 10:00 remaining is earlier in the quarter than 5:00 remaining.
        let late = make_drive("3", 8, "A", Some("5:00"));
        let early = make_drive("3", 9, "B", Some("10:00"));

        let ordered = order_drives(&[late, early]).unwrap();
        assert_eq!(ordered[0].clock_start_seconds(), 600);
        assert_eq!(ordered[1].clock_start_seconds(), 300);
    }

    #[test]
    fn test_drive_number_fallback_when_clock_missing() {
        let second = make_drive("1", 4, "A", None);
        let first = make_drive("1", 3, "B", Some("8:00"));

        let ordered = order_drives(&[second, first]).unwrap();
        assert_eq!(ordered[0].drive_number(), 3);
        assert_eq!(ordered[1].drive_number(), 4);
    }

    #[test]
    fn test_malformed_clock_sorts_latest_in_quarter() {
        // Both clocks present, one unparsable: it normalizes to 0 seconds
        // remaining and lands at the tail of the quarter.
        let garbled = make_drive("2", 1, "A", Some("junk"));
        let normal = make_drive("2", 2, "B", Some("0:40"));

        let ordered = order_drives(&[garbled, normal]).unwrap();
        assert_eq!(ordered[0].drive_number(), 2);
        assert_eq!(ordered[1].drive_number(), 1);
    }

    #[test]
    fn test_unknown_quarter_sorts_last() {
        let bogus = make_drive("5", 1, "A", Some("15:00"));
        let ot = make_drive("OT", 2, "B", Some("2:00"));
        let q4 = make_drive("4", 3, "A", Some("0:10"));

        let ordered = order_drives(&[bogus, ot, q4]).unwrap();
        assert_eq!(ordered[0].quarter, Some(Quarter::Fourth));
        assert_eq!(ordered[1].quarter, Some(Quarter::Overtime));
        assert_eq!(ordered[2].quarter, Some(Quarter::Other("5".into())));
    }

    #[test]
    fn test_equal_clock_falls_back_to_drive_number() {
        let b = make_drive("1", 7, "B", Some("9:00"));
        let a = make_drive("1", 6, "A", Some("9:00"));

        let ordered = order_drives(&[b, a]).unwrap();
        assert_eq!(ordered[0].drive_number(), 6);
        assert_eq!(ordered[1].drive_number(), 7);
    }

    #[test]
    fn test_order_independent_of_input_permutation() {
        let drives = vec![
            make_drive("1", 1, "A", Some("15:00")),
            make_drive("1", 2, "B", Some("11:23")),
            make_drive("2", 3, "A", Some("14:10")),
            make_drive("2", 4, "B", None),
            make_drive("3", 5, "A", Some("14:10")),
            make_drive("4", 6, "B", Some("2:00")),
            make_drive("OT", 7, "A", Some("10:00")),
        ];

        let baseline = order_drives(&drives).unwrap();

        let mut reversed = drives.clone();
        reversed.reverse();
        assert_eq!(order_drives(&reversed).unwrap(), baseline);

        let mut rotated = drives.clone();
        rotated.rotate_left(3);
        assert_eq!(order_drives(&rotated).unwrap(), baseline);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let drives = vec![
            make_drive("2", 2, "A", Some("3:00")),
            make_drive("1", 1, "B", Some("10:00")),
        ];
        let snapshot = drives.clone();

        let _ = order_drives(&drives).unwrap();
        assert_eq!(drives, snapshot);
    }

    #[test]
    fn test_invalid_record_propagates() {
        let mut bad = make_drive("1", 1, "A", None);
        bad.team_id = None;

        let err = order_drives(&[bad]).unwrap_err();
        assert!(err.to_string().contains("teamId"), "got: {err}");
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_drive() -> impl Strategy<Value = Drive> {
            (
                prop_oneof!["1", "2", "3", "4", "OT", "5"],
                1u32..30,
                prop_oneof![
                    Just(None),
                    (0u32..15, 0u32..60).prop_map(|(m, s)| Some(format!("{m}:{s:02}"))),
                ],
            )
                .prop_map(|(quarter, num, clock)| {
                    make_drive(&quarter, num, "A", clock.as_deref())
                })
        }

        proptest! {
            /// Property: sorted output respects quarter rank ordering.
            #[test]
            fn prop_quarter_ranks_non_decreasing(drives in prop::collection::vec(arb_drive(), 0..20)) {
                let ordered = order_drives(&drives).unwrap();
                for pair in ordered.windows(2) {
                    prop_assert!(pair[0].quarter_rank() <= pair[1].quarter_rank());
                }
            }

            /// Property: ordering is a permutation of the input.
            #[test]
            fn prop_is_permutation(drives in prop::collection::vec(arb_drive(), 0..20)) {
                let ordered = order_drives(&drives).unwrap();
                prop_assert_eq!(ordered.len(), drives.len());
                for drive in &drives {
                    prop_assert!(ordered.contains(drive));
                }
            }
        }
    }
}
