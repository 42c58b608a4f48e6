//! Cumulative scoring-timeline reconstruction.
//!
//! Consumes chronologically ordered drives and rebuilds the running score
//! for both teams on an absolute elapsed-seconds axis, the shape the
//! scoring-progression chart and drive table render from.
//!
//! ## Algorithm
//! 1. Walk the ordered drives with running `home`/`away` totals and an
//!    elapsed-seconds cursor.
//! 2. Each drive advances the cursor by its `timeTotal`, floored to 1
//!    second so segments never collapse to zero width.
//! 3. Points go to the possessing team, unless `opposingTouchdown` flips
//!    the credit to the other side (pick-six, fumble return, safety).

use log::warn;

use crate::models::Drive;

/// One drive's contribution to the cumulative scoring chart.
///
/// Scores are the running totals AFTER this drive; intervals are
/// contiguous (`seconds_start` equals the previous point's `seconds_end`).
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint<'a> {
    /// Source record, borrowed: points are a view over the drive list.
    pub drive: &'a Drive,
    /// Cumulative home score after this drive.
    pub home_score: u32,
    /// Cumulative away score after this drive.
    pub away_score: u32,
    /// Elapsed game-seconds from kickoff when the drive began.
    pub seconds_start: u32,
    /// Elapsed game-seconds when the drive ended. Always > `seconds_start`.
    pub seconds_end: u32,
    /// Team with the ball during the drive.
    pub possessing_team: &'a str,
    /// Team whose total increased on this drive, `None` when no score.
    pub scoring_team: Option<&'a str>,
}

impl TimelinePoint<'_> {
    pub fn is_scoring(&self) -> bool {
        self.scoring_team.is_some()
    }
}

/// Build the cumulative score-by-time sequence for one game.
///
/// `drives` must already be in chronological order (see
/// [`order_drives`](crate::chronology::order_drives)). Missing optional
/// fields degrade via the documented defaults; this function never fails.
///
/// A scoring drive possessed by a team that is neither `home_team_id` nor
/// `away_team_id` is left unattributed (no points credited) and logged,
/// rather than guessed onto one of the sides.
pub fn build_timeline<'a>(
    drives: &'a [Drive],
    home_team_id: &'a str,
    away_team_id: &'a str,
) -> Vec<TimelinePoint<'a>> {
    let mut home_score = 0u32;
    let mut away_score = 0u32;
    let mut elapsed = 0u32;

    let mut timeline = Vec::with_capacity(drives.len());

    for drive in drives {
        // Zero or unparsable duration floors to 1 second to keep the
        // timeline strictly advancing.
        let duration = drive.duration_seconds().max(1);
        let seconds_start = elapsed;
        elapsed += duration;

        let possessing_team = drive.team_id.as_deref().unwrap_or("");

        let mut scoring_team = None;
        if drive.points() > 0 {
            let credited = if drive.scored_by_defense() {
                other_team(possessing_team, home_team_id, away_team_id)
            } else {
                Some(possessing_team)
            };

            match credited {
                Some(team) if team == home_team_id => {
                    home_score += drive.points();
                    scoring_team = Some(team);
                }
                Some(team) if team == away_team_id => {
                    away_score += drive.points();
                    scoring_team = Some(team);
                }
                _ => {
                    warn!(
                        "drive {} possessed by '{}' matches neither team; {} points not attributed",
                        drive.drive_number(),
                        possessing_team,
                        drive.points()
                    );
                }
            }
        }

        timeline.push(TimelinePoint {
            drive,
            home_score,
            away_score,
            seconds_start,
            seconds_end: elapsed,
            possessing_team,
            scoring_team,
        });
    }

    timeline
}

/// The side opposite `team_id`, or `None` when `team_id` is neither side.
fn other_team<'a>(team_id: &str, home_team_id: &'a str, away_team_id: &'a str) -> Option<&'a str> {
    if team_id == home_team_id {
        Some(away_team_id)
    } else if team_id == away_team_id {
        Some(home_team_id)
    } else {
        None
    }
}
