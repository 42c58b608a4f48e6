//! Per-quarter line score derivation.
//!
//! The game-summary header shows a Q1/Q2/Q3/Q4/OT/Final table per team.
//! Those totals are derivable from the scoring timeline, so the crate
//! provides the fold here instead of depending on separately stored
//! per-quarter stats.

use serde::Serialize;

use crate::models::Quarter;
use crate::timeline::TimelinePoint;

/// Points by quarter for one team. Wire names match the game-stats
/// endpoint fields the summary table renders from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuarterLine {
    #[serde(rename = "pointsQ1")]
    pub q1: u32,
    #[serde(rename = "pointsQ2")]
    pub q2: u32,
    #[serde(rename = "pointsQ3")]
    pub q3: u32,
    #[serde(rename = "pointsQ4")]
    pub q4: u32,
    #[serde(rename = "pointsOvertime")]
    pub overtime: u32,
    #[serde(rename = "pointsTotal")]
    pub total: u32,
}

impl QuarterLine {
    fn add(&mut self, quarter: &Quarter, points: u32) {
        match quarter {
            Quarter::First => self.q1 += points,
            Quarter::Second => self.q2 += points,
            Quarter::Third => self.q3 += points,
            Quarter::Fourth => self.q4 += points,
            Quarter::Overtime => self.overtime += points,
            // No bucket for a malformed quarter; the total still counts it.
            Quarter::Other(_) => {}
        }
        self.total += points;
    }
}

/// Line score for both teams of one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineScore {
    pub home: QuarterLine,
    pub away: QuarterLine,
    #[serde(rename = "hasOvertime")]
    pub has_overtime: bool,
}

/// Fold a built timeline into the per-quarter table.
///
/// `home_team_id` must be the same id the timeline was built with, so that
/// attribution lands on the same side. Totals equal the final cumulative
/// scores of the timeline; `has_overtime` is true when any drive took
/// place in OT.
pub fn line_score(timeline: &[TimelinePoint<'_>], home_team_id: &str) -> LineScore {
    let mut score = LineScore::default();

    for point in timeline {
        let Some(quarter) = point.drive.quarter.as_ref() else {
            continue;
        };
        if *quarter == Quarter::Overtime {
            score.has_overtime = true;
        }

        if let Some(team) = point.scoring_team {
            let line = if team == home_team_id {
                &mut score.home
            } else {
                &mut score.away
            };
            line.add(quarter, point.drive.points());
        }
    }

    score
}
