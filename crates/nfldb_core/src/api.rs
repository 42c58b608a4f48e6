//! JSON string API.
//!
//! String-in/string-out facade for embedding hosts that ship drive data as
//! raw JSON text. The request envelope is schema-versioned; the `drives`
//! payload uses the wire field names of the game-drives endpoint.

use serde::{Deserialize, Serialize};

use crate::chronology::order_drives;
use crate::models::{Drive, Quarter};
use crate::summary::{line_score, LineScore};
use crate::timeline::{build_timeline, TimelinePoint};

#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    pub schema_version: u8,
    pub home_team_id: String,
    pub away_team_id: String,
    pub drives: Vec<Drive>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub schema_version: u8,
    pub home_team_id: String,
    pub away_team_id: String,
    pub timeline: Vec<TimelineEntry>,
    pub line_score: LineScore,
    pub final_home: u32,
    pub final_away: u32,
}

/// Owned, serializable flattening of one [`TimelinePoint`], in the shape
/// the scoring-progression chart consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub quarter: Quarter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_num: Option<String>,
    pub team_with_ball: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_event: Option<String>,
    pub points_scored: u32,
    pub is_scoring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_team: Option<String>,
    pub home_score: u32,
    pub away_score: u32,
    pub time_start: u32,
    pub time_end: u32,
}

impl From<&TimelinePoint<'_>> for TimelineEntry {
    fn from(point: &TimelinePoint<'_>) -> Self {
        TimelineEntry {
            quarter: point
                .drive
                .quarter
                .clone()
                .unwrap_or_else(|| Quarter::Other(String::new())),
            drive_num: point.drive.drive_num.clone(),
            team_with_ball: point.possessing_team.to_string(),
            end_event: point.drive.end_event.clone(),
            points_scored: point.drive.points(),
            is_scoring: point.is_scoring(),
            scoring_team: point.scoring_team.map(str::to_string),
            home_score: point.home_score,
            away_score: point.away_score,
            time_start: point.seconds_start,
            time_end: point.seconds_end,
        }
    }
}

/// Order the request's drives, build the scoring timeline and line score,
/// and serialize the response.
///
/// Errors are returned as plain strings for FFI-friendly hosts: malformed
/// request JSON, unsupported schema version, or an invalid drive record.
pub fn build_scoring_timeline_json(request_json: &str) -> Result<String, String> {
    let request: TimelineRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != 1 {
        return Err(format!(
            "Unsupported schema version: {}",
            request.schema_version
        ));
    }

    let ordered = order_drives(&request.drives).map_err(|e| e.to_string())?;
    let timeline = build_timeline(&ordered, &request.home_team_id, &request.away_team_id);
    let score = line_score(&timeline, &request.home_team_id);

    let (final_home, final_away) = timeline
        .last()
        .map(|p| (p.home_score, p.away_score))
        .unwrap_or((0, 0));

    let response = TimelineResponse {
        schema_version: 1,
        timeline: timeline.iter().map(TimelineEntry::from).collect(),
        line_score: score,
        final_home,
        final_away,
        home_team_id: request.home_team_id,
        away_team_id: request.away_team_id,
    };

    serde_json::to_string(&response).map_err(|e| format!("Serialization failed: {}", e))
}
