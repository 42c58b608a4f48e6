//! Drive data model.
//!
//! One `Drive` is one continuous offensive possession, as served by the
//! game-drives REST endpoint. Field names on the wire are camelCase
//! (`driveNum`, `teamId`, `timeStart`, ...); everything except `quarter` and
//! `teamId` is optional and normalized through permissive defaults rather
//! than rejected.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::clock::parse_clock;
use crate::error::{DriveError, Result};

/// Playing period of a drive.
///
/// Wire values are the strings `"1"`..`"4"` and `"OT"`. Anything else is
/// preserved verbatim in `Other` and sorts last (rank 999) instead of
/// aborting the whole game view over one malformed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quarter {
    First,
    Second,
    Third,
    Fourth,
    Overtime,
    Other(String),
}

impl Quarter {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "1" => Quarter::First,
            "2" => Quarter::Second,
            "3" => Quarter::Third,
            "4" => Quarter::Fourth,
            "OT" => Quarter::Overtime,
            other => Quarter::Other(other.to_string()),
        }
    }

    /// Wire label, e.g. `"1"` or `"OT"`.
    pub fn label(&self) -> &str {
        match self {
            Quarter::First => "1",
            Quarter::Second => "2",
            Quarter::Third => "3",
            Quarter::Fourth => "4",
            Quarter::Overtime => "OT",
            Quarter::Other(raw) => raw,
        }
    }

    /// Chronological sort rank: 1 < 2 < 3 < 4 < OT, unknown values last.
    pub fn rank(&self) -> u16 {
        match self {
            Quarter::First => 1,
            Quarter::Second => 2,
            Quarter::Third => 3,
            Quarter::Fourth => 4,
            Quarter::Overtime => 5,
            Quarter::Other(_) => 999,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Some producers emit the quarter as a bare number instead of a
        // string; accept any numeric form. A weird number (negative,
        // fractional) degrades to `Other` like any malformed label rather
        // than failing the whole payload.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            NegNum(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Quarter::from_label(&n.to_string()),
            Raw::NegNum(n) => Quarter::from_label(&n.to_string()),
            Raw::Float(n) => Quarter::from_label(&n.to_string()),
            Raw::Text(s) => Quarter::from_label(&s),
        })
    }
}

/// Classification of the free-text `endEvent` label.
///
/// The categories match the ones the game-summary views special-case for
/// icons and key-play markers; any other label falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndEventKind {
    Touchdown,
    FieldGoal,
    MissedFieldGoal,
    Fumble,
    Interception,
    Punt,
    Other,
}

impl EndEventKind {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Touchdown" => EndEventKind::Touchdown,
            "Field Goal" => EndEventKind::FieldGoal,
            "Missed FG" => EndEventKind::MissedFieldGoal,
            "Fumble" => EndEventKind::Fumble,
            "Interception" => EndEventKind::Interception,
            "Punt" => EndEventKind::Punt,
            _ => EndEventKind::Other,
        }
    }

    /// Whether this event gets a key-play indicator on the scoring chart.
    pub fn is_key_play(&self) -> bool {
        !matches!(self, EndEventKind::Punt | EndEventKind::Other)
    }

    /// Change of possession without a score.
    pub fn is_turnover(&self) -> bool {
        matches!(self, EndEventKind::Fumble | EndEventKind::Interception)
    }
}

/// One offensive possession record from the game-drives endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    /// Team with the ball during the drive. Required.
    #[serde(default)]
    pub team_id: Option<String>,
    /// Ordinal within the game. Served as a string; see [`Drive::drive_number`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_num: Option<String>,
    /// Playing period. Required.
    #[serde(default)]
    pub quarter: Option<Quarter>,
    /// Game clock remaining in the quarter when the drive began (`M:SS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// Field position the drive started from, e.g. `"OWN 25"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<String>,
    /// Clock time consumed by the drive (`M:SS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_yds: Option<String>,
    /// Free-text description of how the drive ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_event: Option<String>,
    /// True when the points were scored by the team NOT in possession
    /// (pick-six, fumble return, ...).
    #[serde(default)]
    pub opposing_touchdown: Option<bool>,
    /// Points resulting from this drive, 0 if none.
    #[serde(default)]
    pub points_scored: Option<u32>,
}

impl Drive {
    /// Check the two required fields. Everything else has a documented
    /// default and never fails.
    pub fn validate(&self) -> Result<()> {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());

        if self.quarter.is_none()
            || matches!(&self.quarter, Some(Quarter::Other(raw)) if raw.trim().is_empty())
        {
            return Err(self.invalid("quarter"));
        }
        if blank(&self.team_id) {
            return Err(self.invalid("teamId"));
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str) -> DriveError {
        DriveError::InvalidDriveRecord {
            field,
            drive_num: self.drive_num.clone().unwrap_or_else(|| "?".to_string()),
        }
    }

    /// Sort rank of the quarter; absent quarter ranks with the malformed
    /// ones. `order_drives` validates first, this is only a fallback.
    pub fn quarter_rank(&self) -> u16 {
        self.quarter.as_ref().map_or(999, Quarter::rank)
    }

    /// Ordinal drive number, 0 when missing or unparsable.
    pub fn drive_number(&self) -> u32 {
        self.drive_num
            .as_deref()
            .and_then(|n| n.trim().parse().ok())
            .unwrap_or(0)
    }

    /// `timeStart` in seconds remaining in the quarter, 0 when absent or
    /// malformed. The game clock counts down, so larger is earlier.
    pub fn clock_start_seconds(&self) -> u32 {
        parse_clock(self.time_start.as_deref())
    }

    /// `timeTotal` in seconds, 0 when absent or malformed.
    pub fn duration_seconds(&self) -> u32 {
        parse_clock(self.time_total.as_deref())
    }

    pub fn points(&self) -> u32 {
        self.points_scored.unwrap_or(0)
    }

    pub fn scored_by_defense(&self) -> bool {
        self.opposing_touchdown.unwrap_or(false)
    }

    pub fn end_event_kind(&self) -> EndEventKind {
        self.end_event
            .as_deref()
            .map_or(EndEventKind::Other, EndEventKind::from_label)
    }
}

/// Deserialize the JSON array served by the game-drives endpoint.
///
/// Parsing is structural only; use [`Drive::validate`] (or
/// [`order_drives`](crate::chronology::order_drives), which validates) to
/// reject records missing their required fields.
pub fn parse_drives(json: &str) -> Result<Vec<Drive>> {
    Ok(serde_json::from_str(json)?)
}
