//! # nfldb_core - Drive Chronology & Scoring Timeline
//!
//! Pure, synchronous core behind the game-summary views of the NFL stats
//! app: orders a game's possession records ("drives") into play order and
//! reconstructs the cumulative score-by-time progression both teams walked
//! through, including defensive/special-teams scoring attribution.
//!
//! ## Features
//! - Permissive wire-data normalization (messy clock strings and missing
//!   fields degrade to documented defaults instead of failing)
//! - Deterministic, input-order-independent chronological ordering
//! - Contiguous, strictly advancing elapsed-seconds timeline
//! - Per-quarter line score derivation and a JSON string API for
//!   embedding hosts
//!
//! The crate performs no I/O: fetching drive JSON over HTTP and rendering
//! the chart/table are the caller's concern.

pub mod api;
pub mod chronology;
pub mod clock;
pub mod error;
pub mod models;
pub mod summary;
pub mod timeline;

pub use api::{build_scoring_timeline_json, TimelineRequest, TimelineResponse};
pub use chronology::{chronological_cmp, order_drives};
pub use clock::{format_clock, parse_clock, QUARTER_SECONDS};
pub use error::{DriveError, Result};
pub use models::{parse_drives, Drive, EndEventKind, Quarter};
pub use summary::{line_score, LineScore, QuarterLine};
pub use timeline::{build_timeline, TimelinePoint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
