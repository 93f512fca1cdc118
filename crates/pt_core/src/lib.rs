//! # pt_core - Pitch Accuracy Tracking Engine
//!
//! Tracks pitch-location attempts against a target zone on a 5x5 field grid,
//! scores each attempt by proximity, and produces a JSON-ready summary
//! (totals, Miss/Close/Accurate breakdown, per-zone heatmap).
//!
//! ## Features
//! - Fixed 25-zone field graph with neighbor adjacency
//! - Stateful single-session tracker (set target, log pitch, clear)
//! - Pure summary generation suitable for direct JSON encoding
//!
//! Each session owns its own [`PitchTracker`]; hosts that need multiple
//! concurrent sessions hold one tracker per session. No internal locking.

pub mod error;
pub mod summary;
pub mod tracker;
pub mod zone;

pub use error::{Result, TrackerError};
pub use summary::{heat_color, BreakdownSlice, Heatmap, PitchSummary, SummaryTotals};
pub use tracker::{PitchEntry, PitchTracker, ACCURACY_CLOSE, ACCURACY_EXACT, ACCURACY_MISS};
pub use zone::{is_neighbor, validate_zone, ALL_ZONES, ZONE_ROWS};
