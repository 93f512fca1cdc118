//! Aggregate session summary: totals, breakdown, and per-zone heatmap.
//!
//! Everything here is a pure read over [`PitchTracker`] state; the snapshot
//! types are plain serde structs an external presentation layer can encode
//! directly (e.g. as JSON).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tracker::{PitchEntry, PitchTracker, ACCURACY_CLOSE, ACCURACY_EXACT};
use crate::zone::{ALL_ZONES, ZONE_ROWS};

/// Session-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_pitches: usize,
    pub accurate_10: usize,
    pub close_5: usize,
    pub miss_0: usize,
    /// Hit-or-close rate in percent, one decimal. 0.0 for an empty log.
    pub accuracy_pct: f64,
}

/// One slice of the Miss/Close/Accurate breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub count: usize,
}

/// Per-zone landing tally, grid-aligned to the field layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Fixed display layout, 5 rows of 5 zone labels.
    pub zones_order: Vec<Vec<String>>,
    /// Human-readable cell labels, e.g. `"Q5 (3, 25.0%)"`.
    pub labels_grid: Vec<Vec<String>>,
    /// Raw landing counts aligned to `zones_order`.
    pub counts_grid: Vec<Vec<u32>>,
    /// Landing count per zone, zero-count zones included.
    pub counts_by_zone: BTreeMap<String, u32>,
}

/// Serialization-ready snapshot of a tracker session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSummary {
    pub summary: SummaryTotals,
    /// Fixed order: Miss, Close, Accurate.
    pub breakdown: Vec<BreakdownSlice>,
    pub heatmap: Heatmap,
    pub log: Vec<PitchEntry>,
}

impl PitchSummary {
    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl PitchTracker {
    /// Build a snapshot of the current session. Pure read, callable any
    /// number of times.
    pub fn generate_summary(&self) -> PitchSummary {
        let total = self.pitch_log.len();
        let accurate = self.pitch_log.iter().filter(|p| p.accuracy == ACCURACY_EXACT).count();
        let close = self.pitch_log.iter().filter(|p| p.accuracy == ACCURACY_CLOSE).count();
        let miss = total - accurate - close;

        let accuracy_pct = if total > 0 {
            round_one_decimal((accurate + close) as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        // Heatmap tallies landings by actual zone; every zone appears even
        // with zero attempts.
        let mut counts: BTreeMap<String, u32> =
            ALL_ZONES.iter().map(|z| (z.to_string(), 0)).collect();
        for entry in &self.pitch_log {
            if let Some(c) = counts.get_mut(&entry.actual) {
                *c += 1;
            }
        }

        let labels_grid: Vec<Vec<String>> = ZONE_ROWS
            .iter()
            .map(|row| row.iter().map(|z| cell_label(z, counts[*z], total)).collect())
            .collect();
        let counts_grid: Vec<Vec<u32>> =
            ZONE_ROWS.iter().map(|row| row.iter().map(|z| counts[*z]).collect()).collect();

        PitchSummary {
            summary: SummaryTotals {
                total_pitches: total,
                accurate_10: accurate,
                close_5: close,
                miss_0: miss,
                accuracy_pct,
            },
            breakdown: vec![
                BreakdownSlice { label: "Miss".to_string(), count: miss },
                BreakdownSlice { label: "Close".to_string(), count: close },
                BreakdownSlice { label: "Accurate".to_string(), count: accurate },
            ],
            heatmap: Heatmap {
                zones_order: ZONE_ROWS
                    .iter()
                    .map(|row| row.iter().map(|z| z.to_string()).collect())
                    .collect(),
                labels_grid,
                counts_grid,
                counts_by_zone: counts,
            },
            log: self.pitch_log.clone(),
        }
    }
}

fn cell_label(zone: &str, count: u32, total: usize) -> String {
    if total > 0 {
        format!("{} ({}, {:.1}%)", zone, count, count as f64 / total as f64 * 100.0)
    } else {
        format!("{} (0,0%)", zone)
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Map a landing count to a display heat color.
pub fn heat_color(count: u32) -> &'static str {
    match count {
        0 => "#ffffff",
        1..=2 => "#a3d5ff",
        3..=5 => "#3399ff",
        _ => "#004c99",
    }
}
