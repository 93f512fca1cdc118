//! Field zone graph: fixed display layout and neighbor adjacency.
//!
//! The field diagram is a 5x5 grid of 25 labeled zones: four corners
//! (TL/TR/BL/BR), twelve edge zones (T/L/R/B 1-3), and a 3x3 interior
//! (Q1-Q9). Both tables are static and never mutated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Result, TrackerError};

/// Display layout of the 25 field zones, top row first.
pub const ZONE_ROWS: [[&str; 5]; 5] = [
    ["TL", "T1", "T2", "T3", "TR"],
    ["L1", "Q1", "Q2", "Q3", "R1"],
    ["L2", "Q4", "Q5", "Q6", "R2"],
    ["L3", "Q7", "Q8", "Q9", "R3"],
    ["BL", "B1", "B2", "B3", "BR"],
];

/// All zones in row-major display order.
pub static ALL_ZONES: Lazy<Vec<&'static str>> =
    Lazy::new(|| ZONE_ROWS.iter().flatten().copied().collect());

/// Neighbor lists per zone. Corner zones have no entry, so they have no
/// neighbors for scoring purposes.
static NEIGHBORS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert("Q1", &["Q2", "Q4", "T1", "L1"]);
    m.insert("Q2", &["Q1", "Q3", "Q5", "T2"]);
    m.insert("Q3", &["Q2", "Q6", "T3", "R1"]);
    m.insert("Q4", &["Q1", "Q5", "Q7", "L2"]);
    m.insert("Q5", &["Q2", "Q4", "Q6", "Q8"]);
    m.insert("Q6", &["Q3", "Q5", "Q9", "R2"]);
    m.insert("Q7", &["Q4", "Q8", "L3", "B1"]);
    m.insert("Q8", &["Q5", "Q7", "Q9", "B2"]);
    m.insert("Q9", &["Q6", "Q8", "R3", "B3"]);
    m.insert("T1", &["Q1", "Q2", "T2"]);
    m.insert("T2", &["Q2", "T1", "T3"]);
    m.insert("T3", &["Q2", "Q3", "T2"]);
    m.insert("L1", &["Q1", "L2"]);
    m.insert("L2", &["Q4", "L1", "L3"]);
    m.insert("L3", &["Q7", "L2"]);
    m.insert("R1", &["Q3", "R2"]);
    m.insert("R2", &["Q6", "R1", "R3"]);
    m.insert("R3", &["Q9", "R2"]);
    m.insert("B1", &["Q7", "B2"]);
    m.insert("B2", &["Q8", "B1", "B3"]);
    m.insert("B3", &["Q9", "B2"]);
    m
});

/// True iff `actual` appears in the adjacency list of `target`.
///
/// Lookup is one-directional: only `target`'s own list is consulted. A zone
/// without an entry (the corners) never has neighbors.
pub fn is_neighbor(target: &str, actual: &str) -> bool {
    NEIGHBORS.get(target).is_some_and(|ns| ns.contains(&actual))
}

/// Validate that `zone` is one of the 25 fixed labels.
pub fn validate_zone(zone: &str) -> Result<()> {
    if ALL_ZONES.contains(&zone) {
        Ok(())
    } else {
        Err(TrackerError::InvalidZone(zone.to_string()))
    }
}
