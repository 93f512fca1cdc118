//! Pitch tracking session state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::zone::{is_neighbor, validate_zone};

/// Accuracy score for an exact hit on the target zone.
pub const ACCURACY_EXACT: u8 = 10;
/// Accuracy score for landing in a zone adjacent to the target.
pub const ACCURACY_CLOSE: u8 = 5;
/// Accuracy score for a miss.
pub const ACCURACY_MISS: u8 = 0;

/// One logged pitch attempt. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchEntry {
    /// 1-based position in the log since the last clear.
    pub pitch_num: i32,
    pub target: String,
    pub actual: String,
    /// 10 exact, 5 neighbor, 0 miss.
    pub accuracy: u8,
}

/// Pitch tracker session state.
///
/// Owned by exactly one session at a time. The three public fields fully
/// determine a session; serializing and restoring them restores the session
/// (there is no hidden state).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitchTracker {
    /// Zone the next pitch aims for. Consumed by [`log_pitch`](Self::log_pitch).
    #[serde(default)]
    pub target: Option<String>,
    /// Number of pitches logged since the last clear.
    #[serde(default)]
    pub pitch_counter: i32,
    /// Append-only log of attempts, oldest first.
    #[serde(default)]
    pub pitch_log: Vec<PitchEntry>,
}

impl PitchTracker {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target zone for the next pitch. Overwrites any unconsumed
    /// target.
    pub fn set_target(&mut self, zone: &str) -> Result<()> {
        validate_zone(zone)?;
        self.target = Some(zone.to_string());
        log::debug!("Target set to {}", zone);
        Ok(())
    }

    /// Log where a pitch actually landed, scoring it against the current
    /// target.
    ///
    /// The target is consumed on success; a new one must be set before the
    /// next log. Fails with [`TrackerError::NoTargetSet`] when no target is
    /// pending, leaving the session untouched.
    pub fn log_pitch(&mut self, actual: &str) -> Result<PitchEntry> {
        validate_zone(actual)?;

        let target = self.target.take().ok_or(TrackerError::NoTargetSet)?;

        // Self-heals a non-positive counter (e.g. restored from a corrupt
        // save) on the first increment.
        self.pitch_counter = if self.pitch_counter < 1 { 1 } else { self.pitch_counter + 1 };

        let accuracy = if target == actual {
            ACCURACY_EXACT
        } else if is_neighbor(&target, actual) {
            ACCURACY_CLOSE
        } else {
            ACCURACY_MISS
        };

        let entry = PitchEntry {
            pitch_num: self.pitch_counter,
            target,
            actual: actual.to_string(),
            accuracy,
        };
        self.pitch_log.push(entry.clone());

        log::debug!(
            "Pitch {} logged: {} -> {} (accuracy {})",
            entry.pitch_num,
            entry.target,
            entry.actual,
            entry.accuracy
        );

        Ok(entry)
    }

    /// Reset the session: empty log, counter to zero, target unset.
    pub fn clear_pitch_log(&mut self) {
        self.pitch_log.clear();
        self.pitch_counter = 0;
        self.target = None;
        log::debug!("Pitch log cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ALL_ZONES;
    use proptest::prelude::*;

    #[test]
    fn test_exact_hit() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        let entry = tracker.log_pitch("Q1").unwrap();

        assert_eq!(entry.pitch_num, 1);
        assert_eq!(entry.target, "Q1");
        assert_eq!(entry.actual, "Q1");
        assert_eq!(entry.accuracy, ACCURACY_EXACT);
    }

    #[test]
    fn test_neighbor_hit() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        let entry = tracker.log_pitch("Q2").unwrap();
        assert_eq!(entry.accuracy, ACCURACY_CLOSE);
    }

    #[test]
    fn test_miss() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        let entry = tracker.log_pitch("Q9").unwrap();
        assert_eq!(entry.accuracy, ACCURACY_MISS);
    }

    #[test]
    fn test_log_without_target_fails() {
        let mut tracker = PitchTracker::new();
        assert_eq!(tracker.log_pitch("Q1"), Err(TrackerError::NoTargetSet));
        assert!(tracker.pitch_log.is_empty());
        assert_eq!(tracker.pitch_counter, 0);
    }

    #[test]
    fn test_target_consumed_after_log() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        tracker.log_pitch("Q2").unwrap();

        assert!(tracker.target.is_none());
        assert_eq!(tracker.log_pitch("Q3"), Err(TrackerError::NoTargetSet));
    }

    #[test]
    fn test_set_target_overwrites() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        tracker.set_target("B2").unwrap();
        let entry = tracker.log_pitch("B2").unwrap();
        assert_eq!(entry.target, "B2");
        assert_eq!(entry.accuracy, ACCURACY_EXACT);
    }

    #[test]
    fn test_invalid_zone_rejected() {
        let mut tracker = PitchTracker::new();
        assert_eq!(
            tracker.set_target("Q99"),
            Err(TrackerError::InvalidZone("Q99".to_string()))
        );

        tracker.set_target("Q1").unwrap();
        assert_eq!(
            tracker.log_pitch("mid"),
            Err(TrackerError::InvalidZone("mid".to_string()))
        );
        // A failed log leaves the pending target in place.
        assert_eq!(tracker.target.as_deref(), Some("Q1"));
        assert!(tracker.pitch_log.is_empty());
    }

    #[test]
    fn test_pitch_numbers_sequential() {
        let mut tracker = PitchTracker::new();
        for actual in ["Q1", "Q5", "T2", "BR"] {
            tracker.set_target("Q5").unwrap();
            tracker.log_pitch(actual).unwrap();
        }

        assert_eq!(tracker.pitch_counter, 4);
        let nums: Vec<i32> = tracker.pitch_log.iter().map(|e| e.pitch_num).collect();
        assert_eq!(nums, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        tracker.log_pitch("Q2").unwrap();
        tracker.set_target("Q3").unwrap();

        tracker.clear_pitch_log();

        assert!(tracker.target.is_none());
        assert_eq!(tracker.pitch_counter, 0);
        assert!(tracker.pitch_log.is_empty());

        // Numbering restarts from 1 after a clear.
        tracker.set_target("Q1").unwrap();
        let entry = tracker.log_pitch("Q1").unwrap();
        assert_eq!(entry.pitch_num, 1);
    }

    #[test]
    fn test_counter_self_heals_after_bad_restore() {
        let mut tracker = PitchTracker { pitch_counter: -5, ..Default::default() };
        tracker.set_target("Q1").unwrap();
        let entry = tracker.log_pitch("Q1").unwrap();
        assert_eq!(entry.pitch_num, 1);
        assert_eq!(tracker.pitch_counter, 1);
    }

    #[test]
    fn test_serde_round_trip_restores_session() {
        let mut tracker = PitchTracker::new();
        tracker.set_target("Q1").unwrap();
        tracker.log_pitch("Q2").unwrap();
        tracker.set_target("R2").unwrap();

        let json = serde_json::to_string(&tracker).unwrap();
        let mut restored: PitchTracker = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.target.as_deref(), Some("R2"));
        assert_eq!(restored.pitch_counter, 1);
        assert_eq!(restored.pitch_log, tracker.pitch_log);

        // Restored session keeps counting where it left off.
        let entry = restored.log_pitch("R2").unwrap();
        assert_eq!(entry.pitch_num, 2);
    }

    #[test]
    fn test_restore_from_partial_state() {
        // Fields missing from a save fall back to the empty session.
        let restored: PitchTracker = serde_json::from_str("{}").unwrap();
        assert!(restored.target.is_none());
        assert_eq!(restored.pitch_counter, 0);
        assert!(restored.pitch_log.is_empty());
    }

    fn zone_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(ALL_ZONES.clone())
    }

    proptest! {
        #[test]
        fn prop_counter_matches_log_length(
            pairs in prop::collection::vec((zone_strategy(), zone_strategy()), 0..40)
        ) {
            let mut tracker = PitchTracker::new();
            for (target, actual) in &pairs {
                tracker.set_target(target).unwrap();
                tracker.log_pitch(actual).unwrap();
            }

            prop_assert_eq!(tracker.pitch_counter as usize, tracker.pitch_log.len());
            for (i, entry) in tracker.pitch_log.iter().enumerate() {
                prop_assert_eq!(entry.pitch_num, i as i32 + 1);
                prop_assert!(matches!(entry.accuracy, 0 | 5 | 10));
            }
        }
    }
}
