//! Pairwise conflict classification.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::TimeError;

/// How two events relate in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// A gap separates the events.
    #[default]
    None,
    /// The later event starts exactly when the earlier one ends.
    Adjacent,
    /// The later event starts before the earlier one ends.
    Overlap,
}

impl ConflictKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Adjacent => "adjacent",
            Self::Overlap => "overlap",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of one pair of events, ordered by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairConflict<'a> {
    /// The event that starts first (the first argument on a tie).
    pub earlier: &'a Event,
    pub later: &'a Event,
    pub kind: ConflictKind,
    /// Minutes both events share; zero unless `kind` is `Overlap`.
    pub overlap_minutes: u32,
}

impl PairConflict<'_> {
    pub const fn is_overlap(&self) -> bool {
        matches!(self.kind, ConflictKind::Overlap)
    }
}

/// Classify two events that share a date.
///
/// The pair is ordered by start time before comparing; equal starts keep
/// argument order. The caller guarantees both events are on the same date.
pub fn classify_pair<'a>(
    first: &'a Event,
    second: &'a Event,
) -> Result<PairConflict<'a>, TimeError> {
    let first_start = first.start_minutes()?;
    let second_start = second.start_minutes()?;

    if second_start < first_start {
        Ok(classify_ordered((second, second_start), (first, first_start)))
    } else {
        Ok(classify_ordered((first, first_start), (second, second_start)))
    }
}

/// Classify a pair already ordered by start minutes.
pub(crate) fn classify_ordered<'a>(
    (earlier, earlier_start): (&'a Event, u32),
    (later, later_start): (&'a Event, u32),
) -> PairConflict<'a> {
    let earlier_end = earlier_start.saturating_add(earlier.duration);

    let (kind, overlap_minutes) = match later_start.cmp(&earlier_end) {
        Ordering::Less => (ConflictKind::Overlap, earlier_end - later_start),
        Ordering::Equal => (ConflictKind::Adjacent, 0),
        Ordering::Greater => (ConflictKind::None, 0),
    };

    PairConflict {
        earlier,
        later,
        kind,
        overlap_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::event;
    use crate::time::add_minutes;

    #[test]
    fn partial_overlap_measures_shared_minutes() {
        let a = event("a", "2024-01-01", "09:00", 60);
        let b = event("b", "2024-01-01", "09:30", 30);

        let pair = classify_pair(&a, &b).unwrap();
        assert_eq!(pair.kind, ConflictKind::Overlap);
        assert_eq!(pair.overlap_minutes, 30);
        assert_eq!(pair.earlier.id, a.id);
        assert_eq!(pair.later.id, b.id);
    }

    #[test]
    fn argument_order_does_not_change_membership() {
        let a = event("a", "2024-01-01", "09:00", 45);
        let b = event("b", "2024-01-01", "09:20", 60);

        let forward = classify_pair(&a, &b).unwrap();
        let backward = classify_pair(&b, &a).unwrap();

        assert_eq!(forward.kind, backward.kind);
        assert_eq!(forward.overlap_minutes, backward.overlap_minutes);
        assert_eq!(backward.earlier.id, a.id);
        assert_eq!(backward.later.id, b.id);
    }

    #[test]
    fn touching_events_are_adjacent_not_overlapping() {
        let a = event("a", "2024-01-01", "09:00", 60);
        let b = event("b", "2024-01-01", "10:00", 30);

        let pair = classify_pair(&a, &b).unwrap();
        assert_eq!(pair.kind, ConflictKind::Adjacent);
        assert_eq!(pair.overlap_minutes, 0);
        assert!(!pair.is_overlap());
    }

    #[test]
    fn start_equal_to_computed_end_is_always_adjacent() {
        for (start, duration) in [("08:15", 45), ("9:5", 55), ("23:00", 59), ("00:00", 1)] {
            let a = event("a", "2024-01-01", start, duration);
            let end = add_minutes(start, i64::from(duration)).unwrap();
            let b = event("b", "2024-01-01", &end, 10);

            assert_eq!(
                classify_pair(&a, &b).unwrap().kind,
                ConflictKind::Adjacent,
                "{start} + {duration} should touch {end}"
            );
        }
    }

    #[test]
    fn gap_is_no_conflict() {
        let a = event("a", "2024-01-01", "09:00", 30);
        let b = event("b", "2024-01-01", "11:00", 30);

        let pair = classify_pair(&a, &b).unwrap();
        assert_eq!(pair.kind, ConflictKind::None);
        assert_eq!(pair.overlap_minutes, 0);
    }

    #[test]
    fn contained_event_overlap_runs_to_outer_end() {
        let outer = event("outer", "2024-01-01", "09:00", 180);
        let inner = event("inner", "2024-01-01", "10:00", 15);

        let pair = classify_pair(&inner, &outer).unwrap();
        assert_eq!(pair.kind, ConflictKind::Overlap);
        // Measured as earlier end minus later start, not the inner length.
        assert_eq!(pair.overlap_minutes, 120);
    }

    #[test]
    fn equal_starts_keep_argument_order() {
        let long = event("long", "2024-01-01", "10:00", 60);
        let short = event("short", "2024-01-01", "10:00", 30);

        let pair = classify_pair(&long, &short).unwrap();
        assert_eq!(pair.earlier.id, long.id);
        assert_eq!(pair.overlap_minutes, 60);

        let pair = classify_pair(&short, &long).unwrap();
        assert_eq!(pair.earlier.id, short.id);
        assert_eq!(pair.kind, ConflictKind::Overlap);
        assert_eq!(pair.overlap_minutes, 30);
    }

    #[test]
    fn zero_length_event_on_a_shared_start_depends_on_order() {
        let zero = event("zero", "2024-01-01", "10:00", 0);
        let other = event("other", "2024-01-01", "10:00", 30);

        let zero_first = classify_pair(&zero, &other).unwrap();
        assert_eq!(zero_first.kind, ConflictKind::Adjacent);
        assert_eq!(zero_first.overlap_minutes, 0);

        let zero_second = classify_pair(&other, &zero).unwrap();
        assert_eq!(zero_second.kind, ConflictKind::Overlap);
        assert_eq!(zero_second.overlap_minutes, 30);
    }

    #[test]
    fn malformed_time_is_an_error() {
        let a = event("a", "2024-01-01", "25:00", 30);
        let b = event("b", "2024-01-01", "09:00", 30);

        assert!(matches!(
            classify_pair(&a, &b),
            Err(TimeError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConflictKind::Adjacent).unwrap(),
            r#""adjacent""#
        );
        assert_eq!(ConflictKind::Overlap.to_string(), "overlap");
    }
}
