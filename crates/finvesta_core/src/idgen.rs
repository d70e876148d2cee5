//! Record id generation.
//!
//! # Responsibility
//! - Provide fresh `RecordId` values for newly created records.
//!
//! # Invariants
//! - A generator never issues an id twice, even for two creations within
//!   the same clock millisecond.

use crate::model::record::RecordId;

/// Injected capability for minting record ids.
///
/// The store takes this as a seam so tests can substitute a deterministic
/// sequence for the wall clock.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Epoch-millisecond id source with a monotonic guard.
///
/// Ids are the current time in milliseconds; when the clock has not moved
/// past the previously issued id the guard bumps by one instead, so rapid
/// consecutive creations still get distinct ids.
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last_issued: RecordId,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let now = chrono::Utc::now().timestamp_millis();
        let id = if now > self.last_issued {
            now
        } else {
            self.last_issued + 1
        };
        self.last_issued = id;
        id
    }
}

/// Deterministic counter, for tests.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: RecordId,
}

impl SequenceIdGenerator {
    pub fn starting_at(first: RecordId) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockIdGenerator, IdGenerator, SequenceIdGenerator};

    #[test]
    fn clock_ids_are_strictly_increasing_under_rapid_calls() {
        let mut ids = ClockIdGenerator::new();
        let mut previous = ids.next_id();
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn sequence_ids_count_up_from_start() {
        let mut ids = SequenceIdGenerator::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
        assert_eq!(ids.next_id(), 12);
    }
}
