//! Ring buffer for trace records.
//!
//! Provides a fixed-size buffer that stores the most recent trace records.

use std::collections::VecDeque;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, run: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, run, timestamp_ns, event));

        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.records
            .iter()
            .filter(|r| r.event_type() == event_type)
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::record::PipelineStage;

    fn start(run: u64) -> TraceEvent {
        TraceEvent::RunStart { run, input_len: 0 }
    }

    fn end(run: u64) -> TraceEvent {
        TraceEvent::RunEnd { run, success: true }
    }

    #[test]
    fn buffer_push_and_len() {
        let mut buffer = TraceBuffer::new(100);
        assert!(buffer.is_empty());

        buffer.push(1, 1000, start(1));
        assert_eq!(buffer.len(), 1);

        buffer.push(1, 2000, end(1));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn buffer_eviction() {
        let mut buffer = TraceBuffer::new(3);

        buffer.push(1, 1000, start(1));
        buffer.push(1, 2000, end(1));
        buffer.push(2, 3000, start(2));
        assert_eq!(buffer.len(), 3);

        buffer.push(2, 4000, end(2));
        assert_eq!(buffer.len(), 3);

        let oldest = buffer.iter().next().unwrap();
        assert!(matches!(oldest.event, TraceEvent::RunEnd { run: 1, .. }));
        assert_eq!(buffer.last().unwrap().id, 3);
    }

    #[test]
    fn buffer_queries() {
        let mut buffer = TraceBuffer::new(100);
        buffer.push(1, 0, start(1));
        buffer.push(
            1,
            10,
            TraceEvent::StageStart {
                stage: PipelineStage::Parse,
            },
        );
        buffer.push(1, 20, end(1));
        buffer.push(2, 30, start(2));

        let starts = buffer.by_event_type("run-start");
        assert_eq!(starts.len(), 2);
        assert_eq!(starts[1].run, 2);
        assert_eq!(buffer.by_event_type("stage-start").len(), 1);
        assert!(buffer.by_event_type("node-emitted").is_empty());
    }
}
