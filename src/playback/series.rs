use crate::core::Sample;
use std::sync::Arc;

/// Immutable, chronologically ordered samples of one recorded flight.
///
/// Cheap to clone; every clone shares the same rows.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    samples: Arc<[Sample]>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// A series with no rows, used when a load fails
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Index of the final sample, if any
    pub fn last_index(&self) -> Option<usize> {
        self.samples.len().checked_sub(1)
    }

    pub fn start_time(&self) -> Option<i64> {
        self.samples.first().map(|s| s.timestamp)
    }

    pub fn end_time(&self) -> Option<i64> {
        self.samples.last().map(|s| s.timestamp)
    }

    /// Recorded gap between `index` and the sample after it
    pub fn delta_millis(&self, index: usize) -> Option<i64> {
        let current = self.samples.get(index)?;
        let next = self.samples.get(index + 1)?;
        Some(next.timestamp - current.timestamp)
    }
}
