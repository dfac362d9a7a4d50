use std::collections::VecDeque;

use crate::market::RateObservation;

/// Default number of samples kept for the rate chart.
pub const DEFAULT_CAPACITY: usize = 50;

/// One observation of the exchange rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Observation time in milliseconds.
    pub timestamp: i64,
    pub value:     f64,
}

impl Sample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<RateObservation> for Sample {
    fn from(obs: RateObservation) -> Self {
        Self {
            timestamp: obs.updated_at_ms(),
            value:     obs.rate_f64(),
        }
    }
}

/// Bounded, time-ordered history of samples feeding the rate chart.
///
/// A sample carrying the same timestamp as the newest one replaces it instead
/// of growing the history; once `capacity` is exceeded the oldest sample is
/// evicted.
#[derive(Debug, Clone)]
pub struct Series {
    samples:  VecDeque<Sample>,
    capacity: usize,
}

impl Default for Series {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Series {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `sample`, coalescing with the newest entry on equal timestamps.
    pub fn push(&mut self, sample: Sample) {
        if let Some(last) = self.samples.back_mut() {
            if last.timestamp == sample.timestamp {
                *last = sample;
                return;
            }
        }

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Change the cap, evicting the oldest samples if the history is now too long.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Minimum and maximum value across all samples, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.samples.iter().map(|s| s.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rate_series() -> Series {
        let mut series = Series::default();
        series.push(Sample::new(1000, 1.10));
        series.push(Sample::new(2000, 1.12));
        series.push(Sample::new(3000, 1.11));
        series
    }

    #[test]
    fn equal_timestamp_replaces_last_sample() {
        let mut series = rate_series();
        series.push(Sample::new(3000, 1.15));

        assert_eq!(series.len(), 3);
        assert_eq!(series.last(), Some(&Sample::new(3000, 1.15)));
        assert_eq!(series.first(), Some(&Sample::new(1000, 1.10)));
    }

    #[test]
    fn new_timestamp_appends() {
        let mut series = rate_series();
        series.push(Sample::new(4000, 1.13));
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn oldest_sample_is_evicted_past_capacity() {
        let mut series = Series::new(3);
        for t in 1..=5 {
            series.push(Sample::new(t, t as f64));
        }

        let timestamps: Vec<i64> = series.iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, vec![3, 4, 5]);
    }

    #[test]
    fn zero_capacity_keeps_one_sample() {
        let mut series = Series::new(0);
        series.push(Sample::new(1, 1.0));
        series.push(Sample::new(2, 2.0));
        assert_eq!(series.iter().copied().collect::<Vec<_>>(), vec![Sample::new(2, 2.0)]);
    }

    #[test]
    fn shrinking_capacity_evicts_oldest() {
        let mut series = rate_series();
        series.set_capacity(1);
        assert_eq!(series.iter().copied().collect::<Vec<_>>(), vec![Sample::new(3000, 1.11)]);
    }

    #[test]
    fn value_range_spans_all_samples() {
        assert_eq!(Series::default().value_range(), None);
        assert_eq!(rate_series().value_range(), Some((1.10, 1.12)));
    }

    #[test]
    fn observation_converts_to_milliseconds_and_float() {
        let obs = RateObservation::new(
            alloy_primitives::U256::from(1_110_000_000_000_000_000u128),
            1_700_000_000,
        );
        let sample = Sample::from(obs);
        assert_eq!(sample.timestamp, 1_700_000_000_000);
        assert!((sample.value - 1.11).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn length_never_exceeds_capacity(
            cap in 1usize..20,
            steps in proptest::collection::vec(0i64..3, 0..100),
        ) {
            let mut series = Series::new(cap);
            let mut t = 0i64;
            for step in steps {
                t += step;
                series.push(Sample::new(t, t as f64));
                prop_assert!(series.len() <= cap);
            }

            let timestamps: Vec<i64> = series.iter().map(|s| s.timestamp).collect();
            prop_assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
