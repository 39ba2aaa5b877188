use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SimError;

/// Descriptive statistics for one outcome sample.
///
/// `frequency` counts occurrences per distinct outcome, keyed in first-seen
/// order, and is what a bar-chart renderer consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub samples: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: i64,
    pub min: i64,
    pub max: i64,
    pub frequency: IndexMap<i64, u64>,
}

/// Compute mean, median, mode and the frequency table for `sample`.
///
/// Median is the standard order statistic (average of the two middle values
/// for even length). When several outcomes tie for the highest count, the
/// mode is the smallest tying value, so a given sample always summarizes the
/// same way. Pure function; fails only on an empty sample.
pub fn summarize(sample: &[i64]) -> Result<SummaryStats, SimError> {
    if sample.is_empty() {
        return Err(SimError::EmptySample);
    }

    let mut frequency: IndexMap<i64, u64> = IndexMap::new();
    for &v in sample {
        *frequency.entry(v).or_insert(0) += 1;
    }

    let mean = sample.iter().sum::<i64>() as f64 / sample.len() as f64;

    let mut sorted = sample.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    };

    let mut mode = sample[0];
    let mut best = 0u64;
    for (&value, &count) in &frequency {
        if count > best || (count == best && value < mode) {
            mode = value;
            best = count;
        }
    }

    Ok(SummaryStats {
        samples: sample.len(),
        mean,
        median,
        mode,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        frequency,
    })
}
