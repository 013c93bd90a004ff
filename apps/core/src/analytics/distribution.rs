//! Length distribution statistics and histogram binning.

use super::report::{DistributionStats, HistogramBin, LengthDistribution};
use crate::models::Pair;

/// Default number of equal-width histogram bins.
const HISTOGRAM_BINS: usize = 5;

/// Analyze prompt and completion length spreads for a non-empty dataset.
pub fn analyze(pairs: &[Pair]) -> LengthDistribution {
    let prompt_lengths: Vec<usize> = pairs.iter().map(|p| p.prompt.chars().count()).collect();
    let completion_lengths: Vec<usize> =
        pairs.iter().map(|p| p.completion.chars().count()).collect();

    LengthDistribution {
        prompt: stats(&prompt_lengths),
        histogram: histogram(&completion_lengths, HISTOGRAM_BINS),
        completion: stats(&completion_lengths),
    }
}

/// Summary statistics over a non-empty sample.
pub fn stats(lengths: &[usize]) -> DistributionStats {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = sorted.iter().sum::<usize>() as f64 / sorted.len() as f64;
    let median = sorted[sorted.len() / 2];

    DistributionStats {
        min,
        max,
        mean,
        median,
        mode: mode(&sorted),
        range: max - min,
    }
}

/// Most frequent value; the scan over the sorted sample makes the smallest
/// value win ties.
fn mode(sorted: &[usize]) -> usize {
    let mut best = sorted[0];
    let mut best_count = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_count {
            best_count = j - i;
            best = sorted[i];
        }
        i = j;
    }
    best
}

/// Equal-width histogram. Every value lands in exactly one bin, so the bin
/// counts always sum to the sample size; a zero-width range puts everything
/// in the first bin.
pub fn histogram(values: &[usize], bins: usize) -> Vec<HistogramBin> {
    let min = *values.iter().min().expect("non-empty sample") as f64;
    let max = *values.iter().max().expect("non-empty sample") as f64;
    let bin_size = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = if bin_size > 0.0 {
            (((value as f64 - min) / bin_size) as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            range: format!(
                "{}-{}",
                (min + i as f64 * bin_size).round() as i64,
                (min + (i + 1) as f64 * bin_size).round() as i64
            ),
            count,
        })
        .collect()
}
