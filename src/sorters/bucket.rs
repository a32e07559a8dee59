// Bucket sort tracer
// Distributes values into normalized buckets, sorts each, and merges,
// emitting a frame after every distribution and combine step

use serde::{Deserialize, Serialize};

use crate::sorters::TracerError;
use crate::trace::{Frame, FrameRecorder, SortAlgorithm, Stage, Trace};

/// Filler for the unmerged tail of combine-frame arrays
///
/// Keeps frame width constant across the trace. Not sorted data: the
/// real values of a combine frame are its highlighted prefix.
pub const COMBINE_PADDING: i64 = 0;

/// Settings for bucket sort tracing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Number of buckets to distribute into (must be at least 1)
    pub bucket_count: usize,
}

impl Default for BucketConfig {
    fn default() -> Self {
        BucketConfig { bucket_count: 5 }
    }
}

/// Run bucket sort over `input`, recording every distribution and
/// combine step
///
/// Algorithm:
/// 1. Emit the initial frame: untouched input, all buckets empty
/// 2. Route each value into `min(floor(normalized * k), k - 1)` where
///    `normalized` maps the value range onto [0, 1]
/// 3. Sort each bucket and append it to the merged output, padding the
///    combine-frame array with [`COMBINE_PADDING`] up to input width
///
/// Distribution never reorders the array, so distribute frames carry
/// the original input. A degenerate range (all values equal) routes
/// everything to bucket 0; empty buckets are legal. The caller's slice
/// is never mutated.
pub fn trace_bucket_sort(input: &[i64], config: &BucketConfig) -> Result<Trace, TracerError> {
    if input.is_empty() {
        return Err(TracerError::EmptyInput);
    }
    if config.bucket_count == 0 {
        return Err(TracerError::InvalidBucketCount(config.bucket_count));
    }

    let n = input.len();
    let k = config.bucket_count;
    let (min_val, max_val) = input
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); k];

    let mut recorder = FrameRecorder::new();
    recorder.record(Frame::initial(input).with_buckets(&buckets));

    // Distribute values into buckets in input order
    for (i, &value) in input.iter().enumerate() {
        let index = bucket_index(value, min_val, max_val, k);
        buckets[index].push(value);
        recorder.record(
            Frame::new(input, Stage::Distribute, (0..=i).collect(), Some(i))
                .with_buckets(&buckets),
        );
    }

    // Sort each bucket and merge in bucket order
    let mut merged: Vec<i64> = Vec::with_capacity(n);
    for b in 0..k {
        buckets[b].sort();
        merged.extend_from_slice(&buckets[b]);

        let mut snapshot = merged.clone();
        snapshot.resize(n, COMBINE_PADDING);
        recorder.record(
            Frame::new(
                &snapshot,
                Stage::Combine,
                (0..merged.len()).collect(),
                merged.len().checked_sub(1),
            )
            .with_buckets(&buckets),
        );
    }

    let trace = recorder.finalize(SortAlgorithm::BucketSort);
    log::debug!(
        "bucket sort traced: {} elements, {} buckets, {} frames",
        n,
        k,
        trace.len()
    );
    Ok(trace)
}

/// Map a value onto its bucket via range normalization
///
/// A degenerate range (all values equal) routes everything to bucket 0.
fn bucket_index(value: i64, min_val: i64, max_val: i64, bucket_count: usize) -> usize {
    if max_val == min_val {
        return 0;
    }
    let normalized = (value - min_val) as f64 / (max_val - min_val) as f64;
    ((normalized * bucket_count as f64) as usize).min(bucket_count - 1)
}
