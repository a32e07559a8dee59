// Sorting tracers
// Heap sort and bucket sort instrumented to emit per-step frames

pub mod bucket;
pub mod heap;

pub use bucket::{trace_bucket_sort, BucketConfig, COMBINE_PADDING};
pub use heap::trace_heap_sort;

use thiserror::Error;

/// Precondition violations, raised before any frame is emitted
///
/// Either a complete valid trace is produced or no trace at all; the
/// tracers never return partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TracerError {
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
}
