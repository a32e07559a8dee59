// Frame model
// Immutable per-step snapshots of a sort run, consumed by the rendering layer

use serde::{Deserialize, Serialize};

/// Algorithm that produced a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Binary max-heap sort
    HeapSort,

    /// Normalized-range bucket sort
    BucketSort,
}

impl SortAlgorithm {
    /// Human-readable name for titles and UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::HeapSort => "Heap Sort",
            SortAlgorithm::BucketSort => "Bucket Sort",
        }
    }
}

/// Phase of the sort a frame was captured in
///
/// Serialized as snake_case strings (`"initial"`, `"heapify"`, ...);
/// renderers key their styling off these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Untouched input, before any mutation
    Initial,

    /// Sift-down swap while building or restoring the heap
    Heapify,

    /// Maximum moved into its final position at the live-region boundary
    Extract,

    /// One value routed into its bucket (bucket sort)
    Distribute,

    /// One sorted bucket appended to the merged output (bucket sort)
    Combine,
}

/// An immutable snapshot of the working sequence at one discrete step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Full copy of the working sequence at this instant
    /// Owned by the frame; later mutation of the live sequence cannot
    /// reach back into it
    pub array: Vec<i64>,

    /// Phase that emitted this frame
    pub stage: Stage,

    /// Indices relevant to this step: the live heap region, the
    /// distributed prefix, or the merged prefix
    pub highlighted_indices: Vec<usize>,

    /// Element most recently acted upon (swap root, routed value,
    /// last merged value); absent on initial frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,

    /// Snapshot of every bucket's contents (bucket sort only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<Vec<i64>>>,
}

impl Frame {
    /// Create a frame snapshotting `values` at the current step
    pub fn new(
        values: &[i64],
        stage: Stage,
        highlighted_indices: Vec<usize>,
        current_index: Option<usize>,
    ) -> Self {
        Frame {
            array: values.to_vec(),
            stage,
            highlighted_indices,
            current_index,
            buckets: None,
        }
    }

    /// Create the first frame of a run: the untouched input with every
    /// index highlighted and no current index
    pub fn initial(values: &[i64]) -> Self {
        Frame::new(values, Stage::Initial, (0..values.len()).collect(), None)
    }

    /// Attach a deep copy of the bucket contents at this step
    pub fn with_buckets(mut self, buckets: &[Vec<i64>]) -> Self {
        self.buckets = Some(buckets.to_vec());
        self
    }
}
