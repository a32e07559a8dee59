// Frame recording and finalized traces
// Append-only accumulation during a run; frozen read-only at finalize

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::frame::{Frame, SortAlgorithm};

/// A finished, read-only trace of one sort run
///
/// Produced by [`FrameRecorder::finalize`]; the frame sequence cannot be
/// modified afterwards. Plain owned data, safe to share across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    /// Unique identifier for this run
    pub run_id: Uuid,

    /// Algorithm that produced the trace
    pub algorithm: SortAlgorithm,

    /// When the run completed
    pub created_at: DateTime<Utc>,

    /// Frames in emission order
    frames: Vec<Frame>,
}

impl Trace {
    /// Frames in emission order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The initial frame, if any frames were recorded
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// The last recorded frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Array of the last frame: the fully sorted output of a completed run
    pub fn final_array(&self) -> Option<&[i64]> {
        self.frames.last().map(|frame| frame.array.as_slice())
    }

    /// Consume the trace, yielding the owned frame sequence
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// Append-only frame accumulator; one recorder per run
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        FrameRecorder { frames: Vec::new() }
    }

    /// Append a frame to the trace
    ///
    /// Frame content is the emitting tracer's responsibility; the
    /// recorder imposes no constraints of its own.
    pub fn record(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Number of frames recorded so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Freeze the recorded frames into an immutable [`Trace`], stamped
    /// with a fresh run id and completion timestamp
    pub fn finalize(self, algorithm: SortAlgorithm) -> Trace {
        Trace {
            run_id: Uuid::new_v4(),
            algorithm,
            created_at: Utc::now(),
            frames: self.frames,
        }
    }
}
