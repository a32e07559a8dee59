// Trace model
// Frame snapshots, the recorder, and finalized run traces

pub mod frame;
pub mod recorder;

pub use frame::{Frame, SortAlgorithm, Stage};
pub use recorder::{FrameRecorder, Trace};
