// Sorttrace - step-by-step sorting trace engine
// Module declarations

pub mod input;
pub mod sorters;
pub mod trace;

pub use input::{generate_values, generate_values_with, InputConfig};
pub use sorters::{trace_bucket_sort, trace_heap_sort, BucketConfig, TracerError, COMBINE_PADDING};
pub use trace::{Frame, FrameRecorder, SortAlgorithm, Stage, Trace};
