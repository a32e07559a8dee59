// Heap sort tracer
// Binary max-heap sort that emits a frame after every swap

use crate::sorters::TracerError;
use crate::trace::{Frame, FrameRecorder, SortAlgorithm, Stage, Trace};

/// Run heap sort over `input`, recording a frame for every swap
///
/// Algorithm:
/// 1. Emit the initial frame with the untouched input
/// 2. Build phase: sift down from the last parent up to the root
/// 3. Extract phase: swap the maximum to the live-region boundary,
///    then sift down over the shrunk region
///
/// The caller's slice is never mutated; the tracer sorts its own copy.
/// Single-element input yields exactly one (initial) frame.
pub fn trace_heap_sort(input: &[i64]) -> Result<Trace, TracerError> {
    if input.is_empty() {
        return Err(TracerError::EmptyInput);
    }

    let mut values = input.to_vec();
    let n = values.len();

    let mut recorder = FrameRecorder::new();
    recorder.record(Frame::initial(&values));

    // Build the heap
    for root in (0..n / 2).rev() {
        sift_down(&mut values, n, root, &mut recorder);
    }

    // Extract elements from the heap
    for boundary in (1..n).rev() {
        values.swap(0, boundary);
        recorder.record(Frame::new(
            &values,
            Stage::Extract,
            (0..=boundary).collect(),
            Some(0),
        ));
        sift_down(&mut values, boundary, 0, &mut recorder);
    }

    let trace = recorder.finalize(SortAlgorithm::HeapSort);
    log::debug!("heap sort traced: {} elements, {} frames", n, trace.len());
    Ok(trace)
}

/// Restore max-heap order rooted at `root` over the live region `[0, region)`
///
/// Ties resolve toward the smaller index: the parent beats either child,
/// the left child beats the right. Each swap emits a heapify frame with
/// the live region highlighted and the displaced parent as the current
/// index. Iterative rather than recursive so deep heaps cannot exhaust
/// the call stack.
fn sift_down(values: &mut [i64], region: usize, root: usize, recorder: &mut FrameRecorder) {
    let mut parent = root;
    loop {
        let left = 2 * parent + 1;
        let right = 2 * parent + 2;
        let mut largest = parent;

        if left < region && values[left] > values[largest] {
            largest = left;
        }
        if right < region && values[right] > values[largest] {
            largest = right;
        }

        if largest == parent {
            return;
        }

        values.swap(parent, largest);
        recorder.record(Frame::new(
            values,
            Stage::Heapify,
            (0..region).collect(),
            Some(parent),
        ));
        parent = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Indices at which two equally long arrays disagree
    fn diff_positions(a: &[i64], b: &[i64]) -> Vec<usize> {
        a.iter()
            .zip(b.iter())
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(trace_heap_sort(&[]).unwrap_err(), TracerError::EmptyInput);
    }

    #[test]
    fn test_single_element_emits_initial_only() {
        let trace = trace_heap_sort(&[5]).unwrap();

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.first().unwrap().stage, Stage::Initial);
        assert_eq!(trace.final_array().unwrap(), &[5][..]);
    }

    #[test]
    fn test_first_frame_is_untouched_input() {
        let input = [4, 10, 3, 5, 1];
        let trace = trace_heap_sort(&input).unwrap();

        let first = trace.first().unwrap();
        assert_eq!(first.stage, Stage::Initial);
        assert_eq!(first.array, input.to_vec());
        assert_eq!(first.highlighted_indices, vec![0, 1, 2, 3, 4]);
        assert!(first.current_index.is_none());
    }

    #[test]
    fn test_final_frame_sorted_ascending() {
        let trace = trace_heap_sort(&[4, 10, 3, 5, 1]).unwrap();
        assert_eq!(trace.final_array().unwrap(), &[1, 3, 4, 5, 10][..]);
    }

    #[test]
    fn test_sorts_duplicates() {
        let trace = trace_heap_sort(&[9, 2, 5, 2, 9, 0]).unwrap();
        assert_eq!(trace.final_array().unwrap(), &[0, 2, 2, 5, 9, 9][..]);
    }

    #[test]
    fn test_build_phase_yields_max_heap_before_extraction() {
        let trace = trace_heap_sort(&[4, 10, 3, 5, 1]).unwrap();

        let first_extract = trace
            .frames()
            .iter()
            .position(|frame| frame.stage == Stage::Extract)
            .unwrap();

        // The frame preceding the first extraction is the finished heap
        let built = &trace.frames()[first_extract - 1];
        assert_eq!(built.array[0], 10);
    }

    #[test]
    fn test_adjacent_frames_differ_by_at_most_one_swap() {
        let trace = trace_heap_sort(&[7, 3, 9, 1, 9, 4, 8, 2]).unwrap();

        for pair in trace.frames().windows(2) {
            let diff = diff_positions(&pair[0].array, &pair[1].array);
            match diff.as_slice() {
                // A swap of equal values leaves the array unchanged
                [] => {}
                [a, b] => {
                    assert_eq!(pair[0].array[*a], pair[1].array[*b]);
                    assert_eq!(pair[0].array[*b], pair[1].array[*a]);
                }
                other => panic!("frame transition changed {} positions", other.len()),
            }
        }
    }

    #[test]
    fn test_frame_width_constant() {
        let input = [12, 7, 31, 2, 18, 5];
        let trace = trace_heap_sort(&input).unwrap();

        for frame in trace.frames() {
            assert_eq!(frame.array.len(), input.len());
        }
    }

    #[test]
    fn test_extract_frames_target_the_root() {
        let trace = trace_heap_sort(&[6, 1, 8, 3, 9]).unwrap();

        let extracts: Vec<_> = trace
            .frames()
            .iter()
            .filter(|frame| frame.stage == Stage::Extract)
            .collect();

        // One extraction per element beyond the first
        assert_eq!(extracts.len(), 4);
        for frame in extracts {
            assert_eq!(frame.current_index, Some(0));
            // Highlight covers the shrunk live region plus the boundary
            let boundary = frame.highlighted_indices.len() - 1;
            assert_eq!(frame.highlighted_indices, (0..=boundary).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_heap_frames_carry_no_buckets() {
        let trace = trace_heap_sort(&[3, 1, 2]).unwrap();

        for frame in trace.frames() {
            assert!(frame.buckets.is_none());
        }
    }
}
