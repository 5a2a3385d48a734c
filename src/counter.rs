//! The Window-Counter: for each anchor, extract the window before it in the
//! reference text, enumerate its DNA neighborhood at every distance
//! `0..=max_distance`, and tally occurrences of each neighbor in the target
//! text. Anchors are independent, so they are processed by a work-stealing
//! thread pool (`rayon`), one worker per anchor.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::neighbors::neighborhood;
use crate::suffix_array::SuffixArray;

/// Count, for every anchor in `anchors`, the Hamming-distance histogram of
/// its window against `target_index` (an index over `target`).
pub fn count_repeats(
    reference: &[u8],
    anchors: &[u32],
    b0: i64,
    b1: i64,
    max_distance: usize,
    target_index: &SuffixArray,
) -> HashMap<u32, Vec<u32>> {
    anchors
        .par_iter()
        .map(|&anchor| {
            let histogram = count_one_anchor(reference, anchor, b0, b1, max_distance, target_index);
            (anchor, histogram)
        })
        .collect()
}

fn count_one_anchor(
    reference: &[u8],
    anchor: u32,
    b0: i64,
    b1: i64,
    max_distance: usize,
    target_index: &SuffixArray,
) -> Vec<u32> {
    let mut histogram = vec![0u32; max_distance + 1];

    let start = anchor as i64 + b0;
    let end = anchor as i64 + b1;
    if start < 0 || end < start || end as usize > reference.len() {
        return histogram;
    }

    let window = &reference[start as usize..end as usize];

    for (distance, count) in histogram.iter_mut().enumerate() {
        let mut total = 0u32;
        for neighbor in neighborhood(window, distance) {
            total += target_index.locate(&neighbor).len() as u32;
        }
        *count = total;
    }

    histogram
}
