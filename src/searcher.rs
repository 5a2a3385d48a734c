use std::collections::HashMap;

use crate::counter;
use crate::error::SearchError;
use crate::suffix_array::SuffixArray;
use crate::window::Window;

/// Default maximum Hamming distance used when a caller does not specify
/// one, matching the reference implementation's default.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Owns a reference text and its suffix array, and exposes the two
/// operations the rest of the system is built around: locating exact
/// anchors, and counting approximate matches in a window before each
/// anchor.
///
/// `Searcher` holds no state beyond the text and its index; both
/// [`Searcher::find_anchors`] and [`Searcher::find_repeat_counts`] are safe
/// to call concurrently from multiple threads on a shared `&Searcher`.
pub struct Searcher<'s> {
    text: &'s [u8],
    index: SuffixArray<'s>,
}

impl<'s> Searcher<'s> {
    /// Build the suffix array index over `text`.
    pub fn new(text: &'s [u8]) -> Self {
        Searcher {
            text,
            index: SuffixArray::new(text),
        }
    }

    /// The indexed text.
    pub fn text(&self) -> &'s [u8] {
        self.text
    }

    /// Every start position of `pattern` in the indexed text.
    pub fn find_anchors(&self, pattern: &[u8]) -> Vec<u32> {
        self.index.locate(pattern).to_vec()
    }

    /// For every occurrence of `anchor` in the indexed text, count how many
    /// positions in `other_text` (default: the indexed text itself) match
    /// the window `[position + window.0, position + window.1)` at Hamming
    /// distance `0, 1, …, max_distance`.
    ///
    /// The window tuple and `max_distance` are validated before any search
    /// is performed, so a rejected call performs no work and mutates
    /// nothing.
    pub fn find_repeat_counts(
        &self,
        anchor: &[u8],
        window: (i64, i64),
        max_distance: usize,
        other_text: Option<&'s [u8]>,
    ) -> Result<HashMap<u32, Vec<u32>>, SearchError> {
        let window = Window::new(window.0, window.1)?;
        if window.len() < max_distance as i64 {
            return Err(SearchError::MaxDistanceTooLarge);
        }

        let target = other_text.unwrap_or(self.text);
        let anchors = self.find_anchors(anchor);

        let histograms = if same_slice(target, self.text) {
            counter::count_repeats(self.text, &anchors, window.b0(), window.b1(), max_distance, &self.index)
        } else {
            let target_index = SuffixArray::new(target);
            counter::count_repeats(
                self.text,
                &anchors,
                window.b0(),
                window.b1(),
                max_distance,
                &target_index,
            )
        };

        Ok(histograms)
    }
}

fn same_slice(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.as_ptr() == b.as_ptr()
}
