use thiserror::Error;

/// Errors raised while validating a [`crate::Window`] or a
/// [`crate::Searcher::find_repeat_counts`] call before any search is
/// performed.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SearchError {
    /// `b0 > b1`: the window's start comes after its end.
    #[error("start after end")]
    StartAfterEnd,

    /// `b1 > 0`: the window reaches into or past the anchor itself.
    #[error("window before anchor overlapping anchor")]
    WindowOverlapsAnchor,

    /// `L = b1 - b0 < max_distance`: no distance-`k` match is geometrically
    /// possible inside a window shorter than `k`.
    #[error("max distance is larger than search window size")]
    MaxDistanceTooLarge,
}
