use crate::error::SearchError;

/// A window specification relative to an anchor: the byte range
/// `[anchor + b0, anchor + b1)` examined for approximate matches.
///
/// `b0 <= b1 <= 0`, so the window always lies strictly before (or touches
/// the start of) the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    b0: i64,
    b1: i64,
}

impl Window {
    /// Validate and construct a window from its `(b0, b1)` endpoints.
    pub fn new(b0: i64, b1: i64) -> Result<Self, SearchError> {
        if b0 > b1 {
            return Err(SearchError::StartAfterEnd);
        }
        if b1 > 0 {
            return Err(SearchError::WindowOverlapsAnchor);
        }
        Ok(Window { b0, b1 })
    }

    #[inline]
    pub fn b0(&self) -> i64 {
        self.b0
    }

    #[inline]
    pub fn b1(&self) -> i64 {
        self.b1
    }

    /// Window length `L = b1 - b0`.
    #[inline]
    pub fn len(&self) -> i64 {
        self.b1 - self.b0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_windows() {
        let w = Window::new(-10, -5).unwrap();
        assert_eq!(w.b0(), -10);
        assert_eq!(w.b1(), -5);
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn rejects_inverted_window() {
        assert_eq!(Window::new(-1, -5), Err(SearchError::StartAfterEnd));
    }

    #[test]
    fn rejects_window_overlapping_anchor() {
        assert_eq!(Window::new(-1, 1), Err(SearchError::WindowOverlapsAnchor));
    }

    #[test]
    fn accepts_zero_length_window_touching_anchor() {
        assert!(Window::new(0, 0).is_ok());
    }
}
