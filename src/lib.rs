//! Suffix-array backed exact and approximate substring search over DNA
//! sequences.
//!
//! Build a [`Searcher`] once over a reference text, then:
//!
//! - [`Searcher::find_anchors`] locates every exact occurrence of a pattern
//!   (the `SA-IS`-built [`SuffixArray`] bounds the matching interval with two
//!   binary searches), and
//! - [`Searcher::find_repeat_counts`] counts, for every such anchor, how many
//!   positions in a target text match the window just before it at each
//!   Hamming distance up to a caller-chosen bound, substituting only within
//!   the `{A, C, G, T}` alphabet.
//!
//! The suffix array construction is based on SAIS as described in
//! [Two Efficient Algorithms for Linear Time Suffix Array
//! Construction](https://ieeexplore.ieee.org/document/5582081).

mod counter;
mod error;
mod neighbors;
mod sais;
mod searcher;
mod suffix_array;
mod window;

pub use error::SearchError;
pub use searcher::{Searcher, DEFAULT_MAX_DISTANCE};
pub use suffix_array::SuffixArray;
pub use window::Window;
