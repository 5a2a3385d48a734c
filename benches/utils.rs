#![allow(dead_code)]

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// A random DNA sequence of length `len` over `{A, C, G, T}`.
pub fn random_dna(len: usize) -> Vec<u8> {
    let uni = Uniform::from(0..BASES.len());
    let mut rng = thread_rng();
    (0..len).map(|_| BASES[rng.sample(uni)]).collect()
}

/// A random contiguous slice of `text`, `len` bytes long.
pub fn random_window(text: &[u8], len: usize) -> &[u8] {
    if len >= text.len() {
        return text;
    }
    let uni = Uniform::from(0..=text.len() - len);
    let mut rng = thread_rng();
    let start = rng.sample(uni);
    &text[start..start + len]
}
