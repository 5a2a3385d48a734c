//! DNA-alphabet neighborhood generation for the Window-Counter.
//!
//! Substitutions are always drawn from `{A, C, G, T}` only. A window
//! position whose own byte is already one of those four bases has three
//! substitution choices (the other three bases); a position whose byte is
//! not a DNA base (e.g. `N`) still varies, but every one of the four bases
//! counts as a substitution there, since none of them equals the original
//! byte. Either way, a position that is *not* chosen to vary keeps the
//! window's exact original byte, DNA or not.

use itertools::Itertools;

/// The DNA alphabet substitutions are restricted to.
pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// The bases a given window byte may be substituted to: the other three
/// DNA bases if the byte is itself one of them, or all four if it is not.
fn substitution_choices(byte: u8) -> Vec<u8> {
    DNA_BASES.iter().copied().filter(|&base| base != byte).collect()
}

/// Enumerate every distinct string at Hamming distance exactly `distance`
/// from `window`, varying `distance` positions to a different DNA base and
/// holding the rest fixed at the window's own bytes.
///
/// At `distance == 0` this yields `window` itself, unconditionally.
pub fn neighborhood(window: &[u8], distance: usize) -> Vec<Vec<u8>> {
    if distance == 0 {
        return vec![window.to_vec()];
    }
    if distance > window.len() {
        return Vec::new();
    }

    let mut result = Vec::new();
    for combo in (0..window.len()).combinations(distance) {
        let choices: Vec<Vec<u8>> = combo.iter().map(|&pos| substitution_choices(window[pos])).collect();
        for picks in choices
            .iter()
            .map(|subs| subs.iter().copied())
            .multi_cartesian_product()
        {
            let mut candidate = window.to_vec();
            for (&pos, base) in combo.iter().zip(picks.into_iter()) {
                candidate[pos] = base;
            }
            result.push(candidate);
        }
    }
    result
}
