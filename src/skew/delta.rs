use crate::cli::Skew;

/// Contribution of a single base to the cumulative GC skew.
///
/// `G` counts +1, `C` counts -1, and every other byte (A, T, N, IUPAC
/// codes, whitespace, ...) is neutral. Comparison is case-insensitive.
#[inline]
pub fn delta(base: u8) -> Skew {
    match base.to_ascii_uppercase() {
        b'G' => 1,
        b'C' => -1,
        _ => 0,
    }
}
