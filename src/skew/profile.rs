use crate::cli::Skew;
use crate::skew::delta::delta;
use anyhow::{bail, Result};

/// Build the cumulative G-C skew over a byte slice
/// skew[i] = #G - #C in seq[0..i], so skew.len() == seq.len()+1
pub fn compute_skew(seq: &[u8]) -> Vec<Skew> {
    let mut skew = Vec::with_capacity(seq.len() + 1);
    let mut acc: Skew = 0;
    skew.push(acc);
    for &b in seq {
        acc += delta(b);
        skew.push(acc);
    }
    skew
}

/// Indices (ascending) of every position holding the global minimum.
///
/// All tied positions are returned, not only the first one, since each
/// of them is an origin-of-replication candidate.
///
/// Errors on an empty slice. `compute_skew` never produces one.
pub fn min_positions(skew: &[Skew]) -> Result<Vec<usize>> {
    extreme_positions(skew, |v, best| v < best)
}

/// Indices (ascending) of every position holding the global maximum.
pub fn max_positions(skew: &[Skew]) -> Result<Vec<usize>> {
    extreme_positions(skew, |v, best| v > best)
}

/// Single fused pass: `beats(v, best)` tells whether `v` replaces the
/// current extreme. Equal values are collected alongside it.
fn extreme_positions(skew: &[Skew], beats: impl Fn(Skew, Skew) -> bool) -> Result<Vec<usize>> {
    let Some(&first) = skew.first() else {
        bail!("no skew values");
    };
    let mut best = first;
    let mut positions = vec![0];
    for (i, &v) in skew.iter().enumerate().skip(1) {
        if beats(v, best) {
            best = v;
            positions.clear();
            positions.push(i);
        } else if v == best {
            positions.push(i);
        }
    }
    Ok(positions)
}

/// Summary of one skew profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkewSummary {
    /// Sequence length (N); the profile holds N+1 values
    pub length: usize,
    pub final_skew: Skew,
    pub min_skew: Skew,
    pub min_positions: Vec<usize>,
    pub max_skew: Skew,
    pub max_positions: Vec<usize>,
}

impl SkewSummary {
    pub fn from_skew(skew: &[Skew]) -> Result<Self> {
        let min_positions = min_positions(skew)?;
        let max_positions = max_positions(skew)?;
        Ok(SkewSummary {
            length: skew.len() - 1,
            final_skew: skew[skew.len() - 1],
            min_skew: skew[min_positions[0]],
            min_positions,
            max_skew: skew[max_positions[0]],
            max_positions,
        })
    }
}
