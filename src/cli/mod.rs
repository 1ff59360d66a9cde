pub mod counters;
pub mod io;
pub mod opts;
pub mod records;

/// Signed integer type for cumulative skew values
pub type Skew = i64;
