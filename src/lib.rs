pub mod cli;
pub mod skew;
