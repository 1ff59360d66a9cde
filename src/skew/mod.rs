pub mod delta;
pub mod fasta;
pub mod profile;
pub mod report;
pub mod write;
