//! Temporal indexing: time point → observations and agent → trajectory.

mod index;

pub use index::TemporalIndex;
