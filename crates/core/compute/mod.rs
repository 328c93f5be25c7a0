//! Query processing: temporal indexing, filtering, statistics and validation.

pub mod filter;
pub mod stats;
pub mod temporal;
pub mod validation;
