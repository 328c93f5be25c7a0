use crate::observation::Observation;

/// One agent's observations in ascending time order, borrowed from the
/// dataset that owns them.
pub type Trajectory<'a, K> = Vec<&'a Observation<K>>;
