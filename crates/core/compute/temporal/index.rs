use crate::dataset::Dataset;
use crate::error::{Result, SwarmError};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use swarmscope_types::ident::AgentId;
use swarmscope_types::observation::Observation;
use swarmscope_types::time::TimePoint;
use swarmscope_types::trajectory::Trajectory;

/// Time point → observations and agent → trajectory lookups over a shared
/// [`Dataset`].
///
/// Built once in a single pass: observations are counting-sorted by time
/// ordinal, then agent buckets are filled in time order, so trajectories come
/// out sorted without a per-agent sort. Lookups never rescan the dataset.
#[derive(Debug)]
pub struct TemporalIndex<K> {
    dataset: Arc<Dataset<K>>,
    ordinals: FxHashMap<K, usize>,
    /// Time ordinal of each observation, parallel to `dataset.observations()`
    obs_ordinals: Vec<u32>,
    /// Observation indices grouped by ordinal
    frames: Vec<u32>,
    /// `frames[frame_offsets[i]..frame_offsets[i + 1]]` is frame `i`
    frame_offsets: Vec<usize>,
    trajectories: FxHashMap<AgentId, Vec<u32>>,
}

impl<K: TimePoint> TemporalIndex<K> {
    /// Build the index, failing with [`SwarmError::MalformedDataset`] when the
    /// timeline is not strictly increasing, an observation references a time
    /// point outside the timeline, or an agent has two observations at the
    /// same time point.
    pub fn build(dataset: Arc<Dataset<K>>) -> Result<Self> {
        let time_points = dataset.time_points();
        let observations = dataset.observations();

        if let Some(pair) = time_points.windows(2).find(|w| w[0] >= w[1]) {
            return Err(SwarmError::malformed(format!(
                "Time points must be strictly increasing, found {:?} before {:?}",
                pair[0], pair[1]
            )));
        }
        if observations.len() > u32::MAX as usize {
            return Err(SwarmError::InvalidInput(format!(
                "Dataset has {} observations, at most {} are supported",
                observations.len(),
                u32::MAX
            )));
        }

        let ordinals: FxHashMap<K, usize> = time_points
            .iter()
            .enumerate()
            .map(|(ordinal, key)| (key.clone(), ordinal))
            .collect();

        let mut obs_ordinals = Vec::with_capacity(observations.len());
        let mut frame_offsets = vec![0usize; time_points.len() + 1];
        for obs in observations {
            let ordinal = *ordinals.get(&obs.time).ok_or_else(|| {
                SwarmError::malformed(format!(
                    "Observation of agent {} references unknown time point {:?}",
                    obs.agent, obs.time
                ))
            })?;
            obs_ordinals.push(ordinal as u32);
            frame_offsets[ordinal + 1] += 1;
        }
        for i in 1..frame_offsets.len() {
            frame_offsets[i] += frame_offsets[i - 1];
        }

        let mut cursor = frame_offsets.clone();
        let mut frames = vec![0u32; observations.len()];
        for (idx, &ordinal) in obs_ordinals.iter().enumerate() {
            let slot = &mut cursor[ordinal as usize];
            frames[*slot] = idx as u32;
            *slot += 1;
        }

        let mut trajectories: FxHashMap<AgentId, Vec<u32>> = FxHashMap::default();
        for &idx in &frames {
            let obs = &observations[idx as usize];
            let bucket = trajectories.entry(obs.agent.clone()).or_default();
            if let Some(&last) = bucket.last()
                && obs_ordinals[last as usize] == obs_ordinals[idx as usize]
            {
                return Err(SwarmError::malformed(format!(
                    "Agent {} has more than one observation at {:?}",
                    obs.agent, obs.time
                )));
            }
            bucket.push(idx);
        }

        log::debug!(
            "Built temporal index: {} time points, {} agents, {} observations",
            time_points.len(),
            trajectories.len(),
            observations.len()
        );

        Ok(Self {
            dataset,
            ordinals,
            obs_ordinals,
            frames,
            frame_offsets,
            trajectories,
        })
    }

    /// Take ownership of a dataset and index it.
    pub fn from_dataset(dataset: Dataset<K>) -> Result<Self> {
        Self::build(Arc::new(dataset))
    }

    pub fn dataset(&self) -> &Arc<Dataset<K>> {
        &self.dataset
    }

    pub fn time_points(&self) -> &[K] {
        self.dataset.time_points()
    }

    /// Number of time points.
    pub fn len(&self) -> usize {
        self.frame_offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ordinal_of(&self, key: &K) -> Option<usize> {
        self.ordinals.get(key).copied()
    }

    pub fn time_at(&self, ordinal: usize) -> Option<&K> {
        self.time_points().get(ordinal)
    }

    /// Ordinal of the last time point `<= key`, clamped into the timeline.
    ///
    /// Keys before the first time point map to 0, keys after the last map to
    /// the last ordinal. An empty timeline always gives 0.
    pub fn seek_ordinal(&self, key: &K) -> usize {
        if let Some(ordinal) = self.ordinal_of(key) {
            return ordinal;
        }
        self.time_points()
            .partition_point(|t| t <= key)
            .saturating_sub(1)
    }

    /// Observations at a time ordinal, in dataset order. Empty when out of
    /// range.
    pub fn frame(&self, ordinal: usize) -> Vec<&Observation<K>> {
        if ordinal >= self.len() {
            return Vec::new();
        }
        let range = self.frame_offsets[ordinal]..self.frame_offsets[ordinal + 1];
        self.resolve(&self.frames[range])
    }

    /// Observations whose key equals `key` exactly. Empty for a key with no
    /// observations or outside the timeline.
    pub fn observations_at(&self, key: &K) -> Vec<&Observation<K>> {
        match self.ordinal_of(key) {
            Some(ordinal) => self.frame(ordinal),
            None => Vec::new(),
        }
    }

    /// The agent's observations in ascending time order; empty for an
    /// unknown agent.
    pub fn trajectory_of(&self, agent: &AgentId) -> Trajectory<'_, K> {
        self.trajectories
            .get(agent)
            .map(|indices| self.resolve(indices))
            .unwrap_or_default()
    }

    /// The single observation of `agent` at `key`, if any.
    pub fn observation_of(&self, agent: &AgentId, key: &K) -> Option<&Observation<K>> {
        let ordinal = self.ordinal_of(key)? as u32;
        let indices = self.trajectories.get(agent)?;
        let pos = indices
            .binary_search_by_key(&ordinal, |&idx| self.obs_ordinals[idx as usize])
            .ok()?;
        Some(&self.dataset.observations()[indices[pos] as usize])
    }

    /// All agents, sorted.
    pub fn agents(&self) -> Vec<&AgentId> {
        let mut agents: Vec<&AgentId> = self.trajectories.keys().collect();
        agents.sort();
        agents
    }

    pub fn agent_count(&self) -> usize {
        self.trajectories.len()
    }

    fn resolve(&self, indices: &[u32]) -> Vec<&Observation<K>> {
        let observations = self.dataset.observations();
        indices
            .iter()
            .map(|&idx| &observations[idx as usize])
            .collect()
    }
}
