//! Dataset builder
//!
//! Collects typed observations and tabular rows, then validates and
//! normalizes them into an immutable [`Dataset`].

use crate::compute::validation::sanitize_observation;
use crate::config::Config;
use crate::dataset::{Dataset, StateVocabulary};
use crate::error::{Result, SwarmError};
use swarmscope_types::observation::{Observation, ObservationRecord};
use swarmscope_types::time::TimePoint;

/// Builder for a [`Dataset`].
///
/// When no explicit timeline is given, the time points are the sorted,
/// deduplicated keys of all observations.
#[derive(Debug)]
pub struct DatasetBuilder<K> {
    config: Config,
    time_points: Option<Vec<K>>,
    observations: Vec<Observation<K>>,
    records: Vec<ObservationRecord<K>>,
}

impl<K: TimePoint> DatasetBuilder<K> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            time_points: None,
            observations: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use an explicit timeline. It must be strictly increasing; this is
    /// checked when the temporal index is built.
    pub fn time_points<I: IntoIterator<Item = K>>(mut self, time_points: I) -> Self {
        self.time_points = Some(time_points.into_iter().collect());
        self
    }

    pub fn observation(mut self, observation: Observation<K>) -> Self {
        self.observations.push(observation);
        self
    }

    pub fn observations<I: IntoIterator<Item = Observation<K>>>(
        mut self,
        observations: I,
    ) -> Self {
        self.observations.extend(observations);
        self
    }

    /// Add a tabular row; its state label is resolved at build time.
    pub fn record(mut self, record: ObservationRecord<K>) -> Self {
        self.records.push(record);
        self
    }

    pub fn records<I: IntoIterator<Item = ObservationRecord<K>>>(mut self, records: I) -> Self {
        self.records.extend(records);
        self
    }

    /// Build the dataset.
    ///
    /// Fails on an invalid configuration, a state outside the vocabulary or
    /// a non-finite value. Out-of-range battery levels and negative
    /// detection radii are clamped.
    pub fn build(self) -> Result<Dataset<K>> {
        self.config.validate().map_err(SwarmError::InvalidInput)?;
        let vocabulary = StateVocabulary::from_config(&self.config)?;

        let mut observations = self.observations;
        if let Some(obs) = observations.iter().find(|o| !vocabulary.contains(o.state)) {
            return Err(SwarmError::UnknownState(format!("#{}", obs.state.0)));
        }

        observations.reserve(self.records.len());
        for record in self.records {
            let state = vocabulary.resolve(&record.state)?;
            observations.push(Observation {
                position: record.position(),
                velocity: record.velocity(),
                orientation: record.orientation(),
                agent: record.drone_id,
                time: record.time_point,
                group: record.swarm_id,
                task: record.task_id,
                state,
                battery: record.battery_percentage,
                detection_radius: record.detection_range,
            });
        }

        let mut clamped = 0usize;
        for obs in observations.iter_mut() {
            if sanitize_observation(obs)? {
                clamped += 1;
            }
        }
        if clamped > 0 {
            log::warn!(
                "Clamped battery level or detection radius of {} observations",
                clamped
            );
        }

        let time_points = match self.time_points {
            Some(time_points) => time_points,
            None => {
                let mut keys: Vec<K> = observations.iter().map(|o| o.time.clone()).collect();
                keys.sort();
                keys.dedup();
                keys
            }
        };

        log::debug!(
            "Built dataset: {} observations over {} time points",
            observations.len(),
            time_points.len()
        );

        Ok(Dataset::from_parts(time_points, observations, vocabulary, self.config))
    }
}

impl<K: TimePoint> Default for DatasetBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
