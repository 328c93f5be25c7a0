//! The immutable observation dataset.
//!
//! A [`Dataset`] is built once per session by [`DatasetBuilder`] and never
//! mutated afterwards. Its [`Metadata`] is derived through the statistics
//! aggregator, so it always equals a fresh recomputation.
//!
//! [`DatasetBuilder`]: crate::builder::DatasetBuilder

use crate::builder::DatasetBuilder;
use crate::compute::stats::summarize;
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use swarmscope_types::bbox::BoundingBox3D;
use swarmscope_types::ident::{GroupId, StateId, TaskId};
use swarmscope_types::observation::{Observation, ObservationRecord};
use swarmscope_types::stats::Histogram;
use swarmscope_types::time::TimePoint;

mod vocabulary;

pub use vocabulary::StateVocabulary;

/// Precomputed dataset-wide counts and bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    /// Distinct agents across all time points
    pub total_agents: usize,
    pub total_time_points: usize,
    /// Observations per assigned group
    pub group_counts: Histogram<GroupId>,
    /// Observations per assigned task
    pub task_counts: Histogram<TaskId>,
    pub state_counts: Histogram<StateId>,
    /// Bounds of all positions, expanded by the configured margin;
    /// `None` when there are no observations
    pub bounding_box: Option<BoundingBox3D>,
}

impl Metadata {
    pub fn compute<K>(
        observations: &[Observation<K>],
        total_time_points: usize,
        margin: f64,
    ) -> Self {
        let summary = summarize(observations);
        let bounding_box = BoundingBox3D::from_points(observations.iter().map(|o| &o.position))
            .map(|bbox| bbox.expand(margin));

        Self {
            total_agents: summary.distinct_agents,
            total_time_points,
            group_counts: summary.group_histogram,
            task_counts: summary.task_histogram,
            state_counts: summary.state_histogram,
            bounding_box,
        }
    }
}

/// Fully materialized per-agent, per-time-point observations.
#[derive(Debug, Clone)]
pub struct Dataset<K> {
    time_points: Vec<K>,
    observations: Vec<Observation<K>>,
    vocabulary: StateVocabulary,
    config: Config,
    metadata: Metadata,
}

impl<K> Dataset<K> {
    pub(crate) fn from_parts(
        time_points: Vec<K>,
        observations: Vec<Observation<K>>,
        vocabulary: StateVocabulary,
        config: Config,
    ) -> Self {
        let metadata = Metadata::compute(&observations, time_points.len(), config.bounds_margin);
        Self {
            time_points,
            observations,
            vocabulary,
            config,
            metadata,
        }
    }

    /// Time points in ascending order.
    pub fn time_points(&self) -> &[K] {
        &self.time_points
    }

    pub fn observations(&self) -> &[Observation<K>] {
        &self.observations
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn vocabulary(&self) -> &StateVocabulary {
        &self.vocabulary
    }

    /// The configuration the dataset was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Display label of a state id.
    pub fn state_label(&self, state: StateId) -> Option<&str> {
        self.vocabulary.label(state)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Metadata computed from scratch over the current observations.
    pub fn recompute_metadata(&self) -> Metadata {
        Metadata::compute(
            &self.observations,
            self.time_points.len(),
            self.config.bounds_margin,
        )
    }

    pub fn metadata_is_consistent(&self) -> bool {
        self.recompute_metadata() == self.metadata
    }
}

impl<K: TimePoint> Dataset<K> {
    pub fn builder() -> DatasetBuilder<K> {
        DatasetBuilder::new()
    }
}

impl<K: TimePoint + DeserializeOwned> Dataset<K> {
    /// Build a dataset from a JSON array of tabular rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swarmscope::{Config, Dataset};
    /// use swarmscope_types::time::TimeLabel;
    ///
    /// let json = r#"[{
    ///     "DroneID": 1, "TimePoint": "TP1", "SwarmID": -1, "TaskID": -1,
    ///     "State": "Taking Off",
    ///     "PositionX": 0, "PositionY": 0, "PositionZ": 0,
    ///     "VelocityX": 2.1, "VelocityY": 2.3, "VelocityZ": 1.04,
    ///     "Pitch": 22.1, "Roll": 2.3, "Yaw": 48.2,
    ///     "BatteryPercentage": 98, "DetectionRange": 50
    /// }]"#;
    ///
    /// let dataset: Dataset<TimeLabel> = Dataset::from_json_records(json, Config::default())?;
    /// assert_eq!(dataset.metadata().total_agents, 1);
    /// # Ok::<(), swarmscope::SwarmError>(())
    /// ```
    pub fn from_json_records(json: &str, config: Config) -> Result<Self> {
        let records: Vec<ObservationRecord<K>> = serde_json::from_str(json)?;
        DatasetBuilder::new()
            .config(config)
            .records(records)
            .build()
    }
}
