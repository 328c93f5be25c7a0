use crate::ident::{GroupId, StateId, TaskId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Sparse occurrence counts per category.
///
/// Categories with zero occurrences are never stored. Iteration is in key
/// order, and the serialized form is a list of `[category, count]` pairs so
/// that non-string keys survive JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<T: Ord>(BTreeMap<T, usize>);

impl<T: Ord> Histogram<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn increment(&mut self, category: T) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    /// Count for a category; zero when absent.
    pub fn get(&self, category: &T) -> usize {
        self.0.get(category).copied().unwrap_or(0)
    }

    /// Number of distinct categories present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &T> {
        self.0.keys()
    }
}

impl<T: Ord> Default for Histogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Histogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for category in iter {
            histogram.increment(category);
        }
        histogram
    }
}

impl<T: Ord + Serialize> Serialize for Histogram<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for Histogram<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(T, usize)>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (category, count) in pairs {
            if count > 0 {
                *map.entry(category).or_insert(0) += count;
            }
        }
        Ok(Self(map))
    }
}

/// Coarse health band of a battery level, as shown on the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryBand {
    /// Above 50%
    Healthy,
    /// Above 20%, up to 50%
    Low,
    /// 20% or less
    Critical,
}

impl BatteryBand {
    pub fn classify(level: f64) -> Self {
        if level > 50.0 {
            BatteryBand::Healthy
        } else if level > 20.0 {
            BatteryBand::Low
        } else {
            BatteryBand::Critical
        }
    }
}

/// Summary of an observation subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of observations summarized
    pub count: usize,
    /// Number of distinct agents among them
    pub distinct_agents: usize,
    /// Mean battery level; 0 for an empty subset
    pub average_battery: f64,
    /// Mean of per-observation speed; 0 for an empty subset
    pub average_speed: f64,
    /// Mean detection radius; 0 for an empty subset
    pub average_detection_radius: f64,
    /// Assigned groups only
    pub group_histogram: Histogram<GroupId>,
    /// Assigned tasks only
    pub task_histogram: Histogram<TaskId>,
    pub state_histogram: Histogram<StateId>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of distinct assigned groups present.
    pub fn active_groups(&self) -> usize {
        self.group_histogram.len()
    }

    /// Number of distinct assigned tasks present.
    pub fn active_tasks(&self) -> usize {
        self.task_histogram.len()
    }

    pub fn battery_band(&self) -> BatteryBand {
        BatteryBand::classify(self.average_battery)
    }
}
