//! Multi-axis observation filtering.
//!
//! A [`FilterSpec`] is a conjunction of whitelists (group, task, state) and a
//! battery range. An empty whitelist matches nothing on its axis; "select
//! all" is spelled out with [`FilterSpec::select_all`].

use crate::compute::validation::validate_battery_range;
use crate::dataset::Dataset;
use crate::error::{Result, SwarmError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use swarmscope_types::ident::{GroupId, StateId, TaskId};
use swarmscope_types::observation::{BATTERY_MAX, BATTERY_MIN, Observation};

/// Inclusive battery bounds, `0 <= lo <= hi <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct BatteryRange {
    lo: f64,
    hi: f64,
}

impl BatteryRange {
    pub const FULL: BatteryRange = BatteryRange {
        lo: BATTERY_MIN,
        hi: BATTERY_MAX,
    };

    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        validate_battery_range(lo, hi)?;
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, level: f64) -> bool {
        self.lo <= level && level <= self.hi
    }
}

impl Default for BatteryRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<(f64, f64)> for BatteryRange {
    type Error = SwarmError;

    fn try_from((lo, hi): (f64, f64)) -> Result<Self> {
        Self::new(lo, hi)
    }
}

impl From<BatteryRange> for (f64, f64) {
    fn from(range: BatteryRange) -> Self {
        (range.lo, range.hi)
    }
}

/// Predicate set applied to candidate observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub groups: FxHashSet<GroupId>,
    pub tasks: FxHashSet<TaskId>,
    pub states: FxHashSet<StateId>,
    pub battery: BatteryRange,
}

impl FilterSpec {
    pub fn new<G, T, S>(groups: G, tasks: T, states: S, battery: BatteryRange) -> Self
    where
        G: IntoIterator<Item = GroupId>,
        T: IntoIterator<Item = TaskId>,
        S: IntoIterator<Item = StateId>,
    {
        Self {
            groups: groups.into_iter().collect(),
            tasks: tasks.into_iter().collect(),
            states: states.into_iter().collect(),
            battery,
        }
    }

    /// Every group, task and state the dataset knows about (unassigned
    /// included), with the full battery range.
    pub fn select_all<K>(dataset: &Dataset<K>) -> Self {
        let metadata = dataset.metadata();
        let groups = metadata
            .group_counts
            .categories()
            .cloned()
            .chain(std::iter::once(GroupId::Unassigned));
        let tasks = metadata
            .task_counts
            .categories()
            .cloned()
            .chain(std::iter::once(TaskId::Unassigned));

        Self::new(
            groups,
            tasks,
            dataset.vocabulary().ids(),
            BatteryRange::FULL,
        )
    }

    /// Empty whitelists on every axis: matches nothing. The battery range is
    /// reset to the full range.
    pub fn clear_all() -> Self {
        Self::default()
    }

    pub fn with_battery_range(mut self, lo: f64, hi: f64) -> Result<Self> {
        self.battery = BatteryRange::new(lo, hi)?;
        Ok(self)
    }

    /// Flip membership of a group; returns whether it is now selected.
    pub fn toggle_group(&mut self, group: GroupId) -> bool {
        toggle(&mut self.groups, group)
    }

    pub fn toggle_task(&mut self, task: TaskId) -> bool {
        toggle(&mut self.tasks, task)
    }

    pub fn toggle_state(&mut self, state: StateId) -> bool {
        toggle(&mut self.states, state)
    }

    #[inline]
    pub fn matches<K>(&self, obs: &Observation<K>) -> bool {
        self.groups.contains(&obs.group)
            && self.tasks.contains(&obs.task)
            && self.states.contains(&obs.state)
            && self.battery.contains(obs.battery)
    }
}

fn toggle<T: std::hash::Hash + Eq>(set: &mut FxHashSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// Keep the observations matching every axis of `spec`, in input order.
///
/// Single pass over the candidates; each axis test is a hash lookup.
pub fn apply<'a, K, I>(observations: I, spec: &FilterSpec) -> Vec<&'a Observation<K>>
where
    K: 'a,
    I: IntoIterator<Item = &'a Observation<K>>,
{
    observations
        .into_iter()
        .filter(|obs| spec.matches(obs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarmscope_types::ident::AgentId;
    use swarmscope_types::point::{Orientation, Vec3};

    fn obs(agent: i64, group: i64, task: i64, state: u16, battery: f64) -> Observation<u32> {
        Observation {
            agent: AgentId::from(agent),
            time: 1,
            group: GroupId::from(group),
            task: TaskId::from(task),
            state: StateId(state),
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            orientation: Orientation::default(),
            battery,
            detection_radius: 50.0,
        }
    }

    fn sample() -> Vec<Observation<u32>> {
        vec![
            obs(1, 1, -1, 2, 96.0),
            obs(2, 1, 1, 1, 97.0),
            obs(3, 2, 2, 1, 88.0),
            obs(4, 2, 2, 1, 94.0),
            obs(5, -1, -1, 0, 15.0),
        ]
    }

    fn everything() -> FilterSpec {
        FilterSpec::new(
            [GroupId::from(1), GroupId::from(2), GroupId::Unassigned],
            [TaskId::from(1), TaskId::from(2), TaskId::Unassigned],
            (0..6).map(StateId),
            BatteryRange::FULL,
        )
    }

    #[test]
    fn test_all_axes_conjunction() {
        let data = sample();
        assert_eq!(apply(&data, &everything()).len(), 5);

        let mut spec = everything();
        spec.groups = [GroupId::from(2)].into_iter().collect();
        let spec = spec.with_battery_range(90.0, 100.0).unwrap();

        let result = apply(&data, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].agent, AgentId::from(4));
    }

    #[test]
    fn test_empty_whitelist_matches_nothing() {
        let data = sample();

        let mut spec = everything();
        spec.groups.clear();
        assert!(apply(&data, &spec).is_empty());

        let mut spec = everything();
        spec.states.clear();
        assert!(apply(&data, &spec).is_empty());

        assert!(apply(&data, &FilterSpec::clear_all()).is_empty());
    }

    #[test]
    fn test_unassigned_is_filterable() {
        let data = sample();
        let mut spec = everything();
        spec.groups = [GroupId::Unassigned].into_iter().collect();
        let result = apply(&data, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].agent, AgentId::from(5));
    }

    #[test]
    fn test_battery_bounds_inclusive() {
        let data = sample();
        let spec = everything().with_battery_range(88.0, 96.0).unwrap();
        let agents: Vec<_> = apply(&data, &spec)
            .iter()
            .map(|o| o.agent.clone())
            .collect();
        assert_eq!(
            agents,
            vec![AgentId::from(1), AgentId::from(3), AgentId::from(4)]
        );
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(matches!(
            BatteryRange::new(60.0, 40.0),
            Err(SwarmError::InvalidRange { .. })
        ));
        assert!(everything().with_battery_range(0.0, 101.0).is_err());
    }

    #[test]
    fn test_battery_range_serde_validates() {
        let range: BatteryRange = serde_json::from_str("[10.0, 20.0]").unwrap();
        assert_eq!(range.lo(), 10.0);
        assert!(serde_json::from_str::<BatteryRange>("[20.0, 10.0]").is_err());
    }

    #[test]
    fn test_toggle() {
        let mut spec = FilterSpec::clear_all();
        assert!(spec.toggle_group(GroupId::from(1)));
        assert!(spec.groups.contains(&GroupId::from(1)));
        assert!(!spec.toggle_group(GroupId::from(1)));
        assert!(spec.groups.is_empty());
        assert!(spec.toggle_state(StateId(3)));
        assert!(spec.toggle_task(TaskId::Unassigned));
    }
}
