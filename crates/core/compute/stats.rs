//! Statistics aggregation over observation subsets.
//!
//! Every summary in the engine, dataset metadata included, is produced here so
//! that counts computed in different places cannot drift apart.
//!
//! Means are order-independent: values are sorted with `f64::total_cmp` and
//! then folded left to right, so the same multiset of observations always
//! yields bit-identical output whatever order it arrives in.

use rustc_hash::FxHashSet;
use swarmscope_types::observation::Observation;
use swarmscope_types::stats::{Histogram, Summary};

/// Summarize an observation subset in one pass.
///
/// Unassigned groups and tasks are left out of the group and task histograms
/// but still count towards `count` and the averages. An empty input gives
/// [`Summary::default`], with zero averages.
///
/// # Examples
///
/// ```
/// use swarmscope::compute::stats::summarize;
/// use swarmscope_types::observation::Observation;
///
/// let summary = summarize(std::iter::empty::<&Observation<u32>>());
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.average_battery, 0.0);
/// ```
pub fn summarize<'a, K, I>(observations: I) -> Summary
where
    K: 'a,
    I: IntoIterator<Item = &'a Observation<K>>,
{
    let iter = observations.into_iter();
    let (lower, _) = iter.size_hint();

    let mut batteries = Vec::with_capacity(lower);
    let mut speeds = Vec::with_capacity(lower);
    let mut radii = Vec::with_capacity(lower);
    let mut agents = FxHashSet::default();
    let mut group_histogram = Histogram::new();
    let mut task_histogram = Histogram::new();
    let mut state_histogram = Histogram::new();

    for obs in iter {
        batteries.push(obs.battery);
        speeds.push(obs.speed());
        radii.push(obs.detection_radius);
        agents.insert(&obs.agent);

        if !obs.group.is_unassigned() {
            group_histogram.increment(obs.group.clone());
        }
        if !obs.task.is_unassigned() {
            task_histogram.increment(obs.task.clone());
        }
        state_histogram.increment(obs.state);
    }

    Summary {
        count: batteries.len(),
        distinct_agents: agents.len(),
        average_battery: mean(&mut batteries),
        average_speed: mean(&mut speeds),
        average_detection_radius: mean(&mut radii),
        group_histogram,
        task_histogram,
        state_histogram,
    }
}

/// Arithmetic mean, 0 for an empty slice. Reorders `values`.
pub fn mean(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable_by(f64::total_cmp);
    let sum = values.iter().fold(0.0, |acc, v| acc + v);
    sum / values.len() as f64
}
