//! Interactive exploration session.
//!
//! A [`Session`] is the control surface a presentation layer drives: it owns
//! the shared index, the active filter and the playback clock, and answers
//! "what is visible now" and "what does it add up to".

use crate::clock::PlaybackClock;
use crate::compute::filter::{self, BatteryRange, FilterSpec};
use crate::compute::stats;
use crate::compute::temporal::TemporalIndex;
use crate::config::{PlaybackConfig, PlaybackState};
use crate::dataset::Dataset;
use crate::error::Result;
use std::sync::Arc;
use swarmscope_types::ident::AgentId;
use swarmscope_types::observation::Observation;
use swarmscope_types::stats::Summary;
use swarmscope_types::time::TimePoint;
use swarmscope_types::trajectory::Trajectory;

/// One user's view over a shared [`TemporalIndex`].
///
/// Mutators take `&mut self`; callers serialize them. See `SyncSession` for
/// a locked wrapper.
#[derive(Debug)]
pub struct Session<K> {
    index: Arc<TemporalIndex<K>>,
    filter: FilterSpec,
    clock: PlaybackClock,
}

impl<K: TimePoint> Session<K> {
    /// Session over a shared index. The filter starts out selecting
    /// everything; the clock starts stopped at the first time point.
    pub fn new(index: Arc<TemporalIndex<K>>, config: &PlaybackConfig) -> Result<Self> {
        let clock = PlaybackClock::with_config(index.len(), config)?;
        let filter = FilterSpec::select_all(index.dataset());
        Ok(Self {
            index,
            filter,
            clock,
        })
    }

    /// Index a dataset and open a session with its playback settings.
    pub fn open(dataset: Dataset<K>) -> Result<Self> {
        let playback = dataset.config().playback.clone();
        let index = TemporalIndex::from_dataset(dataset)?;
        Self::new(Arc::new(index), &playback)
    }

    pub fn index(&self) -> &Arc<TemporalIndex<K>> {
        &self.index
    }

    pub fn dataset(&self) -> &Dataset<K> {
        self.index.dataset()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Mutable access for checkbox-style toggles.
    pub fn filter_mut(&mut self) -> &mut FilterSpec {
        &mut self.filter
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn set_filter_spec(&mut self, spec: FilterSpec) {
        log::debug!(
            "Filter updated: {} groups, {} tasks, {} states, battery [{}, {}]",
            spec.groups.len(),
            spec.tasks.len(),
            spec.states.len(),
            spec.battery.lo(),
            spec.battery.hi()
        );
        self.filter = spec;
    }

    /// Replace the battery bounds. On error the active filter is unchanged.
    pub fn set_battery_range(&mut self, lo: f64, hi: f64) -> Result<()> {
        match BatteryRange::new(lo, hi) {
            Ok(range) => {
                self.filter.battery = range;
                log::debug!("Battery range set to [{}, {}]", lo, hi);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected battery range [{}, {}]", lo, hi);
                Err(e)
            }
        }
    }

    /// Restore the select-everything filter.
    pub fn reset_filter(&mut self) {
        self.set_filter_spec(FilterSpec::select_all(self.index.dataset()));
    }

    pub fn current_ordinal(&self) -> usize {
        self.clock.position()
    }

    pub fn current_time(&self) -> &K {
        &self.index.time_points()[self.clock.position()]
    }

    /// Filtered observations at the current time point.
    pub fn visible(&self) -> Vec<&Observation<K>> {
        filter::apply(self.index.frame(self.current_ordinal()), &self.filter)
    }

    /// Statistics over [`Session::visible`].
    pub fn summarize(&self) -> Summary {
        stats::summarize(self.visible())
    }

    /// Full trajectory of an agent, independent of the filter.
    pub fn trajectory(&self, agent: &AgentId) -> Trajectory<'_, K> {
        self.index.trajectory_of(agent)
    }

    /// The agent's observation at the current time point, if it has one.
    pub fn inspect(&self, agent: &AgentId) -> Option<&Observation<K>> {
        self.index.observation_of(agent, self.current_time())
    }

    pub fn play(&mut self) {
        self.clock.play();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn toggle(&mut self) -> PlaybackState {
        self.clock.toggle()
    }

    /// Advance the clock one tick; returns the new current time while
    /// playing.
    pub fn tick(&mut self) -> Option<&K> {
        self.clock.tick()?;
        Some(self.current_time())
    }

    /// Move to the last time point `<= key`, clamped into the timeline.
    pub fn seek(&mut self, key: &K) -> &K {
        let ordinal = self.index.seek_ordinal(key);
        self.clock.seek(ordinal as i64);
        self.current_time()
    }

    pub fn seek_ordinal(&mut self, ordinal: i64) -> usize {
        self.clock.seek(ordinal)
    }

    pub fn set_speed(&mut self, multiplier: f64) -> Result<()> {
        self.clock.set_speed(multiplier)
    }

    pub fn skip_to_start(&mut self) {
        self.clock.skip_to_start();
    }

    pub fn skip_to_end(&mut self) {
        self.clock.skip_to_end();
    }

    pub fn progress(&self) -> f64 {
        self.clock.progress()
    }
}
