//! Thread-safe wrapper for sharing a session between threads.
//!
//! `Session` itself is lock-free and expects its caller to serialize
//! mutations. `SyncSession` does that with a `parking_lot::Mutex`, so a
//! playback driver thread and a UI thread can share one session. Results are
//! returned owned because borrows cannot outlive the lock.

use crate::compute::filter::FilterSpec;
use crate::config::PlaybackState;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::session::Session;
use parking_lot::Mutex;
use std::sync::Arc;
use swarmscope_types::ident::AgentId;
use swarmscope_types::observation::Observation;
use swarmscope_types::stats::Summary;
use swarmscope_types::time::TimePoint;

/// Cloneable, lock-protected handle to a [`Session`].
#[derive(Debug)]
pub struct SyncSession<K> {
    inner: Arc<Mutex<Session<K>>>,
}

impl<K> Clone for SyncSession<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: TimePoint> SyncSession<K> {
    pub fn new(session: Session<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Index a dataset and open a shared session over it.
    pub fn open(dataset: Dataset<K>) -> Result<Self> {
        Ok(Self::new(Session::open(dataset)?))
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session<K>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn set_filter_spec(&self, spec: FilterSpec) {
        self.inner.lock().set_filter_spec(spec);
    }

    pub fn set_battery_range(&self, lo: f64, hi: f64) -> Result<()> {
        self.inner.lock().set_battery_range(lo, hi)
    }

    pub fn current_time(&self) -> K {
        self.inner.lock().current_time().clone()
    }

    pub fn visible(&self) -> Vec<Observation<K>> {
        self.inner.lock().visible().into_iter().cloned().collect()
    }

    pub fn summarize(&self) -> Summary {
        self.inner.lock().summarize()
    }

    pub fn trajectory(&self, agent: &AgentId) -> Vec<Observation<K>> {
        self.inner
            .lock()
            .trajectory(agent)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn play(&self) {
        self.inner.lock().play();
    }

    pub fn pause(&self) {
        self.inner.lock().pause();
    }

    pub fn toggle(&self) -> PlaybackState {
        self.inner.lock().toggle()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.lock().clock().is_playing()
    }

    pub fn tick(&self) -> Option<K> {
        self.inner.lock().tick().cloned()
    }

    pub fn seek(&self, key: &K) -> K {
        self.inner.lock().seek(key).clone()
    }

    pub fn set_speed(&self, multiplier: f64) -> Result<()> {
        self.inner.lock().set_speed(multiplier)
    }

    pub fn progress(&self) -> f64 {
        self.inner.lock().progress()
    }
}
