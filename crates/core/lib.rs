//! In-memory exploration engine for multi-agent (drone swarm) observations.
//!
//! ## Features
//! - **Temporal index**: exact time point lookups and per-agent trajectories,
//!   generic over the time key (integer ticks or naturally ordered labels)
//! - **Filtering**: group, task and state whitelists plus a battery range
//! - **Statistics**: counts, order-independent averages and sparse histograms
//! - **Playback**: a passive clock with a configurable end-of-range policy
//!
//! The dataset is loaded once and never mutated. A [`Session`] ties the shared
//! index, the active filter and the clock together.
//!
//! ```rust
//! use swarmscope::{Dataset, Session};
//! use swarmscope::types::ident::{AgentId, GroupId, StateId, TaskId};
//! use swarmscope::types::observation::Observation;
//! use swarmscope::types::point::{Orientation, Vec3};
//!
//! let observations = (0..3u32).map(|tick| Observation {
//!     agent: AgentId::from(7),
//!     time: tick,
//!     group: GroupId::from(1),
//!     task: TaskId::Unassigned,
//!     state: StateId(0),
//!     position: Vec3::new(tick as f64, 0.0, 10.0),
//!     velocity: Vec3::new(1.0, 0.0, 0.0),
//!     orientation: Orientation::default(),
//!     battery: 90.0 - tick as f64,
//!     detection_radius: 50.0,
//! });
//!
//! let dataset = Dataset::builder().observations(observations).build()?;
//! let mut session = Session::open(dataset)?;
//!
//! session.play();
//! assert_eq!(session.tick(), Some(&1));
//! assert_eq!(session.summarize().average_battery, 89.0);
//! assert_eq!(session.trajectory(&AgentId::from(7)).len(), 3);
//!
//! session.set_battery_range(95.0, 100.0)?;
//! assert!(session.visible().is_empty());
//! # Ok::<(), swarmscope::SwarmError>(())
//! ```

pub mod builder;
pub mod clock;
pub mod compute;
pub mod config;
pub mod dataset;
pub mod error;
pub mod session;

#[cfg(feature = "sync")]
pub mod sync;

pub use swarmscope_types as types;

pub use builder::DatasetBuilder;
pub use clock::PlaybackClock;
pub use compute::filter::{BatteryRange, FilterSpec};
pub use compute::temporal::TemporalIndex;
pub use config::{Config, EndOfRange, PlaybackConfig, PlaybackState};
pub use dataset::{Dataset, Metadata, StateVocabulary};
pub use error::{Result, SwarmError};
pub use session::Session;

#[cfg(feature = "sync")]
pub use sync::SyncSession;

pub use swarmscope_types::time::{TimeLabel, TimePoint};

// Re-export the free functions of the query layer
pub use compute::filter::apply;
pub use compute::stats::summarize;
pub use compute::validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
