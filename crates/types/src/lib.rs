//! # swarmscope-types
//!
//! Core data types for the swarmscope engine.
//!
//! This crate holds the plain, serializable records shared by the engine and
//! its collaborators (ingestion adapters, renderers):
//!
//! - **Geometry**: `Vec3`, `Orientation`, `BoundingBox3D`
//! - **Identifiers**: `Key`, `AgentId`, `GroupId`, `TaskId`, `StateId`
//! - **Time keys**: the `TimePoint` trait and the naturally ordered `TimeLabel`
//! - **Records**: `Observation`, `ObservationRecord`, `Trajectory`
//! - **Summaries**: `Summary`, `Histogram`, `BatteryBand`
//! - **Playback**: `EndOfRange`, `PlaybackState`
//!
//! ## Examples
//!
//! ```rust
//! use swarmscope_types::ident::GroupId;
//! use swarmscope_types::time::TimeLabel;
//!
//! // Tabular sources use -1 for "no swarm"
//! assert!(GroupId::from(-1).is_unassigned());
//!
//! // Labels order naturally
//! assert!(TimeLabel::from("TP9") < TimeLabel::from("TP10"));
//! ```

pub mod bbox;
pub mod config;
pub mod ident;
pub mod observation;
pub mod point;
pub mod stats;
pub mod time;
pub mod trajectory;
