use crate::ident::{AgentId, GroupId, StateId, TaskId};
use crate::point::{Orientation, Vec3};
use serde::{Deserialize, Serialize};

/// Lowest valid battery level.
pub const BATTERY_MIN: f64 = 0.0;
/// Highest valid battery level.
pub const BATTERY_MAX: f64 = 100.0;

/// One agent's recorded state at one time point.
///
/// Observations are produced by dataset ingestion, which clamps
/// `battery` into `[0, 100]` and `detection_radius` to `>= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation<K> {
    pub agent: AgentId,
    pub time: K,
    pub group: GroupId,
    pub task: TaskId,
    pub state: StateId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Orientation,
    /// Battery level in percent
    pub battery: f64,
    pub detection_radius: f64,
}

impl<K> Observation<K> {
    /// Scalar speed, the Euclidean norm of the velocity.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// A flat observation row as exported by tabular sources.
///
/// Field names follow the spreadsheet column headers. `SwarmID` / `TaskID`
/// accept numbers (negative = unassigned), labels or `null`; `State` is
/// resolved against the deployment's state vocabulary at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObservationRecord<K> {
    #[serde(rename = "DroneID")]
    pub drone_id: AgentId,
    pub time_point: K,
    #[serde(rename = "SwarmID")]
    pub swarm_id: GroupId,
    #[serde(rename = "TaskID")]
    pub task_id: TaskId,
    pub state: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub battery_percentage: f64,
    pub detection_range: f64,
}

impl<K> ObservationRecord<K> {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position_x, self.position_y, self.position_z)
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::new(self.velocity_x, self.velocity_y, self.velocity_z)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.pitch, self.roll, self.yaw)
    }
}
