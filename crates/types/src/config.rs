use serde::{Deserialize, Serialize};

/// What the playback clock does when a tick reaches the end of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndOfRange {
    /// Jump back to the first time point and stop (play once).
    #[default]
    RewindAndStop,
    /// Hold the last time point and stop.
    StopAtEnd,
    /// Wrap around to the first time point and keep playing.
    Loop,
}

/// Run state of the playback clock.
///
/// Pausing is `Stopped` with the position retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}
