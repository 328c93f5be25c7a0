//! Passive playback clock over time point ordinals.
//!
//! The clock never schedules itself. A driver (UI timer, test, example loop)
//! calls [`PlaybackClock::tick`] at whatever cadence it likes; each tick
//! advances the cursor by the speed multiplier.

use crate::compute::validation::validate_speed;
use crate::config::{EndOfRange, PlaybackConfig, PlaybackState};
use crate::error::{Result, SwarmError};

/// Cursor, play state and speed over a timeline of `len` ordinals.
///
/// The cursor is fractional so speeds below 1 advance over several ticks;
/// the visible position is its floor.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    cursor: f64,
    last: usize,
    speed: f64,
    state: PlaybackState,
    end_of_range: EndOfRange,
}

impl PlaybackClock {
    /// Stopped clock at the first ordinal with the default policy.
    pub fn new(len: usize) -> Result<Self> {
        Self::with_config(len, &PlaybackConfig::default())
    }

    pub fn with_config(len: usize, config: &PlaybackConfig) -> Result<Self> {
        if len == 0 {
            return Err(SwarmError::EmptyTimeline);
        }
        validate_speed(config.speed)?;

        Ok(Self {
            cursor: 0.0,
            last: len - 1,
            speed: config.speed,
            state: PlaybackState::Stopped,
            end_of_range: config.end_of_range,
        })
    }

    /// Visible ordinal, `floor(cursor)`.
    pub fn position(&self) -> usize {
        (self.cursor.floor() as usize).min(self.last)
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn end_of_range(&self) -> EndOfRange {
        self.end_of_range
    }

    pub fn set_end_of_range(&mut self, policy: EndOfRange) {
        self.end_of_range = policy;
    }

    /// First and last ordinal, inclusive.
    pub fn bounds(&self) -> (usize, usize) {
        (0, self.last)
    }

    /// Number of ordinals on the timeline.
    pub fn len(&self) -> usize {
        self.last + 1
    }

    pub fn play(&mut self) {
        if self.state != PlaybackState::Playing {
            self.state = PlaybackState::Playing;
            log::debug!("Playback started at ordinal {}", self.position());
        }
    }

    /// Stop advancing, keeping the position.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Stopped {
            self.state = PlaybackState::Stopped;
            log::debug!("Playback paused at ordinal {}", self.position());
        }
    }

    /// Play when stopped, pause when playing. Returns the new state.
    pub fn toggle(&mut self) -> PlaybackState {
        match self.state {
            PlaybackState::Stopped => self.play(),
            PlaybackState::Playing => self.pause(),
        }
        self.state
    }

    /// Advance by `speed` ordinals. Returns the new position, or `None` when
    /// the clock is stopped.
    ///
    /// The end of the range is reached when the advanced cursor lands on or
    /// past the last ordinal; what happens then is set by [`EndOfRange`].
    pub fn tick(&mut self) -> Option<usize> {
        if !self.is_playing() {
            return None;
        }

        let next = self.cursor + self.speed;
        let last = self.last as f64;

        match self.end_of_range {
            EndOfRange::RewindAndStop if next >= last => {
                self.cursor = 0.0;
                self.state = PlaybackState::Stopped;
                log::debug!("Playback reached the end, rewound to start");
            }
            EndOfRange::StopAtEnd if next >= last => {
                self.cursor = last;
                self.state = PlaybackState::Stopped;
                log::debug!(
                    "Playback reached the end, stopped at ordinal {}",
                    self.last
                );
            }
            EndOfRange::Loop => {
                self.cursor = next.rem_euclid(last + 1.0);
            }
            _ => self.cursor = next,
        }

        Some(self.position())
    }

    /// Jump to an ordinal, clamped into the bounds. Works in any play state.
    pub fn seek(&mut self, ordinal: i64) -> usize {
        let clamped = ordinal.clamp(0, self.last as i64);
        self.cursor = clamped as f64;
        clamped as usize
    }

    /// Change the multiplier. An invalid value leaves the clock unchanged.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<()> {
        if let Err(e) = validate_speed(multiplier) {
            log::warn!("Rejected playback speed {}", multiplier);
            return Err(e);
        }
        self.speed = multiplier;
        Ok(())
    }

    pub fn skip_to_start(&mut self) {
        self.cursor = 0.0;
    }

    pub fn skip_to_end(&mut self) {
        self.cursor = self.last as f64;
    }

    /// Position as a fraction of the timeline in `[0, 1]`; 0 for a single
    /// time point.
    pub fn progress(&self) -> f64 {
        if self.last == 0 {
            return 0.0;
        }
        self.position() as f64 / self.last as f64
    }
}
