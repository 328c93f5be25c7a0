//! Engine configuration.
//!
//! Re-exports the playback enums from `swarmscope-types` for convenience.
use serde::de::Error;

pub use swarmscope_types::config::{EndOfRange, PlaybackState};

/// Canonical drone states, in display order.
pub const DEFAULT_STATES: [&str; 6] = [
    "Taking Off",
    "Entering Swarm",
    "Hovering",
    "Passing By",
    "Attacking",
    "Parachute Deployment",
];

/// Engine configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Margin added on every axis around the positions' bounding box
    #[serde(default = "Config::default_bounds_margin")]
    pub bounds_margin: f64,

    /// Closed set of categorical state labels accepted at ingestion
    #[serde(default = "Config::default_states")]
    pub states: Vec<String>,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Playback clock settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Behavior when a tick reaches the last time point
    #[serde(default)]
    pub end_of_range: EndOfRange,

    /// Initial speed multiplier (time points per tick)
    #[serde(default = "PlaybackConfig::default_speed")]
    pub speed: f64,
}

impl PlaybackConfig {
    const fn default_speed() -> f64 {
        1.0
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            end_of_range: EndOfRange::default(),
            speed: Self::default_speed(),
        }
    }
}

impl Config {
    const fn default_bounds_margin() -> f64 {
        10.0
    }

    fn default_states() -> Vec<String> {
        DEFAULT_STATES.iter().map(|s| s.to_string()).collect()
    }

    pub fn with_bounds_margin(mut self, margin: f64) -> Self {
        assert!(
            margin.is_finite() && margin >= 0.0,
            "Bounds margin must be finite and non-negative"
        );
        self.bounds_margin = margin;
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_end_of_range(mut self, policy: EndOfRange) -> Self {
        self.playback.end_of_range = policy;
        self
    }

    pub fn with_playback_speed(mut self, speed: f64) -> Self {
        assert!(
            speed.is_finite() && speed > 0.0,
            "Playback speed must be positive"
        );

        if speed > 100.0 {
            log::warn!(
                "Playback speed of {} skips most time points on every tick",
                speed
            );
        }

        self.playback.speed = speed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.bounds_margin.is_finite() || self.bounds_margin < 0.0 {
            return Err(format!(
                "Bounds margin must be finite and non-negative, got: {}",
                self.bounds_margin
            ));
        }

        if self.states.is_empty() {
            return Err("State vocabulary must not be empty".to_string());
        }

        if self.states.len() > u16::MAX as usize {
            return Err(format!(
                "State vocabulary has {} labels, at most {} are supported",
                self.states.len(),
                u16::MAX
            ));
        }

        for (idx, label) in self.states.iter().enumerate() {
            if self.states[..idx].contains(label) {
                return Err(format!("Duplicate state label: {:?}", label));
            }
        }

        if !self.playback.speed.is_finite() || self.playback.speed <= 0.0 {
            return Err(format!(
                "Playback speed must be positive, got: {}",
                self.playback.speed
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds_margin: Self::default_bounds_margin(),
            states: Self::default_states(),
            playback: PlaybackConfig::default(),
        }
    }
}
