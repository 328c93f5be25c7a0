//! Validation and sanitizing of ingested values and control inputs.

use crate::error::{Result, SwarmError};
use swarmscope_types::observation::{BATTERY_MAX, BATTERY_MIN, Observation};

/// Clamps a battery level into `[0, 100]`.
///
/// # Examples
///
/// ```
/// use swarmscope::compute::validation::clamp_battery;
///
/// assert_eq!(clamp_battery(104.0), 100.0);
/// assert_eq!(clamp_battery(-3.0), 0.0);
/// assert_eq!(clamp_battery(42.5), 42.5);
/// ```
pub fn clamp_battery(level: f64) -> f64 {
    level.clamp(BATTERY_MIN, BATTERY_MAX)
}

/// Clamps a detection radius to be non-negative.
pub fn clamp_detection_radius(radius: f64) -> f64 {
    radius.max(0.0)
}

/// Rejects observations carrying non-finite numbers.
///
/// Out-of-range battery levels and negative radii are not errors; they are
/// clamped by [`sanitize_observation`].
pub fn validate_observation<K: std::fmt::Debug>(obs: &Observation<K>) -> Result<()> {
    let fields = [
        ("position", obs.position.is_finite()),
        ("velocity", obs.velocity.is_finite()),
        ("orientation", obs.orientation.is_finite()),
        ("battery", obs.battery.is_finite()),
        ("detection radius", obs.detection_radius.is_finite()),
    ];

    for (name, finite) in fields {
        if !finite {
            return Err(SwarmError::InvalidInput(format!(
                "Observation of agent {} at {:?} has a non-finite {}",
                obs.agent, obs.time, name
            )));
        }
    }

    Ok(())
}

/// Validates an observation and clamps its battery level and detection radius.
///
/// Returns `true` when a value had to be clamped.
pub fn sanitize_observation<K: std::fmt::Debug>(obs: &mut Observation<K>) -> Result<bool> {
    validate_observation(obs)?;

    let battery = clamp_battery(obs.battery);
    let radius = clamp_detection_radius(obs.detection_radius);
    let clamped = battery != obs.battery || radius != obs.detection_radius;

    obs.battery = battery;
    obs.detection_radius = radius;

    Ok(clamped)
}

/// Validates a playback speed multiplier.
///
/// # Examples
///
/// ```
/// use swarmscope::compute::validation::validate_speed;
///
/// assert!(validate_speed(0.5).is_ok());
/// assert!(validate_speed(0.0).is_err());
/// assert!(validate_speed(-1.0).is_err());
/// assert!(validate_speed(f64::INFINITY).is_err());
/// ```
pub fn validate_speed(multiplier: f64) -> Result<()> {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(SwarmError::InvalidSpeed(multiplier));
    }
    Ok(())
}

/// Validates battery filter bounds: `lo <= hi`, both within `[0, 100]`.
///
/// # Examples
///
/// ```
/// use swarmscope::compute::validation::validate_battery_range;
///
/// assert!(validate_battery_range(20.0, 80.0).is_ok());
/// assert!(validate_battery_range(50.0, 50.0).is_ok());
/// assert!(validate_battery_range(80.0, 20.0).is_err());
/// assert!(validate_battery_range(-5.0, 20.0).is_err());
/// ```
pub fn validate_battery_range(lo: f64, hi: f64) -> Result<()> {
    let in_bounds = |v: f64| (BATTERY_MIN..=BATTERY_MAX).contains(&v);

    if !in_bounds(lo) || !in_bounds(hi) || lo > hi {
        return Err(SwarmError::InvalidRange { lo, hi });
    }
    Ok(())
}
