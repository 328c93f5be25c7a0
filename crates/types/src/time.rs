//! Time-point keys.
//!
//! The engine is generic over any [`TimePoint`]: the key's `Ord` implementation
//! is the comparison used for trajectories, index order and playback. Dense
//! integer ticks (`u32`, `u64`, `i64`) work directly; labelled sampling
//! instants use [`TimeLabel`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// An ordered, hashable identifier of a sampling instant.
pub trait TimePoint: Ord + Clone + Hash + fmt::Debug {}

impl<T: Ord + Clone + Hash + fmt::Debug> TimePoint for T {}

/// A string time-point label with natural ordering.
///
/// Runs of ASCII digits compare by numeric value, so `TP2 < TP10`, which
/// plain lexicographic ordering gets wrong.
///
/// # Examples
///
/// ```
/// use swarmscope_types::time::TimeLabel;
///
/// let mut labels = vec![TimeLabel::from("TP10"), TimeLabel::from("TP2"), TimeLabel::from("TP1")];
/// labels.sort();
/// assert_eq!(labels, vec![TimeLabel::from("TP1"), TimeLabel::from("TP2"), TimeLabel::from("TP10")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeLabel(String);

impl TimeLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TimeLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for TimeLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for TimeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl PartialOrd for TimeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns `Equal` only for byte-identical inputs, keeping `Ord` consistent
/// with the derived `Eq`.
fn natural_cmp(mut a: &[u8], mut b: &[u8]) -> Ordering {
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (digits_a, rest_a) = split_digits(a);
                let (digits_b, rest_b) = split_digits(b);
                let value_a = trim_zeros(digits_a);
                let value_b = trim_zeros(digits_b);

                let ord = value_a
                    .len()
                    .cmp(&value_b.len())
                    .then_with(|| value_a.cmp(value_b))
                    .then_with(|| digits_a.len().cmp(&digits_b.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = rest_a;
                b = rest_b;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(y);
                }
                a = &a[1..];
                b = &b[1..];
            }
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let n = s.iter().take_while(|c| c.is_ascii_digit()).count();
    s.split_at(n)
}

fn trim_zeros(digits: &[u8]) -> &[u8] {
    let start = digits
        .iter()
        .position(|&c| c != b'0')
        .unwrap_or(digits.len());
    &digits[start..]
}
