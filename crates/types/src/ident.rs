//! Opaque identifiers for agents, groups (swarms), tasks and states.
//!
//! Source data identifies things either numerically (`SwarmID: 2`) or by
//! label (`"alpha"`). [`Key`] covers both, so a single code path handles
//! either schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric or labelled identifier.
///
/// Numbers order before labels; within a variant the natural order applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Num(i64),
    Label(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Num(n) => write!(f, "{}", n),
            Key::Label(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Num(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Label(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Label(s)
    }
}

/// Identifier of a physical agent, stable across time points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub Key);

impl AgentId {
    pub fn new(key: impl Into<Key>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for AgentId {
    fn from(n: i64) -> Self {
        Self(Key::Num(n))
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(Key::from(s))
    }
}

/// Generates a group/task style identifier: either a real assignment or the
/// "unassigned" sentinel. Serializes as `null` for the sentinel.
macro_rules! assignment_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "Option<Key>", into = "Option<Key>")]
        pub enum $name {
            Unassigned,
            Assigned(Key),
        }

        impl $name {
            pub fn new(key: impl Into<Key>) -> Self {
                $name::Assigned(key.into())
            }

            pub fn is_unassigned(&self) -> bool {
                matches!(self, $name::Unassigned)
            }

            /// The assigned key, `None` for the sentinel.
            pub fn key(&self) -> Option<&Key> {
                match self {
                    $name::Unassigned => None,
                    $name::Assigned(key) => Some(key),
                }
            }
        }

        /// Negative raw values are the sentinel used by tabular sources.
        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                if raw < 0 {
                    $name::Unassigned
                } else {
                    $name::Assigned(Key::Num(raw))
                }
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                $name::Assigned(Key::from(label))
            }
        }

        impl From<Option<Key>> for $name {
            fn from(key: Option<Key>) -> Self {
                match key {
                    Some(Key::Num(n)) => $name::from(n),
                    Some(key) => $name::Assigned(key),
                    None => $name::Unassigned,
                }
            }
        }

        impl From<$name> for Option<Key> {
            fn from(id: $name) -> Self {
                match id {
                    $name::Unassigned => None,
                    $name::Assigned(key) => Some(key),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $name::Unassigned => f.write_str("unassigned"),
                    $name::Assigned(key) => key.fmt(f),
                }
            }
        }
    };
}

assignment_id!(
    /// Swarm membership of an agent at one time point.
    GroupId
);

assignment_id!(
    /// Task assignment of an agent at one time point.
    TaskId
);

/// Interned categorical state.
///
/// The value is the position of the label in the deployment's state
/// vocabulary, so ids are only meaningful together with that vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StateId(pub u16);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
