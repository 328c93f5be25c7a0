use crate::config::{Config, DEFAULT_STATES};
use crate::error::{Result, SwarmError};
use rustc_hash::FxHashMap;
use swarmscope_types::ident::StateId;

/// Closed set of categorical state labels for one deployment.
///
/// Labels are interned to [`StateId`]s in declaration order. Ingestion rejects
/// labels outside the set, so queries never see an unexpected state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVocabulary {
    labels: Vec<String>,
    lookup: FxHashMap<String, StateId>,
}

impl StateVocabulary {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(SwarmError::InvalidInput("State vocabulary must not be empty".to_string()));
        }
        if labels.len() > u16::MAX as usize {
            return Err(SwarmError::InvalidInput(format!(
                "State vocabulary has {} labels, at most {} are supported",
                labels.len(),
                u16::MAX
            )));
        }

        let mut lookup = FxHashMap::default();
        for (idx, label) in labels.iter().enumerate() {
            if lookup.insert(label.clone(), StateId(idx as u16)).is_some() {
                return Err(SwarmError::InvalidInput(format!("Duplicate state label: {:?}", label)));
            }
        }

        Ok(Self { labels, lookup })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.states.iter().cloned())
    }

    /// Resolve a label, failing with [`SwarmError::UnknownState`].
    pub fn resolve(&self, label: &str) -> Result<StateId> {
        self.get(label)
            .ok_or_else(|| SwarmError::UnknownState(label.to_string()))
    }

    pub fn get(&self, label: &str) -> Option<StateId> {
        self.lookup.get(label).copied()
    }

    pub fn label(&self, id: StateId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.labels.len()
    }

    /// All ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.labels.len() as u16).map(StateId)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for StateVocabulary {
    fn default() -> Self {
        let labels: Vec<String> = DEFAULT_STATES.iter().map(|s| s.to_string()).collect();
        let lookup = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.clone(), StateId(idx as u16)))
            .collect();
        Self { labels, lookup }
    }
}
