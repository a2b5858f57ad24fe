//! Question identifier sources.
//!
//! Ids only need to be unique within one template. [`RandomIds`] is the
//! production default; [`SequentialIds`] gives deterministic ids for tests and
//! reproducible output.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the ids handed out by [`RandomIds`].
pub const RANDOM_ID_LEN: usize = 12;

/// Hands out question identifiers, one per created question.
pub trait IdSource {
    /// Return an id not previously returned by this source.
    fn next_id(&mut self) -> String;
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

impl<T: IdSource + ?Sized> IdSource for Box<T> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// `q1`, `q2`, ... with a configurable prefix.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("q")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Short random ids cut from a v4 UUID.
///
/// Remembers what it has issued and draws again on a collision, so ids stay
/// unique within everything built from one source.
#[derive(Debug, Clone, Default)]
pub struct RandomIds {
    issued: HashSet<String>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        loop {
            let mut id = Uuid::new_v4().simple().to_string();
            id.truncate(RANDOM_ID_LEN);
            if self.issued.insert(id.clone()) {
                return id;
            }
            tracing::debug!(id = %id, "random id collision, drawing again");
        }
    }
}

/// Which [`IdSource`] to build from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

impl IdStrategy {
    /// Create a fresh id source for one template.
    pub fn source(self, prefix: &str) -> Box<dyn IdSource> {
        match self {
            IdStrategy::Random => Box::new(RandomIds::new()),
            IdStrategy::Sequential => Box::new(SequentialIds::new(prefix)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Random => write!(f, "random"),
            IdStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}
