//! Conflict handling for store writes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// How a store resolves rows that collide with a uniqueness constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Plain insert. A collision fails the whole batch with
    /// `DatabaseError::UniqueViolation`.
    #[default]
    Insert,
    /// Colliding rows are dropped; the stored row wins.
    Skip,
    /// Colliding rows replace the stored row.
    Upsert,
}

impl WritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritePolicy::Insert => "insert",
            WritePolicy::Skip => "skip",
            WritePolicy::Upsert => "upsert",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insert" => Ok(WritePolicy::Insert),
            "skip" | "ignore" => Ok(WritePolicy::Skip),
            "upsert" | "replace" => Ok(WritePolicy::Upsert),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown write policy '{}'",
                other
            )))),
        }
    }
}
