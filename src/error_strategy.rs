use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTag;

/// Policy a node applies to its own failure: divert execution to the fail
/// branch, or substitute configured default outputs and continue normally.
///
/// Absence of a strategy is modeled by the surrounding config carrying
/// `Option<ErrorStrategy>`, not by an extra variant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorStrategy {
    FailBranch,
    DefaultValue,
}

impl ErrorStrategy {
    /// Every variant, in declaration order.
    pub const ALL: [ErrorStrategy; 2] = [ErrorStrategy::FailBranch, ErrorStrategy::DefaultValue];

    /// Canonical tag, exactly as serialized in DSL documents and stored state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorStrategy::FailBranch => "fail-branch",
            ErrorStrategy::DefaultValue => "default-value",
        }
    }
}

impl FromStr for ErrorStrategy {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail-branch" => Ok(ErrorStrategy::FailBranch),
            "default-value" => Ok(ErrorStrategy::DefaultValue),
            other => Err(UnknownTag::ErrorStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
