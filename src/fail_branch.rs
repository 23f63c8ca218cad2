use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTag;

/// Outgoing edge handle of a node that supports fail-branching: the edge
/// taken on failure vs. the normal success edge.
///
/// `Failed` shares its `fail-branch` tag with
/// [`ErrorStrategy::FailBranch`](crate::ErrorStrategy::FailBranch): the
/// strategy tag doubles as the handle the engine routes on when that
/// strategy fires. The overlap is load-bearing, not a duplicate to clean up.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailBranchSourceHandle {
    #[serde(rename = "fail-branch")]
    Failed,
    #[serde(rename = "success-branch")]
    Success,
}

impl FailBranchSourceHandle {
    /// Every variant, in declaration order.
    pub const ALL: [FailBranchSourceHandle; 2] = [
        FailBranchSourceHandle::Failed,
        FailBranchSourceHandle::Success,
    ];

    /// Canonical tag, exactly as serialized in DSL documents and stored state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailBranchSourceHandle::Failed => "fail-branch",
            FailBranchSourceHandle::Success => "success-branch",
        }
    }
}

impl FromStr for FailBranchSourceHandle {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail-branch" => Ok(FailBranchSourceHandle::Failed),
            "success-branch" => Ok(FailBranchSourceHandle::Success),
            other => Err(UnknownTag::SourceHandle(other.to_string())),
        }
    }
}

impl fmt::Display for FailBranchSourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for handle in FailBranchSourceHandle::ALL {
            assert_eq!(
                handle.as_str().parse::<FailBranchSourceHandle>(),
                Ok(handle)
            );
        }
    }

    #[test]
    fn test_variant_names_differ_from_tags() {
        // The in-memory names are Failed/Success; the wire tags are not.
        assert_eq!(FailBranchSourceHandle::Failed.as_str(), "fail-branch");
        assert_eq!(FailBranchSourceHandle::Success.as_str(), "success-branch");
        assert!("failed".parse::<FailBranchSourceHandle>().is_err());
        assert!("success".parse::<FailBranchSourceHandle>().is_err());
    }
}
