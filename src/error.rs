use thiserror::Error;

/// Unrecognized vocabulary tag.
///
/// Tags arrive from external DSL documents and previously stored workflow
/// state. An unknown tag means version skew or corrupted data, so lookups
/// fail loudly instead of defaulting to some variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownTag {
    #[error("Unknown node type: {0}")]
    NodeType(String),
    #[error("Unknown error strategy: {0}")]
    ErrorStrategy(String),
    #[error("Unknown fail-branch source handle: {0}")]
    SourceHandle(String),
}
