//! # Flowvocab — node vocabulary for Dify-compatible workflow DSLs
//!
//! The tag sets workflow tooling agrees on before any graph is built:
//!
//! - [`NodeType`] — what kind of step a graph node performs.
//! - [`ErrorStrategy`] — how a node reacts to its own failure.
//! - [`FailBranchSourceHandle`] — the failed vs. success outgoing edge of a
//!   node that fail-branches.
//!
//! Each type is a closed sum type paired with an exhaustive bidirectional
//! mapping to its canonical lowercase-hyphenated tag. The tags are the
//! external contract: serializers, persistence layers, and UIs store them
//! verbatim, so the vocabulary is versioned and append-only. Removing or
//! renaming a tag breaks stored workflows; deprecated members stay until an
//! explicit migration retires them.
//!
//! Parsing is strict. An unrecognized tag yields [`UnknownTag`] rather than
//! a silent default, so version skew and corrupted state surface at the
//! boundary:
//!
//! ```rust
//! use flowvocab::{NodeType, UnknownTag};
//!
//! let t: NodeType = "template-transform".parse().unwrap();
//! assert_eq!(t, NodeType::TemplateTransform);
//! assert_eq!(t.to_string(), "template-transform");
//!
//! let err = "template".parse::<NodeType>().unwrap_err();
//! assert_eq!(err, UnknownTag::NodeType("template".to_string()));
//! ```

pub mod error;
pub mod error_strategy;
pub mod fail_branch;
pub mod node_type;

pub use error::UnknownTag;
pub use error_strategy::ErrorStrategy;
pub use fail_branch::FailBranchSourceHandle;
pub use node_type::{is_known_tag, NodeType};
