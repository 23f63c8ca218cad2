use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTag;

// ================================
// Node Type (Dify-compatible)
// ================================

/// Kind of step a workflow graph node performs.
///
/// The tags are wire- and storage-stable: persisted workflows reference them
/// by literal value, so the set is append-only. A tag may be deprecated but
/// never renamed or reused for a different meaning.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    Start,
    End,
    Answer,
    Llm,
    KnowledgeRetrieval,
    IfElse,
    Code,
    TemplateTransform,
    QuestionClassifier,
    HttpRequest,
    Tool,
    VariableAggregator,
    /// Old tag of the aggregator, still present in stored workflows.
    // TODO: fold into VariableAggregator once persisted workflows are migrated.
    #[serde(rename = "variable-assigner")]
    LegacyVariableAggregator,
    Loop,
    LoopStart,
    LoopEnd,
    Iteration,
    /// Synthetic entry marker inside an iteration body, never user-authored.
    IterationStart,
    ParameterExtractor,
    #[serde(rename = "assigner")]
    VariableAssigner,
    DocumentExtractor,
    ListOperator,
    Agent,
}

impl NodeType {
    /// Every variant, in declaration order.
    pub const ALL: [NodeType; 23] = [
        NodeType::Start,
        NodeType::End,
        NodeType::Answer,
        NodeType::Llm,
        NodeType::KnowledgeRetrieval,
        NodeType::IfElse,
        NodeType::Code,
        NodeType::TemplateTransform,
        NodeType::QuestionClassifier,
        NodeType::HttpRequest,
        NodeType::Tool,
        NodeType::VariableAggregator,
        NodeType::LegacyVariableAggregator,
        NodeType::Loop,
        NodeType::LoopStart,
        NodeType::LoopEnd,
        NodeType::Iteration,
        NodeType::IterationStart,
        NodeType::ParameterExtractor,
        NodeType::VariableAssigner,
        NodeType::DocumentExtractor,
        NodeType::ListOperator,
        NodeType::Agent,
    ];

    /// Canonical tag, exactly as serialized in DSL documents and stored state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::End => "end",
            NodeType::Answer => "answer",
            NodeType::Llm => "llm",
            NodeType::KnowledgeRetrieval => "knowledge-retrieval",
            NodeType::IfElse => "if-else",
            NodeType::Code => "code",
            NodeType::TemplateTransform => "template-transform",
            NodeType::QuestionClassifier => "question-classifier",
            NodeType::HttpRequest => "http-request",
            NodeType::Tool => "tool",
            NodeType::VariableAggregator => "variable-aggregator",
            NodeType::LegacyVariableAggregator => "variable-assigner",
            NodeType::Loop => "loop",
            NodeType::LoopStart => "loop-start",
            NodeType::LoopEnd => "loop-end",
            NodeType::Iteration => "iteration",
            NodeType::IterationStart => "iteration-start",
            NodeType::ParameterExtractor => "parameter-extractor",
            NodeType::VariableAssigner => "assigner",
            NodeType::DocumentExtractor => "document-extractor",
            NodeType::ListOperator => "list-operator",
            NodeType::Agent => "agent",
        }
    }

    /// Tags kept only so previously persisted workflows keep loading.
    pub const fn is_deprecated(&self) -> bool {
        matches!(self, NodeType::LegacyVariableAggregator)
    }

    /// Internal marker nodes the engine inserts itself.
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, NodeType::IterationStart)
    }
}

/// Whether `tag` names a known node type.
pub fn is_known_tag(tag: &str) -> bool {
    tag.parse::<NodeType>().is_ok()
}

impl FromStr for NodeType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(NodeType::Start),
            "end" => Ok(NodeType::End),
            "answer" => Ok(NodeType::Answer),
            "llm" => Ok(NodeType::Llm),
            "knowledge-retrieval" => Ok(NodeType::KnowledgeRetrieval),
            "if-else" => Ok(NodeType::IfElse),
            "code" => Ok(NodeType::Code),
            "template-transform" => Ok(NodeType::TemplateTransform),
            "question-classifier" => Ok(NodeType::QuestionClassifier),
            "http-request" => Ok(NodeType::HttpRequest),
            "tool" => Ok(NodeType::Tool),
            "variable-aggregator" => Ok(NodeType::VariableAggregator),
            "variable-assigner" => Ok(NodeType::LegacyVariableAggregator),
            "loop" => Ok(NodeType::Loop),
            "loop-start" => Ok(NodeType::LoopStart),
            "loop-end" => Ok(NodeType::LoopEnd),
            "iteration" => Ok(NodeType::Iteration),
            "iteration-start" => Ok(NodeType::IterationStart),
            "parameter-extractor" => Ok(NodeType::ParameterExtractor),
            "assigner" => Ok(NodeType::VariableAssigner),
            "document-extractor" => Ok(NodeType::DocumentExtractor),
            "list-operator" => Ok(NodeType::ListOperator),
            "agent" => Ok(NodeType::Agent),
            other => Err(UnknownTag::NodeType(other.to_string())),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
