//! Graph error types

/// Error returned by a node. Boxed so the original failure (HTTP, provider,
/// anything) survives the trip through the graph as a source.
pub type NodeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building a graph
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompilationError {
    #[error("edge targets unknown node: {0}")]
    NodeNotFound(String),
}

/// Errors that can occur while running a compiled graph
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node {node} failed: {source}")]
    Node {
        node: String,
        #[source]
        source: NodeError,
    },
}

impl GraphError {
    /// The failed node's id
    pub fn node_id(&self) -> &str {
        match self {
            GraphError::Node { node, .. } => node,
        }
    }
}
