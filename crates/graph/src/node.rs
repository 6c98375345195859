//! Graph node trait: one step in a StateGraph

use async_trait::async_trait;

use crate::error::NodeError;

/// One step in a graph: state in, state out.
///
/// Implementors receive the full state value and return the updated state.
/// A returned error stops the run; the graph wraps it in
/// `GraphError::Node` without discarding the source.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Node id (e.g. `"entry"`, `"model"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// Run a single step
    async fn run(&self, state: S) -> Result<S, NodeError>;
}
