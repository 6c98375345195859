//! Compiled state graph: immutable, supports invoke and stream

use std::collections::HashMap;
use std::fmt;

use crate::error::GraphError;
use crate::node::Node;

/// Executable graph produced by `StateGraph::compile`.
///
/// Runs nodes in edge order. `invoke` returns the final state; `stream`
/// additionally collects the state after every executed node, which is what
/// the response pipeline consumes.
pub struct CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    nodes: HashMap<String, Box<dyn Node<S>>>,
    edge_order: Vec<String>,
}

impl<S> fmt::Debug for CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledStateGraph")
            .field("edge_order", &self.edge_order)
            .finish_non_exhaustive()
    }
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(nodes: HashMap<String, Box<dyn Node<S>>>, edge_order: Vec<String>) -> Self {
        Self { nodes, edge_order }
    }

    /// Run the graph to completion and return the final state. A graph with
    /// no edges returns the input unchanged.
    pub async fn invoke(&self, state: S) -> Result<S, GraphError> {
        let mut state = state;
        for id in &self.edge_order {
            state = self.run_node(id, state).await?;
        }
        Ok(state)
    }

    /// Run the graph to completion, collecting one state snapshot per
    /// executed node. A graph with no edges yields no snapshots.
    pub async fn stream(&self, state: S) -> Result<Vec<S>, GraphError> {
        let mut state = state;
        let mut snapshots = Vec::with_capacity(self.edge_order.len());
        for id in &self.edge_order {
            state = self.run_node(id, state).await?;
            snapshots.push(state.clone());
        }
        Ok(snapshots)
    }

    async fn run_node(&self, id: &str, state: S) -> Result<S, GraphError> {
        // Compile validated every edge target, so the lookup cannot miss.
        let node = self
            .nodes
            .get(id)
            .unwrap_or_else(|| panic!("compiled graph has node {id}"));
        node.run(state).await.map_err(|source| GraphError::Node {
            node: id.to_string(),
            source,
        })
    }
}
