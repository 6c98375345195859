//! State graph builder: named nodes plus a linear edge order

use std::collections::HashMap;

use crate::compiled::CompiledStateGraph;
use crate::error::CompilationError;
use crate::node::Node;

/// Builder for an execution graph.
///
/// Add nodes with `add_node`, define the chain with `add_edge` (the order of
/// `add_edge` calls is the execution order: the first edge is the entry, the
/// last leads to the end), then `compile` to get a `CompiledStateGraph`.
pub struct StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    nodes: HashMap<String, Box<dyn Node<S>>>,
    /// Linear chain: [id1, id2, ...] runs id1 then id2 then ...
    edge_order: Vec<String>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_order: Vec::new(),
        }
    }

    /// Add a node; the id must be unique. Adding the same id again replaces
    /// the previous node.
    pub fn add_node(&mut self, id: impl Into<String>, node: Box<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Append an edge from the current chain end to this node. The target
    /// must be registered via `add_node` before `compile`.
    pub fn add_edge(&mut self, to_id: impl Into<String>) -> &mut Self {
        self.edge_order.push(to_id.into());
        self
    }

    /// Validate that every edge target is a registered node and produce the
    /// immutable executable graph.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for id in &self.edge_order {
            if !self.nodes.contains_key(id) {
                return Err(CompilationError::NodeNotFound(id.clone()));
            }
        }
        Ok(CompiledStateGraph::new(self.nodes, self.edge_order))
    }
}
