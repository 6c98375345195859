//! Minimal execution-graph engine for Colloquy
//!
//! A `StateGraph` is built from named nodes and a linear edge order, then
//! compiled into an immutable `CompiledStateGraph` that can be run with
//! `invoke` (final state) or `stream` (one state snapshot per executed
//! node). The graph carries no behavior of its own beyond sequencing.

pub mod compiled;
pub mod error;
pub mod node;
pub mod state_graph;

pub use compiled::CompiledStateGraph;
pub use error::{CompilationError, GraphError, NodeError};
pub use node::Node;
pub use state_graph::StateGraph;
