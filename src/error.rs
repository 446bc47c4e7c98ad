use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node index {index} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { index: usize, node_count: usize },

    #[error("Connection {from} -> {to} points outside of a graph with {node_count} nodes")]
    DanglingConnection {
        from: usize,
        to: usize,
        node_count: usize,
    },
}
