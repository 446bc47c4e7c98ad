//! Defines the `GraphView` trait and the node and connection traits it is built on.

pub mod adjacency;

/// A node with a stable, dense index in `0..node_count`.
pub trait GraphNode {
    /// The position of this node in [`GraphView::nodes`].
    fn index(&self) -> usize;
}

/// A directed connection between two nodes, identified by their dense indices.
pub trait GraphConnection {
    /// Index of the node this connection leaves from.
    fn from(&self) -> usize;

    /// Index of the node this connection points to.
    fn to(&self) -> usize;
}

/// Defines the graph that the search algorithms will traverse.
///
/// Cloning must produce a deep copy with independent connection storage, since
/// Eulerian path reconstruction removes connections from its own clone. The graph
/// must not be mutated by anyone else while an algorithm holds a reference to it.
pub trait GraphView: Clone {
    type Node: GraphNode;
    type Connection: GraphConnection + Clone;

    /// Total number of nodes.
    fn node_count(&self) -> usize;

    /// All nodes, in index order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_;

    /// All connections of the graph.
    fn connections(&self) -> impl Iterator<Item = &Self::Connection> + '_;

    /// Outgoing connections of the node with index `index`, in a deterministic order. Yields
    /// nothing if there is no such node.
    fn connections_from(&self, index: usize) -> impl Iterator<Item = &Self::Connection> + '_;

    /// Maps a dense index back to its node.
    fn resolve_node(&self, index: usize) -> Option<&Self::Node>;

    /// Removes exactly one connection equal to `connection`.
    fn remove_connection(&mut self, connection: &Self::Connection);

    /// Outgoing connections of `node`.
    fn connections_of<'a>(
        &'a self,
        node: &Self::Node,
    ) -> impl Iterator<Item = &'a Self::Connection> + 'a {
        self.connections_from(node.index())
    }

    fn connection_count(&self) -> usize {
        self.connections().count()
    }

    /// Number of outgoing connections of the node with index `index`.
    fn out_degree(&self, index: usize) -> usize {
        self.connections_from(index).count()
    }
}
