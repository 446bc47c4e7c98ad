//! An adjacency-list graph implementing [`GraphView`].

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    graph::{GraphConnection, GraphNode, GraphView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexedNode {
    index: usize,
}

impl GraphNode for IndexedNode {
    fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexedConnection {
    from: usize,
    to: usize,
}

impl IndexedConnection {
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl GraphConnection for IndexedConnection {
    fn from(&self) -> usize {
        self.from
    }

    fn to(&self) -> usize {
        self.to
    }
}

/// A graph storing the outgoing connections of each node in insertion order.
///
/// An undirected graph stores every edge as a pair of mirrored connections. Removing either
/// half removes the whole edge, so that Eulerian reconstruction uses each edge exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    directed: bool,
    nodes: Vec<IndexedNode>,
    adjacency: Vec<Vec<IndexedConnection>>,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn directed(node_count: usize) -> Self {
        Self::with_nodes(node_count, true)
    }

    #[must_use]
    pub fn undirected(node_count: usize) -> Self {
        Self::with_nodes(node_count, false)
    }

    fn with_nodes(node_count: usize, directed: bool) -> Self {
        Self {
            directed,
            nodes: (0..node_count).map(|index| IndexedNode { index }).collect(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from `(from, to)` pairs.
    pub fn from_edges(
        node_count: usize,
        directed: bool,
        edges: &[(usize, usize)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_nodes(node_count, directed);
        for &(from, to) in edges {
            graph.add_connection(from, to)?;
        }
        Ok(graph)
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a node with the next free index and returns it.
    pub fn add_node(&mut self) -> IndexedNode {
        let node = IndexedNode {
            index: self.nodes.len(),
        };
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        node
    }

    /// Adds a connection from `from` to `to`, plus its mirror if the graph is undirected.
    pub fn add_connection(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        let node_count = self.nodes.len();
        for index in [from, to] {
            if index >= node_count {
                return Err(GraphError::NodeOutOfRange { index, node_count });
            }
        }

        let connection = IndexedConnection::new(from, to);
        self.adjacency[from].push(connection);
        if !self.directed {
            self.adjacency[to].push(connection.reversed());
        }

        Ok(())
    }

    fn remove_one(&mut self, connection: IndexedConnection) {
        let Some(outgoing) = self.adjacency.get_mut(connection.from) else {
            return;
        };
        if let Some(position) = outgoing.iter().position(|&c| c == connection) {
            outgoing.remove(position);
        }
    }

    /// The edges of the graph as `(from, to)` pairs. Undirected edges are listed once, with the
    /// lower index first.
    #[must_use]
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        if self.directed {
            return self
                .adjacency
                .iter()
                .flatten()
                .map(|c| (c.from, c.to))
                .collect_vec();
        }

        let mut edges = Vec::new();
        for outgoing in &self.adjacency {
            // Both halves of an undirected self-loop live in the same list
            let mut loops = 0;
            for c in outgoing {
                if c.from < c.to {
                    edges.push((c.from, c.to));
                } else if c.from == c.to {
                    if loops % 2 == 0 {
                        edges.push((c.from, c.to));
                    }
                    loops += 1;
                }
            }
        }
        edges
    }
}

impl GraphView for AdjacencyGraph {
    type Node = IndexedNode;
    type Connection = IndexedConnection;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &IndexedNode> + '_ {
        self.nodes.iter()
    }

    fn connections(&self) -> impl Iterator<Item = &IndexedConnection> + '_ {
        self.adjacency.iter().flatten()
    }

    fn connections_from(&self, index: usize) -> impl Iterator<Item = &IndexedConnection> + '_ {
        self.adjacency.get(index).into_iter().flatten()
    }

    fn resolve_node(&self, index: usize) -> Option<&IndexedNode> {
        self.nodes.get(index)
    }

    fn remove_connection(&mut self, connection: &IndexedConnection) {
        self.remove_one(*connection);
        if !self.directed {
            self.remove_one(connection.reversed());
        }
    }
}
