//! Eulerian trail and circuit analysis.
//!
//! Degrees are counted from outgoing connections only. This matches the undirected degree for
//! graphs where every edge is stored as a pair of mirrored connections, which is the only kind
//! of graph the classification is meaningful for. Directed Eulerian circuits, where in-degree
//! has to equal out-degree at every node, are not detected.

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    graph::{GraphConnection, GraphNode, GraphView},
    settings::{EulerianSettings, SeedPolicy},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Eulerianity {
    NotEulerian,
    /// A trail using every edge once exists between the two odd-degree nodes.
    SemiEulerian,
    /// A circuit using every edge once exists.
    Eulerian,
}

/// Classifies a graph it borrows and reconstructs its Eulerian trail or circuit.
#[derive(Debug)]
pub struct EulerianPath<'a, Graph> {
    graph: &'a Graph,
    settings: EulerianSettings,
}

impl<'a, Graph: GraphView> EulerianPath<'a, Graph> {
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_settings(graph, EulerianSettings::default())
    }

    #[must_use]
    pub fn with_settings(graph: &'a Graph, settings: EulerianSettings) -> Self {
        Self { graph, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &EulerianSettings {
        &self.settings
    }

    /// Determines whether the graph has an Eulerian circuit, an Eulerian trail, or neither.
    #[must_use]
    pub fn classify(&self) -> Eulerianity {
        if !self.is_connected() {
            return Eulerianity::NotEulerian;
        }

        let odd_count = self.odd_degree_nodes().len();
        let node_count = self.graph.node_count();

        // An odd count of 1 is impossible for a consistent graph, and two odd nodes in a
        // two-node graph are not treated as a trail
        let eulerianity = match odd_count {
            0 => Eulerianity::Eulerian,
            2 if node_count != 2 => Eulerianity::SemiEulerian,
            _ => Eulerianity::NotEulerian,
        };

        tracing::debug!("{odd_count} nodes with odd degree, graph is {eulerianity:?}");

        eulerianity
    }

    /// Indices of the nodes with an odd number of outgoing connections, in node order.
    #[must_use]
    pub fn odd_degree_nodes(&self) -> Vec<usize> {
        self.graph
            .nodes()
            .map(GraphNode::index)
            .filter(|&index| self.graph.out_degree(index) % 2 == 1)
            .collect_vec()
    }

    /// Checks that a depth-first visit along outgoing connections reaches every node.
    ///
    /// The visit starts from the node chosen by the configured [`SeedPolicy`]. Graphs with no
    /// nodes, and graphs with several nodes but no connections, are never connected.
    /// Connections pointing outside the graph are ignored.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let connected = self.all_nodes_reachable();

        tracing::debug!("graph is connected: {connected}");

        connected
    }

    fn all_nodes_reachable(&self) -> bool {
        let node_count = self.graph.node_count();
        if node_count == 0 {
            return false;
        }

        if node_count > 1 && self.graph.connections().next().is_none() {
            return false;
        }

        let Some(seed) = self.connectivity_seed() else {
            return false;
        };

        let mut visited = vec![false; node_count];
        self.visit_all_nodes_dfs(seed, &mut visited);

        visited.iter().all(|&v| v)
    }

    fn connectivity_seed(&self) -> Option<usize> {
        let has_connections = |&index: &usize| self.graph.out_degree(index) > 0;

        match self.settings.seed_policy {
            SeedPolicy::FirstNode => self
                .graph
                .nodes()
                .next()
                .map(GraphNode::index)
                .filter(has_connections),
            SeedPolicy::FirstWithConnections => self
                .graph
                .nodes()
                .map(GraphNode::index)
                .find(has_connections),
        }
    }

    fn visit_all_nodes_dfs(&self, seed: usize, visited: &mut [bool]) {
        visited[seed] = true;
        let mut stack = vec![seed];

        while let Some(node) = stack.pop() {
            for connection in self.graph.connections_from(node) {
                let to = connection.to();
                if let Some(seen) = visited.get_mut(to) {
                    if !*seen {
                        *seen = true;
                        stack.push(to);
                    }
                }
            }
        }
    }

    /// Reconstructs the Eulerian circuit or trail of the graph.
    ///
    /// `eulerianity` is trusted to be the result of [`Self::classify`] on the same graph. The
    /// path is empty for [`Eulerianity::NotEulerian`]. Circuits start from the first node, and
    /// trails from the first node with odd degree. Connections are consumed from a private clone
    /// of the graph, in the order the graph lists them.
    pub fn find_path(
        &self,
        eulerianity: Eulerianity,
    ) -> Result<Vec<&'a Graph::Node>, GraphError> {
        let start = match eulerianity {
            Eulerianity::NotEulerian => None,
            Eulerianity::Eulerian => self.graph.nodes().next().map(GraphNode::index),
            Eulerianity::SemiEulerian => self.odd_degree_nodes().first().copied(),
        };
        let Some(start) = start else {
            return Ok(Vec::new());
        };

        tracing::debug!("reconstructing {eulerianity:?} path from node {start}");

        let node_count = self.graph.node_count();
        let mut graph = self.graph.clone();
        let mut trail = Vec::with_capacity(self.graph.connection_count() + 1);
        let mut stack = vec![start];

        while let Some(&top) = stack.last() {
            let first = graph.connections_from(top).next().cloned();
            match first {
                Some(connection) => {
                    let to = connection.to();
                    if to >= node_count {
                        return Err(GraphError::DanglingConnection {
                            from: connection.from(),
                            to,
                            node_count,
                        });
                    }

                    graph.remove_connection(&connection);
                    stack.push(to);
                }
                None => {
                    // No connections left, so this is the node's final place in the trail
                    stack.pop();
                    trail.push(top);
                }
            }
        }

        trail.reverse();

        tracing::debug!(
            "reconstructed path using {} connections",
            trail.len().saturating_sub(1)
        );

        trail
            .into_iter()
            .map(|index| {
                self.graph
                    .resolve_node(index)
                    .ok_or(GraphError::NodeOutOfRange { index, node_count })
            })
            .collect()
    }
}
