//! Breadth-first search for the shortest path between two nodes.

use std::collections::{hash_map::Entry, HashMap, VecDeque};

use cityhasher::CityHasher;

use crate::{
    callback::{BfsCallback, NoopCallback},
    error::GraphError,
    graph::{GraphConnection, GraphNode, GraphView},
};

/// Finds paths with the fewest connections in a graph it borrows.
#[derive(Debug)]
pub struct PathFinder<'a, Graph, Callback = NoopCallback> {
    graph: &'a Graph,
    callback: Callback,
}

impl<'a, Graph: GraphView> PathFinder<'a, Graph> {
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            callback: NoopCallback,
        }
    }
}

impl<'a, Graph, Callback> PathFinder<'a, Graph, Callback>
where
    Graph: GraphView,
    Callback: BfsCallback,
{
    #[must_use]
    pub fn with_callback(graph: &'a Graph, callback: Callback) -> Self {
        Self { graph, callback }
    }

    /// Returns the nodes of a shortest path from `start` to `destination`, both included.
    ///
    /// The path is empty if `destination` is unreachable, and is `[start]` if the two nodes are
    /// the same. Nodes that do not belong to the graph are an error.
    pub fn find_path(
        &mut self,
        start: &Graph::Node,
        destination: &Graph::Node,
    ) -> Result<Vec<&'a Graph::Node>, GraphError> {
        self.find_path_by_index(start.index(), destination.index())
    }

    /// Same as [`Self::find_path`], with the endpoints given by their indices.
    pub fn find_path_by_index(
        &mut self,
        start: usize,
        destination: usize,
    ) -> Result<Vec<&'a Graph::Node>, GraphError> {
        let node_count = self.graph.node_count();
        for index in [start, destination] {
            if index >= node_count {
                return Err(GraphError::NodeOutOfRange { index, node_count });
            }
        }

        tracing::debug!("searching for a path from node {start} to node {destination}");

        // Every discovered node maps to the node it was discovered from. The start node maps to
        // itself so that it is never enqueued twice.
        let mut predecessors = HashMap::with_hasher(CityHasher::default());
        predecessors.insert(start, start);
        self.callback.new_node(0, start);

        let mut frontier = VecDeque::from([(start, 0)]);
        let mut expanded_depth = None;

        'search: while start != destination {
            let Some((current, depth)) = frontier.pop_front() else {
                break;
            };

            if expanded_depth != Some(depth) {
                tracing::debug!("depth {depth} frontier {}", frontier.len() + 1);
                expanded_depth = Some(depth);
            }
            tracing::trace!("expanding node {current} at depth {depth}");

            for connection in self.graph.connections_from(current) {
                let next = connection.to();
                if next >= node_count {
                    return Err(GraphError::DanglingConnection {
                        from: connection.from(),
                        to: next,
                        node_count,
                    });
                }

                if let Entry::Vacant(entry) = predecessors.entry(next) {
                    entry.insert(current);
                    self.callback.new_node(depth + 1, next);

                    // Discovery is enough: every node found later is at least as deep
                    if next == destination {
                        break 'search;
                    }

                    frontier.push_back((next, depth + 1));
                }
            }
        }

        if !predecessors.contains_key(&destination) {
            tracing::debug!("node {destination} is unreachable from node {start}");
            return Ok(Vec::new());
        }

        let mut path = Vec::new();
        let mut current = destination;
        while current != start {
            path.push(self.resolve(current)?);
            current = predecessors[&current];
        }
        path.push(self.resolve(start)?);
        path.reverse();

        tracing::debug!("found a path with {} connections", path.len() - 1);

        Ok(path)
    }

    fn resolve(&self, index: usize) -> Result<&'a Graph::Node, GraphError> {
        self.graph
            .resolve_node(index)
            .ok_or(GraphError::NodeOutOfRange {
                index,
                node_count: self.graph.node_count(),
            })
    }
}
