//! Randomized checks of the path finder and the Eulerian reconstruction on small graphs.

use graph_traversal::{
    bfs::PathFinder,
    eulerian::{EulerianPath, Eulerianity},
    graph::{adjacency::AdjacencyGraph, GraphConnection, GraphNode, GraphView},
};
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const ROUNDS: u64 = 200;

fn random_graph(rng: &mut StdRng, directed: bool) -> AdjacencyGraph {
    let node_count = rng.gen_range(1..=7);
    let mut graph = if directed {
        AdjacencyGraph::directed(node_count)
    } else {
        AdjacencyGraph::undirected(node_count)
    };

    for from in 0..node_count {
        for to in 0..node_count {
            if from != to && rng.gen_bool(0.25) {
                graph.add_connection(from, to).unwrap();
            }
        }
    }

    graph
}

/// Length of the shortest path by trying every simple path.
fn exhaustive_distance(graph: &AdjacencyGraph, start: usize, destination: usize) -> Option<usize> {
    fn walk(
        graph: &AdjacencyGraph,
        node: usize,
        destination: usize,
        on_path: &mut Vec<bool>,
        length: usize,
        best: &mut Option<usize>,
    ) {
        if node == destination {
            *best = Some(best.map_or(length, |b| b.min(length)));
            return;
        }

        on_path[node] = true;
        let targets = graph.connections_from(node).map(|c| c.to()).collect_vec();
        for next in targets {
            if !on_path[next] {
                walk(graph, next, destination, on_path, length + 1, best);
            }
        }
        on_path[node] = false;
    }

    let mut best = None;
    let mut on_path = vec![false; graph.node_count()];
    walk(graph, start, destination, &mut on_path, 0, &mut best);
    best
}

fn normalized(edges: impl IntoIterator<Item = (usize, usize)>) -> Vec<(usize, usize)> {
    edges
        .into_iter()
        .map(|(a, b)| (a.min(b), a.max(b)))
        .sorted()
        .collect_vec()
}

/// A closed walk from node 0 that passes through every node, with no two consecutive nodes equal.
fn closed_walk(rng: &mut StdRng, node_count: usize, extra: usize) -> Vec<usize> {
    let mut order = (1..node_count).collect_vec();
    order.shuffle(rng);

    let mut walk = vec![0];
    walk.extend(order);
    for _ in 0..extra {
        let last = *walk.last().unwrap();
        let next = (last + rng.gen_range(1..node_count)) % node_count;
        walk.push(next);
    }
    if *walk.last().unwrap() != 0 {
        walk.push(0);
    }

    walk
}

fn graph_from_walk(node_count: usize, walk: &[usize]) -> AdjacencyGraph {
    let edges = walk.iter().copied().tuple_windows().collect_vec();
    AdjacencyGraph::from_edges(node_count, false, &edges).unwrap()
}

fn assert_uses_every_edge_once(graph: &AdjacencyGraph, path: &[&impl GraphNode]) {
    let walked = path.iter().map(|node| node.index()).tuple_windows();
    assert_eq!(normalized(walked), normalized(graph.edge_list()));
}

#[test]
fn bfs_finds_shortest_paths() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..ROUNDS {
        let directed = rng.gen_bool(0.5);
        let graph = random_graph(&mut rng, directed);
        let node_count = graph.node_count();
        let start = rng.gen_range(0..node_count);
        let destination = rng.gen_range(0..node_count);

        let path = PathFinder::new(&graph)
            .find_path_by_index(start, destination)
            .unwrap();

        match exhaustive_distance(&graph, start, destination) {
            None => assert!(path.is_empty()),
            Some(distance) => {
                assert_eq!(path.len(), distance + 1);
                assert_eq!(path.first().unwrap().index(), start);
                assert_eq!(path.last().unwrap().index(), destination);

                for (from, to) in path.iter().map(|node| node.index()).tuple_windows() {
                    assert!(graph.connections_from(from).any(|c| c.to() == to));
                }
            }
        }
    }
}

#[test]
fn closed_walks_give_eulerian_circuits() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let node_count = rng.gen_range(2..=6);
        let extra = rng.gen_range(0..10);
        let graph = graph_from_walk(node_count, &closed_walk(&mut rng, node_count, extra));
        let eulerian_path = EulerianPath::new(&graph);

        let eulerianity = eulerian_path.classify();
        assert_eq!(eulerianity, Eulerianity::Eulerian);

        let path = eulerian_path.find_path(eulerianity).unwrap();
        assert_eq!(path.first().unwrap().index(), 0);
        assert_eq!(path.last().unwrap().index(), 0);
        assert_uses_every_edge_once(&graph, &path);
    }
}

#[test]
fn open_walks_give_eulerian_trails() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..ROUNDS {
        let node_count = rng.gen_range(3..=6);
        let extra = rng.gen_range(0..10);
        let mut walk = closed_walk(&mut rng, node_count, extra);
        // Dropping the final return to 0 leaves 0 and the new last node with odd degree
        walk.pop();
        let graph = graph_from_walk(node_count, &walk);
        let eulerian_path = EulerianPath::new(&graph);

        let mut odd = eulerian_path.odd_degree_nodes();
        assert_eq!(odd.len(), 2);
        assert_eq!(eulerian_path.classify(), Eulerianity::SemiEulerian);

        let path = eulerian_path.find_path(Eulerianity::SemiEulerian).unwrap();
        let mut ends = vec![
            path.first().unwrap().index(),
            path.last().unwrap().index(),
        ];
        ends.sort_unstable();
        odd.sort_unstable();
        assert_eq!(ends, odd);
        assert_eq!(path.first().unwrap().index(), odd[0]);
        assert_uses_every_edge_once(&graph, &path);
    }
}

#[test]
fn random_graphs_are_classified_consistently() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ROUNDS {
        let graph = random_graph(&mut rng, false);
        let before = graph.clone();
        let eulerian_path = EulerianPath::new(&graph);

        let eulerianity = eulerian_path.classify();
        assert_eq!(eulerian_path.classify(), eulerianity);

        let path = eulerian_path.find_path(eulerianity).unwrap();
        assert_eq!(graph, before);

        match eulerianity {
            Eulerianity::NotEulerian => assert!(path.is_empty()),
            Eulerianity::Eulerian => {
                assert_eq!(path.first().unwrap().index(), path.last().unwrap().index());
                assert_uses_every_edge_once(&graph, &path);
            }
            Eulerianity::SemiEulerian => {
                assert_ne!(path.first().unwrap().index(), path.last().unwrap().index());
                assert_uses_every_edge_once(&graph, &path);
            }
        }
    }
}
