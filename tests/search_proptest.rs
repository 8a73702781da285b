use petgraph::algo::{dijkstra as reference_dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};
use wayfinder::spanning::{kruskal, prim};
use wayfinder::{has_cycle_from, search, Graph, NodeId};

/// Undirected edges with integral weights; at most one edge per pair.
#[derive(Debug, Clone)]
struct Instance {
    n: usize,
    edges: Vec<(usize, usize, f64)>,
}

fn instance() -> impl Strategy<Value = Instance> {
    (2usize..12).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, 1u8..20), 0..(n * 3)).prop_map(move |raw| {
            let mut seen = HashSet::new();
            let edges = raw
                .into_iter()
                .filter(|&(a, b, _)| a != b && seen.insert((a.min(b), a.max(b))))
                .map(|(a, b, w)| (a, b, f64::from(w)))
                .collect();
            Instance { n, edges }
        })
    })
}

fn build(instance: &Instance) -> (Graph<usize>, Vec<NodeId>) {
    let mut graph = Graph::from_weighted_values(0..instance.n);
    let ids = graph.ids().to_vec();
    for &(a, b, w) in &instance.edges {
        graph.add_mutual(ids[a], ids[b], w).unwrap();
    }
    (graph, ids)
}

fn reference(instance: &Instance) -> UnGraph<(), f64> {
    let mut graph = UnGraph::new_undirected();
    for _ in 0..instance.n {
        graph.add_node(());
    }
    for &(a, b, w) in &instance.edges {
        graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), w);
    }
    graph
}

fn hop_distance(instance: &Instance, start: usize, end: usize) -> Option<usize> {
    let mut adjacency = vec![Vec::new(); instance.n];
    for &(a, b, _) in &instance.edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    let mut dist = vec![None; instance.n];
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &v in &adjacency[u] {
            if dist[v].is_none() {
                dist[v] = dist[u].map(|d| d + 1);
                queue.push_back(v);
            }
        }
    }
    dist[end]
}

fn assert_walk(graph: &Graph<usize>, states: &[NodeId], start: NodeId, end: NodeId) {
    assert_eq!(states.first(), Some(&start));
    assert_eq!(states.last(), Some(&end));
    for pair in states.windows(2) {
        assert!(graph.neighbors(pair[0]).unwrap().contains(&pair[1]));
    }
}

proptest! {
    #[test]
    fn test_bfs_finds_fewest_hops(inst in instance(), s in 0usize..12, e in 0usize..12) {
        let (s, e) = (s % inst.n, e % inst.n);
        let (graph, ids) = build(&inst);

        let result = search::bfs(&graph, ids[s], ids[e]).unwrap();
        prop_assert_eq!(result.hops(), hop_distance(&inst, s, e));
        if let Some(states) = result.states() {
            assert_walk(&graph, &states, ids[s], ids[e]);
        }

        // Same graph, same answer.
        let again = search::bfs(&graph, ids[s], ids[e]).unwrap();
        prop_assert_eq!(again.states(), result.states());
    }

    #[test]
    fn test_dfs_reaches_what_bfs_reaches(inst in instance(), s in 0usize..12, e in 0usize..12) {
        let (s, e) = (s % inst.n, e % inst.n);
        let (graph, ids) = build(&inst);

        let deep = search::dfs(&graph, ids[s], ids[e]).unwrap();
        let wide = search::bfs(&graph, ids[s], ids[e]).unwrap();
        prop_assert_eq!(deep.found(), wide.found());
        if let Some(states) = deep.states() {
            assert_walk(&graph, &states, ids[s], ids[e]);
            prop_assert!(deep.hops() >= wide.hops());
        }
    }

    #[test]
    fn test_dijkstra_matches_petgraph(inst in instance(), s in 0usize..12, e in 0usize..12) {
        let (s, e) = (s % inst.n, e % inst.n);
        let (graph, ids) = build(&inst);
        let oracle =
            reference_dijkstra(&reference(&inst), NodeIndex::new(s), None, |edge| *edge.weight());

        let result = search::dijkstra(&graph, ids[s], ids[e]).unwrap();
        prop_assert_eq!(result.cost(), oracle.get(&NodeIndex::new(e)).copied());
        if let Some(states) = result.states() {
            assert_walk(&graph, &states, ids[s], ids[e]);
            let walked: f64 = states
                .windows(2)
                .map(|pair| graph.weight(pair[0], pair[1]).unwrap())
                .sum();
            prop_assert_eq!(Some(walked), result.cost());
        }
    }

    #[test]
    fn test_astar_matches_dijkstra(inst in instance(), s in 0usize..12, e in 0usize..12) {
        let (s, e) = (s % inst.n, e % inst.n);
        let (graph, ids) = build(&inst);

        // Half the true remaining distance never overestimates.
        let to_goal =
            reference_dijkstra(&reference(&inst), NodeIndex::new(e), None, |edge| *edge.weight());
        let estimate = |id: NodeId| {
            to_goal.get(&NodeIndex::new(id.index())).map_or(0.0, |d| d / 2.0)
        };

        let cheapest = search::dijkstra(&graph, ids[s], ids[e]).unwrap();
        let guided = search::astar(&graph, ids[s], ids[e], estimate).unwrap();
        let blind = search::astar(&graph, ids[s], ids[e], |_| 0.0).unwrap();
        prop_assert_eq!(guided.cost(), cheapest.cost());
        prop_assert_eq!(blind.cost(), cheapest.cost());
    }

    #[test]
    fn test_mutual_links_are_symmetric(inst in instance()) {
        let (graph, _) = build(&inst);
        prop_assert!(graph.is_undirected());
        for (id, node) in graph.iter() {
            for &other in node.neighbors() {
                prop_assert_eq!(graph.weight(id, other), graph.weight(other, id));
            }
        }
        prop_assert_eq!(graph.undirected_edge_count(), inst.edges.len());
    }

    #[test]
    fn test_kruskal_builds_minimum_forest(inst in instance()) {
        let (graph, _) = build(&inst);
        let forest = kruskal(&graph).unwrap().unwrap();

        prop_assert_eq!(forest.len(), graph.len());
        prop_assert_eq!(forest.component_count(), graph.component_count());
        prop_assert_eq!(forest.undirected_edge_count(), graph.len() - graph.component_count());
        for &id in forest.ids() {
            prop_assert!(!has_cycle_from(&forest, id).unwrap());
        }

        let oracle: f64 = min_spanning_tree(&reference(&inst))
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();
        prop_assert_eq!(forest.total_weight(), oracle);
    }

    #[test]
    fn test_prim_agrees_with_kruskal(inst in instance()) {
        let (graph, _) = build(&inst);
        let tree = prim(&graph).unwrap();
        if graph.component_count() == 1 {
            let tree = tree.unwrap();
            let forest = kruskal(&graph).unwrap().unwrap();
            prop_assert_eq!(tree.total_weight(), forest.total_weight());
            prop_assert_eq!(tree.undirected_edge_count(), graph.len() - 1);
        } else {
            prop_assert!(tree.is_none());
        }
    }
}
