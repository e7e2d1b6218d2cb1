//! Integration tests for hgdb-traversal
//!
//! Covers the traversal scenarios end to end through both consumption modes,
//! concurrent mutation of a shared graph between steps, and properties over
//! randomly generated adjacency.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use futures::StreamExt;
use hgdb_core::testing::HypergraphFixture;
use hgdb_core::{Hypergraph, NodeId};
use hgdb_traversal::*;
use parking_lot::RwLock;
use proptest::prelude::*;

fn shared(fixture: &HypergraphFixture) -> SharedHypergraph {
    Arc::new(RwLock::new(fixture.hypergraph().clone()))
}

async fn stream_labels(fixture: &HypergraphFixture, start: &str, order: TraversalOrder) -> Vec<String> {
    let cursor = DepthFirst::with_order(shared(fixture), fixture.id(start), order).unwrap();
    let nodes: Vec<NodeId> = cursor.into_stream().unwrap().collect().await;
    fixture.labels(nodes)
}

#[tokio::test]
async fn test_stream_scenarios() {
    let post = TraversalOrder::PostOrder;
    assert_eq!(
        stream_labels(&HypergraphFixture::mutual_star(), "a", post).await,
        ["b", "c", "d", "a"]
    );
    assert_eq!(
        stream_labels(&HypergraphFixture::adjacency_chain(), "a", post).await,
        ["d", "c", "b", "a"]
    );
    assert_eq!(
        stream_labels(&HypergraphFixture::triangle(), "a", post).await,
        ["c", "b", "a"]
    );
    assert_eq!(
        stream_labels(&HypergraphFixture::adjacency_chain(), "a", TraversalOrder::PreOrder).await,
        ["a", "b", "c", "d"]
    );
}

#[tokio::test]
async fn test_stream_fully_connected() {
    let fixture = HypergraphFixture::fully_connected(300);
    let cursor = DepthFirst::new(shared(&fixture), fixture.id("last")).unwrap();
    let mut stream = cursor.into_stream().unwrap();

    let mut seen = HashSet::new();
    while let Some(node) = stream.next().await {
        assert!(seen.insert(node), "{node} emitted twice");
    }
    assert_eq!(seen.len(), 300);
    assert_eq!(stream.join().await.unwrap(), 300);
}

#[tokio::test]
async fn test_writer_interleaves_between_steps() {
    let fixture = HypergraphFixture::adjacency_chain();
    let graph = shared(&fixture);
    let a = fixture.id("a");

    let mut stream = DepthFirst::new(Arc::clone(&graph), a)
        .unwrap()
        .into_stream()
        .unwrap();
    assert_eq!(stream.next().await, Some(fixture.id("d")));

    let e = graph.write().create_adjacent_child(a, "e").unwrap();

    let rest: Vec<NodeId> = stream.collect().await;
    let order = fixture.ids(&["c", "b"]).into_iter().chain([e, a]).collect::<Vec<_>>();
    assert_eq!(rest, order);
}

#[tokio::test]
async fn test_producer_waits_for_the_consumer() {
    let mut fixture = HypergraphFixture::new();
    let g = fixture.root("g");
    let a = fixture.child(g, "a");
    fixture.adjacent_child(a, "x");
    fixture.adjacent_child(a, "y");
    fixture.child(g, "z");
    let graph = shared(&fixture);

    let stream = DepthFirst::new(Arc::clone(&graph), a)
        .unwrap()
        .into_stream()
        .unwrap();

    // Give the producer time to run ahead if it could; only `x` may be pending.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(graph.write().connect(fixture.id("y"), fixture.id("z")).unwrap());

    let nodes: Vec<NodeId> = stream.collect().await;
    assert_eq!(fixture.labels(nodes), ["x", "z", "y", "a"]);
}

#[tokio::test]
async fn test_drop_cancels_producer() {
    let fixture = HypergraphFixture::fully_connected(50);
    let graph = shared(&fixture);

    let mut stream = DepthFirst::new(Arc::clone(&graph), fixture.id("last"))
        .unwrap()
        .into_stream()
        .unwrap();
    assert!(stream.next().await.is_some());
    drop(stream);

    // Only the producer task and this test hold the graph; once the task
    // observes the cancellation it releases its reference.
    for _ in 0..100 {
        if Arc::strong_count(&graph) == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(Arc::strong_count(&graph), 1);
}

#[test]
fn test_blocking_next_outside_runtime() {
    let fixture = HypergraphFixture::mutual_star();
    let runtime = common_runtime::get_runtime().unwrap();

    let mut stream = {
        let _guard = runtime.enter();
        DepthFirst::new(shared(&fixture), fixture.id("a"))
            .unwrap()
            .into_stream()
            .unwrap()
    };

    let mut nodes = Vec::new();
    while let Some(node) = stream.blocking_next() {
        nodes.push(node);
    }
    assert_eq!(fixture.labels(nodes), ["b", "c", "d", "a"]);

    stream.close();
    assert_eq!(stream.blocking_next(), None);
}

#[test]
fn test_invalid_start_is_rejected() {
    let mut other = Hypergraph::new();
    other.create_root("x");
    let foreign = other.create_root("y");

    let graph: SharedHypergraph = Arc::new(RwLock::new(Hypergraph::new()));
    assert!(matches!(
        DepthFirst::new(graph, foreign),
        Err(common_error::HgError::InvalidNode(1))
    ));
}

// =========================================================================
// Property tests
// =========================================================================

/// `size` siblings under one root, with directed edges chosen from `edges`.
///
/// With `acyclic`, every edge points from a lower to a higher creation index.
fn build_graph(size: usize, edges: &[(usize, usize)], acyclic: bool) -> (Hypergraph, Vec<NodeId>) {
    let mut hg = Hypergraph::new();
    let g = hg.create_root("g");
    let ids: Vec<NodeId> = (0..size)
        .map(|i| hg.create_child(g, format!("n{i}")).unwrap())
        .collect();

    for &(from, to) in edges {
        let (from, to) = (from % size, to % size);
        let (from, to) = if acyclic {
            if from == to {
                continue;
            }
            (from.min(to), from.max(to))
        } else {
            (from, to)
        };
        hg.connect(ids[from], ids[to]).unwrap();
    }
    (hg, ids)
}

fn arb_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec((0..size, 0..size), 0..size * 3),
        )
    })
}

fn reachable(hg: &Hypergraph, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in hg.node(node).unwrap().neighbours() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_post_order_on_dags((size, edges) in arb_edges(), start in any::<prop::sample::Index>()) {
        let (hg, ids) = build_graph(size, &edges, true);
        let start = ids[start.index(size)];

        let order: Vec<NodeId> = DepthFirst::new(&hg, start).unwrap().collect();
        let position: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, &node)| (node, i)).collect();

        prop_assert_eq!(position.len(), order.len());
        prop_assert_eq!(position.keys().copied().collect::<HashSet<_>>(), reachable(&hg, start));
        prop_assert_eq!(order.last().copied(), Some(start));
        for &node in &order {
            for &next in hg.node(node).unwrap().neighbours() {
                prop_assert!(position[&next] < position[&node], "{next} after {node}");
            }
        }
    }

    #[test]
    fn prop_exactly_once_on_cyclic_graphs(
        (size, edges) in arb_edges(),
        start in any::<prop::sample::Index>(),
        pre_order in any::<bool>(),
    ) {
        let (hg, ids) = build_graph(size, &edges, false);
        let start = ids[start.index(size)];
        let order = if pre_order { TraversalOrder::PreOrder } else { TraversalOrder::PostOrder };

        let mut cursor = DepthFirst::with_order(&hg, start, order).unwrap();
        let emitted: Vec<NodeId> = cursor.by_ref().collect();
        let distinct: HashSet<NodeId> = emitted.iter().copied().collect();

        prop_assert_eq!(distinct.len(), emitted.len());
        prop_assert_eq!(distinct, reachable(&hg, start));
        prop_assert_eq!(cursor.next_node(), None);
    }

    #[test]
    fn prop_stream_matches_cursor(
        (size, edges) in arb_edges(),
        start in any::<prop::sample::Index>(),
        cancel_after in prop::option::of(0usize..30),
    ) {
        let (hg, ids) = build_graph(size, &edges, false);
        let start = ids[start.index(size)];
        let expected: Vec<NodeId> = DepthFirst::new(&hg, start).unwrap().collect();

        let graph: SharedHypergraph = Arc::new(RwLock::new(hg));
        let received = common_runtime::block_on(async move {
            let mut stream = DepthFirst::new(graph, start).unwrap().into_stream().unwrap();
            let mut received = Vec::new();
            while cancel_after.is_none_or(|n| received.len() < n) {
                match stream.next().await {
                    Some(node) => received.push(node),
                    None => break,
                }
            }
            stream.close();
            assert_eq!(stream.next().await, None);
            received
        })
        .unwrap();

        let delivered = cancel_after.map_or(expected.len(), |n| n.min(expected.len()));
        prop_assert_eq!(&received[..], &expected[..delivered]);
    }
}
