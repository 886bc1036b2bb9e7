//! Uniform-cost shortest path search over the transit graph
//!
//! All leg weights are non-negative, so a min-heap ordered by accumulated
//! cost settles every stop at its optimal cost the first time it is popped
//! with a non-stale entry. Paths are rebuilt from predecessor links.
//!
//! Ties are broken deterministically: entries with equal cost leave the heap
//! in the order they were pushed, and neighbors are relaxed in stop
//! insertion order.

use crate::error::RouteError;
use crate::graph::TransitGraph;
use crate::model::Route;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct State {
    cost: u32,
    seq: u64,
    node: NodeIndex,
}

// Reversed so BinaryHeap pops the cheapest, then the oldest, entry first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Predecessor link: the stop we came from and whether the leg was a transfer.
#[derive(Copy, Clone, Debug)]
struct Via {
    from: NodeIndex,
    transfer: bool,
}

/// Find a minimum-cost route, or `None` when the goal is unreachable or
/// either stop is unknown.
pub fn find_route(graph: &TransitGraph, start: &str, goal: &str) -> Option<Route> {
    plan_route(graph, start, goal).ok()
}

/// Like [`find_route`], but says why no route was produced.
pub fn plan_route(graph: &TransitGraph, start: &str, goal: &str) -> Result<Route, RouteError> {
    let start_idx = graph
        .stop_index(start)
        .ok_or_else(|| RouteError::UnknownStop(start.to_string()))?;
    let goal_idx = graph
        .stop_index(goal)
        .ok_or_else(|| RouteError::UnknownStop(goal.to_string()))?;

    let mut best: HashMap<NodeIndex, u32> = HashMap::new();
    let mut prev: HashMap<NodeIndex, Via> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    best.insert(start_idx, 0);
    heap.push(State {
        cost: 0,
        seq,
        node: start_idx,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        if cost > *best.get(&node).unwrap_or(&u32::MAX) {
            continue;
        }

        if node == goal_idx {
            let route = reconstruct(graph, &prev, start_idx, goal_idx, cost);
            tracing::debug!(
                "Route {} -> {} found: cost {}, {} hops",
                start,
                goal,
                route.cost,
                route.hops()
            );
            return Ok(route);
        }

        for (neighbor, leg) in graph.neighbors(node) {
            let candidate = cost.saturating_add(leg.weight);
            if candidate < *best.get(&neighbor).unwrap_or(&u32::MAX) {
                best.insert(neighbor, candidate);
                prev.insert(
                    neighbor,
                    Via {
                        from: node,
                        transfer: leg.is_transfer(),
                    },
                );
                seq += 1;
                heap.push(State {
                    cost: candidate,
                    seq,
                    node: neighbor,
                });
            }
        }
    }

    tracing::debug!("No route {} -> {} after settling {} stops", start, goal, best.len());
    Err(RouteError::NoRoute {
        from: start.to_string(),
        to: goal.to_string(),
    })
}

fn reconstruct(
    graph: &TransitGraph,
    prev: &HashMap<NodeIndex, Via>,
    start: NodeIndex,
    goal: NodeIndex,
    cost: u32,
) -> Route {
    let mut nodes = vec![goal];
    let mut transfers = 0;
    let mut current = goal;

    while current != start {
        let Some(via) = prev.get(&current) else {
            break;
        };
        if via.transfer {
            transfers += 1;
        }
        current = via.from;
        nodes.push(current);
    }
    nodes.reverse();

    let stops = nodes
        .into_iter()
        .filter_map(|idx| graph.stop(idx).map(|s| s.label.clone()))
        .collect();

    Route {
        stops,
        cost,
        transfers,
    }
}
