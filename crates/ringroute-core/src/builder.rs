//! Builds the transit graph from declared circles and intersections

use crate::graph::TransitGraph;
use crate::model::{Leg, Network};

/// Build the undirected weighted graph for a network.
///
/// Circle legs go in first, then intersection transfers, so a pair that is
/// both adjacent on a circle and common to an intersection ends up as a
/// zero-cost transfer. Never fails: empty input gives an empty graph.
pub fn build_graph(network: &Network) -> TransitGraph {
    let mut graph = TransitGraph::new();

    for circle in network.effective_circles() {
        for (current, next) in circle.segments() {
            if current == next {
                // Single-stop circle (or a repeated label): register, skip the self-loop.
                graph.ensure_stop(current);
                continue;
            }
            graph.connect(current, next, Leg::ride(&circle.name));
        }
        tracing::debug!("Added circle {} with {} stops", circle.name, circle.stops.len());
    }

    for intersection in &network.intersections {
        for stop in &intersection.common {
            graph.ensure_stop(stop);
            for other in &intersection.common {
                if stop != other {
                    graph.connect(stop, other, Leg::transfer());
                }
            }
        }
        tracing::debug!(
            "Linked {} and {} through {} common stops",
            intersection.first,
            intersection.second,
            intersection.common.len()
        );
    }

    tracing::info!(
        "Built graph with {} stops, {} legs",
        graph.stop_count(),
        graph.leg_count()
    );
    graph
}
