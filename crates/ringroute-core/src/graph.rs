//! Graph wrapper using petgraph::UnGraph with a label lookup table

use crate::model::{Leg, Stop};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, HashMap};

/// The transit graph: undirected, weighted, one node per stop label.
///
/// Every leg is stored once and is visible from both ends, so A→B and B→A
/// always carry the same weight.
#[derive(Clone)]
pub struct TransitGraph {
    inner: UnGraph<Stop, Leg>,
    index: HashMap<String, NodeIndex>,
}

impl std::fmt::Debug for TransitGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitGraph")
            .field("stop_count", &self.inner.node_count())
            .field("leg_count", &self.inner.edge_count())
            .finish()
    }
}

impl TransitGraph {
    pub fn new() -> Self {
        TransitGraph {
            inner: UnGraph::default(),
            index: HashMap::new(),
        }
    }

    /// Register a stop if it is not known yet. Returns its index.
    pub fn ensure_stop(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.inner.add_node(Stop::new(label));
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Connect two stops, registering them as needed. A pair that is
    /// already connected has its leg replaced (last write wins).
    pub fn connect(&mut self, a: &str, b: &str, leg: Leg) -> EdgeIndex {
        let a = self.ensure_stop(a);
        let b = self.ensure_stop(b);
        self.inner.update_edge(a, b, leg)
    }

    /// Look up a stop index by label.
    pub fn stop_index(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn stop(&self, idx: NodeIndex) -> Option<&Stop> {
        self.inner.node_weight(idx)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Total number of stops.
    pub fn stop_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of legs.
    pub fn leg_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// The leg between two stops, if any.
    pub fn leg(&self, a: &str, b: &str) -> Option<&Leg> {
        let a = self.stop_index(a)?;
        let b = self.stop_index(b)?;
        self.inner
            .find_edge(a, b)
            .and_then(|e| self.inner.edge_weight(e))
    }

    /// Weight of the leg between two stops, if any.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        self.leg(a, b).map(|leg| leg.weight)
    }

    /// Neighbors of a stop with their legs, ordered by stop insertion.
    /// Self-loops are not reported.
    pub fn neighbors(&self, idx: NodeIndex) -> Vec<(NodeIndex, &Leg)> {
        let mut out: Vec<(NodeIndex, &Leg)> = self
            .inner
            .edges(idx)
            .filter_map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (other != idx).then_some((other, e.weight()))
            })
            .collect();
        out.sort_by_key(|(n, _)| n.index());
        out
    }

    /// Nested-map snapshot: stop → neighbor → weight. Every stop appears
    /// as a key, even without neighbors.
    pub fn adjacency(&self) -> BTreeMap<String, BTreeMap<String, u32>> {
        self.inner
            .node_indices()
            .filter_map(|idx| {
                let stop = self.inner.node_weight(idx)?;
                let neighbors: BTreeMap<String, u32> = self
                    .neighbors(idx)
                    .into_iter()
                    .filter_map(|(n, leg)| {
                        self.inner
                            .node_weight(n)
                            .map(|s| (s.label.clone(), leg.weight))
                    })
                    .collect();
                Some((stop.label.clone(), neighbors))
            })
            .collect()
    }
}

impl Default for TransitGraph {
    fn default() -> Self {
        Self::new()
    }
}
