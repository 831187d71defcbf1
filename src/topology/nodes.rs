use std::collections::HashMap;

use crate::geometry::ArcCollection;
use crate::math::Point2;

use super::arc_ref::ArcRef;

/// Connectivity of arc endpoints.
///
/// A query for `arc` concerns the coordinate where `arc` ends (its tail). It
/// reports every other reference that also ends at that coordinate, oriented
/// so that it points into the node: an arc whose last vertex is there is
/// reported forward, an arc whose first vertex is there is reported reversed.
/// Implementations may include `arc` itself; callers skip it.
pub trait NodeIndex {
    /// Calls `f` once per reference connected at the tail of `arc`, in a stable
    /// order.
    fn for_each_connected_arc<F: FnMut(ArcRef)>(&self, arc: ArcRef, f: F);

    /// Materialized form of [`NodeIndex::for_each_connected_arc`].
    fn connected_arcs(&self, arc: ArcRef) -> Vec<ArcRef> {
        let mut arcs = Vec::new();
        self.for_each_connected_arc(arc, |a| arcs.push(a));
        arcs
    }
}

/// Node index built from exact coincidence of arc endpoints.
#[derive(Debug, Clone, Default)]
pub struct NodeCollection {
    /// Node id per [`ArcRef::slot`]; `None` for arcs excluded or without vertices.
    slot_nodes: Vec<Option<usize>>,
    /// References ending at each node, in ascending slot order.
    nodes: Vec<Vec<ArcRef>>,
}

impl NodeCollection {
    /// Indexes the endpoints of every arc in `arcs`.
    #[must_use]
    pub fn new(arcs: &ArcCollection) -> Self {
        Self::with_filter(arcs, |_| true)
    }

    /// Indexes the endpoints of the arcs for which `filter` returns `true`.
    /// Excluded arcs neither create nor join nodes.
    #[must_use]
    pub fn with_filter<F: Fn(usize) -> bool>(arcs: &ArcCollection, filter: F) -> Self {
        let mut slot_nodes = vec![None; arcs.size() * 2];
        let mut nodes: Vec<Vec<ArcRef>> = Vec::new();
        let mut by_point: HashMap<PointKey, usize> = HashMap::new();

        for arc in (0..arcs.size()).filter(|&a| filter(a)) {
            let Ok(Some((first, last))) = arcs.endpoints(arc) else {
                continue;
            };
            for (end, point) in [(ArcRef::rev(arc), first), (ArcRef::fwd(arc), last)] {
                let node = *by_point.entry(PointKey::from_point(&point)).or_insert_with(|| {
                    nodes.push(Vec::new());
                    nodes.len() - 1
                });
                nodes[node].push(end);
                slot_nodes[end.slot()] = Some(node);
            }
        }

        tracing::trace!(arcs = arcs.size(), nodes = nodes.len(), "built node index");
        Self { slot_nodes, nodes }
    }

    /// Number of distinct endpoint coordinates.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of references ending at the tail of `arc`, including `arc`.
    /// Zero if the arc is not indexed.
    #[must_use]
    pub fn degree(&self, arc: ArcRef) -> usize {
        self.node_of(arc).map_or(0, |node| self.nodes[node].len())
    }

    fn node_of(&self, arc: ArcRef) -> Option<usize> {
        self.slot_nodes.get(arc.slot()).copied().flatten()
    }
}

impl NodeIndex for NodeCollection {
    fn for_each_connected_arc<F: FnMut(ArcRef)>(&self, arc: ArcRef, mut f: F) {
        let Some(node) = self.node_of(arc) else {
            return;
        };
        for &other in &self.nodes[node] {
            if other != arc {
                f(other);
            }
        }
    }
}

/// Hash key for exact coordinate equality. `-0.0` and `0.0` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    fn from_point(p: &Point2) -> Self {
        Self {
            x: (p.x + 0.0).to_bits(),
            y: (p.y + 0.0).to_bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three arcs meeting at (1, 0): arc 0 ends there, arcs 1 and 2 start there.
    fn fork() -> ArcCollection {
        ArcCollection::from_xy(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(1.0, 0.0), (2.0, 0.0)],
            &[(1.0, 0.0), (1.0, 1.0)],
        ])
    }

    #[test]
    fn connected_arcs_point_into_node() {
        let nodes = NodeCollection::new(&fork());
        assert_eq!(
            nodes.connected_arcs(ArcRef::fwd(0)),
            vec![ArcRef::rev(1), ArcRef::rev(2)]
        );
        assert_eq!(
            nodes.connected_arcs(ArcRef::rev(1)),
            vec![ArcRef::fwd(0), ArcRef::rev(2)]
        );
        assert_eq!(nodes.degree(ArcRef::fwd(0)), 3);
    }

    #[test]
    fn dangling_end_has_no_connections() {
        let nodes = NodeCollection::new(&fork());
        assert!(nodes.connected_arcs(ArcRef::rev(0)).is_empty());
        assert!(nodes.connected_arcs(ArcRef::fwd(1)).is_empty());
        assert_eq!(nodes.degree(ArcRef::fwd(1)), 1);
        assert_eq!(nodes.node_count(), 4);
    }

    #[test]
    fn filter_excludes_arcs() {
        let nodes = NodeCollection::with_filter(&fork(), |arc| arc != 2);
        assert_eq!(nodes.connected_arcs(ArcRef::fwd(0)), vec![ArcRef::rev(1)]);
        assert_eq!(nodes.degree(ArcRef::fwd(2)), 0);
        assert!(nodes.connected_arcs(ArcRef::rev(2)).is_empty());
    }

    #[test]
    fn closed_arc_connects_to_itself_reversed() {
        let arcs = ArcCollection::from_xy(&[&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]]);
        let nodes = NodeCollection::new(&arcs);
        assert_eq!(nodes.connected_arcs(ArcRef::fwd(0)), vec![ArcRef::rev(0)]);
        assert_eq!(nodes.node_count(), 1);
    }

    #[test]
    fn signed_zero_coordinates_coincide() {
        let arcs = ArcCollection::from_xy(&[&[(5.0, 5.0), (-0.0, 0.0)], &[(0.0, -0.0), (1.0, 1.0)]]);
        let nodes = NodeCollection::new(&arcs);
        assert_eq!(nodes.connected_arcs(ArcRef::fwd(0)), vec![ArcRef::rev(1)]);
    }

    #[test]
    fn unknown_arc_is_ignored() {
        let nodes = NodeCollection::new(&fork());
        assert!(nodes.connected_arcs(ArcRef::fwd(99)).is_empty());
    }
}
