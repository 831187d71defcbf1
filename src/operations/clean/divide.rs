use crate::topology::{ArcRef, NodeIndex, Part, Shape};

/// Cuts every part of `shape` at each internal node that touches anything
/// besides the next arc of the same part.
///
/// The result parts are maximal runs without an internal junction. Empty
/// input parts are dropped, so a feature without arcs comes back as an empty
/// shape.
#[must_use]
pub fn divide_shape_at_nodes<N: NodeIndex>(shape: &[Part], nodes: &N) -> Shape {
    let mut divided = Vec::with_capacity(shape.len());
    for part in shape {
        let mut current = Vec::new();
        for (i, &arc) in part.iter().enumerate() {
            current.push(arc);
            if i + 1 < part.len() && connection_count(nodes, arc) > 1 {
                divided.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            divided.push(current);
        }
    }
    divided
}

fn connection_count<N: NodeIndex>(nodes: &N, arc: ArcRef) -> usize {
    let mut count = 0;
    nodes.for_each_connected_arc(arc, |other| {
        if other != arc {
            count += 1;
        }
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::clean::testing::{collection, shape, straight_line, SelfInclusive};
    use crate::topology::NodeCollection;

    #[test]
    fn uninterrupted_line_stays_whole() {
        let arcs = collection(&straight_line(4));
        let nodes = NodeCollection::new(&arcs);
        let divided = divide_shape_at_nodes(&shape(&[&[0, 1, 2, 3]]), &nodes);
        assert_eq!(divided, shape(&[&[0, 1, 2, 3]]));
    }

    #[test]
    fn branch_cuts_the_path() {
        let mut coords = straight_line(3);
        // arc 3 leaves the end of arc 0
        coords.push(vec![(1.0, 0.0), (1.0, 1.0)]);
        let arcs = collection(&coords);
        let nodes = NodeCollection::new(&arcs);

        let divided = divide_shape_at_nodes(&shape(&[&[0, 1, 2]]), &nodes);
        assert_eq!(divided, shape(&[&[0], &[1, 2]]));
    }

    #[test]
    fn reversed_path_is_cut_at_the_same_node() {
        let mut coords = straight_line(3);
        coords.push(vec![(2.0, 0.0), (2.0, 1.0)]);
        let arcs = collection(&coords);
        let nodes = NodeCollection::new(&arcs);

        let divided = divide_shape_at_nodes(&shape(&[&[!2, !1, !0]]), &nodes);
        assert_eq!(divided, shape(&[&[!2], &[!1, !0]]));
    }

    #[test]
    fn every_junction_cuts() {
        let mut coords = straight_line(4);
        coords.push(vec![(1.0, 0.0), (1.0, 1.0)]);
        coords.push(vec![(3.0, -1.0), (3.0, 0.0)]);
        let arcs = collection(&coords);
        let nodes = NodeCollection::new(&arcs);

        let divided = divide_shape_at_nodes(&shape(&[&[0, 1, 2, 3], &[4]]), &nodes);
        assert_eq!(divided, shape(&[&[0], &[1, 2], &[3], &[4]]));
    }

    #[test]
    fn single_arc_and_empty_parts() {
        let arcs = collection(&straight_line(2));
        let nodes = NodeCollection::new(&arcs);
        assert_eq!(divide_shape_at_nodes(&shape(&[&[1]]), &nodes), shape(&[&[1]]));
        assert!(divide_shape_at_nodes(&shape(&[&[]]), &nodes).is_empty());
        assert!(divide_shape_at_nodes(&[], &nodes).is_empty());
    }

    #[test]
    fn excluded_arcs_do_not_cut() {
        let mut coords = straight_line(2);
        coords.push(vec![(1.0, 0.0), (1.0, 1.0)]);
        let arcs = collection(&coords);
        let nodes = NodeCollection::with_filter(&arcs, |arc| arc < 2);
        assert_eq!(divide_shape_at_nodes(&shape(&[&[0, 1]]), &nodes), shape(&[&[0, 1]]));
    }

    #[test]
    fn self_match_does_not_count_as_connection() {
        let mut coords = straight_line(3);
        coords.push(vec![(1.0, 0.0), (1.0, 1.0)]);
        let arcs = collection(&coords);
        let nodes = SelfInclusive(NodeCollection::new(&arcs));

        assert!(nodes.connected_arcs(ArcRef::fwd(1)).contains(&ArcRef::fwd(1)));
        let divided = divide_shape_at_nodes(&shape(&[&[0, 1, 2]]), &nodes);
        assert_eq!(divided, shape(&[&[0], &[1, 2]]));
    }
}
