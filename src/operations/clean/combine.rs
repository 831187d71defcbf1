use crate::error::TopologyError;
use crate::topology::{ArcRef, IdLookupIndex, NodeIndex, Part, Shape};

use super::extend::{extend_polyline_part, other_terminal, part_terminals};

/// Merges parts of one feature that meet end to end at a node where no other
/// terminal of the same feature is present.
///
/// Arcs of other features at the node do not block a merge: only this
/// feature's own terminals are counted. A node touched by three or more of
/// the feature's terminals stays a cut. Surviving parts keep their relative
/// order, and a part that would be joined to itself (a ring assembled from
/// several parts) is left open at the closing node.
///
/// `index` is used as scratch space and is cleared before returning, also on
/// error.
///
/// # Errors
///
/// Returns a [`TopologyError`] if the terminal index becomes inconsistent
/// with the parts it describes.
pub fn combine_contiguous_parts<N: NodeIndex>(
    parts: Shape,
    nodes: &N,
    index: &mut IdLookupIndex,
) -> Result<Shape, TopologyError> {
    if parts.len() < 2 {
        return Ok(parts);
    }

    let terminals: Vec<Option<[ArcRef; 2]>> = parts.iter().map(|p| part_terminals(p)).collect();
    for (i, ends) in terminals.iter().enumerate() {
        for &terminal in ends.iter().flatten() {
            index.set_id(terminal, i);
        }
    }

    let mut slots: Vec<Option<Part>> = parts.into_iter().map(Some).collect();
    let merged = merge_terminals(&mut slots, &terminals, nodes, index);
    index.clear();
    merged?;

    Ok(slots.into_iter().flatten().collect())
}

fn merge_terminals<N: NodeIndex>(
    slots: &mut [Option<Part>],
    terminals: &[Option<[ArcRef; 2]>],
    nodes: &N,
    index: &mut IdLookupIndex,
) -> Result<(), TopologyError> {
    for (part_id, ends) in terminals.iter().enumerate() {
        for &terminal in ends.iter().flatten() {
            merge_at_terminal(slots, nodes, index, part_id, terminal)?;
        }
    }
    Ok(())
}

/// Tries to join the part owning `terminal` with the single other part of
/// the feature that has a terminal at the same node.
///
/// `part_id` is the position of the part the terminal originally belonged
/// to. Each mergeable pair is handled once, from the side with the larger
/// position.
fn merge_at_terminal<N: NodeIndex>(
    slots: &mut [Option<Part>],
    nodes: &N,
    index: &mut IdLookupIndex,
    part_id: usize,
    terminal: ArcRef,
) -> Result<(), TopologyError> {
    let owner = index.get_id(terminal)?;
    let mut joins = 0;
    let mut partner = None;
    nodes.for_each_connected_arc(terminal, |arc| {
        if arc == terminal {
            return;
        }
        if let Ok(partner_id) = index.get_id(arc) {
            joins += 1;
            partner = Some((arc, partner_id));
        }
    });

    let Some((partner_terminal, partner_id)) = partner else {
        return Ok(());
    };
    if joins != 1 || part_id <= partner_id {
        return Ok(());
    }
    if owner == partner_id {
        tracing::trace!(part = owner, %terminal, "leaving ring open");
        return Ok(());
    }

    let absorbed = slots
        .get_mut(owner)
        .and_then(Option::take)
        .ok_or(TopologyError::MissingIndexEntry(terminal))?;
    let far_end = other_terminal(&absorbed, terminal)?;
    let dest = slots
        .get_mut(partner_id)
        .and_then(Option::as_mut)
        .ok_or(TopologyError::MissingIndexEntry(partner_terminal))?;
    extend_polyline_part(dest, partner_terminal, absorbed, terminal)?;

    tracing::trace!(from = owner, into = partner_id, %terminal, "merged parts");
    index.set_id(far_end, partner_id);
    index.remove(terminal);
    index.remove(partner_terminal);
    Ok(())
}
