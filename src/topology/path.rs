use super::arc_ref::ArcRef;
use super::layer::Shape;

/// Reverses a path in place: the order of references is reversed and every
/// reference is flipped, so the result traces the same line backwards.
pub fn reverse_path(path: &mut [ArcRef]) {
    path.reverse();
    for arc in path.iter_mut() {
        *arc = !*arc;
    }
}

/// Calls `f` with the index and references of every part of `shape`.
pub fn for_each_shape_part<F: FnMut(usize, &[ArcRef])>(shape: &Shape, mut f: F) {
    for (i, part) in shape.iter().enumerate() {
        f(i, part);
    }
}

/// Flags the arcs referenced by any of `shapes`, in either direction.
///
/// The result has at least `arc_count` entries; references beyond it extend
/// the table.
#[must_use]
pub fn arc_presence(shapes: &[Option<Shape>], arc_count: usize) -> Vec<bool> {
    let mut present = vec![false; arc_count];
    for shape in shapes.iter().flatten() {
        for_each_shape_part(shape, |_, part| {
            for arc in part {
                if arc.arc >= present.len() {
                    present.resize(arc.arc + 1, false);
                }
                present[arc.arc] = true;
            }
        });
    }
    present
}
