//! Shared fixtures for the clean tests.

use crate::geometry::ArcCollection;
use crate::topology::{ArcRef, NodeCollection, NodeIndex, Part, Shape};

/// Parts written in the signed-integer convention: `!n` is arc `n` reversed.
pub fn shape(parts: &[&[i64]]) -> Shape {
    parts.iter().map(|ids| refs(ids)).collect()
}

pub fn refs(ids: &[i64]) -> Part {
    ids.iter().map(|&n| ArcRef::from_signed(n)).collect()
}

/// Unit arcs along the x axis: arc `k` runs from `(k, 0)` to `(k + 1, 0)`.
pub fn straight_line(count: usize) -> Vec<Vec<(f64, f64)>> {
    (0..count)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let x = k as f64;
            vec![(x, 0.0), (x + 1.0, 0.0)]
        })
        .collect()
}

pub fn collection(arcs: &[Vec<(f64, f64)>]) -> ArcCollection {
    let slices: Vec<&[(f64, f64)]> = arcs.iter().map(Vec::as_slice).collect();
    ArcCollection::from_xy(&slices)
}

/// Node index that reports the queried reference along with its real
/// connections, as some node index implementations do.
pub struct SelfInclusive(pub NodeCollection);

impl NodeIndex for SelfInclusive {
    fn for_each_connected_arc<F: FnMut(ArcRef)>(&self, arc: ArcRef, mut f: F) {
        f(arc);
        self.0.for_each_connected_arc(arc, f);
    }
}

/// Sorted unsigned arc ids referenced by `shape`.
pub fn arc_multiset(shape: &[Part]) -> Vec<usize> {
    let mut ids: Vec<usize> = shape.iter().flatten().map(|a| a.arc).collect();
    ids.sort_unstable();
    ids
}

#[allow(clippy::unwrap_used)]
pub fn assert_continuous(arcs: &ArcCollection, part: &[ArcRef]) {
    for pair in part.windows(2) {
        let tail = arcs.tail_point(pair[0]).unwrap();
        let head = arcs.head_point(pair[1]).unwrap();
        assert_eq!(tail, head, "{} does not lead into {}", pair[0], pair[1]);
    }
}

pub fn assert_no_duplicates(shape: &[Part]) {
    let mut seen: Vec<ArcRef> = shape.iter().flatten().copied().collect();
    seen.sort_unstable();
    let before = seen.len();
    seen.dedup();
    assert_eq!(before, seen.len(), "duplicated arc reference in {shape:?}");
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
