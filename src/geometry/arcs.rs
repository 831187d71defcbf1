use crate::error::TopologyError;
use crate::math::{Bounds2, Point2};
use crate::topology::ArcRef;

/// Shared storage for the arcs of a dataset.
///
/// Vertices of all arcs live in one flat buffer; `offsets[i]..offsets[i + 1]`
/// is the vertex range of arc `i`. Arcs are immutable once the collection is
/// built, so a collection can be shared read-only between worker threads.
#[derive(Debug, Clone, Default)]
pub struct ArcCollection {
    points: Vec<Point2>,
    offsets: Vec<usize>,
}

impl ArcCollection {
    /// Builds a collection from one vertex list per arc. Arc ids follow the
    /// order of `arcs`.
    #[must_use]
    pub fn new(arcs: Vec<Vec<Point2>>) -> Self {
        let total = arcs.iter().map(Vec::len).sum();
        let mut points = Vec::with_capacity(total);
        let mut offsets = Vec::with_capacity(arcs.len() + 1);
        offsets.push(0);
        for arc in arcs {
            points.extend(arc);
            offsets.push(points.len());
        }
        Self { points, offsets }
    }

    /// Builds a collection from `(x, y)` tuples.
    #[must_use]
    pub fn from_xy(arcs: &[&[(f64, f64)]]) -> Self {
        Self::new(
            arcs.iter()
                .map(|arc| arc.iter().map(|&(x, y)| Point2::new(x, y)).collect())
                .collect(),
        )
    }

    /// Number of arcs.
    #[must_use]
    pub fn size(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Returns `true` if the collection holds no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Vertices of `arc` in stored (forward) order.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if `arc` is not in the collection.
    pub fn points(&self, arc: usize) -> Result<&[Point2], TopologyError> {
        if arc >= self.size() {
            return Err(TopologyError::ArcOutOfRange {
                arc,
                count: self.size(),
            });
        }
        Ok(&self.points[self.offsets[arc]..self.offsets[arc + 1]])
    }

    /// First and last vertex of `arc`, or `None` for an arc without vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if `arc` is not in the collection.
    pub fn endpoints(&self, arc: usize) -> Result<Option<(Point2, Point2)>, TopologyError> {
        let pts = self.points(arc)?;
        Ok(pts.first().zip(pts.last()).map(|(a, b)| (*a, *b)))
    }

    /// Coordinate where traversal of `arc` starts.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if the arc is not in the collection.
    pub fn head_point(&self, arc: ArcRef) -> Result<Option<Point2>, TopologyError> {
        Ok(self
            .endpoints(arc.arc)?
            .map(|(first, last)| if arc.forward { first } else { last }))
    }

    /// Coordinate where traversal of `arc` ends.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if the arc is not in the collection.
    pub fn tail_point(&self, arc: ArcRef) -> Result<Option<Point2>, TopologyError> {
        self.head_point(!arc)
    }

    /// Planar length of `arc`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if `arc` is not in the collection.
    pub fn arc_length(&self, arc: usize) -> Result<f64, TopologyError> {
        Ok(self
            .points(arc)?
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum())
    }

    /// Bounding box of `arc`, or `None` for an arc without vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::ArcOutOfRange`] if `arc` is not in the collection.
    pub fn arc_bounds(&self, arc: usize) -> Result<Option<Bounds2>, TopologyError> {
        Ok(Bounds2::from_points(self.points(arc)?))
    }

    /// Bounding box of every vertex in the collection.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.points)
    }
}
