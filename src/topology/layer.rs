use super::arc_ref::ArcRef;

/// A continuous path: the tail of each reference coincides with the head of
/// the next.
pub type Part = Vec<ArcRef>;

/// All parts of one feature.
pub type Shape = Vec<Part>;

/// Kind of geometry held by a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    Polyline,
    Polygon,
}

/// An ordered collection of feature geometries.
///
/// `shapes[i]` belongs to the i-th attribute record; `None` marks a feature
/// without geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub name: Option<String>,
    pub geometry_type: Option<GeometryType>,
    pub shapes: Vec<Option<Shape>>,
}

impl Layer {
    /// Creates an unnamed polyline layer.
    #[must_use]
    pub fn polyline(shapes: Vec<Option<Shape>>) -> Self {
        Self {
            name: None,
            geometry_type: Some(GeometryType::Polyline),
            shapes,
        }
    }

    /// Sets the layer name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of features, including those without geometry.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.shapes.len()
    }

    /// Total number of parts over all features.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.shapes.iter().flatten().map(Vec::len).sum()
    }
}
