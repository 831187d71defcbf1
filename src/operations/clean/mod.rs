mod combine;
mod divide;
mod extend;
#[cfg(test)]
mod testing;

pub use combine::combine_contiguous_parts;
pub use divide::divide_shape_at_nodes;
pub use extend::{extend_polyline_part, Terminal};

use rayon::prelude::*;

use crate::error::{OperationError, Result, TopologyError};
use crate::geometry::ArcCollection;
use crate::topology::{
    arc_presence, GeometryType, IdLookupIndex, Layer, NodeCollection, NodeIndex, Part, Shape,
};

/// Settings for [`CleanPolylines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Process features on the rayon thread pool.
    pub parallel: bool,
    /// Recombine parts after dividing them. When `false` only the division
    /// step runs.
    pub combine_parts: bool,
    /// Build the node index from the arcs the layer references only, so arcs
    /// owned by other layers never create junctions.
    pub filter_arcs: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            combine_parts: true,
            filter_arcs: true,
        }
    }
}

impl CleanOptions {
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_combine_parts(mut self, combine_parts: bool) -> Self {
        self.combine_parts = combine_parts;
        self
    }

    #[must_use]
    pub fn with_filter_arcs(mut self, filter_arcs: bool) -> Self {
        self.filter_arcs = filter_arcs;
        self
    }
}

/// Rebuilds the parts of every feature in a polyline layer.
///
/// Each feature is first divided at every node where its path touches other
/// geometry, then parts that meet end to end without any other terminal of
/// the same feature at the node are joined again. Arc membership of every
/// feature is preserved; only the grouping into parts changes. Features
/// without geometry are passed through.
#[derive(Debug, Clone, Default)]
pub struct CleanPolylines {
    options: CleanOptions,
}

impl CleanPolylines {
    /// Creates a new clean operation.
    #[must_use]
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, building the node index from `arcs`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a point or polygon layer and
    /// `OperationError::Feature` if a feature's topology is inconsistent. The
    /// layer is left unchanged on error.
    pub fn execute(&self, layer: &mut Layer, arcs: &ArcCollection) -> Result<()> {
        check_geometry_type(layer)?;
        let nodes = if self.options.filter_arcs {
            let present = arc_presence(&layer.shapes, arcs.size());
            NodeCollection::with_filter(arcs, |arc| present.get(arc).copied().unwrap_or(false))
        } else {
            NodeCollection::new(arcs)
        };
        self.run(layer, &nodes, arcs.size())
    }

    /// Executes the operation against a prebuilt node index.
    ///
    /// # Errors
    ///
    /// Same as [`CleanPolylines::execute`].
    pub fn execute_with_nodes<N: NodeIndex + Sync>(&self, layer: &mut Layer, nodes: &N) -> Result<()> {
        check_geometry_type(layer)?;
        let arc_count = layer
            .shapes
            .iter()
            .flatten()
            .flatten()
            .flatten()
            .map(|arc| arc.arc + 1)
            .max()
            .unwrap_or(0);
        self.run(layer, nodes, arc_count)
    }

    /// Cleans every feature; `arc_count` only sizes the per-worker index.
    fn run<N: NodeIndex + Sync>(&self, layer: &mut Layer, nodes: &N, arc_count: usize) -> Result<()> {
        tracing::debug!(
            layer = layer.name.as_deref().unwrap_or("<unnamed>"),
            features = layer.feature_count(),
            parts = layer.part_count(),
            parallel = self.options.parallel,
            "cleaning polyline layer"
        );

        let cleaned: Result<Vec<Option<Shape>>> = if self.options.parallel {
            layer
                .shapes
                .par_iter()
                .enumerate()
                .map_init(
                    || IdLookupIndex::new(arc_count),
                    |index, (feature, shape)| self.clean_feature(feature, shape.as_deref(), nodes, index),
                )
                .collect()
        } else {
            let mut index = IdLookupIndex::new(arc_count);
            layer
                .shapes
                .iter()
                .enumerate()
                .map(|(feature, shape)| self.clean_feature(feature, shape.as_deref(), nodes, &mut index))
                .collect()
        };
        layer.shapes = cleaned?;

        tracing::debug!(parts = layer.part_count(), "cleaned polyline layer");
        Ok(())
    }

    fn clean_feature<N: NodeIndex>(
        &self,
        feature: usize,
        shape: Option<&[Part]>,
        nodes: &N,
        index: &mut IdLookupIndex,
    ) -> Result<Option<Shape>> {
        let Some(shape) = shape else {
            return Ok(None);
        };
        self.clean_shape(shape, nodes, index)
            .map(Some)
            .map_err(|source| {
                tracing::error!(feature, error = %source, "topology error");
                OperationError::Feature { feature, source }.into()
            })
    }

    fn clean_shape<N: NodeIndex>(
        &self,
        shape: &[Part],
        nodes: &N,
        index: &mut IdLookupIndex,
    ) -> std::result::Result<Shape, TopologyError> {
        let divided = divide_shape_at_nodes(shape, nodes);
        if self.options.combine_parts {
            combine_contiguous_parts(divided, nodes, index)
        } else {
            Ok(divided)
        }
    }
}

/// Cleans `layer` in place with default options.
///
/// # Errors
///
/// See [`CleanPolylines::execute`].
pub fn clean_polyline_layer_geometry(layer: &mut Layer, arcs: &ArcCollection) -> Result<()> {
    CleanPolylines::default().execute(layer, arcs)
}

fn check_geometry_type(layer: &Layer) -> Result<()> {
    match layer.geometry_type {
        None | Some(GeometryType::Polyline) => Ok(()),
        Some(other) => Err(OperationError::InvalidInput(format!(
            "expected a polyline layer, found {other:?}"
        ))
        .into()),
    }
}
