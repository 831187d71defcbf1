use thiserror::Error;

use crate::topology::ArcRef;

/// Top-level error type for the polyclean engine.
#[derive(Debug, Error)]
pub enum PolycleanError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Internal-consistency errors raised while reading or rewriting arc topology.
///
/// None of these are recoverable: they point at corrupt upstream node data
/// or a bug in the engine, and retrying would reproduce them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("indexing inconsistency: terminal {terminal} is neither head nor tail of its part")]
    IndexInconsistency { terminal: ArcRef },

    #[error("no index entry for arc reference {0}")]
    MissingIndexEntry(ArcRef),

    #[error("arc {arc} is out of range (arc count {count})")]
    ArcOutOfRange { arc: usize, count: usize },
}

/// Errors related to layer operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("feature {feature}: {source}")]
    Feature {
        feature: usize,
        #[source]
        source: TopologyError,
    },
}

/// Convenience type alias for results using [`PolycleanError`].
pub type Result<T> = std::result::Result<T, PolycleanError>;
