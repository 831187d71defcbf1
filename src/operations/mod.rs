pub mod clean;

pub use clean::{clean_polyline_layer_geometry, CleanOptions, CleanPolylines};
