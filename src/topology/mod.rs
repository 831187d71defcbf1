pub mod arc_ref;
pub mod id_lookup;
pub mod layer;
pub mod nodes;
pub mod path;

pub use arc_ref::ArcRef;
pub use id_lookup::IdLookupIndex;
pub use layer::{GeometryType, Layer, Part, Shape};
pub use nodes::{NodeCollection, NodeIndex};
pub use path::{arc_presence, for_each_shape_part, reverse_path};
