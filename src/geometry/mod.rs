pub mod arcs;

pub use arcs::ArcCollection;
