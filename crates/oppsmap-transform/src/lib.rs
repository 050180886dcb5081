pub mod engine;
pub mod index;

pub use engine::map_concepts;
pub use index::KeyIndex;
