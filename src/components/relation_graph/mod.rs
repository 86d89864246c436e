mod component;
pub mod config;
mod debounce;
mod error;
mod render;
pub mod scale;
mod scene;
mod state;
mod types;

pub use component::RelationGraph;
pub use types::GraphDocument;
