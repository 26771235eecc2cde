mod component;
mod config;
mod degree;
mod interaction;
mod legend;
mod render;
pub mod scale;
mod scene;
mod simulation;
mod state;
mod tooltip;
mod types;

pub use component::AuthorNetwork;
pub use types::GraphData;
