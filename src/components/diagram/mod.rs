mod catalog;
mod component;
mod layout;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ArchitectureDiagram;
pub use types::{ComponentNode, Connection, DiagramData, Icon, Point, Size, Tint};
