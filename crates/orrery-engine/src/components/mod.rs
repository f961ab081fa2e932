pub mod body;
pub mod material;
pub mod node;
pub mod shape;
