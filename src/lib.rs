pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod overlay;
pub mod renderer;
pub mod sprite;
pub mod texture;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use sprite::{QuadMesh, Sprite, UvRect};
