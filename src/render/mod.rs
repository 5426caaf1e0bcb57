//! Pure preview rendering: state in, scene and SVG out

pub mod geometry;
mod scene;
mod svg;

pub use scene::PreviewScene;
