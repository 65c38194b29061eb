//! Generated data file
//!
//! The visualization loads a single script that defines `cubeCoordinates`,
//! optionally `driverInfo`, `coordinateConfig`, and two helper functions. The
//! file is built as an [`ArtifactDocument`], rendered by [`render_js`], and
//! written with [`write_atomic`].

pub mod document;
pub mod render;
pub mod writer;

pub use document::{ArtifactDocument, PlaybackConfig};
pub use render::render_js;
pub use writer::write_atomic;
