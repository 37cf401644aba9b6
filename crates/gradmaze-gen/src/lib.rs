//! World generators for the GradMaze environment.
//!
//! A [`WorldGenerator`] turns a [`MazeConfig`](gradmaze_core::MazeConfig)
//! into a [`MazeLayout`] and submits it to the engine through the
//! [`WorldBuilder`](gradmaze_core::WorldBuilder) interface once per reset.
//!
//! [`GradientMaze`] is the reference generator: a brick chamber carved
//! into a plus shape by four gradient-textured arms, with the agent
//! spawned at the junction.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fingerprint;
pub mod generator;
pub mod gradient_maze;

pub use fingerprint::layout_fingerprint;
pub use generator::{submit_layout, MazeLayout, WorldGenerator};
pub use gradient_maze::GradientMaze;
