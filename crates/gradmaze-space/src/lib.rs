//! Spaces and floor-plan topology for GradMaze.
//!
//! Two concerns live here:
//!
//! - **Gym-style spaces**: the [`ActionSpace`] (three discrete actions) and
//!   the [`ObservationSpace`] (`height × width × 3` bytes), both behind the
//!   [`Space`] trait for membership tests and seeded sampling.
//! - **Topology**: rectangle adjacency queries used to check that a room
//!   layout is a connected cross ([`topology::verify_cross`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod space;
pub mod topology;

pub use error::SpaceError;
pub use space::{ActionSpace, ObservationSpace, Space};
pub use topology::{
    boundary_contacts, common_point, intersection, is_connected, verify_cross, Heading,
};
