//! First-person movement controller: grounded running, jumping, air control,
//! dashing, wall jumps and wall runs, driven by avian3d spatial queries.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
