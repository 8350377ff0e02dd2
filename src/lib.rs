//! Tetrion (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, tests and
//! benches can write `tetrion::core::Game` instead of depending on each
//! crate separately.

pub use tetrion_core as core;
pub use tetrion_input as input;
pub use tetrion_runtime as runtime;
pub use tetrion_term as term;
pub use tetrion_types as types;
