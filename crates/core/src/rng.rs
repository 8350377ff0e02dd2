//! RNG module - random shape selection
//!
//! Each spawn picks one of the seven shapes uniformly at random. The source is
//! owned by the game rather than global, so a seeded game always produces the
//! same piece sequence (tests rely on this).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Shape;

/// Seedable uniform shape generator
#[derive(Debug, Clone)]
pub struct ShapeRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl ShapeRng {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Draw the next shape.
    pub fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.rng.random_range(0..Shape::ALL.len())]
    }

    /// Seed this generator was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for ShapeRng {
    fn default() -> Self {
        Self::from_os()
    }
}
