//! Seeded 2D gradient noise.
//!
//! This crate provides deterministic 2D Perlin and simplex noise built on a
//! seeded permutation table. The same seed always produces the same gradient
//! field, so noise values are byte-identical across runs and platforms.
//!
//! # Example
//!
//! ```
//! use ruido::{Noise2D, PerlinNoise};
//!
//! let noise = PerlinNoise::new();
//! let value = noise.sample(0.5, 0.5);
//! assert!((-1.5..=1.5).contains(&value));
//!
//! // Map to a display intensity in [0, 255].
//! let intensity = (noise.sample_01(0.5, 0.5) * 255.0) as u8;
//! # let _ = intensity;
//! ```
//!
//! # Reseeding
//!
//! Reseeding rebuilds the whole permutation table; a renderer that wants a
//! fresh field every frame calls [`PerlinNoise::set_seed`] between grids:
//!
//! ```
//! use ruido::{Noise2D, PerlinNoise};
//!
//! let mut noise = PerlinNoise::new();
//! for frame in 1..4u32 {
//!     noise.set_seed(f64::from(frame)).unwrap();
//!     for y in 0..8 {
//!         for x in 0..8 {
//!             let _ = noise.sample(f64::from(x) * 0.25, f64::from(y) * 0.25);
//!         }
//!     }
//! }
//! ```
//!
//! Samplers take `&self` to sample and `&mut self` to reseed, so sharing one
//! instance across threads requires external synchronization for reseeds.
//! Cheaper: give each thread its own sampler (they are `Clone`).

pub mod permutation;
pub mod perlin;
pub mod simplex;
pub mod vector;

pub use permutation::{PermutationTables, SeedError, DEFAULT_SEED, GRADIENTS};
pub use perlin::PerlinNoise;
pub use simplex::SimplexNoise;
pub use vector::{Grad, Vec2};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    ///
    /// Returns a value approximately in [-1, 1]. Results for non-finite
    /// coordinates are undefined.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample the noise and normalize to the [0, 1] range.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}

/// Quintic fade curve `t^3 * (t * (t * 6 - 15) + 10)`.
///
/// First and second derivatives vanish at t = 0 and t = 1, giving
/// C2-continuous noise across cell boundaries.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `(1 - t) * a + t * b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}
