//! 2D Perlin gradient noise.
//!
//! Classic lattice noise: each integer grid corner carries a pseudo-random
//! gradient from the seeded tables, and a sample blends the four corner
//! contributions of its cell with a quintic fade.

use crate::permutation::{PermutationTables, SeedError};
use crate::vector::Vec2;
use crate::{lerp, quintic, Noise2D};

/// 2D Perlin noise sampler.
///
/// Owns its [`PermutationTables`] exclusively: sampling is `&self` and pure,
/// reseeding is `&mut self` and swaps in a freshly built tables value.
#[derive(Clone, Default)]
pub struct PerlinNoise {
    tables: PermutationTables,
}

impl PerlinNoise {
    /// Create a sampler seeded with [`crate::DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler with the given seed.
    pub fn with_seed(seed: f64) -> Result<Self, SeedError> {
        Ok(Self {
            tables: PermutationTables::build(seed)?,
        })
    }

    /// Reseed the sampler, rebuilding both tables from scratch.
    ///
    /// On error the previous tables are kept.
    pub fn set_seed(&mut self, seed: f64) -> Result<(), SeedError> {
        self.tables = PermutationTables::build(seed)?;
        Ok(())
    }

    /// The tables currently backing this sampler.
    pub fn tables(&self) -> &PermutationTables {
        &self.tables
    }

    /// Gradient contribution of one cell corner.
    ///
    /// `grid` is already masked into 0..=255, so `grid.y + corner.y` is at
    /// most 256 and the doubled permutation table absorbs it; the resulting
    /// gradient index is at most 255 + 256 < 512.
    #[inline]
    fn corner_contribution(&self, grid: (usize, usize), relative: Vec2, corner: (usize, usize)) -> f64 {
        let gradient = self
            .tables
            .grad(grid.0 + corner.0 + self.tables.perm(grid.1 + corner.1));
        gradient.dot2(
            relative.x - corner.0 as f64,
            relative.y - corner.1 as f64,
        )
    }
}

impl Noise2D for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let point = Vec2::new(x, y);
        let grid = point.map(f64::floor);
        let relative = point - grid;

        // Wrap the cell origin into the table's index domain.
        let grid = (
            (grid.x as i64 & 255) as usize,
            (grid.y as i64 & 255) as usize,
        );

        let n00 = self.corner_contribution(grid, relative, (0, 0));
        let n01 = self.corner_contribution(grid, relative, (0, 1));
        let n10 = self.corner_contribution(grid, relative, (1, 0));
        let n11 = self.corner_contribution(grid, relative, (1, 1));

        let fade = relative.map(quintic);
        lerp(lerp(n00, n10, fade.x), lerp(n01, n11, fade.x), fade.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_integer_lattice_points_are_zero() {
        for seed in [1337.0, 42.0] {
            let noise = PerlinNoise::with_seed(seed).unwrap();
            for (x, y) in [(0.0, 0.0), (1.0, 1.0), (5.0, 3.0), (-7.0, 12.0)] {
                assert_eq!(noise.sample(x, y), 0.0, "seed {seed} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_default_seed_reference_values() {
        let noise = PerlinNoise::new();
        assert_eq!(noise.sample(0.0, 0.0), 0.0);
        assert!((noise.sample(0.5, 0.5) - (-0.25)).abs() < EPS);
        assert!((noise.sample(0.25, 0.75) - (-0.016073226928710938)).abs() < EPS);
        assert!((noise.sample(1.5, 2.25) - (-0.064697265625)).abs() < EPS);
        assert!((noise.sample(-1.3, 4.7) - (-0.17415312095999994)).abs() < EPS);
    }

    #[test]
    fn test_seed_42_reference_value() {
        let noise = PerlinNoise::with_seed(42.0).unwrap();
        assert!((noise.sample(0.5, 0.5) - (-0.75)).abs() < EPS);
        assert!((noise.sample(3.7, -2.2) - (-0.2406220684800003)).abs() < EPS);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let a = PerlinNoise::with_seed(7.0).unwrap();
        let b = PerlinNoise::with_seed(7.0).unwrap();
        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.13;
            assert_eq!(a.sample(x, y), b.sample(x, y));
            assert_eq!(a.sample(x, y), a.sample(x, y));
        }
    }

    #[test]
    fn test_reseed_with_same_value_restores_output() {
        let mut noise = PerlinNoise::new();
        let before = noise.sample(2.3, 4.1);
        noise.set_seed(99.0).unwrap();
        assert_ne!(noise.sample(2.3, 4.1), before);
        noise.set_seed(1337.0).unwrap();
        assert_eq!(noise.sample(2.3, 4.1), before);
    }

    #[test]
    fn test_failed_reseed_keeps_previous_tables() {
        let mut noise = PerlinNoise::with_seed(42.0).unwrap();
        let before = noise.sample(0.5, 0.5);
        assert!(noise.set_seed(f64::INFINITY).is_err());
        assert_eq!(noise.sample(0.5, 0.5), before);
    }

    #[test]
    fn test_range_over_random_samples() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        for seed in [1337.0, 42.0, 7.0, 999.0, 123_456.0] {
            let noise = PerlinNoise::with_seed(seed).unwrap();
            for _ in 0..10_000 {
                let x = rng.gen_range(-100.0..100.0);
                let y = rng.gen_range(-100.0..100.0);
                let v = noise.sample(x, y);
                assert!(
                    (-1.5..=1.5).contains(&v),
                    "seed {seed} at ({x}, {y}) gave {v}"
                );
            }
        }
    }

    #[test]
    fn test_top_row_neighbor_lookup_stays_in_bounds() {
        // grid.y masks to 255, so the (_, 1) corners read perm[256]; the
        // doubled table must make that identical to a wrapped lookup.
        let noise = PerlinNoise::new();
        let v = noise.sample(255.5, 255.5);
        assert!(v.is_finite());
        assert!((v - (-0.125)).abs() < EPS);
        // Same cell after wrapping, so the sample must match exactly.
        assert_eq!(noise.sample(255.5, 255.5), noise.sample(511.5, 511.5));
    }

    #[test]
    fn test_smoothness_across_cell_boundary() {
        // C2 continuity: values just left and right of an integer boundary
        // stay close.
        let noise = PerlinNoise::new();
        for i in 0..50 {
            let y = 0.37 + f64::from(i) * 0.11;
            let left = noise.sample(3.0 - 1e-6, y);
            let right = noise.sample(3.0 + 1e-6, y);
            assert!((left - right).abs() < 1e-4, "jump at y={y}");
        }
    }
}
