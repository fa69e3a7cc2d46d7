//! 2D simplex noise.
//!
//! Triangle-lattice variant of gradient noise: input space is skewed so each
//! unit cell splits into two equilateral simplices, and a sample sums a
//! radial falloff contribution from the three surrounding corners instead of
//! interpolating four. Shares the seeded tables with the Perlin sampler.

use crate::permutation::{PermutationTables, SeedError};
use crate::Noise2D;

/// 2D simplex noise sampler.
#[derive(Clone, Default)]
pub struct SimplexNoise {
    tables: PermutationTables,
}

impl SimplexNoise {
    /// Skewing factor for 2D: `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.3660254037844386;
    /// Unskewing factor for 2D: `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.21132486540518713;

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

    /// Radial falloff contribution of one simplex corner.
    #[inline]
    fn corner_contribution(&self, gradient_index: usize, x: f64, y: f64) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let t2 = t * t;
            t2 * t2 * self.tables.grad(gradient_index).dot2(x, y)
        }
    }
}

impl Noise2D for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew the input space to find the containing simplex cell.
        let s = (x + y) * Self::F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew the cell origin and measure the offset from it.
        let t = (i + j) * Self::G2;
        let x0 = x - i + t;
        let y0 = y - j + t;

        // The unit cell splits into two triangles; pick the one we're in.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let gi = (i as i64 & 255) as usize;
        let gj = (j as i64 & 255) as usize;

        let g0 = gi + self.tables.perm(gj);
        let g1 = gi + i1 + self.tables.perm(gj + j1);
        let g2 = gi + 1 + self.tables.perm(gj + 1);

        let n0 = self.corner_contribution(g0, x0, y0);
        let n1 = self.corner_contribution(g1, x1, y1);
        let n2 = self.corner_contribution(g2, x2, y2);

        // Scale so the result fits roughly in [-1, 1].
        70.0 * (n0 + n1 + n2)
    }
}
