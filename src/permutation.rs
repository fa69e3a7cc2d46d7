//! Seeded permutation and gradient tables.
//!
//! A [`PermutationTables`] value is built once per seed by XOR-scrambling a
//! fixed base permutation with the seed's bytes. Both derived tables are
//! doubled to 512 entries so neighbor lookups at `index + 1` never need
//! wraparound arithmetic. The value is immutable after construction;
//! reseeding means building a fresh value.

use thiserror::Error;

use crate::vector::Grad;

/// Seed used when the caller does not supply one (or supplies zero).
pub const DEFAULT_SEED: f64 = 1337.0;

/// The fixed 12-vector gradient set: midpoints of a cube's edges.
///
/// Every component is in {-1, 0, 1} and each vector has exactly one zero
/// component.
pub const GRADIENTS: [Grad; 12] = [
    Grad::new(1.0, 1.0, 0.0),
    Grad::new(-1.0, 1.0, 0.0),
    Grad::new(1.0, -1.0, 0.0),
    Grad::new(-1.0, -1.0, 0.0),
    Grad::new(1.0, 0.0, 1.0),
    Grad::new(-1.0, 0.0, 1.0),
    Grad::new(1.0, 0.0, -1.0),
    Grad::new(-1.0, 0.0, -1.0),
    Grad::new(0.0, 1.0, 1.0),
    Grad::new(0.0, -1.0, 1.0),
    Grad::new(0.0, 1.0, -1.0),
    Grad::new(0.0, -1.0, -1.0),
];

/// Ken Perlin's reference base permutation of 0..=255.
const BASE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Errors from seed validation.
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("seed must be finite, got {0}")]
    NonFiniteSeed(f64),
}

/// Immutable seeded lookup tables shared by the samplers.
///
/// Holds the scaled seed, the 512-entry extended permutation table, and the
/// parallel 512-entry gradient table. Entries at `i` and `i + 256` are equal
/// for `i < 256`, so an index of up to 256 plus a permutation value (at most
/// 255) stays in bounds without masking.
#[derive(Clone)]
pub struct PermutationTables {
    seed: i32,
    perm: [u8; 512],
    grads: [Grad; 512],
}

impl PermutationTables {
    /// Build tables for the given seed.
    ///
    /// A seed strictly between 0 and 1 is scaled into 16-bit range; a seed
    /// that floors below 256 has its low byte folded into the high byte so
    /// both byte extractions vary. Zero falls back to [`DEFAULT_SEED`].
    /// Non-finite seeds (including NaN) are rejected.
    pub fn build(seed: f64) -> Result<Self, SeedError> {
        if !seed.is_finite() {
            return Err(SeedError::NonFiniteSeed(seed));
        }
        let seed = if seed == 0.0 { DEFAULT_SEED } else { seed };
        Ok(Self::build_scaled(scale_seed(seed)))
    }

    fn build_scaled(seed: i32) -> Self {
        let low = (seed & 255) as u8;
        let high = ((seed >> 8) & 255) as u8;

        let mut perm = [0u8; 512];
        let mut grads = [GRADIENTS[0]; 512];
        for index in 0..256 {
            // Odd indices take the seed's low byte, even indices the high byte.
            let value = if index & 1 == 1 {
                BASE_PERMUTATION[index] ^ low
            } else {
                BASE_PERMUTATION[index] ^ high
            };
            perm[index] = value;
            perm[index + 256] = value;
            let gradient = GRADIENTS[usize::from(value) % GRADIENTS.len()];
            grads[index] = gradient;
            grads[index + 256] = gradient;
        }

        Self { seed, perm, grads }
    }

    /// The seed after scaling and byte folding.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Permutation value at `index`, valid for `index < 512`.
    #[inline]
    pub(crate) fn perm(&self, index: usize) -> usize {
        usize::from(self.perm[index])
    }

    /// Gradient at `index`, valid for `index < 512`.
    #[inline]
    pub(crate) fn grad(&self, index: usize) -> Grad {
        self.grads[index]
    }
}

impl Default for PermutationTables {
    fn default() -> Self {
        Self::build_scaled(scale_seed(DEFAULT_SEED))
    }
}

/// Scale a raw seed into the 32-bit integer domain the tables are keyed on.
fn scale_seed(seed: f64) -> i32 {
    let seed = if seed > 0.0 && seed < 1.0 {
        seed * 65536.0
    } else {
        seed
    };
    // Low 32 bits of the floored value, matching 32-bit integer semantics.
    let mut seed = (seed.floor() as i64 & 0xFFFF_FFFF) as u32 as i32;
    if seed < 256 {
        seed |= seed.wrapping_shl(8);
    }
    seed
}
