//! Small deterministic generators for building reproducible test cases.
//!
//! None of this is suitable for anything security related. The only promise is
//! that a generator seeded the same way produces the same stream forever, on
//! every platform.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::step::Cell;

/// Seed used by every leaderboard evaluation.
pub const LEADERBOARD_SEED: [u32; 4] = [0xC6E3_84F5, 0xE894_8B30, 0xF2C0_57E2, 0xFD28_0B06];

/// Chris Doty-Humphrey's sfc32, with 128 bits of state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    pub const fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    pub const fn leaderboard() -> Self {
        let [a, b, c, d] = LEADERBOARD_SEED;
        Self::new(a, b, c, d)
    }

    pub fn seed(&mut self, a: u32, b: u32, c: u32, d: u32) {
        *self = Self::new(a, b, c, d);
    }
}

impl Default for Sfc32 {
    fn default() -> Self {
        Self::leaderboard()
    }
}

impl RngCore for Sfc32 {
    fn next_u32(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        self.d = self.d.wrapping_add(1);
        t
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Sfc32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        let [a, b, c, d] = words;
        Self::new(a, b, c, d)
    }
}

/// Marsaglia's xorshift32 (shifts 13, 17, 5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    y: u32,
}

impl XorShift32 {
    /// Seed from Marsaglia's paper. Also used in place of zero, which would
    /// make the generator emit zero forever.
    pub const DEFAULT_SEED: u32 = 2_463_534_242;

    pub const fn new(y: u32) -> Self {
        Self {
            y: if y == 0 { Self::DEFAULT_SEED } else { y },
        }
    }

    pub fn seed(&mut self, y: u32) {
        *self = Self::new(y);
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.y ^= self.y << 13;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 5;
        self.y
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Helpers for puzzle generators, available on every [`RngCore`].
pub trait CaseRng: RngCore {
    fn next_uint32(&mut self) -> u32 {
        self.next_u32()
    }

    /// Uniform in `[0, 1)`.
    fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform in `min..=max`, using the debiased modulo method: draws below
    /// `2^32 % span` are thrown away so every residue is equally likely.
    ///
    /// # Panics
    ///
    /// If `min > max`.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "empty range {min}..={max}");

        let span = (max - min).wrapping_add(1);
        if span == 0 {
            return self.next_u32();
        }

        let threshold = span.wrapping_neg() % span;
        loop {
            let x = self.next_u32();
            if x >= threshold {
                return min + x % span;
            }
        }
    }

    /// Like [`CaseRng::range`], but never returns `excluded`.
    ///
    /// # Panics
    ///
    /// If `min >= max`.
    fn range_excluding(&mut self, min: u32, max: u32, excluded: u32) -> u32 {
        assert!(min < max, "range {min}..={max} has nothing to spare");

        let value = self.range(min, max - 1);
        if value >= excluded {
            value + 1
        } else {
            value
        }
    }

    /// `n` independent draws from `min..=max`, as cells ready to be used as
    /// program input.
    fn sequence(&mut self, n: usize, min: u32, max: u32) -> Vec<Cell> {
        (0..n).map(|_| Cell::from(self.range(min, max))).collect()
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let bound = u32::try_from(i).unwrap_or(u32::MAX);
            let j = self.range(0, bound) as usize;
            items.swap(i, j);
        }
    }
}

impl<R: RngCore + ?Sized> CaseRng for R {}
