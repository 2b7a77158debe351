//! RNG module - injected piece sources
//!
//! The board never reaches for process-wide randomness. It draws shapes from a
//! [`PieceSource`] handed to it at construction:
//!
//! - [`UniformSource`]: independent uniform draw per piece (classic behavior)
//! - [`BagSource`]: "7-bag", each group of seven draws holds every shape once
//! - [`SequenceSource`]: cycles a fixed list, for tests and replays
//!
//! All sources are deterministic for a given seed.

use std::fmt;

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 aliases to 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle quickly; scale from the high bits.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Where the board gets its next shape from
pub trait PieceSource: fmt::Debug + Send {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform random shape per draw
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagSource {
    /// Current bag of pieces
    bag: [ShapeKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: SimpleRng,
}

impl BagSource {
    /// Create a new bag source with the given seed
    pub fn new(seed: u32) -> Self {
        let mut source = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        source.refill_bag();
        source
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Peek at the next piece without consuming it
    pub fn peek(&self) -> ShapeKind {
        if self.bag_index < self.bag.len() {
            return self.bag[self.bag_index];
        }

        // Preview the next bag on a copy of the RNG so the preview agrees
        // with the following draw without mutating anything.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = ShapeKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl PieceSource for BagSource {
    fn next_kind(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Cycles through a fixed list of shapes
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl SequenceSource {
    /// An empty list cycles through every shape in [`ShapeKind::ALL`] order.
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds = ShapeKind::ALL.to_vec();
        }
        Self { kinds, index: 0 }
    }

    /// Always the same shape
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

/// Selectable random source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag,
}

impl Randomizer {
    /// Parse randomizer from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }

    /// Build a seeded source of this kind
    pub fn build(self, seed: u32) -> Box<dyn PieceSource> {
        match self {
            Randomizer::Uniform => Box::new(UniformSource::new(seed)),
            Randomizer::Bag => Box::new(BagSource::new(seed)),
        }
    }
}
