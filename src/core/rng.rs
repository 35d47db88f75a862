//! RNG module - injectable randomness for fly placement and motion
//!
//! All engine randomness flows through the `RandomSource` trait so that the
//! same seed replays the same game and tests can script every draw. The
//! shipped game uses a small LCG seeded from the system clock; tests use
//! `ScriptedRng` to pin placement and motion to exact cells.

/// Uniform integer draws, the only randomness the engine consumes.
///
/// One draw is taken per coordinate during placement (row, then column) and
/// one per fly per step during motion, so a source that replays a recorded
/// sequence reproduces a game exactly.
pub trait RandomSource {
    /// Generate a value in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift, not modulo: the low bits of an LCG have short
        // periods, which would lock each column draw to the row draw
        // preceding it.
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }
}

/// Replays a fixed sequence of draw values, then a constant fallback.
///
/// Each queued value is consumed by one `next_range` call and reduced modulo
/// `max`, so scripting the literal coordinates or offset indices you want is
/// enough as long as they are already in range. Once the queue is empty every
/// draw returns `fallback % max`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: std::collections::VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRng {
    /// Create a source that replays `values`, then returns 0 forever
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into(),
            fallback: 0,
        }
    }

    /// Set the value returned after the scripted values run out
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.values.pop_front().unwrap_or(self.fallback) % max
    }
}
