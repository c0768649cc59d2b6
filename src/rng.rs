//! Random source for cosmetic choices (default profile photos). Uses SplitMix64.
//! Deterministic: same seed produces the same sequence. Not cryptographically secure.

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

/// Capability handed to anything that needs a random pick. Tests substitute a fixed sequence.
pub trait RandomSource: Send {
    fn next_u64(&mut self) -> u64;

    /// Uniform-enough index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds from the OS entropy source, falling back to the clock if that is unavailable.
    pub fn from_entropy() -> Self {
        let mut bytes = [0_u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Self::new(u64::from_le_bytes(bytes)),
            Err(err) => {
                tracing::debug!(error = %err, "entropy unavailable, seeding from clock");
                let nanos = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(SPLITMIX64_GOLDEN);
                Self::new(nanos)
            }
        }
    }
}

impl RandomSource for Rng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for FixedSequence {
    fn next_u64(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
