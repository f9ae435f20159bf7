//! src/core/rng.rs

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

// --- Object-safe random source ---
/// パーティクル生成に使う乱数源。
///
/// `rand::Rng` has generic methods and can't be used as `dyn`, so the one
/// draw the factory needs is restated here. Any `Rng` gets it for free.
pub trait RandomSource: RngCore { // RngCore はオブジェクト安全
  /// Uniform `f64` in `[0, 1)`.
  fn unit(&mut self) -> f64;
}

impl<T: Rng> RandomSource for T {
  fn unit(&mut self) -> f64 {
    self.gen::<f64>()
  }
}

// --- Seeded generator ---
/// Process-wide random source, seeded once at startup.
pub struct SimRng {
  seed: u64, // ログ用に保持
  rng: StdRng,
}

impl SimRng {
  pub fn from_seed(seed: u64) -> Self {
    Self {
      seed,
      rng: StdRng::seed_from_u64(seed),
    }
  }

  /// Seeds from the wall clock; see [`clock_seed`].
  pub fn from_clock() -> Self {
    Self::from_seed(clock_seed())
  }

  pub fn seed(&self) -> u64 {
    self.seed
  }
}

impl RngCore for SimRng {
  fn next_u32(&mut self) -> u32 {
    self.rng.next_u32()
  }

  fn next_u64(&mut self) -> u64 {
    self.rng.next_u64()
  }

  fn fill_bytes(&mut self, dest: &mut [u8]) {
    self.rng.fill_bytes(dest)
  }

  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
    self.rng.try_fill_bytes(dest)
  }
}

/// 現在時刻から BLAKE3 でシード値を作る。
///
/// The current time since the Unix epoch, in nanoseconds, is hashed and
/// the first eight bytes of the digest are read as a little-endian `u64`.
pub fn clock_seed() -> u64 {
  let nanos = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_nanos())
    .unwrap_or_default(); // 1970年以前なら 0
  seed_from_nanos(nanos)
}

fn seed_from_nanos(nanos: u128) -> u64 {
  let digest = blake3::hash(&nanos.to_le_bytes());
  let mut seed_bytes = [0u8; 8];
  seed_bytes.copy_from_slice(&digest.as_bytes()[0..8]);
  u64::from_le_bytes(seed_bytes)
}
