use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Block letters of the generated demo files.
pub const SAMPLE_BLOCKS: &[char] = &['A', 'B', 'C', 'D'];
/// Rows per generated file.
pub const SAMPLE_ROWS: usize = 100;

const BASE_RATE_MHZ: f64 = 1600.0;
const RATE_STEP_MHZ: f64 = 50.0;
const NOISE_STD_DEV: f64 = 10.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// CSV text for one demo block. Block `k` (0 = 'A') centres on
/// `1600 - 50k` MHz.
pub fn sample_csv(block: char) -> String {
    let k = (block as u32).saturating_sub('A' as u32) as f64;
    let base = BASE_RATE_MHZ - k * RATE_STEP_MHZ;
    let mut rng = SimpleRng::new(block as u64);

    let mut out = String::from("timestamp,clock_rate_mhz\n");
    for i in 0..SAMPLE_ROWS {
        let rate = rng.gauss(base, NOISE_STD_DEV);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{i},{rate:.2}");
    }
    out
}

/// Write `block_A.csv` … `block_D.csv` into `dir`, creating it if needed.
pub fn write_sample_data(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating sample directory {}", dir.display()))?;

    SAMPLE_BLOCKS
        .iter()
        .map(|&block| {
            let path = dir.join(format!("block_{block}.csv"));
            fs::write(&path, sample_csv(block))
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
