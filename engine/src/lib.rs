use std::fmt;

use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod api;
pub mod content;
pub mod error;
pub mod stats;

pub use error::SimError;
pub use stats::{summarize, SummaryStats};

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<u32>, next: usize },
}

/// Source of face draws. Seeded variants are statistically uniform (not
/// cryptographically secure); the scripted variant replays fixed values for
/// tests and panics when exhausted.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            source: Source::Seeded(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn from_scripted(values: Vec<u32>) -> Self {
        Self {
            source: Source::Scripted { values, next: 0 },
        }
    }

    /// One draw of a `faces`-sided die, in `1..=faces`.
    pub fn die(&mut self, faces: u32) -> u32 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=faces),
            Source::Scripted { values, next } => {
                let v = values[*next];
                *next += 1;
                v
            }
        }
    }

    /// `n` draws of a `faces`-sided die in one batch. The seeded source
    /// samples through a single cached `Uniform`, which is what lets
    /// `simulate` keep up with trial counts in the millions.
    pub fn sample_faces(&mut self, faces: u32, n: usize) -> Vec<u32> {
        match &mut self.source {
            Source::Seeded(rng) => {
                let die = Uniform::from(1..=faces);
                rng.sample_iter(die).take(n).collect()
            }
            Source::Scripted { values, next } => {
                let end = *next + n;
                let batch = values[*next..end].to_vec();
                *next = end;
                batch
            }
        }
    }
}

/* ---------------- roll specification ---------------- */

/// One roll request: `die_count` dice with `die_faces` faces each,
/// `per_die_modifier` added to every individual die, `total_modifier` added
/// once to the summed trial, repeated for `trial_count` independent trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSpec {
    pub die_count: u32,
    pub die_faces: u32,
    #[serde(default)]
    pub per_die_modifier: i32,
    #[serde(default)]
    pub total_modifier: i32,
    #[serde(default = "default_trial_count")]
    pub trial_count: u32,
}

fn default_trial_count() -> u32 {
    1_000_000
}

impl RollSpec {
    pub fn new(die_count: u32, die_faces: u32) -> Self {
        Self {
            die_count,
            die_faces,
            per_die_modifier: 0,
            total_modifier: 0,
            trial_count: default_trial_count(),
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.die_count < 1 {
            return Err(SimError::InvalidParameter {
                field: "die_count",
                value: self.die_count as i64,
            });
        }
        if self.die_faces < 1 {
            return Err(SimError::InvalidParameter {
                field: "die_faces",
                value: self.die_faces as i64,
            });
        }
        if self.trial_count < 1 {
            return Err(SimError::InvalidParameter {
                field: "trial_count",
                value: self.trial_count as i64,
            });
        }
        Ok(())
    }

    /// Smallest total a trial can produce.
    pub fn min_outcome(&self) -> i64 {
        self.die_count as i64 * (1 + self.per_die_modifier as i64) + self.total_modifier as i64
    }

    /// Largest total a trial can produce.
    pub fn max_outcome(&self) -> i64 {
        self.die_count as i64 * (self.die_faces as i64 + self.per_die_modifier as i64)
            + self.total_modifier as i64
    }
}

impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.die_count, self.die_faces)?;
        if self.per_die_modifier != 0 {
            write!(f, "{:+}ea", self.per_die_modifier)?;
        }
        if self.total_modifier != 0 {
            write!(f, "{:+}", self.total_modifier)?;
        }
        Ok(())
    }
}

/* ---------------- roll simulator ---------------- */

/// Run the full Monte Carlo pass for `spec`, returning one summed total per
/// trial, in trial order.
///
/// All `die_count * trial_count` face draws are generated in a single batch
/// and reduced trial by trial; `roll_trial` is the scalar strategy for a
/// single roll. The two agree in distribution, and are numerically identical
/// on the same scripted draw stream.
pub fn simulate(dice: &mut Dice, spec: &RollSpec) -> Result<Vec<i64>, SimError> {
    spec.validate()?;
    let die_count = spec.die_count as usize;
    let trials = spec.trial_count as usize;
    debug!(spec = %spec, trials, "simulating rolls");

    let draws = dice.sample_faces(spec.die_faces, die_count * trials);
    let per_die = spec.per_die_modifier as i64;
    let total = spec.total_modifier as i64;
    let outcomes = draws
        .chunks_exact(die_count)
        .map(|trial| trial.iter().map(|&d| d as i64 + per_die).sum::<i64>() + total)
        .collect();
    Ok(outcomes)
}

/// One trial of `spec`, rolled die by die.
pub fn roll_trial(dice: &mut Dice, spec: &RollSpec) -> Result<i64, SimError> {
    spec.validate()?;
    let mut sum = spec.total_modifier as i64;
    for _ in 0..spec.die_count {
        sum += dice.die(spec.die_faces) as i64 + spec.per_die_modifier as i64;
    }
    Ok(sum)
}
