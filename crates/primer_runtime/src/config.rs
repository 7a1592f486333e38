//! Configuration for a driver run.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Constant added to the standard program's result line.
pub const GLOBAL_VALUE: i64 = 100;

/// Constant added to the alternate program's total line.
pub const ALTERNATE_GLOBAL_VALUE: i64 = 42;

/// Which demonstration program the driver runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Program {
    /// Result, doubling, loose equality, mapping, counting, reversal,
    /// accumulator, and three random draws.
    #[default]
    Standard,
    /// Total, reversal, alternating accumulator, and four random draws.
    Alternate,
}

impl Program {
    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Alternate => "alternate",
        }
    }

    /// Inclusive bounds for this program's random draws.
    #[must_use]
    pub const fn random_bounds(self) -> (i64, i64) {
        match self {
            Self::Standard => (1, 100),
            Self::Alternate => (0, 99),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a program name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown program: {0} (expected `standard` or `alternate`)")]
pub struct ParseProgramError(pub String);

impl FromStr for Program {
    type Err = ParseProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "alternate" => Ok(Self::Alternate),
            other => Err(ParseProgramError(other.to_string())),
        }
    }
}

/// Configuration for a driver run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Program to run.
    pub program: Program,

    /// Random seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Read-only constant folded into the first line.
    pub global_value: i64,

    /// Exclusive upper bound of the counting loop.
    pub count_limit: i64,

    /// Number of random lines to print.
    pub random_draws: usize,

    /// Emit a trace line per step to stderr.
    pub trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: Program::Standard,
            seed: None,
            global_value: GLOBAL_VALUE,
            count_limit: 3,
            random_draws: 3,
            trace: false,
        }
    }
}

impl RunConfig {
    /// Creates the standard configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Creates the configuration for the alternate program.
    #[must_use]
    pub fn alternate() -> Self {
        Self {
            program: Program::Alternate,
            global_value: ALTERNATE_GLOBAL_VALUE,
            random_draws: 4,
            ..Self::default()
        }
    }

    /// Creates the default configuration for `program`.
    #[must_use]
    pub fn for_program(program: Program) -> Self {
        match program {
            Program::Standard => Self::default(),
            Program::Alternate => Self::alternate(),
        }
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the global value.
    #[must_use]
    pub fn with_global_value(mut self, value: i64) -> Self {
        self.global_value = value;
        self
    }

    /// Builder method to set the counting loop bound.
    #[must_use]
    pub fn with_count_limit(mut self, limit: i64) -> Self {
        self.count_limit = limit;
        self
    }

    /// Builder method to set the number of random draws.
    #[must_use]
    pub fn with_random_draws(mut self, draws: usize) -> Self {
        self.random_draws = draws;
        self
    }

    /// Builder method to enable/disable step tracing.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
