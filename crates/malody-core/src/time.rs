//! Exact musical positions.
//!
//! A `BeatTime` is `beat + numerator / denominator`. Comparison uses exact
//! rational arithmetic, so `(1, 1, 2)` and `(1, 2, 4)` are the same position.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_rational::Ratio;

use crate::error::{Error, Result};

/// Position in a chart expressed as (beat, numerator, denominator).
#[derive(Debug, Clone, Copy)]
pub struct BeatTime {
    beat: i64,
    numerator: i64,
    denominator: i64,
}

impl BeatTime {
    pub fn new(beat: i64, numerator: i64, denominator: i64) -> Result<Self> {
        if denominator <= 0 {
            return Err(Error::InvalidDenominator { denominator });
        }
        Ok(Self {
            beat,
            numerator,
            denominator,
        })
    }

    /// Build from the `[beat, numerator, denominator]` wire triple.
    pub fn from_triple(triple: [i64; 3]) -> Result<Self> {
        let [beat, numerator, denominator] = triple;
        Self::new(beat, numerator, denominator)
    }

    pub fn beat(&self) -> i64 {
        self.beat
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Raw triple as given at construction, unreduced.
    pub fn triple(&self) -> [i64; 3] {
        [self.beat, self.numerator, self.denominator]
    }

    /// Fractional part as a reduced ratio.
    pub fn fraction(&self) -> Ratio<i64> {
        Ratio::new(self.numerator, self.denominator)
    }

    pub fn same_time(&self, other: &BeatTime) -> bool {
        if self.beat != other.beat {
            return false;
        }
        if self.numerator == 0 && other.numerator == 0 {
            return true;
        }
        self.fraction() == other.fraction()
    }
}

impl PartialEq for BeatTime {
    fn eq(&self, other: &Self) -> bool {
        self.same_time(other)
    }
}

impl Eq for BeatTime {}

impl PartialOrd for BeatTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BeatTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.beat
            .cmp(&other.beat)
            .then_with(|| self.fraction().cmp(&other.fraction()))
    }
}

impl Hash for BeatTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let fraction = self.fraction();
        self.beat.hash(state);
        fraction.numer().hash(state);
        fraction.denom().hash(state);
    }
}

impl TryFrom<[i64; 3]> for BeatTime {
    type Error = Error;

    fn try_from(triple: [i64; 3]) -> Result<Self> {
        Self::from_triple(triple)
    }
}

impl From<BeatTime> for [i64; 3] {
    fn from(time: BeatTime) -> Self {
        time.triple()
    }
}

impl fmt::Display for BeatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}/{}", self.beat, self.numerator, self.denominator)
    }
}
