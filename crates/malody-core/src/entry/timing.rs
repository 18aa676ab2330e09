use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::{EntryFamily, TimeMarked, WireEntry, decode_wire, encode_wire, sealed};
use crate::error::{Error, Result};
use crate::time::BeatTime;

/// Tempo change at a beat.
///
/// BPM is not range-checked; zero or non-finite values only surface when
/// a duration is asked for.
#[derive(Debug, Clone)]
pub struct TimingEntry {
    time: BeatTime,
    bpm: f64,
    /// BPM as it was written on the wire
    number: Option<Number>,
}

#[derive(Deserialize)]
struct TimingWire {
    beat: [i64; 3],
    bpm: Number,
}

impl TimingEntry {
    pub fn new(time: BeatTime, bpm: f64) -> Self {
        Self {
            time,
            bpm,
            number: None,
        }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Seconds per beat, `None` for zero or non-finite BPM.
    pub fn sec_per_beat(&self) -> Option<f64> {
        self.per_beat(60)
    }

    /// Milliseconds per beat, `None` for zero or non-finite BPM.
    pub fn ms_per_beat(&self) -> Option<f64> {
        self.per_beat(60_000)
    }

    // Divide exactly, convert once.
    fn per_beat(&self, units: i64) -> Option<f64> {
        let bpm = BigRational::from_float(self.bpm)?;
        if bpm.is_zero() {
            return None;
        }
        (BigRational::from_integer(units.into()) / bpm).to_f64()
    }
}

impl PartialEq for TimingEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.bpm == other.bpm
    }
}

impl sealed::Sealed for TimingEntry {}

impl TimeMarked for TimingEntry {
    fn time(&self) -> BeatTime {
        self.time
    }

    fn family(&self) -> EntryFamily {
        EntryFamily::Timing
    }
}

impl WireEntry for TimingEntry {
    const KIND: &'static str = "timing";

    fn from_wire(value: &Value) -> Result<Self> {
        let wire: TimingWire = decode_wire(Self::KIND, value)?;
        let bpm = wire.bpm.as_f64().ok_or_else(|| Error::InvalidEntry {
            kind: Self::KIND,
            message: format!("bpm {} is not representable", wire.bpm),
        })?;
        Ok(Self {
            time: BeatTime::from_triple(wire.beat)?,
            bpm,
            number: Some(wire.bpm),
        })
    }

    fn to_wire(&self) -> Value {
        let bpm = match &self.number {
            Some(number) => Value::Number(number.clone()),
            None => Value::from(self.bpm),
        };
        let mut fields = Map::new();
        fields.insert("bpm".to_string(), bpm);
        encode_wire(self.time, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(b: i64, n: i64, d: i64, bpm: f64) -> TimingEntry {
        TimingEntry::new(BeatTime::new(b, n, d).unwrap(), bpm)
    }

    #[test]
    fn test_sec_per_beat_exact() {
        assert_eq!(entry(0, 0, 1, 120.0).sec_per_beat(), Some(0.5));
        assert_eq!(entry(0, 0, 1, 120.0).ms_per_beat(), Some(500.0));
        assert_eq!(entry(0, 0, 1, 150.0).ms_per_beat(), Some(400.0));
    }

    #[test]
    fn test_zero_bpm_fails_lazily() {
        let timing = entry(0, 0, 1, 0.0);
        assert_eq!(timing.bpm(), 0.0);
        assert_eq!(timing.sec_per_beat(), None);
        assert_eq!(entry(0, 0, 1, f64::NAN).ms_per_beat(), None);
    }

    #[test]
    fn test_negative_bpm_passes_through() {
        assert_eq!(entry(0, 0, 1, -120.0).sec_per_beat(), Some(-0.5));
    }

    #[test]
    fn test_equality_needs_bpm() {
        assert_eq!(entry(1, 1, 2, 140.0), entry(1, 2, 4, 140.0));
        assert_ne!(entry(1, 1, 2, 140.0), entry(1, 1, 2, 141.0));
    }

    #[test]
    fn test_sorting_reduces_fractions() {
        let mut timings = vec![entry(1, 1, 2, 100.0), entry(0, 0, 1, 120.0), entry(1, 2, 4, 90.0)];
        timings.sort_by(|a, b| a.time().cmp(&b.time()));

        assert_eq!(timings[0].time().triple(), [0, 0, 1]);
        assert!(timings[1].same_time(&timings[2]));
        // stable: original relative order of equal times is kept
        assert_eq!(timings[1].bpm(), 100.0);
        assert_eq!(timings[2].bpm(), 90.0);
    }

    #[test]
    fn test_from_wire() {
        let timing = TimingEntry::from_wire(&json!({"beat": [2, 1, 4], "bpm": 180})).unwrap();
        assert_eq!(timing.time().triple(), [2, 1, 4]);
        assert_eq!(timing.bpm(), 180.0);
        assert_eq!(timing.to_wire(), json!({"beat": [2, 1, 4], "bpm": 180}));
    }

    #[test]
    fn test_to_wire_keeps_number_form() {
        let whole = TimingEntry::from_wire(&json!({"beat": [0, 0, 1], "bpm": 120})).unwrap();
        let fractional =
            TimingEntry::from_wire(&json!({"beat": [0, 0, 1], "bpm": 150.5})).unwrap();

        assert_eq!(whole.to_wire()["bpm"], json!(120));
        assert_eq!(fractional.to_wire()["bpm"], json!(150.5));
        assert_eq!(entry(0, 0, 1, 120.0).to_wire()["bpm"], json!(120.0));
        // the written form does not take part in equality
        assert_eq!(whole, entry(0, 0, 1, 120.0));
    }

    #[test]
    fn test_from_wire_propagates_denominator_error() {
        let result = TimingEntry::from_wire(&json!({"beat": [0, 1, 0], "bpm": 120}));
        assert!(matches!(result, Err(Error::InvalidDenominator { denominator: 0 })));
    }

    #[test]
    fn test_from_wire_missing_beat() {
        let result = TimingEntry::from_wire(&json!({"bpm": 120}));
        assert!(matches!(result, Err(Error::InvalidEntry { kind: "timing", .. })));
    }
}
