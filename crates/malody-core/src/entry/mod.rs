//! Beat-anchored chart entries.
//!
//! This module contains the entry types shared by every mode:
//! - `TimeMarked` - ordering contract of anything anchored to a `BeatTime`
//! - `TimingEntry` - tempo changes
//! - `EffectEntry` - non-playable directives with an opaque payload
//! - `CommandEntry` - sample triggers (`sound` + `offset`)
//! - `ChartObject` - command or mode-specific note, tagged at import

mod command;
mod effect;
mod object;
mod timing;

pub use command::*;
pub use effect::*;
pub use object::*;
pub use timing::*;

use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::time::BeatTime;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Families of entries that may be ordered against each other.
///
/// Notes belong to the command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryFamily {
    Timing,
    Effect,
    Command,
}

/// An entry anchored to a position in the chart.
///
/// Implemented only by the entry types of this crate.
pub trait TimeMarked: sealed::Sealed {
    fn time(&self) -> BeatTime;

    fn family(&self) -> EntryFamily;

    fn same_time(&self, other: &dyn TimeMarked) -> bool {
        self.time().same_time(&other.time())
    }

    /// Time ordering within a family; `None` across families.
    fn compare(&self, other: &dyn TimeMarked) -> Option<Ordering> {
        (self.family() == other.family()).then(|| self.time().cmp(&other.time()))
    }
}

/// An entry that is read from and written back to one wire object.
pub trait WireEntry: TimeMarked + Sized {
    /// Name used in error messages
    const KIND: &'static str;

    fn from_wire(value: &Value) -> Result<Self>;

    fn to_wire(&self) -> Value;
}

/// Deserialize a wire object into its shape struct, tagging failures with `kind`.
pub(crate) fn decode_wire<T: DeserializeOwned>(kind: &'static str, value: &Value) -> Result<T> {
    if !value.is_object() {
        return Err(Error::invalid_entry(kind, format!("expected object, got {}", value)));
    }
    serde_json::from_value(value.clone()).map_err(|e| Error::invalid_entry(kind, e.to_string()))
}

/// Wire object with `beat` first, then `fields`.
pub(crate) fn encode_wire(time: BeatTime, fields: Map<String, Value>) -> Value {
    let mut out = Map::new();
    out.insert(crate::config::wire::BEAT.to_string(), Value::from(time.triple().to_vec()));
    out.extend(fields);
    Value::Object(out)
}
