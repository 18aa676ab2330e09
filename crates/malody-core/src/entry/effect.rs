use serde::Deserialize;
use serde_json::{Map, Value};

use super::{EntryFamily, TimeMarked, WireEntry, decode_wire, encode_wire, sealed};
use crate::error::Result;
use crate::time::BeatTime;

/// Non-playable directive at a beat (scroll speed, display hints, ...).
///
/// The payload is kept as-is; its meaning belongs to the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectEntry {
    time: BeatTime,
    payload: Map<String, Value>,
}

#[derive(Deserialize)]
struct EffectWire {
    beat: [i64; 3],
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl EffectEntry {
    pub fn new(time: BeatTime, payload: Map<String, Value>) -> Self {
        Self { time, payload }
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl sealed::Sealed for EffectEntry {}

impl TimeMarked for EffectEntry {
    fn time(&self) -> BeatTime {
        self.time
    }

    fn family(&self) -> EntryFamily {
        EntryFamily::Effect
    }
}

impl WireEntry for EffectEntry {
    const KIND: &'static str = "effect";

    fn from_wire(value: &Value) -> Result<Self> {
        let wire: EffectWire = decode_wire(Self::KIND, value)?;
        Ok(Self::new(BeatTime::from_triple(wire.beat)?, wire.payload))
    }

    fn to_wire(&self) -> Value {
        encode_wire(self.time, self.payload.clone())
    }
}
