use serde::Deserialize;
use serde_json::{Map, Value};

use super::{EntryFamily, TimeMarked, WireEntry, decode_wire, encode_wire, sealed};
use crate::config::command::{OFFSET, SOUND};
use crate::error::Result;
use crate::time::BeatTime;

/// Resource trigger at a beat, e.g. a keysound sample with its playback offset.
///
/// Fields other than `sound` and `offset` (volume, trigger type) are kept
/// in `params` so they are written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    time: BeatTime,
    sound: String,
    offset: i64,
    params: Map<String, Value>,
}

#[derive(Deserialize)]
struct CommandWire {
    beat: [i64; 3],
    sound: String,
    offset: i64,
    #[serde(flatten)]
    params: Map<String, Value>,
}

impl CommandEntry {
    pub fn new(time: BeatTime, sound: impl Into<String>, offset: i64) -> Self {
        Self {
            time,
            sound: sound.into(),
            offset,
            params: Map::new(),
        }
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }

    /// Playback offset in milliseconds
    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

impl sealed::Sealed for CommandEntry {}

impl TimeMarked for CommandEntry {
    fn time(&self) -> BeatTime {
        self.time
    }

    fn family(&self) -> EntryFamily {
        EntryFamily::Command
    }
}

impl WireEntry for CommandEntry {
    const KIND: &'static str = "command";

    fn from_wire(value: &Value) -> Result<Self> {
        let wire: CommandWire = decode_wire(Self::KIND, value)?;
        Ok(Self {
            time: BeatTime::from_triple(wire.beat)?,
            sound: wire.sound,
            offset: wire.offset,
            params: wire.params,
        })
    }

    fn to_wire(&self) -> Value {
        let mut fields = Map::new();
        fields.insert(SOUND.to_string(), Value::from(self.sound.clone()));
        fields.insert(OFFSET.to_string(), Value::from(self.offset));
        fields.extend(self.params.clone());
        encode_wire(self.time, fields)
    }
}
