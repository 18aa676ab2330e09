//! Key (column-based) mode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::document::{ChartData, ModeLayout, sealed};
use super::Chart;
use crate::entry::{self, EffectEntry, EntryFamily, TimeMarked, WireEntry, decode_wire, encode_wire};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::time::BeatTime;

pub type KeyChart = ChartData<KeyLayout>;

/// Key mode effects carry no fields beyond the generic payload.
pub type KeyEffect = EffectEntry;

/// Type set of key mode charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout;

/// Playable note in a column, optionally held until `end_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyNote {
    time: BeatTime,
    column: u32,
    end_time: Option<BeatTime>,
}

#[derive(Deserialize)]
struct KeyNoteWire {
    beat: [i64; 3],
    column: u32,
    #[serde(default)]
    endbeat: Option<[i64; 3]>,
}

impl KeyNote {
    pub fn new(time: BeatTime, column: u32) -> Self {
        Self {
            time,
            column,
            end_time: None,
        }
    }

    pub fn with_end(mut self, end_time: BeatTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn end_time(&self) -> Option<BeatTime> {
        self.end_time
    }

    pub fn is_long(&self) -> bool {
        self.end_time.is_some()
    }
}

impl entry::sealed::Sealed for KeyNote {}

impl TimeMarked for KeyNote {
    fn time(&self) -> BeatTime {
        self.time
    }

    fn family(&self) -> EntryFamily {
        EntryFamily::Command
    }
}

impl WireEntry for KeyNote {
    const KIND: &'static str = "key note";

    fn from_wire(value: &Value) -> Result<Self> {
        let wire: KeyNoteWire = decode_wire(Self::KIND, value)?;
        Ok(Self {
            time: BeatTime::from_triple(wire.beat)?,
            column: wire.column,
            end_time: wire.endbeat.map(BeatTime::from_triple).transpose()?,
        })
    }

    fn to_wire(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("column".to_string(), Value::from(self.column));
        if let Some(end) = self.end_time {
            fields.insert("endbeat".to_string(), Value::from(end.triple().to_vec()));
        }
        encode_wire(self.time, fields)
    }
}

/// Key mode `mode_ext` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyExtension {
    /// Number of columns
    #[serde(rename = "column", default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Bar line offset
    #[serde(rename = "bar_begin", default, skip_serializing_if = "Option::is_none")]
    pub bar_offset: Option<i64>,
}

impl sealed::Sealed for KeyLayout {}

impl ModeLayout for KeyLayout {
    const MODE: Mode = Mode::Key;

    type Effect = KeyEffect;
    type Note = KeyNote;
    type Extension = KeyExtension;

    fn init_extension(extension: &Value) -> Result<KeyExtension> {
        if extension.is_null() {
            warn!("Key chart has no mode_ext block, column count unknown");
            return Ok(KeyExtension::default());
        }
        serde_json::from_value(extension.clone()).map_err(|e| Error::InvalidExtension(e.to_string()))
    }

    fn extension_data(extension: &KeyExtension) -> Value {
        serde_json::to_value(extension).unwrap_or_default()
    }

    fn wrap(data: KeyChart) -> Chart {
        Chart::Key(data)
    }
}

impl ChartData<KeyLayout> {
    pub fn columns(&self) -> Option<u32> {
        self.extension().columns
    }

    pub fn bar_offset(&self) -> Option<i64> {
        self.extension().bar_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_from_wire() {
        let note = KeyNote::from_wire(&json!({"beat": [3, 1, 4], "column": 2})).unwrap();
        assert_eq!(note.column(), 2);
        assert_eq!(note.time().triple(), [3, 1, 4]);
        assert!(!note.is_long());
    }

    #[test]
    fn test_long_note_round_trips() {
        let wire = json!({"beat": [3, 0, 1], "endbeat": [4, 1, 2], "column": 0});
        let note = KeyNote::from_wire(&wire).unwrap();

        assert_eq!(note.end_time().map(|t| t.triple()), Some([4, 1, 2]));
        assert_eq!(note.to_wire(), wire);
    }

    #[test]
    fn test_note_ignores_unknown_fields() {
        let note = KeyNote::from_wire(&json!({"beat": [0, 0, 1], "column": 1, "style": 9}));
        assert!(note.is_ok());
    }

    #[test]
    fn test_note_requires_column() {
        let result = KeyNote::from_wire(&json!({"beat": [0, 0, 1]}));
        assert!(matches!(result, Err(Error::InvalidEntry { kind: "key note", .. })));
    }

    #[test]
    fn test_extension_reads_both_fields() {
        let ext = KeyLayout::init_extension(&json!({"column": 7, "bar_begin": -1})).unwrap();
        assert_eq!(ext.columns, Some(7));
        assert_eq!(ext.bar_offset, Some(-1));
        assert_eq!(
            KeyLayout::extension_data(&ext),
            json!({"column": 7, "bar_begin": -1})
        );
    }

    #[test]
    fn test_extension_absent_uses_defaults() {
        let ext = KeyLayout::init_extension(&Value::Null).unwrap();
        assert_eq!(ext, KeyExtension::default());
        assert_eq!(KeyLayout::extension_data(&ext), json!({}));
    }

    #[test]
    fn test_extension_rejects_bad_column() {
        let result = KeyLayout::init_extension(&json!({"column": "four"}));
        assert!(matches!(result, Err(Error::InvalidExtension(_))));
    }
}
