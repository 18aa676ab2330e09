use serde_json::Value;

use super::{CommandEntry, EntryFamily, TimeMarked, WireEntry, sealed};
use crate::config::command::{OFFSET, SOUND};
use crate::error::Result;
use crate::time::BeatTime;

/// Which entry type an object of the `note` list becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Command,
    Note,
}

impl ObjectKind {
    /// An object carrying both `sound` and `offset` is a command; anything
    /// else is a note of the chart's mode.
    pub fn classify(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) if obj.contains_key(SOUND) && obj.contains_key(OFFSET) => ObjectKind::Command,
            _ => ObjectKind::Note,
        }
    }
}

/// A raw `note` list object together with its discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedObject {
    pub kind: ObjectKind,
    pub value: Value,
}

impl TaggedObject {
    pub fn new(value: Value) -> Self {
        Self {
            kind: ObjectKind::classify(&value),
            value,
        }
    }
}

/// Entry of the object list: a command or a mode-specific note.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartObject<N> {
    Command(CommandEntry),
    Note(N),
}

impl<N: WireEntry> ChartObject<N> {
    pub(crate) fn build(tagged: &TaggedObject) -> Result<Self> {
        match tagged.kind {
            ObjectKind::Command => CommandEntry::from_wire(&tagged.value).map(ChartObject::Command),
            ObjectKind::Note => N::from_wire(&tagged.value).map(ChartObject::Note),
        }
    }

    pub fn to_wire(&self) -> Value {
        match self {
            ChartObject::Command(command) => command.to_wire(),
            ChartObject::Note(note) => note.to_wire(),
        }
    }

    pub fn as_note(&self) -> Option<&N> {
        match self {
            ChartObject::Note(note) => Some(note),
            ChartObject::Command(_) => None,
        }
    }

    pub fn as_command(&self) -> Option<&CommandEntry> {
        match self {
            ChartObject::Command(command) => Some(command),
            ChartObject::Note(_) => None,
        }
    }
}

impl<N: TimeMarked> sealed::Sealed for ChartObject<N> {}

impl<N: TimeMarked> TimeMarked for ChartObject<N> {
    fn time(&self) -> BeatTime {
        match self {
            ChartObject::Command(command) => command.time(),
            ChartObject::Note(note) => note.time(),
        }
    }

    fn family(&self) -> EntryFamily {
        EntryFamily::Command
    }
}
