use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::chart::{Chart, ChartMeta};
use crate::config::{META_FIELD_MAP, wire};
use crate::entry::{ChartObject, TaggedObject, TimeMarked, TimingEntry, WireEntry};
use crate::error::{Error, Result};
use crate::import::path::{remap, set_path};
use crate::mode::Mode;

/// Normalized construction arguments, as produced by the import pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArgs {
    pub mode: Mode,
    /// Metadata bag keyed by the right-hand side of `META_FIELD_MAP`
    pub meta: Map<String, Value>,
    pub timing: Vec<Value>,
    pub effect: Vec<Value>,
    pub object: Vec<TaggedObject>,
    /// `mode_ext` block, `Null` when absent
    pub extension: Value,
    /// Top-level `extra` block, kept verbatim
    pub passthrough: Value,
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Type set of one game mode: its effect and note entries and its
/// extension data.
pub trait ModeLayout: sealed::Sealed + Sized + 'static {
    const MODE: Mode;

    type Effect: WireEntry + Clone + PartialEq + fmt::Debug;
    type Note: WireEntry + Clone + PartialEq + fmt::Debug;
    type Extension: Clone + PartialEq + fmt::Debug;

    fn init_extension(extension: &Value) -> Result<Self::Extension>;

    fn extension_data(extension: &Self::Extension) -> Value;

    fn wrap(data: ChartData<Self>) -> Chart;
}

/// Read surface shared by every chart regardless of mode.
pub trait ChartDocument {
    fn mode(&self) -> Mode;

    fn meta(&self) -> &ChartMeta;

    fn timings(&self) -> &[TimingEntry];

    fn effect_count(&self) -> usize;

    fn object_count(&self) -> usize;

    /// Mode-specific `mode_ext` block as written back to the wire.
    fn extension_data(&self) -> Value;

    fn passthrough(&self) -> &Value;

    /// Rebuild the wire document.
    fn to_wire(&self) -> Value;
}

/// Chart of one mode. Only built through the mode registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData<L: ModeLayout> {
    meta: ChartMeta,
    timings: Vec<TimingEntry>,
    effects: Vec<L::Effect>,
    objects: Vec<ChartObject<L::Note>>,
    extension: L::Extension,
    passthrough: Value,
}

impl<L: ModeLayout> ChartData<L> {
    pub(crate) fn build(args: ChartArgs) -> Result<Self> {
        if args.mode != L::MODE {
            return Err(Error::ModeMismatch {
                expected: L::MODE,
                actual: args.mode,
            });
        }

        let meta = ChartMeta::from_args(&args.meta)?;

        let mut timings = args
            .timing
            .iter()
            .map(TimingEntry::from_wire)
            .collect::<Result<Vec<_>>>()?;
        let mut effects = args
            .effect
            .iter()
            .map(<L::Effect as WireEntry>::from_wire)
            .collect::<Result<Vec<_>>>()?;
        let mut objects = args
            .object
            .iter()
            .map(ChartObject::<L::Note>::build)
            .collect::<Result<Vec<_>>>()?;
        let extension = L::init_extension(&args.extension)?;

        timings.sort_by_key(|entry| entry.time());
        effects.sort_by_key(|entry| entry.time());
        objects.sort_by_key(|entry| entry.time());

        debug!(
            "Built {} chart '{}': {} timings, {} effects, {} objects",
            L::MODE.name(),
            meta.name,
            timings.len(),
            effects.len(),
            objects.len()
        );

        Ok(Self {
            meta,
            timings,
            effects,
            objects,
            extension,
            passthrough: args.passthrough,
        })
    }

    pub fn effects(&self) -> &[L::Effect] {
        &self.effects
    }

    pub fn objects(&self) -> &[ChartObject<L::Note>] {
        &self.objects
    }

    pub fn notes(&self) -> impl Iterator<Item = &L::Note> {
        self.objects.iter().filter_map(ChartObject::as_note)
    }

    pub fn extension(&self) -> &L::Extension {
        &self.extension
    }
}

impl<L: ModeLayout> ChartDocument for ChartData<L> {
    fn mode(&self) -> Mode {
        L::MODE
    }

    fn meta(&self) -> &ChartMeta {
        &self.meta
    }

    fn timings(&self) -> &[TimingEntry] {
        &self.timings
    }

    fn effect_count(&self) -> usize {
        self.effects.len()
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn extension_data(&self) -> Value {
        L::extension_data(&self.extension)
    }

    fn passthrough(&self) -> &Value {
        &self.passthrough
    }

    fn to_wire(&self) -> Value {
        let args = Value::Object(self.meta.to_args());
        let mut doc = remap(&args, META_FIELD_MAP.iter().map(|(from, to)| (*to, *from)));

        set_path(&mut doc, wire::MODE_PATH, Value::from(L::MODE.id()));
        set_path(&mut doc, wire::MODE_EXT_PATH, self.extension_data());

        doc.insert(
            wire::TIME.to_string(),
            self.timings.iter().map(WireEntry::to_wire).collect(),
        );
        doc.insert(
            wire::EFFECT.to_string(),
            self.effects.iter().map(WireEntry::to_wire).collect(),
        );
        doc.insert(
            wire::NOTE.to_string(),
            self.objects.iter().map(ChartObject::to_wire).collect(),
        );
        if !self.passthrough.is_null() {
            doc.insert(wire::EXTRA.to_string(), self.passthrough.clone());
        }

        Value::Object(doc)
    }
}
