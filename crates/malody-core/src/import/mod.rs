//! Wire document → chart.
//!
//! The loader resolves the mode, remaps metadata through
//! [`META_FIELD_MAP`](crate::config::META_FIELD_MAP) (falling back to
//! [`META_FALLBACK_MAP`](crate::config::META_FALLBACK_MAP)), tags every object of
//! the `note` list, and hands the assembled [`ChartArgs`] to the builder
//! registered for the mode.

pub mod path;

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use crate::chart::{Chart, ChartArgs};
use crate::config::{META_FALLBACK_MAP, META_FIELD_MAP, wire};
use crate::entry::TaggedObject;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::registry::{ChartBuilder, ModeRegistry};

use path::{get_path, remap, remap_missing};

/// Accepted input shapes of [`ChartLoader::load`].
pub enum ChartInput<'a> {
    Reader(Box<dyn Read + 'a>),
    Text(&'a str),
    Value(Value),
}

impl<'a> ChartInput<'a> {
    pub fn reader(reader: impl Read + 'a) -> Self {
        ChartInput::Reader(Box::new(reader))
    }
}

impl<'a> From<&'a str> for ChartInput<'a> {
    fn from(text: &'a str) -> Self {
        ChartInput::Text(text)
    }
}

impl From<Value> for ChartInput<'_> {
    fn from(value: Value) -> Self {
        ChartInput::Value(value)
    }
}

/// Builds charts using an explicit mode registry.
#[derive(Debug, Clone, Default)]
pub struct ChartLoader {
    registry: ModeRegistry,
}

impl ChartLoader {
    pub fn new(registry: ModeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    pub fn load<'a>(&self, input: impl Into<ChartInput<'a>>) -> Result<Chart> {
        match input.into() {
            ChartInput::Reader(reader) => self.load_reader(reader),
            ChartInput::Text(text) => self.load_str(text),
            ChartInput::Value(value) => self.parse(&value),
        }
    }

    /// Read the stream to its end and parse it as JSON.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<Chart> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.load_str(&text)
    }

    pub fn load_str(&self, text: &str) -> Result<Chart> {
        let document: Value = serde_json::from_str(text)?;
        self.parse(&document)
    }

    pub fn parse(&self, document: &Value) -> Result<Chart> {
        let (mode, build) = self.resolve_mode(document)?;
        build(chart_args(document, mode)?)
    }

    /// Assemble the construction arguments without building the chart.
    pub fn chart_args(&self, document: &Value) -> Result<ChartArgs> {
        let (mode, _) = self.resolve_mode(document)?;
        chart_args(document, mode)
    }

    fn resolve_mode(&self, document: &Value) -> Result<(Mode, ChartBuilder)> {
        if !document.is_object() {
            return Err(Error::InvalidDocument("top level must be an object".into()));
        }
        let id = match get_path(document, wire::MODE_PATH) {
            None => return Err(Error::UnsupportedMode("missing".into())),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| Error::UnsupportedMode(value.to_string()))?,
        };
        self.registry.resolve(id)
    }
}

fn chart_args(document: &Value, mode: Mode) -> Result<ChartArgs> {
    let mut meta = remap(document, META_FIELD_MAP.iter().copied());
    remap_missing(document, &mut meta, META_FALLBACK_MAP.iter().copied());

    let object = entry_list(document, wire::NOTE)?
        .into_iter()
        .map(TaggedObject::new)
        .collect::<Vec<_>>();

    let args = ChartArgs {
        mode,
        meta,
        timing: entry_list(document, wire::TIME)?,
        effect: entry_list(document, wire::EFFECT)?,
        object,
        extension: get_path(document, wire::MODE_EXT_PATH)
            .cloned()
            .unwrap_or(Value::Null),
        passthrough: document.get(wire::EXTRA).cloned().unwrap_or(Value::Null),
    };

    debug!(
        "Remapped {} metadata fields, {} timings, {} effects, {} objects",
        args.meta.len(),
        args.timing.len(),
        args.effect.len(),
        args.object.len()
    );
    Ok(args)
}

/// Top-level entry array; absent means empty.
fn entry_list(document: &Value, key: &str) -> Result<Vec<Value>> {
    match document.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(Error::InvalidDocument(format!(
            "'{}' must be an array, got {}",
            key, other
        ))),
    }
}

/// Parse with the built-in registry.
pub fn load<'a>(input: impl Into<ChartInput<'a>>) -> Result<Chart> {
    ChartLoader::default().load(input)
}
