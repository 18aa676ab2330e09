//! Chart documents.
//!
//! This module contains:
//! - `ChartMeta`, `SongMetadata` - validated header
//! - `ChartData` - generic document over a `ModeLayout`
//! - `ChartDocument` - read surface shared by every mode
//! - `Chart` - the mode-tagged document returned by the loader
//! - `key` - key mode types

mod document;
pub mod key;
mod meta;

pub use document::*;
pub use key::{KeyChart, KeyEffect, KeyExtension, KeyLayout, KeyNote};
pub use meta::*;

use serde_json::Value;

use crate::entry::TimingEntry;
use crate::mode::Mode;

/// A parsed chart, tagged by mode.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Chart {
    Key(KeyChart),
}

impl Chart {
    pub fn document(&self) -> &dyn ChartDocument {
        match self {
            Chart::Key(chart) => chart,
        }
    }

    pub fn as_key(&self) -> Option<&KeyChart> {
        match self {
            Chart::Key(chart) => Some(chart),
        }
    }

    pub fn mode(&self) -> Mode {
        self.document().mode()
    }

    pub fn meta(&self) -> &ChartMeta {
        self.document().meta()
    }

    pub fn timings(&self) -> &[TimingEntry] {
        self.document().timings()
    }

    pub fn extension_data(&self) -> Value {
        self.document().extension_data()
    }

    pub fn passthrough(&self) -> &Value {
        self.document().passthrough()
    }

    pub fn to_wire(&self) -> Value {
        self.document().to_wire()
    }
}
