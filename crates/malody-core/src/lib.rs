//! # malody-core
//!
//! Typed model of Malody chart files.
//!
//! This crate provides:
//! - Exact rational beat positions (`BeatTime`)
//! - Timing, effect, command and note entries with a family-aware ordering
//! - Validated chart documents per game mode (`Chart`, `ChartData`)
//! - The mode table with its bit-set helpers, and the registry of
//!   implemented modes
//! - The loader translating the JSON wire document into a chart, and back
//!
//! ```no_run
//! use malody_core::ChartLoader;
//!
//! let text = std::fs::read_to_string("chart.mc")?;
//! let chart = ChartLoader::default().load(text.as_str())?;
//! println!("{} by {}", chart.meta().name, chart.meta().creator);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chart;
pub mod config;
pub mod entry;
pub mod error;
pub mod import;
pub mod mode;
pub mod registry;
pub mod time;

// Re-export from chart module
pub use chart::{
    Chart, ChartArgs, ChartData, ChartDocument, ChartMeta, KeyChart, KeyEffect, KeyExtension,
    KeyLayout, KeyNote, ModeLayout, SongMetadata,
};

// Re-export from entry module
pub use entry::{
    ChartObject, CommandEntry, EffectEntry, EntryFamily, ObjectKind, TaggedObject, TimeMarked,
    TimingEntry, WireEntry,
};

// Re-export from error module
pub use error::{Error, FieldType, FieldTypeFault, Result};

// Re-export from import module
pub use import::{ChartInput, ChartLoader, load};

pub use mode::{Mode, ModeRef};
pub use registry::{ChartBuilder, ModeRegistry};
pub use time::BeatTime;
