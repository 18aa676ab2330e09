use std::collections::BTreeMap;

use tracing::debug;

use crate::chart::{Chart, ChartArgs, ChartData, KeyLayout, ModeLayout};
use crate::error::{Error, Result};
use crate::mode::Mode;

/// Constructor of the concrete chart type of one mode.
pub type ChartBuilder = fn(ChartArgs) -> Result<Chart>;

fn build_chart<L: ModeLayout>(args: ChartArgs) -> Result<Chart> {
    ChartData::<L>::build(args).map(L::wrap)
}

/// Which modes have concrete chart types, and how to build them.
///
/// A mode can be known to [`Mode`] and still be missing here; loading such
/// a chart fails with [`Error::ModeNotImplemented`].
#[derive(Clone)]
pub struct ModeRegistry {
    builders: BTreeMap<Mode, ChartBuilder>,
}

impl ModeRegistry {
    /// Registry with no implemented mode.
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Registry with every layout shipped in this crate.
    pub fn builtin() -> Self {
        Self::empty().with_layout::<KeyLayout>()
    }

    pub fn with_layout<L: ModeLayout>(mut self) -> Self {
        self.register::<L>();
        self
    }

    pub fn register<L: ModeLayout>(&mut self) -> &mut Self {
        self.builders.insert(L::MODE, build_chart::<L>);
        self
    }

    pub fn builder(&self, mode: Mode) -> Option<ChartBuilder> {
        self.builders.get(&mode).copied()
    }

    pub fn is_implemented(&self, mode: Mode) -> bool {
        self.builders.contains_key(&mode)
    }

    /// Implemented modes in ID order.
    pub fn implemented(&self) -> Vec<Mode> {
        self.builders.keys().copied().collect()
    }

    /// Map a numeric mode ID to its mode and builder.
    pub fn resolve(&self, id: i64) -> Result<(Mode, ChartBuilder)> {
        let mode = Mode::from_id(id).ok_or_else(|| Error::UnsupportedMode(id.to_string()))?;
        let builder = self.builder(mode).ok_or(Error::ModeNotImplemented(mode))?;
        debug!("Resolved mode {}", mode);
        Ok((mode, builder))
    }
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ModeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeRegistry")
            .field("implemented", &self.implemented())
            .finish()
    }
}
