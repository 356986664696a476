use serde::{Deserialize, Serialize};

use crate::curve::DEFAULT_SAMPLE_COUNT;
use crate::theme::Theme;

/// Options for rendering a profile plot.
///
/// Missing fields in a settings file fall back to [`PlotSettings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub theme: Theme,
    pub sample_count: usize,
    /// Drawing width in SVG units.
    pub width: f64,
    /// Drawing height in SVG units.
    pub height: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            width: 640.0,
            height: 480.0,
        }
    }
}

impl PlotSettings {
    /// Returns a copy using `theme`.
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }
}
