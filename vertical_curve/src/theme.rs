use std::str::FromStr;

use crate::error::CurveError;

/// Color used for the evaluated station marker and its reference line.
pub const MARKER_COLOR: &str = "#ff0000";

/// Colors applied to a rendered profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub line: &'static str,
    pub text: &'static str,
}

/// Named color schemes for profile plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    HpGreen,
    SolarizedLight,
    SolarizedDark,
    ClassicBlue,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::HpGreen,
        Theme::SolarizedLight,
        Theme::SolarizedDark,
        Theme::ClassicBlue,
    ];

    /// Human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::HpGreen => "HP Green",
            Theme::SolarizedLight => "Solarized Light",
            Theme::SolarizedDark => "Solarized Dark",
            Theme::ClassicBlue => "Classic Blue",
        }
    }

    /// Name accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Theme::HpGreen => "hp-green",
            Theme::SolarizedLight => "solarized-light",
            Theme::SolarizedDark => "solarized-dark",
            Theme::ClassicBlue => "classic-blue",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::HpGreen => ThemeColors {
                background: "#101010",
                line: "#39FF14",
                text: "#39FF14",
            },
            Theme::SolarizedLight => ThemeColors {
                background: "#fdf6e3",
                line: "#268bd2",
                text: "#657b83",
            },
            Theme::SolarizedDark => ThemeColors {
                background: "#002b36",
                line: "#2aa198",
                text: "#93a1a1",
            },
            Theme::ClassicBlue => ThemeColors {
                background: "#ffffff",
                line: "#1f77b4",
                text: "#000000",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Theme {
    type Err = CurveError;

    /// Parses either the kebab-case key or the display name. Case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.key() == wanted || t.display_name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CurveError::invalid("theme", format!("unknown theme {s}")))
    }
}
