use std::fmt;

use serde::{Deserialize, Serialize};

use super::kinds::DelimiterKind;

/// Named display color for a highlighted run.
///
/// Hosts map these onto their own color model (CSS class, terminal color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Green,
    Blue,
    Red,
    Yellow,
    Magenta,
    Cyan,
}

impl HighlightColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The color each delimiter kind renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub curly: HighlightColor,
    pub square: HighlightColor,
    pub round: HighlightColor,
}

impl Palette {
    pub fn color_of(&self, kind: DelimiterKind) -> HighlightColor {
        match kind {
            DelimiterKind::Curly => self.curly,
            DelimiterKind::Square => self.square,
            DelimiterKind::Round => self.round,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            curly: DelimiterKind::Curly.default_color(),
            square: DelimiterKind::Square.default_color(),
            round: DelimiterKind::Round.default_color(),
        }
    }
}
