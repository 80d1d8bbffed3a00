use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::palette::HighlightColor;

/// One of the three bracket pairs recognized in template text.
///
/// - `Curly` marks placeholder tokens: `{PropertyAddress}`
/// - `Square` marks optional alternatives: `[soon/quickly]`
/// - `Round` marks parenthetical notes: `(Any interest)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterKind {
    Curly,
    Square,
    Round,
}

impl DelimiterKind {
    /// All kinds in the default scan order.
    pub const ALL: [DelimiterKind; 3] = [Self::Curly, Self::Square, Self::Round];

    pub const fn open(self) -> u8 {
        match self {
            Self::Curly => b'{',
            Self::Square => b'[',
            Self::Round => b'(',
        }
    }

    pub const fn close(self) -> u8 {
        match self {
            Self::Curly => b'}',
            Self::Square => b']',
            Self::Round => b')',
        }
    }

    /// Color tag used when no palette overrides it.
    pub const fn default_color(self) -> HighlightColor {
        match self {
            Self::Curly => HighlightColor::Green,
            Self::Square => HighlightColor::Blue,
            Self::Round => HighlightColor::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Curly => "curly",
            Self::Square => "square",
            Self::Round => "round",
        }
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a delimiter kind name is not one of `curly`, `square`, `round`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDelimiter(pub String);

impl fmt::Display for UnknownDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown delimiter kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDelimiter {}

impl FromStr for DelimiterKind {
    type Err = UnknownDelimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDelimiter(s.to_string()))
    }
}
