// src/entity/color.rs
use serde::{Deserialize, Serialize};

/// Fixed palette of note colors, in display order.
///
/// The serialized form is the stored background class (`bg-sky-800`), which
/// keeps the on-disk collection compatible with the notepad's original format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaletteColor {
    #[serde(rename = "bg-rose-900")]
    Rose,
    #[serde(rename = "bg-amber-900")]
    Amber,
    #[serde(rename = "bg-lime-900")]
    Lime,
    #[default]
    #[serde(rename = "bg-sky-800")]
    Sky,
    #[serde(rename = "bg-indigo-900")]
    Indigo,
    #[serde(rename = "bg-fuchsia-900")]
    Fuchsia,
    #[serde(rename = "bg-pink-900")]
    Pink,
    #[serde(rename = "bg-slate-800")]
    Slate,
}

/// All palette entries. The default color sits at index 3.
pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor::Rose,
    PaletteColor::Amber,
    PaletteColor::Lime,
    PaletteColor::Sky,
    PaletteColor::Indigo,
    PaletteColor::Fuchsia,
    PaletteColor::Pink,
    PaletteColor::Slate,
];

pub const DEFAULT_COLOR: PaletteColor = PALETTE[3];

impl PaletteColor {
    /// Stored value of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Rose => "bg-rose-900",
            PaletteColor::Amber => "bg-amber-900",
            PaletteColor::Lime => "bg-lime-900",
            PaletteColor::Sky => "bg-sky-800",
            PaletteColor::Indigo => "bg-indigo-900",
            PaletteColor::Fuchsia => "bg-fuchsia-900",
            PaletteColor::Pink => "bg-pink-900",
            PaletteColor::Slate => "bg-slate-800",
        }
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Rose => "rose",
            PaletteColor::Amber => "amber",
            PaletteColor::Lime => "lime",
            PaletteColor::Sky => "sky",
            PaletteColor::Indigo => "indigo",
            PaletteColor::Fuchsia => "fuchsia",
            PaletteColor::Pink => "pink",
            PaletteColor::Slate => "slate",
        }
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PaletteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PALETTE
            .iter()
            .copied()
            .find(|c| c.name() == wanted || c.as_str() == wanted)
            .ok_or_else(|| format!("Invalid color: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_palette_index_three() {
        assert_eq!(PaletteColor::default(), DEFAULT_COLOR);
        assert_eq!(DEFAULT_COLOR.as_str(), "bg-sky-800");
    }

    #[test]
    fn test_parse_short_and_stored_names() {
        assert_eq!("rose".parse::<PaletteColor>(), Ok(PaletteColor::Rose));
        assert_eq!("Indigo".parse::<PaletteColor>(), Ok(PaletteColor::Indigo));
        assert_eq!(
            "bg-slate-800".parse::<PaletteColor>(),
            Ok(PaletteColor::Slate)
        );
        assert!("teal".parse::<PaletteColor>().is_err());
    }

    #[test]
    fn test_serializes_as_stored_value() {
        let json = serde_json::to_string(&PaletteColor::Pink).unwrap();
        assert_eq!(json, "\"bg-pink-900\"");

        let parsed: PaletteColor = serde_json::from_str("\"bg-lime-900\"").unwrap();
        assert_eq!(parsed, PaletteColor::Lime);

        assert!(serde_json::from_str::<PaletteColor>("\"bg-teal-500\"").is_err());
    }
}
