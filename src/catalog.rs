//! The channel catalog: an ordered, index-aligned list of channel names and
//! display colours.
//!
//! A catalog is validated once when it is built and is immutable afterwards,
//! so every other part of the widget can rely on it holding at least one
//! channel with a colour for each name.

use egui::Color32;
use serde::Deserialize;

use crate::palette::parse_hex_color;

/// Errors raised while building a [`ChannelCatalog`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("channel names and colors differ in length (names: {names}, colors: {colors})")]
    LengthMismatch { names: usize, colors: usize },

    #[error("catalog needs at least one channel")]
    Empty,

    #[error("invalid channel color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Built-in channels: primaries plus the pairwise difference channels,
/// each shown in a pastel tone.
const DEFAULT_CHANNELS: [(&str, [u8; 3]); 9] = [
    ("RED", [255, 182, 193]),
    ("GREEN", [152, 251, 152]),
    ("BLUE", [173, 216, 230]),
    ("R-G", [255, 218, 185]),
    ("R-B", [255, 192, 203]),
    ("G-R", [211, 255, 166]),
    ("G-B", [175, 238, 238]),
    ("B-R", [221, 160, 221]),
    ("B-G", [176, 224, 230]),
];

/// JSON shape accepted by [`ChannelCatalog::from_json`].
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    names: Vec<String>,
    colors: Vec<String>,
}

/// Ordered set of selectable channels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCatalog {
    names: Vec<String>,
    colors: Vec<Color32>,
}

impl ChannelCatalog {
    /// Builds a catalog from parallel name and colour sequences.
    ///
    /// Fails if the sequences differ in length or are empty.
    pub fn new<N, C>(names: N, colors: C) -> Result<Self, CatalogError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: IntoIterator<Item = Color32>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let colors: Vec<Color32> = colors.into_iter().collect();

        if names.len() != colors.len() {
            return Err(CatalogError::LengthMismatch {
                names: names.len(),
                colors: colors.len(),
            });
        }
        if names.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { names, colors })
    }

    /// Parses a catalog from `{"names": [...], "colors": ["#rrggbb", ...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        // Report a shape problem before complaining about individual colours.
        if document.names.len() != document.colors.len() {
            return Err(CatalogError::LengthMismatch {
                names: document.names.len(),
                colors: document.colors.len(),
            });
        }

        let colors = document
            .colors
            .iter()
            .map(|hex| parse_hex_color(hex).ok_or_else(|| CatalogError::InvalidColor(hex.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(document.names, colors)
    }

    /// Number of channels. Never zero.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Wraps any signed index into `[0, len)`.
    ///
    /// `normalize(i) == normalize(i + len)` for every `i`.
    pub fn normalize(&self, index: i64) -> usize {
        normalize_index(index, self.len())
    }

    /// Name of the channel at `index` (wrapped into range).
    pub fn name(&self, index: usize) -> &str {
        &self.names[index % self.len()]
    }

    /// Display colour of the channel at `index` (wrapped into range).
    pub fn color(&self, index: usize) -> Color32 {
        self.colors[index % self.len()]
    }

    /// Index of the first channel called `name`, if any.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Channel names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ChannelCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_CHANNELS.iter().map(|(name, _)| name.to_string()).collect(),
            colors: DEFAULT_CHANNELS
                .iter()
                .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b))
                .collect(),
        }
    }
}

/// Wraps `index` into `[0, len)` with Euclidean remainder.
///
/// Returns 0 when `len` is 0.
pub fn normalize_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> ChannelCatalog {
        ChannelCatalog::new(
            ["RED", "GREEN", "BLUE"],
            [Color32::RED, Color32::GREEN, Color32::BLUE],
        )
        .unwrap()
    }

    #[test]
    fn test_new_accepts_matching_lengths() {
        let catalog = rgb();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["RED", "GREEN", "BLUE"]);
        assert_eq!(catalog.color(2), Color32::BLUE);
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = ChannelCatalog::new(["RED", "GREEN"], [Color32::RED]).unwrap_err();
        assert!(matches!(err, CatalogError::LengthMismatch { names: 2, colors: 1 }));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = ChannelCatalog::new(Vec::<String>::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = ChannelCatalog::default();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.name(0), "RED");
        assert_eq!(catalog.name(8), "B-G");
        assert_eq!(catalog.color(0), Color32::from_rgb(255, 182, 193));
        assert_eq!(catalog.position("G-B"), Some(6));
    }

    #[test]
    fn test_normalize_wraps_both_directions() {
        let catalog = rgb();
        assert_eq!(catalog.normalize(0), 0);
        assert_eq!(catalog.normalize(3), 0);
        assert_eq!(catalog.normalize(-1), 2);
        assert_eq!(catalog.normalize(-4), 2);
        assert_eq!(catalog.normalize(7), 1);

        for i in -20..20 {
            assert!(catalog.normalize(i) < 3);
            assert_eq!(catalog.normalize(i), catalog.normalize(i + 3));
        }
    }

    #[test]
    fn test_normalize_index_zero_len() {
        assert_eq!(normalize_index(5, 0), 0);
    }

    #[test]
    fn test_position_unknown_name() {
        assert_eq!(rgb().position("ALPHA"), None);
        assert_eq!(rgb().position("red"), None);
    }

    #[test]
    fn test_from_json() {
        let catalog = ChannelCatalog::from_json(
            r##"{"names": ["RED", "BLUE"], "colors": ["#ffb6c1", "#add8e6"]}"##,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.color(1), Color32::from_rgb(173, 216, 230));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            ChannelCatalog::from_json(r##"{"names": ["RED"], "colors": []}"##),
            Err(CatalogError::LengthMismatch { names: 1, colors: 0 })
        ));
        assert!(matches!(
            ChannelCatalog::from_json(r##"{"names": [], "colors": []}"##),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            ChannelCatalog::from_json(r##"{"names": ["RED"], "colors": ["pink"]}"##),
            Err(CatalogError::InvalidColor(c)) if c == "pink"
        ));
        assert!(matches!(
            ChannelCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
