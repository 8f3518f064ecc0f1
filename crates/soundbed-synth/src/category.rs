//! Ambient-sound categories and name-based dispatch.
//!
//! The category is inferred from the requested output name by ordered
//! substring matching. The table order is part of the contract: a name that
//! mentions two categories ("rain-in-the-forest.mp3") resolves to whichever
//! entry comes first.

use std::fmt;

/// Ambient-sound category, selecting a synthesis formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// High-frequency noise modulated at 8 Hz.
    Rain,
    /// Two slow sine swells (0.5 Hz and 1 Hz).
    Ocean,
    /// Noise modulated at 0.3 Hz.
    Wind,
    /// 0.1 Hz rumble with a low noise floor.
    Thunder,
    /// Gentle 0.4 Hz and 2 Hz sines.
    Forest,
    /// Quiet 3 Hz hum with faint noise.
    Cafe,
    /// 1.5 Hz and 5 Hz sines over light noise.
    City,
    /// Crackle bursts gated at 6 Hz over a 1.5 Hz sine.
    Fire,
    /// 8 Hz and 12 Hz chirps with slow amplitude gating.
    Birds,
    /// Steady 2 Hz and 4 Hz sines.
    Fan,
    /// Fallback 440 Hz tone for unmatched names.
    Tone,
}

/// Ordered dispatch table. First match wins.
const MATCH_TABLE: &[(&str, Category)] = &[
    ("rain", Category::Rain),
    ("ocean", Category::Ocean),
    ("wind", Category::Wind),
    ("thunder", Category::Thunder),
    ("forest", Category::Forest),
    ("cafe", Category::Cafe),
    ("city", Category::City),
    ("fire", Category::Fire),
    ("birds", Category::Birds),
    ("fan", Category::Fan),
];

impl Category {
    /// Infers the category from an output name.
    ///
    /// Matching is case-insensitive and by substring, so "Heavy-Rain.mp3"
    /// and "rainstorm.wav" both resolve to [`Category::Rain`]. Names that
    /// match no table entry fall back to [`Category::Tone`].
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        for (needle, category) in MATCH_TABLE {
            if lowered.contains(needle) {
                return *category;
            }
        }
        Category::Tone
    }

    /// All categories with a dedicated formula, in table order.
    pub fn all() -> &'static [Category] {
        const ALL: &[Category] = &[
            Category::Rain,
            Category::Ocean,
            Category::Wind,
            Category::Thunder,
            Category::Forest,
            Category::Cafe,
            Category::City,
            Category::Fire,
            Category::Birds,
            Category::Fan,
            Category::Tone,
        ];
        ALL
    }

    /// Short lowercase label, matching the dispatch substring.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rain => "rain",
            Category::Ocean => "ocean",
            Category::Wind => "wind",
            Category::Thunder => "thunder",
            Category::Forest => "forest",
            Category::Cafe => "cafe",
            Category::City => "city",
            Category::Fire => "fire",
            Category::Birds => "birds",
            Category::Fan => "fan",
            Category::Tone => "tone",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
