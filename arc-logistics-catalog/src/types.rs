//! Data model types for the content catalog.
//!
//! These types describe the static game content: project phases, workshops,
//! their upgrade levels, and the item requirements attached to each.

use serde::{Deserialize, Serialize};

// ── Rarity ──────────────────────────────────────────────────────────────────

/// Item rarity tier.
///
/// Variants are declared lowest first so the derived `Ord` matches the
/// in-game ranking (`Legendary > Epic > Rare > Uncommon > Common`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// All rarity variants, lowest first.
const ALL_RARITIES: &[Rarity] = &[
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
];

impl Rarity {
    /// Upper-case label as shown in game (`"EPIC"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "COMMON",
            Self::Uncommon => "UNCOMMON",
            Self::Rare => "RARE",
            Self::Epic => "EPIC",
            Self::Legendary => "LEGENDARY",
        }
    }

    pub fn all() -> &'static [Rarity] {
        ALL_RARITIES
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `Rarity`.
#[derive(Debug, Clone)]
pub struct RarityParseError(pub String);

impl std::fmt::Display for RarityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expected: Vec<String> = Rarity::all()
            .iter()
            .map(|r| r.as_str().to_lowercase())
            .collect();
        write!(
            f,
            "unknown rarity: '{}' (expected one of: {})",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for RarityParseError {}

impl std::str::FromStr for Rarity {
    type Err = RarityParseError;

    /// Parse a rarity name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Rarity::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == upper)
            .ok_or_else(|| RarityParseError(s.to_string()))
    }
}

// ── Requirements ────────────────────────────────────────────────────────────

/// A single material requirement: `count` units of the named item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequirement {
    /// Display name. Casing is not guaranteed to be consistent across entries.
    pub name: String,
    pub count: u32,
    pub rarity: Rarity,
    /// Short glyph or image reference; interpretation is left to the frontend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ItemRequirement {
    pub fn new(name: impl Into<String>, count: u32, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            count,
            rarity,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

// ── Project ─────────────────────────────────────────────────────────────────

/// One stage of the linear project track.
///
/// Phase ids start at 1 and are contiguous; the phase with id `n` lives at
/// position `n - 1` in [`Catalog::phases`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<ItemRequirement>,
}

// ── Workshop ────────────────────────────────────────────────────────────────

/// Requirements to reach `level` of a workshop. Level 1 is the baseline and
/// never has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopLevel {
    pub level: u32,
    #[serde(default)]
    pub requirements: Vec<ItemRequirement>,
}

/// An independent upgrade track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub max_level: u32,
    /// Levels 2..=max_level in ascending order.
    #[serde(default)]
    pub levels: Vec<WorkshopLevel>,
}

impl Workshop {
    /// Requirements for upgrading into `level`, if the catalog defines them.
    pub fn level(&self, level: u32) -> Option<&WorkshopLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Clamp a level into the valid range `1..=max_level`.
    pub fn clamp_level(&self, level: i64) -> u32 {
        level.clamp(1, i64::from(self.max_level.max(1))) as u32
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// The full static content table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub phases: Vec<ProjectPhase>,
    #[serde(default)]
    pub workshops: Vec<Workshop>,
}

impl Catalog {
    pub fn phase_count(&self) -> u32 {
        self.phases.len() as u32
    }

    /// Look up a phase by its 1-based id.
    pub fn phase(&self, id: u32) -> Option<&ProjectPhase> {
        let index = (id as usize).checked_sub(1)?;
        self.phases.get(index)
    }

    /// Look up a workshop by id (exact match).
    pub fn workshop(&self, id: &str) -> Option<&Workshop> {
        self.workshops.iter().find(|w| w.id == id)
    }

    /// Total number of requirement rows across all phases and levels.
    pub fn requirement_count(&self) -> usize {
        let phases: usize = self.phases.iter().map(|p| p.requirements.len()).sum();
        let levels: usize = self
            .workshops
            .iter()
            .flat_map(|w| &w.levels)
            .map(|l| l.requirements.len())
            .sum();
        phases + levels
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
