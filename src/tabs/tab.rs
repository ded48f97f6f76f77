// src/tabs/tab.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseSubsystemError, ParseTabError};

/// One of the nine inventory tabs used across the tool.
///
/// Variant order is the registry declaration order and is what `Ord` sorts by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalTab {
    Food,
    Mats,
    App,
    Dragons,
    Fam,
    Battle,
    Skins,
    Specialty,
    Other,
}

impl CanonicalTab {
    pub const ALL: [CanonicalTab; 9] = [
        CanonicalTab::Food,
        CanonicalTab::Mats,
        CanonicalTab::App,
        CanonicalTab::Dragons,
        CanonicalTab::Fam,
        CanonicalTab::Battle,
        CanonicalTab::Skins,
        CanonicalTab::Specialty,
        CanonicalTab::Other,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            CanonicalTab::Food => "food",
            CanonicalTab::Mats => "mats",
            CanonicalTab::App => "app",
            CanonicalTab::Dragons => "dragons",
            CanonicalTab::Fam => "fam",
            CanonicalTab::Battle => "battle",
            CanonicalTab::Skins => "skins",
            CanonicalTab::Specialty => "specialty",
            CanonicalTab::Other => "other",
        }
    }

    /// Exact id match only; no case folding, no aliases.
    pub fn from_id(value: &str) -> Option<Self> {
        let tab = match value {
            "food" => CanonicalTab::Food,
            "mats" => CanonicalTab::Mats,
            "app" => CanonicalTab::App,
            "dragons" => CanonicalTab::Dragons,
            "fam" => CanonicalTab::Fam,
            "battle" => CanonicalTab::Battle,
            "skins" => CanonicalTab::Skins,
            "specialty" => CanonicalTab::Specialty,
            "other" => CanonicalTab::Other,
            _ => return None,
        };
        Some(tab)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CanonicalTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalTab::from_id(s).ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// A site area with its own tab vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    /// Auction house.
    Ah,
    /// Hoard / vault.
    Hoard,
    /// Marketplace (treasure and gem).
    Market,
    /// Legacy game database.
    Legacy,
}

/// Accepted spellings, matched case-insensitively. Anything else is rejected.
const SUBSYSTEM_ALIASES: &[(&str, Subsystem)] = &[
    ("ah", Subsystem::Ah),
    ("auction", Subsystem::Ah),
    ("auction-house", Subsystem::Ah),
    ("hoard", Subsystem::Hoard),
    ("vault", Subsystem::Hoard),
    ("market", Subsystem::Market),
    ("legacy", Subsystem::Legacy),
    ("database", Subsystem::Legacy),
    ("game-database", Subsystem::Legacy),
];

impl Subsystem {
    pub const ALL: [Subsystem; 4] = [
        Subsystem::Ah,
        Subsystem::Hoard,
        Subsystem::Market,
        Subsystem::Legacy,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Subsystem::Ah => "ah",
            Subsystem::Hoard => "hoard",
            Subsystem::Market => "market",
            Subsystem::Legacy => "legacy",
        }
    }

    pub fn aliases() -> &'static [(&'static str, Subsystem)] {
        SUBSYSTEM_ALIASES
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Subsystem {
    type Err = ParseSubsystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        SUBSYSTEM_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(key))
            .map(|(_, sub)| *sub)
            .ok_or_else(|| ParseSubsystemError(s.to_string()))
    }
}
