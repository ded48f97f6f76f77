// src/tabs/registry.rs
//! The closed tab vocabulary: aliases, site categories and per-subsystem names.
//!
//! Tables are declared as plain string-keyed data (the way they read on the
//! site) and checked into typed form once, in [`Registry::from_declarations`].
//! A typo in a tab key is a [`RegistryError`], not a silent miss at lookup time.

use std::collections::BTreeMap;

use serde::Serialize;

use super::resolve::generate_skin_categories;
use super::tab::{CanonicalTab, Subsystem};
use crate::config::RegistryOptions;
use crate::error::RegistryError;

/// A tab's name in one subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubsystemName {
    /// The tab does not exist in that subsystem.
    Absent,
    Single(&'static str),
    /// Several possible pages; the item decides which (see `Translator`).
    Candidates(&'static [&'static str]),
}

impl SubsystemName {
    /// Every name this entry may take.
    pub fn names(&self) -> &[&'static str] {
        match self {
            SubsystemName::Absent => &[],
            SubsystemName::Single(name) => std::slice::from_ref(name),
            SubsystemName::Candidates(names) => names,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubsystemTabSet {
    pub ah: SubsystemName,
    pub hoard: SubsystemName,
    pub market: SubsystemName,
    pub legacy: SubsystemName,
}

impl SubsystemTabSet {
    pub const ABSENT: SubsystemTabSet = SubsystemTabSet {
        ah: SubsystemName::Absent,
        hoard: SubsystemName::Absent,
        market: SubsystemName::Absent,
        legacy: SubsystemName::Absent,
    };

    pub fn get(&self, subsystem: Subsystem) -> &SubsystemName {
        match subsystem {
            Subsystem::Ah => &self.ah,
            Subsystem::Hoard => &self.hoard,
            Subsystem::Market => &self.market,
            Subsystem::Legacy => &self.legacy,
        }
    }
}

pub type TabTable = &'static [(&'static str, &'static [&'static str])];

/// Raw, unchecked table declarations.
#[derive(Clone, Copy, Debug)]
pub struct Declarations {
    pub aliases: TabTable,
    /// Skins are generated from the breed list and must not be declared here.
    pub categories: TabTable,
    pub subsystems: &'static [(&'static str, SubsystemTabSet)],
}

use SubsystemName::{Absent, Candidates, Single};

const TAB_ALIASES: TabTable = tab_table! {
    food: ["food"],
    mats: ["mats", "materials", "material", "trinket", "trinkets"],
    app: ["app", "apparel", "equipment"],
    dragons: ["dragons", "dragon"],
    fam: ["fam", "familiars", "familiar"],
    battle: ["battle", "battle_items", "battle items"],
    skins: ["skins", "skin"],
    specialty: ["specialty", "genes", "scenes", "scenes & vistas", "special", "trinket", "trinkets"],
    other: ["other", "bundles", "bundle", "trinket", "trinkets"],
};

const TAB_CATEGORIES: TabTable = tab_table! {
    food: ["plant", "insect", "meat", "seafood"],
    mats: ["dragonmade", "minerals & ores", "organics", "transmutation", "dragonmade material", "organic material"],
    app: ["apparel"],
    dragons: [],
    fam: ["familiar"],
    battle: ["ability stone", "accessory stone", "augment stone", "energy stone", "battle item", "consumable"],
    specialty: ["forum vista", "vista", "scene", "specialty items", "specialty item"],
    other: ["blueprints", "chests", "dragon eggs", "holiday items", "trinkets", "chest", "holiday item", "trinket", "dragon egg", "blueprint"],
};

const TABS_BY_SUBSYSTEM: &[(&str, SubsystemTabSet)] = &[
    ("food", SubsystemTabSet { ah: Single("food"), hoard: Single("food"), market: Absent, legacy: Single("food") }),
    ("mats", SubsystemTabSet { ah: Single("mats"), hoard: Single("materials"), market: Absent, legacy: Single("trinket") }),
    ("app", SubsystemTabSet { ah: Single("app"), hoard: Single("apparel"), market: Single("apparel"), legacy: Single("equipment") }),
    ("dragons", SubsystemTabSet { ah: Single("dragons"), hoard: Absent, market: Absent, legacy: Absent }),
    ("fam", SubsystemTabSet { ah: Single("fam"), hoard: Single("familiars"), market: Single("familiars"), legacy: Single("familiar") }),
    ("battle", SubsystemTabSet { ah: Single("battle"), hoard: Single("battle"), market: Single("battle"), legacy: Single("battle_items") }),
    ("skins", SubsystemTabSet { ah: Single("skins"), hoard: Single("skins"), market: Single("skins"), legacy: Single("skins") }),
    ("specialty", SubsystemTabSet { ah: Single("specialty"), hoard: Single("specialty"), market: Candidates(&["specialty", "genes", "scenes"]), legacy: Single("trinket") }),
    ("other", SubsystemTabSet { ah: Single("other"), hoard: Single("other"), market: Candidates(&["bundles"]), legacy: Single("trinket") }),
];

pub const STANDARD: Declarations = Declarations {
    aliases: TAB_ALIASES,
    categories: TAB_CATEGORIES,
    subsystems: TABS_BY_SUBSYSTEM,
};

/// Checked, immutable tab tables. Build once and share by reference.
#[derive(Clone, Debug)]
pub struct Registry {
    aliases: Vec<(CanonicalTab, Vec<String>)>,
    categories: Vec<(CanonicalTab, Vec<String>)>,
    tab_sets: [SubsystemTabSet; CanonicalTab::ALL.len()],
}

/// Everything the registry knows, for debugging and tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub tabs: Vec<CanonicalTab>,
    pub aliases: BTreeMap<CanonicalTab, Vec<String>>,
    pub categories: BTreeMap<CanonicalTab, Vec<String>>,
    pub subsystem_sets: BTreeMap<CanonicalTab, SubsystemTabSet>,
}

impl Registry {
    /// Standard tables with the default breed snapshot.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(&RegistryOptions::default())
    }

    pub fn new(options: &RegistryOptions) -> Result<Self, RegistryError> {
        Self::from_declarations(&STANDARD, options.breeds.as_slice())
    }

    pub fn from_declarations<S: AsRef<str>>(
        decls: &Declarations,
        breeds: &[S],
    ) -> Result<Self, RegistryError> {
        if breeds.iter().all(|b| b.as_ref().trim().is_empty()) {
            return Err(RegistryError::NoBreeds);
        }

        let aliases = check_table("alias", decls.aliases)?;

        let mut categories = check_table("category", decls.categories)?;
        if categories.iter().any(|(tab, _)| *tab == CanonicalTab::Skins) {
            return Err(RegistryError::DuplicateTab {
                table: "category",
                tab: CanonicalTab::Skins,
            });
        }
        categories.push((CanonicalTab::Skins, generate_skin_categories(breeds)));

        let mut tab_sets = [SubsystemTabSet::ABSENT; CanonicalTab::ALL.len()];
        let mut seen = [false; CanonicalTab::ALL.len()];
        for (key, set) in decls.subsystems {
            let tab = known_tab("subsystem", key)?;
            if std::mem::replace(&mut seen[tab.index()], true) {
                return Err(RegistryError::DuplicateTab { table: "subsystem", tab });
            }
            check_candidates(tab, set)?;
            tab_sets[tab.index()] = *set;
        }

        warn_category_collisions(&categories);

        let registry = Registry { aliases, categories, tab_sets };
        logf!(
            "Registry: {} tabs, {} aliases, {} categories ({} breeds)",
            CanonicalTab::ALL.len(),
            registry.aliases.iter().map(|(_, a)| a.len()).sum::<usize>(),
            registry.categories.iter().map(|(_, c)| c.len()).sum::<usize>(),
            breeds.len(),
        );
        Ok(registry)
    }

    pub fn tabs(&self) -> &'static [CanonicalTab] {
        &CanonicalTab::ALL
    }

    /// Alias lists in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (CanonicalTab, &[String])> + '_ {
        self.aliases.iter().map(|(tab, a)| (*tab, a.as_slice()))
    }

    /// Category lists in declaration order; skins last.
    pub fn categories(&self) -> impl Iterator<Item = (CanonicalTab, &[String])> + '_ {
        self.categories.iter().map(|(tab, c)| (*tab, c.as_slice()))
    }

    pub fn tab_set(&self, tab: CanonicalTab) -> &SubsystemTabSet {
        &self.tab_sets[tab.index()]
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            tabs: CanonicalTab::ALL.to_vec(),
            aliases: self.aliases.iter().cloned().collect(),
            categories: self.categories.iter().cloned().collect(),
            subsystem_sets: CanonicalTab::ALL
                .iter()
                .map(|tab| (*tab, *self.tab_set(*tab)))
                .collect(),
        }
    }
}

/* ---------- validation ---------- */

fn known_tab(table: &'static str, key: &str) -> Result<CanonicalTab, RegistryError> {
    CanonicalTab::from_id(key).ok_or_else(|| RegistryError::UnknownTab {
        table,
        tab: s!(key),
    })
}

fn check_table(
    table: &'static str,
    decl: TabTable,
) -> Result<Vec<(CanonicalTab, Vec<String>)>, RegistryError> {
    let mut out: Vec<(CanonicalTab, Vec<String>)> = Vec::with_capacity(decl.len());
    for (key, entries) in decl {
        let tab = known_tab(table, key)?;
        if out.iter().any(|(t, _)| *t == tab) {
            return Err(RegistryError::DuplicateTab { table, tab });
        }
        out.push((tab, entries.iter().map(|e| e.to_lowercase()).collect()));
    }
    Ok(out)
}

fn check_candidates(tab: CanonicalTab, set: &SubsystemTabSet) -> Result<(), RegistryError> {
    for subsystem in Subsystem::ALL {
        if let Candidates(_) = set.get(subsystem) {
            let allowed = subsystem == Subsystem::Market
                && matches!(tab, CanonicalTab::Specialty | CanonicalTab::Other);
            if !allowed {
                return Err(RegistryError::UnexpectedCandidates { tab, subsystem });
            }
        }
    }
    Ok(())
}

// Lookup takes the first tab in declaration order, so a collision is not fatal.
fn warn_category_collisions(categories: &[(CanonicalTab, Vec<String>)]) {
    for (i, (tab, cats)) in categories.iter().enumerate() {
        for (other, later) in &categories[i + 1..] {
            for cat in cats.iter().filter(|c| later.contains(c)) {
                logw!("Registry: category {cat:?} listed under both {tab} and {other}; {tab} wins");
            }
        }
    }
}
