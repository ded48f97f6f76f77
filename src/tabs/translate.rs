// src/tabs/translate.rs
//! Canonical tab → the name one subsystem uses for it.
//!
//! Most tabs map to one name per subsystem. Market splits `specialty` into
//! specialty/genes/scenes and shows `other` only as bundles; the item's name
//! and category pick the page. Every call returns a fresh value; the registry
//! is never written.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::identify::{Evidence, Identifier};
use super::registry::{Registry, SubsystemName, SubsystemTabSet};
use super::resolve::Resolver;
use super::tab::{CanonicalTab, Subsystem};
use crate::config::IdentifyOptions;

const SCENE_CATEGORIES: &[&str] = &["forum vista", "scene", "vista"];

static SCENE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Scene|Vista)").expect("static scene pattern"));
static GENE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Primary|Secondary|Tertiary|Breed\sChange|Remove\sGene)")
        .expect("static gene pattern")
});

/// Item text used to pick among several subsystem names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hint<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> Hint<'a> {
    pub fn name(name: &'a str) -> Self {
        Self { name: Some(name), category: None }
    }

    pub fn category(category: &'a str) -> Self {
        Self { name: None, category: Some(category) }
    }
}

/// Item record as supplied by the tooltip/listing scrapers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: Option<String>,
    /// Raw tab token, often taken from the icon path (and so often `trinket`).
    pub tab: Option<String>,
    pub category: Option<String>,
}

impl Item {
    pub fn hint(&self) -> Hint<'_> {
        Hint {
            name: self.name.as_deref(),
            category: self.category.as_deref(),
        }
    }
}

/// An item's tab in every subsystem, disambiguated to single names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedTabSet {
    pub tab: CanonicalTab,
    pub ah: Option<&'static str>,
    pub hoard: Option<&'static str>,
    pub market: Option<&'static str>,
    pub legacy: Option<&'static str>,
}

impl ResolvedTabSet {
    pub fn get(&self, subsystem: Subsystem) -> Option<&'static str> {
        match subsystem {
            Subsystem::Ah => self.ah,
            Subsystem::Hoard => self.hoard,
            Subsystem::Market => self.market,
            Subsystem::Legacy => self.legacy,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Translator<'r> {
    resolver: Resolver<'r>,
}

impl<'r> Translator<'r> {
    pub fn new(resolver: Resolver<'r>) -> Self {
        Self { resolver }
    }

    fn registry(&self) -> &'r Registry {
        self.resolver.registry()
    }

    pub fn tab_set(&self, tab: CanonicalTab) -> &'r SubsystemTabSet {
        self.registry().tab_set(tab)
    }

    pub fn tab_name_for(
        &self,
        tab: CanonicalTab,
        subsystem: Subsystem,
        hint: Option<&Hint<'_>>,
    ) -> Option<&'static str> {
        match *self.tab_set(tab).get(subsystem) {
            SubsystemName::Absent => None,
            SubsystemName::Single(name) => Some(name),
            SubsystemName::Candidates(candidates) => {
                let hint = hint.copied().unwrap_or_default();
                let picked = disambiguate(tab, &hint)?;
                let name = candidates.iter().copied().find(|c| *c == picked);
                logd!("Translate: {tab} in {subsystem} for {hint:?} → {name:?}");
                name
            }
        }
    }

    /// Every name the subsystem uses, in declaration order, without repeats.
    pub fn valid_tabs_for(&self, subsystem: Subsystem) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for tab in CanonicalTab::ALL {
            for name in self.tab_set(tab).get(subsystem).names() {
                if !out.contains(name) {
                    out.push(*name);
                }
            }
        }
        out
    }

    /// Canonical tab of an item from its own tab token and category.
    ///
    /// Always falls through on failure: icon-path tokens are often the
    /// ambiguous `trinket`, and the category then decides.
    pub fn item_tab(&self, item: &Item) -> Option<CanonicalTab> {
        let evidence = Evidence {
            tab_name: item.tab.as_deref(),
            category: item.category.as_deref(),
            ..Evidence::default()
        };
        Identifier::with_options(self.resolver, IdentifyOptions::fall_through()).identify(&evidence)
    }

    pub fn market_tab_for_item(&self, item: &Item) -> Option<&'static str> {
        let tab = self.item_tab(item)?;
        self.tab_name_for(tab, Subsystem::Market, Some(&item.hint()))
    }

    pub fn tab_set_for_item(&self, item: &Item) -> Option<ResolvedTabSet> {
        let tab = self.item_tab(item)?;
        let hint = item.hint();
        let name = |sub| self.tab_name_for(tab, sub, Some(&hint));
        Some(ResolvedTabSet {
            tab,
            ah: name(Subsystem::Ah),
            hoard: name(Subsystem::Hoard),
            market: name(Subsystem::Market),
            legacy: name(Subsystem::Legacy),
        })
    }
}

fn disambiguate(tab: CanonicalTab, hint: &Hint<'_>) -> Option<&'static str> {
    let category = hint.category.map(|c| c.trim().to_lowercase());
    let name = hint.name.map(str::trim_start).unwrap_or("");

    match tab {
        CanonicalTab::Other => category
            .filter(|c| c.starts_with("chest"))
            .map(|_| "bundles"),
        CanonicalTab::Specialty => {
            let scene_cat = category
                .as_deref()
                .is_some_and(|c| SCENE_CATEGORIES.contains(&c));
            if scene_cat || SCENE_NAME.is_match(name) {
                Some("scenes")
            } else if GENE_NAME.is_match(name) {
                Some("genes")
            } else {
                Some("specialty")
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, tab: &str, category: &str) -> Item {
        Item { name: Some(s!(name)), tab: Some(s!(tab)), category: Some(s!(category)) }
    }

    #[test]
    fn item_and_tab_set_serialize_for_output() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        let chest = item("Holiday Chest", "trinket", "Chest");

        let json = serde_json::to_value(&chest).unwrap();
        assert_eq!(json["tab"], "trinket");

        let set = serde_json::to_value(t.tab_set_for_item(&chest).unwrap()).unwrap();
        assert_eq!(set["tab"], "other");
        assert_eq!(set["market"], "bundles");
    }

    #[test]
    fn other_needs_a_chest() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        assert_eq!(t.tab_name_for(CanonicalTab::Other, Subsystem::Market, None), None);
        assert_eq!(
            t.tab_name_for(CanonicalTab::Other, Subsystem::Market, Some(&Hint::category("  chest"))),
            Some("bundles")
        );
    }

    #[test]
    fn specialty_scene_by_category() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        let hint = Hint { name: Some("Autumn Glade"), category: Some("Forum Vista") };
        assert_eq!(t.tab_name_for(CanonicalTab::Specialty, Subsystem::Market, Some(&hint)), Some("scenes"));
        assert_eq!(t.tab_name_for(CanonicalTab::Specialty, Subsystem::Market, None), Some("specialty"));
    }

    #[test]
    fn gene_names_are_prefix_and_case_sensitive() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        let specialty = |n| t.tab_name_for(CanonicalTab::Specialty, Subsystem::Market, Some(&Hint::name(n)));
        assert_eq!(specialty("Breed Change: Fae"), Some("genes"));
        assert_eq!(specialty("Remove Gene: Tertiary"), Some("genes"));
        assert_eq!(specialty("primary gene: basic"), Some("specialty"));
        assert_eq!(specialty("Unusual Primary Gene"), Some("specialty"));
    }

    #[test]
    fn single_names_ignore_hints() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        let hint = Hint::category("Chest");
        assert_eq!(t.tab_name_for(CanonicalTab::Mats, Subsystem::Hoard, Some(&hint)), Some("materials"));
        assert_eq!(t.tab_name_for(CanonicalTab::Specialty, Subsystem::Legacy, Some(&hint)), Some("trinket"));
        assert_eq!(t.tab_name_for(CanonicalTab::Food, Subsystem::Market, None), None);
    }

    #[test]
    fn valid_tabs_for_flattens_and_dedups() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        assert_eq!(
            t.valid_tabs_for(Subsystem::Market),
            vec!["apparel", "familiars", "battle", "skins", "specialty", "genes", "scenes", "bundles"]
        );
        assert_eq!(
            t.valid_tabs_for(Subsystem::Legacy),
            vec!["food", "trinket", "equipment", "familiar", "battle_items", "skins"]
        );
    }

    #[test]
    fn trinket_items_fall_through_to_category() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        let chest = item("Festive Chest", "trinket", "Chest");
        let set = t.tab_set_for_item(&chest).unwrap();
        assert_eq!(set.tab, CanonicalTab::Other);
        assert_eq!(set.market, Some("bundles"));
        assert_eq!(set.get(Subsystem::Legacy), Some("trinket"));
        assert_eq!(t.market_tab_for_item(&item("Vista: Sunrise", "trinket", "Forum Vista")), Some("scenes"));
    }

    #[test]
    fn unidentifiable_item_has_no_tab_set() {
        let reg = Registry::standard().unwrap();
        let t = Translator::new(Resolver::new(&reg));
        assert_eq!(t.tab_set_for_item(&item("Thing", "trinket", "Mystery")), None);
        assert_eq!(t.tab_set_for_item(&Item::default()), None);
    }
}
