// src/tabs/resolve.rs
//! Free text → canonical tab, by alias or by site category.

use super::registry::Registry;
use super::tab::CanonicalTab;
use crate::config::consts::{AMBIGUOUS_ALIASES, SKIN_FEMALE_SUFFIX, SKIN_MALE_SUFFIX};

/// Pure lookups over a [`Registry`]. Cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'r> {
    registry: &'r Registry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Exactly a canonical id. No aliases, no case folding.
    pub fn is_valid_tab(&self, value: &str) -> bool {
        CanonicalTab::from_id(value).is_some()
    }

    /// Canonical id or alias, case-insensitive.
    ///
    /// `trinket`/`trinkets` never resolve: they are listed under mats,
    /// specialty and other alike.
    pub fn resolve_tab_alias(&self, text: &str) -> Option<CanonicalTab> {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(tab) = CanonicalTab::from_id(&key) {
            return Some(tab);
        }
        if AMBIGUOUS_ALIASES.contains(&key.as_str()) {
            return None;
        }
        self.registry
            .aliases()
            .find(|(_, aliases)| aliases.iter().any(|a| *a == key))
            .map(|(tab, _)| tab)
    }

    /// Site category label (e.g. "Dragonmade Material"), case-insensitive.
    /// First tab in declaration order wins.
    pub fn resolve_category(&self, text: &str) -> Option<CanonicalTab> {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        self.registry
            .categories()
            .find(|(_, cats)| cats.iter().any(|c| *c == key))
            .map(|(tab, _)| tab)
    }
}

/// `"<breed> male only"`, `"<breed> female only"` for every breed, in order.
/// Blank entries are skipped.
pub fn generate_skin_categories<S: AsRef<str>>(breeds: &[S]) -> Vec<String> {
    let mut cats = Vec::with_capacity(breeds.len() * 2);
    for breed in breeds {
        let breed = breed.as_ref().trim().to_lowercase();
        if breed.is_empty() {
            continue;
        }
        cats.push(join!(&breed, SKIN_MALE_SUFFIX));
        cats.push(join!(&breed, SKIN_FEMALE_SUFFIX));
    }
    cats
}
