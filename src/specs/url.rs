// src/specs/url.rs
//! URL evidence.
//!
//! Purpose:
//! - Read the active tab out of a page URL, for pages that show it nowhere
//!   else (AH buy pages carry it only in the path).
//!
//! Precedence:
//! 1. Path patterns, first match decides: AH sell/buy, market treasure/gem,
//!    hoard/vault, game-database items. The captured token goes through alias
//!    resolution; an unresolvable token is `None` (no further patterns).
//! 2. `/bestiary` → fam.
//! 3. Lair, den, hatchery or nest pages → dragons.

use std::sync::LazyLock;

use regex::Regex;

use crate::tabs::{CanonicalTab, Resolver};

static TAB_PATHS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"auction-house/(sell|buy)/\w+/(?P<tab>\w+)",
        r"market/(treasure|gem)/(?P<tab>\w+)",
        r"(hoard|vault)/(?P<tab>\w+)",
        r"game-database/items/(?P<tab>\w+)",
    ]
    .map(|rx| Regex::new(rx).expect("static tab path pattern"))
});

static DRAGON_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(/(lair|den)/|tab=hatchery|/nest)").expect("static dragon page pattern")
});

/// Raw tab token from the first matching path pattern, unresolved.
pub fn tab_token(url: &str) -> Option<&str> {
    TAB_PATHS
        .iter()
        .find_map(|rx| rx.captures(url))
        .and_then(|caps| caps.name("tab"))
        .map(|m| m.as_str())
}

pub fn is_dragon_page(url: &str) -> bool {
    DRAGON_PAGE.is_match(url)
}

pub fn tab_from_url(resolver: &Resolver<'_>, url: &str) -> Option<CanonicalTab> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if let Some(token) = tab_token(url) {
        let tab = resolver.resolve_tab_alias(token);
        logd!("Url: tab token {token:?} → {tab:?}");
        return tab;
    }

    if url.contains("/bestiary") {
        Some(CanonicalTab::Fam)
    } else if is_dragon_page(url) {
        Some(CanonicalTab::Dragons)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Registry;

    fn with_resolver<F: FnOnce(Resolver<'_>)>(f: F) {
        let reg = Registry::standard().unwrap();
        f(Resolver::new(&reg));
    }

    #[test]
    fn auction_house_paths() {
        with_resolver(|r| {
            assert_eq!(tab_from_url(&r, "https://x/auction-house/buy/gems/dragons"), Some(CanonicalTab::Dragons));
            assert_eq!(tab_from_url(&r, "https://x/auction-house/sell/treasure/battle?page=2"), Some(CanonicalTab::Battle));
        });
    }

    #[test]
    fn market_hoard_and_database_paths() {
        with_resolver(|r| {
            assert_eq!(tab_from_url(&r, "https://x/market/gem/apparel"), Some(CanonicalTab::App));
            assert_eq!(tab_from_url(&r, "https://x/market/treasure/bundles"), Some(CanonicalTab::Other));
            assert_eq!(tab_from_url(&r, "https://x/vault/materials"), Some(CanonicalTab::Mats));
            assert_eq!(tab_from_url(&r, "https://x/hoard/familiars"), Some(CanonicalTab::Fam));
            assert_eq!(tab_from_url(&r, "https://x/game-database/items/battle_items"), Some(CanonicalTab::Battle));
        });
    }

    #[test]
    fn first_matching_pattern_decides() {
        with_resolver(|r| {
            // "trinket" never resolves, and the lair fallback is not consulted.
            assert_eq!(tab_from_url(&r, "https://x/game-database/items/trinket?from=/lair/1"), None);
        });
    }

    #[test]
    fn bestiary_and_dragon_pages() {
        with_resolver(|r| {
            assert_eq!(tab_from_url(&r, "https://x/bestiary"), Some(CanonicalTab::Fam));
            assert_eq!(tab_from_url(&r, "https://x/lair/123"), Some(CanonicalTab::Dragons));
            assert_eq!(tab_from_url(&r, "https://x/den/123/2"), Some(CanonicalTab::Dragons));
            assert_eq!(tab_from_url(&r, "https://x/lair/123?tab=hatchery"), Some(CanonicalTab::Dragons));
            assert_eq!(tab_from_url(&r, "https://x/nest"), Some(CanonicalTab::Dragons));
        });
    }

    #[test]
    fn unrelated_or_blank_url_is_none() {
        with_resolver(|r| {
            assert_eq!(tab_from_url(&r, "https://x/forums"), None);
            assert_eq!(tab_from_url(&r, ""), None);
        });
    }
}
