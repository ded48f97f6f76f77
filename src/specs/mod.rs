// src/specs/mod.rs
//! # Evidence "specs" module
//!
//! Page- and URL-specific knowledge of *where the active tab shows up* on the
//! site. Each spec reads one kind of evidence and hands the raw token to the
//! tab resolver.
//!
//! ## What lives here
//! - **URL patterns** (`url`): AH sell/buy, market, hoard/vault and game
//!   database paths, plus the bestiary and dragon-page fallbacks.
//! - **Page markers** (`page`): the hidden tab input and the AH buy
//!   current-tab label, read through the [`page::PageSnapshot`] trait.
//!
//! ## What does **not** live here
//! - Alias and category tables (`tabs::registry`).
//! - Ordering between evidence kinds (`tabs::identify`).
//!
//! ## Testing notes
//! - Specs are testable **offline** against saved HTML (`tests/fixtures/`).
pub mod page;
pub mod url;

use crate::tabs::{CanonicalTab, Resolver};
use page::PageSnapshot;

/// Active tab of the page the caller is looking at: page markers first, then the URL.
pub fn current_tab(
    resolver: &Resolver<'_>,
    snapshot: Option<&dyn PageSnapshot>,
    location: Option<&str>,
) -> Option<CanonicalTab> {
    snapshot
        .and_then(|p| page::tab_from_page(resolver, p))
        .or_else(|| location.and_then(|u| url::tab_from_url(resolver, u)))
}
