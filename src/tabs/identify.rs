// src/tabs/identify.rs
//! Evidence → canonical tab, in fixed priority order.
//!
//! Order: explicit tab name, category, URL, page markers. The first *present*
//! field decides. Whether a present field that fails to resolve ends the
//! search is [`Fallback`]'s call; the default ends it.

use std::fmt;

use super::resolve::Resolver;
use super::tab::CanonicalTab;
use crate::config::{Fallback, IdentifyOptions};
use crate::core::sanitize::non_blank;
use crate::specs::page::{self, PageSnapshot};
use crate::specs::url;

/// Partial, scraped signals about one item or page. Blank strings count as absent.
#[derive(Clone, Copy, Default)]
pub struct Evidence<'a> {
    pub tab_name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub url: Option<&'a str>,
    pub page: Option<&'a dyn PageSnapshot>,
}

impl<'a> Evidence<'a> {
    pub fn with_tab_name(mut self, tab_name: &'a str) -> Self {
        self.tab_name = Some(tab_name);
        self
    }
    pub fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }
    pub fn with_url(mut self, url: &'a str) -> Self {
        self.url = Some(url);
        self
    }
    pub fn with_page(mut self, page: &'a dyn PageSnapshot) -> Self {
        self.page = Some(page);
        self
    }

    pub fn is_empty(&self) -> bool {
        SOURCES.iter().all(|s| !self.has(*s))
    }

    fn has(&self, source: Source) -> bool {
        match source {
            Source::TabName => non_blank(self.tab_name).is_some(),
            Source::Category => non_blank(self.category).is_some(),
            Source::Url => non_blank(self.url).is_some(),
            Source::Page => self.page.is_some(),
        }
    }
}

impl fmt::Debug for Evidence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evidence")
            .field("tab_name", &self.tab_name)
            .field("category", &self.category)
            .field("url", &self.url)
            .field("page", &self.page.map(|_| "<snapshot>"))
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    TabName,
    Category,
    Url,
    Page,
}

// Priority order.
const SOURCES: [Source; 4] = [Source::TabName, Source::Category, Source::Url, Source::Page];

#[derive(Clone, Copy, Debug)]
pub struct Identifier<'r> {
    resolver: Resolver<'r>,
    options: IdentifyOptions,
}

impl<'r> Identifier<'r> {
    pub fn new(resolver: Resolver<'r>) -> Self {
        Self::with_options(resolver, IdentifyOptions::default())
    }

    pub fn with_options(resolver: Resolver<'r>, options: IdentifyOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> IdentifyOptions {
        self.options
    }

    /// Plain-string entry point: a tab id or alias.
    pub fn identify_str(&self, text: &str) -> Option<CanonicalTab> {
        self.resolver.resolve_tab_alias(text)
    }

    pub fn identify(&self, evidence: &Evidence<'_>) -> Option<CanonicalTab> {
        for source in SOURCES {
            if !evidence.has(source) {
                continue;
            }
            match self.resolve(evidence, source) {
                Some(tab) => {
                    logd!("Identify: {source:?} decided {tab}");
                    return Some(tab);
                }
                None if self.options.fallback == Fallback::OnAbsence => {
                    logd!("Identify: {source:?} present but unresolved; lower-priority evidence ignored");
                    return None;
                }
                None => {
                    logd!("Identify: {source:?} unresolved; falling through");
                }
            }
        }
        None
    }

    fn resolve(&self, evidence: &Evidence<'_>, source: Source) -> Option<CanonicalTab> {
        let r = &self.resolver;
        match source {
            Source::TabName => non_blank(evidence.tab_name).and_then(|t| r.resolve_tab_alias(t)),
            Source::Category => non_blank(evidence.category).and_then(|c| r.resolve_category(c)),
            Source::Url => non_blank(evidence.url).and_then(|u| url::tab_from_url(r, u)),
            Source::Page => evidence.page.and_then(|p| page::tab_from_page(r, p)),
        }
    }
}
