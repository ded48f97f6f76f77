// src/tool.rs
//! `TabTool`: one registry plus identification options, with every lookup
//! reachable from a single value. Callers that want finer control build a
//! [`Resolver`], [`Identifier`] or [`Translator`] over a [`Registry`] directly.

use crate::config::{IdentifyOptions, RegistryOptions};
use crate::error::RegistryError;
use crate::specs::{self, page::PageSnapshot, url};
use crate::tabs::{
    CanonicalTab, Evidence, Hint, Identifier, Item, Registry, RegistrySnapshot, ResolvedTabSet,
    Resolver, Subsystem, SubsystemTabSet, Translator,
};

#[derive(Clone, Debug)]
pub struct TabTool {
    registry: Registry,
    options: IdentifyOptions,
}

impl TabTool {
    /// Standard tables, default breeds, absence-only fallback.
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self::with_registry(Registry::standard()?, IdentifyOptions::default()))
    }

    pub fn with_options(
        registry: &RegistryOptions,
        options: IdentifyOptions,
    ) -> Result<Self, RegistryError> {
        Ok(Self::with_registry(Registry::new(registry)?, options))
    }

    pub fn with_registry(registry: Registry, options: IdentifyOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry)
    }

    pub fn identifier(&self) -> Identifier<'_> {
        Identifier::with_options(self.resolver(), self.options)
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(self.resolver())
    }

    /* ---------- registry ---------- */

    pub fn data(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    pub fn is_valid_tab(&self, value: &str) -> bool {
        self.resolver().is_valid_tab(value)
    }

    /* ---------- resolution ---------- */

    pub fn resolve_tab_alias(&self, text: &str) -> Option<CanonicalTab> {
        self.resolver().resolve_tab_alias(text)
    }

    pub fn resolve_category(&self, text: &str) -> Option<CanonicalTab> {
        self.resolver().resolve_category(text)
    }

    pub fn identify(&self, evidence: &Evidence<'_>) -> Option<CanonicalTab> {
        self.identifier().identify(evidence)
    }

    pub fn identify_str(&self, text: &str) -> Option<CanonicalTab> {
        self.identifier().identify_str(text)
    }

    pub fn tab_from_url(&self, location: &str) -> Option<CanonicalTab> {
        url::tab_from_url(&self.resolver(), location)
    }

    pub fn tab_from_page(&self, page: &dyn PageSnapshot) -> Option<CanonicalTab> {
        specs::page::tab_from_page(&self.resolver(), page)
    }

    pub fn current_tab(
        &self,
        page: Option<&dyn PageSnapshot>,
        location: Option<&str>,
    ) -> Option<CanonicalTab> {
        specs::current_tab(&self.resolver(), page, location)
    }

    /* ---------- translation ---------- */

    pub fn tab_name_for(
        &self,
        tab: CanonicalTab,
        subsystem: Subsystem,
        hint: Option<&Hint<'_>>,
    ) -> Option<&'static str> {
        self.translator().tab_name_for(tab, subsystem, hint)
    }

    pub fn tab_set(&self, tab: CanonicalTab) -> &SubsystemTabSet {
        self.registry.tab_set(tab)
    }

    pub fn tab_set_for_item(&self, item: &Item) -> Option<ResolvedTabSet> {
        self.translator().tab_set_for_item(item)
    }

    pub fn market_tab_for_item(&self, item: &Item) -> Option<&'static str> {
        self.translator().market_tab_for_item(item)
    }

    pub fn valid_tabs_for(&self, subsystem: Subsystem) -> Vec<&'static str> {
        self.translator().valid_tabs_for(subsystem)
    }
}
