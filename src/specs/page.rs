// src/specs/page.rs
//! Page evidence.
//!
//! Two markers reveal the active tab:
//! - `input[name="tab"]`'s `value`: market, hoard/vault, AH sell.
//! - `span.ah-current-tab`'s text: AH buy.
//!
//! The input is tried first; if its value does not resolve, the label is tried.

use crate::config::consts::{CURRENT_TAB_CLASS, CURRENT_TAB_TAG, TAB_INPUT_NAME, TAB_INPUT_TAG};
use crate::core::html::{
    attr_value_ci, find_open_tag_ci, has_class_ci, inner_after_open_tag, next_tag_block_ci,
    strip_tags,
};
use crate::core::sanitize::normalize_entities;
use crate::tabs::{CanonicalTab, Resolver};

/// A captured page, as far as tab identification is concerned.
///
/// Implement this over whatever DOM the caller holds; [`HtmlPage`] reads raw HTML.
pub trait PageSnapshot {
    /// `value` of the tab input, if the page has one.
    fn tab_input_value(&self) -> Option<String>;
    /// Text of the current-tab label, if the page has one.
    fn current_tab_label(&self) -> Option<String>;
}

/// Raw HTML of a captured page.
#[derive(Clone, Copy, Debug)]
pub struct HtmlPage<'a> {
    html: &'a str,
}

impl<'a> HtmlPage<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }
}

impl PageSnapshot for HtmlPage<'_> {
    fn tab_input_value(&self) -> Option<String> {
        let (s, e) = find_open_tag_ci(self.html, TAB_INPUT_TAG, |tag| {
            attr_value_ci(tag, "name").is_some_and(|n| n == TAB_INPUT_NAME)
        })?;
        attr_value_ci(&self.html[s..e], "value")
    }

    fn current_tab_label(&self) -> Option<String> {
        let (s, _) = find_open_tag_ci(self.html, CURRENT_TAB_TAG, |tag| {
            has_class_ci(tag, CURRENT_TAB_CLASS)
        })?;
        let open = join!("<", CURRENT_TAB_TAG);
        let close = join!("</", CURRENT_TAB_TAG, ">");
        let (bs, be) = next_tag_block_ci(self.html, &open, &close, s)?;
        let inner = inner_after_open_tag(&self.html[bs..be]);
        Some(strip_tags(normalize_entities(&inner)))
    }
}

/// Tab input only (market, hoard/vault, AH sell layouts).
pub fn tab_from_tab_input(resolver: &Resolver<'_>, page: &dyn PageSnapshot) -> Option<CanonicalTab> {
    let value = page.tab_input_value()?;
    resolver.resolve_tab_alias(&value)
}

pub fn tab_from_page(resolver: &Resolver<'_>, page: &dyn PageSnapshot) -> Option<CanonicalTab> {
    if let Some(tab) = tab_from_tab_input(resolver, page) {
        return Some(tab);
    }

    let label = page.current_tab_label()?;
    let tab = resolver.resolve_tab_alias(&label);
    logd!("Page: current-tab label {label:?} → {tab:?}");
    tab
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Registry;

    #[test]
    fn reads_tab_input_in_any_attribute_order() {
        let doc = r#"<form><input type="hidden" value="materials" name="tab"></form>"#;
        assert_eq!(HtmlPage::new(doc).tab_input_value().as_deref(), Some("materials"));
    }

    #[test]
    fn reads_current_tab_label_text() {
        let doc = r#"<div><SPAN class="ah-current-tab">
            Battle Items
        </SPAN></div>"#;
        assert_eq!(HtmlPage::new(doc).current_tab_label().as_deref(), Some("Battle Items"));
    }

    #[test]
    fn unresolved_input_falls_back_to_label() {
        let reg = Registry::standard().unwrap();
        let r = Resolver::new(&reg);
        let doc = r#"<input name="tab" value="trinket"><span class="ah-current-tab">Familiars</span>"#;
        let page = HtmlPage::new(doc);
        assert_eq!(tab_from_tab_input(&r, &page), None);
        assert_eq!(tab_from_page(&r, &page), Some(CanonicalTab::Fam));
    }

    #[test]
    fn page_without_markers_is_none() {
        let reg = Registry::standard().unwrap();
        let r = Resolver::new(&reg);
        let page = HtmlPage::new("<html><body><input name=\"q\" value=\"food\"></body></html>");
        assert_eq!(tab_from_page(&r, &page), None);
    }
}
