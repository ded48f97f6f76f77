// src/core/html.rs
//! Case-insensitive tag scanning over raw HTML.
//!
//! All offsets returned here index into the *original* string. `to_lower`
//! only folds ASCII, so the lowered copy has identical byte offsets.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<tag …>…</tag>` block at or after `from`, as `(start, end)`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Next opening tag named `name` (e.g. `"input"`) at or after `from`,
/// as `(start, end)` covering `<name … >`.
///
/// Requires a real name boundary: `<input` does not match `<inputs`.
pub fn next_open_tag_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    open_tag_in(s, &to_lower(s), &join!("<", &to_lower(name)), from)
}

/// First opening tag named `name` whose text satisfies `pred`.
pub fn find_open_tag_ci<F>(s: &str, name: &str, pred: F) -> Option<(usize, usize)>
where
    F: Fn(&str) -> bool,
{
    let lc = to_lower(s);
    let needle = join!("<", &to_lower(name));
    let mut pos = 0usize;
    while let Some((start, end)) = open_tag_in(s, &lc, &needle, pos) {
        if pred(&s[start..end]) {
            return Some((start, end));
        }
        pos = end;
    }
    None
}

// `lc` is `to_lower(s)`; `needle` is `<` plus the lowered tag name.
fn open_tag_in(s: &str, lc: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(needle)? + pos;
        let after = start + needle.len();
        match lc.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                let end = s[after..].find('>')? + after + 1;
                return Some((start, end));
            }
            _ => pos = after,
        }
    }
}

/// Value of attribute `name` in an opening tag, entities decoded.
///
/// Handles double-quoted, single-quoted, unquoted and bare attributes
/// (a bare attribute yields `Some("")`).
pub fn attr_value_ci(tag: &str, name: &str) -> Option<String> {
    let bytes = tag.as_bytes();
    let len = bytes.len();
    // Skip "<tagname".
    let mut i = tag.find(|c: char| c.is_whitespace() || c == '>' || c == '/')?;

    loop {
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len || bytes[i] == b'>' {
            return None;
        }

        let key_start = i;
        while i < len
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let key = &tag[key_start..i];

        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = "";
        if i < len && bytes[i] == b'=' {
            i += 1;
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < len && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i] as char;
                let v_start = i + 1;
                let v_end = tag[v_start..].find(quote).map_or(len, |e| v_start + e);
                value = &tag[v_start..v_end];
                i = (v_end + 1).min(len);
            } else {
                let v_start = i;
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                value = &tag[v_start..i];
            }
        }

        if key.eq_ignore_ascii_case(name) {
            return Some(normalize_entities(value));
        }
    }
}

/// Whether an opening tag carries `class` among its class tokens.
pub fn has_class_ci(tag: &str, class: &str) -> bool {
    attr_value_ci(tag, "class")
        .map(|v| v.split_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_respects_name_boundary() {
        let doc = r#"<inputs x=1><INPUT name="tab" value="food">"#;
        let (s, e) = next_open_tag_ci(doc, "input", 0).unwrap();
        assert_eq!(&doc[s..e], r#"<INPUT name="tab" value="food">"#);
    }

    #[test]
    fn attr_values_in_any_quoting() {
        let tag = r#"<input type=hidden name='tab' disabled value="scenes &amp; vistas">"#;
        assert_eq!(attr_value_ci(tag, "type").as_deref(), Some("hidden"));
        assert_eq!(attr_value_ci(tag, "NAME").as_deref(), Some("tab"));
        assert_eq!(attr_value_ci(tag, "disabled").as_deref(), Some(""));
        assert_eq!(attr_value_ci(tag, "value").as_deref(), Some("scenes & vistas"));
        assert_eq!(attr_value_ci(tag, "id"), None);
    }

    #[test]
    fn class_tokens_are_matched_whole() {
        assert!(has_class_ci(r#"<span class="x ah-current-tab">"#, "ah-current-tab"));
        assert!(!has_class_ci(r#"<span class="ah-current-tabs">"#, "ah-current-tab"));
        assert!(!has_class_ci("<span>", "ah-current-tab"));
    }

    #[test]
    fn find_open_tag_skips_non_matching() {
        let doc = r#"<input name="q"><input name="tab" value="app">"#;
        let (s, e) = find_open_tag_ci(doc, "input", |t| {
            attr_value_ci(t, "name").as_deref() == Some("tab")
        })
        .unwrap();
        assert_eq!(attr_value_ci(&doc[s..e], "value").as_deref(), Some("app"));
    }

    #[test]
    fn find_open_tag_scans_many_tags() {
        let mut doc = String::new();
        for i in 0..500 {
            doc.push_str(&format!("<INPUTS x={i}><input name=\"f{i}\">"));
        }
        doc.push_str("<Input NAME=tab value=skins>");
        let (s, e) = find_open_tag_ci(&doc, "input", |t| attr_value_ci(t, "name").as_deref() == Some("tab")).unwrap();
        assert_eq!(attr_value_ci(&doc[s..e], "value").as_deref(), Some("skins"));
        assert!(find_open_tag_ci(&doc, "input", |t| t.contains("missing")).is_none());
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("  <b>Battle</b>\n  Items "), "Battle Items");
    }
}
