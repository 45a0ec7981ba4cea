//! Element key derivation
//!
//! Keys give elements stable identity across render passes. Callers may
//! supply one explicitly; otherwise labelled widgets derive
//! `{kind}-{slug(label)}` and unlabelled elements draw `{kind}-{n}` from a
//! per-kind sequence that restarts every pass, so identical passes produce
//! identical keys.

use rustc_hash::FxHashMap;

/// Lowercase a label into a key-safe slug: alphanumerics kept, every other
/// run collapsed to a single `-`, edges trimmed.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Derived key for a labelled widget.
pub fn widget_key(kind: &str, label: &str) -> String {
    let slug = slug(label);
    if slug.is_empty() {
        kind.to_string()
    } else {
        format!("{kind}-{slug}")
    }
}

/// Per-kind sequence counters for unlabelled elements. Pass-local.
#[derive(Default)]
pub struct KeyAllocator {
    counters: FxHashMap<&'static str, u32>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next sequential key for `kind`: `container-1`, `container-2`, …
    pub fn next_auto(&mut self, kind: &'static str) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{kind}-{counter}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_separators() {
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("  Save -- now!  "), "save-now");
        assert_eq!(slug("Émile's café"), "émile-s-café");
    }

    #[test]
    fn test_widget_key_is_deterministic() {
        assert_eq!(widget_key("button", "Save"), widget_key("button", "Save"));
        assert_ne!(widget_key("button", "Save"), widget_key("button", "Cancel"));
        assert_eq!(widget_key("button", "Save"), "button-save");
    }

    #[test]
    fn test_widget_key_empty_label_falls_back_to_kind() {
        assert_eq!(widget_key("button", "!!!"), "button");
    }

    #[test]
    fn test_auto_keys_are_sequential_per_kind() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.next_auto("text"), "text-1");
        assert_eq!(keys.next_auto("text"), "text-2");
        assert_eq!(keys.next_auto("stack"), "stack-1");
    }
}
