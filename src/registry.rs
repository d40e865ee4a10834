//! Per-key label and icon-builder registry.
//!
//! One entry per canonical key *and* modifier name, built once at first use
//! from the vocabulary in [`crate::keys`]. Lookup failure means the
//! vocabulary and the registry have drifted apart, which is a programming
//! error: it panics rather than degrading into wrong help text.

use crate::icon::KeyIcon;
use crate::{keys, strings};
use keycue_reactive::TextHandle;
use std::collections::HashMap;
use std::sync::LazyLock;

struct KeyEntry {
    label: TextHandle,
    build: fn(&str) -> KeyIcon,
}

static REGISTRY: LazyLock<HashMap<&'static str, KeyEntry>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for name in keys::all_keys().chain(keys::all_modifiers()) {
        map.insert(
            name,
            KeyEntry {
                label: TextHandle::source(strings::default_label(name)),
                build: KeyIcon::cap,
            },
        );
    }
    log::debug!("key label registry initialized with {} entries", map.len());
    map
});

fn entry(name: &str) -> &'static KeyEntry {
    REGISTRY
        .get(name)
        .unwrap_or_else(|| panic!("key '{name}' has no registered label or icon builder"))
}

/// The reactive display label for a canonical key or modifier.
///
/// The handle is settable, so a host can swap labels on locale change and
/// every sentence built from them recomputes.
///
/// # Panics
///
/// Panics if `name` was never registered, i.e. it is not part of the
/// canonical vocabulary.
pub fn key_label(name: &str) -> TextHandle {
    entry(name).label.clone()
}

/// Build the standalone key-cap icon for a canonical key or modifier.
///
/// # Panics
///
/// Panics if `name` was never registered.
pub fn key_icon(name: &str) -> KeyIcon {
    (entry(name).build)(name)
}
