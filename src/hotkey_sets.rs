//! Registry of known, meaningful key clusters.
//!
//! A cluster ("hotkey set") is a key combination the help dialog knows how
//! to say and draw as a unit: the four arrow keys, WASD, a left/right pair.
//! Entries may carry a canned phrase, a canned icon builder, a preferred
//! layout when the cluster is split under a shared modifier, and
//! variant-specific partition families. Built once from a literal list;
//! immutable for the lifetime of the process.
//!
//! Absence of an entry is the *normal* case for arbitrary combinations and
//! is never an error; callers fall back to generic phrasing and icons.

use crate::icon::{self, KeyIcon};
use crate::{keys, strings};
use keycue_reactive::TextHandle;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The variant name used when no alternate phrasing is requested.
pub const DEFAULT_VARIANT: &str = "default";

/// How to lay out a cluster's alternatives when it is split by a shared
/// modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionLayout {
    /// Chain the alternatives left to right in one row.
    Inline,
    /// Place the alternatives in a vertical list.
    Stacked,
}

/// A registered fact about one named key cluster.
#[derive(Debug)]
pub struct HotkeySetDef {
    keys: Vec<&'static str>,
    variant: &'static str,
    phrase: Option<TextHandle>,
    icon: Option<fn() -> KeyIcon>,
    layout: PartitionLayout,
    families: Vec<&'static [&'static str]>,
}

impl HotkeySetDef {
    fn new(keys: &'static [&'static str], variant: &'static str) -> Self {
        Self {
            keys: keys.to_vec(),
            variant,
            phrase: None,
            icon: None,
            layout: PartitionLayout::Inline,
            families: Vec::new(),
        }
    }

    fn phrase_text(mut self, phrase: &TextHandle) -> Self {
        self.phrase = Some(phrase.clone());
        self
    }

    fn icon_builder(mut self, build: fn() -> KeyIcon) -> Self {
        self.icon = Some(build);
        self
    }

    fn stacked(mut self) -> Self {
        self.layout = PartitionLayout::Stacked;
        self
    }

    fn family(mut self, family: &'static [&'static str]) -> Self {
        self.families.push(family);
        self
    }

    /// The canned phrase describing the cluster as a whole, if any.
    pub fn phrase(&self) -> Option<&TextHandle> {
        self.phrase.as_ref()
    }

    /// The canned icon builder for the cluster, if any.
    pub fn icon(&self) -> Option<fn() -> KeyIcon> {
        self.icon
    }

    /// Preferred layout when this cluster is split under a modifier.
    pub fn layout(&self) -> PartitionLayout {
        self.layout
    }
}

const ARROWS: &[&str] = &["arrowLeft", "arrowRight", "arrowUp", "arrowDown"];
const WASD: &[&str] = &["w", "a", "s", "d"];
const LEFT_RIGHT: &[&str] = &["arrowLeft", "arrowRight"];
const UP_DOWN: &[&str] = &["arrowUp", "arrowDown"];
const A_D: &[&str] = &["a", "d"];
const W_S: &[&str] = &["w", "s"];
const LEFT_RIGHT_A_D: &[&str] = &["arrowLeft", "arrowRight", "a", "d"];

/// Well-known families tried for every key set, biggest clusters first.
/// Definition-specific families take precedence over these.
const GLOBAL_FAMILIES: [&[&str]; 6] = [ARROWS, WASD, LEFT_RIGHT, UP_DOWN, A_D, W_S];

static REGISTRY: LazyLock<HashMap<String, HotkeySetDef>> = LazyLock::new(|| {
    let bank = strings::bank();
    let defs = vec![
        HotkeySetDef::new(ARROWS, DEFAULT_VARIANT)
            .phrase_text(&bank.arrow_keys)
            .icon_builder(icon::arrow_keys_row),
        HotkeySetDef::new(ARROWS, "paired")
            .family(LEFT_RIGHT)
            .family(UP_DOWN)
            .stacked(),
        HotkeySetDef::new(WASD, DEFAULT_VARIANT)
            .phrase_text(&bank.wasd)
            .icon_builder(icon::wasd_row),
        HotkeySetDef::new(WASD, "paired").family(A_D).family(W_S).stacked(),
        HotkeySetDef::new(LEFT_RIGHT, DEFAULT_VARIANT)
            .phrase_text(&bank.left_right_arrows)
            .icon_builder(icon::left_right_arrow_row),
        HotkeySetDef::new(UP_DOWN, DEFAULT_VARIANT)
            .phrase_text(&bank.up_down_arrows)
            .icon_builder(icon::up_down_arrow_row),
        HotkeySetDef::new(A_D, DEFAULT_VARIANT).phrase_text(&bank.a_or_d),
        HotkeySetDef::new(W_S, DEFAULT_VARIANT).phrase_text(&bank.w_or_s),
        HotkeySetDef::new(LEFT_RIGHT_A_D, DEFAULT_VARIANT)
            .phrase_text(&bank.left_right_arrows_or_ad)
            .family(LEFT_RIGHT)
            .family(A_D)
            .stacked(),
    ];

    let mut map = HashMap::new();
    for def in defs {
        map.insert(canonical_id(&def.keys, def.variant), def);
    }
    log::debug!("hotkey set registry initialized with {} entries", map.len());
    map
});

/// Order-independent identifier for a key set plus variant.
///
/// Any permutation of the same key set produces the identical id.
pub fn canonical_id<S: AsRef<str>>(keys: &[S], variant: &str) -> String {
    format!("{}::{variant}", keys::sort_keys(keys).join("+"))
}

/// Look up the definition for a key set, falling back from a non-default
/// variant to the default entry. `None` is expected and common.
pub fn get_definition<S: AsRef<str>>(keys: &[S], variant: &str) -> Option<&'static HotkeySetDef> {
    if let Some(def) = REGISTRY.get(&canonical_id(keys, variant)) {
        return Some(def);
    }
    if variant != DEFAULT_VARIANT {
        return REGISTRY.get(&canonical_id(keys, DEFAULT_VARIANT));
    }
    None
}

/// Split a key set into the groups that should share visual and text
/// treatment when paired with a common modifier.
///
/// Definition-specific families for `(sorted_keys, variant)` are tried
/// first, then the global well-known families. A family only matches when
/// fully contained in what is left. A trivial outcome (no family matched,
/// or a single family consumed everything) collapses back to one partition
/// holding the whole set. Leftover keys become one final sorted partition.
///
/// The result is always a disjoint cover of `sorted_keys`: no key dropped,
/// none duplicated.
pub fn partition_for_modifiers(sorted_keys: &[String], variant: &str) -> Vec<Vec<String>> {
    let mut families: Vec<&[&str]> = Vec::new();
    if let Some(def) = get_definition(sorted_keys, variant) {
        families.extend(def.families.iter().copied());
    }
    families.extend(GLOBAL_FAMILIES.iter().copied());

    let mut remaining: Vec<String> = sorted_keys.to_vec();
    let mut partitions: Vec<Vec<String>> = Vec::new();
    for family in families {
        let contained =
            !family.is_empty() && family.iter().all(|k| remaining.iter().any(|r| r == k));
        if contained {
            partitions.push(family.iter().map(|k| (*k).to_string()).collect());
            remaining.retain(|r| !family.contains(&r.as_str()));
        }
    }

    if partitions.is_empty() || (partitions.len() == 1 && remaining.is_empty()) {
        return vec![sorted_keys.to_vec()];
    }
    if !remaining.is_empty() {
        partitions.push(keys::sort_keys(&remaining));
    }
    log::trace!(
        "partitioned {sorted_keys:?} ({variant}) into {} group(s)",
        partitions.len()
    );
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(keys: &[&str]) -> Vec<String> {
        keys::sort_keys(keys)
    }

    #[test]
    fn test_canonical_id_order_independent() {
        let forward = canonical_id(&["arrowLeft", "arrowRight", "arrowUp", "arrowDown"], "default");
        let shuffled = canonical_id(&["arrowUp", "arrowDown", "arrowLeft", "arrowRight"], "default");
        assert_eq!(forward, shuffled);
        assert_eq!(forward, "arrowLeft+arrowRight+arrowUp+arrowDown::default");
    }

    #[test]
    fn test_lookup_arrow_cluster() {
        let def = get_definition(ARROWS, DEFAULT_VARIANT).unwrap();
        assert_eq!(def.phrase().unwrap().get(), "Arrow keys");
        assert!(def.icon().is_some());
    }

    #[test]
    fn test_variant_falls_back_to_default() {
        // No "handDrawn" variant is registered for the left/right pair.
        let def = get_definition(LEFT_RIGHT, "handDrawn").unwrap();
        assert_eq!(def.variant, DEFAULT_VARIANT);
    }

    #[test]
    fn test_unknown_combination_is_none() {
        assert!(get_definition(&["f", "g"], DEFAULT_VARIANT).is_none());
    }

    #[test]
    fn test_partition_paired_variant_splits_arrows() {
        let partitions = partition_for_modifiers(&sorted(ARROWS), "paired");
        assert_eq!(
            partitions,
            vec![
                vec!["arrowLeft".to_string(), "arrowRight".to_string()],
                vec!["arrowUp".to_string(), "arrowDown".to_string()],
            ]
        );
    }

    #[test]
    fn test_partition_default_variant_keeps_arrows_whole() {
        // The full arrow family matches and consumes everything, which is a
        // trivial partition and collapses back to the whole set.
        let partitions = partition_for_modifiers(&sorted(ARROWS), DEFAULT_VARIANT);
        assert_eq!(partitions, vec![sorted(ARROWS)]);
    }

    #[test]
    fn test_partition_no_match_keeps_set_whole() {
        let keys = sorted(&["f", "g", "h"]);
        assert_eq!(partition_for_modifiers(&keys, DEFAULT_VARIANT), vec![keys]);
    }

    #[test]
    fn test_partition_leftovers_form_final_group() {
        let keys = sorted(&["arrowLeft", "arrowRight", "space", "enter"]);
        let partitions = partition_for_modifiers(&keys, DEFAULT_VARIANT);
        assert_eq!(
            partitions,
            vec![
                vec!["arrowLeft".to_string(), "arrowRight".to_string()],
                vec!["space".to_string(), "enter".to_string()],
            ]
        );
    }

    #[test]
    fn test_partition_disjoint_cover() {
        let cases: [(&[&str], &str); 4] = [
            (ARROWS, "paired"),
            (WASD, "paired"),
            (LEFT_RIGHT_A_D, DEFAULT_VARIANT),
            (&["arrowUp", "arrowDown", "w", "s", "9"], DEFAULT_VARIANT),
        ];
        for (raw, variant) in cases {
            let keys = sorted(raw);
            let partitions = partition_for_modifiers(&keys, variant);
            let mut rejoined: Vec<String> = partitions.iter().flatten().cloned().collect();
            let flat_len = rejoined.len();
            rejoined = keys::sort_keys(&rejoined);
            assert_eq!(flat_len, rejoined.len(), "duplicated key in {partitions:?}");
            assert_eq!(rejoined, keys, "dropped key in {partitions:?}");
        }
    }

    #[test]
    fn test_partition_wasd_paired() {
        let partitions = partition_for_modifiers(&sorted(WASD), "paired");
        assert_eq!(
            partitions,
            vec![
                vec!["a".to_string(), "d".to_string()],
                vec!["w".to_string(), "s".to_string()],
            ]
        );
    }
}
