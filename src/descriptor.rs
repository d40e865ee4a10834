//! Key descriptors and modifier grouping.
//!
//! A [`KeyDescriptor`] is one concrete way to trigger an action: a single
//! non-modifier key plus a set of modifiers. An action usually carries a
//! list of them, "any of these presses performs the action". Both the
//! phrase builder and the icon composer start from the same
//! [`group_descriptors`] pass, which is what keeps their outputs
//! structurally in step.

use crate::keys;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One concrete key press: a canonical key plus zero or more modifiers.
///
/// Immutable once constructed; modifiers are held in priority order.
/// `Display` and `FromStr` use the `"ctrl+alt+f"` config form, and serde
/// round-trips through that string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDescriptor {
    key: String,
    modifiers: Vec<String>,
}

impl KeyDescriptor {
    /// Construct a descriptor from canonical names.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a canonical key name or any modifier is not a
    /// canonical modifier name. Using a name outside the vocabulary is a
    /// configuration error, not a runtime condition.
    pub fn new<K, M, I>(key: K, modifiers: I) -> Self
    where
        K: Into<String>,
        M: Into<String>,
        I: IntoIterator<Item = M>,
    {
        let key = key.into();
        let modifiers: Vec<String> = modifiers.into_iter().map(Into::into).collect();
        assert!(keys::is_key(&key), "'{key}' is not a canonical key name");
        for modifier in &modifiers {
            assert!(
                keys::is_modifier(modifier),
                "'{modifier}' is not a canonical modifier name"
            );
        }
        let modifiers = keys::sort_modifiers(&modifiers);
        Self { key, modifiers }
    }

    /// Convenience constructor for an unmodified key press.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a canonical key name.
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Vec::<String>::new())
    }

    /// The non-modifier key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Modifiers in priority order.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }
}

impl fmt::Display for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyDescriptor {
    type Err = crate::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_descriptor(s)
    }
}

impl Serialize for KeyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Descriptors of one action that share the exact same modifier set.
///
/// Derived fresh from a descriptor list per request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierGroup {
    modifiers: Vec<String>,
    keys: Vec<String>,
}

impl ModifierGroup {
    /// The shared modifier set, in priority order.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Deduplicated keys in first-occurrence order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Whether this group carries any modifiers.
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

/// Group descriptors by identical modifier set.
///
/// Single pass; the grouping key is the sorted, joined modifier set.
/// Group order follows the first occurrence of each distinct modifier set
/// and keys are deduplicated within a group. The phrase builder and the
/// icon composer both consume this output, which guarantees one clause per
/// group on the text side matches one alternatives-record on the icon side.
pub fn group_descriptors(descriptors: &[KeyDescriptor]) -> Vec<ModifierGroup> {
    let mut groups: Vec<(String, ModifierGroup)> = Vec::new();
    for descriptor in descriptors {
        let modifiers = keys::sort_modifiers(descriptor.modifiers());
        let group_id = modifiers.join("+");
        match groups.iter_mut().find(|(id, _)| *id == group_id) {
            Some((_, group)) => {
                if !group.keys.iter().any(|k| k == descriptor.key()) {
                    group.keys.push(descriptor.key().to_string());
                }
            }
            None => {
                groups.push((
                    group_id,
                    ModifierGroup {
                        modifiers,
                        keys: vec![descriptor.key().to_string()],
                    },
                ));
            }
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_modifiers() {
        let descriptor = KeyDescriptor::new("f", ["shift", "ctrl"]);
        assert_eq!(descriptor.modifiers(), ["ctrl", "shift"]);
    }

    #[test]
    #[should_panic(expected = "not a canonical key name")]
    fn test_new_rejects_modifier_as_key() {
        let _ = KeyDescriptor::plain("shift");
    }

    #[test]
    #[should_panic(expected = "not a canonical modifier name")]
    fn test_new_rejects_key_as_modifier() {
        let _ = KeyDescriptor::new("f", ["space"]);
    }

    #[test]
    fn test_display_roundtrip() {
        let descriptor = KeyDescriptor::new("arrowLeft", ["shift", "ctrl"]);
        let rendered = descriptor.to_string();
        assert_eq!(rendered, "ctrl+shift+arrowLeft");
        assert_eq!(rendered.parse::<KeyDescriptor>().unwrap(), descriptor);
    }

    #[test]
    fn test_grouping_by_modifier_set() {
        let descriptors = vec![
            KeyDescriptor::plain("arrowLeft"),
            KeyDescriptor::new("arrowLeft", ["shift"]),
            KeyDescriptor::plain("arrowRight"),
            KeyDescriptor::new("arrowRight", ["shift"]),
        ];
        let groups = group_descriptors(&descriptors);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].keys(), ["arrowLeft", "arrowRight"]);
        assert!(!groups[0].has_modifiers());
        assert_eq!(groups[1].modifiers(), ["shift"]);
        assert_eq!(groups[1].keys(), ["arrowLeft", "arrowRight"]);
    }

    #[test]
    fn test_grouping_ignores_modifier_order() {
        let descriptors = vec![
            KeyDescriptor::new("a", ["ctrl", "shift"]),
            KeyDescriptor::new("b", ["shift", "ctrl"]),
        ];
        let groups = group_descriptors(&descriptors);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keys(), ["a", "b"]);
    }

    #[test]
    fn test_grouping_dedupes_keys() {
        let descriptors = vec![
            KeyDescriptor::plain("space"),
            KeyDescriptor::plain("space"),
        ];
        let groups = group_descriptors(&descriptors);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keys(), ["space"]);
    }

    #[test]
    fn test_grouping_preserves_first_occurrence_order() {
        let descriptors = vec![
            KeyDescriptor::new("w", ["alt"]),
            KeyDescriptor::plain("space"),
            KeyDescriptor::new("s", ["alt"]),
        ];
        let groups = group_descriptors(&descriptors);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].modifiers(), ["alt"]);
        assert_eq!(groups[0].keys(), ["w", "s"]);
        assert_eq!(groups[1].keys(), ["space"]);
    }

    #[test]
    fn test_serde_string_form() {
        let descriptor = KeyDescriptor::new("f", ["alt", "ctrl"]);
        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(json, "\"ctrl+alt+f\"");
        let back: KeyDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }

    #[test]
    fn test_serde_rejects_unknown() {
        let result: Result<KeyDescriptor, _> = serde_json::from_str("\"hyper+f\"");
        assert!(result.is_err());
    }
}
