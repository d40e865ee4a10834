//! Key-cap icon composition.
//!
//! Produces a declarative [`KeyIcon`] tree mirroring the clause structure
//! of the phrase builder: one alternatives-record per modifier group, with
//! partitions and layout hints taken from the hotkey-set registry. The
//! renderer walks the tree and supplies the actual cap and connector
//! glyphs; this module never draws anything.

use crate::descriptor::{group_descriptors, KeyDescriptor, ModifierGroup};
use crate::hotkey_sets::{self, PartitionLayout, DEFAULT_VARIANT};
use crate::{keys, registry};
use keycue_reactive::TextHandle;

/// A declarative icon tree node.
#[derive(Debug, Clone)]
pub enum KeyIcon {
    /// One key cap showing the key's reactive label.
    Cap {
        /// Canonical key or modifier name.
        key: String,
        /// The label drawn on the cap; shared with the phrase builder.
        label: TextHandle,
    },
    /// A tight row with no connectors (canned cluster rows).
    Row(Vec<KeyIcon>),
    /// Children joined with "+" connector glyphs.
    PlusRow(Vec<KeyIcon>),
    /// Alternatives joined with "or" connector glyphs.
    OrRow(Vec<KeyIcon>),
    /// Alternatives in a vertical list; the renderer places the "or"
    /// connector after every row but the last.
    Stack(Vec<KeyIcon>),
}

impl KeyIcon {
    /// The default single-cap builder registered for every vocabulary key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not part of the canonical vocabulary.
    pub fn cap(key: &str) -> KeyIcon {
        KeyIcon::Cap {
            key: key.to_string(),
            label: registry::key_label(key),
        }
    }
}

/// The alternatives for one modifier group, plus the registry's preferred
/// layout. For callers that make their own layout decisions, e.g. aligning
/// a label against the first alternative.
#[derive(Debug, Clone)]
pub struct IconAlternatives {
    /// One complete icon per alternative (each already includes the
    /// modifier caps when the group has modifiers).
    pub alternatives: Vec<KeyIcon>,
    /// How the alternatives prefer to be laid out.
    pub layout: PartitionLayout,
}

fn caps(names: &[String]) -> Vec<KeyIcon> {
    names.iter().map(|name| registry::key_icon(name)).collect()
}

/// Canned row of the four arrow caps.
pub(crate) fn arrow_keys_row() -> KeyIcon {
    KeyIcon::Row(caps(&keys::sort_keys(&[
        "arrowLeft",
        "arrowRight",
        "arrowUp",
        "arrowDown",
    ])))
}

/// Canned row of the four WASD caps.
pub(crate) fn wasd_row() -> KeyIcon {
    KeyIcon::Row(caps(&keys::sort_keys(&["w", "a", "s", "d"])))
}

/// Canned left/right arrow pair.
pub(crate) fn left_right_arrow_row() -> KeyIcon {
    KeyIcon::Row(vec![
        registry::key_icon("arrowLeft"),
        registry::key_icon("arrowRight"),
    ])
}

/// Canned up/down arrow pair.
pub(crate) fn up_down_arrow_row() -> KeyIcon {
    KeyIcon::Row(vec![
        registry::key_icon("arrowUp"),
        registry::key_icon("arrowDown"),
    ])
}

/// Icon for one key set: canned cluster icon when registered, single cap
/// for one key, generic "or" row otherwise. Never fails for vocabulary
/// keys; unknown combinations always get the generic fallback.
fn key_set_icon(sorted_keys: &[String], display_keys: &[String], variant: &str) -> KeyIcon {
    if let Some(def) = hotkey_sets::get_definition(sorted_keys, variant) {
        if let Some(build) = def.icon() {
            return build();
        }
    }
    if display_keys.len() == 1 {
        return registry::key_icon(&display_keys[0]);
    }
    KeyIcon::OrRow(caps(display_keys))
}

/// The modifier caps joined to a key-set icon with "+" connectors.
fn modifier_plus_keys_icon(modifiers: &[String], keys_icon: KeyIcon) -> KeyIcon {
    if modifiers.is_empty() {
        return keys_icon;
    }
    let mut children = caps(modifiers);
    children.push(keys_icon);
    KeyIcon::PlusRow(children)
}

fn group_alternatives(group: &ModifierGroup, variant: &str) -> IconAlternatives {
    let sorted_keys = keys::sort_keys(group.keys());

    if group.has_modifiers() {
        let partitions = hotkey_sets::partition_for_modifiers(&sorted_keys, variant);
        if partitions.len() > 1 {
            let layout = hotkey_sets::get_definition(&sorted_keys, variant)
                .map(|def| def.layout())
                .unwrap_or(PartitionLayout::Inline);
            let alternatives = partitions
                .iter()
                .map(|partition| {
                    modifier_plus_keys_icon(
                        group.modifiers(),
                        key_set_icon(partition, partition, variant),
                    )
                })
                .collect();
            return IconAlternatives {
                alternatives,
                layout,
            };
        }
    }

    let whole = key_set_icon(&sorted_keys, group.keys(), variant);
    IconAlternatives {
        alternatives: vec![modifier_plus_keys_icon(group.modifiers(), whole)],
        layout: PartitionLayout::Inline,
    }
}

/// Per-group alternatives records for the default variant.
pub fn build_icon_data(descriptors: &[KeyDescriptor]) -> Vec<IconAlternatives> {
    build_icon_data_with_variant(descriptors, DEFAULT_VARIANT)
}

/// Per-group alternatives records, one per modifier group in first
/// occurrence order.
pub fn build_icon_data_with_variant(
    descriptors: &[KeyDescriptor],
    variant: &str,
) -> Vec<IconAlternatives> {
    group_descriptors(descriptors)
        .iter()
        .map(|group| group_alternatives(group, variant))
        .collect()
}

/// Binary left fold with "or" connectors.
fn or_fold(icons: Vec<KeyIcon>) -> Option<KeyIcon> {
    icons
        .into_iter()
        .reduce(|acc, next| KeyIcon::OrRow(vec![acc, next]))
}

/// Fully composed icon tree for the default variant.
pub fn compose_icon(descriptors: &[KeyDescriptor]) -> Option<KeyIcon> {
    compose_icon_with_variant(descriptors, DEFAULT_VARIANT)
}

/// Fully composed icon tree: stacked groups become a [`KeyIcon::Stack`],
/// inline groups are or-folded left to right, and the per-group icons are
/// then or-folded pairwise into one tree. `None` only for an empty
/// descriptor list.
pub fn compose_icon_with_variant(descriptors: &[KeyDescriptor], variant: &str) -> Option<KeyIcon> {
    let mut group_icons = Vec::new();
    for record in build_icon_data_with_variant(descriptors, variant) {
        let icon = match (record.layout, record.alternatives.len()) {
            (PartitionLayout::Stacked, len) if len > 1 => KeyIcon::Stack(record.alternatives),
            _ => match or_fold(record.alternatives) {
                Some(icon) => icon,
                None => continue,
            },
        };
        group_icons.push(icon);
    }
    or_fold(group_icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap_key(icon: &KeyIcon) -> &str {
        match icon {
            KeyIcon::Cap { key, .. } => key,
            other => panic!("expected cap, got {other:?}"),
        }
    }

    #[test]
    fn test_single_key_single_cap() {
        let data = build_icon_data(&[KeyDescriptor::plain("space")]);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].alternatives.len(), 1);
        assert_eq!(cap_key(&data[0].alternatives[0]), "space");

        let composed = compose_icon(&[KeyDescriptor::plain("space")]).unwrap();
        assert_eq!(cap_key(&composed), "space");
    }

    #[test]
    fn test_arrow_cluster_uses_canned_row() {
        let descriptors = [
            KeyDescriptor::plain("arrowLeft"),
            KeyDescriptor::plain("arrowRight"),
            KeyDescriptor::plain("arrowUp"),
            KeyDescriptor::plain("arrowDown"),
        ];
        let composed = compose_icon(&descriptors).unwrap();
        // Canned cluster row, not four or-joined caps.
        match composed {
            KeyIcon::Row(children) => assert_eq!(children.len(), 4),
            other => panic!("expected canned row, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_combination_falls_back_to_or_row() {
        let descriptors = [KeyDescriptor::plain("home"), KeyDescriptor::plain("0")];
        let composed = compose_icon(&descriptors).unwrap();
        match composed {
            KeyIcon::OrRow(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(cap_key(&children[0]), "home");
                assert_eq!(cap_key(&children[1]), "0");
            }
            other => panic!("expected or row, got {other:?}"),
        }
    }

    #[test]
    fn test_modified_group_is_plus_row() {
        let composed = compose_icon(&[KeyDescriptor::new("f", ["alt", "ctrl"])]).unwrap();
        match composed {
            KeyIcon::PlusRow(children) => {
                assert_eq!(children.len(), 3);
                assert_eq!(cap_key(&children[0]), "ctrl");
                assert_eq!(cap_key(&children[1]), "alt");
                assert_eq!(cap_key(&children[2]), "f");
            }
            other => panic!("expected plus row, got {other:?}"),
        }
    }

    #[test]
    fn test_paired_variant_stacks_partitions() {
        let descriptors = [
            KeyDescriptor::new("arrowLeft", ["shift"]),
            KeyDescriptor::new("arrowRight", ["shift"]),
            KeyDescriptor::new("arrowUp", ["shift"]),
            KeyDescriptor::new("arrowDown", ["shift"]),
        ];
        let data = build_icon_data_with_variant(&descriptors, "paired");
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].alternatives.len(), 2);
        assert_eq!(data[0].layout, PartitionLayout::Stacked);

        let composed = compose_icon_with_variant(&descriptors, "paired").unwrap();
        match composed {
            KeyIcon::Stack(rows) => {
                assert_eq!(rows.len(), 2);
                for row in &rows {
                    match row {
                        KeyIcon::PlusRow(children) => {
                            assert_eq!(cap_key(&children[0]), "shift");
                        }
                        other => panic!("expected modifier plus keys row, got {other:?}"),
                    }
                }
            }
            other => panic!("expected stack, got {other:?}"),
        }
    }

    #[test]
    fn test_groups_or_folded() {
        let descriptors = [
            KeyDescriptor::plain("space"),
            KeyDescriptor::new("enter", ["shift"]),
        ];
        let composed = compose_icon(&descriptors).unwrap();
        match composed {
            KeyIcon::OrRow(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(cap_key(&children[0]), "space");
                assert!(matches!(children[1], KeyIcon::PlusRow(_)));
            }
            other => panic!("expected or row of groups, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_descriptors_compose_none() {
        assert!(compose_icon(&[]).is_none());
    }
}
