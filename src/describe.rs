//! The phrase builder.
//!
//! Turns an action text plus a descriptor list into one reactive sentence,
//! e.g. "Move with Arrow keys" or "Close faucet with Home or 0". The
//! sentence is a derived text value whose dependency set is enumerated up
//! front, so a locale change to any label, canned phrase, or pattern
//! recomputes it without the caller rebuilding anything.

use crate::descriptor::{group_descriptors, KeyDescriptor, ModifierGroup};
use crate::hotkey_sets::{self, DEFAULT_VARIANT};
use crate::{keys, registry, strings};
use keycue_reactive::{fill_pattern, TextHandle};

/// How a list join reads: as alternatives or as an enumeration.
///
/// The join device is shared by both; only the connective patterns differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    /// "A, B, or C"
    Or,
    /// "A, B, and C"
    And,
}

/// Join already-rendered items with the localized list device:
/// one item is itself, two use the pair pattern, three or more become a
/// comma-separated list ending in the final-item pattern.
pub(crate) fn join_list(items: &[String], conjunction: Conjunction) -> String {
    let bank = strings::bank();
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => {
            let pattern = match conjunction {
                Conjunction::Or => &bank.or_two,
                Conjunction::And => &bank.and_two,
            };
            fill_pattern(
                &pattern.get(),
                &[("first", first.as_str()), ("second", second.as_str())],
            )
        }
        _ => {
            // Length >= 3, split_last always succeeds.
            let Some((last, head)) = items.split_last() else {
                return String::new();
            };
            let list = head.join(", ");
            let pattern = match conjunction {
                Conjunction::Or => &bank.or_final,
                Conjunction::And => &bank.and_final,
            };
            fill_pattern(
                &pattern.get(),
                &[("list", list.as_str()), ("item", last.as_str())],
            )
        }
    }
}

/// The modifier labels folded together with the "plus" pair pattern.
fn modifier_phrase(modifiers: &[String]) -> String {
    let bank = strings::bank();
    modifiers
        .iter()
        .map(|modifier| registry::key_label(modifier).get())
        .reduce(|acc, next| {
            fill_pattern(
                &bank.plus_pair.get(),
                &[("first", acc.as_str()), ("second", next.as_str())],
            )
        })
        .unwrap_or_default()
}

/// Phrase for one key set: canned cluster phrase when registered, the bare
/// label for a single key, otherwise a generic "or" list of labels.
fn key_set_phrase(sorted_keys: &[String], display_keys: &[String], variant: &str) -> String {
    if let Some(def) = hotkey_sets::get_definition(sorted_keys, variant) {
        if let Some(phrase) = def.phrase() {
            return phrase.get();
        }
    }
    if display_keys.len() == 1 {
        return registry::key_label(&display_keys[0]).get();
    }
    let labels: Vec<String> = display_keys
        .iter()
        .map(|key| registry::key_label(key).get())
        .collect();
    join_list(&labels, Conjunction::Or)
}

fn combine(modifiers: &str, keys_phrase: &str) -> String {
    match (modifiers.is_empty(), keys_phrase.is_empty()) {
        (true, _) => keys_phrase.to_string(),
        (_, true) => modifiers.to_string(),
        (false, false) => fill_pattern(
            &strings::bank().modifiers_plus_keys.get(),
            &[("modifiers", modifiers), ("keys", keys_phrase)],
        ),
    }
}

/// One clause per modifier group.
fn group_clause(group: &ModifierGroup, variant: &str) -> String {
    let sorted_keys = keys::sort_keys(group.keys());
    let modifiers = modifier_phrase(group.modifiers());

    if group.has_modifiers() {
        let partitions = hotkey_sets::partition_for_modifiers(&sorted_keys, variant);
        if partitions.len() > 1 {
            // Each partition gets the full modifier prefix; the layout hint
            // on the definition is icon-side metadata and does not change
            // the text.
            let clauses: Vec<String> = partitions
                .iter()
                .map(|partition| combine(&modifiers, &key_set_phrase(partition, partition, variant)))
                .collect();
            return join_list(&clauses, Conjunction::Or);
        }
    }

    combine(&modifiers, &key_set_phrase(&sorted_keys, group.keys(), variant))
}

fn compose_sentence(action: &TextHandle, descriptors: &[KeyDescriptor], variant: &str) -> String {
    let action_text = action.get();
    let action_text = action_text.trim();
    if action_text.is_empty() {
        return String::new();
    }

    let clauses: Vec<String> = group_descriptors(descriptors)
        .iter()
        .map(|group| group_clause(group, variant))
        .collect();
    let keys_phrase = join_list(&clauses, Conjunction::Or);
    if keys_phrase.is_empty() {
        return action_text.to_string();
    }
    fill_pattern(
        &strings::bank().action_keys.get(),
        &[("action", action_text), ("keys", keys_phrase.as_str())],
    )
}

/// Enumerate, without side effects, every text cell the sentence could
/// read: the action, the patterns, every label and every canned phrase
/// reachable from this descriptor set. Declared up front so the derived
/// value's dependency set is complete from the first recomputation.
fn collect_dependencies(
    action: &TextHandle,
    descriptors: &[KeyDescriptor],
    variant: &str,
) -> Vec<TextHandle> {
    fn push(handle: &TextHandle, deps: &mut Vec<TextHandle>) {
        if !deps.iter().any(|existing| existing.same_cell(handle)) {
            deps.push(handle.clone());
        }
    }

    let bank = strings::bank();
    let mut deps: Vec<TextHandle> = Vec::new();

    push(action, &mut deps);
    for pattern in [
        &bank.or_two,
        &bank.or_final,
        &bank.and_two,
        &bank.and_final,
        &bank.plus_pair,
        &bank.modifiers_plus_keys,
        &bank.action_keys,
    ] {
        push(pattern, &mut deps);
    }

    for group in group_descriptors(descriptors) {
        for modifier in group.modifiers() {
            push(&registry::key_label(modifier), &mut deps);
        }
        for key in group.keys() {
            push(&registry::key_label(key), &mut deps);
        }
        let sorted_keys = keys::sort_keys(group.keys());
        if let Some(def) = hotkey_sets::get_definition(&sorted_keys, variant) {
            if let Some(phrase) = def.phrase() {
                push(phrase, &mut deps);
            }
        }
        if group.has_modifiers() {
            for partition in hotkey_sets::partition_for_modifiers(&sorted_keys, variant) {
                if let Some(def) = hotkey_sets::get_definition(&partition, variant) {
                    if let Some(phrase) = def.phrase() {
                        push(phrase, &mut deps);
                    }
                }
            }
        }
    }
    deps
}

/// Describe `descriptors` for the default variant.
pub fn describe(action: &TextHandle, descriptors: &[KeyDescriptor]) -> TextHandle {
    describe_with_variant(action, descriptors, DEFAULT_VARIANT)
}

/// Build the reactive help sentence for an action.
///
/// An action text that trims to empty produces the empty string. Unknown
/// key *combinations* always fall back to generic phrasing; the only
/// failure mode is the fail-fast panic for a key outside the vocabulary.
pub fn describe_with_variant(
    action: &TextHandle,
    descriptors: &[KeyDescriptor],
    variant: &str,
) -> TextHandle {
    log::trace!(
        "building description for {} descriptor(s), variant '{variant}'",
        descriptors.len()
    );
    let deps = collect_dependencies(action, descriptors, variant);
    let action = action.clone();
    let descriptors = descriptors.to_vec();
    let variant = variant.to_string();
    TextHandle::derived(deps, move || {
        compose_sentence(&action, &descriptors, &variant)
    })
}
