//! Canonical key and modifier vocabulary with deterministic ordering.
//!
//! Every other module works in terms of these canonical names. The two
//! vocabularies are disjoint: a name is either a key or a modifier, never
//! both. Sorting is driven by fixed priority tables so that any caller, in
//! any order, produces the same canonical sequence.

/// Modifier names in display-priority order.
///
/// The vocabulary is wider than the OS-standard four; anything not listed
/// here is not a modifier.
pub const MODIFIER_PRIORITY: [&str; 5] = ["ctrl", "alt", "shift", "meta", "capsLock"];

/// Primary keys in display-priority order: arrows, WASD, the common action
/// keys, navigation keys, then digits. Keys absent from this table sort
/// after all listed keys, alphabetically among themselves.
pub const KEY_PRIORITY: [&str; 26] = [
    "arrowLeft",
    "arrowRight",
    "arrowUp",
    "arrowDown",
    "w",
    "a",
    "s",
    "d",
    "space",
    "enter",
    "tab",
    "escape",
    "home",
    "end",
    "pageUp",
    "pageDown",
    "0",
    "1",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
];

const LETTER_KEYS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

const DIGIT_KEYS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const NAMED_KEYS: [&str; 15] = [
    "arrowLeft",
    "arrowRight",
    "arrowUp",
    "arrowDown",
    "space",
    "enter",
    "tab",
    "escape",
    "home",
    "end",
    "pageUp",
    "pageDown",
    "backspace",
    "delete",
    "insert",
];

/// Iterate the full non-modifier key vocabulary.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    LETTER_KEYS
        .iter()
        .chain(DIGIT_KEYS.iter())
        .chain(NAMED_KEYS.iter())
        .copied()
}

/// Iterate the full modifier vocabulary.
pub fn all_modifiers() -> impl Iterator<Item = &'static str> {
    MODIFIER_PRIORITY.iter().copied()
}

/// Whether `name` is a canonical non-modifier key.
pub fn is_key(name: &str) -> bool {
    all_keys().any(|k| k == name)
}

/// Whether `name` is a canonical modifier.
pub fn is_modifier(name: &str) -> bool {
    MODIFIER_PRIORITY.contains(&name)
}

/// Resolve a case-insensitive spelling to its canonical key name.
pub fn canonical_key(name: &str) -> Option<&'static str> {
    all_keys().find(|k| k.eq_ignore_ascii_case(name))
}

/// Resolve a case-insensitive spelling to its canonical modifier name.
pub fn canonical_modifier(name: &str) -> Option<&'static str> {
    all_modifiers().find(|m| m.eq_ignore_ascii_case(name))
}

fn priority_index(table: &[&str], name: &str) -> usize {
    table.iter().position(|k| *k == name).unwrap_or(usize::MAX)
}

fn sort_with_table<S: AsRef<str>>(table: &[&str], names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| {
        let (pa, pb) = (priority_index(table, a), priority_index(table, b));
        pa.cmp(&pb).then_with(|| a.cmp(b))
    });
    sorted.dedup();
    sorted
}

/// Deduplicate and sort keys by display priority; unknown keys sort last,
/// alphabetically. Idempotent and independent of input order.
pub fn sort_keys<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    sort_with_table(&KEY_PRIORITY, keys)
}

/// Deduplicate and sort modifiers by display priority. Idempotent and
/// independent of input order.
pub fn sort_modifiers<S: AsRef<str>>(modifiers: &[S]) -> Vec<String> {
    sort_with_table(&MODIFIER_PRIORITY, modifiers)
}
