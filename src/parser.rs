//! Key descriptor parser.
//!
//! Parses human-readable combo strings like `"ctrl+alt+f"` into
//! [`KeyDescriptor`]s. Matching is case-insensitive against the canonical
//! vocabulary; the canonical spelling is what ends up in the descriptor.
//! This is the form descriptors take in sim configuration files.

use crate::descriptor::KeyDescriptor;
use crate::keys;
use thiserror::Error;

/// Error type for descriptor parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or whitespace.
    #[error("empty key combination")]
    Empty,

    /// Every part was a modifier; there is no key to press.
    #[error("key combination ends with modifier, no key specified")]
    TrailingModifier,

    /// More than one non-modifier key in a single combo.
    #[error("multiple keys specified: already have '{first}', found '{second}'")]
    MultipleKeys {
        /// The key seen first.
        first: String,
        /// The conflicting second key.
        second: String,
    },

    /// A part matched neither vocabulary.
    #[error("unknown key or modifier: '{0}'")]
    UnknownName(String),
}

/// Parse one `"modifier+...+key"` combo into a [`KeyDescriptor`].
///
/// Modifiers may appear in any order and any case; the final descriptor
/// carries canonical names with modifiers in priority order. The key may
/// appear anywhere in the combo, but there must be exactly one.
pub fn parse_descriptor(s: &str) -> Result<KeyDescriptor, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut modifiers: Vec<&'static str> = Vec::new();
    let mut key: Option<&'static str> = None;

    for part in trimmed.split('+').map(str::trim) {
        if let Some(modifier) = keys::canonical_modifier(part) {
            modifiers.push(modifier);
        } else if let Some(canonical) = keys::canonical_key(part) {
            if let Some(first) = key {
                return Err(ParseError::MultipleKeys {
                    first: first.to_string(),
                    second: canonical.to_string(),
                });
            }
            key = Some(canonical);
        } else {
            return Err(ParseError::UnknownName(part.to_string()));
        }
    }

    let key = key.ok_or(ParseError::TrailingModifier)?;
    Ok(KeyDescriptor::new(key, modifiers))
}

/// Parse a whitespace-separated list of combos.
///
/// Example: `"shift+arrowLeft shift+arrowRight"` → two descriptors.
pub fn parse_descriptors(s: &str) -> Result<Vec<KeyDescriptor>, ParseError> {
    s.split_whitespace().map(parse_descriptor).collect()
}
