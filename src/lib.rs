//! Hotkey description and icon composition engine.
//!
//! Turns a structured description of "which key presses trigger this
//! action" into a natural-language help sentence and a parallel key-cap
//! icon tree, staying correct under live locale changes.
//!
//! Pipeline: descriptor list → grouped by modifier set → hotkey-set
//! registry lookup and partitioning → either a reactive sentence
//! ([`describe`]) or a declarative icon tree ([`compose_icon`] /
//! [`build_icon_data`]). The phrase builder and the icon composer share the
//! grouping pass, which keeps the two outputs structurally in step: one
//! clause per group on the text side, one alternatives-record per group on
//! the icon side.
//!
//! The engine is synchronous and pure. The only fatal condition is using a
//! key name outside the canonical vocabulary; unknown *combinations* of
//! valid keys always have a generic fallback rendering.

mod describe;
mod descriptor;
pub mod hotkey_sets;
mod icon;
pub mod keys;
pub mod parser;
mod registry;
pub mod strings;

pub use describe::{describe, describe_with_variant, Conjunction};
pub use descriptor::{group_descriptors, KeyDescriptor, ModifierGroup};
pub use hotkey_sets::{DEFAULT_VARIANT, PartitionLayout};
pub use icon::{
    build_icon_data, build_icon_data_with_variant, compose_icon, compose_icon_with_variant,
    IconAlternatives, KeyIcon,
};
pub use parser::{parse_descriptor, parse_descriptors, ParseError};
pub use registry::{key_icon, key_label};

// Hosts observe and set the reactive cells through these.
pub use keycue_reactive::{fill_pattern, Subscription, TextHandle};
