//! Localized reactive string bank.
//!
//! Ships English defaults; a host swaps locales by calling
//! [`TextHandle::set`] on the individual cells. Everything downstream that
//! was built from these cells recomputes on its own. String *loading* is
//! the host's problem; this module only owns the cells.

use keycue_reactive::TextHandle;
use std::sync::LazyLock;

/// Every pattern and canned phrase the engine consults.
///
/// Pattern strings use `{{name}}` placeholders filled with
/// [`keycue_reactive::fill_pattern`].
#[derive(Debug)]
pub struct StringBank {
    /// Two alternatives: `"A or B"`.
    pub or_two: TextHandle,
    /// Final item of a 3+ "or" list: `"A, B, or C"`.
    pub or_final: TextHandle,
    /// Two conjoined items: `"A and B"`.
    pub and_two: TextHandle,
    /// Final item of a 3+ "and" list.
    pub and_final: TextHandle,
    /// One modifier chained onto another: `"Control plus Alt"`.
    pub plus_pair: TextHandle,
    /// Modifier phrase applied to a key phrase: `"Shift plus Arrow keys"`.
    pub modifiers_plus_keys: TextHandle,
    /// The full sentence: action slot then keys slot.
    pub action_keys: TextHandle,

    /// Canned phrase for the four-arrow cluster.
    pub arrow_keys: TextHandle,
    /// Canned phrase for the WASD cluster.
    pub wasd: TextHandle,
    /// Canned phrase for the left/right arrow pair.
    pub left_right_arrows: TextHandle,
    /// Canned phrase for the up/down arrow pair.
    pub up_down_arrows: TextHandle,
    /// Canned phrase for the A/D pair.
    pub a_or_d: TextHandle,
    /// Canned phrase for the W/S pair.
    pub w_or_s: TextHandle,
    /// Canned phrase for the combined left/right-arrow-or-A/D set.
    pub left_right_arrows_or_ad: TextHandle,
}

static BANK: LazyLock<StringBank> = LazyLock::new(|| StringBank {
    or_two: TextHandle::source("{{first}} or {{second}}"),
    or_final: TextHandle::source("{{list}}, or {{item}}"),
    and_two: TextHandle::source("{{first}} and {{second}}"),
    and_final: TextHandle::source("{{list}}, and {{item}}"),
    plus_pair: TextHandle::source("{{first}} plus {{second}}"),
    modifiers_plus_keys: TextHandle::source("{{modifiers}} plus {{keys}}"),
    action_keys: TextHandle::source("{{action}} {{keys}}"),
    arrow_keys: TextHandle::source("Arrow keys"),
    wasd: TextHandle::source("W, A, S, or D"),
    left_right_arrows: TextHandle::source("Left or Right Arrow"),
    up_down_arrows: TextHandle::source("Up or Down Arrow"),
    a_or_d: TextHandle::source("A or D"),
    w_or_s: TextHandle::source("W or S"),
    left_right_arrows_or_ad: TextHandle::source("Left or Right Arrow or A or D"),
});

/// The process-wide string bank.
pub fn bank() -> &'static StringBank {
    &BANK
}

/// English default label for a canonical key or modifier name.
///
/// Letters and digits fall through to their uppercase spelling; the alt and
/// meta modifiers follow platform convention the same way the combo parser
/// resolves Option/Command on macOS.
pub(crate) fn default_label(name: &str) -> String {
    let label = match name {
        "arrowLeft" => "Left Arrow",
        "arrowRight" => "Right Arrow",
        "arrowUp" => "Up Arrow",
        "arrowDown" => "Down Arrow",
        "space" => "Space",
        "enter" => "Enter",
        "tab" => "Tab",
        "escape" => "Esc",
        "home" => "Home",
        "end" => "End",
        "pageUp" => "Page Up",
        "pageDown" => "Page Down",
        "backspace" => "Backspace",
        "delete" => "Delete",
        "insert" => "Insert",
        "ctrl" => "Control",
        "alt" => alt_label(),
        "shift" => "Shift",
        "meta" => meta_label(),
        "capsLock" => "Caps Lock",
        other => return other.to_ascii_uppercase(),
    };
    label.to_string()
}

fn alt_label() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "Option"
    }
    #[cfg(not(target_os = "macos"))]
    {
        "Alt"
    }
}

fn meta_label() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "Command"
    }
    #[cfg(not(target_os = "macos"))]
    {
        "Meta"
    }
}
