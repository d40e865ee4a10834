//! `{{name}}` placeholder substitution for localized pattern strings.

/// Fill the named `{{placeholder}}` slots of `template` from `values`.
///
/// Placeholders with no matching name are left intact so a mistranslated
/// pattern degrades visibly instead of dropping text. Values are inserted
/// verbatim; there is no recursive expansion.
pub fn fill_pattern(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open..];
        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[2..close];
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&after_open[..close + 2]),
                }
                rest = &after_open[close + 2..];
            }
            None => {
                // Unterminated placeholder, emit as-is.
                out.push_str(after_open);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_placeholder() {
        assert_eq!(
            fill_pattern("Press {{key}}", &[("key", "Space")]),
            "Press Space"
        );
    }

    #[test]
    fn test_two_placeholders() {
        assert_eq!(
            fill_pattern("{{first}} or {{second}}", &[("first", "A"), ("second", "B")]),
            "A or B"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(
            fill_pattern("{{x}} and {{x}}", &[("x", "Tab")]),
            "Tab and Tab"
        );
    }

    #[test]
    fn test_unknown_placeholder_left_intact() {
        assert_eq!(
            fill_pattern("{{action}} with {{keys}}", &[("action", "Move")]),
            "Move with {{keys}}"
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(fill_pattern("plain text", &[]), "plain text");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(fill_pattern("broken {{tail", &[("tail", "x")]), "broken {{tail");
    }

    #[test]
    fn test_value_not_reexpanded() {
        assert_eq!(
            fill_pattern("{{a}}", &[("a", "{{b}}"), ("b", "loop")]),
            "{{b}}"
        );
    }
}
