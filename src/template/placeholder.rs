use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `[`, one or more characters other than `]`, then `]`. Newlines are allowed inside.
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Hardcode regex pattern"));

/// Extracts the unique placeholder names of a template in first-occurrence order.
/// Names are taken verbatim from between the brackets, whitespace included.
pub fn find_placeholders(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .filter_map(|captures| captures.get(1))
        .map(|matcher| matcher.as_str())
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect()
}

/// Wraps a name back into its bracketed token form.
pub(crate) fn to_token(name: &str) -> String {
    format!("[{name}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_placeholders_in_order() {
        let names = find_placeholders("Dear [NAME],\n\nCompany: [COMPANY]. Regards, [NAME]");

        assert_eq!(names, vec!["NAME", "COMPANY"]);
    }

    #[test]
    fn find_placeholders_keeps_case_variants_apart() {
        assert_eq!(find_placeholders("[Name] [NAME] [Name]"), vec!["Name", "NAME"]);
    }

    #[test]
    fn find_placeholders_keeps_inner_whitespace() {
        assert_eq!(find_placeholders("[ first name ]"), vec![" first name "]);
        assert_eq!(find_placeholders("[line\nbreak]"), vec!["line\nbreak"]);
    }

    #[test]
    fn find_placeholders_ignores_malformed_brackets() {
        assert!(find_placeholders("").is_empty());
        assert!(find_placeholders("no placeholders here").is_empty());
        assert!(find_placeholders("empty [] brackets").is_empty());
        assert!(find_placeholders("unclosed [NAME").is_empty());
        assert!(find_placeholders("stray ] bracket").is_empty());
    }

    #[test]
    fn find_placeholders_nested_opening_bracket() {
        assert_eq!(find_placeholders("[[NAME]]"), vec!["[NAME"]);
        assert_eq!(find_placeholders("[a][b]"), vec!["a", "b"]);
    }
}
