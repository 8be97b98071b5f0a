use crate::table::Row;
use crate::template::placeholder::{find_placeholders, to_token};
use regex::{NoExpand, RegexBuilder};
use tracing::{debug, warn};

/// Resolves a placeholder against a row.
/// Missing columns, and columns holding an empty value, resolve to the bracketed token itself.
fn resolve(name: &str, row: &Row) -> String {
    row.get(name)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| to_token(name))
}

/// Fills a template with the values of one row.
///
/// Placeholders are processed in discovery order, each pass rewriting the output of the
/// previous one. Every occurrence of `[NAME]` is replaced regardless of letter case, and
/// replacement values are inserted literally.
pub fn render(template: &str, row: &Row) -> String {
    let mut content = template.to_owned();
    for name in find_placeholders(template) {
        let value = resolve(&name, row);
        let pattern = match RegexBuilder::new(&regex::escape(&to_token(&name)))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(error) => {
                warn!(placeholder = %name, %error, "placeholder left untouched");
                continue;
            }
        };
        content = pattern.replace_all(&content, NoExpand(&value)).into_owned();
    }
    debug!(length = content.len(), "rendered template");
    content
}
