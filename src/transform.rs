use std::borrow::Cow;

use lazy_regex::{regex, Regex};
use tracing::trace;

use crate::{charmap::CharMap, options::Options};

/// Everything except ASCII word characters, whitespace and `$*+~.()'"!-:@`.
fn default_remove() -> &'static Regex {
    regex!(r#"[^A-Za-z0-9_\s$*+~.()'"!\-:@]+"#)
}

pub(crate) fn slugify(char_map: &CharMap, input: &str, options: &Options) -> String {
    let input = if options.trim { input.trim() } else { input };

    let substituted = substitute(char_map, input);

    let remove = options.remove.as_ref().unwrap_or_else(|| default_remove());
    let mut kept = remove.replace_all(&substituted, "");

    if options.strict {
        kept = Cow::Owned(
            regex!(r"[^A-Za-z0-9\s]+")
                .replace_all(&kept, "")
                .into_owned(),
        );
    }

    let collapsed = collapse(&kept, &options.replacement, options.trim);

    let slug = if options.lower {
        collapsed.to_lowercase()
    } else {
        collapsed
    };

    trace!(input, slug = %slug, "Slugified");
    slug
}

/// Replaces every character that has an entry in `char_map`.
///
/// The whole pass holds one read guard, so it sees a single state of the table.
fn substitute(char_map: &CharMap, input: &str) -> String {
    let table = char_map.read();
    let mut substituted = String::with_capacity(input.len());

    for ch in input.chars() {
        match table.get(&ch) {
            Some(replacement) => substituted.push_str(replacement),
            None => substituted.push(ch),
        }
    }

    substituted
}

/// Turns every run of whitespace and hyphens into one separator.
///
/// With `trim_edges`, runs at the very start or end are dropped instead. Text characters
/// that happen to occur in `replacement` are left alone.
fn collapse(text: &str, replacement: &str, trim_edges: bool) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    let mut seen_text = false;

    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' {
            in_run = true;
            continue;
        }

        if in_run && (seen_text || !trim_edges) {
            collapsed.push_str(replacement);
        }

        in_run = false;
        seen_text = true;
        collapsed.push(ch);
    }

    if in_run && !trim_edges {
        collapsed.push_str(replacement);
    }

    collapsed
}
