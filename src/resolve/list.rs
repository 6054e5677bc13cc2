//! Expansion of list fields.
//!
//! A list reference is decorated by the text glued to it: in `-I$(dirs)` the
//! `-I` is repeated for every element, so `a:b` becomes `-Ia -Ib`. A prefix
//! ending in `:` (or a postfix starting with `:`) is a label and is kept only
//! once.
//!
//! Decoration runs up to the nearest space only. Other whitespace is part of
//! it, so in multi-line text a prefix can span a newline. The prefix is raw
//! source text: a reference glued in front of a list (`$(a)$(list)`) is
//! repeated unexpanded before every element after the first.

use std::ops::Range;

use super::{ResolveError, Resolver};
use crate::document::Field;

const ELEMENT_SEPARATOR: char = ':';

/// Formats the list `field` referenced at `span` within `text`.
///
/// The literal prefix and postfix stay in `text` around the splice point, so
/// the returned string omits the prefix on its first element and the postfix
/// on its last.
pub(super) fn format(
    resolver: &Resolver<'_>,
    field: &Field,
    path: &str,
    text: &str,
    span: Range<usize>,
    context: &str,
    depth: usize,
) -> Result<String, ResolveError> {
    let prefix = prefix_before(text, span.start);
    let postfix = postfix_after(text, span.end);

    let resolved = resolver.descend(field, path, context, depth)?;
    let elements: Vec<&str> = resolved
        .split(ELEMENT_SEPARATOR)
        .filter(|e| !e.is_empty())
        .collect();

    let mut out = String::with_capacity(resolved.len());
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(prefix);
        }
        out.push_str(element);
        if i + 1 < elements.len() {
            out.push_str(postfix);
        }
    }

    Ok(out)
}

/// The run of non-space text directly before `at`, unless it is a label.
fn prefix_before(text: &str, at: usize) -> &str {
    let prefix = text[..at].rsplit(' ').next().unwrap_or_default();
    if prefix.ends_with(ELEMENT_SEPARATOR) {
        ""
    } else {
        prefix
    }
}

/// The run of non-space text directly after `at`, unless it is a label.
fn postfix_after(text: &str, at: usize) -> &str {
    let postfix = text[at..].split(' ').next().unwrap_or_default();
    if postfix.starts_with(ELEMENT_SEPARATOR) {
        ""
    } else {
        postfix
    }
}
