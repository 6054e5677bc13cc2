//! Expansion of `$(...)` references inside field values and arbitrary text.
//!
//! A reference name without `/` is local and is appended to the caller's
//! context path (`$(cc)` with context `.config/build/` looks up
//! `.config/build/cc`). A name containing `/` is absolute and gets the
//! configured root token prepended unless it already starts with it.
//!
//! References to missing fields are left in the output untouched.

mod error;
mod list;

use tracing::{trace, warn};

pub use error::ResolveError;

use crate::document::{Document, Field};
use crate::options::ResolveOptions;

const REF_OPEN: &str = "$(";
const REF_CLOSE: char = ')';

/// Resolves references against a borrowed [`Document`].
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    document: &'a Document,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver with [`ResolveOptions::default`].
    pub fn new(document: &'a Document) -> Self {
        Self::with_options(document, ResolveOptions::default())
    }

    pub fn with_options(document: &'a Document, options: ResolveOptions) -> Self {
        Self { document, options }
    }

    /// Returns `text` with every resolvable reference expanded.
    ///
    /// Field values are expanded recursively with the same `context`. Without
    /// a `max_depth` there is no cycle detection: a self-referencing field
    /// recurses until the stack is exhausted.
    pub fn resolve(&self, text: &str, context: &str) -> Result<String, ResolveError> {
        self.expand(text, context, 0)
    }

    /// Builds the lookup path for a reference name.
    pub fn target_path(&self, name: &str, context: &str) -> String {
        if !name.contains('/') {
            return format!("{context}{name}");
        }

        match self.options.root.as_deref().filter(|r| !r.is_empty()) {
            Some(root) if !is_rooted(name, root) => format!("{root}/{name}"),
            _ => name.to_string(),
        }
    }

    fn expand(&self, text: &str, context: &str, depth: usize) -> Result<String, ResolveError> {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(found) = text[search..].find(REF_OPEN) {
            let start = search + found;
            let name_start = start + REF_OPEN.len();
            let Some(name_len) = text[name_start..].find(REF_CLOSE) else {
                break;
            };
            let end = name_start + name_len + 1;
            search = end;

            let name = &text[name_start..name_start + name_len];
            let path = self.target_path(name, context);
            let Some(field) = self.document.find_field(&path) else {
                trace!(reference = name, %path, "unresolved reference left in place");
                continue;
            };

            let value = if field.is_list() {
                list::format(self, field, &path, text, start..end, context, depth)?
            } else {
                self.descend(field, &path, context, depth)?
            };
            trace!(reference = name, %path, %value, "expanded reference");

            out.push_str(&text[copied..start]);
            out.push_str(&value);
            copied = end;
        }

        out.push_str(&text[copied..]);
        Ok(out)
    }

    /// Expands the value of a referenced field one level deeper.
    fn descend(
        &self,
        field: &Field,
        path: &str,
        context: &str,
        depth: usize,
    ) -> Result<String, ResolveError> {
        let depth = depth + 1;
        if let Some(max) = self.options.max_depth {
            if depth > max {
                warn!(%path, depth, "reference nesting exceeded the configured limit");
                return Err(ResolveError::CycleDetected {
                    path: path.to_string(),
                    depth,
                });
            }
        }
        self.expand(field.value(), context, depth)
    }
}

fn is_rooted(name: &str, root: &str) -> bool {
    name.strip_prefix(root)
        .is_some_and(|rest| rest.starts_with('/'))
}

impl Document {
    /// Expands every reference in `text` using the default [`ResolveOptions`].
    ///
    /// Never fails: unresolvable references stay in the output as written.
    pub fn resolve(&self, text: &str, context: &str) -> String {
        self.resolve_with(text, context, ResolveOptions::default())
    }

    /// Like [`Document::resolve`], with explicit options. If a configured depth
    /// limit trips, `text` is returned unchanged.
    pub fn resolve_with(&self, text: &str, context: &str, options: ResolveOptions) -> String {
        Resolver::with_options(self, options)
            .resolve(text, context)
            .unwrap_or_else(|_| text.to_string())
    }
}
