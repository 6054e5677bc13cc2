//! Line parser for the mcfg format.
//!
//! ```text
//! sector <name>
//! fields <name>:
//! lines <name>:
//! str  <field-name> "<value>"
//! list <field-name> "<a:b:c>"
//! ; comment
//! <free text>          (inside a lines section)
//! ```
//!
//! The parser holds no state besides the document it is building: the
//! "current" sector and section are always the most recently registered ones.

mod error;
mod tokens;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

pub use error::ParseError;
pub use tokens::Tokens;

use crate::document::{Document, FieldKind, SectionKind};
use crate::Error;

const SECTOR_KEYWORD: &str = "sector";
const COMMENT_MARKER: char = ';';

/// Incrementally builds a [`Document`] one source line at a time.
#[derive(Debug, Default)]
pub struct Parser {
    document: Document,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consumes the parser, yielding the finished document.
    pub fn finish(self) -> Document {
        self.document
    }

    /// Feeds the next physical source line.
    ///
    /// Advances the document's line counter, then applies the line. On error
    /// the document is left as it was before the line.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.document.advance_line();
        self.parse_line(line)
    }

    /// Applies a single line without touching the line counter.
    pub fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        let mut tokens = Tokens::new(line);
        let Some(first) = tokens.next() else {
            return Ok(());
        };

        if first == SECTOR_KEYWORD {
            let name = tokens.next().unwrap_or_default();
            self.document.register_sector(name)?;
            trace!(line = self.document.line(), sector = name, "registered sector");
            return Ok(());
        }

        if first.starts_with(COMMENT_MARKER) {
            return Ok(());
        }

        if let Some(kind) = SectionKind::from_keyword(first) {
            return self.parse_section_header(kind, tokens);
        }

        self.parse_content(first, tokens)
    }

    fn parse_section_header(
        &mut self,
        kind: SectionKind,
        mut tokens: Tokens<'_>,
    ) -> Result<(), ParseError> {
        let raw = tokens
            .next()
            .ok_or_else(|| ParseError::syntax("section declaration without a name"))?;
        let name = raw.strip_suffix(':').unwrap_or(raw);
        if name.is_empty() {
            return Err(ParseError::syntax("section declaration without a name"));
        }

        let sector = self
            .document
            .current_sector_mut()
            .ok_or_else(|| ParseError::syntax(format!("section '{name}' declared outside a sector")))?;
        sector.register_section(kind, name)?;
        trace!(line = self.document.line(), section = name, ?kind, "registered section");
        Ok(())
    }

    fn parse_content(&mut self, first: &str, mut tokens: Tokens<'_>) -> Result<(), ParseError> {
        let line = self.document.line();
        if self.document.sectors().is_empty() {
            return Err(ParseError::syntax("content before any sector declaration"));
        }
        let section = self
            .document
            .current_section_mut()
            .ok_or_else(|| ParseError::syntax("content before any section declaration"))?;

        match section.kind() {
            SectionKind::Fields => {
                let kind = FieldKind::from_tag(first);
                let name = tokens
                    .next()
                    .ok_or_else(|| ParseError::syntax("field declaration without a name"))?;
                let quoted = tokens
                    .remainder()
                    .ok_or_else(|| ParseError::syntax(format!("field '{name}' has no value")))?;
                let value = unquote(&quoted)
                    .ok_or_else(|| ParseError::syntax(format!("unterminated value for field '{name}'")))?;

                section.register_field(kind, name, value)?;
                trace!(line, field = name, "registered field");
            }
            SectionKind::Lines => {
                let text = match tokens.remainder() {
                    Some(rest) => format!("{first} {rest}"),
                    None => first.to_string(),
                };
                section.append_line(&text)?;
            }
        }

        Ok(())
    }
}

/// Strips the surrounding double quotes from a field value.
fn unquote(raw: &str) -> Option<&str> {
    raw.strip_prefix('"')?.strip_suffix('"')
}

/// Parses a complete document held in memory.
pub fn parse_str(input: &str) -> Result<Document, Error> {
    parse_reader(input.as_bytes())
}

/// Parses a document line by line from any buffered reader.
///
/// Stops at the first failing line; the error carries its 1-based number.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, Error> {
    let mut parser = Parser::new();

    for line in reader.lines() {
        let line = line.map_err(|source| Error::Read {
            line: parser.document.line() + 1,
            source,
        })?;
        parser.feed_line(&line).map_err(|source| Error::Parse {
            line: parser.document.line(),
            source,
        })?;
    }

    debug!(
        lines = parser.document.line(),
        sectors = parser.document.sectors().len(),
        "parsed document"
    );
    Ok(parser.finish())
}

/// Opens and parses the file at `path`.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "parsing file");

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}
