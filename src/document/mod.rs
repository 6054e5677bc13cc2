//! The in-memory document tree: sectors hold sections, sections hold either
//! fields or a block of free-text lines.

mod error;
pub mod navigate;

pub use error::DocumentError;
pub use navigate::path_element;

/// A parsed configuration file.
///
/// Owns the whole sector → section → field tree. Entities are only ever
/// appended; nothing is removed until the document itself is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sectors: Vec<Sector>,
    line: usize,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sectors in declaration order.
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// The 1-based number of the last source line fed to the parser,
    /// or 0 if nothing has been parsed yet.
    pub fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn advance_line(&mut self) -> usize {
        self.line += 1;
        self.line
    }

    /// Appends a new, empty sector.
    pub fn register_sector(&mut self, name: &str) -> Result<&mut Sector, DocumentError> {
        if name.is_empty() {
            return Err(DocumentError::InvalidArgument("sector name"));
        }
        if self.sectors.iter().any(|s| s.name == name) {
            return Err(DocumentError::DuplicateSector(name.to_string()));
        }

        let index = self.sectors.len();
        self.sectors.push(Sector {
            name: name.to_string(),
            sections: Vec::new(),
        });
        Ok(&mut self.sectors[index])
    }

    /// The most recently registered sector.
    pub fn current_sector_mut(&mut self) -> Option<&mut Sector> {
        self.sectors.last_mut()
    }

    /// The most recently registered section of the most recently registered sector.
    pub fn current_section_mut(&mut self) -> Option<&mut Section> {
        self.current_sector_mut()?.sections.last_mut()
    }
}

/// A top-level named group of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    name: String,
    sections: Vec<Section>,
}

impl Sector {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Appends a new section with an empty payload of the given kind.
    pub fn register_section(
        &mut self,
        kind: SectionKind,
        name: &str,
    ) -> Result<&mut Section, DocumentError> {
        if name.is_empty() {
            return Err(DocumentError::InvalidArgument("section name"));
        }
        if self.sections.iter().any(|s| s.name == name) {
            return Err(DocumentError::DuplicateSection(name.to_string()));
        }

        let body = match kind {
            SectionKind::Fields => SectionBody::Fields(Vec::new()),
            SectionKind::Lines => SectionBody::Lines(String::new()),
        };
        let index = self.sections.len();
        self.sections.push(Section {
            name: name.to_string(),
            body,
        });
        Ok(&mut self.sections[index])
    }
}

/// Which payload a section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Fields,
    Lines,
}

impl SectionKind {
    /// Maps a section keyword (`fields` or `lines`) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "fields" => Some(Self::Fields),
            "lines" => Some(Self::Lines),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SectionBody {
    Fields(Vec<Field>),
    Lines(String),
}

/// A named group within a sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    body: SectionBody,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SectionKind {
        match self.body {
            SectionBody::Fields(_) => SectionKind::Fields,
            SectionBody::Lines(_) => SectionKind::Lines,
        }
    }

    /// Fields in declaration order. Always empty for a lines section.
    pub fn fields(&self) -> &[Field] {
        match &self.body {
            SectionBody::Fields(fields) => fields,
            SectionBody::Lines(_) => &[],
        }
    }

    /// The accumulated text of a lines section, one `\n`-terminated line per
    /// source line. `None` for a fields section.
    pub fn lines(&self) -> Option<&str> {
        match &self.body {
            SectionBody::Lines(text) => Some(text),
            SectionBody::Fields(_) => None,
        }
    }

    /// Appends a field. Only valid on a fields section.
    pub fn register_field(
        &mut self,
        kind: FieldKind,
        name: &str,
        value: &str,
    ) -> Result<&Field, DocumentError> {
        if name.is_empty() {
            return Err(DocumentError::InvalidArgument("field name"));
        }
        let SectionBody::Fields(fields) = &mut self.body else {
            return Err(DocumentError::FieldsInLinesSection(self.name.clone()));
        };
        if fields.iter().any(|f| f.name == name) {
            return Err(DocumentError::DuplicateField(name.to_string()));
        }

        let index = fields.len();
        fields.push(Field {
            name: name.to_string(),
            kind,
            value: value.to_string(),
        });
        Ok(&fields[index])
    }

    /// Appends one line of text to a lines section. Only valid on a lines section.
    pub fn append_line(&mut self, line: &str) -> Result<(), DocumentError> {
        let SectionBody::Lines(text) = &mut self.body else {
            return Err(DocumentError::LinesInFieldsSection(self.name.clone()));
        };
        text.push_str(line);
        text.push('\n');
        Ok(())
    }
}

/// How a field's value is interpreted during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    /// `:`-separated elements.
    List,
    /// An unrecognized type tag, kept verbatim. Resolves like [`FieldKind::String`].
    Other(String),
}

impl FieldKind {
    /// Maps a type tag (`str`, `list`) to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "str" => Self::String,
            "list" => Self::List,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A named value within a fields section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    value: String,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The raw, unresolved value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_list(&self) -> bool {
        self.kind == FieldKind::List
    }

    /// The raw value split on `:`, skipping empty elements.
    ///
    /// References inside the value are not expanded; use
    /// [`Resolver`](crate::Resolver) for that.
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.value.split(':').filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_sector_appends_in_order() {
        let mut doc = Document::new();
        doc.register_sector("first").unwrap();
        doc.register_sector("second").unwrap();

        let names: Vec<_> = doc.sectors().iter().map(Sector::name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_duplicate_sector_leaves_document_unchanged() {
        let mut doc = Document::new();
        doc.register_sector("main").unwrap();
        let before = doc.clone();

        let result = doc.register_sector("main");
        assert_eq!(result.unwrap_err(), DocumentError::DuplicateSector("main".into()));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut doc = Document::new();
        doc.register_sector("main").unwrap();
        assert!(doc.register_sector("Main").is_ok());
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut doc = Document::new();
        assert_eq!(
            doc.register_sector("").unwrap_err(),
            DocumentError::InvalidArgument("sector name")
        );

        let sector = doc.register_sector("main").unwrap();
        assert!(matches!(
            sector.register_section(SectionKind::Fields, ""),
            Err(DocumentError::InvalidArgument(_))
        ));

        let section = sector.register_section(SectionKind::Fields, "config").unwrap();
        assert!(matches!(
            section.register_field(FieldKind::String, "", "v"),
            Err(DocumentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_section_and_field() {
        let mut doc = Document::new();
        let sector = doc.register_sector("main").unwrap();
        sector.register_section(SectionKind::Fields, "config").unwrap();
        assert_eq!(
            sector.register_section(SectionKind::Lines, "config").unwrap_err(),
            DocumentError::DuplicateSection("config".into())
        );
        assert_eq!(sector.sections().len(), 1);
        assert_eq!(sector.sections()[0].kind(), SectionKind::Fields);

        let section = doc.current_section_mut().unwrap();
        section.register_field(FieldKind::String, "a", "1").unwrap();
        assert_eq!(
            section.register_field(FieldKind::List, "a", "2").unwrap_err(),
            DocumentError::DuplicateField("a".into())
        );
        assert_eq!(section.fields().len(), 1);
        assert_eq!(section.fields()[0].value(), "1");
    }

    #[test]
    fn test_fields_rejected_in_lines_section() {
        let mut doc = Document::new();
        let section = doc
            .register_sector("main")
            .unwrap()
            .register_section(SectionKind::Lines, "script")
            .unwrap();

        assert_eq!(
            section.register_field(FieldKind::String, "a", "1").unwrap_err(),
            DocumentError::FieldsInLinesSection("script".into())
        );
        assert!(section.fields().is_empty());
    }

    #[test]
    fn test_lines_accumulate() {
        let mut doc = Document::new();
        let section = doc
            .register_sector("main")
            .unwrap()
            .register_section(SectionKind::Lines, "script")
            .unwrap();
        assert_eq!(section.lines(), Some(""));

        section.append_line("echo one").unwrap();
        section.append_line("echo two").unwrap();
        assert_eq!(section.lines(), Some("echo one\necho two\n"));
    }

    #[test]
    fn test_append_line_rejected_in_fields_section() {
        let mut doc = Document::new();
        let section = doc
            .register_sector("main")
            .unwrap()
            .register_section(SectionKind::Fields, "config")
            .unwrap();

        assert_eq!(
            section.append_line("text").unwrap_err(),
            DocumentError::LinesInFieldsSection("config".into())
        );
        assert_eq!(section.lines(), None);
    }

    #[test]
    fn test_current_entities_follow_latest_registration() {
        let mut doc = Document::new();
        assert!(doc.current_sector_mut().is_none());

        doc.register_sector("a").unwrap();
        assert!(doc.current_section_mut().is_none());

        doc.register_sector("b")
            .unwrap()
            .register_section(SectionKind::Fields, "s")
            .unwrap();
        assert_eq!(doc.current_sector_mut().unwrap().name(), "b");
        assert_eq!(doc.current_section_mut().unwrap().name(), "s");
    }

    #[test]
    fn test_field_kind_from_tag() {
        assert_eq!(FieldKind::from_tag("str"), FieldKind::String);
        assert_eq!(FieldKind::from_tag("list"), FieldKind::List);
        assert_eq!(FieldKind::from_tag("int"), FieldKind::Other("int".into()));
    }

    #[test]
    fn test_field_elements_skip_empty() {
        let mut doc = Document::new();
        let field = doc
            .register_sector("main")
            .unwrap()
            .register_section(SectionKind::Fields, "config")
            .unwrap()
            .register_field(FieldKind::List, "nums", "1::2:3:")
            .unwrap();

        assert!(field.is_list());
        assert_eq!(field.elements().collect::<Vec<_>>(), ["1", "2", "3"]);
    }
}
