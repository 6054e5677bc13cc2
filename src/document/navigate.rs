//! Path-based lookup over a [`Document`].
//!
//! Paths are `/`-delimited (`sector/section/field`) and matched
//! case-sensitively. Segments past the ones a lookup needs are ignored.

use super::{Document, Field, Section, Sector};

const PATH_DELIMITER: char = '/';

/// Returns the `n`-th (0-based) segment of a `/`-delimited path.
pub fn path_element(path: &str, n: usize) -> Option<&str> {
    path.split(PATH_DELIMITER).nth(n)
}

impl Document {
    pub fn find_sector(&self, name: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.name == name)
    }

    /// Looks up `sector/section`.
    pub fn find_section(&self, path: &str) -> Option<&Section> {
        let sector = self.find_sector(path_element(path, 0)?)?;
        let section_name = path_element(path, 1)?;
        sector.sections.iter().find(|s| s.name == section_name)
    }

    /// Looks up `sector/section/field`.
    pub fn find_field(&self, path: &str) -> Option<&Field> {
        let field_name = path_element(path, 2)?;
        self.find_section(path)?
            .fields()
            .iter()
            .find(|f| f.name == field_name)
    }
}
