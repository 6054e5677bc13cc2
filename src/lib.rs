//! Parser and reference resolver for the mcfg configuration format.
//!
//! A document is a tree of sectors, sections and fields:
//!
//! ```text
//! sector .config
//! fields build:
//! str cc "gcc"
//! list srcs "main:util"
//! str cmd "$(cc) -c $(srcs).c"
//! lines script:
//! echo done
//! ```
//!
//! ```
//! let doc = mcfg::parse_str(
//!     "sector .config\n\
//!      fields build:\n\
//!      str cc \"gcc\"\n\
//!      list srcs \"main:util\"\n\
//!      str cmd \"$(cc) -c $(srcs).c\"\n",
//! )?;
//!
//! let cmd = doc.find_field(".config/build/cmd").unwrap();
//! assert_eq!(doc.resolve(cmd.value(), ".config/build/"), "gcc -c main.c util.c");
//! # Ok::<(), mcfg::Error>(())
//! ```

pub mod document;
mod error;
pub mod options;
pub mod parser;
pub mod resolve;

pub use document::{Document, DocumentError, Field, FieldKind, Section, SectionKind, Sector};
pub use error::{Error, ErrorCode};
pub use options::{OptionsError, OptionsLoader, ResolveOptions};
pub use parser::{parse_file, parse_reader, parse_str, ParseError, Parser};
pub use resolve::{ResolveError, Resolver};
