//! CoNLL corpus parsing
//!
//! The format is positional and line-oriented:
//!
//! - lines starting with `-DOCSTART-` are document boundary markers, ignored
//! - blank lines are sentence separators
//! - all other lines carry exactly 4 space-separated fields,
//!   `word pos-tag chunk-tag ner-tag`, of which only the word (field 0) and
//!   the NER tag (field 3) are consumed

pub mod error;
pub mod line;
pub mod reader;
pub mod testing;

pub use error::CorpusError;
pub use line::LineKind;
pub use reader::{CorpusReader, Parsed};
