//! # conll
//!
//! A parser for the CoNLL NER corpus format: one token and its annotations
//! per line, blank lines separating sentences, `-DOCSTART-` marker lines
//! demarcating documents.
//!
//! The parser produces two parallel sequences per corpus: tokenized
//! sentences and their per-token NER label sequences, plus the label
//! vocabulary in first-encounter order.
//!
//! ```rust,ignore
//! use conll::conll::reader::CorpusReader;
//!
//! let reader = CorpusReader::new("train.conll")?;
//! let (sentences, tags) = reader.parse()?;
//! assert_eq!(sentences.len(), tags.len());
//! ```

pub mod conll;
