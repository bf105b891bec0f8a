//! Corpus reading
//!
//! `CorpusReader` owns a corpus file path, validated for existence at
//! construction, and parses it into parallel sentence and label sequences.
//! Each `parse` call re-reads the file with fresh buffers, so a reader is
//! reusable and safe to share across threads.

use std::fs;
use std::mem;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::conll::error::CorpusError;
use crate::conll::line::{classify, LineKind};

/// The parsed corpus: sentences, their label sequences, and the label
/// vocabulary.
///
/// `sentences` and `tags` are parallel: same length, and `sentences[i]` and
/// `tags[i]` have the same length for every `i`. `vocabulary` lists the
/// unique tags in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub sentences: Vec<Vec<String>>,
    pub tags: Vec<Vec<String>>,
    pub vocabulary: Vec<String>,
}

impl Parsed {
    /// Number of sentences in the corpus
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Total number of tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Project into the plain `(sentences, tags)` pair
    pub fn into_pair(self) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        (self.sentences, self.tags)
    }

    /// Build the summary reported by the CLI
    pub fn summary(&self) -> Summary {
        Summary {
            sentences: self.sentence_count(),
            tokens: self.token_count(),
            tags: self.vocabulary.clone(),
        }
    }
}

/// Corpus-level counts and the tag vocabulary, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub sentences: usize,
    pub tokens: usize,
    pub tags: Vec<String>,
}

/// Parse corpus source text held in memory.
///
/// One forward pass over the lines. A sentence is closed by a blank line;
/// `-DOCSTART-` lines are inert. There is no flush at end of input: a
/// sentence not closed by a blank line does not appear in the output, so
/// corpora must terminate every sentence with a blank line.
pub fn parse_source(source: &str) -> Result<Parsed, CorpusError> {
    let mut parsed = Parsed::default();
    let mut sentence: Vec<String> = Vec::new();
    let mut tag_sequence: Vec<String> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        match classify(raw, index + 1)? {
            LineKind::DocStart => {}
            LineKind::Token { word, tag } => {
                sentence.push(word);
                if !parsed.vocabulary.contains(&tag) {
                    parsed.vocabulary.push(tag.clone());
                }
                tag_sequence.push(tag);
            }
            LineKind::Blank => {
                // Consecutive blank lines leave the buffers empty; no empty
                // sentence is ever recorded.
                if !sentence.is_empty() {
                    parsed.sentences.push(mem::take(&mut sentence));
                    parsed.tags.push(mem::take(&mut tag_sequence));
                }
                sentence.clear();
                tag_sequence.clear();
            }
        }
    }

    Ok(parsed)
}

/// Reader for a corpus file
///
/// # Example
///
/// ```rust,ignore
/// use conll::conll::reader::CorpusReader;
///
/// let reader = CorpusReader::new("train.conll")?;
/// let (sentences, tags) = reader.parse()?;
/// ```
#[derive(Debug, Clone)]
pub struct CorpusReader {
    path: PathBuf,
}

impl CorpusReader {
    /// Create a reader for the corpus at `path`.
    ///
    /// Fails with `CorpusError::PathNotFound` if no file exists there. No
    /// other validation is performed at construction.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(CorpusError::PathNotFound(path));
        }
        Ok(CorpusReader { path })
    }

    /// The corpus file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the corpus into the `(sentences, tags)` pair.
    ///
    /// The two sequences are always the same length and index-parallel.
    pub fn parse(&self) -> Result<(Vec<Vec<String>>, Vec<Vec<String>>), CorpusError> {
        Ok(self.parse_full()?.into_pair())
    }

    /// Parse the corpus, keeping the label vocabulary alongside the
    /// sentence and tag sequences.
    ///
    /// The file is re-read from the start on every call.
    pub fn parse_full(&self) -> Result<Parsed, CorpusError> {
        let source = fs::read_to_string(&self.path)?;
        parse_source(&source)
    }
}
