//! Per-line classification
//!
//! Every line of a corpus file falls into one of three kinds after stripping
//! surrounding whitespace: a document boundary marker, a blank sentence
//! separator, or a token line carrying a word and its annotations.

use crate::conll::error::CorpusError;

/// Prefix marking a document boundary line
pub const DOCSTART_MARKER: &str = "-DOCSTART-";

/// The word field of a token line
const WORD_FIELD: usize = 0;
/// The NER tag field of a token line
const NER_TAG_FIELD: usize = 3;

/// A classified corpus line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A `-DOCSTART-` marker line; ignored by the parser
    DocStart,
    /// A blank line, separating sentences
    Blank,
    /// A token line: the word and its NER tag (POS and chunk tags are
    /// carried by the format but not consumed)
    Token { word: String, tag: String },
}

/// Classify one raw line.
///
/// `line_number` is 1-based and only used for error reporting. Splitting is
/// on single space characters, so the format contract is strictly
/// single-space-delimited; a token line needs at least 4 fields.
pub fn classify(raw: &str, line_number: usize) -> Result<LineKind, CorpusError> {
    let line = raw.trim();
    if line.starts_with(DOCSTART_MARKER) {
        return Ok(LineKind::DocStart);
    }
    if line.is_empty() {
        return Ok(LineKind::Blank);
    }
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() <= NER_TAG_FIELD {
        return Err(CorpusError::LineFormat {
            line: line_number,
            found: fields.len(),
            content: line.to_string(),
        });
    }
    Ok(LineKind::Token {
        word: fields[WORD_FIELD].to_string(),
        tag: fields[NER_TAG_FIELD].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docstart_marker() {
        assert_eq!(
            classify("-DOCSTART- -X- -X- O", 1).unwrap(),
            LineKind::DocStart
        );
    }

    #[test]
    fn test_docstart_marker_bare() {
        // The marker alone is enough; no field count applies
        assert_eq!(classify("-DOCSTART-", 1).unwrap(), LineKind::DocStart);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(classify("", 1).unwrap(), LineKind::Blank);
        assert_eq!(classify("   \t", 1).unwrap(), LineKind::Blank);
    }

    #[test]
    fn test_token_line_field_extraction() {
        // Only fields 0 and 3 are consumed, whatever the middle fields hold
        let kind = classify("Paris B-LOC I-MISC B-LOC", 1).unwrap();
        assert_eq!(
            kind,
            LineKind::Token {
                word: "Paris".to_string(),
                tag: "B-LOC".to_string(),
            }
        );
    }

    #[test]
    fn test_token_line_extra_fields_ignored() {
        let kind = classify("EU NNP B-NP B-ORG extra", 1).unwrap();
        assert_eq!(
            kind,
            LineKind::Token {
                word: "EU".to_string(),
                tag: "B-ORG".to_string(),
            }
        );
    }

    #[test]
    fn test_token_line_strips_terminator() {
        let kind = classify("EU NNP B-NP B-ORG\r\n", 1).unwrap();
        assert_eq!(
            kind,
            LineKind::Token {
                word: "EU".to_string(),
                tag: "B-ORG".to_string(),
            }
        );
    }

    #[test]
    fn test_short_token_line_is_an_error() {
        let err = classify("EU NNP", 42).unwrap_err();
        assert_eq!(
            err,
            CorpusError::LineFormat {
                line: 42,
                found: 2,
                content: "EU NNP".to_string(),
            }
        );
    }
}
