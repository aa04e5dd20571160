//! N-Triples parser for profile and pod documents.
//!
//! Parses the N-Triples subset the serializer emits: one statement per
//! line (`<s> <p> <o> .` or `<s> <p> "literal" .`, with an optional
//! `^^<datatype>` or `@lang` suffix on literals), `#` comment lines, and
//! blank lines. Blank nodes and multi-line literals are not supported;
//! profile documents do not use them.

use thiserror::Error;

use crate::dataset::{Dataset, Object};

/// A malformed line in an N-Triples document. Carries the 1-based line
/// number where parsing stopped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A statement line did not end with the `.` terminator.
    #[error("line {line}: statement does not end with '.'")]
    MissingTerminator {
        /// 1-based line number.
        line: usize,
    },
    /// A subject or predicate position did not hold an `<iri>` term.
    #[error("line {line}: expected <iri> in the {position} position")]
    ExpectedIri {
        /// 1-based line number.
        line: usize,
        /// Which term position was malformed.
        position: &'static str,
    },
    /// The object position held neither an `<iri>` nor a `"literal"`.
    #[error("line {line}: malformed object term")]
    MalformedObject {
        /// 1-based line number.
        line: usize,
    },
    /// A string literal was opened but never closed.
    #[error("line {line}: unterminated string literal")]
    UnterminatedLiteral {
        /// 1-based line number.
        line: usize,
    },
    /// Content remained after a complete statement.
    #[error("line {line}: unexpected content after the object term")]
    TrailingContent {
        /// 1-based line number.
        line: usize,
    },
}

/// Parses an N-Triples document into a [`Dataset`].
///
/// Statements are grouped by subject; subjects and statements keep the
/// order in which the document first mentions them.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first malformed line. Absence of
/// data is not an error: the empty document parses to an empty dataset.
pub fn parse_ntriples(input: &str) -> Result<Dataset, ParseError> {
    let mut dataset = Dataset::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(body) = trimmed.strip_suffix('.') else {
            return Err(ParseError::MissingTerminator { line });
        };
        let body = body.trim_end();

        let (subject, rest) = take_iri(body)
            .ok_or(ParseError::ExpectedIri { line, position: "subject" })?;
        let rest = rest.trim_start();
        let (predicate, rest) = take_iri(rest)
            .ok_or(ParseError::ExpectedIri { line, position: "predicate" })?;
        let rest = rest.trim_start();
        let (object, rest) = take_object(rest, line)?;
        if !rest.trim().is_empty() {
            return Err(ParseError::TrailingContent { line });
        }

        dataset.upsert_entity(subject).push(predicate, object);
    }

    Ok(dataset)
}

/// Splits a leading `<iri>` term off `input`.
fn take_iri(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix('<')?;
    let end = rest.find('>')?;
    Some((&rest[..end], &rest[end + 1..]))
}

/// Parses the object term: an IRI reference or a string literal with an
/// optional datatype/language suffix.
fn take_object(input: &str, line: usize) -> Result<(Object, &str), ParseError> {
    if input.starts_with('<') {
        let (iri, rest) =
            take_iri(input).ok_or(ParseError::MalformedObject { line })?;
        return Ok((Object::Ref(iri.to_owned()), rest));
    }

    let Some(body) = input.strip_prefix('"') else {
        return Err(ParseError::MalformedObject { line });
    };

    let mut value = String::new();
    let mut chars = body.char_indices();
    let close = loop {
        match chars.next() {
            None => return Err(ParseError::UnterminatedLiteral { line }),
            Some((i, '"')) => break i,
            Some((_, '\\')) => match chars.next() {
                None => return Err(ParseError::UnterminatedLiteral { line }),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, 't')) => value.push('\t'),
                Some((_, c)) => value.push(c),
            },
            Some((_, c)) => value.push(c),
        }
    };

    let rest = &body[close + 1..];
    let rest = strip_literal_suffix(rest, line)?;
    Ok((Object::Literal(value), rest))
}

/// Accepts an optional `^^<datatype>` or `@lang` suffix after a literal.
/// The datatype itself is not retained; profile scalars are strings.
fn strip_literal_suffix(rest: &str, line: usize) -> Result<&str, ParseError> {
    if let Some(dt) = rest.strip_prefix("^^") {
        let (_, after) = take_iri(dt).ok_or(ParseError::MalformedObject { line })?;
        return Ok(after);
    }
    if let Some(tag) = rest.strip_prefix('@') {
        let end = tag
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(tag.len());
        if end == 0 {
            return Err(ParseError::MalformedObject { line });
        }
        return Ok(&tag[end..]);
    }
    Ok(rest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CARD: &str = r#"
# A WebID profile document.
<https://example.org/card#me> <http://www.w3.org/2006/vcard/ns#fn> "Ana" .
<https://example.org/card#me> <http://www.w3.org/2006/vcard/ns#hasAddress> <https://example.org/card#addr> .
<https://example.org/card#addr> <http://www.w3.org/2006/vcard/ns#street-address> "Main St"^^<http://www.w3.org/2001/XMLSchema#string> .
"#;

    #[test]
    fn parses_profile_document() {
        let ds = parse_ntriples(CARD).unwrap();
        assert_eq!(ds.len(), 2);
        let me = ds.entity("https://example.org/card#me").unwrap();
        assert_eq!(me.scalar("http://www.w3.org/2006/vcard/ns#fn"), Some("Ana"));
        assert_eq!(
            me.reference("http://www.w3.org/2006/vcard/ns#hasAddress"),
            Some("https://example.org/card#addr")
        );
    }

    #[test]
    fn datatype_suffix_is_accepted_and_dropped() {
        let ds = parse_ntriples(CARD).unwrap();
        let addr = ds.entity("https://example.org/card#addr").unwrap();
        assert_eq!(
            addr.scalar("http://www.w3.org/2006/vcard/ns#street-address"),
            Some("Main St")
        );
    }

    #[test]
    fn language_tag_is_accepted() {
        let ds = parse_ntriples(
            "<https://e.org/s> <https://e.org/p> \"hola\"@es .\n",
        )
        .unwrap();
        assert_eq!(ds.entity("https://e.org/s").unwrap().scalar("https://e.org/p"), Some("hola"));
    }

    #[test]
    fn escapes_are_decoded() {
        let ds = parse_ntriples(
            r#"<https://e.org/s> <https://e.org/p> "a \"quoted\" \\ line\n" ."#,
        )
        .unwrap();
        assert_eq!(
            ds.entity("https://e.org/s").unwrap().scalar("https://e.org/p"),
            Some("a \"quoted\" \\ line\n")
        );
    }

    #[test]
    fn empty_document_is_empty_dataset() {
        assert!(parse_ntriples("").unwrap().is_empty());
        assert!(parse_ntriples("# only comments\n\n").unwrap().is_empty());
    }

    #[test]
    fn missing_terminator_is_reported_with_line() {
        let err = parse_ntriples("<https://e.org/s> <https://e.org/p> \"v\"\n").unwrap_err();
        assert_eq!(err, ParseError::MissingTerminator { line: 1 });
    }

    #[test]
    fn bad_subject_is_reported() {
        let err = parse_ntriples("_:b0 <https://e.org/p> \"v\" .\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedIri { line: 1, position: "subject" }
        );
    }

    #[test]
    fn unterminated_literal_is_reported() {
        let err = parse_ntriples("<https://e.org/s> <https://e.org/p> \"v .\n").unwrap_err();
        assert_eq!(err, ParseError::UnterminatedLiteral { line: 1 });
    }

    #[test]
    fn trailing_content_is_reported() {
        let err =
            parse_ntriples("<https://e.org/s> <https://e.org/p> \"v\" extra .\n").unwrap_err();
        assert_eq!(err, ParseError::TrailingContent { line: 1 });
    }
}
