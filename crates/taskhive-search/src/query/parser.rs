//! Tokenizer/parser for search box queries.

use std::sync::LazyLock;

use regex::Regex;

use super::token::{Field, Operator, ParsedQuery, Token};

/// Matches a `field:value` term. The value is everything after the first
/// colon and may itself contain spaces or colons.
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(priority|status|tag):(.+)$").expect("invalid field pattern")
});

/// Detects advanced syntax: a field prefix anywhere, or a boolean keyword
/// delimited by start-of-string/whitespace on the left and whitespace on the
/// right.
static ADVANCED_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:priority|status|tag):|(?:^|\s)(?:and|or|not)\s")
        .expect("invalid advanced syntax pattern")
});

/// Splits a query on whitespace-bounded boolean keywords.
static KEYWORD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(and|or|not)\s+").expect("invalid keyword pattern"));

/// Parser for search box queries.
///
/// A query mixes three kinds of terms: `field:value` filters (`priority:`,
/// `status:`, `tag:`), the boolean keywords `AND` / `OR` / `NOT`, and plain
/// free text. All of it is case-insensitive.
///
/// When none of the structured syntax is present, the whole query is a
/// single free-text term and the evaluator runs in plain substring mode.
/// Otherwise the query is split on whitespace-bounded keywords and walked
/// left to right into a token sequence; `NOT` attaches to the operand that
/// follows it rather than standing as a binary connective.
///
/// Parsing is total: there is no error type, and malformed input degrades to
/// a shorter (possibly empty) token sequence instead of failing. The result
/// is a pure function of the input string.
///
/// # Example
///
/// ```
/// use taskhive_search_rs::query::{Field, QueryParser, Token};
///
/// let parsed = QueryParser::parse("priority:high AND tag:design");
/// assert!(parsed.has_advanced_syntax);
/// assert_eq!(parsed.tokens.len(), 3);
/// assert_eq!(parsed.tokens[0], Token::field(Field::Priority, "high", false));
/// ```
pub struct QueryParser;

impl QueryParser {
    /// Parses a raw search string into a [`ParsedQuery`].
    pub fn parse(input: &str) -> ParsedQuery {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ParsedQuery::default();
        }

        if !ADVANCED_SYNTAX.is_match(trimmed) {
            return ParsedQuery {
                tokens: vec![Token::text(trimmed)],
                has_advanced_syntax: false,
            };
        }

        ParsedQuery {
            tokens: build_tokens(&split_segments(trimmed)),
            has_advanced_syntax: true,
        }
    }
}

/// Splits the trimmed query into operand substrings and uppercased keyword
/// segments, preserving left-to-right order.
///
/// The keyword must have whitespace on both sides to split; a keyword glued
/// to the start or end of an operand stays part of that operand.
fn split_segments(query: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in KEYWORD_SPLIT.captures_iter(query) {
        let matched = caps.get(0).expect("match has a full capture");
        if matched.start() > last {
            parts.push(query[last..matched.start()].to_string());
        }
        parts.push(caps[1].to_uppercase());
        last = matched.end();
    }
    if last < query.len() {
        parts.push(query[last..].to_string());
    }

    parts
}

/// Walks the segments left to right, emitting tokens.
fn build_tokens(parts: &[String]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending: Option<Operator> = None;

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some(op) = Operator::from_keyword(part) {
            pending = Some(op);
            // A keyword with no operand before it has nothing to connect
            // and is absorbed silently.
            if i > 0 && !tokens.is_empty() {
                tokens.push(Token::Operator(op));
            }
            continue;
        }

        let mut negated = false;
        let mut operand = part;
        if pending == Some(Operator::Not) {
            negated = true;
            pending = None;
        } else if let Some(rest) = strip_not_prefix(operand) {
            negated = true;
            operand = rest.trim();
        }

        if let Some(caps) = FIELD_PATTERN.captures(operand) {
            if let Some(field) = Field::from_keyword(&caps[1]) {
                tokens.push(Token::Field {
                    field,
                    value: caps[2].trim().to_string(),
                    negated,
                });
                pending = None;
                continue;
            }
        }

        if !operand.is_empty() && Operator::from_keyword(operand).is_none() {
            tokens.push(Token::Text(operand.to_string()));
            pending = None;
        }
    }

    tokens
}

/// Returns the remainder of a segment that starts with a literal `NOT `
/// prefix (case-insensitive).
fn strip_not_prefix(part: &str) -> Option<&str> {
    let bytes = part.as_bytes();
    if bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(b"not ") {
        Some(&part[4..])
    } else {
        None
    }
}
