//! Line tokenizer for `go.mod` syntax.

use crate::manifest::ManifestError;

/// A single lexical token on a manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Bare word or unquoted string literal.
    Word(String),
    /// One of `(`, `)`, `[`, `]`, `,`.
    Punct(char),
    /// The `=>` replacement arrow.
    Arrow,
}

impl Token {
    pub(crate) fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

fn is_punct(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | ',')
}

/// Splits one manifest line into tokens, dropping any trailing `//` comment.
pub(crate) fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token>, ManifestError> {
    let mut tokens = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with("//") {
            break;
        }

        if let Some(after) = rest.strip_prefix("=>") {
            tokens.push(Token::Arrow);
            rest = after;
            continue;
        }

        let mut chars = rest.chars();
        let Some(first) = chars.next() else { break };

        if is_punct(first) {
            tokens.push(Token::Punct(first));
            rest = chars.as_str();
        } else if first == '"' {
            let (value, after) = interpreted_string(chars.as_str(), line_no)?;
            tokens.push(Token::Word(value));
            rest = after;
        } else if first == '`' {
            let Some((value, after)) = chars.as_str().split_once('`') else {
                return Err(ManifestError::parse(line_no, "unterminated raw string"));
            };
            tokens.push(Token::Word(value.to_string()));
            rest = after;
        } else {
            let end = bare_word_end(rest);
            tokens.push(Token::Word(rest[..end].to_string()));
            rest = &rest[end..];
        }
    }

    Ok(tokens)
}

/// Byte offset where a bare word starting at `s` ends.
fn bare_word_end(s: &str) -> usize {
    let mut iter = s.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if c.is_whitespace() || is_punct(c) || c == '"' || c == '`' {
            return i;
        }
        if c == '/' && matches!(iter.peek(), Some((_, '/'))) {
            return i;
        }
    }
    s.len()
}

/// Decodes a double-quoted string whose opening quote has been consumed.
///
/// Returns the decoded value and the remainder of the line.
fn interpreted_string(s: &str, line_no: usize) -> Result<(String, &str), ManifestError> {
    let mut value = String::new();
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &s[i + 1..])),
            '\\' => {
                let escaped = match chars.next() {
                    Some((_, '"')) => '"',
                    Some((_, '\\')) => '\\',
                    Some((_, 'n')) => '\n',
                    Some((_, 't')) => '\t',
                    Some((_, other)) => {
                        return Err(ManifestError::parse(
                            line_no,
                            format!("invalid escape sequence '\\{other}' in quoted string"),
                        ));
                    }
                    None => break,
                };
                value.push(escaped);
            }
            _ => value.push(c),
        }
    }

    Err(ManifestError::parse(line_no, "unterminated quoted string"))
}
