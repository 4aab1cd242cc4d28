use crate::text::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// Byte offset of the token's first character.
    pub(crate) offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// Bare word: keys, constructor names, `true`, `inf`, ...
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),
    /// `&"..."`
    StringName(String),
    /// `^"..."`
    NodePath(String),

    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Colon,
    Equals,

    Eof,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

// Keys may carry path separators and feature tags: `window/size/mode`, `jump.macos`.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '.')
}

pub(crate) fn lex(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;
    // Open brackets of any kind; property keys only start lines at depth 0.
    let mut depth = 0usize;
    let mut line_start = true;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            if c == '\n' {
                line_start = true;
            }
            i += 1;
            continue;
        }

        // Comment to end of line.
        if c == ';' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        let start = i;

        // Property keys are taken verbatim up to `=`: tile data writes keys such as
        // `0:0/0/physics_layer_0/polygon_0/points`.
        if line_start && depth == 0 && c != '[' {
            line_start = false;
            if let Some(len) = raw_key_len(&input[i..]) {
                i += len;
                out.push(Token {
                    kind: TokenKind::Ident(input[start..i].to_owned()),
                    offset: start,
                });
                continue;
            }
        }
        line_start = false;

        // Quoted strings, optionally prefixed with `&` (string name) or `^` (node path).
        if c == '"' || ((c == '&' || c == '^') && bytes.get(i + 1) == Some(&b'"')) {
            let quote = if c == '"' { i } else { i + 1 };
            let (text, end) = lex_string(input, quote)?;
            let kind = match c {
                '&' => TokenKind::StringName(text),
                '^' => TokenKind::NodePath(text),
                _ => TokenKind::Str(text),
            };
            i = end;
            out.push(Token { kind, offset: start });
            continue;
        }

        // `-inf` is the only signed non-numeric literal the format writes.
        if input[i..].starts_with("-inf") {
            i += 4;
            out.push(Token {
                kind: TokenKind::Float(f64::NEG_INFINITY),
                offset: start,
            });
            continue;
        }

        // Number: -?[0-9]+(.[0-9]*)?([eE][+-]?[0-9]+)?
        if c.is_ascii_digit() || (c == '-' && i + 1 < bytes.len() && is_number_char(bytes[i + 1]))
        {
            let (kind, end) = lex_number(input, start)?;
            i = end;
            out.push(Token { kind, offset: start });
            continue;
        }

        if is_ident_start(c) {
            i += 1;
            while i < bytes.len() && is_ident_continue(bytes[i] as char) {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Ident(input[start..i].to_owned()),
                offset: start,
            });
            continue;
        }

        match c {
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        let kind = match c {
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            _ => {
                let ch = input[i..].chars().next().unwrap_or(c);
                return Err(ParseError::new(start, format!("unexpected character '{ch}'")));
            }
        };
        i += 1;
        out.push(Token { kind, offset: start });
    }

    out.push(Token { kind: TokenKind::Eof, offset: input.len() });

    Ok(out)
}

/// Length of the key at the start of `rest`, without trailing blanks. `None` when the
/// line holds no `=` or the text before it is not a plain key.
fn raw_key_len(rest: &str) -> Option<usize> {
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
    let eq = line.find('=')?;
    let key = line[..eq].trim_end();
    let plain = !key.is_empty() && !key.chars().any(|c| c.is_whitespace() || is_delimiter(c));
    plain.then_some(key.len())
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '"' | '[' | ']' | '{' | '}' | '(' | ')' | ',' | ';')
}

fn is_number_char(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

fn lex_number(input: &str, start: usize) -> Result<(TokenKind, usize), ParseError> {
    let bytes = input.as_bytes();
    let mut i = start;
    let mut is_float = false;

    if bytes[i] == b'-' {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        is_float = true;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let e_pos = i;
        is_float = true;
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if exp_start == i {
            return Err(ParseError::new(
                e_pos,
                "invalid number exponent (expected digits)",
            ));
        }
    }

    let s = &input[start..i];
    let kind = if is_float {
        TokenKind::Float(
            s.parse()
                .map_err(|_| ParseError::new(start, format!("invalid number '{s}'")))?,
        )
    } else {
        match s.parse::<i64>() {
            Ok(v) => TokenKind::Int(v),
            // Out-of-range integers still carry a usable value.
            Err(_) => TokenKind::Float(
                s.parse()
                    .map_err(|_| ParseError::new(start, format!("invalid number '{s}'")))?,
            ),
        }
    };
    Ok((kind, i))
}

/// Lex a double-quoted string starting at the quote at `quote`. Returns the unescaped
/// text and the offset just past the closing quote.
fn lex_string(input: &str, quote: usize) -> Result<(String, usize), ParseError> {
    let mut text = String::new();
    let mut chars = input[quote + 1..].char_indices();

    while let Some((rel, ch)) = chars.next() {
        match ch {
            '"' => return Ok((text, quote + 1 + rel + 1)),
            '\\' => {
                let Some((esc_rel, esc)) = chars.next() else {
                    break;
                };
                match esc {
                    'n' => text.push('\n'),
                    't' => text.push('\t'),
                    'r' => text.push('\r'),
                    '"' => text.push('"'),
                    '\\' => text.push('\\'),
                    'u' => {
                        let hex_start = quote + 1 + esc_rel + 1;
                        let hex = input.get(hex_start..hex_start + 4).ok_or_else(|| {
                            ParseError::new(hex_start, "truncated unicode escape")
                        })?;
                        let code = u32::from_str_radix(hex, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or_else(|| ParseError::new(hex_start, "invalid unicode escape"))?;
                        text.push(code);
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    other => {
                        text.push('\\');
                        text.push(other);
                    }
                }
            }
            other => text.push(other),
        }
    }

    Err(ParseError::new(quote, "unterminated string"))
}

#[cfg(test)]
#[path = "../../tests/unit/text/lexer.rs"]
mod tests;
