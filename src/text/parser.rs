//! Parser for the engine's text resource format (`.tscn`, `.tres`, `project.godot`).
//!
//! A document is a list of sections. Each section starts with a heading
//! `[tag key=value ...]` followed by `key = value` properties; values may span lines.
//! Properties that appear before the first heading are collected into a section with an
//! empty tag.

use crate::graph::value::Variant;
use crate::text::error::ParseError;
use crate::text::lexer::{Token, TokenKind, lex};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Section {
    pub(crate) tag: String,
    pub(crate) attrs: Vec<(String, Variant)>,
    pub(crate) props: Vec<(String, Variant)>,
    /// Byte offset of the heading, for diagnostics.
    pub(crate) offset: usize,
}

impl Section {
    pub(crate) fn attr(&self, key: &str) -> Option<&Variant> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub(crate) fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Variant::as_str)
    }

    #[cfg(test)]
    pub(crate) fn prop(&self, key: &str) -> Option<&Variant> {
        self.props.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

pub(crate) fn parse_document(src: &str) -> Result<Vec<Section>, ParseError> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let mut sections = Vec::<Section>::new();

    loop {
        match &p.peek().kind {
            TokenKind::Eof => break,
            TokenKind::LBracket => {
                let section = p.parse_heading()?;
                sections.push(section);
            }
            TokenKind::Ident(_) => {
                let offset = p.offset();
                let (key, value) = p.parse_assignment()?;
                if sections.is_empty() {
                    sections.push(Section {
                        tag: String::new(),
                        attrs: Vec::new(),
                        props: Vec::new(),
                        offset,
                    });
                }
                if let Some(section) = sections.last_mut() {
                    section.props.push((key, value));
                }
            }
            other => {
                return Err(ParseError::new(
                    p.offset(),
                    format!("expected heading or property, found {other:?}"),
                ));
            }
        }
    }

    Ok(sections)
}

#[cfg(test)]
pub(crate) fn parse_value_str(src: &str) -> Result<Variant, ParseError> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let v = p.parse_value()?;
    p.expect(TokenKind::Eof)?;
    Ok(v)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_nth(&self, n: usize) -> &TokenKind {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn offset(&self) -> usize {
        self.peek().offset
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(ParseError::new(
                self.offset(),
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let offset = self.offset();
        match self.bump().kind {
            TokenKind::Ident(s) => Ok(s),
            other => Err(ParseError::new(
                offset,
                format!("expected identifier, found {other:?}"),
            )),
        }
    }

    fn parse_heading(&mut self) -> Result<Section, ParseError> {
        let offset = self.offset();
        self.expect(TokenKind::LBracket)?;
        let tag = self.expect_ident()?;

        let mut attrs = Vec::new();
        while !self.consume(TokenKind::RBracket) {
            attrs.push(self.parse_assignment()?);
        }

        Ok(Section {
            tag,
            attrs,
            props: Vec::new(),
            offset,
        })
    }

    fn parse_assignment(&mut self) -> Result<(String, Variant), ParseError> {
        let key = self.expect_ident()?;
        self.expect(TokenKind::Equals)?;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    fn parse_value(&mut self) -> Result<Variant, ParseError> {
        let offset = self.offset();
        match self.bump().kind {
            TokenKind::Int(v) => Ok(Variant::Int(v)),
            TokenKind::Float(v) => Ok(Variant::Float(v)),
            TokenKind::Str(s) => Ok(Variant::String(s)),
            TokenKind::StringName(s) => Ok(Variant::StringName(s)),
            TokenKind::NodePath(s) => Ok(Variant::NodePath(s)),
            TokenKind::LBracket => self.parse_array_tail(),
            TokenKind::LBrace => self.parse_dictionary_tail(),
            TokenKind::Ident(name) => self.parse_word(name),
            other => Err(ParseError::new(
                offset,
                format!("expected value, found {other:?}"),
            )),
        }
    }

    fn parse_array_tail(&mut self) -> Result<Variant, ParseError> {
        let mut items = Vec::new();
        loop {
            if self.consume(TokenKind::RBracket) {
                break;
            }
            items.push(self.parse_value()?);
            if !self.consume(TokenKind::Comma) {
                self.expect(TokenKind::RBracket)?;
                break;
            }
        }
        Ok(Variant::Array(items))
    }

    fn parse_dictionary_tail(&mut self) -> Result<Variant, ParseError> {
        let mut entries = Vec::new();
        loop {
            if self.consume(TokenKind::RBrace) {
                break;
            }
            let key = self.parse_value()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            entries.push((key, value));
            if !self.consume(TokenKind::Comma) {
                self.expect(TokenKind::RBrace)?;
                break;
            }
        }
        Ok(Variant::Dictionary(entries))
    }

    fn parse_word(&mut self, name: String) -> Result<Variant, ParseError> {
        match name.as_str() {
            "true" => return Ok(Variant::Bool(true)),
            "false" => return Ok(Variant::Bool(false)),
            "null" | "nil" => return Ok(Variant::Nil),
            "inf" => return Ok(Variant::Float(f64::INFINITY)),
            "inf_neg" => return Ok(Variant::Float(f64::NEG_INFINITY)),
            "nan" => return Ok(Variant::Float(f64::NAN)),
            _ => {}
        }

        // Typed containers: `Array[StringName]([...])`, `Dictionary[String, int]({...})`.
        if *self.peek_nth(0) == TokenKind::LBracket {
            self.skip_type_arguments()?;
            self.expect(TokenKind::LParen)?;
            let inner = self.parse_value()?;
            self.expect(TokenKind::RParen)?;
            return Ok(inner);
        }

        if !self.consume(TokenKind::LParen) {
            // Bare words only show up as class names inside `Object(...)`.
            return Ok(Variant::String(name));
        }

        let args = self.parse_call_args()?;
        let known = match (name.as_str(), args.as_slice()) {
            ("SubResource", [id]) => Some(Variant::SubResource(resource_id(id))),
            ("ExtResource", [id]) => Some(Variant::ExtResource(resource_id(id))),
            ("NodePath", [Variant::String(s)]) => Some(Variant::NodePath(s.clone())),
            ("StringName", [Variant::String(s)]) => Some(Variant::StringName(s.clone())),
            _ => None,
        };
        Ok(known.unwrap_or_else(|| Variant::Call { name, args }))
    }

    fn skip_type_arguments(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::LBracket)?;
        let mut depth = 1usize;
        while depth > 0 {
            let offset = self.offset();
            match self.bump().kind {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => depth -= 1,
                TokenKind::Eof => {
                    return Err(ParseError::new(offset, "unterminated type arguments"));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Arguments up to and including `)`. `"key": value` pairs (as written by
    /// `Object(...)`) are gathered into one trailing dictionary argument.
    fn parse_call_args(&mut self) -> Result<Vec<Variant>, ParseError> {
        let mut args = Vec::new();
        let mut pairs = Vec::new();
        loop {
            if self.consume(TokenKind::RParen) {
                break;
            }
            let value = self.parse_value()?;
            if self.consume(TokenKind::Colon) {
                let paired = self.parse_value()?;
                pairs.push((value, paired));
            } else {
                args.push(value);
            }
            if !self.consume(TokenKind::Comma) {
                self.expect(TokenKind::RParen)?;
                break;
            }
        }
        if !pairs.is_empty() {
            args.push(Variant::Dictionary(pairs));
        }
        Ok(args)
    }
}

/// Resource ids are strings in format 3 files and integers in older ones.
pub(crate) fn resource_id(v: &Variant) -> String {
    match v {
        Variant::Int(i) => i.to_string(),
        other => other.as_str().unwrap_or_default().to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parser.rs"]
mod tests;
