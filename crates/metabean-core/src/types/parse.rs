// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Recursive-descent parser for type text.

use std::{iter::Peekable, str::CharIndices};

use super::{ResolvedType, lookup};
use crate::error::BeanError;

pub(super) fn parse(text: &str) -> Result<ResolvedType, BeanError> {
    let mut parser = Parser {
        text,
        chars: text.char_indices().peekable()
    };
    let ty = parser.parse_type()?;
    parser.skip_ws();
    match parser.chars.peek().copied() {
        None => Ok(ty),
        Some((pos, c)) => Err(parser.error(format!("unexpected '{c}' at {pos}")))
    }
}

struct Parser<'a> {
    text:  &'a str,
    chars: Peekable<CharIndices<'a>>
}

impl Parser<'_> {
    fn parse_type(&mut self) -> Result<ResolvedType, BeanError> {
        self.skip_ws();
        let name = self.parse_name()?;
        let raw = lookup(&name).ok_or_else(|| self.error(format!("unknown type '{name}'")))?;

        let mut args = Vec::new();
        self.skip_ws();
        if self.eat('<') {
            loop {
                args.push(self.parse_type()?);
                self.skip_ws();
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }

        let mut ty = ResolvedType::of(raw, args)?;
        self.skip_ws();
        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            ty = ty.to_array_type();
            self.skip_ws();
        }
        Ok(ty)
    }

    fn parse_name(&mut self) -> Result<String, BeanError> {
        let mut name = String::new();
        loop {
            let ident = self.parse_ident()?;
            name.push_str(&ident);
            if self.eat_str("::") {
                name.push_str("::");
            } else {
                return Ok(name);
            }
        }
    }

    fn parse_ident(&mut self) -> Result<String, BeanError> {
        let mut ident = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            let valid = if ident.is_empty() {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '_'
            };
            if !valid {
                break;
            }
            ident.push(c);
            self.chars.next();
        }
        if ident.is_empty() {
            return Err(self.error("expected type name"));
        }
        Ok(ident)
    }

    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.chars.peek(), Some(&(_, c)) if c == expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        let Some(&(pos, _)) = self.chars.peek() else {
            return false;
        };
        if !self.text[pos..].starts_with(expected) {
            return false;
        }
        for _ in expected.chars() {
            self.chars.next();
        }
        true
    }

    fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn error(&self, message: impl Into<String>) -> BeanError {
        BeanError::InvalidType {
            input:   self.text.to_owned(),
            message: message.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TypeInfo, builtin, intern};

    #[test]
    fn parses_primitive() {
        let ty = parse("i32").unwrap();
        assert!(ty.is_primitive());
        assert_eq!(ty.raw_type(), &builtin("i32"));
    }

    #[test]
    fn parses_nested_generics() {
        let ty = parse("HashMap<String, Vec<Option<i64>>>").unwrap();
        assert_eq!(ty.to_string(), "HashMap<String, Vec<Option<i64>>>");
        assert_eq!(ty.arguments().len(), 2);
    }

    #[test]
    fn parses_arrays() {
        let ty = parse("Vec<String>[][]").unwrap();
        assert_eq!(ty.to_string(), "Vec<String>[][]");
        let component = ty.to_component_type().unwrap();
        assert_eq!(component.to_string(), "Vec<String>[]");
    }

    #[test]
    fn tolerates_whitespace() {
        let ty = parse(" HashMap < String ,i32 > ").unwrap();
        assert_eq!(ty.to_string(), "HashMap<String, i32>");
    }

    #[test]
    fn parses_registered_path() {
        intern(TypeInfo::class("parse_test::model::Person"));
        let ty = parse("Vec<parse_test::model::Person>").unwrap();
        assert_eq!(ty.to_string(), "Vec<parse_test::model::Person>");
    }

    #[test]
    fn rejects_unknown_name() {
        let err = parse("Nope").unwrap_err();
        assert!(matches!(err, BeanError::InvalidType { .. }));
    }

    #[test]
    fn rejects_bad_arity() {
        let err = parse("HashMap<String>").unwrap_err();
        assert!(matches!(err, BeanError::ArityMismatch { found: 1, .. }));
    }

    #[test]
    fn rejects_trailing_text() {
        assert!(parse("String>").is_err());
        assert!(parse("Vec<String").is_err());
        assert!(parse("Vec<String>[").is_err());
        assert!(parse("").is_err());
    }
}
