// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dotted property paths such as `address.lines[0]` or `scores[maths]`.
//!
//! # Syntax
//!
//! ```text
//! path    := segment ('.' segment)*
//! segment := name ('[' key ']')?
//! ```
//!
//! A key on a list or set selects by index; on a map it selects the value
//! whose key formats to the same text. A map segment without a key yields
//! the map's values as a list.
//!
//! Extraction never fails loudly: any missing property, unreadable value,
//! absent key or wrong shape gives `None`.

use std::{fmt, marker::PhantomData};

use crate::{bean::Bean, error::BeanError, property_type::PropertyType, value::Value};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    name: String,
    key:  Option<String>
}

/// Parsed path yielding values of type `P`.
pub struct PropertyPath<P> {
    text:     String,
    segments: Vec<Segment>,
    _result:  PhantomData<fn() -> P>
}

impl<P: PropertyType> PropertyPath<P> {
    /// Parse a path.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::InvalidPath`] for empty segments, unbalanced
    /// brackets or empty keys.
    pub fn of(path: &str) -> Result<Self, BeanError> {
        let invalid = |message: &str| BeanError::InvalidPath {
            path:    path.to_owned(),
            message: message.to_owned()
        };
        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        let mut segments = Vec::new();
        for raw in path.split('.') {
            let (name, key) = match raw.find('[') {
                Some(open) => {
                    let Some(inner) = raw[open + 1..].strip_suffix(']') else {
                        return Err(invalid("expected ']' at end of segment"));
                    };
                    if inner.is_empty() || inner.contains(['[', ']']) {
                        return Err(invalid("invalid key"));
                    }
                    (&raw[..open], Some(inner.to_owned()))
                }
                None if raw.contains(']') => return Err(invalid("unexpected ']'")),
                None => (raw, None)
            };
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(invalid("invalid property name"));
            }
            segments.push(Segment {
                name: name.to_owned(),
                key
            });
        }
        Ok(Self {
            text: path.to_owned(),
            segments,
            _result: PhantomData
        })
    }

    /// Path text.
    pub fn path(&self) -> &str {
        &self.text
    }

    /// Extract the value from `bean`.
    pub fn get(&self, bean: &dyn Bean) -> Option<P> {
        let (last, init) = self.segments.split_last()?;
        let mut owned: Option<Box<dyn Bean>> = None;
        for segment in init {
            let current: &dyn Bean = owned.as_deref().unwrap_or(bean);
            let value = extract(current, segment)?.unwrap_optional();
            owned = Some(value.into_bean()?);
        }
        let current: &dyn Bean = owned.as_deref().unwrap_or(bean);
        let value = extract(current, last)?;
        match P::from_value(value.clone()) {
            Ok(typed) => Some(typed),
            Err(_) => match value {
                Value::Optional(Some(inner)) => P::from_value(*inner).ok(),
                _ => None
            }
        }
    }
}

fn extract(bean: &dyn Bean, segment: &Segment) -> Option<Value> {
    let meta = bean.meta_bean().meta_property(&segment.name).ok()?;
    if !meta.style().is_readable() {
        return None;
    }
    let value = meta.get(bean).ok()?;
    let Some(key) = &segment.key else {
        return Some(match value.unwrap_optional() {
            Value::Map(entries) => Value::List(entries.into_iter().map(|(_, v)| v).collect()),
            Value::Null => return None,
            other => other
        });
    };
    match value.unwrap_optional() {
        Value::List(items) | Value::Set(items) => {
            let index: usize = key.parse().ok()?;
            items.into_iter().nth(index)
        }
        Value::Map(entries) => entries
            .into_iter()
            .find(|(k, _)| k.to_string() == *key)
            .map(|(_, v)| v),
        _ => None
    }
}

impl<P> Clone for PropertyPath<P> {
    fn clone(&self) -> Self {
        Self {
            text:     self.text.clone(),
            segments: self.segments.clone(),
            _result:  PhantomData
        }
    }
}

impl<P> fmt::Debug for PropertyPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyPath({})", self.text)
    }
}

impl<P> fmt::Display for PropertyPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
