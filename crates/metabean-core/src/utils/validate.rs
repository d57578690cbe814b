// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property validators called from generated setters and builders.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    sync::Arc
};

use crate::error::BeanError;

/// Values that can be empty.
pub trait Empty {
    /// Check for emptiness; `None` counts as empty.
    fn is_empty_value(&self) -> bool;
}

macro_rules! empty_by_len {
    ($($ty:ty => [$($generics:tt)*]),*) => {
        $(
            impl<$($generics)*> Empty for $ty {
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

empty_by_len!(
    String => [],
    str => [],
    Vec<T> => [T],
    VecDeque<T> => [T],
    [T] => [T],
    HashMap<K, V> => [K, V],
    BTreeMap<K, V> => [K, V],
    HashSet<T> => [T],
    BTreeSet<T> => [T]
);

impl<T: Empty> Empty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Empty::is_empty_value)
    }
}

impl<T: Empty + ?Sized> Empty for Arc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Empty + ?Sized> Empty for Box<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Text that can be blank.
pub trait Blank {
    /// Check for empty or whitespace-only text; `None` counts as blank.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

/// Require an optional value to be present.
///
/// # Errors
///
/// Returns [`BeanError::Validation`] for `None`.
pub fn not_null<T>(value: &Option<T>, property: &str) -> Result<(), BeanError> {
    match value {
        Some(_) => Ok(()),
        None => Err(BeanError::validation(property, "must not be null"))
    }
}

/// Require a non-empty value.
///
/// # Errors
///
/// Returns [`BeanError::Validation`] for empty values.
pub fn not_empty<T: Empty + ?Sized>(value: &T, property: &str) -> Result<(), BeanError> {
    if value.is_empty_value() {
        return Err(BeanError::validation(property, "must not be empty"));
    }
    Ok(())
}

/// Require text with at least one non-whitespace character.
///
/// # Errors
///
/// Returns [`BeanError::Validation`] for blank text.
pub fn not_blank<T: Blank + ?Sized>(value: &T, property: &str) -> Result<(), BeanError> {
    if value.is_blank() {
        return Err(BeanError::validation(property, "must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_checks_presence() {
        assert!(not_null(&Some(1), "a").is_ok());
        let err = not_null::<i32>(&None, "a").unwrap_err();
        assert_eq!(err.to_string(), "invalid value for property 'a': must not be null");
    }

    #[test]
    fn not_empty_on_collections() {
        assert!(not_empty(&Vec::<i32>::new(), "list").is_err());
        assert!(not_empty(&vec![1], "list").is_ok());
        assert!(not_empty(&HashMap::<String, i32>::new(), "map").is_err());
        assert!(not_empty(&None::<String>, "name").is_err());
        assert!(not_empty(&Some("x".to_owned()), "name").is_ok());
        assert!(not_empty("", "name").is_err());
    }

    #[test]
    fn not_blank_on_text() {
        assert!(not_blank("  \t", "name").is_err());
        assert!(not_blank(&"Ada".to_owned(), "name").is_ok());
        assert!(not_blank(&None::<String>, "name").is_err());
    }
}
