// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic property values.
//!
//! [`Value`] is what crosses the reflective boundary: meta-property getters
//! return it and setters accept it. Typed code converts with
//! [`PropertyType`](crate::PropertyType).
//!
//! Equality is structural. Floats compare by bit pattern so that `Eq` and
//! `Hash` stay lawful. Sets and maps compare regardless of order. Beans
//! compare by type and property values.

use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc
};

use crate::{bean::Bean, error::BeanError, grid::as_value_grid, utils};

/// Dynamically typed property value.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value.
    Null,

    /// Boolean.
    Bool(bool),

    /// Character.
    Char(char),

    /// Signed integer of any width.
    Int(i64),

    /// Unsigned integer of any width.
    UInt(u64),

    /// Floating point number.
    Float(f64),

    /// Text.
    String(String),

    /// Ordered sequence.
    List(Vec<Value>),

    /// Unordered collection of distinct values.
    Set(Vec<Value>),

    /// Unordered key/value pairs.
    Map(Vec<(Value, Value)>),

    /// Explicitly optional value.
    Optional(Option<Box<Value>>),

    /// Nested bean.
    Bean(Box<dyn Bean>),

    /// Value of a type the model does not describe.
    Opaque(Arc<dyn Any + Send + Sync>)
}

impl Value {
    /// Wrap an arbitrary value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Wrap a bean.
    pub fn bean<B: Bean>(bean: B) -> Self {
        Self::Bean(Box::new(bean))
    }

    /// Present optional value.
    pub fn some(value: Value) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    /// Short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Char(_) => "Char",
            Self::Int(_) => "Int",
            Self::UInt(_) => "UInt",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Set(_) => "Set",
            Self::Map(_) => "Map",
            Self::Optional(_) => "Optional",
            Self::Bean(_) => "Bean",
            Self::Opaque(_) => "Opaque"
        }
    }

    /// Check for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the nested bean.
    pub fn as_bean(&self) -> Option<&dyn Bean> {
        match self {
            Self::Bean(bean) => Some(bean.as_ref()),
            _ => None
        }
    }

    /// Take the nested bean.
    pub fn into_bean(self) -> Option<Box<dyn Bean>> {
        match self {
            Self::Bean(bean) => Some(bean),
            _ => None
        }
    }

    /// Borrow the text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None
        }
    }

    /// Signed integer view.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(value) => Some(value),
            Self::UInt(value) => i64::try_from(value).ok(),
            _ => None
        }
    }

    /// Remove one level of [`Value::Optional`], mapping absence to `Null`.
    pub fn unwrap_optional(self) -> Value {
        match self {
            Self::Optional(Some(inner)) => *inner,
            Self::Optional(None) => Self::Null,
            other => other
        }
    }

    /// Convert a nested bean back to its concrete type.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::TypeMismatch`] when the value is not a bean of
    /// type `B`.
    pub fn into_typed_bean<B: Bean>(self) -> Result<B, BeanError> {
        let expected = std::any::type_name::<B>();
        match self {
            Self::Bean(bean) => {
                let found = bean.meta_bean().bean_type().name().to_owned();
                let any: Box<dyn Any> = bean;
                any.downcast::<B>()
                    .map(|typed| *typed)
                    .map_err(|_| BeanError::type_mismatch(expected, found))
            }
            other => Err(BeanError::type_mismatch(expected, other.kind_name()))
        }
    }

    /// Total order used by comparators.
    ///
    /// Values of different kinds order by kind; numbers compare across
    /// kinds; beans compare property by property.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Char(a), Self::Char(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::UInt(a), Self::UInt(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::UInt(b)) => i128::from(*a)
                .cmp(&i128::from(*b))
                .then(Ordering::Less),
            (Self::UInt(a), Self::Int(b)) => i128::from(*a)
                .cmp(&i128::from(*b))
                .then(Ordering::Greater),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => compare_seq(a, b),
            (Self::Set(a), Self::Set(b)) => compare_seq(&sorted(a), &sorted(b)),
            (Self::Map(a), Self::Map(b)) => {
                let (a, b) = (sorted_entries(a), sorted_entries(b));
                let keys = |entries: &[(Value, Value)]| -> Vec<Value> {
                    entries.iter().map(|(k, _)| k.clone()).collect()
                };
                let values = |entries: &[(Value, Value)]| -> Vec<Value> {
                    entries.iter().map(|(_, v)| v.clone()).collect()
                };
                compare_seq(&keys(&a), &keys(&b)).then_with(|| compare_seq(&values(&a), &values(&b)))
            }
            (Self::Optional(a), Self::Optional(b)) => match (a, b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.compare(b)
            },
            (Self::Bean(a), Self::Bean(b)) => {
                let values_a: Vec<Value> = utils::flatten(a.as_ref())
                    .into_iter()
                    .map(|(_, value)| value)
                    .collect();
                let values_b: Vec<Value> = utils::flatten(b.as_ref())
                    .into_iter()
                    .map(|(_, value)| value)
                    .collect();
                compare_seq(&values_a, &values_b).then_with(|| {
                    let (ta, tb) = (a.meta_bean(), b.meta_bean());
                    ta.bean_type().name().cmp(tb.bean_type().name())
                })
            }
            (Self::Opaque(a), Self::Opaque(b)) if !Arc::ptr_eq(a, b) => {
                Arc::as_ptr(a).cast::<()>().cmp(&Arc::as_ptr(b).cast::<()>())
            }
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x
                    .total_cmp(&y)
                    .then_with(|| a.number_rank().cmp(&b.number_rank())),
                _ => a.rank().cmp(&b.rank())
            }
        }
    }

    const fn number_rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::UInt(_) => 1,
            _ => 2
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(value) => Some(value as f64),
            Self::UInt(value) => Some(value as f64),
            Self::Float(value) => Some(value),
            _ => None
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Char(_) => 2,
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => 3,
            Self::String(_) => 4,
            Self::List(_) => 5,
            Self::Set(_) => 6,
            Self::Map(_) => 7,
            Self::Optional(_) => 8,
            Self::Bean(_) => 9,
            Self::Opaque(_) => 10
        }
    }
}

fn sorted(items: &[Value]) -> Vec<Value> {
    let mut items = items.to_vec();
    items.sort_by(Value::compare);
    items
}

fn sorted_entries(entries: &[(Value, Value)]) -> Vec<(Value, Value)> {
    let mut entries = entries.to_vec();
    entries.sort_by(|(ka, va), (kb, vb)| ka.compare(kb).then_with(|| va.compare(vb)));
    entries
}

fn compare_seq(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = x.compare(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn unordered_hash<'a, I: IntoIterator<Item = &'a Value>>(items: I) -> u64 {
    items.into_iter().fold(0u64, |acc, item| {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a.len() == b.len() && sorted(a) == sorted(b),
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len() && sorted_entries(a) == sorted_entries(b)
            }
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Bean(a), Self::Bean(b)) => {
                a.meta_bean().bean_type() == b.meta_bean().bean_type()
                    && utils::properties_equal(a.as_ref(), b.as_ref())
            }
            (Self::Opaque(a), Self::Opaque(b)) => {
                Arc::ptr_eq(a, b)
                    || matches!((as_value_grid(a), as_value_grid(b)), (Some(x), Some(y)) if x == y)
            }
            _ => false
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(value) => value.hash(state),
            Self::Char(value) => value.hash(state),
            Self::Int(value) => value.hash(state),
            Self::UInt(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::String(value) => value.hash(state),
            Self::List(items) => items.hash(state),
            Self::Set(items) => state.write_u64(unordered_hash(items)),
            Self::Map(entries) => {
                let combined = entries.iter().fold(0u64, |acc, (key, value)| {
                    let mut hasher = DefaultHasher::new();
                    key.hash(&mut hasher);
                    value.hash(&mut hasher);
                    acc.wrapping_add(hasher.finish())
                });
                state.write_u64(combined);
            }
            Self::Optional(inner) => inner.hash(state),
            Self::Bean(bean) => state.write_u64(utils::properties_hash_code(bean.as_ref())),
            Self::Opaque(value) => match as_value_grid(value) {
                Some(grid) => grid.hash(state),
                None => std::ptr::hash(Arc::as_ptr(value), state)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::List(items) => write_seq(f, "[", items, "]"),
            Self::Set(items) => write_seq(f, "{", items, "}"),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
            Self::Optional(Some(inner)) => write!(f, "Some({inner})"),
            Self::Optional(None) => f.write_str("None"),
            Self::Bean(bean) => f.write_str(&utils::to_string(bean.as_ref())),
            Self::Opaque(value) => match as_value_grid(value) {
                Some(grid) => {
                    write!(f, "Grid[{}x{}]{{", grid.rows(), grid.columns())?;
                    for (i, (row, column, cell)) in grid.cells().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "({row}, {column})={cell}")?;
                    }
                    f.write_str("}")
                }
                None => f.write_str("<opaque>")
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

macro_rules! value_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

value_from!(Bool: bool);
value_from!(Char: char);
value_from!(Int: i8, i16, i32, i64);
value_from!(UInt: u8, u16, u32, u64);
value_from!(Float: f32, f64);
value_from!(String: String, &str);

impl From<Box<dyn Bean>> for Value {
    fn from(bean: Box<dyn Bean>) -> Self {
        Self::Bean(bean)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Optional(value.map(|inner| Box::new(inner.into())))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
    }

    #[test]
    fn sets_ignore_order() {
        let a = Value::Set(vec![Value::from(1), Value::from(2)]);
        let b = Value::Set(vec![Value::from(2), Value::from(1)]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn lists_respect_order() {
        let a = Value::List(vec![Value::from(1), Value::from(2)]);
        let b = Value::List(vec![Value::from(2), Value::from(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn maps_ignore_order() {
        let a = Value::Map(vec![("a".into(), 1.into()), ("b".into(), 2.into())]);
        let b = Value::Map(vec![("b".into(), 2.into()), ("a".into(), 1.into())]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        let set: HashSet<Value> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn opaque_compares_by_identity() {
        let shared = Value::opaque(5u8);
        assert_eq!(shared, shared.clone());
        assert_ne!(Value::opaque(5u8), Value::opaque(5u8));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("x").to_string(), "x");
        let list = Value::List(vec![1.into(), 2.into()]);
        assert_eq!(list.to_string(), "[1, 2]");
        let map = Value::Map(vec![("k".into(), true.into())]);
        assert_eq!(map.to_string(), "{k=true}");
        assert_eq!(Value::from(Some(3)).to_string(), "Some(3)");
        assert_eq!(Value::from(None::<i32>).to_string(), "None");
    }

    #[test]
    fn compare_numbers_across_kinds() {
        assert_eq!(Value::Int(-1).compare(&Value::UInt(1)), Ordering::Less);
        assert_eq!(Value::Int(2).compare(&Value::Float(1.5)), Ordering::Greater);
        assert_eq!(Value::Null.compare(&Value::from("a")), Ordering::Less);
        assert_eq!(Value::from("a").compare(&Value::from("b")), Ordering::Less);
    }

    #[test]
    fn unwrap_optional_once() {
        assert_eq!(Value::some(1.into()).unwrap_optional(), Value::Int(1));
        assert_eq!(Value::Optional(None).unwrap_optional(), Value::Null);
        assert_eq!(Value::Int(4).unwrap_optional(), Value::Int(4));
    }

    #[test]
    fn into_typed_bean_rejects_other_kinds() {
        let err = Value::Int(1).into_typed_bean::<crate::FlexiBean>().unwrap_err();
        assert!(matches!(err, BeanError::TypeMismatch { .. }));
    }
}
