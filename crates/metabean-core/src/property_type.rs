// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversion between typed property values and [`Value`].
//!
//! Every property type implements [`PropertyType`]. The trait also supplies
//! the runtime type description and the equality/hash rules generated beans
//! use in their `PartialEq` and `Hash` implementations.
//!
//! | Rust type                       | Value variant |
//! |---------------------------------|---------------|
//! | `i8`..`i64`, `isize`            | `Int`         |
//! | `u8`..`u64`, `usize`            | `UInt`        |
//! | `f32`, `f64`                    | `Float`       |
//! | `String`                        | `String`      |
//! | `Vec<T>`, `VecDeque<T>`         | `List`        |
//! | `HashSet<T>`, `BTreeSet<T>`     | `Set`         |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `Map`       |
//! | `Option<T>`                     | `Optional`    |
//! | `Box<T>`, `Arc<T>`              | same as `T`   |
//! | generated beans                 | `Bean`        |

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc
};

use crate::{
    error::BeanError,
    types::{GenericType, ResolvedType, TypeInfo, builtin},
    value::Value
};

/// A type that can be the type of a property.
pub trait PropertyType: Clone + Send + Sync + 'static {
    /// Raw runtime type.
    fn type_info() -> Arc<TypeInfo>;

    /// Fully resolved runtime type.
    fn resolved_type() -> ResolvedType {
        ResolvedType::of_raw(Self::type_info())
    }

    /// Declared type as seen by meta-properties.
    fn generic_type() -> GenericType {
        Self::resolved_type().to_generic_type()
    }

    /// Convert to a dynamic value.
    fn to_value(&self) -> Value;

    /// Convert from a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::TypeMismatch`] when the value has the wrong
    /// shape or does not fit.
    fn from_value(value: Value) -> Result<Self, BeanError>;

    /// Equality used by generated beans.
    fn equal(&self, other: &Self) -> bool {
        self.to_value() == other.to_value()
    }

    /// Hash used by generated beans.
    fn hash_code<H: Hasher>(&self, state: &mut H) {
        self.to_value().hash(state);
    }
}

fn mismatch(expected: &str, found: &Value) -> BeanError {
    BeanError::type_mismatch(expected, found.kind_name())
}

fn separate_hash<T: PropertyType>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash_code(&mut hasher);
    hasher.finish()
}

macro_rules! signed_property_type {
    ($($ty:ty),*) => {
        $(
            impl PropertyType for $ty {
                fn type_info() -> Arc<TypeInfo> {
                    builtin(stringify!($ty))
                }

                fn to_value(&self) -> Value {
                    Value::Int(*self as i64)
                }

                fn from_value(value: Value) -> Result<Self, BeanError> {
                    let converted = match value {
                        Value::Int(v) => <$ty>::try_from(v).ok(),
                        Value::UInt(v) => <$ty>::try_from(v).ok(),
                        ref other => return Err(mismatch(stringify!($ty), other))
                    };
                    converted.ok_or_else(|| BeanError::type_mismatch(stringify!($ty), "out of range integer"))
                }

                fn equal(&self, other: &Self) -> bool {
                    self == other
                }

                fn hash_code<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

macro_rules! unsigned_property_type {
    ($($ty:ty),*) => {
        $(
            impl PropertyType for $ty {
                fn type_info() -> Arc<TypeInfo> {
                    builtin(stringify!($ty))
                }

                fn to_value(&self) -> Value {
                    Value::UInt(*self as u64)
                }

                fn from_value(value: Value) -> Result<Self, BeanError> {
                    let converted = match value {
                        Value::Int(v) => <$ty>::try_from(v).ok(),
                        Value::UInt(v) => <$ty>::try_from(v).ok(),
                        ref other => return Err(mismatch(stringify!($ty), other))
                    };
                    converted.ok_or_else(|| BeanError::type_mismatch(stringify!($ty), "out of range integer"))
                }

                fn equal(&self, other: &Self) -> bool {
                    self == other
                }

                fn hash_code<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

signed_property_type!(i8, i16, i32, i64, isize);
unsigned_property_type!(u8, u16, u32, u64, usize);

macro_rules! float_property_type {
    ($($ty:ty),*) => {
        $(
            impl PropertyType for $ty {
                fn type_info() -> Arc<TypeInfo> {
                    builtin(stringify!($ty))
                }

                fn to_value(&self) -> Value {
                    Value::Float(f64::from(*self))
                }

                fn from_value(value: Value) -> Result<Self, BeanError> {
                    match value {
                        Value::Float(v) => Ok(v as $ty),
                        Value::Int(v) => Ok(v as $ty),
                        Value::UInt(v) => Ok(v as $ty),
                        other => Err(mismatch(stringify!($ty), &other))
                    }
                }

                fn equal(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                fn hash_code<H: Hasher>(&self, state: &mut H) {
                    self.to_bits().hash(state);
                }
            }
        )*
    };
}

float_property_type!(f32, f64);

impl PropertyType for bool {
    fn type_info() -> Arc<TypeInfo> {
        builtin("bool")
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(mismatch("bool", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl PropertyType for char {
    fn type_info() -> Arc<TypeInfo> {
        builtin("char")
    }

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Char(v) => Ok(v),
            other => Err(mismatch("char", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl PropertyType for String {
    fn type_info() -> Arc<TypeInfo> {
        builtin("String")
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(mismatch("String", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl PropertyType for Value {
    fn type_info() -> Arc<TypeInfo> {
        builtin("Value")
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        Ok(value)
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: PropertyType> PropertyType for Option<T> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("Option")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(Self::type_info(), vec![T::resolved_type()])
    }

    fn to_value(&self) -> Value {
        Value::Optional(self.as_ref().map(|inner| Box::new(inner.to_value())))
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Null | Value::Optional(None) => Ok(None),
            Value::Optional(Some(inner)) => T::from_value(*inner).map(Some),
            other => T::from_value(other).map(Some)
        }
    }

    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equal(b),
            _ => false
        }
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        match self {
            None => state.write_u8(0),
            Some(inner) => {
                state.write_u8(1);
                inner.hash_code(state);
            }
        }
    }
}

macro_rules! transparent_property_type {
    ($($wrapper:ident),*) => {
        $(
            impl<T: PropertyType> PropertyType for $wrapper<T> {
                fn type_info() -> Arc<TypeInfo> {
                    builtin(stringify!($wrapper))
                }

                fn resolved_type() -> ResolvedType {
                    ResolvedType::parameterized(Self::type_info(), vec![T::resolved_type()])
                }

                fn to_value(&self) -> Value {
                    (**self).to_value()
                }

                fn from_value(value: Value) -> Result<Self, BeanError> {
                    T::from_value(value).map($wrapper::new)
                }

                fn equal(&self, other: &Self) -> bool {
                    (**self).equal(&**other)
                }

                fn hash_code<H: Hasher>(&self, state: &mut H) {
                    (**self).hash_code(state);
                }
            }
        )*
    };
}

transparent_property_type!(Box, Arc);

macro_rules! sequence_property_type {
    ($($seq:ident),*) => {
        $(
            impl<T: PropertyType> PropertyType for $seq<T> {
                fn type_info() -> Arc<TypeInfo> {
                    builtin(stringify!($seq))
                }

                fn resolved_type() -> ResolvedType {
                    ResolvedType::parameterized(Self::type_info(), vec![T::resolved_type()])
                }

                fn to_value(&self) -> Value {
                    Value::List(self.iter().map(PropertyType::to_value).collect())
                }

                fn from_value(value: Value) -> Result<Self, BeanError> {
                    match value {
                        Value::List(items) | Value::Set(items) => {
                            items.into_iter().map(T::from_value).collect()
                        }
                        other => Err(mismatch(stringify!($seq), &other))
                    }
                }

                fn equal(&self, other: &Self) -> bool {
                    self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equal(b))
                }

                fn hash_code<H: Hasher>(&self, state: &mut H) {
                    state.write_usize(self.len());
                    for item in self {
                        item.hash_code(state);
                    }
                }
            }
        )*
    };
}

sequence_property_type!(Vec, VecDeque);

impl<T: PropertyType + Eq + Hash> PropertyType for HashSet<T> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("HashSet")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(Self::type_info(), vec![T::resolved_type()])
    }

    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(PropertyType::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Set(items) | Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("HashSet", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .iter()
            .fold(0u64, |acc, item| acc.wrapping_add(separate_hash(item)));
        state.write_u64(combined);
    }
}

impl<T: PropertyType + Ord> PropertyType for BTreeSet<T> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("BTreeSet")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(Self::type_info(), vec![T::resolved_type()])
    }

    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(PropertyType::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Set(items) | Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("BTreeSet", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash_code(state);
        }
    }
}

impl<K: PropertyType + Eq + Hash, V: PropertyType> PropertyType for HashMap<K, V> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("HashMap")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(
            Self::type_info(),
            vec![K::resolved_type(), V::resolved_type()]
        )
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect()
        )
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| -> Result<(K, V), BeanError> {
                    Ok((K::from_value(k)?, V::from_value(v)?))
                })
                .collect(),
            other => Err(mismatch("HashMap", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|found| v.equal(found)))
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter().fold(0u64, |acc, (k, v)| {
            acc.wrapping_add(separate_hash(k) ^ separate_hash(v).rotate_left(1))
        });
        state.write_u64(combined);
    }
}

impl<K: PropertyType + Ord, V: PropertyType> PropertyType for BTreeMap<K, V> {
    fn type_info() -> Arc<TypeInfo> {
        builtin("BTreeMap")
    }

    fn resolved_type() -> ResolvedType {
        ResolvedType::parameterized(
            Self::type_info(),
            vec![K::resolved_type(), V::resolved_type()]
        )
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect()
        )
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| -> Result<(K, V), BeanError> {
                    Ok((K::from_value(k)?, V::from_value(v)?))
                })
                .collect(),
            other => Err(mismatch("BTreeMap", &other))
        }
    }

    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((k1, v1), (k2, v2))| k1.equal(k2) && v1.equal(v2))
    }

    fn hash_code<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (k, v) in self {
            k.hash_code(state);
            v.hash_code(state);
        }
    }
}
