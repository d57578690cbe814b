// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builders that create beans from property values.
//!
//! - [`BasicBeanBuilder`] wraps a mutable bean and sets properties directly
//! - [`BufferingBeanBuilder`] collects values and hands them to a
//!   constructor function, used by light immutable beans
//! - generated immutable beans have their own typed builders implementing
//!   [`TypedBeanBuilder`]

use std::collections::HashMap;

use crate::{
    bean::Bean,
    error::BeanError,
    meta_property::MetaProperty,
    property_map::MetaPropertyMap,
    property_type::PropertyType,
    value::Value
};

/// Dynamic builder for one bean type.
pub trait BeanBuilder: Send {
    /// Value currently held for a property, `Null` if none.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NoSuchProperty`] for unknown names.
    fn get(&self, name: &str) -> Result<Value, BeanError>;

    /// Supply a property value.
    ///
    /// # Errors
    ///
    /// Fails for unknown or non-buildable properties and unconvertible
    /// values.
    fn set(&mut self, name: &str, value: Value) -> Result<(), BeanError>;

    /// Supply a property value by meta-property.
    ///
    /// # Errors
    ///
    /// Same as [`BeanBuilder::set`].
    fn set_meta(&mut self, meta: &dyn MetaProperty, value: Value) -> Result<(), BeanError> {
        self.set(meta.name(), value)
    }

    /// Create the bean.
    ///
    /// # Errors
    ///
    /// Fails when validation of the collected values fails.
    fn build(self: Box<Self>) -> Result<Box<dyn Bean>, BeanError>;
}

/// Builder that also yields the concrete bean type.
pub trait TypedBeanBuilder<B>: BeanBuilder + Sized {
    /// Create the bean.
    ///
    /// # Errors
    ///
    /// Fails when validation of the collected values fails.
    fn build_typed(self) -> Result<B, BeanError>;
}

/// Builder for mutable beans: sets each property on a working instance.
#[derive(Debug, Clone, Default)]
pub struct BasicBeanBuilder<B> {
    bean: B
}

impl<B: Bean> BasicBeanBuilder<B> {
    /// Build on top of `bean`.
    pub fn new(bean: B) -> Self {
        Self {
            bean
        }
    }

    /// Working instance.
    pub fn bean(&self) -> &B {
        &self.bean
    }
}

impl<B: Bean> BeanBuilder for BasicBeanBuilder<B> {
    fn get(&self, name: &str) -> Result<Value, BeanError> {
        let bean: &dyn Bean = &self.bean;
        bean.get(name)
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), BeanError> {
        let bean: &mut dyn Bean = &mut self.bean;
        bean.set(name, value)
    }

    fn build(self: Box<Self>) -> Result<Box<dyn Bean>, BeanError> {
        Ok(Box::new(self.bean))
    }
}

impl<B: Bean> TypedBeanBuilder<B> for BasicBeanBuilder<B> {
    fn build_typed(self) -> Result<B, BeanError> {
        Ok(self.bean)
    }
}

/// Values collected by a [`BufferingBeanBuilder`], keyed by property name.
#[derive(Debug, Clone, Default)]
pub struct BuilderArgs {
    values: HashMap<String, Value>
}

impl BuilderArgs {
    /// Store a value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Borrow a value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Remove and convert a value.
    ///
    /// A missing value is treated as `Null`, so optional properties default
    /// to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::Validation`] when a required value is missing
    /// and [`BeanError::TypeMismatch`] when it does not convert.
    pub fn take<P: PropertyType>(&mut self, name: &str) -> Result<P, BeanError> {
        match self.values.remove(name) {
            Some(value) => P::from_value(value),
            None => P::from_value(Value::Null)
                .map_err(|_| BeanError::validation(name, "no value supplied"))
        }
    }

    /// Remove and convert a value, using `P::default()` when missing.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::TypeMismatch`] when the value does not convert.
    pub fn take_or_default<P: PropertyType + Default>(&mut self, name: &str) -> Result<P, BeanError> {
        match self.values.remove(name) {
            Some(value) => P::from_value(value),
            None => Ok(P::default())
        }
    }
}

/// Constructor used by buffering builders.
pub type BeanConstructor = fn(BuilderArgs) -> Result<Box<dyn Bean>, BeanError>;

/// Builder that buffers values and calls a constructor on build.
pub struct BufferingBeanBuilder {
    map:         MetaPropertyMap,
    bean_name:   String,
    args:        BuilderArgs,
    constructor: BeanConstructor
}

impl BufferingBeanBuilder {
    /// Builder validating names against `map`.
    pub fn new(bean_name: impl Into<String>, map: MetaPropertyMap, constructor: BeanConstructor) -> Self {
        Self {
            map,
            bean_name: bean_name.into(),
            args: BuilderArgs::default(),
            constructor
        }
    }

    fn canonical(&self, name: &str) -> Result<&dyn MetaProperty, BeanError> {
        self.map
            .get(name)
            .map(|meta| meta.as_ref())
            .ok_or_else(|| BeanError::no_such_property(&self.bean_name, name))
    }
}

impl BeanBuilder for BufferingBeanBuilder {
    fn get(&self, name: &str) -> Result<Value, BeanError> {
        let meta = self.canonical(name)?;
        Ok(self.args.get(meta.name()).cloned().unwrap_or(Value::Null))
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), BeanError> {
        let meta = self.canonical(name)?;
        if !meta.style().is_buildable() {
            return Err(BeanError::ReadOnly(meta.name().to_owned()));
        }
        let key = meta.name().to_owned();
        self.args.insert(key, value);
        Ok(())
    }

    fn build(self: Box<Self>) -> Result<Box<dyn Bean>, BeanError> {
        tracing::trace!(bean = %self.bean_name, "building from buffered values");
        (self.constructor)(self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_missing_optional_is_none() {
        let mut args = BuilderArgs::default();
        assert_eq!(args.take::<Option<String>>("nick"), Ok(None));
    }

    #[test]
    fn take_missing_required_fails() {
        let mut args = BuilderArgs::default();
        let err = args.take::<String>("name").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn take_converts_and_removes() {
        let mut args = BuilderArgs::default();
        args.insert("age", Value::Int(30));
        assert_eq!(args.take::<u8>("age"), Ok(30));
        assert!(args.get("age").is_none());
        assert_eq!(args.take_or_default::<u8>("age"), Ok(0));
    }
}
