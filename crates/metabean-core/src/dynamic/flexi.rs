// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insertion-ordered dynamic bean.

use std::{collections::HashMap, fmt, sync::Arc};

use super::{DynamicBean, DynamicMetaBean, DynamicStore};
use crate::{
    bean::Bean,
    meta_bean::MetaBean,
    property_type::PropertyType,
    types::{GenericType, ResolvedType},
    utils,
    value::Value
};

/// Bean holding arbitrary named values in insertion order.
///
/// # Examples
///
/// ```rust
/// use metabean_core::{Bean, FlexiBean, Value};
///
/// let mut bean = FlexiBean::new().with("name", "Ada").with("age", 36);
/// bean.put("age", 37);
///
/// let dynamic: &dyn Bean = &bean;
/// assert_eq!(dynamic.property_names(), vec!["name", "age"]);
/// assert_eq!(dynamic.get("age").unwrap(), Value::from(37));
/// ```
#[derive(Clone, Default)]
pub struct FlexiBean {
    data:  Vec<(String, Value)>,
    types: HashMap<String, ResolvedType>
}

impl FlexiBean {
    /// Empty bean.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FlexiBean::put`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(name, value);
        self
    }

    /// Value of a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    /// Value of a property converted to `P`; `None` when missing or not
    /// convertible.
    pub fn get_as<P: PropertyType>(&self, name: &str) -> Option<P> {
        self.get(name).and_then(|value| P::from_value(value.clone()).ok())
    }

    /// Set a property, returning the previous value. New properties are
    /// appended.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some(index) = self.data.iter().position(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut self.data[index].1, value));
        }
        self.data.push((name, value));
        None
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.types.remove(name);
        let index = self.data.iter().position(|(key, _)| key == name)?;
        Some(self.data.remove(index).1)
    }

    /// Check if a property exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the bean has no properties.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove all properties.
    pub fn clear(&mut self) {
        self.data.clear();
        self.types.clear();
    }

    /// Iterate over names and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl PartialEq for FlexiBean {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for FlexiBean {}

impl fmt::Debug for FlexiBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for FlexiBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&utils::to_string(self))
    }
}

impl Bean for FlexiBean {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        DynamicMetaBean::snapshot(self)
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

impl DynamicBean for FlexiBean {
    fn define_property(&mut self, name: &str, property_type: ResolvedType) {
        if !self.contains(name) {
            self.data.push((name.to_owned(), Value::Null));
        }
        self.types.insert(name.to_owned(), property_type);
    }

    fn remove_property(&mut self, name: &str) {
        self.remove(name);
    }
}

impl DynamicStore for FlexiBean {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn store(&mut self, name: &str, value: Value) {
        self.put(name, value);
    }

    fn declared(&self) -> Vec<(String, GenericType)> {
        self.data
            .iter()
            .map(|(name, _)| {
                let ty = self
                    .types
                    .get(name)
                    .cloned()
                    .unwrap_or_else(ResolvedType::object);
                (name.clone(), ty.to_generic_type())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BeanError, MetaProperty};

    #[test]
    fn put_keeps_insertion_order() {
        let mut bean = FlexiBean::new();
        bean.put("b", 1);
        bean.put("a", 2);
        assert_eq!(bean.put("b", 3), Some(Value::Int(1)));
        let names: Vec<&str> = bean.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn meta_bean_reflects_contents() {
        let bean = FlexiBean::new().with("x", true);
        let meta = bean.meta_bean();
        assert_eq!(meta.meta_property_count(), 1);
        assert!(meta.meta_property_exists("x"));
        assert!(meta.meta_property("y").unwrap_err().is_no_such_property());
    }

    #[test]
    fn dynamic_get_and_set() {
        let mut bean = FlexiBean::new().with("name", "Ada");
        let dynamic: &mut dyn Bean = &mut bean;
        dynamic.set("name", "Grace").unwrap();
        assert_eq!(dynamic.get("name").unwrap(), Value::from("Grace"));
        assert_eq!(bean.get_as::<String>("name"), Some("Grace".to_owned()));
    }

    #[test]
    fn define_keeps_value_and_records_type() {
        let mut bean = FlexiBean::new().with("age", 3);
        bean.define_property("age", ResolvedType::parse("i32").unwrap());
        bean.define_property("nick", ResolvedType::string());
        assert_eq!(bean.get("age"), Some(&Value::Int(3)));
        assert_eq!(bean.get("nick"), Some(&Value::Null));
        let meta = bean.meta_bean();
        let nick = meta.meta_property("nick").unwrap();
        assert_eq!(nick.property_generic_type().to_string(), "String");
        bean.remove_property("nick");
        assert!(!bean.contains("nick"));
    }

    #[test]
    fn undeclared_property_has_top_type() {
        let bean = FlexiBean::new().with("loose", 1);
        let meta = bean.meta_bean();
        let loose = meta.meta_property("loose").unwrap();
        assert_eq!(
            loose.property_generic_type().to_string(),
            ResolvedType::object().to_string()
        );
    }

    #[test]
    fn equality_ignores_order() {
        let a = FlexiBean::new().with("a", 1).with("b", 2);
        let b = FlexiBean::new().with("b", 2).with("a", 1);
        assert_eq!(a, b);
        assert_eq!(Value::bean(a), Value::bean(b));
    }

    #[test]
    fn meta_property_rejects_other_bean_types() {
        let flexi = FlexiBean::new().with("a", 1);
        let meta = flexi.meta_bean().meta_property("a").unwrap();
        let other = crate::MapBean::new();
        let err = meta.get(&other).unwrap_err();
        assert!(matches!(err, BeanError::WrongBeanType { .. }));
    }

    #[test]
    fn display_uses_bean_format() {
        let bean = FlexiBean::new().with("a", 1).with("b", "x");
        assert_eq!(bean.to_string(), "FlexiBean{a=1, b=x}");
    }
}
