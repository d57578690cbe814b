// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic bean backed by a sorted map.

use std::{collections::BTreeMap, fmt, sync::Arc};

use super::{DynamicBean, DynamicMetaBean, DynamicStore};
use crate::{
    bean::Bean,
    meta_bean::MetaBean,
    types::{GenericType, ResolvedType},
    utils,
    value::Value
};

/// Bean whose properties are the entries of a map, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapBean {
    entries: BTreeMap<String, Value>
}

impl MapBean {
    /// Empty bean.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Set a property, returning the previous value.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bean has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for MapBean {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect()
        }
    }
}

impl fmt::Display for MapBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&utils::to_string(self))
    }
}

impl Bean for MapBean {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        DynamicMetaBean::snapshot(self)
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

impl DynamicBean for MapBean {
    fn define_property(&mut self, name: &str, _property_type: ResolvedType) {
        self.entries.entry(name.to_owned()).or_insert(Value::Null);
    }

    fn remove_property(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

impl DynamicStore for MapBean {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    fn store(&mut self, name: &str, value: Value) {
        self.entries.insert(name.to_owned(), value);
    }

    fn declared(&self) -> Vec<(String, GenericType)> {
        self.entries
            .keys()
            .map(|name| (name.clone(), ResolvedType::object().to_generic_type()))
            .collect()
    }
}
