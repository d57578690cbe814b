// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ordered map of meta-properties with alias support.

use std::{collections::HashMap, sync::Arc};

use crate::{error::BeanError, meta_property::MetaProperty};

/// Meta-properties of a bean in declaration order.
///
/// Parent properties come first. Lookup accepts property names and aliases;
/// iteration yields each property once.
#[derive(Clone, Default)]
pub struct MetaPropertyMap {
    entries: Vec<Arc<dyn MetaProperty>>,
    index:   HashMap<String, usize>
}

impl MetaPropertyMap {
    /// Start building a map for `bean`.
    pub fn builder(bean: impl Into<String>) -> MetaPropertyMapBuilder {
        MetaPropertyMapBuilder {
            bean:    bean.into(),
            map:     Self::default(),
            aliases: Vec::new()
        }
    }

    /// Find by name or alias.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn MetaProperty>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Check if a name or alias is known.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MetaProperty>> {
        self.entries.iter()
    }

    /// Property names in declaration order, aliases excluded.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|meta| meta.name().to_owned())
            .collect()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetaPropertyMap {
    type Item = &'a Arc<dyn MetaProperty>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn MetaProperty>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builder for [`MetaPropertyMap`].
pub struct MetaPropertyMapBuilder {
    bean:    String,
    map:     MetaPropertyMap,
    aliases: Vec<(String, String)>
}

impl MetaPropertyMapBuilder {
    /// Append all properties of a parent map, keeping their aliases.
    pub fn parent(self, parent: &MetaPropertyMap) -> Self {
        self.inherit(parent, |meta| meta)
    }

    /// Append all properties of a parent map through `wrap`, keeping their
    /// aliases.
    ///
    /// Children use this to expose parent properties via
    /// [`InheritedMetaProperty`](crate::InheritedMetaProperty).
    pub fn inherit(
        mut self,
        parent: &MetaPropertyMap,
        wrap: impl Fn(Arc<dyn MetaProperty>) -> Arc<dyn MetaProperty>
    ) -> Self {
        let mut aliases: Vec<(String, String)> = parent
            .index
            .iter()
            .filter_map(|(key, &i)| {
                let name = parent.entries[i].name();
                (key != name).then(|| (key.clone(), name.to_owned()))
            })
            .collect();
        aliases.sort();
        self.aliases.extend(aliases);
        for meta in parent.iter() {
            self = self.property(wrap(meta.clone()));
        }
        self
    }

    /// Append a property.
    pub fn property(mut self, meta: Arc<dyn MetaProperty>) -> Self {
        self.map.entries.push(meta);
        self
    }

    /// Make `alias` resolve to `name`.
    pub fn alias(mut self, alias: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), name.into()));
        self
    }

    /// Finish the map.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::DuplicateProperty`] when names or aliases clash,
    /// and [`BeanError::NoSuchProperty`] when an alias targets an unknown
    /// property.
    pub fn build(self) -> Result<MetaPropertyMap, BeanError> {
        let Self {
            bean,
            mut map,
            aliases
        } = self;
        for (i, meta) in map.entries.iter().enumerate() {
            if map.index.insert(meta.name().to_owned(), i).is_some() {
                return Err(BeanError::DuplicateProperty {
                    bean,
                    property: meta.name().to_owned()
                });
            }
        }
        for (alias, name) in aliases {
            let Some(&target) = map.index.get(&name) else {
                return Err(BeanError::no_such_property(bean, name));
            };
            if map.index.insert(alias.clone(), target).is_some() {
                return Err(BeanError::DuplicateProperty {
                    bean,
                    property: alias
                });
            }
        }
        Ok(map)
    }
}
