// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Algorithms that work on any bean through its meta-bean.
//!
//! # Architecture
//!
//! ```text
//! utils/
//! ├── mod.rs        - Equality, hashing, formatting, flattening, comparators
//! ├── clone.rs      - Deep cloning with selectable cloner tiers
//! ├── validate.rs   - not_null / not_empty / not_blank
//! └── to_string.rs  - ToStringBuilder for generated Display impls
//! ```

mod clone;
mod to_string;
mod validate;

use std::{
    cmp::Ordering,
    collections::HashSet,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc
};

pub use clone::{
    ClonerTier, CollectionCloner, Cloner, CustomTypeCloner, GridCloner, clone, clone_always,
    clone_always_dyn, cloner, install_cloner, register_copier
};
pub use to_string::ToStringBuilder;
pub use validate::{Blank, Empty, not_blank, not_empty, not_null};

use crate::{
    bean::Bean,
    error::BeanError,
    meta_property::MetaProperty,
    types::{ResolvedType, TypeInfo},
    value::Value
};

/// Structural equality of two values.
pub fn equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// Structural hash of a value.
pub fn hash_code(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Compare two beans property by property.
///
/// The beans are equal when they declare the same property names, each
/// property is readable on both sides or on neither, and every readable
/// property holds equal values. The bean types are not compared.
pub fn properties_equal(a: &dyn Bean, b: &dyn Bean) -> bool {
    let meta_a = a.meta_bean();
    let meta_b = b.meta_bean();
    let map_a = meta_a.meta_property_map();
    let map_b = meta_b.meta_property_map();
    if map_a.len() != map_b.len() {
        return false;
    }
    for prop_a in map_a.iter() {
        let Some(prop_b) = map_b.get(prop_a.name()) else {
            return false;
        };
        if prop_b.name() != prop_a.name() {
            return false;
        }
        let readable = prop_a.style().is_readable();
        if readable != prop_b.style().is_readable() {
            return false;
        }
        if !readable {
            continue;
        }
        match (prop_a.get(a), prop_b.get(b)) {
            (Ok(x), Ok(y)) if x == y => {}
            _ => return false
        }
    }
    true
}

/// Hash consistent with [`properties_equal`].
///
/// Independent of property order.
pub fn properties_hash_code(bean: &dyn Bean) -> u64 {
    let meta = bean.meta_bean();
    meta.meta_property_map()
        .iter()
        .fold(7u64, |acc, prop| {
            let mut hasher = DefaultHasher::new();
            prop.name().hash(&mut hasher);
            prop.style().is_readable().hash(&mut hasher);
            if prop.style().is_readable()
                && let Ok(value) = prop.get(bean)
            {
                value.hash(&mut hasher);
            }
            acc.wrapping_add(hasher.finish())
        })
}

/// Standard text form: `Name{a=1, b=x}`.
///
/// Readable properties in declaration order, simple type name.
pub fn to_string(bean: &dyn Bean) -> String {
    let meta = bean.meta_bean();
    let mut out = String::new();
    out.push_str(meta.bean_type().simple_name());
    out.push('{');
    let mut first = true;
    for prop in meta.meta_property_map().iter() {
        if !prop.style().is_readable() {
            continue;
        }
        if !first {
            out.push_str(", ");
        }
        first = false;
        out.push_str(prop.name());
        out.push('=');
        match prop.get(bean) {
            Ok(value) => out.push_str(&value.to_string()),
            Err(_) => out.push('?')
        }
    }
    out.push('}');
    out
}

/// Readable property values by name, in declaration order.
pub fn flatten(bean: &dyn Bean) -> Vec<(String, Value)> {
    let meta = bean.meta_bean();
    meta.meta_property_map()
        .iter()
        .filter(|prop| prop.style().is_readable())
        .filter_map(|prop| {
            prop.get(bean)
                .ok()
                .map(|value| (prop.name().to_owned(), value))
        })
        .collect()
}

/// Compare two beans of the same type, ignoring some properties.
///
/// Beans of different types are never equal.
pub fn equal_ignoring(a: &dyn Bean, b: &dyn Bean, ignored: &[&dyn MetaProperty]) -> bool {
    let meta = a.meta_bean();
    if meta.bean_type() != b.meta_bean().bean_type() {
        return false;
    }
    match ignored {
        [] => properties_equal(a, b),
        [single] => meta
            .meta_property_map()
            .iter()
            .map(|prop| &**prop)
            .filter(|prop| *prop != *single)
            .all(|prop| readable_equal(prop, a, b)),
        many => {
            let skip: HashSet<&dyn MetaProperty> = many.iter().copied().collect();
            meta.meta_property_map()
                .iter()
                .map(|prop| &**prop)
                .filter(|prop| !skip.contains(prop))
                .all(|prop| readable_equal(prop, a, b))
        }
    }
}

fn readable_equal(prop: &dyn MetaProperty, a: &dyn Bean, b: &dyn Bean) -> bool {
    if !prop.style().is_readable() {
        return true;
    }
    matches!((prop.get(a), prop.get(b)), (Ok(x), Ok(y)) if x == y)
}

/// Comparator on one property, using [`Value::compare`].
///
/// Beans whose property cannot be read sort first.
pub fn comparator(
    prop: Arc<dyn MetaProperty>,
    ascending: bool
) -> impl Fn(&dyn Bean, &dyn Bean) -> Ordering {
    move |a, b| {
        let ord = match (prop.get(a), prop.get(b)) {
            (Ok(x), Ok(y)) => x.compare(&y),
            (Err(_), Ok(_)) => Ordering::Less,
            (Ok(_), Err(_)) => Ordering::Greater,
            (Err(_), Err(_)) => Ordering::Equal
        };
        if ascending { ord } else { ord.reverse() }
    }
}

/// Read `second` from the bean held in `first`.
///
/// # Errors
///
/// Fails when `first` cannot be read or does not hold a bean.
pub fn chain(
    first: Arc<dyn MetaProperty>,
    second: Arc<dyn MetaProperty>
) -> impl Fn(&dyn Bean) -> Result<Value, BeanError> {
    move |bean| {
        let inner = first.get(bean)?.unwrap_optional();
        let nested = inner.as_bean().ok_or_else(|| {
            BeanError::type_mismatch("bean", inner.kind_name())
        })?;
        second.get(nested)
    }
}

fn declared_type(prop: &dyn MetaProperty, context: &TypeInfo) -> ResolvedType {
    ResolvedType::from(prop.property_generic_type(), context)
}

const COLLECTIONS: &[&str] = &["Vec", "VecDeque", "HashSet", "BTreeSet"];
const MAPS: &[&str] = &["HashMap", "BTreeMap"];

/// Element type of a collection property, resolved against `context`.
///
/// `None` when the property is not a collection.
pub fn collection_type(prop: &dyn MetaProperty, context: &TypeInfo) -> Option<ResolvedType> {
    let ty = unwrap_wrappers(declared_type(prop, context));
    if ty.is_array() {
        return ty.to_component_type();
    }
    COLLECTIONS
        .contains(&ty.raw_type().name())
        .then(|| ty.argument_or_default(0))
}

/// Key type of a map property, resolved against `context`.
pub fn map_key_type(prop: &dyn MetaProperty, context: &TypeInfo) -> Option<ResolvedType> {
    let ty = unwrap_wrappers(declared_type(prop, context));
    MAPS.contains(&ty.raw_type().name())
        .then(|| ty.argument_or_default(0))
}

/// Value type of a map property, resolved against `context`.
pub fn map_value_type(prop: &dyn MetaProperty, context: &TypeInfo) -> Option<ResolvedType> {
    let ty = unwrap_wrappers(declared_type(prop, context));
    MAPS.contains(&ty.raw_type().name())
        .then(|| ty.argument_or_default(1))
}

fn unwrap_wrappers(mut ty: ResolvedType) -> ResolvedType {
    while matches!(ty.raw_type().name(), "Option" | "Arc" | "Box") && ty.is_parameterized() {
        ty = ty.argument_or_default(0);
    }
    ty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FlexiBean, MapBean, PropertyStyle,
        meta_bean::BeanType,
        meta_property::DirectMetaProperty,
        property_type::PropertyType,
        types::GenericType
    };

    #[test]
    fn properties_equal_across_dynamic_types() {
        let flexi = FlexiBean::new().with("a", 1);
        let mut map = MapBean::new();
        map.put("a", 1);
        assert!(properties_equal(&flexi, &map));
        assert_eq!(properties_hash_code(&flexi), properties_hash_code(&map));
        map.put("a", 2);
        assert!(!properties_equal(&flexi, &map));
    }

    #[test]
    fn hash_ignores_property_order() {
        let a = FlexiBean::new().with("x", 1).with("y", 2);
        let b = FlexiBean::new().with("y", 2).with("x", 1);
        assert_eq!(properties_hash_code(&a), properties_hash_code(&b));
    }

    #[test]
    fn flatten_in_order() {
        let bean = FlexiBean::new().with("b", 2).with("a", "x");
        assert_eq!(
            flatten(&bean),
            vec![("b".to_owned(), Value::Int(2)), ("a".to_owned(), Value::from("x"))]
        );
    }

    #[test]
    fn equal_ignoring_paths() {
        let a = FlexiBean::new().with("x", 1).with("y", 2).with("z", 3);
        let b = FlexiBean::new().with("x", 1).with("y", 9).with("z", 8);
        let meta = a.meta_bean();
        let y = meta.meta_property("y").unwrap();
        let z = meta.meta_property("z").unwrap();
        assert!(!equal_ignoring(&a, &b, &[]));
        assert!(!equal_ignoring(&a, &b, &[&*y]));
        assert!(equal_ignoring(&a, &b, &[&*y, &*z]));
        assert!(!equal_ignoring(&a, &MapBean::new(), &[]));
    }

    #[test]
    fn comparator_orders_by_property() {
        let low = FlexiBean::new().with("n", 1);
        let high = FlexiBean::new().with("n", 5);
        let prop = low.meta_bean().meta_property("n").unwrap();
        let asc = comparator(prop.clone(), true);
        let desc = comparator(prop, false);
        assert_eq!(asc(&low, &high), Ordering::Less);
        assert_eq!(desc(&low, &high), Ordering::Greater);
    }

    #[test]
    fn chain_reads_nested() {
        let inner = FlexiBean::new().with("city", "Oslo");
        let outer = FlexiBean::new().with("address", Value::bean(inner.clone()));
        let first = outer.meta_bean().meta_property("address").unwrap();
        let second = inner.meta_bean().meta_property("city").unwrap();
        let read = chain(first.clone(), second.clone());
        assert_eq!(read(&outer).unwrap(), Value::from("Oslo"));

        let flat = FlexiBean::new().with("address", 5);
        let first = flat.meta_bean().meta_property("address").unwrap();
        assert!(chain(first, second)(&flat).is_err());
    }

    #[test]
    fn collection_and_map_types() {
        let bean_type = BeanType::of::<FlexiBean>();
        let list = DirectMetaProperty::<FlexiBean, Vec<String>>::new(
            "tags",
            bean_type.clone(),
            PropertyStyle::ReadOnly
        );
        let map = DirectMetaProperty::<FlexiBean, Option<std::collections::HashMap<String, i64>>>::new(
            "scores",
            bean_type.clone(),
            PropertyStyle::ReadOnly
        );
        let plain = DirectMetaProperty::<FlexiBean, String>::new("name", bean_type.clone(), PropertyStyle::ReadOnly);
        let context = bean_type.type_info();
        assert_eq!(collection_type(&list, context), Some(ResolvedType::string()));
        assert_eq!(collection_type(&plain, context), None);
        assert_eq!(map_key_type(&map, context), Some(ResolvedType::string()));
        assert_eq!(map_value_type(&map, context).map(|t| t.to_string()), Some("i64".into()));
        assert_eq!(map_key_type(&list, context), None);
    }

    #[test]
    fn collection_type_resolves_variables() {
        let bean_type = BeanType::of::<MapBean>();
        let prop = DirectMetaProperty::<MapBean, Vec<Value>>::new("items", bean_type, PropertyStyle::ReadOnly)
            .with_generic_type(GenericType::parameterized(
                Vec::<Value>::type_info(),
                vec![GenericType::variable("utils_test::Box", "T")]
            ));
        let context = TypeInfo::class("utils_test::Ctx");
        assert_eq!(collection_type(&prop, &context), Some(ResolvedType::object()));
    }
}
