// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Meta-beans: the description of a bean type.

use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc
};

use crate::{
    annotation::{self, Annotation},
    builder::BeanBuilder,
    error::BeanError,
    meta_property::MetaProperty,
    property_map::MetaPropertyMap,
    types::TypeInfo
};

/// Identity of a bean type.
///
/// Equality uses the Rust [`TypeId`], so each instantiation of a generic
/// bean is its own bean type. The [`TypeInfo`] is shared between them.
#[derive(Clone)]
pub struct BeanType {
    id:   TypeId,
    info: Arc<TypeInfo>
}

impl BeanType {
    /// Bean type of `B` described by `info`.
    pub fn new<B: Any>(info: Arc<TypeInfo>) -> Self {
        Self {
            id: TypeId::of::<B>(),
            info
        }
    }

    /// Bean type of `B` described by a fresh non-generic type named after
    /// `B`.
    pub fn of<B: Any>() -> Self {
        Self::new::<B>(crate::types::intern(TypeInfo::class(std::any::type_name::<B>())))
    }

    /// Rust type identity.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name.
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Type name without module path.
    pub fn simple_name(&self) -> &str {
        self.info.simple_name()
    }

    /// Runtime type description.
    pub fn type_info(&self) -> &Arc<TypeInfo> {
        &self.info
    }
}

impl PartialEq for BeanType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BeanType {}

impl Hash for BeanType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BeanType({})", self.name())
    }
}

impl fmt::Display for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Description of a bean type and entry point to its properties.
pub trait MetaBean: Any + Send + Sync + 'static {
    /// Bean type described.
    fn bean_type(&self) -> &BeanType;

    /// All meta-properties, parent properties first.
    fn meta_property_map(&self) -> &MetaPropertyMap;

    /// Fresh builder for the bean type.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NotBuildable`] when the type has no builder.
    fn builder(&self) -> Result<Box<dyn BeanBuilder>, BeanError>;

    /// Check if [`MetaBean::builder`] succeeds.
    fn is_buildable(&self) -> bool {
        true
    }

    /// Bean-level annotations.
    fn annotations(&self) -> &[Annotation] {
        &[]
    }

    /// Full bean type name.
    fn bean_name(&self) -> &str {
        self.bean_type().name()
    }

    /// Meta-property by name or alias.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NoSuchProperty`] for unknown names.
    fn meta_property(&self, name: &str) -> Result<Arc<dyn MetaProperty>, BeanError> {
        self.meta_property_map()
            .get(name)
            .cloned()
            .ok_or_else(|| BeanError::no_such_property(self.bean_name(), name))
    }

    /// Check if a property name or alias exists.
    fn meta_property_exists(&self, name: &str) -> bool {
        self.meta_property_map().contains(name)
    }

    /// Number of properties.
    fn meta_property_count(&self) -> usize {
        self.meta_property_map().len()
    }

    /// Annotation by name.
    fn annotation(&self, name: &str) -> Option<&Annotation> {
        annotation::find(self.annotations(), name)
    }
}

impl fmt::Debug for dyn MetaBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MetaBean:{}", self.bean_type().simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;
    struct Other;

    #[test]
    fn bean_type_identity_is_type_id() {
        let info = Arc::new(TypeInfo::class("meta_bean_test::Shared"));
        let a = BeanType::new::<Marker>(info.clone());
        let b = BeanType::new::<Marker>(info.clone());
        let c = BeanType::new::<Other>(info);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.simple_name(), "Shared");
        assert_eq!(format!("{a:?}"), "BeanType(meta_bean_test::Shared)");
    }

    #[test]
    fn bean_type_of_uses_type_name() {
        let bean_type = BeanType::of::<Marker>();
        assert!(bean_type.name().ends_with("Marker"));
    }
}
