// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide meta-bean registry.
//!
//! Registration is explicit. Lookup by type proceeds in order:
//!
//! 1. registered meta-beans
//! 2. the builtin dynamic beans ([`FlexiBean`], [`MapBean`])
//! 3. registered dynamic bean factories
//!
//! and fails with [`BeanError::UnknownBeanType`] after that. Typed lookup via
//! [`lookup`] registers the statically known meta-bean on first use.
//!
//! The registry also caches generated meta-beans per bean type through
//! [`static_meta`], which works for generic beans where a `static` cannot.

use std::{
    any::{Any, TypeId},
    sync::{Arc, LazyLock}
};

use dashmap::{DashMap, mapref::entry::Entry};

use crate::{
    bean::{Bean, BeanDefinition},
    dynamic::{DynamicBean, FlexiBean, MapBean},
    error::BeanError,
    meta_bean::MetaBean
};

type DynamicFactory = fn() -> Arc<dyn MetaBean>;

#[derive(Default)]
struct Registry {
    metas:   DashMap<TypeId, Arc<dyn MetaBean>>,
    names:   DashMap<String, TypeId>,
    dynamic: DashMap<TypeId, DynamicFactory>,
    statics: DashMap<TypeId, Arc<dyn Any + Send + Sync>>
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::default);

/// Register a meta-bean.
///
/// # Errors
///
/// Returns [`BeanError::DuplicateRegistration`] when the bean type already
/// has a meta-bean.
pub fn register(meta: Arc<dyn MetaBean>) -> Result<(), BeanError> {
    let bean_type = meta.bean_type().clone();
    match REGISTRY.metas.entry(bean_type.id()) {
        Entry::Occupied(_) => Err(BeanError::DuplicateRegistration(bean_type.name().to_owned())),
        Entry::Vacant(slot) => {
            slot.insert(meta);
            REGISTRY
                .names
                .entry(bean_type.name().to_owned())
                .or_insert(bean_type.id());
            tracing::debug!(bean = %bean_type, "registered meta-bean");
            Ok(())
        }
    }
}

/// Register the meta-bean of a generated bean.
///
/// # Errors
///
/// Same as [`register`].
pub fn register_bean<T: BeanDefinition>() -> Result<(), BeanError> {
    let meta: Arc<dyn MetaBean> = T::meta();
    register(meta)
}

fn dynamic_factory<T: DynamicBean + Default>() -> Arc<dyn MetaBean> {
    T::default().meta_bean()
}

/// Register a dynamic bean type; lookups return the meta-bean of a default
/// instance.
pub fn register_dynamic<T: DynamicBean + Default>() {
    REGISTRY
        .dynamic
        .insert(TypeId::of::<T>(), dynamic_factory::<T>);
    tracing::debug!(bean = std::any::type_name::<T>(), "registered dynamic bean");
}

/// Meta-bean of type `T`.
///
/// # Errors
///
/// Returns [`BeanError::UnknownBeanType`] when nothing is known about `T`.
pub fn meta_bean_of<T: Any>() -> Result<Arc<dyn MetaBean>, BeanError> {
    meta_bean_by_id(TypeId::of::<T>(), std::any::type_name::<T>())
}

/// Meta-bean by type identity; `name` is used for the error message.
///
/// # Errors
///
/// Returns [`BeanError::UnknownBeanType`] when the type is unknown.
pub fn meta_bean_by_id(id: TypeId, name: &str) -> Result<Arc<dyn MetaBean>, BeanError> {
    if let Some(meta) = REGISTRY.metas.get(&id) {
        return Ok(meta.value().clone());
    }
    if id == TypeId::of::<FlexiBean>() {
        return Ok(FlexiBean::new().meta_bean());
    }
    if id == TypeId::of::<MapBean>() {
        return Ok(MapBean::new().meta_bean());
    }
    if let Some(factory) = REGISTRY.dynamic.get(&id) {
        let factory = *factory.value();
        return Ok(factory());
    }
    Err(BeanError::UnknownBeanType(name.to_owned()))
}

/// Meta-bean by registered full type name.
///
/// # Errors
///
/// Returns [`BeanError::UnknownBeanType`] when no registered bean has that
/// name.
pub fn meta_bean_by_name(name: &str) -> Result<Arc<dyn MetaBean>, BeanError> {
    let id = REGISTRY
        .names
        .get(name)
        .map(|entry| *entry.value())
        .ok_or_else(|| BeanError::UnknownBeanType(name.to_owned()))?;
    meta_bean_by_id(id, name)
}

/// Meta-bean of a generated bean, registering it if needed.
pub fn lookup<T: BeanDefinition>() -> Arc<dyn MetaBean> {
    if let Some(meta) = REGISTRY.metas.get(&TypeId::of::<T>()) {
        return meta.value().clone();
    }
    let meta: Arc<dyn MetaBean> = T::meta();
    if register(meta.clone()).is_ok() {
        return meta;
    }
    REGISTRY
        .metas
        .get(&TypeId::of::<T>())
        .map(|entry| entry.value().clone())
        .unwrap_or(meta)
}

/// Check if a meta-bean is registered for `T`.
pub fn is_registered<T: Any>() -> bool {
    REGISTRY.metas.contains_key(&TypeId::of::<T>())
}

/// Per-bean-type cache for generated meta-beans.
///
/// `init` runs outside any lock, so it may itself create other meta-beans.
/// When two threads race, the first stored instance wins for both.
pub fn static_meta<B: Any, M: Any + Send + Sync>(init: impl FnOnce() -> M) -> Arc<M> {
    let key = TypeId::of::<B>();
    if let Some(existing) = REGISTRY.statics.get(&key)
        && let Ok(meta) = existing.value().clone().downcast::<M>()
    {
        return meta;
    }
    let created = Arc::new(init());
    let erased: Arc<dyn Any + Send + Sync> = created.clone();
    let stored = REGISTRY
        .statics
        .entry(key)
        .or_insert(erased)
        .value()
        .clone();
    stored.downcast::<M>().unwrap_or(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BeanType, MetaPropertyMap, MinimalMetaBean, TypeInfo, types};

    #[test]
    fn builtin_dynamic_beans_resolve() {
        let meta = meta_bean_of::<FlexiBean>().unwrap();
        assert_eq!(meta.bean_type().id(), TypeId::of::<FlexiBean>());
        assert!(meta_bean_of::<MapBean>().is_ok());
    }

    #[test]
    fn unknown_type_fails() {
        struct Unknown;
        let err = meta_bean_of::<Unknown>().unwrap_err();
        assert!(matches!(err, BeanError::UnknownBeanType(name) if name.ends_with("Unknown")));
    }

    #[test]
    fn static_meta_runs_init_once() {
        struct Owner;
        let first = static_meta::<Owner, String>(|| "first".to_owned());
        let second = static_meta::<Owner, String>(|| "second".to_owned());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, "first");
    }

    #[derive(Debug, Clone)]
    struct Ticket;

    impl Bean for Ticket {
        fn meta_bean(&self) -> Arc<dyn MetaBean> {
            static_meta::<Self, _>(|| {
                let bean_type =
                    BeanType::new::<Self>(types::intern(TypeInfo::class("registry::Ticket")));
                let map = MetaPropertyMap::builder("registry::Ticket")
                    .build()
                    .unwrap_or_else(|err| panic!("invalid Ticket properties: {err}"));
                MinimalMetaBean::new(bean_type, map, None)
            })
        }

        fn clone_bean(&self) -> Box<dyn Bean> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn duplicate_registration_fails() {
        let meta = Ticket.meta_bean();
        register(meta.clone()).unwrap();
        assert!(matches!(
            register(meta),
            Err(BeanError::DuplicateRegistration(_))
        ));
        assert!(is_registered::<Ticket>());
        assert!(meta_bean_by_name("registry::Ticket").is_ok());
        assert!(!is_registered::<FlexiBean>());
    }

    #[test]
    fn builtin_dynamic_beans_get_fresh_meta_beans() {
        let first = meta_bean_of::<FlexiBean>().unwrap();
        let second = meta_bean_of::<FlexiBean>().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
