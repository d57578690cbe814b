// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Deep cloning of beans through their builders.
//!
//! Cloning walks every readable, buildable property, deep-copies the value
//! and feeds it to a fresh builder. How opaque values are copied depends on
//! the installed tier:
//!
//! | Tier          | Opaque values copied                          |
//! |---------------|-----------------------------------------------|
//! | `Collections` | none, they are shared                         |
//! | `CustomTypes` | types registered with [`register_copier`]     |
//! | `Grids`       | [`Grid`] cells, then registered types         |
//!
//! The tier is chosen once per process with [`install_cloner`]; the first
//! clone without an explicit choice fixes `Collections`.

use std::{
    any::{Any, TypeId},
    sync::{Arc, LazyLock, OnceLock}
};

use dashmap::DashMap;

use crate::{bean::Bean, error::BeanError, grid::Grid, value::Value};

type SharedAny = Arc<dyn Any + Send + Sync>;
type Copier = fn(&(dyn Any + Send + Sync)) -> Option<SharedAny>;

static COPIERS: LazyLock<DashMap<TypeId, Copier>> = LazyLock::new(DashMap::new);
static INSTALLED: OnceLock<ClonerTier> = OnceLock::new();

/// Selectable cloning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClonerTier {
    /// Beans and standard collections only.
    #[default]
    Collections,

    /// Adds registered custom types.
    CustomTypes,

    /// Adds grids of values.
    Grids
}

/// Strategy for copying values the model does not describe.
pub trait Cloner: Send + Sync {
    /// Tier implemented.
    fn tier(&self) -> ClonerTier;

    /// Copy an opaque value, or return `None` to share it.
    ///
    /// # Errors
    ///
    /// Fails when copying nested content fails.
    fn clone_opaque(&self, _value: &SharedAny) -> Result<Option<SharedAny>, BeanError> {
        Ok(None)
    }
}

/// Tier one: shares opaque values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionCloner;

impl Cloner for CollectionCloner {
    fn tier(&self) -> ClonerTier {
        ClonerTier::Collections
    }
}

/// Tier two: copies opaque values of registered types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomTypeCloner;

impl Cloner for CustomTypeCloner {
    fn tier(&self) -> ClonerTier {
        ClonerTier::CustomTypes
    }

    fn clone_opaque(&self, value: &SharedAny) -> Result<Option<SharedAny>, BeanError> {
        let inner: &(dyn Any + Send + Sync) = value.as_ref();
        Ok(COPIERS
            .get(&inner.type_id())
            .and_then(|copier| (*copier.value())(inner)))
    }
}

/// Tier three: deep-copies grids, then falls back to tier two.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridCloner;

impl Cloner for GridCloner {
    fn tier(&self) -> ClonerTier {
        ClonerTier::Grids
    }

    fn clone_opaque(&self, value: &SharedAny) -> Result<Option<SharedAny>, BeanError> {
        if let Some(grid) = value.downcast_ref::<Grid<Value>>() {
            let copy = grid.try_map(|cell| deep_clone(self, cell))?;
            return Ok(Some(Arc::new(copy)));
        }
        CustomTypeCloner.clone_opaque(value)
    }
}

fn copy_as<T: Any + Clone + Send + Sync>(value: &(dyn Any + Send + Sync)) -> Option<SharedAny> {
    value
        .downcast_ref::<T>()
        .map(|typed| Arc::new(typed.clone()) as SharedAny)
}

/// Let the custom-type tier copy opaque values of type `T` with `Clone`.
pub fn register_copier<T: Any + Clone + Send + Sync>() {
    COPIERS.insert(TypeId::of::<T>(), copy_as::<T>);
}

/// Choose the process-wide cloner tier.
///
/// # Errors
///
/// Returns [`BeanError::DuplicateRegistration`] when a different tier is
/// already in use.
pub fn install_cloner(tier: ClonerTier) -> Result<(), BeanError> {
    if INSTALLED.set(tier).is_ok() || INSTALLED.get() == Some(&tier) {
        tracing::debug!(?tier, "cloner installed");
        return Ok(());
    }
    Err(BeanError::DuplicateRegistration(format!("cloner tier {tier:?}")))
}

/// The installed cloner.
pub fn cloner() -> &'static dyn Cloner {
    match INSTALLED.get_or_init(ClonerTier::default) {
        ClonerTier::Collections => &CollectionCloner,
        ClonerTier::CustomTypes => &CustomTypeCloner,
        ClonerTier::Grids => &GridCloner
    }
}

fn deep_clone(cloner: &dyn Cloner, value: &Value) -> Result<Value, BeanError> {
    Ok(match value {
        Value::List(items) => Value::List(clone_all(cloner, items)?),
        Value::Set(items) => Value::Set(clone_all(cloner, items)?),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| -> Result<(Value, Value), BeanError> {
                    Ok((deep_clone(cloner, k)?, deep_clone(cloner, v)?))
                })
                .collect::<Result<_, _>>()?
        ),
        Value::Optional(Some(inner)) => Value::some(deep_clone(cloner, inner)?),
        Value::Bean(bean) => Value::Bean(clone_with(cloner, bean.as_ref())?),
        Value::Opaque(shared) => match cloner.clone_opaque(shared)? {
            Some(copy) => Value::Opaque(copy),
            None => Value::Opaque(shared.clone())
        },
        other => other.clone()
    })
}

fn clone_all(cloner: &dyn Cloner, items: &[Value]) -> Result<Vec<Value>, BeanError> {
    items.iter().map(|item| deep_clone(cloner, item)).collect()
}

fn clone_with(cloner: &dyn Cloner, bean: &dyn Bean) -> Result<Box<dyn Bean>, BeanError> {
    let meta = bean.meta_bean();
    if !meta.is_buildable() {
        return Ok(bean.clone_bean());
    }
    let mut builder = meta.builder()?;
    for prop in meta.meta_property_map().iter() {
        let style = prop.style();
        if !style.is_buildable() || !style.is_readable() {
            continue;
        }
        let value = prop.get(bean)?;
        builder.set_meta(prop.as_ref(), deep_clone(cloner, &value)?)?;
    }
    builder.build()
}

/// Deep clone behind the trait object.
///
/// # Errors
///
/// Fails when the builder rejects a copied value.
pub fn clone_always_dyn(bean: &dyn Bean) -> Result<Box<dyn Bean>, BeanError> {
    clone_with(cloner(), bean)
}

/// Deep clone of a concrete bean.
///
/// # Errors
///
/// Fails when the builder rejects a copied value.
pub fn clone_always<T: Bean>(bean: &T) -> Result<T, BeanError> {
    let copy: Box<dyn Any> = clone_always_dyn(bean)?;
    copy.downcast::<T>()
        .map(|typed| *typed)
        .map_err(|_| BeanError::type_mismatch(std::any::type_name::<T>(), "other bean"))
}

/// Deep clone of an optional bean.
///
/// # Errors
///
/// Same as [`clone_always`].
pub fn clone<T: Bean>(bean: Option<&T>) -> Result<Option<T>, BeanError> {
    bean.map(clone_always::<T>).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlexiBean;

    #[derive(Clone)]
    struct Token(u32);

    #[test]
    fn collection_tier_shares_opaque() {
        let shared = Value::opaque(Token(1));
        let copy = deep_clone(&CollectionCloner, &shared).unwrap();
        assert_eq!(copy, shared);
    }

    #[test]
    fn custom_tier_copies_registered() {
        register_copier::<Token>();
        let shared = Value::opaque(Token(1));
        let copy = deep_clone(&CustomTypeCloner, &shared).unwrap();
        assert_ne!(copy, shared);
        let Value::Opaque(inner) = copy else {
            panic!("expected opaque value");
        };
        assert_eq!(inner.downcast_ref::<Token>().map(|t| t.0), Some(1));
    }

    #[test]
    fn grid_tier_copies_cells() {
        let mut grid = Grid::new(2, 2);
        grid.put(0, 1, Value::bean(FlexiBean::new().with("a", 1))).unwrap();
        let shared = Value::opaque(grid);
        let copy = deep_clone(&GridCloner, &shared).unwrap();
        let (Value::Opaque(copied), Value::Opaque(original)) = (&copy, &shared) else {
            panic!("expected opaque values");
        };
        assert!(!Arc::ptr_eq(copied, original));
        assert_eq!(copy, shared);
    }

    #[test]
    fn clone_always_deep_copies_nested_beans() {
        let inner = FlexiBean::new().with("x", 1);
        let outer = FlexiBean::new()
            .with("child", Value::bean(inner))
            .with("list", Value::List(vec![1.into(), 2.into()]));
        let copy = clone_always(&outer).unwrap();
        assert_eq!(copy, outer);
        assert_eq!(clone(None::<&FlexiBean>), Ok(None));
        assert_eq!(clone(Some(&outer)), Ok(Some(outer.clone())));
    }

    #[test]
    fn cloner_tier_fixed_once() {
        let current = cloner().tier();
        assert!(install_cloner(current).is_ok());
        let other = match current {
            ClonerTier::Collections => ClonerTier::Grids,
            _ => ClonerTier::Collections
        };
        assert!(install_cloner(other).is_err());
    }
}
