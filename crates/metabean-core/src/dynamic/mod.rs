// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic beans: property sets decided at runtime.
//!
//! Dynamic beans build their meta-bean from their current contents on every
//! call to [`Bean::meta_bean`], so the meta-bean is never shared between
//! instances.
//!
//! # Architecture
//!
//! ```text
//! dynamic/
//! ├── mod.rs    - DynamicBean trait, shared meta-bean/property/builder
//! ├── flexi.rs  - FlexiBean: insertion ordered
//! └── map.rs    - MapBean: sorted by name
//! ```

mod flexi;
mod map;

use std::{marker::PhantomData, sync::Arc};

pub use flexi::FlexiBean;
pub use map::MapBean;

use crate::{
    bean::Bean,
    builder::BeanBuilder,
    error::BeanError,
    meta_bean::{BeanType, MetaBean},
    meta_property::{MetaProperty, downcast_bean, downcast_bean_mut},
    property_map::MetaPropertyMap,
    style::PropertyStyle,
    types::{GenericType, ResolvedType},
    value::Value
};

/// Bean whose properties can be added and removed at runtime.
pub trait DynamicBean: Bean {
    /// Declare a property; an existing value is kept.
    fn define_property(&mut self, name: &str, property_type: ResolvedType);

    /// Remove a property and its value.
    fn remove_property(&mut self, name: &str);
}

/// Storage shared by the dynamic bean implementations.
pub(crate) trait DynamicStore: Bean + Default {
    fn lookup(&self, name: &str) -> Option<&Value>;

    fn store(&mut self, name: &str, value: Value);

    /// Property names in iteration order, with declared types.
    fn declared(&self) -> Vec<(String, GenericType)>;
}

struct DynamicMetaProperty<B> {
    name:           String,
    declaring_type: BeanType,
    generic_type:   GenericType,
    _bean:          PhantomData<fn() -> B>
}

impl<B: DynamicStore> MetaProperty for DynamicMetaProperty<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> &BeanType {
        &self.declaring_type
    }

    fn property_generic_type(&self) -> &GenericType {
        &self.generic_type
    }

    fn style(&self) -> PropertyStyle {
        PropertyStyle::ReadWrite
    }

    fn get(&self, bean: &dyn Bean) -> Result<Value, BeanError> {
        let typed = downcast_bean::<B>(bean, &self.name, &self.declaring_type)?;
        Ok(typed.lookup(&self.name).cloned().unwrap_or(Value::Null))
    }

    fn set(&self, bean: &mut dyn Bean, value: Value) -> Result<(), BeanError> {
        let typed = downcast_bean_mut::<B>(bean, &self.name, &self.declaring_type)?;
        typed.store(&self.name, value);
        Ok(())
    }
}

/// Snapshot meta-bean of one dynamic bean instance.
pub(crate) struct DynamicMetaBean<B> {
    bean_type: BeanType,
    map:       MetaPropertyMap,
    _bean:     PhantomData<fn() -> B>
}

impl<B: DynamicStore> DynamicMetaBean<B> {
    pub(crate) fn snapshot(bean: &B) -> Arc<dyn MetaBean> {
        let bean_type = BeanType::of::<B>();
        let map = bean
            .declared()
            .into_iter()
            .fold(
                MetaPropertyMap::builder(bean_type.name()),
                |builder, (name, generic_type)| {
                    builder.property(Arc::new(DynamicMetaProperty::<B> {
                        name,
                        declaring_type: bean_type.clone(),
                        generic_type,
                        _bean: PhantomData
                    }))
                }
            )
            .build()
            .unwrap_or_default();
        Arc::new(Self {
            bean_type,
            map,
            _bean: PhantomData
        })
    }
}

impl<B: DynamicStore> MetaBean for DynamicMetaBean<B> {
    fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }

    fn meta_property_map(&self) -> &MetaPropertyMap {
        &self.map
    }

    fn builder(&self) -> Result<Box<dyn BeanBuilder>, BeanError> {
        Ok(Box::new(DynamicBuilder {
            bean: B::default()
        }))
    }
}

/// Builder accepting any property name.
struct DynamicBuilder<B> {
    bean: B
}

impl<B: DynamicStore> BeanBuilder for DynamicBuilder<B> {
    fn get(&self, name: &str) -> Result<Value, BeanError> {
        Ok(self.bean.lookup(name).cloned().unwrap_or(Value::Null))
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), BeanError> {
        self.bean.store(name, value);
        Ok(())
    }

    fn build(self: Box<Self>) -> Result<Box<dyn Bean>, BeanError> {
        Ok(Box::new(self.bean))
    }
}
