// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The bean traits.
//!
//! - [`Bean`] is the object-safe view used by all reflective code
//! - [`BeanDefinition`] adds the statically typed meta-bean accessor
//! - [`ImmutableBean`] adds typed builders for beans without setters
//!
//! Property access by name goes through `impl dyn Bean`:
//!
//! ```rust,ignore
//! let bean: &mut dyn Bean = &mut person;
//! bean.set("name", "Ada")?;
//! assert_eq!(bean.get("name")?, Value::from("Ada"));
//! ```

use std::{any::Any, fmt, sync::Arc};

use crate::{
    builder::TypedBeanBuilder,
    error::BeanError,
    meta_bean::{BeanType, MetaBean},
    meta_property::MetaProperty,
    utils,
    value::Value
};

/// An object whose properties are described by a meta-bean.
pub trait Bean: Any + Send + Sync + 'static {
    /// Meta-bean describing this instance.
    ///
    /// Generated beans return a shared meta-bean; dynamic beans build one
    /// from their current contents.
    fn meta_bean(&self) -> Arc<dyn MetaBean>;

    /// Clone behind the trait object.
    fn clone_bean(&self) -> Box<dyn Bean>;
}

/// Bean with a statically known meta-bean type.
pub trait BeanDefinition: Bean + Clone + Sized {
    /// Concrete meta-bean type.
    type Meta: MetaBean;

    /// Shared meta-bean of this bean type.
    fn meta() -> Arc<Self::Meta>;
}

/// Bean whose state is fixed at construction and changed only via builders.
pub trait ImmutableBean: BeanDefinition {
    /// Typed builder.
    type Builder: TypedBeanBuilder<Self>;

    /// Empty builder.
    fn builder() -> Self::Builder;

    /// Builder seeded with this bean's values.
    fn to_builder(&self) -> Self::Builder;
}

impl Clone for Box<dyn Bean> {
    fn clone(&self) -> Self {
        self.clone_bean()
    }
}

impl fmt::Debug for dyn Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&utils::to_string(self))
    }
}

impl dyn Bean {
    /// Type of this bean.
    pub fn bean_type(&self) -> BeanType {
        self.meta_bean().bean_type().clone()
    }

    /// Downcast to a concrete bean.
    pub fn downcast_ref<T: Bean>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Mutable downcast to a concrete bean.
    pub fn downcast_mut<T: Bean>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }

    /// Read handle for the named property.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NoSuchProperty`] for unknown names.
    pub fn property(&self, name: &str) -> Result<Property<'_>, BeanError> {
        let meta = self.meta_bean().meta_property(name)?;
        Ok(Property {
            bean: self,
            meta
        })
    }

    /// Read/write handle for the named property.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NoSuchProperty`] for unknown names.
    pub fn property_mut(&mut self, name: &str) -> Result<PropertyMut<'_>, BeanError> {
        let meta = self.meta_bean().meta_property(name)?;
        Ok(PropertyMut {
            bean: self,
            meta
        })
    }

    /// Names of all properties, in declaration order.
    pub fn property_names(&self) -> Vec<String> {
        self.meta_bean().meta_property_map().names()
    }

    /// Read a property by name.
    ///
    /// # Errors
    ///
    /// Fails for unknown or write-only properties.
    pub fn get(&self, name: &str) -> Result<Value, BeanError> {
        self.property(name)?.get()
    }

    /// Write a property by name.
    ///
    /// # Errors
    ///
    /// Fails for unknown or read-only properties, or when the value does
    /// not convert to the property type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), BeanError> {
        self.property_mut(name)?.set(value.into())
    }
}

/// A bean paired with one of its meta-properties, read-only.
pub struct Property<'a> {
    bean: &'a dyn Bean,
    meta: Arc<dyn MetaProperty>
}

impl<'a> Property<'a> {
    /// Property name.
    pub fn name(&self) -> &str {
        self.meta.name()
    }

    /// The bean this property belongs to.
    pub fn bean(&self) -> &'a dyn Bean {
        self.bean
    }

    /// Meta-property.
    pub fn meta_property(&self) -> &Arc<dyn MetaProperty> {
        &self.meta
    }

    /// Current value.
    ///
    /// # Errors
    ///
    /// Fails for write-only properties.
    pub fn get(&self) -> Result<Value, BeanError> {
        self.meta.get(self.bean)
    }
}

impl fmt::Debug for Property<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property({:?})", self.meta)
    }
}

/// A bean paired with one of its meta-properties, writable.
pub struct PropertyMut<'a> {
    bean: &'a mut dyn Bean,
    meta: Arc<dyn MetaProperty>
}

impl PropertyMut<'_> {
    /// Property name.
    pub fn name(&self) -> &str {
        self.meta.name()
    }

    /// Meta-property.
    pub fn meta_property(&self) -> &Arc<dyn MetaProperty> {
        &self.meta
    }

    /// Current value.
    ///
    /// # Errors
    ///
    /// Fails for write-only properties.
    pub fn get(&self) -> Result<Value, BeanError> {
        self.meta.get(&*self.bean)
    }

    /// Replace the value.
    ///
    /// # Errors
    ///
    /// Fails for read-only properties or mismatched values.
    pub fn set(&mut self, value: Value) -> Result<(), BeanError> {
        self.meta.set(&mut *self.bean, value)
    }

    /// Replace the value and return the previous one.
    ///
    /// # Errors
    ///
    /// Fails unless the property is both readable and writable.
    pub fn put(&mut self, value: Value) -> Result<Value, BeanError> {
        self.meta.put(&mut *self.bean, value)
    }
}
