// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Meta-properties: the description of one property of one bean type.
//!
//! A meta-property is identified by its name and declaring bean type. It
//! reads and writes the property on any bean of that type through
//! [`Value`]s.
//!
//! # Implementations
//!
//! | Type                       | Used by                                   |
//! |----------------------------|-------------------------------------------|
//! | [`DirectMetaProperty`]     | generated beans, via accessor functions   |
//! | [`InheritedMetaProperty`]  | child beans, delegating to the parent     |
//! | dynamic meta-properties    | [`FlexiBean`](crate::FlexiBean), [`MapBean`](crate::MapBean) |

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc
};

use crate::{
    annotation::{self, Annotation},
    bean::Bean,
    error::BeanError,
    meta_bean::BeanType,
    property_type::PropertyType,
    style::PropertyStyle,
    types::{GenericType, TypeInfo},
    value::Value
};

/// Description of a single property.
pub trait MetaProperty: Any + Send + Sync + 'static {
    /// Property name.
    fn name(&self) -> &str;

    /// Bean type that declares the property.
    fn declaring_type(&self) -> &BeanType;

    /// Declared type, possibly containing type variables.
    fn property_generic_type(&self) -> &GenericType;

    /// Raw type of the property.
    fn property_type(&self) -> Arc<TypeInfo> {
        self.property_generic_type().erasure()
    }

    /// Access style.
    fn style(&self) -> PropertyStyle;

    /// Attached annotations.
    fn annotations(&self) -> &[Annotation] {
        &[]
    }

    /// Read the property.
    ///
    /// # Errors
    ///
    /// Fails for write-only properties and beans of another type.
    fn get(&self, bean: &dyn Bean) -> Result<Value, BeanError>;

    /// Write the property.
    ///
    /// # Errors
    ///
    /// Fails for read-only properties, beans of another type and values that
    /// do not convert to the property type.
    fn set(&self, bean: &mut dyn Bean, value: Value) -> Result<(), BeanError>;

    /// Write the property and return the previous value.
    ///
    /// # Errors
    ///
    /// Fails unless the property is readable and writable.
    fn put(&self, bean: &mut dyn Bean, value: Value) -> Result<Value, BeanError> {
        let old = self.get(bean)?;
        self.set(bean, value)?;
        Ok(old)
    }

    /// Read the property and format it.
    ///
    /// # Errors
    ///
    /// Same as [`MetaProperty::get`].
    fn get_string(&self, bean: &dyn Bean) -> Result<String, BeanError> {
        Ok(self.get(bean)?.to_string())
    }

    /// Annotation by name.
    fn annotation(&self, name: &str) -> Option<&Annotation> {
        annotation::find(self.annotations(), name)
    }
}

impl PartialEq for dyn MetaProperty {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.declaring_type() == other.declaring_type()
    }
}

impl Eq for dyn MetaProperty {}

impl Hash for dyn MetaProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.declaring_type().hash(state);
    }
}

impl fmt::Debug for dyn MetaProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.declaring_type().simple_name(), self.name())
    }
}

pub(crate) fn downcast_bean<'a, B: Bean>(
    bean: &'a dyn Bean,
    property: &str,
    declaring_type: &BeanType
) -> Result<&'a B, BeanError> {
    let any: &dyn Any = bean;
    any.downcast_ref::<B>()
        .ok_or_else(|| wrong_bean_type(bean, property, declaring_type))
}

pub(crate) fn downcast_bean_mut<'a, B: Bean>(
    bean: &'a mut dyn Bean,
    property: &str,
    declaring_type: &BeanType
) -> Result<&'a mut B, BeanError> {
    if !(&*bean as &dyn Any).is::<B>() {
        return Err(wrong_bean_type(&*bean, property, declaring_type));
    }
    let any: &mut dyn Any = bean;
    any.downcast_mut::<B>()
        .ok_or_else(|| BeanError::type_mismatch(declaring_type.name(), "bean"))
}

fn wrong_bean_type(bean: &dyn Bean, property: &str, declaring_type: &BeanType) -> BeanError {
    BeanError::WrongBeanType {
        property: property.to_owned(),
        expected: declaring_type.name().to_owned(),
        found:    bean.meta_bean().bean_type().name().to_owned()
    }
}

/// Meta-property backed by plain accessor functions.
///
/// # Examples
///
/// ```rust,ignore
/// let name = DirectMetaProperty::<Person, String>::new("name", bean_type, PropertyStyle::ReadWrite)
///     .with_getter(|bean| bean.name.clone())
///     .with_setter(|bean, value| {
///         bean.name = value;
///         Ok(())
///     });
/// ```
pub struct DirectMetaProperty<B, P> {
    name:           String,
    declaring_type: BeanType,
    generic_type:   GenericType,
    style:          PropertyStyle,
    annotations:    Vec<Annotation>,
    getter:         Option<fn(&B) -> P>,
    setter:         Option<fn(&mut B, P) -> Result<(), BeanError>>
}

impl<B: Bean, P: PropertyType> DirectMetaProperty<B, P> {
    /// Meta-property without accessors.
    pub fn new(name: impl Into<String>, declaring_type: BeanType, style: PropertyStyle) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            generic_type: P::generic_type(),
            style,
            annotations: Vec::new(),
            getter: None,
            setter: None
        }
    }

    /// Override the declared type, e.g. with type variables.
    pub fn with_generic_type(mut self, generic_type: GenericType) -> Self {
        self.generic_type = generic_type;
        self
    }

    /// Attach the getter.
    pub fn with_getter(mut self, getter: fn(&B) -> P) -> Self {
        self.getter = Some(getter);
        self
    }

    /// Attach the setter.
    pub fn with_setter(mut self, setter: fn(&mut B, P) -> Result<(), BeanError>) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Attach an annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Typed read.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::WriteOnly`] when no getter exists.
    pub fn get_typed(&self, bean: &B) -> Result<P, BeanError> {
        let getter = self
            .getter
            .ok_or_else(|| BeanError::WriteOnly(self.name.clone()))?;
        Ok(getter(bean))
    }

    /// Typed write.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::ReadOnly`] when no setter exists, or the
    /// setter's own validation error.
    pub fn set_typed(&self, bean: &mut B, value: P) -> Result<(), BeanError> {
        let setter = self
            .setter
            .ok_or_else(|| BeanError::ReadOnly(self.name.clone()))?;
        setter(bean, value)
    }
}

impl<B: Bean, P: PropertyType> MetaProperty for DirectMetaProperty<B, P> {
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
        self.style
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn get(&self, bean: &dyn Bean) -> Result<Value, BeanError> {
        let typed = downcast_bean::<B>(bean, &self.name, &self.declaring_type)?;
        Ok(self.get_typed(typed)?.to_value())
    }

    fn set(&self, bean: &mut dyn Bean, value: Value) -> Result<(), BeanError> {
        if self.setter.is_none() {
            return Err(BeanError::ReadOnly(self.name.clone()));
        }
        let typed = downcast_bean_mut::<B>(bean, &self.name, &self.declaring_type)?;
        self.set_typed(typed, P::from_value(value)?)
    }
}

/// Meta-property of a parent bean, exposed on a child that embeds it.
///
/// Identity is the parent's, so the child's `name` property equals the
/// parent's `name` property.
pub struct InheritedMetaProperty<B> {
    inner:       Arc<dyn MetaProperty>,
    project:     fn(&B) -> &dyn Bean,
    project_mut: fn(&mut B) -> &mut dyn Bean,
    child_type:  BeanType
}

impl<B: Bean> InheritedMetaProperty<B> {
    /// Wrap `inner`, reaching the parent through the projections.
    pub fn new(
        inner: Arc<dyn MetaProperty>,
        child_type: BeanType,
        project: fn(&B) -> &dyn Bean,
        project_mut: fn(&mut B) -> &mut dyn Bean
    ) -> Self {
        Self {
            inner,
            project,
            project_mut,
            child_type
        }
    }

    /// The parent's meta-property.
    pub fn inner(&self) -> &Arc<dyn MetaProperty> {
        &self.inner
    }
}

impl<B: Bean> MetaProperty for InheritedMetaProperty<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn declaring_type(&self) -> &BeanType {
        self.inner.declaring_type()
    }

    fn property_generic_type(&self) -> &GenericType {
        self.inner.property_generic_type()
    }

    fn style(&self) -> PropertyStyle {
        self.inner.style()
    }

    fn annotations(&self) -> &[Annotation] {
        self.inner.annotations()
    }

    fn get(&self, bean: &dyn Bean) -> Result<Value, BeanError> {
        let child = downcast_bean::<B>(bean, self.name(), &self.child_type)?;
        self.inner.get((self.project)(child))
    }

    fn set(&self, bean: &mut dyn Bean, value: Value) -> Result<(), BeanError> {
        let child = downcast_bean_mut::<B>(bean, self.inner.name(), &self.child_type)?;
        self.inner.set((self.project_mut)(child), value)
    }
}
