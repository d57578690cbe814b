// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table-driven meta-beans for the `light` and `minimal` bean styles.
//!
//! Neither style generates a dedicated meta-bean struct. The generated code
//! fills one of these with accessor-backed meta-properties instead.

use crate::{
    annotation::Annotation,
    builder::{BeanBuilder, BeanConstructor, BufferingBeanBuilder},
    error::BeanError,
    meta_bean::{BeanType, MetaBean},
    property_map::MetaPropertyMap
};

/// Meta-bean of an immutable bean built through its constructor.
///
/// The builder buffers values by name and hands them to the constructor.
pub struct LightMetaBean {
    bean_type:   BeanType,
    map:         MetaPropertyMap,
    annotations: Vec<Annotation>,
    constructor: BeanConstructor
}

impl LightMetaBean {
    /// Create the meta-bean.
    pub fn new(bean_type: BeanType, map: MetaPropertyMap, constructor: BeanConstructor) -> Self {
        Self {
            bean_type,
            map,
            annotations: Vec::new(),
            constructor
        }
    }

    /// Attach bean-level annotations.
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }
}

impl MetaBean for LightMetaBean {
    fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }

    fn meta_property_map(&self) -> &MetaPropertyMap {
        &self.map
    }

    fn builder(&self) -> Result<Box<dyn BeanBuilder>, BeanError> {
        Ok(Box::new(BufferingBeanBuilder::new(
            self.bean_type.name(),
            self.map.clone(),
            self.constructor
        )))
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Meta-bean whose builder comes from a supplier function.
///
/// Used for mutable beans, where the supplier wraps a default instance in a
/// [`BasicBeanBuilder`](crate::BasicBeanBuilder), and for immutable beans
/// with generated typed builders.
pub struct MinimalMetaBean {
    bean_type:   BeanType,
    map:         MetaPropertyMap,
    annotations: Vec<Annotation>,
    builder:     Option<fn() -> Box<dyn BeanBuilder>>
}

impl MinimalMetaBean {
    /// Create the meta-bean. `builder` is `None` for non-buildable types.
    pub fn new(bean_type: BeanType, map: MetaPropertyMap, builder: Option<fn() -> Box<dyn BeanBuilder>>) -> Self {
        Self {
            bean_type,
            map,
            annotations: Vec::new(),
            builder
        }
    }

    /// Attach bean-level annotations.
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }
}

impl MetaBean for MinimalMetaBean {
    fn bean_type(&self) -> &BeanType {
        &self.bean_type
    }

    fn meta_property_map(&self) -> &MetaPropertyMap {
        &self.map
    }

    fn builder(&self) -> Result<Box<dyn BeanBuilder>, BeanError> {
        self.builder
            .map(|supplier| supplier())
            .ok_or_else(|| BeanError::NotBuildable(self.bean_type.name().to_owned()))
    }

    fn is_buildable(&self) -> bool {
        self.builder.is_some()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
