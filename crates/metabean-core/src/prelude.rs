// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use metabean_core::prelude::*;
//! ```

pub use crate::{
    Annotation, Bean, BeanBuilder, BeanDefinition, BeanError, BeanType, FlexiBean, ImmutableBean,
    MapBean, MetaBean, MetaProperty, MetaPropertyMap, PropertyPath, PropertyStyle, PropertyType,
    ResolvedType, TypedBeanBuilder, Value
};
