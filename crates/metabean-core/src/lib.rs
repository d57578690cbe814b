// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core property model for metabean.
//!
//! A *bean* is a value whose properties can be discovered and manipulated
//! at runtime through its *meta-bean*. Each property is described by a
//! *meta-property* that knows its name, declaring type, generic type and
//! access style, and can read or write the property on any instance.
//!
//! Generated code from `metabean-gen` targets these traits directly, but
//! everything here can also be implemented by hand.
//!
//! # Architecture
//!
//! ```text
//! metabean-core/src/
//! ├── lib.rs            - Crate root and re-exports
//! ├── bean.rs           - Bean, BeanDefinition, ImmutableBean, Property views
//! ├── meta_bean.rs      - MetaBean trait and BeanType identity
//! ├── meta_property.rs  - MetaProperty, DirectMetaProperty, InheritedMetaProperty
//! ├── property_map.rs   - Ordered, alias-aware name → meta-property map
//! ├── property_type.rs  - Conversions between Rust types and Value
//! ├── value.rs          - Dynamically typed property values
//! ├── builder.rs        - BeanBuilder, BasicBeanBuilder, BufferingBeanBuilder
//! ├── light.rs          - LightMetaBean and MinimalMetaBean
//! ├── registry.rs       - Process-wide meta-bean registry
//! ├── dynamic/          - FlexiBean and MapBean
//! ├── types/            - TypeInfo, GenericType, ResolvedType, parsing
//! ├── utils/            - Equality, hashing, cloning, validation, formatting
//! ├── path.rs           - PropertyPath extraction
//! ├── iter.rs           - Depth-first BeanIterator
//! ├── grid.rs           - Sparse two-dimensional Grid
//! ├── annotation.rs     - Property and bean annotations
//! ├── style.rs          - PropertyStyle and ReadWrite
//! └── error.rs          - BeanError
//! ```
//!
//! # Usage
//!
//! ```rust
//! use metabean_core::{Bean, FlexiBean, Value};
//!
//! let bean = FlexiBean::new().with("name", "Ada").with("age", 36);
//! let dynamic: &dyn Bean = &bean;
//!
//! assert_eq!(dynamic.get("name").unwrap(), Value::from("Ada"));
//! assert_eq!(dynamic.property_names(), ["name", "age"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod annotation;
pub mod bean;
pub mod builder;
pub mod dynamic;
pub mod error;
pub mod grid;
pub mod iter;
pub mod light;
pub mod meta_bean;
pub mod meta_property;
pub mod path;
pub mod prelude;
pub mod property_map;
pub mod property_type;
pub mod registry;
pub mod style;
pub mod types;
pub mod utils;
pub mod value;

pub use annotation::Annotation;
pub use bean::{Bean, BeanDefinition, ImmutableBean, Property, PropertyMut};
pub use builder::{
    BasicBeanBuilder, BeanBuilder, BeanConstructor, BufferingBeanBuilder, BuilderArgs,
    TypedBeanBuilder
};
pub use dynamic::{DynamicBean, FlexiBean, MapBean};
pub use error::BeanError;
pub use grid::Grid;
pub use iter::BeanIterator;
pub use light::{LightMetaBean, MinimalMetaBean};
pub use meta_bean::{BeanType, MetaBean};
pub use meta_property::{DirectMetaProperty, InheritedMetaProperty, MetaProperty};
pub use path::PropertyPath;
pub use property_map::{MetaPropertyMap, MetaPropertyMapBuilder};
pub use property_type::PropertyType;
pub use style::{PropertyStyle, ReadWrite};
pub use types::{GenericType, ResolvedType, TypeInfo, TypeKind, TypeVariable};
pub use value::Value;
