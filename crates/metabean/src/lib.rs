// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # metabean
//!
//! One crate, all features. Re-exports:
//! - [`Bean`](macro@Bean) and [`BeanDefinition`](macro@BeanDefinition) derive
//!   macros from `metabean-derive-impl`
//! - Everything from `metabean-core`, including the [`registry`], [`types`]
//!   and [`utils`] modules that generated code refers to
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use metabean::{Bean, MetaBean};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
//! #[bean(immutable)]
//! pub struct Point {
//!     #[property]
//!     x: i32,
//!     #[property]
//!     y: i32
//! }
//!
//! let point = Point::builder().x(1).y(2).build()?;
//! assert_eq!(Point::meta().meta_property_count(), 2);
//! ```

pub use metabean_core::*;
pub use metabean_derive_impl::{Bean, BeanDefinition};
