// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Bean-Level `#[bean(...)]`
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
//! #[bean(
//!     style = "smart",          // "smart" | "full" | "light" | "minimal"
//!     immutable,                // builder, validating constructor, no setters
//!     parent = "base",          // field embedding the parent bean
//!     factory = "of",           // extra public constructor
//!     constructor_scope = "private",
//!     meta_scope = "public",
//!     builder_scope = "public",
//!     cache_hash_code,          // needs `hash_cache: OnceLock<u64>`
//!     clone = "smart",          // "smart" | "generate" | "omit"
//!     tag = "persisted(table='people')"
//! )]
//! pub struct Person { /* ... */ }
//! ```
//!
//! ## Field-Level `#[property(...)]`
//!
//! | Key | Values |
//! |-----|--------|
//! | `get` | `smart`, `get`, `clone`, `copy`, `manual`, `""` |
//! | `set` | `smart`, `set`, `clear_extend`, `field`, `manual`, `""`, or a `$value` pattern |
//! | `ty` | exposed type, converted with `From` |
//! | `validate` | `not_null`, `not_empty`, `not_blank`, or a function path |
//! | `alias` | alternative lookup name |
//! | `equals_hash_code`, `to_string` | `smart`, `field`, `omit` |
//! | `builder_type` | type held by the builder |
//! | `tag(...)` | property annotation, repeatable |
//!
//! ## Derived properties
//!
//! `#[derived(full_name: String)]` on the struct exposes the inherent method
//! `full_name(&self) -> String` as a read-only property.
//!
//! # Derive and std traits
//!
//! A derive macro cannot see the other derives of its struct. `Bean`
//! therefore generates `Clone`, `PartialEq`, `Eq` and `Hash` only for `full`
//! beans and beans with a cached hash code; other beans derive them.

mod bean;

use proc_macro::TokenStream;

/// Generate the meta-bean, accessors, builder and trait impls of a bean.
///
/// Produces the same items `metabean-gen` writes into an autogenerated
/// region, with absolute `::metabean` paths.
///
/// # Examples
///
/// ```rust,ignore
/// use metabean::{Bean, MetaBean};
///
/// #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Bean)]
/// pub struct Person {
///     #[property(validate = "not_blank")]
///     name: String,
///     #[property]
///     age: u32
/// }
///
/// let meta = Person::meta();
/// assert_eq!(meta.meta_property_count(), 2);
/// ```
#[proc_macro_derive(Bean, attributes(bean, property, derived))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    bean::derive(input)
}

/// Check bean attributes; the boilerplate itself lives in the source file.
#[proc_macro_derive(BeanDefinition, attributes(bean, property, derived))]
pub fn derive_bean_definition(input: TokenStream) -> TokenStream {
    bean::check(input)
}
