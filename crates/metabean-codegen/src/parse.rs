// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bean declaration parsing.
//!
//! Turns a struct carrying `#[bean(...)]`, `#[property(...)]` and
//! `#[derived(...)]` attributes into a [`BeanDef`].
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── bean.rs     — BeanAttrs (darling) and BeanDef
//! ├── property.rs — PropertyAttrs, PropertyDef and DerivedDef
//! ├── options.rs  — Keyword options (styles, scopes, validation, tags)
//! └── tests.rs    — Unit tests
//! ```
//!
//! # Bean Detection
//!
//! In a source file the bean is the first top-level struct deriving
//! `BeanDefinition` or `Bean`.

mod bean;
mod options;
mod property;

pub use bean::{BeanAttrs, BeanDef, FieldDef};
pub use options::{BeanStyle, CloneStyle, PartStyle, Scope, TagDef, Validation};
pub use property::{DerivedDef, PropertyAttrs, PropertyDef};
use syn::{Attribute, File, Item, ItemStruct, Path, Token, punctuated::Punctuated};

/// Derive names that mark a struct as a bean.
const BEAN_DERIVES: &[&str] = &["BeanDefinition", "Bean"];

/// First top-level struct in `file` that is a bean.
pub fn find_bean(file: &File) -> Option<&ItemStruct> {
    file.items.iter().find_map(|item| match item {
        Item::Struct(item) if is_bean(&item.attrs) => Some(item),
        _ => None
    })
}

/// Check if the attributes derive one of the bean traits.
pub fn is_bean(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| {
            path.segments
                .last()
                .is_some_and(|seg| BEAN_DERIVES.contains(&seg.ident.to_string().as_str()))
        })
}

#[cfg(test)]
mod tests;
