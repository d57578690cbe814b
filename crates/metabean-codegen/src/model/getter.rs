// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter strategies.
//!
//! | Style | Method | Meta-property reads |
//! |-------|--------|---------------------|
//! | `smart` | by type, see [`GetterGen::resolve`] | clone of the field |
//! | `get` | `fn x(&self) -> &T` | clone of the field |
//! | `clone` | `fn x(&self) -> T`, cloned | clone of the field |
//! | `copy` | `fn x(&self) -> T`, copied | the field |
//! | `manual` | written by hand | the hand-written method |
//! | (empty) | none | nothing, write-only |

use syn::Type;

use crate::{
    config::BeanGenConfig,
    utils::types::{is_copy_primitive, is_named, render_type, type_args, type_name}
};

/// How a property is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetterGen {
    /// Write-only property.
    None,
    /// By value, for `Copy` types.
    Copy,
    /// By reference.
    Ref,
    /// `String` as `&str`.
    Str,
    /// `Vec<E>` as `&[E]`.
    Slice(String),
    /// `Option<E>` as `Option<&E>`.
    OptionRef(String),
    /// Owned clone.
    Clone,
    /// Field converted into the exposed type.
    Convert,
    /// Hand-written `fn x(&self) -> P`.
    Manual
}

impl GetterGen {
    /// Resolve a style keyword.
    ///
    /// `exposed` is set when the property declares its own type with `ty`.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown styles.
    pub fn resolve(
        style: Option<&str>,
        ty: &Type,
        exposed: bool,
        config: &BeanGenConfig
    ) -> Result<Self, String> {
        let style = style.map(|s| s.trim().to_lowercase());
        match style.as_deref() {
            Some("") => Ok(Self::None),
            Some("manual") => Ok(Self::Manual),
            Some("smart" | "get" | "clone" | "copy") | None if exposed => Ok(Self::Convert),
            Some("smart") | None => Ok(Self::smart(ty, config)),
            Some("get") => Ok(Self::Ref),
            Some("clone") => Ok(Self::Clone),
            Some("copy") => Ok(Self::Copy),
            Some(other) => Err(format!("unknown getter style `{other}`"))
        }
    }

    fn smart(ty: &Type, config: &BeanGenConfig) -> Self {
        if is_copy_primitive(ty) {
            return Self::Copy;
        }
        if is_named(ty, "String") {
            return Self::Str;
        }
        let args = type_args(ty);
        if is_named(ty, "Vec") && args.len() == 1 {
            return Self::Slice(render_type(args[0]));
        }
        if is_named(ty, "Option") && args.len() == 1 {
            return Self::OptionRef(render_type(args[0]));
        }
        if type_name(ty).is_some_and(|name| config.is_get_clone(&name)) {
            return Self::Clone;
        }
        Self::Ref
    }

    /// Check if the property can be read.
    pub fn is_readable(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check if a getter method is generated.
    pub fn has_method(&self) -> bool {
        !matches!(self, Self::None | Self::Manual)
    }

    /// Return type and body of the generated method.
    ///
    /// `ty` is the property type text, `field` the field name.
    pub fn method(&self, ty: &str, field: &str) -> Option<(String, String)> {
        let access = format!("self.{field}");
        match self {
            Self::None | Self::Manual => None,
            Self::Copy => Some((ty.to_owned(), access)),
            Self::Ref => Some((format!("&{ty}"), format!("&{access}"))),
            Self::Str => Some(("&str".to_owned(), format!("&{access}"))),
            Self::Slice(elem) => Some((format!("&[{elem}]"), format!("&{access}"))),
            Self::OptionRef(elem) => Some((format!("Option<&{elem}>"), format!("{access}.as_ref()"))),
            Self::Clone => Some((ty.to_owned(), format!("{access}.clone()"))),
            Self::Convert => Some((ty.to_owned(), format!("<{ty}>::from({access}.clone())")))
        }
    }

    /// Owned read used by the meta-property, with the bean bound to `bean`.
    pub fn meta_read(&self, ty: &str, field: &str, method: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Copy => Some(format!("bean.{field}")),
            Self::Manual => Some(format!("bean.{method}()")),
            Self::Convert => Some(format!("<{ty}>::from(bean.{field}.clone())")),
            _ => Some(format!("bean.{field}.clone()"))
        }
    }
}
