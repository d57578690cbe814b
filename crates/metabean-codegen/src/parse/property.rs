// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level `#[property(...)]` and struct-level `#[derived(...)]` parsing.
//!
//! # Supported Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `alias` | none | Alternative lookup name |
//! | `get` | `smart` | Getter style |
//! | `set` | `smart` | Setter style (mutable beans only) |
//! | `ty` | field type | Exposed property type |
//! | `equals_hash_code` | `smart` | Inclusion in `PartialEq`/`Hash` |
//! | `to_string` | `smart` | Inclusion in `Display` |
//! | `validate` | none | `not_null`, `not_empty`, `not_blank` or a function path |
//! | `builder_type` | from config | Type held by the builder |
//! | `tag` | none | Annotation, repeatable |

use darling::FromMeta;
use proc_macro2::Span;
use syn::{
    Field, Ident, Meta, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned
};

use super::options::{PartStyle, TagDef, Validation};
use crate::utils::docs::extract_doc_summary;

/// Options of one `#[property(...)]` attribute.
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
pub struct PropertyAttrs {
    /// Alternative name resolving to this property.
    pub alias:            Option<String>,
    /// Getter style.
    pub get:              Option<String>,
    /// Setter style.
    pub set:              Option<String>,
    /// Exposed type when it differs from the field type.
    pub ty:               Option<Type>,
    /// Inclusion in equality and hashing.
    pub equals_hash_code: PartStyle,
    /// Inclusion in the text form.
    pub to_string:        PartStyle,
    /// Validation rule.
    pub validate:         Option<Validation>,
    /// Builder field type override.
    pub builder_type:     Option<Type>,
    /// Annotations such as `range(min=1, max=5)`.
    #[darling(multiple)]
    pub tag:              Vec<TagDef>
}

/// A struct field marked with `#[property]`.
#[derive(Debug)]
pub struct PropertyDef {
    /// Field identifier.
    pub ident: Ident,
    /// Field type.
    pub ty:    Type,
    /// Field visibility.
    pub vis:   Visibility,
    /// Parsed options.
    pub attrs: PropertyAttrs,
    /// First paragraph of the field documentation.
    pub doc:   Option<String>,
    /// Span of the field, for diagnostics.
    pub span:  Span
}

impl PropertyDef {
    /// Parse a field, returning `None` for fields without `#[property]`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, bad values or a repeated
    /// `#[property]` attribute.
    pub fn from_field(field: &Field) -> darling::Result<Option<Self>> {
        let mut found: Option<PropertyAttrs> = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("property")) {
            if found.is_some() {
                return Err(darling::Error::custom("duplicate #[property] attribute").with_span(attr));
            }
            let parsed = match &attr.meta {
                Meta::Path(_) => PropertyAttrs::default(),
                meta => PropertyAttrs::from_meta(meta)?
            };
            found = Some(parsed);
        }
        let Some(attrs) = found else {
            return Ok(None);
        };
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("bean properties must be named fields").with_span(field)
        })?;
        Ok(Some(Self {
            span: field.span(),
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            doc: extract_doc_summary(&field.attrs),
            ident,
            attrs
        }))
    }
}

/// A computed property declared by `#[derived(name: Type)]`.
///
/// The bean supplies `fn name(&self) -> Type`.
#[derive(Debug, Clone)]
pub struct DerivedDef {
    /// Property and method name.
    pub ident: Ident,
    /// Returned type.
    pub ty:    Type
}

impl Parse for DerivedDef {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty = input.parse()?;
        Ok(Self {
            ident,
            ty
        })
    }
}

/// Parse every `#[derived(...)]` attribute.
///
/// # Errors
///
/// Returns the first malformed entry.
pub fn parse_derived(attrs: &[syn::Attribute]) -> darling::Result<Vec<DerivedDef>> {
    let mut derived = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derived")) {
        let list = attr
            .parse_args_with(Punctuated::<DerivedDef, Token![,]>::parse_terminated)
            .map_err(darling::Error::from)?;
        derived.extend(list);
    }
    Ok(derived)
}
