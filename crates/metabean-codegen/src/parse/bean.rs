// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bean-level attribute parsing.
//!
//! # Supported Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `style` | generator default | `smart`, `full`, `light` or `minimal` |
//! | `immutable` | `false` | Builder-constructed bean without setters |
//! | `parent` | none | Field holding the embedded parent bean |
//! | `constructor_scope` | `private` | Visibility of `from_properties` |
//! | `meta_scope` | bean visibility | Visibility of the `<Name>Meta` struct |
//! | `builder_scope` | bean visibility | Visibility of the `<Name>Builder` struct |
//! | `factory` | none | Name of a public factory function |
//! | `hierarchy` | none | `immutable` marks a bean family as immutable |
//! | `cache_hash_code` | `false` | Cache the hash in a `hash_cache` field |
//! | `clone` | `smart` | `Clone` generation |
//! | `tag` | none | Annotation, repeatable |

use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{
    Attribute, DeriveInput, Generics, Ident, Path, Token, Type, Visibility,
    punctuated::Punctuated, spanned::Spanned
};

use super::{
    options::{BeanStyle, CloneStyle, Scope, TagDef},
    property::{DerivedDef, PropertyDef, parse_derived}
};
use crate::utils::docs::extract_doc_summary;

/// Options of the `#[bean(...)]` attribute.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bean), supports(struct_named), forward_attrs(derive, derived, doc))]
pub struct BeanAttrs {
    /// Struct identifier.
    pub ident:             Ident,
    /// Struct visibility.
    pub vis:               Visibility,
    /// Struct generics.
    pub generics:          Generics,
    /// Forwarded `derive`, `derived` and `doc` attributes.
    pub attrs:             Vec<Attribute>,
    /// Bean style, or the generator default when absent.
    #[darling(default)]
    pub style:             Option<BeanStyle>,
    /// Immutable bean.
    #[darling(default)]
    pub immutable:         bool,
    /// Field holding the parent bean.
    #[darling(default)]
    pub parent:            Option<Ident>,
    /// Visibility of the validating constructor.
    #[darling(default)]
    pub constructor_scope: Option<Scope>,
    /// Visibility of the meta struct.
    #[darling(default)]
    pub meta_scope:        Scope,
    /// Visibility of the builder struct.
    #[darling(default)]
    pub builder_scope:     Scope,
    /// Factory function name.
    #[darling(default)]
    pub factory:           Option<Ident>,
    /// Hierarchy hint.
    #[darling(default)]
    pub hierarchy:         Option<String>,
    /// Cache the hash code.
    #[darling(default)]
    pub cache_hash_code:   bool,
    /// `Clone` generation.
    #[darling(default)]
    pub clone:             CloneStyle,
    /// Bean annotations.
    #[darling(multiple)]
    pub tag:               Vec<TagDef>
}

/// A named struct field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident:       Ident,
    /// Field type.
    pub ty:          Type,
    /// Field visibility.
    pub vis:         Visibility,
    /// Marked with `#[property]`.
    pub is_property: bool,
    /// Span of the field.
    pub span:        Span
}

/// A parsed bean declaration.
#[derive(Debug)]
pub struct BeanDef {
    /// Bean-level options.
    pub attrs:      BeanAttrs,
    /// Every named field in declaration order.
    pub fields:     Vec<FieldDef>,
    /// Fields marked with `#[property]`.
    pub properties: Vec<PropertyDef>,
    /// Declared derived properties.
    pub derived:    Vec<DerivedDef>,
    /// Trait names listed in `#[derive(...)]`.
    pub derives:    Vec<String>,
    /// First paragraph of the struct documentation.
    pub doc:        Option<String>
}

impl BeanDef {
    /// Parse a bean declaration.
    ///
    /// # Errors
    ///
    /// Returns darling errors for unknown keys and bad values, and for
    /// anything other than a struct with named fields.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = BeanAttrs::from_derive_input(input)?;

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named,
                _ => {
                    return Err(darling::Error::custom("Bean requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Bean can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let mut fields = Vec::new();
        let mut properties = Vec::new();
        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let property = errors.handle(PropertyDef::from_field(field)).flatten();
            fields.push(FieldDef {
                ident,
                ty: field.ty.clone(),
                vis: field.vis.clone(),
                is_property: property.is_some(),
                span: field.span()
            });
            properties.extend(property);
        }
        let derived = errors.handle(parse_derived(&attrs.attrs)).unwrap_or_default();
        let derives = errors.handle(parse_derives(&attrs.attrs)).unwrap_or_default();
        errors.finish()?;

        let doc = extract_doc_summary(&attrs.attrs);
        Ok(Self {
            attrs,
            fields,
            properties,
            derived,
            derives,
            doc
        })
    }

    /// Field by name.
    pub fn field(&self, name: &Ident) -> Option<&FieldDef> {
        self.fields.iter().find(|f| &f.ident == name)
    }

    /// Check if the struct derives `name`.
    pub fn derives(&self, name: &str) -> bool {
        self.derives.iter().any(|d| d == name)
    }
}

fn parse_derives(attrs: &[Attribute]) -> darling::Result<Vec<String>> {
    let mut derives = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let paths = attr
            .parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
            .map_err(darling::Error::from)?;
        derives.extend(
            paths
                .iter()
                .filter_map(|path| path.segments.last())
                .map(|seg| seg.ident.to_string())
        );
    }
    Ok(derives)
}
