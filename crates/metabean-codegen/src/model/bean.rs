// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved bean model.

use quote::ToTokens;
use syn::{GenericParam, Type, Visibility};

use super::{DerivedData, PropertyData};
use crate::{
    config::GenSettings,
    parse::{BeanDef, BeanStyle, CloneStyle, Scope, TagDef},
    utils::types::{render_bounds, render_type, tidy}
};

/// A declared type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParamData {
    /// Parameter name.
    pub name:   String,
    /// Declared bounds joined with `+`, possibly empty.
    pub bounds: String
}

/// The embedded parent bean.
#[derive(Debug, Clone)]
pub struct ParentData {
    /// Field holding the parent.
    pub field: String,
    /// Parent type.
    pub ty:    Type
}

impl ParentData {
    /// Parent type text.
    pub fn ty_text(&self) -> String {
        render_type(&self.ty)
    }
}

/// A bean ready for generation.
#[derive(Debug, Clone)]
pub struct BeanData {
    /// Struct name.
    pub name:            String,
    /// Struct visibility, with a trailing space when not private.
    pub vis:             String,
    /// Type parameters.
    pub params:          Vec<TypeParamData>,
    /// `where` clause text.
    pub where_clause:    Option<String>,
    /// Resolved style.
    pub style:           BeanStyle,
    /// Immutable bean.
    pub immutable:       bool,
    /// Embedded parent bean.
    pub parent:          Option<ParentData>,
    /// Visibility of `from_properties`.
    pub constructor_vis: String,
    /// Visibility of the meta struct and its accessors.
    pub meta_vis:        String,
    /// Visibility of the builder struct and `builder`/`to_builder`.
    pub builder_vis:     String,
    /// Factory function name.
    pub factory:         Option<String>,
    /// Cache the hash in `hash_cache`.
    pub cache_hash_code: bool,
    /// Generate `Clone`.
    pub clone:           bool,
    /// Generate `PartialEq`.
    pub partial_eq:      bool,
    /// Generate `Eq`.
    pub eq:              bool,
    /// Generate `Hash`.
    pub hash:            bool,
    /// Generate `Display`.
    pub display:         bool,
    /// Bean annotations.
    pub tags:            Vec<TagDef>,
    /// Stored properties in declaration order.
    pub properties:      Vec<PropertyData>,
    /// Derived properties.
    pub derived:         Vec<DerivedData>,
    /// Every field name in declaration order.
    pub fields:          Vec<String>,
    /// First paragraph of the struct documentation.
    pub doc:             Option<String>
}

impl BeanData {
    /// Resolve a parsed bean.
    ///
    /// # Errors
    ///
    /// Returns spanned errors for unknown getter or setter styles.
    pub fn resolve(def: &BeanDef, settings: &GenSettings) -> darling::Result<Self> {
        let attrs = &def.attrs;
        let style = attrs.style.or(settings.default_style).unwrap_or_default();
        let immutable = attrs.immutable || is_immutable_hierarchy(attrs.hierarchy.as_deref());
        let full = style == BeanStyle::Full;

        let params: Vec<TypeParamData> = attrs
            .generics
            .params
            .iter()
            .filter_map(|param| match param {
                GenericParam::Type(param) => Some(TypeParamData {
                    name:   param.ident.to_string(),
                    bounds: render_bounds(param.bounds.iter())
                }),
                _ => None
            })
            .collect();
        let param_names: Vec<String> = params.iter().map(|p| p.name.clone()).collect();

        let mut errors = darling::Error::accumulator();
        let mut properties = Vec::new();
        for prop in &def.properties {
            match PropertyData::resolve(prop, immutable, &param_names, settings) {
                Ok(data) => properties.push(data),
                Err(message) => errors.push(darling::Error::from(syn::Error::new(prop.span, message)))
            }
        }
        errors.finish()?;

        let parent = attrs.parent.as_ref().and_then(|ident| {
            def.field(ident).map(|field| ParentData {
                field: ident.to_string(),
                ty:    field.ty.clone()
            })
        });
        let bean_vis = render_vis(&attrs.vis);
        let scope_vis = |scope: Scope, smart: &str| match scope {
            Scope::Smart => smart.to_owned(),
            Scope::Private => String::new(),
            Scope::Package => "pub(crate) ".to_owned(),
            Scope::Public => "pub ".to_owned()
        };

        Ok(Self {
            name: attrs.ident.to_string(),
            params,
            where_clause: attrs
                .generics
                .where_clause
                .as_ref()
                .map(|clause| tidy(&clause.to_token_stream().to_string())),
            style,
            immutable,
            parent,
            constructor_vis: scope_vis(attrs.constructor_scope.unwrap_or_default(), ""),
            meta_vis: scope_vis(attrs.meta_scope, &bean_vis),
            builder_vis: scope_vis(attrs.builder_scope, &bean_vis),
            factory: attrs.factory.as_ref().map(ToString::to_string),
            cache_hash_code: attrs.cache_hash_code,
            clone: match attrs.clone {
                CloneStyle::Omit => false,
                CloneStyle::Generate => true,
                CloneStyle::Smart => full || !def.derives("Clone")
            },
            partial_eq: full || !def.derives("PartialEq"),
            eq: full || !(def.derives("Eq") || def.derives("PartialEq")),
            hash: full || !def.derives("Hash"),
            display: full || !def.derives("Display"),
            tags: attrs.tag.clone(),
            properties,
            derived: def
                .derived
                .iter()
                .map(|d| DerivedData::resolve(d, &param_names))
                .collect(),
            fields: def.fields.iter().map(|f| f.ident.to_string()).collect(),
            doc: def.doc.clone(),
            vis: bean_vis
        })
    }

    /// Check if the bean has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if a typed builder struct is generated.
    pub fn has_builder(&self) -> bool {
        self.immutable && self.style != BeanStyle::Light
    }

    /// Type parameter names.
    pub fn param_names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name.clone()).collect()
    }

    /// `<T, U>` or empty.
    pub fn ty_generics(&self) -> String {
        if self.params.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.param_names().join(", "))
        }
    }

    /// `<T: Bound + Extra>` or empty.
    pub fn impl_generics(&self, extra: &[&str]) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let params: Vec<String> = self
            .params
            .iter()
            .map(|param| {
                let mut bounds: Vec<&str> = Vec::new();
                if !param.bounds.is_empty() {
                    bounds.push(&param.bounds);
                }
                bounds.extend(extra);
                if bounds.is_empty() {
                    param.name.clone()
                } else {
                    format!("{}: {}", param.name, bounds.join(" + "))
                }
            })
            .collect();
        format!("<{}>", params.join(", "))
    }

    /// ` where ...` or empty.
    pub fn where_text(&self) -> String {
        self.where_clause
            .as_ref()
            .map(|clause| format!(" {clause}"))
            .unwrap_or_default()
    }

    /// Bean type with its parameters.
    pub fn self_ty(&self) -> String {
        format!("{}{}", self.name, self.ty_generics())
    }

    /// Meta struct name.
    pub fn meta_name(&self) -> String {
        format!("{}Meta", self.name)
    }

    /// Meta struct type with parameters.
    pub fn meta_ty(&self) -> String {
        format!("{}{}", self.meta_name(), self.ty_generics())
    }

    /// Builder struct name.
    pub fn builder_name(&self) -> String {
        format!("{}Builder", self.name)
    }

    /// Builder struct type with parameters.
    pub fn builder_ty(&self) -> String {
        format!("{}{}", self.builder_name(), self.ty_generics())
    }

    /// Fields that are neither properties nor the parent.
    pub fn plain_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .filter(|field| {
                !self.properties.iter().any(|p| p.field == *field)
                    && self.parent.as_ref().is_none_or(|parent| parent.field != *field)
            })
            .collect()
    }

    /// Extra bounds generated impls put on every type parameter.
    pub fn param_bounds(&self) -> Vec<&'static str> {
        if self.immutable {
            vec!["PropertyType"]
        } else {
            vec!["PropertyType", "Default"]
        }
    }
}

/// Check if a hierarchy hint makes the bean immutable.
pub fn is_immutable_hierarchy(hierarchy: Option<&str>) -> bool {
    hierarchy.is_some_and(|h| h.eq_ignore_ascii_case("immutable"))
}

/// Visibility as source text with a trailing space.
pub fn render_vis(vis: &Visibility) -> String {
    match vis {
        Visibility::Inherited => String::new(),
        Visibility::Public(_) => "pub ".to_owned(),
        restricted => format!("{} ", tidy(&restricted.to_token_stream().to_string()))
    }
}
