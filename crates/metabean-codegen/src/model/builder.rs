// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder field strategy for immutable beans.
//!
//! Everything type-specific comes from [`BeanGenConfig`]: the type held by
//! the builder, its initial value, the fluent setter parameter and the
//! conversions between bean and builder. Types without an initial value
//! are held as `Option` and must be supplied before `build`.

use syn::Type;

use crate::{
    config::{BeanGenConfig, expand},
    utils::types::{generics_text, render_type, type_name}
};

/// How one property is held by a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderField {
    /// Type of the value, before any `Option` wrapper.
    pub ty:           String,
    /// Initial value; `None` means the value is required.
    pub init:         Option<String>,
    /// Fluent setter parameter type.
    pub param:        String,
    /// Fluent setter collects an iterator.
    pub collect:      bool,
    /// Builder value to bean value, `$value` placeholder.
    pub to_immutable: String,
    /// Bean value to builder value, `$value` placeholder.
    pub to_mutable:   String
}

impl BuilderField {
    /// Resolve from the field type and an optional `builder_type` override.
    pub fn resolve(field_ty: &Type, override_ty: Option<&Type>, config: &BeanGenConfig) -> Self {
        let raw = type_name(field_ty).unwrap_or_default();
        let generics = generics_text(field_ty);

        let ty = match (override_ty, config.builder_type(&raw)) {
            (Some(explicit), _) => render_type(explicit),
            (None, Some(pattern)) => expand(pattern, "", &generics),
            (None, None) => render_type(field_ty)
        };
        let parsed: Option<Type> = syn::parse_str(&ty).ok();
        let builder_raw = parsed.as_ref().and_then(type_name).unwrap_or_else(|| raw.clone());
        let builder_generics = parsed.as_ref().map(generics_text).unwrap_or_default();

        let init = config
            .builder_init(&builder_raw)
            .map(|pattern| expand(pattern, "", &builder_generics));
        let (param, collect) = match config.varargs(&builder_raw) {
            Some(pattern) => (expand(pattern, "", &builder_generics), true),
            None => (ty.clone(), false)
        };
        let to_immutable = config
            .to_immutable(&raw)
            .map(|pattern| expand(pattern, "$value", &generics))
            .unwrap_or_else(|| "$value".to_owned());
        let to_mutable = config
            .to_mutable(&raw)
            .map(|pattern| expand(pattern, "$value", &generics))
            .unwrap_or_else(|| "$value.clone()".to_owned());

        Self {
            ty,
            init,
            param,
            collect,
            to_immutable,
            to_mutable
        }
    }

    /// Check if a value must be supplied.
    pub fn is_required(&self) -> bool {
        self.init.is_none()
    }

    /// Declared type of the builder field.
    pub fn declared_type(&self) -> String {
        if self.is_required() {
            format!("Option<{}>", self.ty)
        } else {
            self.ty.clone()
        }
    }

    /// Initial value of the builder field.
    pub fn initial(&self) -> String {
        self.init.clone().unwrap_or_else(|| "None".to_owned())
    }

    /// Value stored by the fluent setter for parameter `param`.
    pub fn store(&self, param: &str) -> String {
        let value = if self.collect {
            format!("{param}.into_iter().collect()")
        } else {
            param.to_owned()
        };
        if self.is_required() {
            format!("Some({value})")
        } else {
            value
        }
    }

    /// Bean value built from builder field `access`.
    ///
    /// `missing` is the error expression for an absent required value.
    pub fn build_value(&self, access: &str, missing: &str) -> String {
        let value = if self.is_required() {
            format!("{access}.ok_or_else(|| {missing})?")
        } else {
            access.to_owned()
        };
        self.to_immutable.replace("$value", &value)
    }

    /// Builder value copied from bean field `access`.
    pub fn copy_from_bean(&self, access: &str) -> String {
        let value = self.to_mutable.replace("$value", access);
        if self.is_required() {
            format!("Some({value})")
        } else {
            value
        }
    }
}
