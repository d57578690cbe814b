// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved property model.

use syn::Type;

use super::{BuilderField, GetterGen, SetterGen};
use crate::{
    config::GenSettings,
    parse::{DerivedDef, PartStyle, PropertyDef, TagDef, Validation},
    utils::types::{mentions_any, render_type}
};

/// One stored property, ready for generation.
#[derive(Debug, Clone)]
pub struct PropertyData {
    /// Field name.
    pub field:      String,
    /// Property name: the field name without the configured prefix.
    pub name:       String,
    /// Field type.
    pub field_ty:   Type,
    /// Property type text, the exposed type when `ty` is given.
    pub ty:         String,
    /// Property type differs from the field type.
    pub exposed:    bool,
    /// Getter strategy.
    pub getter:     GetterGen,
    /// Setter strategy.
    pub setter:     SetterGen,
    /// Validation rule.
    pub validation: Option<Validation>,
    /// Alternative lookup name.
    pub alias:      Option<String>,
    /// Inclusion in `PartialEq`/`Hash`.
    pub equals:     PartStyle,
    /// Inclusion in `Display`.
    pub to_string:  PartStyle,
    /// Annotations.
    pub tags:       Vec<TagDef>,
    /// First paragraph of the field documentation.
    pub doc:        Option<String>,
    /// Builder strategy, for immutable beans.
    pub builder:    Option<BuilderField>,
    /// Type mentions a bean type parameter.
    pub generic:    bool
}

impl PropertyData {
    /// Resolve a parsed property.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown getter or setter styles.
    pub fn resolve(
        def: &PropertyDef,
        immutable: bool,
        params: &[String],
        settings: &GenSettings
    ) -> Result<Self, String> {
        let field = def.ident.to_string();
        let name = property_name(&field, &settings.prefix);
        let exposed = def.attrs.ty.is_some();
        let prop_ty = def.attrs.ty.as_ref().unwrap_or(&def.ty);

        let getter = GetterGen::resolve(def.attrs.get.as_deref(), &def.ty, exposed, &settings.config)?;
        let setter = if immutable {
            SetterGen::None
        } else {
            SetterGen::resolve(def.attrs.set.as_deref(), &def.ty, exposed)?
        };
        let builder = immutable.then(|| {
            BuilderField::resolve(&def.ty, def.attrs.builder_type.as_ref(), &settings.config)
        });

        Ok(Self {
            name,
            field,
            field_ty: def.ty.clone(),
            ty: render_type(prop_ty),
            exposed,
            getter,
            setter,
            validation: def.attrs.validate.clone(),
            alias: def.attrs.alias.clone(),
            equals: def.attrs.equals_hash_code,
            to_string: def.attrs.to_string,
            tags: def.attrs.tag.clone(),
            doc: def.doc.clone(),
            builder,
            generic: mentions_any(prop_ty, params)
        })
    }

    /// Parsed property type.
    pub fn prop_type(&self) -> Type {
        syn::parse_str(&self.ty).unwrap_or_else(|_| self.field_ty.clone())
    }

    /// Field type text.
    pub fn field_ty_text(&self) -> String {
        render_type(&self.field_ty)
    }

    /// Setter method name.
    pub fn setter_name(&self) -> String {
        format!("set_{}", self.name)
    }

    /// Check if the generated setter returns a `Result`.
    pub fn setter_is_fallible(&self) -> bool {
        self.validation.is_some()
    }

    /// Getter documentation.
    pub fn getter_doc(&self) -> String {
        self.doc
            .clone()
            .unwrap_or_else(|| format!("Gets the `{}` property.", self.name))
    }

    /// Setter documentation.
    pub fn setter_doc(&self) -> String {
        match &self.doc {
            Some(doc) => format!("Sets the `{}` property.\n\n{doc}", self.name),
            None => format!("Sets the `{}` property.", self.name)
        }
    }
}

/// A derived property backed by a hand-written method.
#[derive(Debug, Clone)]
pub struct DerivedData {
    /// Property and method name.
    pub name:    String,
    /// Returned type.
    pub ty:      String,
    /// Type mentions a bean type parameter.
    pub generic: bool
}

impl DerivedData {
    /// Resolve a parsed derived property.
    pub fn resolve(def: &DerivedDef, params: &[String]) -> Self {
        Self {
            name:    def.ident.to_string(),
            ty:      render_type(&def.ty),
            generic: mentions_any(&def.ty, params)
        }
    }

    /// Parsed type.
    pub fn prop_type(&self) -> Option<Type> {
        syn::parse_str(&self.ty).ok()
    }
}

/// Field name without `prefix`, unless nothing would remain.
pub fn property_name(field: &str, prefix: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    match field.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() && !rest.is_empty() => rest.to_owned(),
        _ => field.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn def(field: syn::FieldsNamed) -> PropertyDef {
        let field = field.named.into_iter().next().unwrap();
        PropertyDef::from_field(&field).unwrap().unwrap()
    }

    #[test]
    fn prefix_is_stripped() {
        assert_eq!(property_name("m_name", "m_"), "name");
        assert_eq!(property_name("name", "m_"), "name");
        assert_eq!(property_name("m_", "m_"), "m_");
        assert_eq!(property_name("name", ""), "name");
    }

    #[test]
    fn mutable_property_resolves_styles() {
        let def = def(parse_quote!({
            /// The tags.
            #[property(validate = "not_empty")]
            m_tags: Vec<String>
        }));
        let mut settings = GenSettings::new();
        settings.prefix = "m_".into();
        let prop = PropertyData::resolve(&def, false, &[], &settings).unwrap();
        assert_eq!(prop.name, "tags");
        assert_eq!(prop.field, "m_tags");
        assert_eq!(prop.setter_name(), "set_tags");
        assert_eq!(prop.getter, GetterGen::Slice("String".into()));
        assert_eq!(prop.setter, SetterGen::ClearExtend);
        assert!(prop.setter_is_fallible());
        assert!(prop.builder.is_none());
        assert_eq!(prop.getter_doc(), "The tags.");
    }

    #[test]
    fn immutable_property_has_builder() {
        let def = def(parse_quote!({
            #[property]
            value: Option<T>
        }));
        let params = vec!["T".to_owned()];
        let prop = PropertyData::resolve(&def, true, &params, &GenSettings::new()).unwrap();
        assert_eq!(prop.setter, SetterGen::None);
        assert!(prop.generic);
        assert_eq!(prop.builder.as_ref().unwrap().initial(), "None");
        assert_eq!(prop.getter_doc(), "Gets the `value` property.");
    }

    #[test]
    fn exposed_type() {
        let def = def(parse_quote!({
            #[property(ty = "u64")]
            id: Id
        }));
        let prop = PropertyData::resolve(&def, false, &[], &GenSettings::new()).unwrap();
        assert!(prop.exposed);
        assert_eq!(prop.ty, "u64");
        assert_eq!(prop.field_ty_text(), "Id");
        assert_eq!(prop.getter, GetterGen::Convert);
    }

    #[test]
    fn bad_style_is_reported() {
        let def = def(parse_quote!({
            #[property(get = "peek")]
            id: u64
        }));
        assert!(PropertyData::resolve(&def, false, &[], &GenSettings::new()).is_err());
    }
}
