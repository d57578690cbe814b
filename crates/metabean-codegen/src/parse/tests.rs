// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use syn::{DeriveInput, parse_quote};

use super::*;

#[test]
fn parses_defaults() {
    let input: DeriveInput = parse_quote! {
        /// A person.
        #[derive(Debug, Default, BeanDefinition)]
        pub struct Person {
            #[property]
            name: String,
            #[property(alias = "years")]
            age: i32,
            cache: u64
        }
    };
    let bean = BeanDef::from_derive_input(&input).unwrap();
    assert_eq!(bean.attrs.ident, "Person");
    assert_eq!(bean.attrs.style, None);
    assert!(!bean.attrs.immutable);
    assert_eq!(bean.attrs.clone, CloneStyle::Smart);
    assert_eq!(bean.properties.len(), 2);
    assert_eq!(bean.fields.len(), 3);
    assert!(!bean.fields[2].is_property);
    assert!(bean.derives("Default"));
    assert!(!bean.derives("Clone"));
    assert_eq!(bean.doc.as_deref(), Some("A person."));
}

#[test]
fn parses_all_bean_keys() {
    let input: DeriveInput = parse_quote! {
        #[derive(BeanDefinition)]
        #[bean(
            style = "light",
            immutable,
            constructor_scope = "package",
            meta_scope = "public",
            builder_scope = "private",
            factory = "of",
            cache_hash_code,
            clone = "omit",
            tag = "persisted(table=people)"
        )]
        #[derived(label: String)]
        pub struct Person {
            #[property]
            name: String,
            hash_cache: ::std::sync::OnceLock<u64>
        }
    };
    let bean = BeanDef::from_derive_input(&input).unwrap();
    let attrs = &bean.attrs;
    assert_eq!(attrs.style, Some(BeanStyle::Light));
    assert!(attrs.immutable);
    assert_eq!(attrs.constructor_scope, Some(Scope::Package));
    assert_eq!(attrs.meta_scope, Scope::Public);
    assert_eq!(attrs.builder_scope, Scope::Private);
    assert_eq!(attrs.factory.as_ref().map(ToString::to_string).as_deref(), Some("of"));
    assert!(attrs.cache_hash_code);
    assert_eq!(attrs.clone, CloneStyle::Omit);
    assert_eq!(attrs.tag[0].name, "persisted");
    assert_eq!(bean.derived.len(), 1);
    assert_eq!(bean.derived[0].ident, "label");
}

#[test]
fn parent_and_hierarchy() {
    let input: DeriveInput = parse_quote! {
        #[derive(Clone, BeanDefinition)]
        #[bean(parent = "base", hierarchy = "immutable")]
        struct Child<T> {
            base: Base,
            #[property]
            value: T
        }
    };
    let bean = BeanDef::from_derive_input(&input).unwrap();
    let parent = bean.attrs.parent.clone().unwrap();
    assert_eq!(parent, "base");
    assert!(bean.field(&parent).is_some());
    assert_eq!(bean.attrs.hierarchy.as_deref(), Some("immutable"));
    assert_eq!(bean.attrs.generics.type_params().count(), 1);
    assert!(bean.derives("Clone"));
}

#[test]
fn rejects_unknown_key() {
    let input: DeriveInput = parse_quote! {
        #[derive(BeanDefinition)]
        #[bean(colour = "red")]
        struct Person {
            #[property]
            name: String
        }
    };
    assert!(BeanDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_bad_style() {
    let input: DeriveInput = parse_quote! {
        #[derive(BeanDefinition)]
        #[bean(style = "heavy")]
        struct Person {
            #[property]
            name: String
        }
    };
    assert!(BeanDef::from_derive_input(&input).is_err());
}

#[test]
fn rejects_tuple_struct() {
    let input: DeriveInput = parse_quote! {
        #[derive(BeanDefinition)]
        struct Pair(String, String);
    };
    assert!(BeanDef::from_derive_input(&input).is_err());
}

#[test]
fn finds_first_bean_in_file() {
    let file: syn::File = parse_quote! {
        use std::fmt;

        #[derive(Debug)]
        struct Helper;

        #[derive(Debug, metabean::BeanDefinition)]
        struct Person {
            #[property]
            name: String
        }

        #[derive(Bean)]
        struct Other {}
    };
    let found = find_bean(&file).unwrap();
    assert_eq!(found.ident, "Person");
}

#[test]
fn file_without_bean() {
    let file: syn::File = parse_quote! {
        #[derive(Debug, Clone)]
        struct Plain {
            name: String
        }
    };
    assert!(find_bean(&file).is_none());
}
