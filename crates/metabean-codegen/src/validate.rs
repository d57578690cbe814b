// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural rules checked before generation.
//!
//! | Rule | Applies to |
//! |------|------------|
//! | property fields are private, have no setter style and no rejected type | immutable beans |
//! | only the parent and `hash_cache` may be non-property fields | immutable beans |
//! | properties are readable | immutable beans |
//! | no parent | `light`, `minimal`, `factory` |
//! | immutable | `light`, `factory`, `cache_hash_code` |
//! | no `constructor_scope` | mutable beans |
//! | `hash_cache` field present | `cache_hash_code` |
//! | parent field exists and is not a property | `parent` |
//! | names and aliases unique, not reserved | all |
//! | at most three type parameters, no lifetimes or const parameters | all |
//! | generated traits not also derived | `full` style, `clone = "generate"` |
//! | generated struct visibility not below the bean's | `meta_scope`, `builder_scope` |

use std::collections::HashSet;

use syn::{GenericParam, Visibility, spanned::Spanned};

use crate::{
    config::GenSettings,
    model::{is_immutable_hierarchy, property_name},
    parse::{BeanDef, BeanStyle, CloneStyle, Scope},
    utils::types::{render_type, type_name}
};

/// Names that clash with generated methods.
const RESERVED: &[&str] = &[
    "meta",
    "builder",
    "to_builder",
    "meta_bean",
    "clone_bean",
    "from_properties",
    "bean_type",
    "bean_name",
    "map",
    "annotation",
    "annotations",
    "meta_property",
    "meta_property_map",
    "meta_property_exists",
    "meta_property_count",
    "is_buildable",
    "new",
    "build",
    "from_bean"
];

/// Maximum number of bean type parameters.
const MAX_PARAMS: usize = 3;

/// Check every rule, collecting all violations.
///
/// # Errors
///
/// Returns one spanned error per violation.
pub fn validate(def: &BeanDef, settings: &GenSettings) -> darling::Result<()> {
    let mut errors = darling::Error::accumulator();
    let attrs = &def.attrs;
    let ident = &attrs.ident;
    let style = attrs.style.or(settings.default_style).unwrap_or_default();
    let immutable = attrs.immutable || is_immutable_hierarchy(attrs.hierarchy.as_deref());
    let root = attrs.parent.is_none();
    let mut fail = |message: String, node: &dyn Spanned| {
        errors.push(darling::Error::from(syn::Error::new(node.span(), message)));
    };

    if let Some(hierarchy) = &attrs.hierarchy
        && !is_immutable_hierarchy(Some(hierarchy))
    {
        fail(format!("unknown hierarchy `{hierarchy}`, expected `immutable`"), ident);
    }

    match style {
        BeanStyle::Light if !immutable => {
            fail("`light` style needs an immutable bean".to_owned(), ident);
        }
        BeanStyle::Light | BeanStyle::Minimal if !root => {
            fail(format!("`{}` style beans cannot have a parent", style_name(style)), ident);
        }
        _ => {}
    }
    if let Some(factory) = &attrs.factory
        && !(immutable && root)
    {
        fail("`factory` needs an immutable bean without a parent".to_owned(), factory);
    }
    if !immutable && attrs.constructor_scope.is_some() {
        fail("`constructor_scope` only applies to immutable beans".to_owned(), ident);
    }

    if attrs.cache_hash_code {
        if !immutable {
            fail("`cache_hash_code` needs an immutable bean".to_owned(), ident);
        }
        let cache = def.fields.iter().find(|f| f.ident == "hash_cache");
        match cache {
            Some(field) if type_name(&field.ty).as_deref() == Some("OnceLock") => {}
            Some(field) => fail("`hash_cache` must be a `OnceLock<u64>`".to_owned(), &field.ty),
            None => fail(
                "`cache_hash_code` needs a `hash_cache: OnceLock<u64>` field".to_owned(),
                ident
            )
        }
    }

    if let Some(parent) = &attrs.parent {
        match def.field(parent) {
            None => fail(format!("parent field `{parent}` does not exist"), parent),
            Some(field) if field.is_property => {
                fail(format!("parent field `{parent}` cannot be a property"), parent);
            }
            Some(_) => {}
        }
    }

    if immutable {
        for prop in &def.properties {
            if !matches!(prop.vis, Visibility::Inherited) {
                fail("immutable bean properties must not be public".to_owned(), &prop.vis);
            }
            if prop.attrs.set.as_deref().is_some_and(|set| !set.trim().is_empty()) {
                fail("immutable bean properties cannot have a setter style".to_owned(), &prop.ident);
            }
            if prop.attrs.get.as_deref().is_some_and(|get| get.trim().is_empty()) {
                fail("immutable bean properties must be readable".to_owned(), &prop.ident);
            }
            if let Some(reason) = rejected_type(&render_type(&prop.ty), settings) {
                fail(reason, &prop.ty);
            }
        }
        for field in def.fields.iter().filter(|f| !f.is_property) {
            let allowed = attrs.parent.as_ref() == Some(&field.ident)
                || (attrs.cache_hash_code && field.ident == "hash_cache");
            if !allowed {
                fail(
                    format!(
                        "immutable beans may only hold properties, the parent and `hash_cache`; \
                         mark `{}` with #[property]",
                        field.ident
                    ),
                    &field.ident
                );
            }
        }
    }

    let mut names = HashSet::new();
    for prop in &def.properties {
        let name = property_name(&prop.ident.to_string(), &settings.prefix);
        if RESERVED.contains(&name.as_str()) {
            fail(format!("`{name}` is reserved for generated code"), &prop.ident);
        }
        if !names.insert(name.clone()) {
            fail(format!("duplicate property `{name}`"), &prop.ident);
        }
    }
    for derived in &def.derived {
        let name = derived.ident.to_string();
        if RESERVED.contains(&name.as_str()) {
            fail(format!("`{name}` is reserved for generated code"), &derived.ident);
        }
        if !names.insert(name.clone()) {
            fail(format!("duplicate property `{name}`"), &derived.ident);
        }
    }
    for prop in &def.properties {
        if let Some(alias) = &prop.attrs.alias
            && !names.insert(alias.clone())
        {
            fail(format!("alias `{alias}` clashes with another property or alias"), &prop.ident);
        }
    }

    let mut type_params = 0;
    for param in &attrs.generics.params {
        match param {
            GenericParam::Type(_) => type_params += 1,
            GenericParam::Lifetime(lifetime) => {
                fail("beans cannot have lifetime parameters".to_owned(), lifetime);
            }
            GenericParam::Const(param) => {
                fail("beans cannot have const parameters".to_owned(), param);
            }
        }
    }
    if type_params > MAX_PARAMS {
        fail(format!("beans can have at most {MAX_PARAMS} type parameters"), &attrs.generics);
    }

    if style == BeanStyle::Full {
        let mut generated = vec!["PartialEq", "Eq", "Hash"];
        if attrs.clone != CloneStyle::Omit {
            generated.push("Clone");
        }
        for name in generated.into_iter().filter(|name| def.derives(name)) {
            fail(format!("`full` style generates `{name}`; remove it from the derive list"), ident);
        }
    } else if attrs.clone == CloneStyle::Generate && def.derives("Clone") {
        fail("`clone = \"generate\"` conflicts with derived `Clone`".to_owned(), ident);
    }

    let bean_rank = vis_rank(&attrs.vis);
    for (key, scope) in [("meta_scope", attrs.meta_scope), ("builder_scope", attrs.builder_scope)] {
        if scope_rank(scope).is_some_and(|rank| rank < bean_rank) {
            fail(format!("`{key}` cannot be less visible than the bean"), ident);
        }
    }

    errors.finish()
}

fn style_name(style: BeanStyle) -> &'static str {
    match style {
        BeanStyle::Smart => "smart",
        BeanStyle::Full => "full",
        BeanStyle::Light => "light",
        BeanStyle::Minimal => "minimal"
    }
}

fn rejected_type(ty: &str, settings: &GenSettings) -> Option<String> {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .find_map(|word| settings.config.invalid_reason(word))
        .map(|reason| format!("{reason} (`{ty}`)"))
}

fn vis_rank(vis: &Visibility) -> u8 {
    match vis {
        Visibility::Inherited => 0,
        Visibility::Restricted(_) => 1,
        Visibility::Public(_) => 2
    }
}

fn scope_rank(scope: Scope) -> Option<u8> {
    match scope {
        Scope::Smart => None,
        Scope::Private => Some(0),
        Scope::Package => Some(1),
        Scope::Public => Some(2)
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::*;

    fn check(input: DeriveInput) -> Result<(), String> {
        let def = BeanDef::from_derive_input(&input).unwrap();
        validate(&def, &GenSettings::new()).map_err(|err| err.to_string())
    }

    fn assert_fails(input: DeriveInput, fragment: &str) {
        let message = check(input).unwrap_err();
        assert!(message.contains(fragment), "`{message}` lacks `{fragment}`");
    }

    #[test]
    fn valid_mutable_bean() {
        check(parse_quote! {
            #[derive(Debug, Default, BeanDefinition)]
            pub struct Person {
                #[property(alias = "years")]
                age: i32,
                pub cache: u8
            }
        })
        .unwrap();
    }

    #[test]
    fn valid_immutable_bean() {
        check(parse_quote! {
            #[derive(BeanDefinition)]
            #[bean(immutable, factory = "of", cache_hash_code, constructor_scope = "public")]
            pub struct Point {
                #[property]
                x: i32,
                hash_cache: ::std::sync::OnceLock<u64>
            }
        })
        .unwrap();
    }

    #[test]
    fn immutable_field_rules() {
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable)]
                struct Point {
                    #[property]
                    pub x: i32
                }
            },
            "must not be public"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable)]
                struct Point {
                    #[property(set = "set")]
                    x: i32
                }
            },
            "cannot have a setter"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable)]
                struct Point {
                    #[property]
                    x: ::std::cell::RefCell<i32>
                }
            },
            "interior mutability"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(hierarchy = "immutable")]
                struct Point {
                    #[property]
                    x: i32,
                    scratch: i32
                }
            },
            "mark `scratch`"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable)]
                struct Point {
                    #[property(get = "")]
                    x: i32
                }
            },
            "must be readable"
        );
    }

    #[test]
    fn style_rules() {
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(style = "light")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "needs an immutable bean"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(style = "minimal", parent = "base")]
                struct Point {
                    base: Base,
                    #[property]
                    x: i32
                }
            },
            "cannot have a parent"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(factory = "of")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "`factory` needs"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(constructor_scope = "public")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "only applies to immutable"
        );
        assert_fails(
            parse_quote! {
                #[derive(Clone, BeanDefinition)]
                #[bean(style = "full")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "generates `Clone`"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(hierarchy = "mutable")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "unknown hierarchy"
        );
    }

    #[test]
    fn hash_cache_rules() {
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable, cache_hash_code)]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "needs a `hash_cache"
        );
        assert_fails(
            parse_quote! {
                #[derive(BeanDefinition)]
                #[bean(immutable, cache_hash_code)]
                struct Point {
                    #[property]
                    x: i32,
                    hash_cache: u64
                }
            },
            "must be a `OnceLock"
        );
    }

    #[test]
    fn parent_rules() {
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(parent = "base")]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "does not exist"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(parent = "base")]
                struct Point {
                    #[property]
                    base: Base
                }
            },
            "cannot be a property"
        );
    }

    #[test]
    fn naming_rules() {
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[derived(x: i32)]
                struct Point {
                    #[property]
                    x: i32
                }
            },
            "duplicate property `x`"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                struct Point {
                    #[property(alias = "y")]
                    x: i32,
                    #[property]
                    y: i32
                }
            },
            "alias `y`"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                struct Point {
                    #[property]
                    meta: i32
                }
            },
            "reserved"
        );
    }

    #[test]
    fn generic_rules() {
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                struct Point<'a> {
                    #[property]
                    x: &'a str
                }
            },
            "lifetime"
        );
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                struct Point<A, B, C, D> {
                    #[property]
                    x: (A, B, C, D)
                }
            },
            "at most 3"
        );
    }

    #[test]
    fn scope_rules() {
        assert_fails(
            parse_quote! {
                #[derive(Default, BeanDefinition)]
                #[bean(meta_scope = "private")]
                pub struct Point {
                    #[property]
                    x: i32
                }
            },
            "`meta_scope`"
        );
    }
}
