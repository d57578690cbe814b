// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type inspection and rendering.
//!
//! Generated code is written as text, so types are rendered the way a person
//! would write them (`Vec<String>`, not `Vec < String >`).

use quote::ToTokens;
use syn::{
    GenericArgument, Path, PathArguments, ReturnType, Type, TypeParamBound, TypePath
};

/// Primitive types that getters return by value.
const COPY_PRIMITIVES: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64"
];

/// Collections with `clear` and `Extend`.
const EXTENDABLE: &[&str] = &["Vec", "VecDeque", "HashMap", "BTreeMap", "HashSet", "BTreeSet"];

/// Render a type as source text.
pub fn render_type(ty: &Type) -> String {
    match ty {
        Type::Path(TypePath {
            qself: None,
            path
        }) => render_path(path),
        Type::Reference(reference) => {
            let mut out = String::from("&");
            if let Some(lifetime) = &reference.lifetime {
                out.push_str(&lifetime.to_string());
                out.push(' ');
            }
            if reference.mutability.is_some() {
                out.push_str("mut ");
            }
            out.push_str(&render_type(&reference.elem));
            out
        }
        Type::Slice(slice) => format!("[{}]", render_type(&slice.elem)),
        Type::Array(array) => format!(
            "[{}; {}]",
            render_type(&array.elem),
            tidy(&array.len.to_token_stream().to_string())
        ),
        Type::Tuple(tuple) => {
            let items: Vec<String> = tuple.elems.iter().map(render_type).collect();
            if items.len() == 1 {
                format!("({},)", items[0])
            } else {
                format!("({})", items.join(", "))
            }
        }
        Type::Paren(paren) => format!("({})", render_type(&paren.elem)),
        Type::Group(group) => render_type(&group.elem),
        Type::Never(_) => "!".to_owned(),
        Type::TraitObject(object) => format!("dyn {}", render_bounds(object.bounds.iter())),
        Type::ImplTrait(imp) => format!("impl {}", render_bounds(imp.bounds.iter())),
        other => tidy(&other.to_token_stream().to_string())
    }
}

/// Render a path with its generic arguments.
pub fn render_path(path: &Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (index, segment) in path.segments.iter().enumerate() {
        if index > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
        match &segment.arguments {
            PathArguments::None => {}
            PathArguments::AngleBracketed(args) => {
                let rendered: Vec<String> = args.args.iter().map(render_argument).collect();
                out.push('<');
                out.push_str(&rendered.join(", "));
                out.push('>');
            }
            PathArguments::Parenthesized(args) => {
                let inputs: Vec<String> = args.inputs.iter().map(render_type).collect();
                out.push('(');
                out.push_str(&inputs.join(", "));
                out.push(')');
                if let ReturnType::Type(_, ret) = &args.output {
                    out.push_str(" -> ");
                    out.push_str(&render_type(ret));
                }
            }
        }
    }
    out
}

fn render_argument(arg: &GenericArgument) -> String {
    match arg {
        GenericArgument::Type(ty) => render_type(ty),
        GenericArgument::Lifetime(lifetime) => lifetime.to_string(),
        GenericArgument::AssocType(assoc) => format!("{} = {}", assoc.ident, render_type(&assoc.ty)),
        other => tidy(&other.to_token_stream().to_string())
    }
}

/// Render trait bounds joined with `+`.
pub fn render_bounds<'a>(bounds: impl Iterator<Item = &'a TypeParamBound>) -> String {
    bounds
        .map(|bound| match bound {
            TypeParamBound::Trait(trait_bound) => {
                let modifier = match trait_bound.modifier {
                    syn::TraitBoundModifier::Maybe(_) => "?",
                    syn::TraitBoundModifier::None => ""
                };
                format!("{modifier}{}", render_path(&trait_bound.path))
            }
            TypeParamBound::Lifetime(lifetime) => lifetime.to_string(),
            other => tidy(&other.to_token_stream().to_string())
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Remove token spacing from a `to_string` rendering.
pub fn tidy(tokens: &str) -> String {
    let mut out = tokens.to_owned();
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" : ", ": "),
        ("pub (", "pub("),
        ("< ", "<"),
        (" <", "<"),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        ("( ", "("),
        (" )", ")"),
        (" ;", ";"),
        (" .", "."),
        (". ", ".")
    ] {
        out = out.replace(from, to);
    }
    out
}

/// Last path segment name, e.g. `Vec` for `std::vec::Vec<u8>`.
pub fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(TypePath {
            qself: None,
            path
        }) => path.segments.last().map(|seg| seg.ident.to_string()),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => None
    }
}

/// Type arguments of the last path segment.
pub fn type_args(ty: &Type) -> Vec<&Type> {
    let Type::Path(TypePath {
        qself: None,
        path
    }) = ty
    else {
        return Vec::new();
    };
    let Some(segment) = path.segments.last() else {
        return Vec::new();
    };
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    }
}

/// Rendered type arguments joined with `, `, the `$generics` of config patterns.
pub fn generics_text(ty: &Type) -> String {
    type_args(ty)
        .into_iter()
        .map(render_type)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check if the type is a primitive with `Copy`.
pub fn is_copy_primitive(ty: &Type) -> bool {
    type_name(ty).is_some_and(|name| COPY_PRIMITIVES.contains(&name.as_str()) && type_args(ty).is_empty())
}

/// Check if the type is `name<...>`.
pub fn is_named(ty: &Type, name: &str) -> bool {
    type_name(ty).as_deref() == Some(name)
}

/// Check if the type is a collection with `clear` and `Extend`.
pub fn is_extendable(ty: &Type) -> bool {
    type_name(ty).is_some_and(|name| EXTENDABLE.contains(&name.as_str()))
}

/// Check if the type refers to any of `params`, at any depth.
pub fn mentions_any(ty: &Type, params: &[String]) -> bool {
    if params.is_empty() {
        return false;
    }
    let text = render_type(ty);
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| params.iter().any(|param| param == word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(text: &str) -> Type {
        syn::parse_str(text).unwrap()
    }

    #[test]
    fn renders_common_types() {
        for text in [
            "String",
            "Vec<String>",
            "::std::collections::HashMap<String, Vec<i32>>",
            "Option<Box<dyn Fn(i32) -> i32 + Send>>",
            "&'a mut [u8]",
            "[u8; 4]",
            "(i32, String)",
            "(i32,)",
            "impl IntoIterator<Item = String>"
        ] {
            assert_eq!(render_type(&ty(text)), text);
        }
    }

    #[test]
    fn names_and_arguments() {
        let map = ty("std::collections::BTreeMap<String, Vec<u8>>");
        assert_eq!(type_name(&map).as_deref(), Some("BTreeMap"));
        assert_eq!(generics_text(&map), "String, Vec<u8>");
        assert!(is_extendable(&map));
        assert!(!is_extendable(&ty("Option<u8>")));
    }

    #[test]
    fn copy_primitives() {
        assert!(is_copy_primitive(&ty("i32")));
        assert!(is_copy_primitive(&ty("f64")));
        assert!(!is_copy_primitive(&ty("String")));
        assert!(!is_copy_primitive(&ty("Vec<u8>")));
    }

    #[test]
    fn mentions_parameters() {
        let params = vec!["T".to_owned()];
        assert!(mentions_any(&ty("Vec<T>"), &params));
        assert!(mentions_any(&ty("T"), &params));
        assert!(!mentions_any(&ty("Target"), &params));
        assert!(!mentions_any(&ty("Vec<T>"), &[]));
    }

    #[test]
    fn tidy_spacing() {
        assert_eq!(tidy("Vec < :: std :: string :: String >"), "Vec<::std::string::String>");
        assert_eq!(tidy("where B : Send + Clone"), "where B: Send + Clone");
        assert_eq!(tidy("pub (crate)"), "pub(crate)");
    }
}
