// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bean derive entry points.
//!
//! Both derives run the shared generator pipeline:
//!
//! ```text
//! DeriveInput ─► render(Mode::Derive) ─► text ─► TokenStream   (Bean)
//! DeriveInput ─► BeanDef ─► validate ─► BeanData ─► nothing     (BeanDefinition)
//! ```

use metabean_codegen::{
    config::{GenSettings, Indent},
    generate::{Mode, render},
    model::BeanData,
    parse::BeanDef,
    validate::validate
};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Main entry point for the Bean derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).into()
}

/// Main entry point for the BeanDefinition derive macro.
pub fn check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match definition_errors(&input) {
        Ok(()) => TokenStream::new(),
        Err(err) => err.write_errors().into()
    }
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let generated = match render(input, &[], &GenSettings::new(), Mode::Derive) {
        Ok(generated) => generated,
        Err(err) => return err.write_errors()
    };
    let text = generated.code.render(Indent::Spaces(4));
    match text.parse::<TokenStream2>() {
        Ok(tokens) => quote! { #tokens },
        Err(err) => syn::Error::new(
            Span::call_site(),
            format!("generated bean code does not tokenize: {err}")
        )
        .to_compile_error()
    }
}

fn definition_errors(input: &DeriveInput) -> darling::Result<()> {
    let settings = GenSettings::new();
    let def = BeanDef::from_derive_input(input)?;
    validate(&def, &settings)?;
    BeanData::resolve(&def, &settings).map(|_| ())
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn expands_bean_items() {
        let input: DeriveInput = parse_quote! {
            #[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
            pub struct Person {
                #[property]
                name: String
            }
        };
        let tokens = expand(&input).to_string();
        assert!(tokens.contains("struct PersonMeta"));
        assert!(tokens.contains(":: metabean :: Bean for Person"));
        assert!(!tokens.contains("compile_error"));
    }

    #[test]
    fn invalid_bean_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            #[bean(style = "light")]
            pub struct Broken {
                #[property]
                pub x: i32
            }
        };
        assert!(expand(&input).to_string().contains("compile_error"));
        assert!(definition_errors(&input).is_err());
    }

    #[test]
    fn valid_definition_passes() {
        let input: DeriveInput = parse_quote! {
            #[bean(immutable)]
            pub struct Point {
                #[property]
                x: i32
            }
        };
        assert!(definition_errors(&input).is_ok());
    }
}
