// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared state of one generation run.
//!
//! The context hands out names of runtime items. In [`Mode::Derive`] they are
//! absolute (`::metabean::BeanError`); in [`Mode::Source`] they are short and
//! recorded, so the file rewriter can add the missing `use` line.

use std::{cell::RefCell, collections::BTreeSet};

use syn::Type;

use crate::{
    model::BeanData,
    parse::{TagDef, Validation},
    utils::types::{mentions_any, render_path, render_type, type_args}
};

/// Crate exposing the runtime items.
pub const RUNTIME_CRATE: &str = "metabean";

/// How runtime items are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Short names plus an inserted `use` line.
    Source,
    /// Absolute paths, for macro expansion.
    Derive
}

/// Generation context for one bean.
#[derive(Debug)]
pub struct GenContext<'a> {
    /// Bean being generated.
    pub bean: &'a BeanData,
    mode:     Mode,
    used:     RefCell<BTreeSet<&'static str>>
}

impl<'a> GenContext<'a> {
    /// Context for `bean`.
    pub fn new(bean: &'a BeanData, mode: Mode) -> Self {
        Self {
            bean,
            mode,
            used: RefCell::new(BTreeSet::new())
        }
    }

    /// Name of a runtime item such as `BeanError` or `registry::static_meta`.
    pub fn p(&self, item: &'static str) -> String {
        match self.mode {
            Mode::Derive => format!("::{RUNTIME_CRATE}::{item}"),
            Mode::Source => {
                let head = item.split("::").next().unwrap_or(item);
                self.used.borrow_mut().insert(head);
                item.to_owned()
            }
        }
    }

    /// Runtime names used so far, sorted.
    pub fn used(&self) -> Vec<&'static str> {
        self.used.borrow().iter().copied().collect()
    }

    /// Generics of generated impls, with the runtime bounds added.
    pub fn impl_generics(&self) -> String {
        let bounds: Vec<String> = self
            .bean
            .param_bounds()
            .into_iter()
            .map(|bound| match bound {
                "Default" => bound.to_owned(),
                runtime => self.p(runtime)
            })
            .collect();
        let refs: Vec<&str> = bounds.iter().map(String::as_str).collect();
        self.bean.impl_generics(&refs)
    }

    /// `impl<...> Trait for Bean<...> where ... {`, or an inherent header.
    pub fn impl_header(&self, trait_path: Option<&str>, self_ty: &str) -> String {
        let trait_part = trait_path.map(|t| format!("{t} for ")).unwrap_or_default();
        format!(
            "impl{} {trait_part}{self_ty}{} {{",
            self.impl_generics(),
            self.bean.where_text()
        )
    }

    /// `Arc` path.
    pub fn arc(&self) -> &'static str {
        "::std::sync::Arc"
    }

    /// Statement checking `expr` against `rule`, naming property `name`.
    pub fn validation(&self, rule: &Validation, expr: &str, name: &str) -> String {
        let function = match (rule.function(), rule) {
            (Some(builtin), _) => format!("{}::{builtin}", self.p("utils")),
            (None, Validation::Custom(path)) => render_path(path),
            (None, _) => return String::new()
        };
        format!("{function}(&{expr}, {name:?})?;")
    }

    /// Annotation constructor expression.
    pub fn annotation(&self, tag: &TagDef) -> String {
        let mut out = format!("{}::new({:?})", self.p("Annotation"), tag.name);
        for (key, value) in &tag.attributes {
            out.push_str(&format!(".with({key:?}, {value:?})"));
        }
        out
    }

    /// `vec![...]` of the bean annotations.
    pub fn annotations(&self, tags: &[TagDef]) -> String {
        let items: Vec<String> = tags.iter().map(|tag| self.annotation(tag)).collect();
        if items.is_empty() {
            "Vec::new()".to_owned()
        } else {
            format!("vec![{}]", items.join(", "))
        }
    }

    /// Declared-type expression for `ty`, with bean type parameters as
    /// variables declared by the type named `declarer`.
    pub fn generic_type(&self, ty: &Type, declarer: &str) -> String {
        let params = self.bean.param_names();
        let text = render_type(ty);
        if params.contains(&text) {
            return format!("{}::variable({declarer}, {text:?})", self.p("GenericType"));
        }
        let args = type_args(ty);
        if mentions_any(ty, &params) && !args.is_empty() {
            let inner: Vec<String> = args.iter().map(|arg| self.generic_type(arg, declarer)).collect();
            return format!(
                "{}::parameterized(<{text} as {}>::type_info(), vec![{}])",
                self.p("GenericType"),
                self.p("PropertyType"),
                inner.join(", ")
            );
        }
        format!("<{text} as {}>::generic_type()", self.p("PropertyType"))
    }

    /// Simple bean name as a string literal.
    pub fn name_literal(&self) -> String {
        format!("{:?}", self.bean.name)
    }

    /// Fully qualified bean name expression.
    pub fn full_name(&self) -> String {
        format!("concat!(module_path!(), \"::{}\")", self.bean.name)
    }
}
