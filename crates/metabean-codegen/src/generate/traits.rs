// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Trait impls of the bean.

use super::{GenContext, ident};
use crate::{
    parse::{BeanStyle, PartStyle},
    writer::SourceWriter
};

/// `Bean`, `BeanDefinition`, `ImmutableBean` and `PropertyType`.
pub fn bean_impls(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let self_ty = bean.self_ty();
    let arc = ctx.arc();
    let error = ctx.p("BeanError");
    let mut w = SourceWriter::new();

    w.open(ctx.impl_header(Some(&ctx.p("Bean")), &self_ty));
    w.open(format!("fn meta_bean(&self) -> {arc}<dyn {}> {{", ctx.p("MetaBean")));
    w.line("Self::meta()");
    w.close("}");
    w.blank();
    w.open(format!("fn clone_bean(&self) -> Box<dyn {}> {{", ctx.p("Bean")));
    w.line("Box::new(self.clone())");
    w.close("}");
    w.close("}");
    w.blank();

    let meta_ty = match bean.style {
        BeanStyle::Light => ctx.p("LightMetaBean"),
        BeanStyle::Minimal => ctx.p("MinimalMetaBean"),
        _ => bean.meta_ty()
    };
    w.open(ctx.impl_header(Some(&ctx.p("BeanDefinition")), &self_ty));
    w.line(format!("type Meta = {meta_ty};"));
    w.blank();
    w.open(format!("fn meta() -> {arc}<Self::Meta> {{"));
    w.line("Self::meta()");
    w.close("}");
    w.close("}");
    w.blank();

    if bean.has_builder() {
        w.open(ctx.impl_header(Some(&ctx.p("ImmutableBean")), &self_ty));
        w.line(format!("type Builder = {};", bean.builder_ty()));
        w.blank();
        w.open("fn builder() -> Self::Builder {");
        w.line("Self::builder()");
        w.close("}");
        w.blank();
        w.open("fn to_builder(&self) -> Self::Builder {");
        w.line("Self::to_builder(self)");
        w.close("}");
        w.close("}");
        w.blank();
    }

    let property_type = ctx.p("PropertyType");
    let type_info = ctx.p("TypeInfo");
    w.open(ctx.impl_header(Some(&property_type), &self_ty));
    w.open(format!("fn type_info() -> {arc}<{type_info}> {{"));
    w.line(format!("let name = {};", ctx.full_name()));
    w.line(format!("{}::intern(", ctx.p("types")));
    w.indent();
    w.line(format!("{type_info}::class(name)"));
    w.indent();
    for param in bean.param_names() {
        w.line(format!(".with_param({param:?})"));
    }
    if let Some(parent) = &bean.parent {
        w.line(format!(".with_supertype({})", ctx.generic_type(&parent.ty, "name")));
    }
    w.dedent();
    w.dedent();
    w.line(")");
    w.close("}");
    if !bean.params.is_empty() {
        let resolved = ctx.p("ResolvedType");
        let args: Vec<String> = bean
            .param_names()
            .iter()
            .map(|param| format!("<{param} as {property_type}>::resolved_type()"))
            .collect();
        w.blank();
        w.open(format!("fn resolved_type() -> {resolved} {{"));
        w.line(format!("{resolved}::of(Self::type_info(), vec![{}])", args.join(", ")));
        w.indent();
        w.line(format!(".unwrap_or_else(|_| {resolved}::of_raw(Self::type_info()))"));
        w.dedent();
        w.close("}");
    }
    w.blank();
    w.open(format!("fn to_value(&self) -> {} {{", ctx.p("Value")));
    w.line(format!("{}::bean(self.clone())", ctx.p("Value")));
    w.close("}");
    w.blank();
    w.open(format!("fn from_value(value: {}) -> Result<Self, {error}> {{", ctx.p("Value")));
    w.line("value.into_typed_bean()");
    w.close("}");
    w.close("}");
    w
}

/// `Clone`, `PartialEq`, `Eq`, `Hash` and `Display`, as enabled.
pub fn object_impls(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let mut w = SourceWriter::new();
    if bean.clone {
        clone_impl(ctx, &mut w);
    }
    if bean.partial_eq {
        partial_eq_impl(ctx, &mut w);
    }
    if bean.eq {
        w.line(format!("{}}}", ctx.impl_header(Some("Eq"), &bean.self_ty())));
        w.blank();
    }
    if bean.hash {
        hash_impl(ctx, &mut w);
    }
    if bean.display {
        display_impl(ctx, &mut w);
    }
    w
}

fn clone_impl(ctx: &GenContext<'_>, w: &mut SourceWriter) {
    let bean = ctx.bean;
    w.open(ctx.impl_header(Some("Clone"), &bean.self_ty()));
    w.open("fn clone(&self) -> Self {");
    w.open("Self {");
    let last = bean.fields.len().saturating_sub(1);
    for (index, field) in bean.fields.iter().enumerate() {
        let comma = if index == last { "" } else { "," };
        w.line(format!("{field}: self.{field}.clone(){comma}"));
    }
    w.close("}");
    w.close("}");
    w.close("}");
    w.blank();
}

fn partial_eq_impl(ctx: &GenContext<'_>, w: &mut SourceWriter) {
    let bean = ctx.bean;
    let property_type = ctx.p("PropertyType");
    let mut terms: Vec<String> = Vec::new();
    if let Some(parent) = &bean.parent {
        terms.push(format!("self.{0} == other.{0}", parent.field));
    }
    for prop in &bean.properties {
        let field = &prop.field;
        match (prop.equals, prop.exposed) {
            (PartStyle::Omit, _) => {}
            (PartStyle::Field, _) | (PartStyle::Smart, true) => {
                terms.push(format!("self.{field} == other.{field}"));
            }
            (PartStyle::Smart, false) => {
                terms.push(format!("{property_type}::equal(&self.{field}, &other.{field})"));
            }
        }
    }
    w.open(ctx.impl_header(Some("PartialEq"), &bean.self_ty()));
    match terms.split_first() {
        None => {
            w.open("fn eq(&self, _other: &Self) -> bool {");
            w.line("true");
        }
        Some((first, rest)) => {
            w.open("fn eq(&self, other: &Self) -> bool {");
            w.line(first.as_str());
            w.indent();
            for term in rest {
                w.line(format!("&& {term}"));
            }
            w.dedent();
        }
    }
    w.close("}");
    w.close("}");
    w.blank();
}

fn hash_impl(ctx: &GenContext<'_>, w: &mut SourceWriter) {
    let bean = ctx.bean;
    let property_type = ctx.p("PropertyType");
    let hasher = if bean.cache_hash_code { "&mut hasher" } else { "state" };
    let mut statements: Vec<String> = Vec::new();
    if let Some(parent) = &bean.parent {
        statements.push(format!("::std::hash::Hash::hash(&self.{}, {hasher});", parent.field));
    }
    for prop in &bean.properties {
        let field = &prop.field;
        match (prop.equals, prop.exposed) {
            (PartStyle::Omit, _) => {}
            (PartStyle::Field, _) | (PartStyle::Smart, true) => {
                statements.push(format!("::std::hash::Hash::hash(&self.{field}, {hasher});"));
            }
            (PartStyle::Smart, false) => {
                statements.push(format!("{property_type}::hash_code(&self.{field}, {hasher});"));
            }
        }
    }

    w.open(ctx.impl_header(Some("::std::hash::Hash"), &bean.self_ty()));
    if bean.cache_hash_code {
        w.open("fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {");
        w.open("let code = *self.hash_cache.get_or_init(|| {");
        w.line("let mut hasher = ::std::hash::DefaultHasher::new();");
        for statement in statements {
            w.line(statement);
        }
        w.line("::std::hash::Hasher::finish(&hasher)");
        w.close("});");
        w.line("::std::hash::Hasher::write_u64(state, code);");
    } else if statements.is_empty() {
        w.open("fn hash<H: ::std::hash::Hasher>(&self, _state: &mut H) {");
    } else {
        w.open("fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {");
        for statement in statements {
            w.line(statement);
        }
    }
    w.close("}");
    w.close("}");
    w.blank();
}

fn display_impl(ctx: &GenContext<'_>, w: &mut SourceWriter) {
    let bean = ctx.bean;
    w.open(ctx.impl_header(Some("::std::fmt::Display"), &bean.self_ty()));
    w.open("fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {");
    w.line(format!("{}::ToStringBuilder::new(f, {})", ctx.p("utils"), ctx.name_literal()));
    w.indent();
    if let Some(parent) = &bean.parent {
        w.line(format!(".parent(&self.{})", parent.field));
    }
    for prop in &bean.properties {
        let name = &prop.name;
        let field = &prop.field;
        if !prop.getter.is_readable() {
            w.line(format!(".hidden({name:?})"));
            continue;
        }
        match (prop.to_string, prop.exposed) {
            (PartStyle::Omit, _) => {}
            (PartStyle::Field, _) => {
                w.line(format!(
                    ".value({name:?}, &{}::String(format!(\"{{:?}}\", self.{field})))",
                    ctx.p("Value")
                ));
            }
            (PartStyle::Smart, true) => {
                w.line(format!(".field({name:?}, &<{}>::from(self.{field}.clone()))", prop.ty));
            }
            (PartStyle::Smart, false) => {
                w.line(format!(".field({name:?}, &self.{field})"));
            }
        }
    }
    for derived in &bean.derived {
        w.line(format!(".field({:?}, &self.{}())", derived.name, ident(&derived.name)));
    }
    w.line(".finish()");
    w.dedent();
    w.close("}");
    w.close("}");
}
