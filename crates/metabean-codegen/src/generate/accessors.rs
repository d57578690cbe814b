// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Inherent `impl` block of the bean.

use super::{GenContext, expr_ty, ident, meta};
use crate::{model::PropertyData, writer::SourceWriter};

/// Generate `impl Name { ... }`.
pub fn inherent_impl(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let mut w = SourceWriter::new();
    w.open(ctx.impl_header(None, &bean.self_ty()));
    w.append(meta::meta_fn(ctx));

    if bean.has_builder() {
        w.blank();
        w.doc("Returns a builder with every property at its initial value.");
        w.open(format!("{}fn builder() -> {} {{", bean.builder_vis, bean.builder_ty()));
        w.line(format!("{}::new()", expr_ty(&bean.builder_ty())));
        w.close("}");
        w.blank();
        w.doc("Returns a builder holding a copy of this bean.");
        w.open(format!("{}fn to_builder(&self) -> {} {{", bean.builder_vis, bean.builder_ty()));
        w.line(format!("{}::from_bean(self)", expr_ty(&bean.builder_ty())));
        w.close("}");
    }

    if bean.immutable {
        w.blank();
        w.doc("Creates the bean from its property values after validating them.");
        w.doc("");
        w.doc("# Errors");
        w.doc("");
        w.doc("Returns a validation error when a property value is rejected.");
        w.append(constructor(ctx, &bean.constructor_vis, "from_properties"));
    }

    if let Some(factory) = &bean.factory {
        w.blank();
        w.doc(&format!("Creates a `{}` from its property values.", bean.name));
        w.doc("");
        w.doc("# Errors");
        w.doc("");
        w.doc("Returns a validation error when a property value is rejected.");
        if bean.immutable {
            let args = constructor_args(ctx);
            w.open(format!(
                "pub fn {factory}({}) -> Result<Self, {}> {{",
                params(ctx).join(", "),
                ctx.p("BeanError")
            ));
            w.line(format!("Self::from_properties({})", args.join(", ")));
            w.close("}");
        } else {
            w.append(constructor(ctx, "pub ", factory));
        }
    }

    for prop in &bean.properties {
        getter(&mut w, prop);
        setter(ctx, &mut w, prop);
    }
    w.close("}");
    w
}

/// Parameters of the constructor: properties then the parent.
fn params(ctx: &GenContext<'_>) -> Vec<String> {
    let bean = ctx.bean;
    let mut params: Vec<String> = bean
        .properties
        .iter()
        .map(|prop| format!("{}: {}", prop.field, prop.field_ty_text()))
        .collect();
    if let Some(parent) = &bean.parent {
        params.push(format!("{}: {}", parent.field, parent.ty_text()));
    }
    params
}

fn constructor_args(ctx: &GenContext<'_>) -> Vec<String> {
    let bean = ctx.bean;
    let mut args: Vec<String> = bean.properties.iter().map(|p| p.field.clone()).collect();
    if let Some(parent) = &bean.parent {
        args.push(parent.field.clone());
    }
    args
}

/// Validating constructor named `name`.
fn constructor(ctx: &GenContext<'_>, vis: &str, name: &str) -> SourceWriter {
    let bean = ctx.bean;
    let params = params(ctx);
    let mut w = SourceWriter::new();
    if params.len() > 7 {
        w.line("#[allow(clippy::too_many_arguments)]");
    }
    w.open(format!(
        "{vis}fn {name}({}) -> Result<Self, {}> {{",
        params.join(", "),
        ctx.p("BeanError")
    ));
    for prop in &bean.properties {
        if let Some(rule) = &prop.validation {
            w.line(ctx.validation(rule, &prop.field, &prop.name));
        }
    }
    w.open("Ok(Self {");
    let mut fields: Vec<String> = constructor_args(ctx);
    fields.extend(bean.plain_fields().into_iter().map(|f| format!("{f}: Default::default()")));
    let last = fields.len().saturating_sub(1);
    for (index, field) in fields.iter().enumerate() {
        let comma = if index == last { "" } else { "," };
        w.line(format!("{field}{comma}"));
    }
    w.close("})");
    w.close("}");
    w
}

fn getter(w: &mut SourceWriter, prop: &PropertyData) {
    let Some((ret, body)) = prop.getter.method(&prop.ty, &prop.field) else {
        return;
    };
    w.blank();
    w.doc(&prop.getter_doc());
    w.open(format!("pub fn {}(&self) -> {ret} {{", ident(&prop.name)));
    w.line(body);
    w.close("}");
}

fn setter(ctx: &GenContext<'_>, w: &mut SourceWriter, prop: &PropertyData) {
    if !prop.setter.has_method() {
        return;
    }
    let param = &prop.field;
    let fallible = prop.setter_is_fallible();
    let ret = if fallible {
        format!(" -> Result<(), {}>", ctx.p("BeanError"))
    } else {
        String::new()
    };
    w.blank();
    w.doc(&prop.setter_doc());
    if fallible {
        w.doc("");
        w.doc("# Errors");
        w.doc("");
        w.doc("Returns a validation error when the value is rejected.");
    }
    w.open(format!("pub fn {}(&mut self, {param}: {}){ret} {{", prop.setter_name(), prop.ty));
    if let Some(rule) = &prop.validation {
        w.line(ctx.validation(rule, param, &prop.name));
    }
    for statement in prop.setter.method_body(&prop.field, param, prop.exposed) {
        w.line(statement);
    }
    if fallible {
        w.line("Ok(())");
    }
    w.close("}");
}
