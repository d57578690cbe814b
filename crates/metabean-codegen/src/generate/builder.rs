// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed builder of an immutable bean.

use super::{GenContext, expr_ty, ident, meta::push_comma_list};
use crate::{
    model::{BuilderField, PropertyData},
    writer::SourceWriter
};

/// The `<Name>Builder` struct with its fluent API and builder impls.
pub fn builder_struct(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let self_ty = bean.self_ty();
    let builder_ty = bean.builder_ty();
    let error = ctx.p("BeanError");
    let mut w = SourceWriter::new();

    w.doc(&format!("Builder of [`{}`].", bean.name));
    w.open(format!(
        "{}struct {}{}{} {{",
        bean.builder_vis,
        bean.builder_name(),
        ctx.impl_generics(),
        bean.where_text()
    ));
    let mut fields: Vec<String> = properties(ctx)
        .map(|(prop, field)| format!("{}: {}", prop.field, field.declared_type()))
        .collect();
    if let Some(parent) = &bean.parent {
        fields.push(format!("{}: {}", parent.field, parent_builder(ctx)));
    }
    if !bean.params.is_empty() {
        fields.push(format!("_marker: ::std::marker::PhantomData<fn() -> {self_ty}>"));
    }
    push_comma_list(&mut w, &fields);
    w.close("}");
    w.blank();

    w.open(ctx.impl_header(None, &builder_ty));
    w.open("fn new() -> Self {");
    w.open("Self {");
    let mut inits: Vec<String> = properties(ctx)
        .map(|(prop, field)| format!("{}: {}", prop.field, field.initial()))
        .collect();
    if let Some(parent) = &bean.parent {
        inits.push(format!(
            "{}: <{} as {}>::builder()",
            parent.field,
            parent.ty_text(),
            ctx.p("ImmutableBean")
        ));
    }
    if !bean.params.is_empty() {
        inits.push("_marker: ::std::marker::PhantomData".to_owned());
    }
    push_comma_list(&mut w, &inits);
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("fn from_bean(bean: &{self_ty}) -> Self {{"));
    w.open("Self {");
    let mut copies: Vec<String> = properties(ctx)
        .map(|(prop, field)| {
            format!(
                "{}: {}",
                prop.field,
                field.copy_from_bean(&format!("bean.{}", prop.field))
            )
        })
        .collect();
    if let Some(parent) = &bean.parent {
        copies.push(format!(
            "{0}: <{1} as {2}>::to_builder(&bean.{0})",
            parent.field,
            parent.ty_text(),
            ctx.p("ImmutableBean")
        ));
    }
    if !bean.params.is_empty() {
        copies.push("_marker: ::std::marker::PhantomData".to_owned());
    }
    push_comma_list(&mut w, &copies);
    w.close("}");
    w.close("}");

    for (prop, field) in properties(ctx) {
        w.blank();
        w.doc(&format!("Sets the `{}` property.", prop.name));
        w.open(format!(
            "pub fn {}(mut self, {}: {}) -> Self {{",
            ident(&prop.name),
            prop.field,
            field.param
        ));
        w.line(format!("self.{} = {};", prop.field, field.store(&prop.field)));
        w.line("self");
        w.close("}");
    }
    if let Some(parent) = &bean.parent {
        w.blank();
        w.doc(&format!("Copies every property of the embedded `{}`.", parent.ty_text()));
        w.open(format!(
            "pub fn {0}(mut self, {0}: {1}) -> Self {{",
            parent.field,
            parent.ty_text()
        ));
        w.line(format!(
            "self.{0} = <{1} as {2}>::to_builder(&{0});",
            parent.field,
            parent.ty_text(),
            ctx.p("ImmutableBean")
        ));
        w.line("self");
        w.close("}");
    }

    w.blank();
    w.doc("Builds the bean, validating every property.");
    w.doc("");
    w.doc("# Errors");
    w.doc("");
    w.doc("Returns a validation error when a required property was never set or a");
    w.doc("value is rejected.");
    w.open(format!("pub fn build(self) -> Result<{self_ty}, {error}> {{"));
    w.open(format!("{}::from_properties(", expr_ty(&self_ty)));
    let mut args: Vec<String> = properties(ctx)
        .map(|(prop, field)| {
            let missing = format!("{error}::validation({:?}, \"no value supplied\")", prop.name);
            field.build_value(&format!("self.{}", prop.field), &missing)
        })
        .collect();
    if let Some(parent) = &bean.parent {
        args.push(format!(
            "<{} as {}<{}>>::build_typed(self.{})?",
            parent_builder(ctx),
            ctx.p("TypedBeanBuilder"),
            parent.ty_text(),
            parent.field
        ));
    }
    push_comma_list(&mut w, &args);
    w.close(")");
    w.close("}");
    w.close("}");
    w.blank();

    dynamic_impl(ctx, &mut w);
    w.blank();

    w.open(ctx.impl_header(
        Some(&format!("{}<{self_ty}>", ctx.p("TypedBeanBuilder"))),
        &builder_ty
    ));
    w.open(format!("fn build_typed(self) -> Result<{self_ty}, {error}> {{"));
    w.line("Self::build(self)");
    w.close("}");
    w.close("}");
    w
}

/// `impl BeanBuilder`, canonicalising names through the meta-bean.
fn dynamic_impl(ctx: &GenContext<'_>, w: &mut SourceWriter) {
    let bean = ctx.bean;
    let self_ty = bean.self_ty();
    let error = ctx.p("BeanError");
    let value_ty = ctx.p("Value");
    let meta_bean = ctx.p("MetaBean");
    let meta_property = ctx.p("MetaProperty");
    let property_type = ctx.p("PropertyType");
    let bean_builder = ctx.p("BeanBuilder");
    let lookup = [
        format!("let meta = {}::meta();", expr_ty(&self_ty)),
        format!("let property = {meta_bean}::meta_property(&*meta, name)?;")
    ];
    let unknown = format!("{error}::no_such_property({meta_bean}::bean_name(&*meta), name)");
    let own = !bean.properties.is_empty();

    w.open(ctx.impl_header(Some(&bean_builder), &bean.builder_ty()));

    w.open(format!("fn get(&self, name: &str) -> Result<{value_ty}, {error}> {{"));
    if own {
        for line in &lookup {
            w.line(line.as_str());
        }
        w.open(format!("match {meta_property}::name(&*property) {{"));
        for (prop, field) in properties(ctx) {
            let access = format!("self.{}", prop.field);
            let read = match (prop.exposed, field.is_required()) {
                (true, true) => format!(
                    "{access}.as_ref().map_or({value_ty}::Null, |v| {property_type}::to_value(&<{}>::from(v.clone())))",
                    prop.ty
                ),
                (true, false) => format!(
                    "{property_type}::to_value(&<{}>::from({access}.clone()))",
                    prop.ty
                ),
                (false, true) => {
                    format!("{access}.as_ref().map_or({value_ty}::Null, {property_type}::to_value)")
                }
                (false, false) => format!("{property_type}::to_value(&{access})")
            };
            w.line(format!("{:?} => Ok({read}),", prop.name));
        }
        match &bean.parent {
            Some(parent) => w.line(format!("_ => {bean_builder}::get(&self.{}, name)", parent.field)),
            None => w.line(format!("_ => Err({unknown})"))
        };
        w.close("}");
    } else {
        match &bean.parent {
            Some(parent) => w.line(format!("{bean_builder}::get(&self.{}, name)", parent.field)),
            None => {
                w.line(format!("let meta = {}::meta();", expr_ty(&self_ty)));
                w.line(format!("Err({unknown})"))
            }
        };
    }
    w.close("}");
    w.blank();

    w.open(format!(
        "fn set(&mut self, name: &str, value: {value_ty}) -> Result<(), {error}> {{"
    ));
    if own {
        for line in &lookup {
            w.line(line.as_str());
        }
        w.open(format!("match {meta_property}::name(&*property) {{"));
        for (prop, field) in properties(ctx) {
            let decoded = if prop.exposed {
                format!("<{} as {property_type}>::from_value(value)?.into()", prop.ty)
            } else {
                format!("{property_type}::from_value(value)?")
            };
            let stored = if field.is_required() {
                format!("Some({decoded})")
            } else {
                decoded
            };
            w.line(format!("{:?} => self.{} = {stored},", prop.name, prop.field));
        }
        match &bean.parent {
            Some(parent) => w.line(format!(
                "_ => return {bean_builder}::set(&mut self.{}, name, value)",
                parent.field
            )),
            None => w.line(format!("_ => return Err({unknown})"))
        };
        w.close("}");
        w.line("Ok(())");
    } else {
        match &bean.parent {
            Some(parent) => {
                w.line(format!("{bean_builder}::set(&mut self.{}, name, value)", parent.field))
            }
            None => {
                w.line("let _ = value;");
                w.line(format!("let meta = {}::meta();", expr_ty(&self_ty)));
                w.line(format!("Err({unknown})"))
            }
        };
    }
    w.close("}");
    w.blank();

    w.open(format!(
        "fn build(self: Box<Self>) -> Result<Box<dyn {}>, {error}> {{",
        ctx.p("Bean")
    ));
    w.line("Ok(Box::new(Self::build(*self)?))");
    w.close("}");
    w.close("}");
}

/// `<Parent as ImmutableBean>::Builder`
fn parent_builder(ctx: &GenContext<'_>) -> String {
    ctx.bean
        .parent
        .as_ref()
        .map(|parent| format!("<{} as {}>::Builder", parent.ty_text(), ctx.p("ImmutableBean")))
        .unwrap_or_default()
}

fn properties<'a>(
    ctx: &'a GenContext<'_>
) -> impl Iterator<Item = (&'a PropertyData, &'a BuilderField)> {
    ctx.bean
        .properties
        .iter()
        .filter_map(|prop| prop.builder.as_ref().map(|field| (prop, field)))
}
