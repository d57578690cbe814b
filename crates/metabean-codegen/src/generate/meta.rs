// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Meta-bean generation.
//!
//! `smart` and `full` beans get a typed `<Name>Meta` struct with one field
//! per meta-property. `light` and `minimal` beans build a table meta-bean
//! inline in `meta()`.

use super::{GenContext, expr_ty, ident};
use crate::{
    model::{DerivedData, PropertyData},
    parse::BeanStyle,
    writer::SourceWriter
};

/// The inherent `meta()` function.
pub fn meta_fn(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let mut w = SourceWriter::new();
    let static_meta = ctx.p("registry::static_meta");
    w.doc(&format!("Returns the meta-bean of `{}`.", bean.name));
    match bean.style {
        BeanStyle::Smart | BeanStyle::Full => {
            let meta_ty = bean.meta_ty();
            w.open(format!("{}fn meta() -> {}<{meta_ty}> {{", bean.meta_vis, ctx.arc()));
            w.line(format!("{static_meta}::<Self, {meta_ty}>({}::new)", expr_ty(&meta_ty)));
            w.close("}");
        }
        BeanStyle::Light | BeanStyle::Minimal => {
            let table = if bean.style == BeanStyle::Light {
                ctx.p("LightMetaBean")
            } else {
                ctx.p("MinimalMetaBean")
            };
            w.open(format!("{}fn meta() -> {}<{table}> {{", bean.meta_vis, ctx.arc()));
            w.open(format!("{static_meta}::<Self, {table}>(|| {{"));
            bean_type_line(ctx, &mut w, "Self");
            let props = all_properties(ctx, "Self")
                .into_iter()
                .map(|(_, expr)| {
                    let mut arg = SourceWriter::new();
                    arg.open(format!("{}::new(", ctx.arc()));
                    arg.append(expr);
                    arg.close(")");
                    arg
                })
                .collect();
            map_lines(ctx, &mut w, "Self", props);
            if bean.style == BeanStyle::Light {
                light_constructor(ctx, &mut w, &table);
            } else {
                minimal_constructor(ctx, &mut w, &table);
            }
            if !bean.tags.is_empty() {
                w.line(format!(".with_annotations({})", ctx.annotations(&bean.tags)));
            }
            w.close("})");
            w.close("}");
        }
    }
    w
}

/// The `<Name>Meta` struct with its constructor, accessors and `MetaBean` impl.
pub fn meta_struct(ctx: &GenContext<'_>) -> SourceWriter {
    let bean = ctx.bean;
    let self_ty = bean.self_ty();
    let arc = ctx.arc();
    let direct = ctx.p("DirectMetaProperty");
    let props = all_properties(ctx, &self_ty);
    let mut w = SourceWriter::new();

    w.doc(&format!("Meta-bean of [`{}`].", bean.name));
    w.open(format!(
        "{}struct {}{}{} {{",
        bean.meta_vis,
        bean.meta_name(),
        ctx.impl_generics(),
        bean.where_text()
    ));
    w.line(format!("bean_type: {},", ctx.p("BeanType")));
    w.line(format!("map: {},", ctx.p("MetaPropertyMap")));
    let mut fields = vec![format!("annotations: Vec<{}>", ctx.p("Annotation"))];
    for (name, ty) in typed_properties(ctx) {
        fields.push(format!("{}: {arc}<{direct}<{self_ty}, {ty}>>", ident(&name)));
    }
    if !bean.params.is_empty() {
        fields.push(format!("_marker: ::std::marker::PhantomData<fn() -> {self_ty}>"));
    }
    push_comma_list(&mut w, &fields);
    w.close("}");
    w.blank();

    w.open(ctx.impl_header(None, &bean.meta_ty()));
    w.open("fn new() -> Self {");
    bean_type_line(ctx, &mut w, &self_ty);
    for (name, expr) in props {
        w.open(format!("let {} = {arc}::new(", ident(&name)));
        w.append(expr);
        w.close(");");
    }
    let args = typed_properties(ctx)
        .into_iter()
        .map(|(name, _)| {
            let mut arg = SourceWriter::new();
            arg.line(format!("{}.clone()", ident(&name)));
            arg
        })
        .collect();
    map_lines(ctx, &mut w, &self_ty, args);
    w.open("Self {");
    let mut inits = vec![
        "bean_type".to_owned(),
        "map".to_owned(),
        format!("annotations: {}", ctx.annotations(&bean.tags))
    ];
    inits.extend(typed_properties(ctx).into_iter().map(|(name, _)| ident(&name)));
    if !bean.params.is_empty() {
        inits.push("_marker: ::std::marker::PhantomData".to_owned());
    }
    push_comma_list(&mut w, &inits);
    w.close("}");
    w.close("}");
    for (name, ty) in typed_properties(ctx) {
        w.blank();
        w.doc(&format!("The `{name}` meta-property."));
        w.open(format!(
            "{}fn {}(&self) -> &{arc}<{direct}<{self_ty}, {ty}>> {{",
            bean.meta_vis,
            ident(&name)
        ));
        w.line(format!("&self.{}", ident(&name)));
        w.close("}");
    }
    w.close("}");
    w.blank();

    let error = ctx.p("BeanError");
    w.open(ctx.impl_header(Some(&ctx.p("MetaBean")), &bean.meta_ty()));
    w.open(format!("fn bean_type(&self) -> &{} {{", ctx.p("BeanType")));
    w.line("&self.bean_type");
    w.close("}");
    w.blank();
    w.open(format!("fn meta_property_map(&self) -> &{} {{", ctx.p("MetaPropertyMap")));
    w.line("&self.map");
    w.close("}");
    w.blank();
    w.open(format!("fn builder(&self) -> Result<Box<dyn {}>, {error}> {{", ctx.p("BeanBuilder")));
    if bean.immutable {
        w.line(format!("Ok(Box::new({}::builder()))", expr_ty(&self_ty)));
    } else {
        w.line(format!(
            "Ok(Box::new({}::new(<{self_ty} as Default>::default())))",
            ctx.p("BasicBeanBuilder")
        ));
    }
    w.close("}");
    w.blank();
    w.open(format!("fn annotations(&self) -> &[{}] {{", ctx.p("Annotation")));
    w.line("&self.annotations");
    w.close("}");
    w.close("}");
    w
}

/// `let bean_type = BeanType::new::<B>(...);`
fn bean_type_line(ctx: &GenContext<'_>, w: &mut SourceWriter, bean_ty: &str) {
    w.line(format!(
        "let bean_type = {}::new::<{bean_ty}>(<{bean_ty} as {}>::type_info());",
        ctx.p("BeanType"),
        ctx.p("PropertyType")
    ));
}

/// Names and types of every own meta-property, stored then derived.
fn typed_properties(ctx: &GenContext<'_>) -> Vec<(String, String)> {
    let bean = ctx.bean;
    bean.properties
        .iter()
        .map(|p| (p.name.clone(), p.ty.clone()))
        .chain(bean.derived.iter().map(|d| (d.name.clone(), d.ty.clone())))
        .collect()
}

/// Meta-property constructor expressions, stored then derived.
fn all_properties(ctx: &GenContext<'_>, bean_ty: &str) -> Vec<(String, SourceWriter)> {
    let bean = ctx.bean;
    bean.properties
        .iter()
        .map(|prop| (prop.name.clone(), stored_property(ctx, bean_ty, prop)))
        .chain(
            bean.derived
                .iter()
                .map(|derived| (derived.name.clone(), derived_property(ctx, bean_ty, derived)))
        )
        .collect()
}

fn stored_property(ctx: &GenContext<'_>, bean_ty: &str, prop: &PropertyData) -> SourceWriter {
    let bean = ctx.bean;
    let readable = prop.getter.is_readable();
    let writable = prop.setter.is_writable();
    let style = match (bean.immutable, readable, writable) {
        (true, ..) => "Immutable",
        (false, true, true) => "ReadWrite",
        (false, false, true) => "WriteOnly",
        (false, ..) => "ReadOnly"
    };
    let mut w = SourceWriter::new();
    w.line(format!(
        "{}::<{bean_ty}, {}>::new({:?}, bean_type.clone(), {}::{style})",
        ctx.p("DirectMetaProperty"),
        prop.ty,
        prop.name,
        ctx.p("PropertyStyle")
    ));
    w.indent();
    if prop.generic {
        w.line(format!(
            ".with_generic_type({})",
            ctx.generic_type(&prop.prop_type(), "bean_type.name()")
        ));
    }
    for tag in &prop.tags {
        w.line(format!(".with_annotation({})", ctx.annotation(tag)));
    }
    if let Some(read) = prop.getter.meta_read(&prop.ty, &prop.field, &ident(&prop.name)) {
        w.line(format!(".with_getter(|bean| {read})"));
    }
    let validation = prop
        .validation
        .as_ref()
        .map(|rule| ctx.validation(rule, "value", &prop.name));
    if let Some(body) = prop.setter.meta_write(
        &prop.field,
        &prop.setter_name(),
        validation.as_deref(),
        prop.setter_is_fallible(),
        prop.exposed
    ) {
        if let [single] = body.as_slice() {
            w.line(format!(".with_setter(|bean, value| {single})"));
        } else {
            w.open(".with_setter(|bean, value| {");
            for line in body {
                w.line(line);
            }
            w.close("})");
        }
    }
    w.dedent();
    w
}

fn derived_property(ctx: &GenContext<'_>, bean_ty: &str, derived: &DerivedData) -> SourceWriter {
    let mut w = SourceWriter::new();
    w.line(format!(
        "{}::<{bean_ty}, {}>::new({:?}, bean_type.clone(), {}::Derived)",
        ctx.p("DirectMetaProperty"),
        derived.ty,
        derived.name,
        ctx.p("PropertyStyle")
    ));
    w.indent();
    if derived.generic
        && let Some(ty) = derived.prop_type()
    {
        w.line(format!(
            ".with_generic_type({})",
            ctx.generic_type(&ty, "bean_type.name()")
        ));
    }
    w.line(format!(".with_getter(|bean| bean.{}())", ident(&derived.name)));
    w.dedent();
    w
}

/// `let map = MetaPropertyMap::builder(..)...build()...;`
fn map_lines(ctx: &GenContext<'_>, w: &mut SourceWriter, bean_ty: &str, props: Vec<SourceWriter>) {
    let bean = ctx.bean;
    w.line(format!(
        "let map = {}::builder(bean_type.name())",
        ctx.p("MetaPropertyMap")
    ));
    w.indent();
    if let Some(parent) = &bean.parent {
        let parent_ty = parent.ty_text();
        w.open(format!(
            ".inherit({}::meta_property_map(&*<{parent_ty} as {}>::meta()), |inner| {{",
            ctx.p("MetaBean"),
            ctx.p("BeanDefinition")
        ));
        w.open(format!(
            "{}::new({}::<{bean_ty}>::new(",
            ctx.arc(),
            ctx.p("InheritedMetaProperty")
        ));
        w.line("inner,");
        w.line("bean_type.clone(),");
        w.line(format!("|bean| &bean.{},", parent.field));
        w.line(format!("|bean| &mut bean.{}", parent.field));
        w.close("))");
        w.close("})");
    }
    for prop in props {
        if let Some(text) = prop.single_line() {
            w.line(format!(".property({text})"));
        } else {
            w.open(".property(");
            w.append(prop);
            w.close(")");
        }
    }
    for prop in &bean.properties {
        if let Some(alias) = &prop.alias {
            w.line(format!(".alias({alias:?}, {:?})", prop.name));
        }
    }
    w.line(".build()");
    w.line(format!(
        ".unwrap_or_else(|err| panic!(\"invalid {} properties: {{err}}\"));",
        bean.name
    ));
    w.dedent();
}

fn light_constructor(ctx: &GenContext<'_>, w: &mut SourceWriter, table: &str) {
    let bean = ctx.bean;
    if bean.properties.is_empty() {
        w.line(format!(
            "{table}::new(bean_type, map, |_| Ok(Box::new(Self::from_properties()?)))"
        ));
        return;
    }
    w.open(format!("{table}::new(bean_type, map, |mut args| {{"));
    w.open("Ok(Box::new(Self::from_properties(");
    let last = bean.properties.len() - 1;
    for (index, prop) in bean.properties.iter().enumerate() {
        let comma = if index == last { "" } else { "," };
        let name = &prop.name;
        let take = if prop.exposed {
            format!("<{}>::from(args.take::<{}>({name:?})?)", prop.field_ty_text(), prop.ty)
        } else if prop.builder.as_ref().is_some_and(|b| b.init.is_some()) {
            format!("args.take_or_default({name:?})?")
        } else {
            format!("args.take({name:?})?")
        };
        w.line(format!("{take}{comma}"));
    }
    w.close(")?))");
    w.close("})");
}

fn minimal_constructor(ctx: &GenContext<'_>, w: &mut SourceWriter, table: &str) {
    let bean = ctx.bean;
    let supplier = if bean.immutable {
        "Box::new(Self::builder())".to_owned()
    } else {
        format!(
            "Box::new({}::new(<Self as Default>::default()))",
            ctx.p("BasicBeanBuilder")
        )
    };
    w.line(format!(
        "{table}::new(bean_type, map, Some(|| -> Box<dyn {}> {{ {supplier} }}))",
        ctx.p("BeanBuilder")
    ));
}

/// Lines joined with commas, the last one without.
pub(super) fn push_comma_list(w: &mut SourceWriter, items: &[String]) {
    let last = items.len().saturating_sub(1);
    for (index, item) in items.iter().enumerate() {
        let comma = if index == last { "" } else { "," };
        w.line(format!("{item}{comma}"));
    }
}
