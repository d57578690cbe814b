// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source generation for one bean.
//!
//! # Pipeline
//!
//! ```text
//! DeriveInput ─► BeanDef ─► validate ─► BeanData ─► generate ─► SourceWriter
//! ```
//!
//! # Output
//!
//! | Item | Emitted for |
//! |------|-------------|
//! | inherent `impl` with `meta`, accessors, `from_properties`, factory | every bean |
//! | `<Name>Meta` struct | `smart`, `full` |
//! | `<Name>Builder` struct | immutable `smart`, `full`, `minimal` |
//! | `Bean`, `BeanDefinition`, `PropertyType` | every bean |
//! | `ImmutableBean` | beans with a typed builder |
//! | `Clone`, `PartialEq`, `Eq`, `Hash`, `Display` | unless supplied by the bean |
//!
//! In [`Mode::Derive`] only `full` beans get `Clone`, `PartialEq`, `Eq` and
//! `Hash`; other styles derive them next to `Bean`. A cached hash code keeps
//! the generated `PartialEq`, `Eq` and `Hash` in every style.

mod accessors;
mod builder;
mod context;
mod meta;
mod traits;


pub use context::{GenContext, Mode, RUNTIME_CRATE};
use syn::DeriveInput;

use crate::{
    config::GenSettings,
    model::BeanData,
    parse::{BeanDef, BeanStyle, CloneStyle},
    validate::validate,
    writer::SourceWriter
};

/// Generated items and the runtime names they use.
#[derive(Debug)]
pub struct Generated {
    /// Generated items.
    pub code:    SourceWriter,
    /// Runtime names to import, empty in [`Mode::Derive`].
    pub imports: Vec<&'static str>
}

/// Generate every item for `bean`.
pub fn generate(bean: &BeanData, mode: Mode) -> Generated {
    let ctx = GenContext::new(bean, mode);
    let mut code = SourceWriter::new();
    code.append(accessors::inherent_impl(&ctx));
    if bean.style.has_meta_struct() {
        code.blank().append(meta::meta_struct(&ctx));
    }
    if bean.has_builder() {
        code.blank().append(builder::builder_struct(&ctx));
    }
    code.blank().append(traits::bean_impls(&ctx));
    code.blank().append(traits::object_impls(&ctx));
    Generated {
        code,
        imports: ctx.used()
    }
}

/// Parse, validate, resolve and generate in one step.
///
/// `supplied` lists traits implemented by hand elsewhere, which count as
/// derived for `smart` beans.
///
/// # Errors
///
/// Returns all attribute and structural errors found.
pub fn render(
    input: &DeriveInput,
    supplied: &[String],
    settings: &GenSettings,
    mode: Mode
) -> darling::Result<Generated> {
    let mut def = BeanDef::from_derive_input(input)?;
    def.derives.extend(supplied.iter().cloned());
    if mode == Mode::Derive {
        assume_std_derives(&mut def, settings);
    }
    validate(&def, settings)?;
    let bean = BeanData::resolve(&def, settings)?;
    Ok(generate(&bean, mode))
}

/// Derive macros never see the sibling derives of their item, so outside
/// `full` style the std-derivable traits are left to the bean.
fn assume_std_derives(def: &mut BeanDef, settings: &GenSettings) {
    let style = def.attrs.style.or(settings.default_style).unwrap_or_default();
    if style == BeanStyle::Full {
        return;
    }
    for name in ["Clone", "PartialEq", "Eq", "Hash"] {
        let forced = match name {
            "Clone" => def.attrs.clone == CloneStyle::Generate,
            _ => def.attrs.cache_hash_code
        };
        if !forced && !def.derives(name) {
            def.derives.push(name.to_owned());
        }
    }
}

/// Name usable as an identifier, raw when it is a keyword.
pub(crate) fn ident(name: &str) -> String {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        name.to_owned()
    } else {
        format!("r#{name}")
    }
}

/// Type usable in expression position: `Pair<T>` becomes `<Pair<T>>`.
pub(crate) fn expr_ty(ty: &str) -> String {
    if ty.contains('<') {
        format!("<{ty}>")
    } else {
        ty.to_owned()
    }
}
