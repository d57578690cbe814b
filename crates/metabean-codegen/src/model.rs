// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation model.
//!
//! [`BeanData`] and [`PropertyData`] are built from a parsed
//! [`BeanDef`](crate::parse::BeanDef) once per file and per run. Style
//! keywords are resolved here into strategies, so the generators only deal
//! with concrete cases.
//!
//! ```text
//! BeanDef ──resolve──► BeanData
//!                      ├── PropertyData ── GetterGen / SetterGen / BuilderField
//!                      └── DerivedData
//! ```

mod bean;
mod builder;
mod getter;
mod property;
mod setter;

pub use bean::{BeanData, ParentData, TypeParamData, is_immutable_hierarchy, render_vis};
pub use builder::BuilderField;
pub use getter::GetterGen;
pub use property::{DerivedData, PropertyData, property_name};
pub use setter::SetterGen;
