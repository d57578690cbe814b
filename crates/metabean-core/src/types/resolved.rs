// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fully resolved types.
//!
//! A [`ResolvedType`] is a raw type plus resolved arguments. It has either no
//! arguments (raw or non-generic) or exactly as many as the raw type declares.
//! Arrays keep the array-ness in the raw type and the arguments of the
//! component, so `Vec<String>[]` has raw `Vec[]` and argument `String`.

use std::{collections::HashMap, fmt, sync::Arc};

use super::{GenericType, TypeInfo, TypeKind, builtin, parse};
use crate::error::BeanError;

type Bindings = HashMap<(String, String), ResolvedType>;

const MAX_SUPERTYPE_DEPTH: usize = 64;

/// Raw type with resolved arguments.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    raw:  Arc<TypeInfo>,
    args: Vec<ResolvedType>
}

impl ResolvedType {
    /// Top type.
    pub fn object() -> Self {
        Self::of_raw(builtin("Any"))
    }

    /// The `String` type.
    pub fn string() -> Self {
        Self::of_raw(builtin("String"))
    }

    /// Type without arguments.
    pub fn of_raw(raw: Arc<TypeInfo>) -> Self {
        Self {
            raw,
            args: Vec::new()
        }
    }

    /// Type with arguments.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::ArityMismatch`] unless `args` is empty or has
    /// exactly as many entries as `raw` declares parameters.
    pub fn of(raw: Arc<TypeInfo>, args: Vec<ResolvedType>) -> Result<Self, BeanError> {
        if !args.is_empty() && args.len() != raw.params().len() {
            return Err(BeanError::ArityMismatch {
                raw:      raw.name().to_owned(),
                expected: raw.params().len(),
                found:    args.len()
            });
        }
        Ok(Self {
            raw,
            args
        })
    }

    /// Type whose arguments are themselves raw.
    ///
    /// # Errors
    ///
    /// Same as [`ResolvedType::of`].
    pub fn of_flat(raw: Arc<TypeInfo>, args: &[Arc<TypeInfo>]) -> Result<Self, BeanError> {
        Self::of(raw, args.iter().cloned().map(Self::of_raw).collect())
    }

    pub(crate) fn parameterized(raw: Arc<TypeInfo>, args: Vec<ResolvedType>) -> Self {
        Self {
            raw,
            args
        }
    }

    /// Resolve a declared type against a context type.
    ///
    /// The supertype edges of `context` are walked and every parameter they
    /// bind is recorded. Variables left unbound fall back to their first
    /// bound, or to [`ResolvedType::object`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // Base<T> { value: T }, Sub { parent: Base<String> }
    /// let value = ResolvedType::from(&base_value_type, &sub_info);
    /// assert_eq!(value.to_string(), "String");
    /// ```
    pub fn from(ty: &GenericType, context: &TypeInfo) -> Self {
        let mut bindings = Bindings::new();
        collect_bindings(context, &mut bindings, 0);
        resolve(ty, &bindings)
    }

    /// Parse the textual form produced by `Display`.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::InvalidType`] for malformed text or unknown
    /// names, and [`BeanError::ArityMismatch`] for wrong argument counts.
    pub fn parse(text: &str) -> Result<Self, BeanError> {
        parse::parse(text)
    }

    /// Raw type.
    pub fn raw_type(&self) -> &Arc<TypeInfo> {
        &self.raw
    }

    /// Resolved arguments.
    pub fn arguments(&self) -> &[ResolvedType] {
        &self.args
    }

    /// Argument at `index`, or the top type when absent.
    pub fn argument_or_default(&self, index: usize) -> ResolvedType {
        self.args.get(index).cloned().unwrap_or_else(Self::object)
    }

    /// Check if a generic type is used without arguments.
    pub fn is_raw(&self) -> bool {
        self.args.is_empty() && !self.raw.params().is_empty()
    }

    /// Check if arguments are present.
    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }

    /// Check if this is an array type.
    pub fn is_array(&self) -> bool {
        self.raw.is_array()
    }

    /// Check if this is a scalar type.
    pub fn is_primitive(&self) -> bool {
        self.raw.is_primitive()
    }

    /// Drop the arguments.
    pub fn to_raw(&self) -> Self {
        Self::of_raw(self.raw.clone())
    }

    /// Component type of an array.
    pub fn to_component_type(&self) -> Option<Self> {
        self.raw.component().map(|component| Self {
            raw:  component.clone(),
            args: self.args.clone()
        })
    }

    /// Array of this type.
    pub fn to_array_type(&self) -> Self {
        Self {
            raw:  Arc::new(TypeInfo::array_of(self.raw.clone())),
            args: self.args.clone()
        }
    }

    /// Declared-type form of this type.
    pub fn to_generic_type(&self) -> GenericType {
        match self.to_component_type() {
            Some(component) => GenericType::array(component.to_generic_type()),
            None => GenericType::parameterized(
                self.raw.clone(),
                self.args.iter().map(Self::to_generic_type).collect()
            )
        }
    }
}

fn collect_bindings(info: &TypeInfo, bindings: &mut Bindings, depth: usize) {
    if depth > MAX_SUPERTYPE_DEPTH {
        return;
    }
    for supertype in info.supertypes() {
        let (raw, args) = match supertype {
            GenericType::Parameterized { raw, args } => (raw, args.as_slice()),
            GenericType::Class(raw) => (raw, &[][..]),
            _ => continue
        };
        for (param, arg) in raw.params().iter().zip(args) {
            let resolved = resolve(arg, bindings);
            bindings.entry(param.key()).or_insert(resolved);
        }
        collect_bindings(raw, bindings, depth + 1);
    }
}

fn resolve(ty: &GenericType, bindings: &Bindings) -> ResolvedType {
    match ty {
        GenericType::Class(raw) => ResolvedType::of_raw(raw.clone()),
        GenericType::Parameterized { raw, args } => ResolvedType::parameterized(
            raw.clone(),
            args.iter().map(|arg| resolve(arg, bindings)).collect()
        ),
        GenericType::Array(component) => resolve(component, bindings).to_array_type(),
        GenericType::Variable(var) => match bindings.get(&var.key()) {
            Some(bound) => bound.clone(),
            None => var
                .bounds()
                .first()
                .map(|bound| resolve(bound, &Bindings::new()))
                .unwrap_or_else(ResolvedType::object)
        },
        GenericType::Wildcard { upper, .. } => upper
            .first()
            .map(|bound| resolve(bound, bindings))
            .unwrap_or_else(ResolvedType::object)
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut base = &self.raw;
        let mut dims = 0;
        while let TypeKind::Array(component) = base.kind() {
            base = component;
            dims += 1;
        }
        f.write_str(base.name())?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        for _ in 0..dims {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedType({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TypeVariable, intern};

    fn string() -> GenericType {
        GenericType::class(builtin("String"))
    }

    #[test]
    fn of_checks_arity() {
        let map = builtin("HashMap");
        let err = ResolvedType::of(map.clone(), vec![ResolvedType::string()]).unwrap_err();
        assert_eq!(
            err,
            BeanError::ArityMismatch {
                raw:      "HashMap".into(),
                expected: 2,
                found:    1
            }
        );
        assert!(ResolvedType::of(map.clone(), vec![]).unwrap().is_raw());
        let full = ResolvedType::of_flat(map, &[builtin("String"), builtin("i32")]).unwrap();
        assert!(full.is_parameterized());
        assert_eq!(full.to_string(), "HashMap<String, i32>");
    }

    #[test]
    fn arguments_to_non_generic_fail() {
        let err = ResolvedType::of(builtin("String"), vec![ResolvedType::string()]);
        assert!(err.is_err());
    }

    #[test]
    fn argument_or_default_falls_back_to_any() {
        let raw = ResolvedType::of_raw(builtin("Vec"));
        assert_eq!(raw.argument_or_default(0), ResolvedType::object());
    }

    #[test]
    fn array_round_trip() {
        let list = ResolvedType::of_flat(builtin("Vec"), &[builtin("String")]).unwrap();
        let array = list.to_array_type();
        assert!(array.is_array());
        assert_eq!(array.to_string(), "Vec<String>[]");
        assert_eq!(array.to_component_type(), Some(list));
        assert_eq!(array.to_generic_type().to_string(), "Vec<String>[]");
    }

    #[test]
    fn from_binds_through_parent() {
        let base = intern(TypeInfo::class("resolved_test::Base").with_param("T"));
        let sub = TypeInfo::class("resolved_test::Sub")
            .with_supertype(GenericType::parameterized(base.clone(), vec![string()]));
        let field = GenericType::parameterized(
            builtin("Vec"),
            vec![GenericType::variable("resolved_test::Base", "T")]
        );
        assert_eq!(ResolvedType::from(&field, &sub).to_string(), "Vec<String>");
        assert_eq!(ResolvedType::from(&field, &base).to_string(), "Vec<Any>");
    }

    #[test]
    fn from_binds_through_two_levels() {
        let root = intern(
            TypeInfo::class("resolved_test::Root")
                .with_param("A")
                .with_param("B")
        );
        let mid = intern(
            TypeInfo::class("resolved_test::Mid")
                .with_param("X")
                .with_supertype(GenericType::parameterized(
                    root,
                    vec![
                        GenericType::variable("resolved_test::Mid", "X"),
                        GenericType::class(builtin("i64"))
                    ]
                ))
        );
        let leaf = TypeInfo::class("resolved_test::Leaf")
            .with_supertype(GenericType::parameterized(mid, vec![string()]));
        let a = GenericType::variable("resolved_test::Root", "A");
        let b = GenericType::variable("resolved_test::Root", "B");
        assert_eq!(ResolvedType::from(&a, &leaf), ResolvedType::string());
        assert_eq!(ResolvedType::from(&b, &leaf).to_string(), "i64");
    }

    #[test]
    fn unbound_variable_uses_bound() {
        let var = TypeVariable::new("resolved_test::Holder", "T").with_bounds(vec![string()]);
        let context = TypeInfo::class("resolved_test::Holder");
        let resolved = ResolvedType::from(&GenericType::Variable(var), &context);
        assert_eq!(resolved, ResolvedType::string());
    }

    #[test]
    fn wildcard_resolves_to_upper_bound() {
        let context = TypeInfo::class("resolved_test::Ctx");
        let wildcard = GenericType::Wildcard {
            upper: vec![string()],
            lower: vec![]
        };
        assert_eq!(ResolvedType::from(&wildcard, &context), ResolvedType::string());
        assert_eq!(
            ResolvedType::from(&GenericType::wildcard(), &context),
            ResolvedType::object()
        );
    }
}
