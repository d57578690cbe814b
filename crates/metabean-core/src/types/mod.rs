// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime type descriptions and generics resolution.
//!
//! Rust erases nothing at runtime, but it also exposes nothing: a property's
//! declared type has to be described explicitly. This module provides that
//! description and the algorithm that resolves type variables through the
//! parent chain of a bean.
//!
//! # Architecture
//!
//! ```text
//! types/
//! ├── mod.rs       - TypeInfo, TypeKind, TypeVariable, GenericType
//! ├── catalog.rs   - Process-wide name -> TypeInfo table, builtins
//! ├── resolved.rs  - ResolvedType: fully resolved, comparable types
//! └── parse.rs     - Parser for the textual type grammar
//! ```
//!
//! # Grammar
//!
//! ```text
//! type := name ('<' type (',' type)* '>')? ('[]')*
//! name := ident ('::' ident)*
//! ```
//!
//! Builtin types print with their short names (`String`, `Vec`, `i32`),
//! registered bean types with their module-qualified names.

mod catalog;
mod parse;
mod resolved;

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc
};

pub use catalog::{builtin, intern, lookup};
pub use resolved::ResolvedType;

/// Kind of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Ordinary named type.
    Class,

    /// Scalar builtin such as `i32` or `bool`.
    Primitive,

    /// Array whose elements are of the component type.
    Array(Arc<TypeInfo>)
}

/// Declared type parameter of a generic type.
///
/// Identity is the pair of declaring type name and parameter name.
#[derive(Debug, Clone)]
pub struct TypeVariable {
    declarer: String,
    name:     String,
    bounds:   Vec<GenericType>
}

impl TypeVariable {
    /// Create an unbounded variable.
    pub fn new(declarer: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declarer: declarer.into(),
            name:     name.into(),
            bounds:   Vec::new()
        }
    }

    /// Add upper bounds.
    pub fn with_bounds(mut self, bounds: Vec<GenericType>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Name of the declaring type.
    pub fn declarer(&self) -> &str {
        &self.declarer
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper bounds, possibly empty.
    pub fn bounds(&self) -> &[GenericType] {
        &self.bounds
    }

    pub(crate) fn key(&self) -> (String, String) {
        (self.declarer.clone(), self.name.clone())
    }
}

impl PartialEq for TypeVariable {
    fn eq(&self, other: &Self) -> bool {
        self.declarer == other.declarer && self.name == other.name
    }
}

impl Eq for TypeVariable {}

impl Hash for TypeVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declarer.hash(state);
        self.name.hash(state);
    }
}

/// Description of a runtime type.
///
/// Two descriptions are equal when their names are equal; the catalog keeps
/// names unique.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name:       String,
    kind:       TypeKind,
    params:     Vec<TypeVariable>,
    supertypes: Vec<GenericType>
}

impl TypeInfo {
    /// Describe a named, non-generic type.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            kind:       TypeKind::Class,
            params:     Vec::new(),
            supertypes: Vec::new()
        }
    }

    /// Describe a scalar type.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Primitive,
            ..Self::class(name)
        }
    }

    /// Describe an array of `component`.
    pub fn array_of(component: Arc<TypeInfo>) -> Self {
        Self {
            name:       format!("{}[]", component.name),
            params:     component.params.clone(),
            supertypes: Vec::new(),
            kind:       TypeKind::Array(component)
        }
    }

    /// Declare an unbounded type parameter.
    pub fn with_param(mut self, name: impl Into<String>) -> Self {
        let var = TypeVariable::new(self.name.clone(), name);
        self.params.push(var);
        self
    }

    /// Declare a type parameter with upper bounds.
    pub fn with_bounded_param(mut self, name: impl Into<String>, bounds: Vec<GenericType>) -> Self {
        let var = TypeVariable::new(self.name.clone(), name).with_bounds(bounds);
        self.params.push(var);
        self
    }

    /// Add a supertype edge.
    ///
    /// For beans this is the declared type of the parent field.
    pub fn with_supertype(mut self, supertype: GenericType) -> Self {
        self.supertypes.push(supertype);
        self
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without module path.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Kind of type.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Declared type parameters.
    pub fn params(&self) -> &[TypeVariable] {
        &self.params
    }

    /// Supertype edges.
    pub fn supertypes(&self) -> &[GenericType] {
        &self.supertypes
    }

    /// Check if this is an array type.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    /// Check if this is a scalar type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive)
    }

    /// Component type of an array.
    pub fn component(&self) -> Option<&Arc<TypeInfo>> {
        match &self.kind {
            TypeKind::Array(component) => Some(component),
            _ => None
        }
    }

    /// Reference to the named type parameter.
    pub fn variable(&self, name: &str) -> Option<GenericType> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .cloned()
            .map(GenericType::Variable)
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Declared, possibly unresolved, type of a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericType {
    /// Type without arguments.
    Class(Arc<TypeInfo>),

    /// Generic type applied to arguments.
    Parameterized {
        /// Raw generic type.
        raw:  Arc<TypeInfo>,
        /// Type arguments in declaration order.
        args: Vec<GenericType>
    },

    /// Array of the inner type.
    Array(Box<GenericType>),

    /// Reference to a type parameter.
    Variable(TypeVariable),

    /// Unknown type with optional bounds.
    Wildcard {
        /// Upper bounds.
        upper: Vec<GenericType>,
        /// Lower bounds.
        lower: Vec<GenericType>
    }
}

impl GenericType {
    /// Plain type reference.
    pub fn class(raw: Arc<TypeInfo>) -> Self {
        Self::Class(raw)
    }

    /// Generic type applied to arguments.
    pub fn parameterized(raw: Arc<TypeInfo>, args: Vec<GenericType>) -> Self {
        if args.is_empty() {
            Self::Class(raw)
        } else {
            Self::Parameterized {
                raw,
                args
            }
        }
    }

    /// Array of `component`.
    pub fn array(component: GenericType) -> Self {
        Self::Array(Box::new(component))
    }

    /// Unbounded type variable declared by `declarer`.
    pub fn variable(declarer: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Variable(TypeVariable::new(declarer, name))
    }

    /// Unbounded wildcard.
    pub fn wildcard() -> Self {
        Self::Wildcard {
            upper: Vec::new(),
            lower: Vec::new()
        }
    }

    /// Raw type after erasing arguments and variables.
    ///
    /// Variables erase to their first bound, or to the top type.
    pub fn erasure(&self) -> Arc<TypeInfo> {
        match self {
            Self::Class(raw) | Self::Parameterized { raw, .. } => raw.clone(),
            Self::Array(component) => Arc::new(TypeInfo::array_of(component.erasure())),
            Self::Variable(var) => var
                .bounds
                .first()
                .map(GenericType::erasure)
                .unwrap_or_else(|| builtin("Any")),
            Self::Wildcard { upper, .. } => upper
                .first()
                .map(GenericType::erasure)
                .unwrap_or_else(|| builtin("Any"))
        }
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(raw) => f.write_str(raw.name()),
            Self::Parameterized { raw, args } => {
                write!(f, "{}<", raw.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Array(component) => write!(f, "{component}[]"),
            Self::Variable(var) => f.write_str(var.name()),
            Self::Wildcard { upper, .. } => match upper.first() {
                Some(bound) => write!(f, "_: {bound}"),
                None => f.write_str("_")
            }
        }
    }
}
