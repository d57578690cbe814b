// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide table of known types.
//!
//! Builtins are seeded once. Bean types are interned by their meta-beans the
//! first time the meta-bean is created, so names resolve in
//! [`ResolvedType::parse`](super::ResolvedType::parse) after that point.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock}
};

use dashmap::DashMap;

use super::TypeInfo;

const PRIMITIVES: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize", "f32", "f64"
];

const CLASSES: &[&str] = &["Any", "String", "Value"];

const GENERICS: &[(&str, &[&str])] = &[
    ("Vec", &["T"]),
    ("VecDeque", &["T"]),
    ("Option", &["T"]),
    ("Box", &["T"]),
    ("Arc", &["T"]),
    ("Rc", &["T"]),
    ("Cell", &["T"]),
    ("RefCell", &["T"]),
    ("HashMap", &["K", "V"]),
    ("BTreeMap", &["K", "V"]),
    ("HashSet", &["T"]),
    ("BTreeSet", &["T"]),
    ("Grid", &["V"])
];

static BUILTINS: LazyLock<HashMap<&'static str, Arc<TypeInfo>>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for name in PRIMITIVES {
        map.insert(*name, Arc::new(TypeInfo::primitive(*name)));
    }
    for name in CLASSES {
        map.insert(*name, Arc::new(TypeInfo::class(*name)));
    }
    for (name, params) in GENERICS {
        let info = params
            .iter()
            .fold(TypeInfo::class(*name), |info, param| info.with_param(*param));
        map.insert(*name, Arc::new(info));
    }
    map
});

static REGISTERED: LazyLock<DashMap<String, Arc<TypeInfo>>> = LazyLock::new(DashMap::new);

/// Shared description of a builtin type.
///
/// Unknown names yield a fresh non-generic description.
pub fn builtin(name: &str) -> Arc<TypeInfo> {
    BUILTINS
        .get(name)
        .cloned()
        .unwrap_or_else(|| Arc::new(TypeInfo::class(name)))
}

/// Store a description, returning the existing one if the name is taken.
pub fn intern(info: TypeInfo) -> Arc<TypeInfo> {
    if let Some(existing) = BUILTINS.get(info.name()) {
        return existing.clone();
    }
    if let Some(existing) = REGISTERED.get(info.name()) {
        return existing.clone();
    }
    let name = info.name().to_owned();
    tracing::trace!(type_name = %name, "interning type");
    REGISTERED
        .entry(name)
        .or_insert_with(|| Arc::new(info))
        .clone()
}

/// Find a description by full name.
pub fn lookup(name: &str) -> Option<Arc<TypeInfo>> {
    BUILTINS
        .get(name)
        .cloned()
        .or_else(|| REGISTERED.get(name).map(|entry| entry.clone()))
}
