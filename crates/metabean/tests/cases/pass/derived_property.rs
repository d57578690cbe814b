// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use metabean::{Bean, MetaBean, MetaProperty, Value};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Bean)]
#[derived(full_name: String)]
pub struct Name {
    #[property]
    first: String,
    #[property]
    last:  String
}

impl Name {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

fn main() {
    let mut name = Name::default();
    name.set_first("Grace".to_owned());
    name.set_last("Hopper".to_owned());

    let meta = Name::meta();
    assert_eq!(meta.meta_property_map().names(), ["first", "last", "full_name"]);
    assert!(meta.full_name().style().is_derived());
    assert_eq!(meta.full_name().get_typed(&name).unwrap(), "Grace Hopper");

    let dynamic: &mut dyn metabean::Bean = &mut name;
    assert_eq!(dynamic.get("full_name").unwrap(), Value::from("Grace Hopper"));
    assert!(dynamic.set("full_name", "Ada Lovelace").is_err());
}
