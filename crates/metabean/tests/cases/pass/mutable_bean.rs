// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use metabean::{Bean, MetaBean, MetaProperty, PropertyStyle, Value};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Bean)]
pub struct Person {
    #[property(validate = "not_blank")]
    name: String,
    #[property(alias = "years")]
    age: u32,
    #[property]
    tags: Vec<String>
}

fn main() {
    let mut person = Person::default();
    person.set_name("Ada".to_owned()).unwrap();
    person.set_age(36);
    person.set_tags(vec!["math".to_owned()]);
    assert!(person.set_name("  ".to_owned()).is_err());
    assert_eq!(person.name(), "Ada");
    assert_eq!(person.tags(), ["math".to_owned()]);

    let meta = Person::meta();
    assert_eq!(meta.meta_property_count(), 3);
    assert_eq!(meta.age().style(), PropertyStyle::ReadWrite);
    assert_eq!(meta.age().get_typed(&person).unwrap(), 36);

    let dynamic: &mut dyn metabean::Bean = &mut person;
    dynamic.set("years", 37u32).unwrap();
    assert_eq!(dynamic.get("age").unwrap(), Value::UInt(37));
    assert!(dynamic.set("name", "").is_err());
    assert!(dynamic.get("height").is_err());

    assert_eq!(person.to_string(), "Person{name=Ada, age=37, tags=[math]}");
}
