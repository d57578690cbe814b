// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use metabean::{Bean, BeanBuilder, MetaBean, MetaProperty, PropertyType, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
#[bean(immutable)]
pub struct Animal {
    #[property]
    name: String
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
#[bean(immutable, parent = "animal")]
pub struct Dog {
    animal: Animal,
    #[property]
    breed:  String
}

fn main() {
    let rex = Animal::builder().name("Rex".to_owned()).build().unwrap();
    let dog = Dog::builder()
        .animal(rex)
        .breed("Collie".to_owned())
        .build()
        .unwrap();
    assert_eq!(dog.breed(), "Collie");

    let meta = Dog::meta();
    assert_eq!(meta.meta_property_map().names(), ["name", "breed"]);
    let name = meta.meta_property("name").unwrap();
    assert_eq!(name.declaring_type(), Animal::meta().bean_type());

    let dynamic: &dyn metabean::Bean = &dog;
    assert_eq!(dynamic.get("name").unwrap(), Value::from("Rex"));
    assert_eq!(dog.to_string(), "Dog{name=Rex, breed=Collie}");

    let mut builder = meta.builder().unwrap();
    builder.set("name", Value::from("Fido")).unwrap();
    builder.set("breed", Value::from("Pug")).unwrap();
    assert_eq!(builder.get("name").unwrap(), Value::from("Fido"));
    let built = builder.build().unwrap();
    let built = built.downcast_ref::<Dog>().unwrap();
    assert_eq!(built.breed(), "Pug");

    let copy = dog.to_builder().breed("Beagle".to_owned()).build().unwrap();
    assert_ne!(copy, dog);
    assert_eq!(<Dog as PropertyType>::type_info().supertypes().len(), 1);
}
