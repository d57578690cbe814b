// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use metabean::{Bean, BeanBuilder, MetaBean, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
#[bean(immutable, factory = "of")]
pub struct Address {
    #[property(validate = "not_blank")]
    street: String,
    #[property]
    number: u32,
    #[property]
    lines: Vec<String>
}

fn main() {
    let address = Address::builder()
        .street("High Street".to_owned())
        .number(12)
        .lines(["Flat 2".to_owned()])
        .build()
        .unwrap();
    assert_eq!(address.street(), "High Street");
    assert_eq!(address.number(), 12);
    assert_eq!(address.lines(), ["Flat 2".to_owned()]);

    let missing = Address::builder().street("High Street".to_owned()).build();
    assert!(missing.is_err());
    assert!(Address::of(String::new(), 1, Vec::new()).is_err());

    let moved = address.to_builder().number(14).build().unwrap();
    assert_eq!(moved.number(), 14);
    assert_eq!(moved.street(), address.street());

    let mut frozen = address.clone();
    let dynamic: &mut dyn metabean::Bean = &mut frozen;
    assert!(dynamic.set("number", 1u32).is_err());

    let meta = Address::meta();
    let mut builder = meta.builder().unwrap();
    builder.set("street", Value::from("Low Road")).unwrap();
    builder.set("number", Value::from(3u32)).unwrap();
    assert_eq!(builder.get("number").unwrap(), Value::UInt(3));
    assert!(builder.set("colour", Value::from("red")).is_err());
    let built = builder.build().unwrap();
    let built = built.downcast_ref::<Address>().unwrap();
    assert_eq!(built.number(), 3);
    assert_eq!(built.street(), "Low Road");
}
