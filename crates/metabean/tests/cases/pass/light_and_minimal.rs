// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use metabean::{Bean, BeanBuilder, MetaBean, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Bean)]
#[bean(style = "light", immutable)]
pub struct Point {
    #[property]
    x: i32,
    #[property]
    y: i32
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Bean)]
#[bean(style = "minimal")]
pub struct Counter {
    #[property]
    label: String,
    #[property]
    count: u64
}

fn main() {
    let meta = Point::meta();
    assert_eq!(meta.meta_property_count(), 2);
    let mut builder = meta.builder().unwrap();
    builder.set("x", Value::from(3i32)).unwrap();
    builder.set("y", Value::from(-4i32)).unwrap();
    let point = builder.build().unwrap();
    let point = point.downcast_ref::<Point>().unwrap();
    assert_eq!(point.x(), 3);
    assert_eq!(point.y(), -4);
    assert_eq!(point.to_string(), "Point{x=3, y=-4}");

    let mut counter = Counter::default();
    counter.set_label("hits".to_owned());
    let dynamic: &mut dyn metabean::Bean = &mut counter;
    dynamic.set("count", 9u64).unwrap();
    assert_eq!(dynamic.get("label").unwrap(), Value::from("hits"));
    assert_eq!(counter.count(), 9);

    let counter_meta = Counter::meta();
    assert!(counter_meta.is_buildable());
    let mut builder = counter_meta.builder().unwrap();
    builder.set("label", Value::from("misses")).unwrap();
    let built = builder.build().unwrap();
    assert_eq!(built.downcast_ref::<Counter>().unwrap().label(), "misses");
}
