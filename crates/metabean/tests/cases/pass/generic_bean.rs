// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use metabean::{Bean, MetaBean, Value};

#[derive(Debug, Default, Clone, PartialEq, Bean)]
pub struct Pair<T> {
    #[property]
    first: T,
    #[property]
    rest:  Vec<T>
}

fn main() {
    let mut words = Pair::<String>::default();
    words.set_first("one".to_owned());
    words.set_rest(vec!["two".to_owned(), "three".to_owned()]);
    assert_eq!(words.first(), "one");
    assert_eq!(words.rest().len(), 2);

    let mut numbers = Pair::<u32>::default();
    let dynamic: &mut dyn metabean::Bean = &mut numbers;
    dynamic.set("first", 7u32).unwrap();
    assert_eq!(dynamic.get("first").unwrap(), Value::UInt(7));
    assert!(dynamic.set("first", "seven").is_err());

    let word_meta = Pair::<String>::meta();
    let number_meta = Pair::<u32>::meta();
    assert_eq!(word_meta.meta_property_count(), 2);
    assert_ne!(word_meta.bean_type(), number_meta.bean_type());
    assert!(Arc::ptr_eq(&word_meta, &Pair::<String>::meta()));
}
