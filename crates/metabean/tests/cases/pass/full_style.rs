// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use metabean::{Bean, MetaBean};

#[derive(Debug, Default, Bean)]
#[bean(style = "full")]
pub struct Tag {
    #[property]
    key:   String,
    #[property]
    value: String
}

fn main() {
    let mut tag = Tag::default();
    tag.set_key("env".to_owned());
    tag.set_value("prod".to_owned());

    let copy = tag.clone();
    assert_eq!(copy, tag);

    let mut other = tag.clone();
    other.set_value("dev".to_owned());
    assert_ne!(other, tag);

    let set: HashSet<Tag> = [tag.clone(), copy, other].into_iter().collect();
    assert_eq!(set.len(), 2);

    assert_eq!(Tag::meta().meta_property_count(), 2);
    assert_eq!(tag.to_string(), "Tag{key=env, value=prod}");
}
