// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Depth-first walk over a bean and every bean nested in its properties.

use std::collections::VecDeque;

use crate::{bean::Bean, value::Value};

/// Iterator yielding a root bean followed by its nested beans, depth first.
///
/// Nested beans are found inside plain properties, optionals, lists, sets
/// and map values. Each yielded bean is an owned snapshot.
pub struct BeanIterator {
    stack: Vec<Box<dyn Bean>>
}

impl BeanIterator {
    /// Start a walk at `root`.
    pub fn new(root: &dyn Bean) -> Self {
        Self {
            stack: vec![root.clone_bean()]
        }
    }
}

impl Iterator for BeanIterator {
    type Item = Box<dyn Bean>;

    fn next(&mut self) -> Option<Self::Item> {
        let bean = self.stack.pop()?;
        let mut children = VecDeque::new();
        for meta in bean.meta_bean().meta_property_map().iter() {
            if !meta.style().is_readable() {
                continue;
            }
            if let Ok(value) = meta.get(bean.as_ref()) {
                collect(value, &mut children);
            }
        }
        self.stack.extend(children.into_iter().rev());
        Some(bean)
    }
}

fn collect(value: Value, out: &mut VecDeque<Box<dyn Bean>>) {
    match value {
        Value::Bean(bean) => out.push_back(bean),
        Value::Optional(Some(inner)) => collect(*inner, out),
        Value::List(items) | Value::Set(items) => {
            for item in items {
                collect(item, out);
            }
        }
        Value::Map(entries) => {
            for (_, item) in entries {
                collect(item, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlexiBean;

    fn named(name: &str) -> FlexiBean {
        FlexiBean::new().with("name", name)
    }

    #[test]
    fn root_then_depth_first() {
        let leaf = named("leaf");
        let left = named("left").with("child", Value::bean(leaf));
        let right = named("right");
        let root = named("root").with(
            "children",
            Value::List(vec![Value::bean(left), Value::some(Value::bean(right))])
        );
        let names: Vec<String> = BeanIterator::new(&root)
            .map(|bean| bean.get("name").unwrap().to_string())
            .collect();
        assert_eq!(names, ["root", "left", "leaf", "right"]);
    }

    #[test]
    fn bean_without_children() {
        assert_eq!(BeanIterator::new(&named("solo")).count(), 1);
    }
}
