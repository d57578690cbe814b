// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder for the `Name{a=1, b=x}` text form used by generated beans.

use std::fmt;

use crate::{bean::Bean, property_type::PropertyType, value::Value};

/// Writes `Name{field=value, ...}` to a formatter.
///
/// # Examples
///
/// ```rust,ignore
/// impl fmt::Display for Person {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         ToStringBuilder::new(f, "Person")
///             .field("name", &self.name)
///             .field("age", &self.age)
///             .finish()
///     }
/// }
/// ```
pub struct ToStringBuilder<'a, 'b> {
    f:      &'a mut fmt::Formatter<'b>,
    first:  bool,
    result: fmt::Result
}

impl<'a, 'b> ToStringBuilder<'a, 'b> {
    /// Start with the bean name.
    pub fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        let result = write!(f, "{name}{{");
        Self {
            f,
            first: true,
            result
        }
    }

    /// Append a typed property.
    pub fn field<P: PropertyType>(&mut self, name: &str, value: &P) -> &mut Self {
        self.value(name, &value.to_value())
    }

    /// Append a dynamic property value.
    pub fn value(&mut self, name: &str, value: &Value) -> &mut Self {
        if self.result.is_ok() {
            let separator = if self.first { "" } else { ", " };
            self.first = false;
            self.result = write!(self.f, "{separator}{name}={value}");
        }
        self
    }

    /// Append a write-only property, whose value is never shown.
    pub fn hidden(&mut self, name: &str) -> &mut Self {
        if self.result.is_ok() {
            let separator = if self.first { "" } else { ", " };
            self.first = false;
            self.result = write!(self.f, "{separator}{name}=*");
        }
        self
    }

    /// Append every readable property of an embedded parent bean.
    pub fn parent(&mut self, parent: &dyn Bean) -> &mut Self {
        for (name, value) in super::flatten(parent) {
            self.value(&name, &value);
        }
        self
    }

    /// Close the braces.
    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlexiBean;

    struct Sample {
        parent: FlexiBean
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ToStringBuilder::new(f, "Sample")
                .parent(&self.parent)
                .field("name", &"Ada".to_owned())
                .field("tags", &vec![1, 2])
                .hidden("secret")
                .finish()
        }
    }

    #[test]
    fn writes_all_fields() {
        let sample = Sample {
            parent: FlexiBean::new().with("id", 7)
        };
        assert_eq!(sample.to_string(), "Sample{id=7, name=Ada, tags=[1, 2], secret=*}");
    }
}
