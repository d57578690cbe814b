// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Keyword options accepted in `#[bean(...)]` and `#[property(...)]`.
//!
//! All keywords are case-insensitive.

use darling::FromMeta;

/// Overall shape of the generated meta-bean.
///
/// | Style | Meta-bean | Notes |
/// |-------|-----------|-------|
/// | `smart` | typed `<Name>Meta` struct | skips impls the struct already derives |
/// | `full` | typed `<Name>Meta` struct | always generates every impl |
/// | `light` | `LightMetaBean` table | immutable root beans only |
/// | `minimal` | `MinimalMetaBean` table | root beans only |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeanStyle {
    /// Full meta-bean, impls generated unless derived.
    #[default]
    Smart,
    /// Full meta-bean, all impls generated.
    Full,
    /// Table meta-bean fed by a constructor.
    Light,
    /// Table meta-bean fed by a builder supplier.
    Minimal
}

impl BeanStyle {
    /// Check if a typed meta struct is generated.
    pub const fn has_meta_struct(self) -> bool {
        matches!(self, Self::Smart | Self::Full)
    }

    /// Parse a style keyword.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "smart" => Some(Self::Smart),
            "full" => Some(Self::Full),
            "light" => Some(Self::Light),
            "minimal" => Some(Self::Minimal),
            _ => None
        }
    }
}

impl FromMeta for BeanStyle {
    fn from_string(value: &str) -> darling::Result<Self> {
        Self::parse(value).ok_or_else(|| darling::Error::unknown_value(value))
    }
}

/// Visibility of a generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Follow the bean's own visibility, or private for constructors.
    #[default]
    Smart,
    /// No visibility modifier.
    Private,
    /// `pub(crate)`
    Package,
    /// `pub`
    Public
}

impl FromMeta for Scope {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "private" => Ok(Self::Private),
            "package" => Ok(Self::Package),
            "public" => Ok(Self::Public),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Whether to generate `Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneStyle {
    /// Generate unless derived.
    #[default]
    Smart,
    /// Always generate.
    Generate,
    /// Never generate; the bean supplies `Clone` itself.
    Omit
}

impl FromMeta for CloneStyle {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "generate" => Ok(Self::Generate),
            "omit" => Ok(Self::Omit),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Inclusion of a property in equality, hashing or the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartStyle {
    /// Include through the property type's rules.
    #[default]
    Smart,
    /// Leave out.
    Omit,
    /// Include through the field's own `PartialEq`/`Hash`/`Debug`.
    Field
}

impl FromMeta for PartStyle {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "omit" => Ok(Self::Omit),
            "field" => Ok(Self::Field),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Validation applied when a property is set or built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// `Option` must be `Some`.
    NotNull,
    /// Text or collection must not be empty.
    NotEmpty,
    /// Text must contain a non-whitespace character.
    NotBlank,
    /// Path to `fn(&T, &str) -> Result<(), BeanError>`.
    Custom(syn::Path)
}

impl Validation {
    /// Function called for this rule, relative to `utils` for built-ins.
    pub fn function(&self) -> Option<&'static str> {
        match self {
            Self::NotNull => Some("not_null"),
            Self::NotEmpty => Some("not_empty"),
            Self::NotBlank => Some("not_blank"),
            Self::Custom(_) => None
        }
    }
}

impl FromMeta for Validation {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "not_null" | "notnull" => Ok(Self::NotNull),
            "not_empty" | "notempty" => Ok(Self::NotEmpty),
            "not_blank" | "notblank" => Ok(Self::NotBlank),
            _ => syn::parse_str::<syn::Path>(value)
                .map(Self::Custom)
                .map_err(|_| darling::Error::unknown_value(value))
        }
    }
}

/// Annotation written as `name` or `name(key=value, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDef {
    /// Annotation name.
    pub name:       String,
    /// Attributes in declaration order.
    pub attributes: Vec<(String, String)>
}

impl TagDef {
    /// Parse the textual form.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (name, rest) = match text.find('(') {
            Some(open) => (&text[..open], Some(&text[open + 1..])),
            None => (text, None)
        };
        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.') {
            return None;
        }
        let mut attributes = Vec::new();
        if let Some(rest) = rest {
            let body = rest.strip_suffix(')')?;
            for pair in body.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                attributes.push((key.to_owned(), value.trim().trim_matches('\'').to_owned()));
            }
        }
        Some(Self {
            name: name.to_owned(),
            attributes
        })
    }
}

impl FromMeta for TagDef {
    fn from_string(value: &str) -> darling::Result<Self> {
        Self::parse(value).ok_or_else(|| darling::Error::custom(format!("malformed tag `{value}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bean_style_keywords() {
        assert_eq!(BeanStyle::from_string("smart").unwrap(), BeanStyle::Smart);
        assert_eq!(BeanStyle::from_string("FULL").unwrap(), BeanStyle::Full);
        assert_eq!(BeanStyle::from_string("light").unwrap(), BeanStyle::Light);
        assert_eq!(BeanStyle::from_string("Minimal").unwrap(), BeanStyle::Minimal);
        assert!(BeanStyle::from_string("heavy").is_err());
        assert!(BeanStyle::Full.has_meta_struct());
        assert!(!BeanStyle::Light.has_meta_struct());
    }

    #[test]
    fn scope_keywords() {
        assert_eq!(Scope::from_string("package").unwrap(), Scope::Package);
        assert_eq!(Scope::from_string("PUBLIC").unwrap(), Scope::Public);
        assert!(Scope::from_string("protected").is_err());
    }

    #[test]
    fn part_and_clone_keywords() {
        assert_eq!(PartStyle::from_string("omit").unwrap(), PartStyle::Omit);
        assert_eq!(PartStyle::from_string("field").unwrap(), PartStyle::Field);
        assert_eq!(CloneStyle::from_string("generate").unwrap(), CloneStyle::Generate);
        assert!(CloneStyle::from_string("deep").is_err());
    }

    #[test]
    fn validation_keywords_and_paths() {
        assert_eq!(Validation::from_string("not_null").unwrap(), Validation::NotNull);
        assert_eq!(Validation::from_string("notEmpty").unwrap(), Validation::NotEmpty);
        assert_eq!(Validation::NotBlank.function(), Some("not_blank"));
        let custom = Validation::from_string("crate::checks::positive").unwrap();
        assert!(matches!(custom, Validation::Custom(_)));
        assert_eq!(custom.function(), None);
        assert!(Validation::from_string("not a path").is_err());
    }

    #[test]
    fn tag_forms() {
        let plain = TagDef::from_string("deprecated").unwrap();
        assert_eq!(plain.name, "deprecated");
        assert!(plain.attributes.is_empty());
        let full = TagDef::from_string("range(min=1, max = 5)").unwrap();
        assert_eq!(full.name, "range");
        assert_eq!(full.attributes, [("min".into(), "1".into()), ("max".into(), "5".into())]);
        let quoted = TagDef::parse("unit(name='years')").unwrap();
        assert_eq!(quoted.attributes[0].1, "years");
        assert!(TagDef::from_string("range(min)").is_err());
        assert!(TagDef::from_string("range(min=1").is_err());
        assert!(TagDef::from_string("").is_err());
    }
}
