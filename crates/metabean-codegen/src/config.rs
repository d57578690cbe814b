// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Two layers:
//!
//! - [`BeanGenConfig`] holds type-specific idioms loaded from ini text: how a
//!   field type is held in a builder, how it converts between bean and
//!   builder, which types immutable beans reject.
//! - [`GenSettings`] holds per-run output options: indent, line endings,
//!   field prefix and the default bean style.
//!
//! # Ini format
//!
//! ```text
//! # comment
//! [immutable.builder.to.immutable]
//! Arc = ::std::sync::Arc::new($value)
//! ```
//!
//! | Section | Value meaning |
//! |---------|---------------|
//! | `immutable.invalid.type` | reason the type is rejected |
//! | `immutable.builder.init` | initial builder field expression |
//! | `immutable.builder.type` | builder field type (`$generics` = type arguments) |
//! | `immutable.builder.to.immutable` | builder value → bean value |
//! | `immutable.builder.to.mutable` | bean value → builder value |
//! | `immutable.builder.varargs` | fluent builder parameter type |
//! | `immutable.get.clone` | getter returns a clone |

use std::{collections::HashMap, fs, path::Path};

use crate::{error::GenError, parse::BeanStyle};

const STD_PROFILE: &str = include_str!("../config/std.ini");
const SHARED_PROFILE: &str = include_str!("../config/shared.ini");

/// Type-specific code patterns keyed by raw type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeanGenConfig {
    invalid_types: HashMap<String, String>,
    builder_init:  HashMap<String, String>,
    builder_types: HashMap<String, String>,
    to_immutable:  HashMap<String, String>,
    to_mutable:    HashMap<String, String>,
    varargs:       HashMap<String, String>,
    get_clone:     HashMap<String, String>
}

impl BeanGenConfig {
    /// Built-in profile by name: `std` or `shared`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnknownProfile`] for other names.
    pub fn profile(name: &str) -> Result<Self, GenError> {
        match name {
            "std" => Self::parse(STD_PROFILE),
            "shared" => {
                let mut config = Self::parse(STD_PROFILE)?;
                config.merge(Self::parse(SHARED_PROFILE)?);
                Ok(config)
            }
            other => Err(GenError::UnknownProfile(other.to_owned()))
        }
    }

    /// Standard profile.
    pub fn standard() -> Self {
        Self::parse(STD_PROFILE).unwrap_or_default()
    }

    /// Load ini text from a file, without any profile beneath it.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is malformed.
    pub fn from_file(path: &Path) -> Result<Self, GenError> {
        let text = fs::read_to_string(path).map_err(|source| GenError::Io {
            file: path.to_path_buf(),
            source
        })?;
        Self::parse(&text)
    }

    /// Parse ini text.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Config`] for entries outside a section, lines
    /// without `=`, and unknown section names.
    pub fn parse(text: &str) -> Result<Self, GenError> {
        let mut config = Self::default();
        let mut section: Option<String> = None;
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let number = index + 1;
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                let name = name.trim();
                if config.section_mut(name).is_none() {
                    return Err(GenError::Config {
                        line:    number,
                        message: format!("unknown section [{name}]")
                    });
                }
                section = Some(name.to_owned());
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(GenError::Config {
                    line:    number,
                    message: "expected `key = value`".to_owned()
                });
            };
            let Some(current) = section.as_deref() else {
                return Err(GenError::Config {
                    line:    number,
                    message: "entry outside of a section".to_owned()
                });
            };
            if let Some(map) = config.section_mut(current) {
                map.insert(key.trim().to_owned(), value.trim().to_owned());
            }
        }
        Ok(config)
    }

    /// Overlay `other`, its entries winning.
    pub fn merge(&mut self, other: Self) {
        self.invalid_types.extend(other.invalid_types);
        self.builder_init.extend(other.builder_init);
        self.builder_types.extend(other.builder_types);
        self.to_immutable.extend(other.to_immutable);
        self.to_mutable.extend(other.to_mutable);
        self.varargs.extend(other.varargs);
        self.get_clone.extend(other.get_clone);
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut HashMap<String, String>> {
        match name {
            "immutable.invalid.type" => Some(&mut self.invalid_types),
            "immutable.builder.init" => Some(&mut self.builder_init),
            "immutable.builder.type" => Some(&mut self.builder_types),
            "immutable.builder.to.immutable" => Some(&mut self.to_immutable),
            "immutable.builder.to.mutable" => Some(&mut self.to_mutable),
            "immutable.builder.varargs" => Some(&mut self.varargs),
            "immutable.get.clone" => Some(&mut self.get_clone),
            _ => None
        }
    }

    /// Reason a raw type is not allowed in immutable beans.
    pub fn invalid_reason(&self, raw: &str) -> Option<&str> {
        self.invalid_types.get(raw).map(String::as_str)
    }

    /// Initial builder expression.
    pub fn builder_init(&self, raw: &str) -> Option<&str> {
        self.builder_init.get(raw).map(String::as_str)
    }

    /// Builder field type pattern.
    pub fn builder_type(&self, raw: &str) -> Option<&str> {
        self.builder_types.get(raw).map(String::as_str)
    }

    /// Builder → bean conversion pattern.
    pub fn to_immutable(&self, raw: &str) -> Option<&str> {
        self.to_immutable.get(raw).map(String::as_str)
    }

    /// Bean → builder conversion pattern.
    pub fn to_mutable(&self, raw: &str) -> Option<&str> {
        self.to_mutable.get(raw).map(String::as_str)
    }

    /// Fluent builder parameter type pattern.
    pub fn varargs(&self, raw: &str) -> Option<&str> {
        self.varargs.get(raw).map(String::as_str)
    }

    /// Check if smart getters clone this type.
    pub fn is_get_clone(&self, raw: &str) -> bool {
        self.get_clone.contains_key(raw)
    }
}

/// Expand `$value` and `$generics` in a pattern.
pub fn expand(pattern: &str, value: &str, generics: &str) -> String {
    pattern.replace("$value", value).replace("$generics", generics)
}

/// Indentation of generated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// One tab per level.
    Tab,
    /// Given number of spaces per level.
    Spaces(usize)
}

impl Indent {
    /// Parse `tab` or a space count.
    ///
    /// # Errors
    ///
    /// Returns a message for anything else.
    pub fn parse(text: &str) -> Result<Self, String> {
        match text {
            "tab" => Ok(Self::Tab),
            count => count
                .parse()
                .map(Self::Spaces)
                .map_err(|_| format!("invalid indent `{count}`, expected `tab` or a number"))
        }
    }

    /// Text of one level.
    pub fn unit(self) -> String {
        match self {
            Self::Tab => "\t".to_owned(),
            Self::Spaces(count) => " ".repeat(count)
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Line ending of written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eol {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
    /// `\r`
    Cr,
    /// Platform default.
    System
}

impl Eol {
    /// Parse `lf`, `crlf`, `cr` or `system`.
    ///
    /// # Errors
    ///
    /// Returns a message for anything else.
    pub fn parse(text: &str) -> Result<Self, String> {
        match text.to_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            "cr" => Ok(Self::Cr),
            "system" => Ok(Self::System),
            other => Err(format!("invalid eol `{other}`, expected lf, crlf, cr or system"))
        }
    }

    /// Separator text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
            Self::Cr => "\r",
            Self::System if cfg!(windows) => "\r\n",
            Self::System => "\n"
        }
    }
}

/// Per-run output settings.
#[derive(Debug, Clone, Default)]
pub struct GenSettings {
    /// Indentation of generated code.
    pub indent:        Indent,
    /// Line ending of written files.
    pub eol:           Eol,
    /// Field name prefix stripped to form property names.
    pub prefix:        String,
    /// Style used when a bean does not name one.
    pub default_style: Option<BeanStyle>,
    /// Type-specific patterns.
    pub config:        BeanGenConfig
}

impl GenSettings {
    /// Settings with the standard profile.
    pub fn new() -> Self {
        Self {
            config: BeanGenConfig::standard(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_profile_loads() {
        let config = BeanGenConfig::profile("std").unwrap();
        assert_eq!(config.builder_init("Vec"), Some("Vec::new()"));
        assert!(config.invalid_reason("RefCell").is_some());
        assert!(!config.is_get_clone("Arc"));
        assert_eq!(config.builder_type("Arc"), None);
    }

    #[test]
    fn shared_profile_overlays_standard() {
        let config = BeanGenConfig::profile("shared").unwrap();
        assert_eq!(config.builder_init("Vec"), Some("Vec::new()"));
        assert_eq!(config.builder_type("Arc"), Some("$generics"));
        assert_eq!(
            config.to_immutable("Arc"),
            Some("::std::sync::Arc::new($value)")
        );
        assert!(config.is_get_clone("Arc"));
    }

    #[test]
    fn unknown_profile_fails() {
        assert!(matches!(
            BeanGenConfig::profile("guava"),
            Err(GenError::UnknownProfile(name)) if name == "guava"
        ));
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = BeanGenConfig::parse("# c\nVec = x\n").unwrap_err();
        assert!(matches!(err, GenError::Config { line: 2, .. }));
        let err = BeanGenConfig::parse("[nope]\n").unwrap_err();
        assert!(matches!(err, GenError::Config { line: 1, .. }));
        let err = BeanGenConfig::parse("[immutable.get.clone]\nno equals\n").unwrap_err();
        assert!(matches!(err, GenError::Config { line: 2, .. }));
    }

    #[test]
    fn merge_overrides_entries() {
        let mut config = BeanGenConfig::standard();
        config.merge(BeanGenConfig::parse("[immutable.builder.init]\nVec = vec![]\n").unwrap());
        assert_eq!(config.builder_init("Vec"), Some("vec![]"));
    }

    #[test]
    fn expand_replaces_placeholders() {
        assert_eq!(
            expand("<$generics>::clone(&$value)", "self.tags", "Vec<String>"),
            "<Vec<String>>::clone(&self.tags)"
        );
    }

    #[test]
    fn indent_and_eol_parse() {
        assert_eq!(Indent::parse("tab"), Ok(Indent::Tab));
        assert_eq!(Indent::parse("2"), Ok(Indent::Spaces(2)));
        assert!(Indent::parse("wide").is_err());
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Eol::parse("CRLF"), Ok(Eol::Crlf));
        assert_eq!(Eol::Cr.as_str(), "\r");
        assert!(Eol::parse("mac").is_err());
    }
}
