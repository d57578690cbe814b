// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Setter strategies for mutable beans.
//!
//! | Style | Method body | Meta-property writes |
//! |-------|-------------|----------------------|
//! | `smart` | `clear_extend` for collections, else `set` | through the method |
//! | `set` | `self.x = x` | through the method |
//! | `clear_extend` | `self.x.clear(); self.x.extend(x)` | through the method |
//! | `manual` | written by hand, returns `Result` | through the method |
//! | `field` | no method | the field directly |
//! | pattern | `$field`/`$value` substituted | through the method |
//! | (empty) | none | nothing, read-only |

use syn::Type;

use crate::utils::types::is_extendable;

/// How a property is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetterGen {
    /// Read-only property.
    None,
    /// Replace the field.
    Assign,
    /// Clear the collection and extend it with the new items.
    ClearExtend,
    /// Hand-written `fn set_x(&mut self, x: P) -> Result<(), BeanError>`.
    Manual,
    /// Meta-property writes the field, no method.
    Field,
    /// Statement with `$field` and `$value` placeholders.
    Pattern(String)
}

impl SetterGen {
    /// Resolve a style keyword or pattern.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown styles, patterns without `$value` and
    /// `clear_extend` on types without `clear`/`Extend`.
    pub fn resolve(style: Option<&str>, ty: &Type, exposed: bool) -> Result<Self, String> {
        let Some(style) = style.map(str::trim) else {
            return Ok(Self::smart(ty, exposed));
        };
        if style.contains('$') {
            return if style.contains("$value") {
                Ok(Self::Pattern(style.trim_end_matches(';').to_owned()))
            } else {
                Err(format!("setter pattern `{style}` must contain `$value`"))
            };
        }
        match style.to_lowercase().as_str() {
            "" => Ok(Self::None),
            "smart" => Ok(Self::smart(ty, exposed)),
            "set" => Ok(Self::Assign),
            "clear_extend" | "clearextend" if is_extendable(ty) && !exposed => Ok(Self::ClearExtend),
            "clear_extend" | "clearextend" => {
                Err("setter style `clear_extend` needs a collection field".to_owned())
            }
            "manual" => Ok(Self::Manual),
            "field" => Ok(Self::Field),
            other => Err(format!("unknown setter style `{other}`"))
        }
    }

    fn smart(ty: &Type, exposed: bool) -> Self {
        if is_extendable(ty) && !exposed {
            Self::ClearExtend
        } else {
            Self::Assign
        }
    }

    /// Check if the property can be written.
    pub fn is_writable(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check if a setter method is generated.
    pub fn has_method(&self) -> bool {
        matches!(self, Self::Assign | Self::ClearExtend | Self::Pattern(_))
    }

    /// Statements of the generated method, without validation.
    ///
    /// `param` names the parameter; `exposed` converts it with `into`.
    pub fn method_body(&self, field: &str, param: &str, exposed: bool) -> Vec<String> {
        let value = if exposed {
            format!("{param}.into()")
        } else {
            param.to_owned()
        };
        match self {
            Self::Assign => vec![format!("self.{field} = {value};")],
            Self::ClearExtend => vec![
                format!("self.{field}.clear();"),
                format!("self.{field}.extend({value});")
            ],
            Self::Pattern(pattern) => {
                let statement = pattern
                    .replace("$field", &format!("self.{field}"))
                    .replace("$value", &value);
                vec![format!("{statement};")]
            }
            Self::None | Self::Manual | Self::Field => Vec::new()
        }
    }

    /// Closure body used by the meta-property, reading `bean` and `value`.
    ///
    /// The last entry is the result expression. `validation` is a statement
    /// checking `value`; `fallible` tells whether the method returns a
    /// `Result`.
    pub fn meta_write(
        &self,
        field: &str,
        method: &str,
        validation: Option<&str>,
        fallible: bool,
        exposed: bool
    ) -> Option<Vec<String>> {
        match self {
            Self::None => None,
            Self::Manual => Some(vec![format!("bean.{method}(value)")]),
            Self::Field => {
                let mut body: Vec<String> = validation.map(str::to_owned).into_iter().collect();
                let value = if exposed { "value.into()" } else { "value" };
                body.push(format!("bean.{field} = {value};"));
                body.push("Ok(())".to_owned());
                Some(body)
            }
            _ if fallible => Some(vec![format!("bean.{method}(value)")]),
            _ => Some(vec![format!("bean.{method}(value);"), "Ok(())".to_owned()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(text: &str) -> Type {
        syn::parse_str(text).unwrap()
    }

    #[test]
    fn smart_by_type() {
        assert_eq!(SetterGen::resolve(None, &ty("Vec<String>"), false).unwrap(), SetterGen::ClearExtend);
        assert_eq!(SetterGen::resolve(Some("smart"), &ty("String"), false).unwrap(), SetterGen::Assign);
        assert_eq!(SetterGen::resolve(None, &ty("Vec<String>"), true).unwrap(), SetterGen::Assign);
    }

    #[test]
    fn explicit_styles() {
        let string = ty("String");
        assert_eq!(SetterGen::resolve(Some("set"), &string, false).unwrap(), SetterGen::Assign);
        assert_eq!(SetterGen::resolve(Some("manual"), &string, false).unwrap(), SetterGen::Manual);
        assert_eq!(SetterGen::resolve(Some("field"), &string, false).unwrap(), SetterGen::Field);
        assert_eq!(SetterGen::resolve(Some(""), &string, false).unwrap(), SetterGen::None);
        assert!(SetterGen::resolve(Some("clear_extend"), &string, false).is_err());
        assert!(SetterGen::resolve(Some("put"), &string, false).is_err());
    }

    #[test]
    fn patterns() {
        let setter =
            SetterGen::resolve(Some("$field = $value.trim().to_owned();"), &ty("String"), false)
                .unwrap();
        assert_eq!(setter.method_body("name", "name", false), ["self.name = name.trim().to_owned();"]);
        assert!(SetterGen::resolve(Some("$field = 1"), &ty("i32"), false).is_err());
    }

    #[test]
    fn bodies() {
        assert_eq!(
            SetterGen::ClearExtend.method_body("tags", "tags", false),
            ["self.tags.clear();", "self.tags.extend(tags);"]
        );
        assert_eq!(SetterGen::Assign.method_body("raw", "raw", true), ["self.raw = raw.into();"]);
        assert!(SetterGen::Field.method_body("a", "a", false).is_empty());
    }

    #[test]
    fn meta_writes() {
        assert_eq!(
            SetterGen::Assign.meta_write("age", "set_age", None, false, false).unwrap(),
            ["bean.set_age(value);", "Ok(())"]
        );
        assert_eq!(
            SetterGen::Assign.meta_write("age", "set_age", None, true, false).unwrap(),
            ["bean.set_age(value)"]
        );
        assert_eq!(
            SetterGen::Field
                .meta_write("age", "set_age", Some("check(&value)?;"), false, false)
                .unwrap(),
            ["check(&value)?;", "bean.age = value;", "Ok(())"]
        );
        assert_eq!(SetterGen::None.meta_write("age", "set_age", None, false, false), None);
    }
}
