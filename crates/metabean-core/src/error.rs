// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type shared by every runtime operation of the property model.
//!
//! All fallible operations return [`BeanError`]. Variants carry the names of
//! the bean and property involved so messages are useful without a backtrace.

use thiserror::Error;

/// Failure raised by meta-beans, meta-properties, builders and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeanError {
    /// The named property does not exist on the bean.
    #[error("unknown property '{property}' on {bean}")]
    NoSuchProperty {
        /// Bean type name.
        bean:     String,
        /// Requested property name.
        property: String
    },

    /// No meta-bean is known for the requested type.
    #[error("unknown bean type: {0}")]
    UnknownBeanType(String),

    /// A meta-bean was registered twice for the same type.
    #[error("meta-bean already registered for {0}")]
    DuplicateRegistration(String),

    /// Two meta-properties share a name or alias within one bean.
    #[error("duplicate property '{property}' on {bean}")]
    DuplicateProperty {
        /// Bean type name.
        bean:     String,
        /// Clashing name.
        property: String
    },

    /// A value failed validation.
    #[error("invalid value for property '{property}': {message}")]
    Validation {
        /// Property that failed validation.
        property: String,
        /// Human readable reason.
        message:  String
    },

    /// A dynamic value could not be converted to the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected type name.
        expected: String,
        /// Actual value kind.
        found:    String
    },

    /// A meta-property was applied to a bean of another type.
    #[error("meta-property '{property}' of {expected} cannot be used with {found}")]
    WrongBeanType {
        /// Property name.
        property: String,
        /// Declaring bean type.
        expected: String,
        /// Type of the bean actually passed.
        found:    String
    },

    /// Attempt to write a property that has no setter.
    #[error("property '{0}' is read-only")]
    ReadOnly(String),

    /// Attempt to read a property that has no getter.
    #[error("property '{0}' is write-only")]
    WriteOnly(String),

    /// The bean type does not support builders.
    #[error("bean type {0} is not buildable")]
    NotBuildable(String),

    /// A property path could not be parsed.
    #[error("invalid property path '{path}': {message}")]
    InvalidPath {
        /// Offending path text.
        path:    String,
        /// Human readable reason.
        message: String
    },

    /// A type expression could not be parsed or resolved.
    #[error("invalid type '{input}': {message}")]
    InvalidType {
        /// Offending type text.
        input:   String,
        /// Human readable reason.
        message: String
    },

    /// Wrong number of type arguments for a generic type.
    #[error("type {raw} expects {expected} type arguments, found {found}")]
    ArityMismatch {
        /// Raw type name.
        raw:      String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        found:    usize
    },

    /// A builder could not produce a bean.
    #[error("cannot instantiate {bean}: {message}")]
    Instantiation {
        /// Bean type name.
        bean:    String,
        /// Human readable reason.
        message: String
    }
}

impl BeanError {
    /// Shorthand for [`BeanError::Validation`].
    pub fn validation(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            property: property.into(),
            message:  message.into()
        }
    }

    /// Shorthand for [`BeanError::TypeMismatch`].
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found:    found.into()
        }
    }

    /// Shorthand for [`BeanError::NoSuchProperty`].
    pub fn no_such_property(bean: impl Into<String>, property: impl Into<String>) -> Self {
        Self::NoSuchProperty {
            bean:     bean.into(),
            property: property.into()
        }
    }

    /// Check if the error reports a missing property.
    pub const fn is_no_such_property(&self) -> bool {
        matches!(self, Self::NoSuchProperty { .. })
    }

    /// Check if the error came from value validation.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
