// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Access styles of properties.
//!
//! | Style               | Readable | Writable | Buildable | Derived |
//! |---------------------|----------|----------|-----------|---------|
//! | `ReadOnly`          | yes      | no       | no        | no      |
//! | `ReadWrite`         | yes      | yes      | yes       | no      |
//! | `WriteOnly`         | no       | yes      | yes       | no      |
//! | `Derived`           | yes      | no       | no        | yes     |
//! | `ReadOnlyBuildable` | yes      | no       | yes       | no      |
//! | `Immutable`         | yes      | no       | yes       | no      |

use std::fmt;

/// How a property may be accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStyle {
    /// Getter only.
    ReadOnly,

    /// Getter and setter.
    ReadWrite,

    /// Setter only.
    WriteOnly,

    /// Computed from other properties, getter only.
    Derived,

    /// Getter only, but settable through a builder.
    ReadOnlyBuildable,

    /// Property of an immutable bean, settable only through a builder.
    Immutable
}

impl PropertyStyle {
    /// Check if the property can be read.
    pub const fn is_readable(&self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    /// Check if the property can be written on an existing bean.
    pub const fn is_writable(&self) -> bool {
        matches!(self, Self::ReadWrite | Self::WriteOnly)
    }

    /// Check if the property can be supplied to a builder.
    pub const fn is_buildable(&self) -> bool {
        matches!(
            self,
            Self::ReadWrite | Self::WriteOnly | Self::ReadOnlyBuildable | Self::Immutable
        )
    }

    /// Check if the property is computed.
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::Derived)
    }

    /// Check if the property takes part in serialization.
    pub const fn is_serializable(&self) -> bool {
        self.is_readable() && self.is_buildable()
    }

    /// Variant name as written in source.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "ReadOnly",
            Self::ReadWrite => "ReadWrite",
            Self::WriteOnly => "WriteOnly",
            Self::Derived => "Derived",
            Self::ReadOnlyBuildable => "ReadOnlyBuildable",
            Self::Immutable => "Immutable"
        }
    }
}

impl fmt::Display for PropertyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain readability/writability of a property, independent of builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadWrite {
    /// Only a getter exists.
    ReadOnly,

    /// Getter and setter exist.
    ReadWrite,

    /// Only a setter exists.
    WriteOnly
}

impl ReadWrite {
    /// Combine getter/setter presence.
    ///
    /// Returns `None` when neither accessor exists.
    pub const fn from_access(readable: bool, writable: bool) -> Option<Self> {
        match (readable, writable) {
            (true, true) => Some(Self::ReadWrite),
            (true, false) => Some(Self::ReadOnly),
            (false, true) => Some(Self::WriteOnly),
            (false, false) => None
        }
    }

    /// Check if a getter exists.
    pub const fn is_readable(&self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    /// Check if a setter exists.
    pub const fn is_writable(&self) -> bool {
        !matches!(self, Self::ReadOnly)
    }

    /// Map to the property style of a mutable bean.
    pub const fn to_style(&self) -> PropertyStyle {
        match self {
            Self::ReadOnly => PropertyStyle::ReadOnly,
            Self::ReadWrite => PropertyStyle::ReadWrite,
            Self::WriteOnly => PropertyStyle::WriteOnly
        }
    }
}
