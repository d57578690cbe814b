// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared helpers for parsing and generation.
//!
//! # Submodules
//!
//! - [`docs`] — Doc comment extraction
//! - [`types`] — Type inspection and rendering to source text

pub mod docs;
pub mod types;
