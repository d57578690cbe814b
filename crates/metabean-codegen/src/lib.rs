// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Architecture
//!
//! ```text
//! metabean-codegen/src/
//! ├── lib.rs        - Crate root
//! ├── main.rs       - `metabean-gen` command line
//! ├── processor.rs  - File discovery and in-place regeneration
//! ├── region.rs     - AUTOGENERATED markers, splicing and imports
//! ├── parse/        - Bean attributes (darling)
//! ├── validate.rs   - Bean rules checked before generation
//! ├── model/        - Resolved generation model
//! ├── generate/     - Emitters for every generated item
//! ├── writer.rs     - Indented line buffer
//! ├── config.rs     - Ini profiles and run settings
//! ├── error.rs      - GenError
//! └── utils/        - Type and doc helpers
//! ```
//!
//! # Library Use
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use metabean_codegen::{config::GenSettings, processor::Processor};
//!
//! let processor = Processor::new(GenSettings::new());
//! let outcome = processor.process_file(Path::new("src/person.rs"))?;
//! ```
//!
//! The derive macros in `metabean` reuse [`generate::render`] with
//! [`generate::Mode::Derive`], so both paths produce the same items.

pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod parse;
pub mod processor;
pub mod region;
pub mod utils;
pub mod validate;
pub mod writer;
