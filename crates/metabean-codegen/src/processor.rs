// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-place regeneration of bean source files.
//!
//! # Flow
//!
//! ```text
//! read ─► parse (syn) ─► find bean ─► render (Mode::Source)
//!      ─► compare region ─► splice + imports ─► write
//! ```
//!
//! Errors abort the current file only; [`Processor::process_all`] collects
//! them and carries on with the next file.

use std::{
    fs,
    path::{Path, PathBuf}
};

use syn::{DeriveInput, Fields, File, Item, ItemStruct, Type, spanned::Spanned};
use tracing::{debug, error, info, trace};

use crate::{
    config::GenSettings,
    error::GenError,
    generate::{Mode, render},
    parse::find_bean,
    region::{self, Region}
};

/// Result of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file declares no bean.
    NotABean,
    /// The generated region is already current.
    Unchanged,
    /// The file was regenerated, or would be without writing enabled.
    Rewritten
}

/// Totals of a run over many files.
#[derive(Debug, Default)]
pub struct Summary {
    /// Bean files processed without error.
    pub processed: usize,
    /// Files whose content changed.
    pub changed:   usize,
    /// Per-file failures.
    pub errors:    Vec<GenError>
}

impl Summary {
    /// Check if no file failed.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Regenerates bean files with fixed settings.
#[derive(Debug, Clone)]
pub struct Processor {
    settings: GenSettings,
    write:    bool
}

impl Processor {
    /// Processor that writes changed files.
    pub fn new(settings: GenSettings) -> Self {
        Self {
            settings,
            write: true
        }
    }

    /// Enable or disable writing changed files.
    pub fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Regenerate `text`, the content of `file`.
    ///
    /// Returns `None` when the file declares no bean.
    ///
    /// # Errors
    ///
    /// Returns a [`GenError::Source`] for syntax errors, unpaired markers and
    /// invalid bean declarations.
    pub fn process_source(&self, file: &Path, text: &str) -> Result<Option<String>, GenError> {
        let split = region::split_lines(text);
        let lines: Vec<&str> = split.iter().map(|(line, _)| *line).collect();
        let parsed =
            syn::parse_file(&lines.join("\n")).map_err(|err| GenError::from_syn(file, &err))?;
        let Some(item) = find_bean(&parsed) else {
            trace!(file = %file.display(), "no bean");
            return Ok(None);
        };
        debug!(file = %file.display(), bean = %item.ident, "parse");

        let region = Region::find(&lines).map_err(|(line, message)| GenError::at(file, line, message))?;
        let supplied = supplied_traits(&parsed, item, region);
        let input = DeriveInput::from(item.clone());
        let generated = render(&input, &supplied, &self.settings, Mode::Source)
            .map_err(|err| GenError::from_darling(file, err))?;
        let body = generated.code.lines(self.settings.indent);
        debug!(file = %file.display(), lines = body.len(), "generate");

        let missing = region::missing_imports(&parsed, &generated.imports);
        if let Some(region) = region
            && missing.is_empty()
            && region::same_body(region.body(&lines), &body)
        {
            return Ok(Some(text.to_owned()));
        }

        let anchor = struct_end_line(item) - 1;
        let mut out = region::splice(&lines, region, anchor, &body);
        let (head_end, tail_start) = region::kept_bounds(lines.len(), region, anchor);
        let mut ends: Vec<Option<&str>> =
            split[..head_end].iter().map(|(_, end)| Some(*end)).collect();
        ends.resize(out.len() - (lines.len() - tail_start), None);
        ends.extend(split[tail_start..].iter().map(|(_, end)| Some(*end)));
        if !missing.is_empty() {
            let index = region::import_index(&parsed, item.span().start().line);
            out.insert(index, region::import_line(&missing));
            ends.insert(index, None);
            if out
                .get(index + 1)
                .is_some_and(|next| !next.trim().is_empty() && !next.starts_with("use "))
            {
                out.insert(index + 1, String::new());
                ends.insert(index + 1, None);
            }
        }

        let terminated = split.last().is_some_and(|(_, end)| !end.is_empty());
        Ok(Some(join_lines(&out, &ends, self.settings.eol.as_str(), terminated)))
    }

    /// Regenerate one file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] when reading or writing fails, and the
    /// errors of [`Processor::process_source`].
    pub fn process_file(&self, file: &Path) -> Result<FileOutcome, GenError> {
        let text = fs::read_to_string(file).map_err(|source| GenError::Io {
            file: file.to_path_buf(),
            source
        })?;
        let Some(rendered) = self.process_source(file, &text)? else {
            return Ok(FileOutcome::NotABean);
        };
        if rendered == text {
            debug!(file = %file.display(), "unchanged");
            return Ok(FileOutcome::Unchanged);
        }
        if self.write {
            fs::write(file, rendered).map_err(|source| GenError::Io {
                file: file.to_path_buf(),
                source
            })?;
            info!(file = %file.display(), "write");
        } else {
            info!(file = %file.display(), "would rewrite");
        }
        Ok(FileOutcome::Rewritten)
    }

    /// Regenerate every file, continuing past failures.
    pub fn process_all(&self, files: &[PathBuf]) -> Summary {
        let mut summary = Summary::default();
        for file in files {
            match self.process_file(file) {
                Ok(FileOutcome::NotABean) => {}
                Ok(FileOutcome::Unchanged) => summary.processed += 1,
                Ok(FileOutcome::Rewritten) => {
                    summary.processed += 1;
                    summary.changed += 1;
                }
                Err(err) => {
                    error!("{err}");
                    summary.errors.push(err);
                }
            }
        }
        summary
    }
}

/// Rust files at `path`: the file itself, or the files of a directory.
///
/// # Errors
///
/// Returns [`GenError::Pattern`] for paths that do not form a valid pattern
/// and [`GenError::Io`] for unreadable entries.
pub fn find_files(path: &Path, recursive: bool) -> Result<Vec<PathBuf>, GenError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let pattern = if recursive {
        format!("{}/**/*.rs", path.display())
    } else {
        format!("{}/*.rs", path.display())
    };
    let entries = glob::glob(&pattern).map_err(|err| GenError::Pattern {
        pattern: pattern.clone(),
        message: err.to_string()
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let file = entry.map_err(|err| GenError::Io {
            file:   err.path().to_path_buf(),
            source: err.into_error()
        })?;
        files.push(file);
    }
    files.sort();
    Ok(files)
}

/// Traits implemented for the bean by hand, outside the generated region.
fn supplied_traits(file: &File, bean: &ItemStruct, region: Option<Region>) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(item) => Some(item),
            _ => None
        })
        .filter(|item| {
            let line = item.impl_token.span.start().line;
            region.is_none_or(|region| !region.contains_line(line))
        })
        .filter(|item| match &*item.self_ty {
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == bean.ident),
            _ => false
        })
        .filter_map(|item| item.trait_.as_ref())
        .filter_map(|(_, path, _)| path.segments.last().map(|s| s.ident.to_string()))
        .collect()
}

/// Join output lines. Author lines keep their own terminator; generated
/// lines, and author lines that lost their place at the end of the file,
/// take `eol`. The last line is terminated only when the input was.
fn join_lines(out: &[String], ends: &[Option<&str>], eol: &str, terminated: bool) -> String {
    let last = out.len().saturating_sub(1);
    let mut rendered = String::new();
    for (index, (line, end)) in out.iter().zip(ends).enumerate() {
        rendered.push_str(line);
        match end {
            Some(end) if !end.is_empty() => rendered.push_str(end),
            _ if index < last || terminated => rendered.push_str(eol),
            _ => {}
        }
    }
    rendered
}

/// 1-based line of the bean's closing brace.
fn struct_end_line(item: &ItemStruct) -> usize {
    match &item.fields {
        Fields::Named(named) => named.brace_token.span.close().end().line,
        _ => item.span().end().line
    }
}
